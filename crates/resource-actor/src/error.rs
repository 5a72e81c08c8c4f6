//! # Framework Errors
//!
//! What a [`ResourceClient`](crate::ResourceClient) call can fail with. The first two variants
//! mean the actor task is gone; the others are answers from a running actor.

use std::error::Error;

/// Errors returned by [`ResourceClient`](crate::ResourceClient) calls.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// Every actor task has stopped and the request channel is closed.
    #[error("Actor closed")]
    ActorClosed,

    /// The actor dropped the reply without answering.
    #[error("Actor dropped response channel")]
    ActorDropped,

    /// No record carries the id, rendered through its `Display`. Deletes never report it.
    #[error("Item not found: {0}")]
    NotFound(String),

    /// The entity refused to build or mutate a record. Entities whose `Error` is
    /// [`Infallible`](std::convert::Infallible) never produce it.
    #[error("{operation} rejected: {source}")]
    Rejected {
        operation: &'static str,
        source: Box<dyn Error + Send + Sync>,
    },
}

impl FrameworkError {
    pub fn rejected(operation: &'static str, e: impl Error + Send + Sync + 'static) -> Self {
        FrameworkError::Rejected {
            operation,
            source: Box::new(e),
        }
    }
}
