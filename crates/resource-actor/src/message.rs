//! # Generic Messages
//!
//! Message types exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to the actor.
///
/// Each variant is one repository operation over the whole ordered store. The actor
/// answers on `respond_to` once the operation has been applied, so a caller never sees
/// a half-applied mutation.
///
/// - **Create**: appends a record built from [`ActorEntity::Create`] and returns it.
/// - **List**: returns, in insertion order, every record matching [`ActorEntity::Filter`].
/// - **Get**: returns the first record addressed by the id, if any.
/// - **Replace**: overwrites the first addressed record with one built from [`ActorEntity::Replace`].
/// - **Delete**: removes every addressed record and returns how many were removed.
/// - **Action**: applies an [`ActorEntity::Action`] to the first addressed record and returns it.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    List {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Replace {
        id: T::Id,
        params: T::Replace,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<usize>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T>,
    },
}
