//! # Resource Actor
//!
//! Building blocks for an in-memory repository owned by a single Tokio task.
//!
//! A [`ResourceActor`] keeps an **ordered** `Vec` of records and applies repository operations
//! (insert, list with a filter, get, replace, delete, custom actions) to it one message at a
//! time. Callers hold a cheap, cloneable [`ResourceClient`] and never touch the store directly.
//!
//! ## Why an actor?
//!
//! - **Single writer**: the store has exactly one owner, so concurrent requests cannot corrupt
//!   it and no lock has to be held across an operation.
//! - **Explicit wiring**: the client is passed to whoever needs the store; there is no global
//!   state, and every test can build an isolated store.
//! - **Backpressure**: the request channel is bounded.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - how a record is addressed, filtered, built and mutated
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing over the ordered store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! ## Lookup semantics
//!
//! Ids are supplied by the records themselves and are not required to be unique:
//!
//! - `get`, `replace` and `perform_action` address the **first** record in insertion order;
//! - `delete` removes **every** addressed record and never reports "not found";
//! - `list` preserves insertion order.
//!
//! ## Testing
//!
//! See the [`mock`] module for [`mock::MockClient`] and the request inspection helpers.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
