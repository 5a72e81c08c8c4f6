//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract a record type must implement to be kept in a
//! `ResourceActor`'s ordered store. It names the payloads for insertion and full replacement,
//! the filter used by listings, the custom actions that mutate a record in place, and the
//! error type those conversions may produce.
//!
//! # Architecture Note
//! The actor never inspects a record directly. It asks the record whether it carries a given
//! id ([`ActorEntity::has_id`]) and whether it passes a filter ([`ActorEntity::matches`]).
//! That keeps lookup semantics (for example, ids that never match anything) inside the
//! domain type, and lets the actor loop stay generic.
//!
//! Ids are supplied by the caller, not generated. Nothing stops two records from sharing an
//! id: lookups see the first one in insertion order, deletes remove all of them.

use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by `ResourceActor`.
///
/// # Associated Types
/// Associated types keep every request type-safe: a `Product` store takes a
/// `Product::Replace` payload and nothing else.
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// The key used to address records (e.g. a path parameter).
    type Id: Clone + Send + Sync + Display + Debug;

    /// The payload stored by an insert.
    type Create: Send + Sync + Debug;

    /// The payload that fully replaces an existing record.
    type Replace: Send + Sync + Debug;

    /// Predicate data for listings. Every record is tested against it in order.
    type Filter: Send + Sync + Debug;

    /// Enum representing record-specific mutations (e.g. `SetPrice`).
    type Action: Send + Sync + Debug;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns `true` when this record is addressed by `id`.
    fn has_id(&self, id: &Self::Id) -> bool;

    /// Builds the record stored by an insert.
    fn from_create_params(params: Self::Create) -> Result<Self, Self::Error>;

    /// Builds the record that replaces the one currently addressed by `id`.
    fn from_replace_params(id: Self::Id, params: Self::Replace) -> Result<Self, Self::Error>;

    /// Returns `true` when this record passes `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Applies a custom action to this record in place.
    fn handle_action(&mut self, action: Self::Action) -> Result<(), Self::Error>;
}
