//! # Product Catalog
//!
//! An in-memory product catalog served over HTTP.
//!
//! ## Core Components
//!
//! - **[model]**: The [`Product`](model::Product) record, its id, replacement payload and
//!   listing filter.
//! - **[product_actor]**: The [`ActorEntity`](resource_actor::ActorEntity) implementation and
//!   the price and stock actions.
//! - **[clients]**: [`ProductClient`](clients::ProductClient), a type-safe wrapper that hides
//!   the message passing.
//! - **[http]**: The axum router, handlers and error mapping.
//! - **[lifecycle]**: Tracing setup and [`ProductSystem`](lifecycle::ProductSystem), which
//!   owns the running actor.
//! - **[config]**: Command-line and environment settings.
//!
//! ## Testing
//!
//! Handlers can be exercised against a real store through [`lifecycle::ProductSystem`], or
//! against scripted answers with [`resource_actor::mock::MockClient`].

pub mod clients;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
