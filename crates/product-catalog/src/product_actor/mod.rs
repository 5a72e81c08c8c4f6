//! # Product Actor
//!
//! The product store: a [`ResourceActor`] over [`Product`] records.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] for type-safe error handling
//! - [`actions`] - [`ProductAction`] for price and stock updates
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use product_catalog::clients::ProductClient;
//! use product_catalog::model::{Product, ProductId};
//! use product_catalog::product_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new(32);
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run());
//!
//!     let mouse = Product {
//!         id: Some(1),
//!         name: Some("Mouse".to_string()),
//!         quantity: Some(5),
//!         ..Product::default()
//!     };
//!     client.create_product(mouse).await?;
//!
//!     let updated = client.adjust_stock(ProductId::new(1), -2).await?;
//!     assert_eq!(updated.quantity, Some(3));
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Product;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Product actor and its client.
pub fn new(channel_capacity: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(channel_capacity)
}
