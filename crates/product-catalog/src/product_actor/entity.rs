//! ActorEntity trait implementation for the Product record.
//!
//! This module contains the [`ActorEntity`] implementation that lets [`Product`] be kept by
//! the generic [`resource_actor::ResourceActor`].
//!
//! No product operation can be refused once it reaches the store, so the entity error is
//! [`Infallible`]. Not-found and channel failures surface through
//! [`ProductError`](super::ProductError) on the client side.

use super::actions::ProductAction;
use crate::model::{Product, ProductFilter, ProductId, ProductReplace};
use resource_actor::ActorEntity;
use std::convert::Infallible;

impl ActorEntity for Product {
    type Id = ProductId;
    type Create = Product;
    type Replace = ProductReplace;
    type Filter = ProductFilter;
    type Action = ProductAction;
    type Error = Infallible;

    fn has_id(&self, id: &ProductId) -> bool {
        Product::has_id(self, id)
    }

    /// Inserts store the body exactly as posted, unknown keys included.
    fn from_create_params(params: Product) -> Result<Self, Infallible> {
        Ok(params)
    }

    /// Replacements keep only the recognized fields; the id always comes from the path.
    fn from_replace_params(id: ProductId, params: ProductReplace) -> Result<Self, Infallible> {
        Ok(params.into_product(id))
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        filter.matches(self)
    }

    /// Handles custom actions for the Product record.
    ///
    /// # Actions
    /// - `SetPrice`: price becomes the given value
    /// - `AdjustStock`: quantity (missing counts as 0) moves by the delta, saturating at the
    ///   `i64` bounds
    fn handle_action(&mut self, action: ProductAction) -> Result<(), Infallible> {
        match action {
            ProductAction::SetPrice(price) => self.set_price(price),
            ProductAction::AdjustStock(delta) => self.adjust_stock(delta),
        }
        Ok(())
    }
}
