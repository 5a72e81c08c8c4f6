//! Custom actions for the Product actor.
//!
//! These are the partial updates that go beyond full replacement: setting the price and
//! moving stock up or down. They are handled by
//! [`ActorEntity::handle_action`](resource_actor::ActorEntity::handle_action).

/// Custom actions for Product records.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Overwrites the price with an absolute value.
    SetPrice(f64),
    /// Adds a signed delta to the stock quantity.
    ///
    /// A record without a quantity is treated as holding zero units. The result is not
    /// clamped at zero, so stock may go negative.
    AdjustStock(i64),
}
