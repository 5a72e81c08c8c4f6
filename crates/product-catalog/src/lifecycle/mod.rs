//! Process lifecycle: tracing setup and the running product system.

pub mod product_system;
pub mod tracing;

pub use product_system::ProductSystem;
pub use self::tracing::setup_tracing;
