//! Pure data structures for the catalog and the lenient number parsing used at its edges.

pub mod lenient;
pub mod product;

pub use product::*;
