//! Domain types for Woodash.

mod order;
mod product;
mod response;
mod store;

pub use order::*;
pub use product::*;
pub use response::*;
pub use store::*;
