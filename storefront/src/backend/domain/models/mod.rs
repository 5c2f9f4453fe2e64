//! Domain models for the storefront: money, the product catalog, order state
//! and the domain error type.

pub mod catalog;
pub mod error;
pub mod money;
pub mod order;

pub use catalog::*;
pub use error::*;
pub use money::*;
pub use order::*;
