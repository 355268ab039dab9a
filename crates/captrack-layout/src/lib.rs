#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for layout lookup and validation.
pub mod errors;

/// The layout store and its point type.
pub mod store;

/// Built-in electrode position tables.
pub mod tables;

pub use errors::LayoutError;
pub use store::{Layout, LayoutPoint};
