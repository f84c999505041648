//! Static analytics dataset
//!
//! Split into the record types and the constants themselves

#[rustfmt::skip]
pub mod mock;
pub mod types;

pub use types::*;
