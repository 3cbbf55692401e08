//! Error types

mod catalog;
mod field;

pub use catalog::*;
pub use field::*;
