//! Utility types and functions shared by the finite automata crates.
//!
//! Forbid unsafe code in this crate.
#![forbid(unsafe_code)]

mod tagged_index;
mod timing;

pub use random_test::*;
pub use tagged_index::*;
pub use timing::*;
