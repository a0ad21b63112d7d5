#![doc = include_str!("../README.md")]

mod compare;
mod partition;
mod quotient;
mod reduce;
mod signature_refinement;

pub use compare::*;
pub use partition::*;
pub use quotient::*;
pub use reduce::*;
pub use signature_refinement::*;
