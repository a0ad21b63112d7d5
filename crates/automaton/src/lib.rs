//!
//! A crate containing finite automata over the binary alphabet: the shared
//! description model, deterministic automata and non-deterministic automata
//! with epsilon transitions.
//!
//! This crate does not use unsafe code.

#![forbid(unsafe_code)]

mod description;
mod dfa;
mod error;
mod nfa;
mod random_automaton;
mod reachability;
mod state;
mod state_set;
mod symbol;

pub use description::*;
pub use dfa::*;
pub use error::*;
pub use nfa::*;
pub use random_automaton::*;
pub use reachability::*;
pub use state::*;
pub use state_set::*;
pub use symbol::*;
