use thiserror::Error;

/// Errors raised while constructing or running a deterministic automaton.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("Malformed description: {0}")]
    MalformedDescription(String),

    #[error("Undefined transition from state {state} on symbol {symbol:?}")]
    UndefinedTransition { state: String, symbol: char },
}
