//! Typed failures
//!
//! Each failure domain has its own enum; the orchestrator converts every
//! variant into a fixed user-visible reply, so none of these cross the HTTP
//! boundary as a server error.

use thiserror::Error;

/// Remote chat API failures (Perplexity). One variant per distinct failure
/// class so each maps to its own diagnostic message.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API key missing")]
    MissingCredential,

    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed API response: {0}")]
    Decode(String),
}

/// Sandboxed arithmetic evaluator failures
#[derive(Error, Debug, PartialEq)]
pub enum MathError {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),

    #[error("unexpected token at position {0}")]
    UnexpectedToken(usize),

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unbalanced parentheses")]
    UnbalancedParens,

    #[error("division by zero")]
    DivisionByZero,
}
