use thiserror::Error;

/// Raised when a caller-supplied delimiter cannot be used.
///
/// Parsing itself never fails: unterminated constructs degrade to text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("delimiter `{0}` has an empty opener")]
    EmptyOpener(String),

    #[error("delimiter `{0}` has an empty closer")]
    EmptyCloser(String),
}
