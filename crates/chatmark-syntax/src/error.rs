use thiserror::Error;

/// Raised when a caller-supplied lexing rule cannot be used.
///
/// Tokenizing itself never fails; these errors surface when rules are built.
#[derive(Debug, Error)]
pub enum LexError {
    #[error("custom rule name must not be empty")]
    EmptyName,

    #[error("custom rule name `{0}` is reserved for a built-in rule")]
    ReservedName(String),

    #[error("invalid pattern for rule `{name}`: {source}")]
    InvalidPattern { name: String, source: regex::Error },
}
