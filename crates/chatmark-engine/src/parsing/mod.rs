//! # Structural Parsing
//!
//! Turns the flat token sequence from `chatmark-syntax` into a tree of
//! [`Node`]s.
//!
//! ## Architecture
//!
//! A single forward cursor walks the tokens. At each position a fixed
//! cascade is tried and the first construct that matches is committed:
//!
//! 1. **Leaf tokens** (text, mentions, emoji, timestamps, urls): one token,
//!    one node
//! 2. **Spans** (bold, underline, strikethrough, italic, spoiler, inline
//!    code, custom delimiters): the inner tokens are parsed recursively
//! 3. **Code blocks**: literal content with an optional language tag
//! 4. **Quote blocks**: consecutive quote-prefixed lines, parsed recursively
//!    with quote detection disabled
//! 5. **Fallback**: the token becomes a Text node
//!
//! A final pass merges adjacent Text siblings at every level.
//!
//! ## Modules
//!
//! - **`types`**: `Node` and `NodeKind`
//! - **`kinds`**: `DelimiterSpec`, `CodeBlock`, `BlockQuote` with owned syntax rules
//! - **`cursor`**: `TokenCursor` and token-kind sequence search
//! - **`leaf`**: one-token leaf nodes and their CDN urls
//! - **`parser`**: `TokenParser` and `parse_tokens()`
//! - **`merge`**: adjacent-text merge pass
//! - **`serialize`**: `Node::to_generic_map()`
//!
//! ## Nesting
//!
//! Spans nest fully or not at all. The closer search only looks inside one
//! attempt's window and recursion only sees the exact inner slice, so a
//! partially overlapping delimiter is left as text:
//! `*a~~bc*d~~` is italic `a~~bc` followed by text `d~~`.
//!
//! ## Robustness
//!
//! Nothing here fails. Unterminated constructs fall through to text, and
//! [`TokenParser::with_max_depth`] bounds recursion.

pub mod cursor;
pub mod kinds;
pub mod leaf;
pub mod merge;
pub mod parser;
pub mod serialize;
pub mod types;

#[cfg(test)]
mod tests;

pub use kinds::DelimiterSpec;
pub use merge::merge_adjacent_text;
pub use parser::{DEFAULT_MAX_DEPTH, TokenParser, parse_tokens};
pub use types::{Node, NodeKind};
