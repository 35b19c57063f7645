//! # chatmark-engine
//!
//! Structural parser for the chat markdown dialect. Consumes the tokens of
//! `chatmark-syntax` and builds a tree of [`Node`]s ready for rendering.
//!
//! ```
//! use chatmark_engine::{parse, Node, NodeKind};
//!
//! let nodes = parse("*a~~b~~c*d");
//! assert_eq!(nodes[0].kind, NodeKind::Italic);
//! assert_eq!(nodes[1], Node::text("d"));
//! ```

pub mod dialect;
pub mod error;
pub mod parsing;

// Re-export key types for easier usage
pub use dialect::{Dialect, parse, parse_to_maps};
pub use error::ParseError;
pub use parsing::{DEFAULT_MAX_DEPTH, DelimiterSpec, Node, NodeKind, TokenParser, parse_tokens};
