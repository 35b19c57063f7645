//! # Construct Kinds
//!
//! Types that own the syntax knowledge of each structural construct, so the
//! parser cascade never hardcodes a delimiter itself.
//!
//! ## Types
//!
//! - **`DelimiterSpec`**: opener/closer token sequences of a span construct
//!   (bold, italic, spoiler, ... and caller-supplied ones)
//! - **`CodeBlock`**: fence search and language-specifier stripping
//! - **`BlockQuote`**: grouping of consecutive quote-prefixed lines

pub mod block_quote;
pub mod code_block;
pub mod delimiter;

pub use block_quote::BlockQuote;
pub use code_block::CodeBlock;
pub use delimiter::{DelimiterSpec, builtin_delimiters};
