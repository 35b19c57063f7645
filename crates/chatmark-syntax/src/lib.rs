//! # chatmark-syntax
//!
//! Tokenizer for the chat markdown dialect: mentions, emoji, urls, emphasis,
//! spoilers, code and block quotes.
//!
//! ## Architecture Overview
//!
//! The full pipeline has two stages; this crate is the first:
//!
//! ```text
//! Message Text → Lexer → Tokens → Parser → Nodes
//!               (this crate)     (chatmark-engine)
//! ```
//!
//! The lexer knows nothing about structure. It does not know whether a `*`
//! opens italics or is a lone asterisk; that is decided by the parser.
//!
//! ## Module Structure
//!
//! ```text
//! chatmark-syntax/
//! ├── lib.rs         # This file - public API
//! ├── token_kind.rs  # TokenKind enum and its stable tags
//! ├── rules.rs       # Built-in lexing rules in precedence order
//! ├── lexer.rs       # Token, LexRule, Lexer, tokenize()
//! └── error.rs       # LexError for invalid custom rules
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chatmark_syntax::{tokenize, TokenKind};
//!
//! let tokens = tokenize("hi <@123456789012345678>");
//! assert_eq!(tokens[1].kind, TokenKind::UserMention);
//! assert_eq!(tokens[1].capture(0), Some("123456789012345678"));
//! ```
//!
//! ## Custom Rules
//!
//! Extra rules are tried before the built-in table, in the order given:
//!
//! ```
//! use chatmark_syntax::{LexRule, Lexer, TokenKind};
//!
//! let lexer = Lexer::new().with_rule(LexRule::custom("CARET", r"\^").unwrap());
//! let tokens = lexer.tokenize("x^2");
//! assert_eq!(tokens[1].kind, TokenKind::custom("CARET"));
//! ```

pub mod error;
pub mod lexer;
pub mod rules;
pub mod token_kind;

pub use error::LexError;
pub use lexer::{LexRule, Lexer, Token, tokenize};
pub use token_kind::TokenKind;
