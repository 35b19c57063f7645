//! # Lexer - Tokenizing Chat Markdown
//!
//! This module is the first stage of the pipeline: it breaks a message into
//! a flat sequence of typed tokens.
//!
//! ## First Match Wins
//!
//! At every cursor position the rules are tried in a fixed order: custom
//! rules first (in the order they were added), then the built-in table from
//! [`crate::rules`]. Each rule is anchored at the cursor. The first rule that
//! matches wins, regardless of whether a later rule would match more text.
//! Rule order is what encodes precedence:
//!
//! - mentions are checked before emoji, so `<@123>` is never read as text
//! - `[label](url)` is checked before the bare url, so the url inside a
//!   masked link is not claimed on its own
//!
//! ## Plain Text
//!
//! When no rule matches, the character at the cursor is added to a pending
//! text run. The run is emitted as a single [`TokenKind::PlainText`] token
//! right before the next matched token, or at end of input:
//!
//! ```
//! use chatmark_syntax::{lexer::tokenize, TokenKind};
//!
//! let tokens = tokenize("hello *world*");
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::PlainText,
//!         TokenKind::Star,
//!         TokenKind::PlainText,
//!         TokenKind::Star,
//!     ]
//! );
//! ```
//!
//! ## The Lossless Guarantee
//!
//! Tokenizing never fails, and every byte of the input appears in exactly one
//! token, so concatenating the token texts reproduces the input.

use log::{debug, trace};
use regex::Regex;

use crate::{error::LexError, rules::builtin_rules, token_kind::TokenKind};

/// A lexed token: its kind, the matched text, and the rule's capture groups.
///
/// `captures` holds one entry per capture group of the rule's pattern, `None`
/// for an optional group that did not participate in the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub captures: Vec<Option<&'a str>>,
}

impl<'a> Token<'a> {
    /// A token without captures.
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Self {
            kind,
            text,
            captures: Vec::new(),
        }
    }

    /// Returns capture group `index` (0-based, excluding the whole match).
    pub fn capture(&self, index: usize) -> Option<&'a str> {
        self.captures.get(index).copied().flatten()
    }

    pub fn is(&self, kind: &TokenKind) -> bool {
        &self.kind == kind
    }
}

/// A pattern anchored at the cursor, paired with the kind it produces.
#[derive(Debug, Clone)]
pub struct LexRule {
    kind: TokenKind,
    regex: Regex,
}

impl LexRule {
    /// Builds a caller-supplied rule producing [`TokenKind::Custom`] tokens.
    ///
    /// `pattern` is a [`regex`] pattern; it is anchored at the cursor, so it
    /// must not start with `^` to be meaningful. Names of built-in kinds are
    /// rejected so that tags stay unambiguous.
    pub fn custom(name: &str, pattern: &str) -> Result<Self, LexError> {
        if name.is_empty() {
            return Err(LexError::EmptyName);
        }
        if TokenKind::builtin_from_name(name).is_some() {
            return Err(LexError::ReservedName(name.to_string()));
        }
        let regex = Self::compile(pattern).map_err(|source| LexError::InvalidPattern {
            name: name.to_string(),
            source,
        })?;
        Ok(Self {
            kind: TokenKind::custom(name),
            regex,
        })
    }

    pub(crate) fn builtin(kind: TokenKind, pattern: &str) -> Self {
        let regex = Self::compile(pattern).expect("Invalid built-in lexing pattern");
        Self { kind, regex }
    }

    fn compile(pattern: &str) -> Result<Regex, regex::Error> {
        Regex::new(&format!("^(?:{pattern})"))
    }

    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Matches this rule against the start of `rest`.
    ///
    /// An empty match counts as no match: the cursor must always advance.
    pub fn match_prefix<'a>(&self, rest: &'a str) -> Option<Token<'a>> {
        let caps = self.regex.captures(rest)?;
        let whole = caps.get(0)?;
        if whole.is_empty() {
            return None;
        }
        Some(Token {
            kind: self.kind.clone(),
            text: whole.as_str(),
            captures: caps.iter().skip(1).map(|m| m.map(|m| m.as_str())).collect(),
        })
    }
}

/// Tokenizer holding the custom rules to try ahead of the built-in table.
#[derive(Debug, Clone, Default)]
pub struct Lexer {
    custom: Vec<LexRule>,
}

impl Lexer {
    /// A lexer with only the built-in rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a custom rule after any previously added ones.
    pub fn with_rule(mut self, rule: LexRule) -> Self {
        debug!("registering custom lexing rule {}", rule.kind());
        self.custom.push(rule);
        self
    }

    pub fn with_rules(self, rules: impl IntoIterator<Item = LexRule>) -> Self {
        rules.into_iter().fold(self, Self::with_rule)
    }

    pub fn custom_rules(&self) -> &[LexRule] {
        &self.custom
    }

    /// All rules in precedence order.
    pub fn rules(&self) -> impl Iterator<Item = &LexRule> {
        self.custom.iter().chain(builtin_rules())
    }

    /// Tokenizes `input` left to right. Never fails.
    pub fn tokenize<'a>(&self, input: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        let mut pos = 0;
        let mut text_start = 0;

        // Helper to flush the pending plain-text run
        fn flush_text<'a>(tokens: &mut Vec<Token<'a>>, text: &'a str) {
            if !text.is_empty() {
                tokens.push(Token::new(TokenKind::PlainText, text));
            }
        }

        while pos < input.len() {
            let rest = &input[pos..];
            match self.rules().find_map(|rule| rule.match_prefix(rest)) {
                Some(token) => {
                    trace!("{} at byte {pos}: {:?}", token.kind, token.text);
                    flush_text(&mut tokens, &input[text_start..pos]);
                    pos += token.text.len();
                    text_start = pos;
                    tokens.push(token);
                }
                None => {
                    pos += rest.chars().next().map_or(1, char::len_utf8);
                }
            }
        }

        flush_text(&mut tokens, &input[text_start..]);
        tokens
    }
}

/// Tokenizes `input` with the built-in rules only.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new().tokenize(input)
}
