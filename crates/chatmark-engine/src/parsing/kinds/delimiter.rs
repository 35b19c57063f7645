use chatmark_syntax::{Token, TokenKind};
use log::debug;

use crate::{
    error::ParseError,
    parsing::{
        cursor::{find_kinds, starts_with_kinds},
        types::{Node, NodeKind},
    },
};

/// Opener and closer token sequences bounding a span construct.
///
/// A span needs at least one token between opener and closer. The closer is
/// the earliest occurrence after that first inner token, so `***x***` does
/// not become bold italics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterSpec {
    opener: Vec<TokenKind>,
    closer: Vec<TokenKind>,
    kind: NodeKind,
    name: Option<String>,
}

impl DelimiterSpec {
    /// A caller-supplied delimiter producing [`NodeKind::Custom`] nodes
    /// named `name`.
    pub fn new(
        name: impl Into<String>,
        opener: Vec<TokenKind>,
        closer: Vec<TokenKind>,
    ) -> Result<Self, ParseError> {
        let name = name.into();
        if opener.is_empty() {
            return Err(ParseError::EmptyOpener(name));
        }
        if closer.is_empty() {
            return Err(ParseError::EmptyCloser(name));
        }
        debug!("custom delimiter {name}: {opener:?} .. {closer:?}");
        Ok(Self {
            opener,
            closer,
            kind: NodeKind::Custom,
            name: Some(name),
        })
    }

    /// A caller-supplied delimiter made of one opening and one closing token.
    pub fn pair(name: impl Into<String>, open: TokenKind, close: TokenKind) -> Self {
        Self {
            opener: vec![open],
            closer: vec![close],
            kind: NodeKind::Custom,
            name: Some(name.into()),
        }
    }

    fn symmetric(delimiter: &[TokenKind], kind: NodeKind) -> Self {
        Self {
            opener: delimiter.to_vec(),
            closer: delimiter.to_vec(),
            kind,
            name: None,
        }
    }

    pub fn opener(&self) -> &[TokenKind] {
        &self.opener
    }

    pub fn closer(&self) -> &[TokenKind] {
        &self.closer
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Tries this delimiter at the start of `tokens`.
    ///
    /// Returns the number of inner tokens between opener and closer.
    pub fn match_at(&self, tokens: &[Token<'_>]) -> Option<usize> {
        let open = self.opener.len();
        if tokens.len() < open + 1 + self.closer.len() {
            return None;
        }
        if !starts_with_kinds(tokens, &self.opener) {
            return None;
        }
        // the first inner token is never a closer candidate
        find_kinds(&tokens[open + 1..], &self.closer).map(|at| at + 1)
    }

    /// Wraps parsed inner nodes in a node of this delimiter's kind.
    pub fn build(&self, children: Vec<Node>) -> Node {
        let node = Node::with_children(self.kind, children);
        match &self.name {
            Some(name) => node.with_name(name.clone()),
            None => node,
        }
    }
}

/// The built-in span constructs, in the order they are tried.
pub fn builtin_delimiters() -> Vec<DelimiterSpec> {
    use TokenKind::*;
    vec![
        DelimiterSpec::symmetric(&[Star, Star], NodeKind::Bold),
        DelimiterSpec::symmetric(&[Underscore, Underscore], NodeKind::Underline),
        DelimiterSpec::symmetric(&[Tilde, Tilde], NodeKind::Strikethrough),
        DelimiterSpec::symmetric(&[Star], NodeKind::Italic),
        DelimiterSpec::symmetric(&[Underscore], NodeKind::Italic),
        DelimiterSpec::symmetric(&[SpoilerDelimiter], NodeKind::Spoiler),
        DelimiterSpec::symmetric(&[CodeInlineDelimiter], NodeKind::CodeInline),
    ]
}
