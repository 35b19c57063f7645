use chatmark_syntax::Token;
use log::{debug, trace};

use super::{
    cursor::TokenCursor,
    kinds::{BlockQuote, CodeBlock, DelimiterSpec, builtin_delimiters},
    leaf::leaf_node,
    merge::merge_adjacent_text,
    types::{Node, NodeKind},
};

/// Nesting depth beyond which span and quote constructs are no longer
/// recognised.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Structural parser turning a token sequence into a tree of [`Node`]s.
///
/// Holds the ordered delimiter table (custom delimiters ahead of the
/// built-in ones) and the nesting limit.
#[derive(Debug, Clone)]
pub struct TokenParser {
    delimiters: Vec<DelimiterSpec>,
    custom_count: usize,
    max_depth: usize,
}

impl Default for TokenParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenParser {
    /// A parser with the built-in delimiters only.
    pub fn new() -> Self {
        Self {
            delimiters: builtin_delimiters(),
            custom_count: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Adds a custom delimiter, tried after earlier custom delimiters and
    /// before every built-in one.
    pub fn with_delimiter(mut self, spec: DelimiterSpec) -> Self {
        self.delimiters.insert(self.custom_count, spec);
        self.custom_count += 1;
        self
    }

    pub fn with_delimiters(self, specs: impl IntoIterator<Item = DelimiterSpec>) -> Self {
        specs.into_iter().fold(self, Self::with_delimiter)
    }

    /// Sets the nesting limit. At the limit, the tokens of span and quote
    /// constructs are kept as text.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// All delimiters in the order they are tried.
    pub fn delimiters(&self) -> &[DelimiterSpec] {
        &self.delimiters
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parses `tokens` and merges adjacent text nodes at every level.
    ///
    /// With `in_quote` set, quote prefixes are treated as text.
    pub fn parse(&self, tokens: &[Token<'_>], in_quote: bool) -> Vec<Node> {
        merge_adjacent_text(self.parse_nodes(tokens, in_quote, 0))
    }

    /// Produces nodes for `tokens` without merging text.
    ///
    /// At each position the first construct that matches wins: leaf token,
    /// span, code block, quote block, and finally the token itself as text.
    fn parse_nodes(&self, tokens: &[Token<'_>], in_quote: bool, depth: usize) -> Vec<Node> {
        let mut cur = TokenCursor::new(tokens);
        let mut out = Vec::new();

        let can_nest = depth < self.max_depth;

        while let Some(token) = cur.peek() {
            if let Some(node) = leaf_node(token) {
                out.push(node);
                cur.bump();
                continue;
            }

            if can_nest && let Some((node, consumed)) = self.try_parse_span(cur.rest(), in_quote, depth) {
                out.push(node);
                cur.bump_n(consumed);
                continue;
            }

            if let Some((node, consumed)) = CodeBlock::parse(cur.rest()) {
                out.push(node);
                cur.bump_n(consumed);
                continue;
            }

            if can_nest
                && !in_quote
                && let Some((content, consumed)) = BlockQuote::collect(cur.rest())
            {
                let children = self.parse_nodes(&content, true, depth + 1);
                out.push(Node::with_children(NodeKind::QuoteBlock, children));
                cur.bump_n(consumed);
                continue;
            }

            if !can_nest && self.would_nest(cur.rest(), in_quote) {
                debug!(
                    "nesting limit {} reached, {} at token {} kept as text",
                    self.max_depth,
                    token.kind,
                    cur.pos()
                );
            } else {
                trace!("{} at token {} kept as text", token.kind, cur.pos());
            }
            out.push(Node::text(token.text));
            cur.bump();
        }

        out
    }

    /// Whether a span or quote would start at `tokens` if nesting were
    /// allowed.
    fn would_nest(&self, tokens: &[Token<'_>], in_quote: bool) -> bool {
        self.delimiters.iter().any(|spec| spec.match_at(tokens).is_some())
            || (!in_quote && BlockQuote::collect(tokens).is_some())
    }

    /// Tries every delimiter in order at the start of `tokens`.
    fn try_parse_span(
        &self,
        tokens: &[Token<'_>],
        in_quote: bool,
        depth: usize,
    ) -> Option<(Node, usize)> {
        self.delimiters.iter().find_map(|spec| {
            let inner = spec.match_at(tokens)?;
            let open = spec.opener().len();
            let children = self.parse_nodes(&tokens[open..open + inner], in_quote, depth + 1);
            Some((spec.build(children), open + inner + spec.closer().len()))
        })
    }
}

/// Parses `tokens` with the built-in delimiters preceded by `custom`.
pub fn parse_tokens(tokens: &[Token<'_>], in_quote: bool, custom: &[DelimiterSpec]) -> Vec<Node> {
    TokenParser::new()
        .with_delimiters(custom.iter().cloned())
        .parse(tokens, in_quote)
}
