use chatmark_syntax::{LexRule, Lexer, Token};
use serde_json::{Map, Value};

use crate::parsing::{DelimiterSpec, Node, TokenParser};

/// A tokenizer and parser configured together.
///
/// Custom lexing rules usually exist to feed custom delimiters, so both are
/// registered here.
#[derive(Debug, Clone, Default)]
pub struct Dialect {
    lexer: Lexer,
    parser: TokenParser,
}

impl Dialect {
    /// The built-in dialect.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, rule: LexRule) -> Self {
        self.lexer = self.lexer.with_rule(rule);
        self
    }

    pub fn with_delimiter(mut self, spec: DelimiterSpec) -> Self {
        self.parser = self.parser.with_delimiter(spec);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.parser = self.parser.with_max_depth(max_depth);
        self
    }

    pub fn lexer(&self) -> &Lexer {
        &self.lexer
    }

    pub fn parser(&self) -> &TokenParser {
        &self.parser
    }

    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        self.lexer.tokenize(text)
    }

    pub fn parse(&self, text: &str) -> Vec<Node> {
        self.parser.parse(&self.tokenize(text), false)
    }

    pub fn parse_to_maps(&self, text: &str) -> Vec<Map<String, Value>> {
        self.parse(text).iter().map(Node::to_generic_map).collect()
    }
}

/// Parses a message with the built-in dialect.
pub fn parse(text: &str) -> Vec<Node> {
    Dialect::new().parse(text)
}

/// Parses a message with the built-in dialect into generic maps.
pub fn parse_to_maps(text: &str) -> Vec<Map<String, Value>> {
    Dialect::new().parse_to_maps(text)
}
