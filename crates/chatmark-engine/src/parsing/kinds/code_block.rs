use chatmark_syntax::{Token, TokenKind};

use crate::parsing::types::{Node, NodeKind};

/// Fenced code block type owning the fence and language-specifier rules.
///
/// Code blocks are literal: no markdown is recognised inside, and fences do
/// not nest.
pub struct CodeBlock;

impl CodeBlock {
    pub const FENCE: TokenKind = TokenKind::CodeBlockDelimiter;

    /// Tries a code block at the start of `tokens`.
    ///
    /// Returns the node and the number of tokens consumed (both fences
    /// included), or `None` if `tokens` does not start with an opening fence
    /// that has a matching closing fence.
    pub fn parse(tokens: &[Token<'_>]) -> Option<(Node, usize)> {
        let (first, rest) = tokens.split_first()?;
        if !first.is(&Self::FENCE) {
            return None;
        }
        let close = rest.iter().position(|t| t.is(&Self::FENCE))?;
        let raw: String = rest[..close].iter().map(|t| t.text).collect();

        let (lang, content) = Self::split_language(&raw);
        let mut node = Node::new(NodeKind::CodeBlock).with_text_content(content);
        if let Some(lang) = lang {
            node = node.with_name(lang);
        }
        Some((node, close + 2))
    }

    /// Separates an optional language specifier from the code.
    ///
    /// The first line is a specifier only when it consists of `[A-Za-z0-9-]`
    /// and some later line is non-empty. Such a first line is dropped even
    /// when empty, so a fence followed directly by a newline does not leave
    /// a leading blank line. One trailing newline before the closing fence is
    /// dropped as well.
    pub fn split_language(raw: &str) -> (Option<&str>, String) {
        let lines: Vec<&str> = raw.split('\n').collect();
        let mut lang = None;
        let mut body = &lines[..];

        if lines[1..].iter().any(|line| !line.is_empty()) {
            let first = lines[0];
            if first.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                body = &lines[1..];
                lang = (!first.is_empty()).then_some(first);
            }
        }

        let mut content = body.join("\n");
        if content.ends_with('\n') {
            content.pop();
        }
        (lang, content)
    }
}
