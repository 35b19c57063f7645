use chatmark_syntax::{Token, TokenKind};

/// Block quote type owning the line-grouping rules.
///
/// A quote is a run of consecutive lines that each start with a quote
/// prefix. Quotes never nest: the parser disables quote detection inside
/// one.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: TokenKind = TokenKind::QuoteLinePrefix;

    /// Collects the content of the quote starting at `tokens[0]`.
    ///
    /// Each line contributes everything after its prefix up to and including
    /// its newline; a final line without a newline takes all remaining tokens.
    /// Grouping stops at the first line that does not start with a prefix.
    ///
    /// Returns the content tokens and the number of tokens consumed, or
    /// `None` if nothing was collected.
    pub fn collect<'a>(tokens: &[Token<'a>]) -> Option<(Vec<Token<'a>>, usize)> {
        let mut content = Vec::new();
        let mut i = 0;

        while tokens.get(i).is_some_and(|t| t.is(&Self::PREFIX)) {
            let line = &tokens[i + 1..];
            match line.iter().position(|t| t.is(&TokenKind::Newline)) {
                Some(newline) => {
                    content.extend_from_slice(&line[..=newline]);
                    i += newline + 2;
                }
                None => {
                    content.extend_from_slice(line);
                    i = tokens.len();
                }
            }
        }

        if content.is_empty() {
            return None;
        }
        Some((content, i))
    }
}
