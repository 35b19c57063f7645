use chatmark_syntax::{Token, TokenKind};

/// A forward-only cursor over a token slice.
///
/// Mirrors the position model of the parser: one index that only moves
/// forward, by however many tokens a construct consumed.
#[derive(Clone)]
pub struct TokenCursor<'t, 'a> {
    /// The tokens being parsed.
    pub tokens: &'t [Token<'a>],
    /// Current index into `tokens`.
    pub i: usize,
}

impl<'t, 'a> TokenCursor<'t, 'a> {
    pub fn new(tokens: &'t [Token<'a>]) -> Self {
        Self { tokens, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    /// Peeks at the current token without advancing.
    pub fn peek(&self) -> Option<&'t Token<'a>> {
        self.tokens.get(self.i)
    }

    /// The tokens from the current position to the end.
    pub fn rest(&self) -> &'t [Token<'a>] {
        self.tokens.get(self.i..).unwrap_or_default()
    }

    pub fn bump(&mut self) -> Option<&'t Token<'a>> {
        let token = self.tokens.get(self.i)?;
        self.i += 1;
        Some(token)
    }

    /// Advances by `n` tokens, stopping at the end.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.tokens.len());
    }
}

/// Checks whether `tokens` starts with the kind sequence `kinds`.
pub fn starts_with_kinds(tokens: &[Token<'_>], kinds: &[TokenKind]) -> bool {
    tokens.len() >= kinds.len() && tokens.iter().zip(kinds).all(|(t, k)| t.is(k))
}

/// Finds the earliest index where the kind sequence `kinds` occurs.
///
/// An empty `kinds` never matches.
pub fn find_kinds(tokens: &[Token<'_>], kinds: &[TokenKind]) -> Option<usize> {
    if kinds.is_empty() {
        return None;
    }
    tokens
        .windows(kinds.len())
        .position(|window| starts_with_kinds(window, kinds))
}
