//! Built-in lexing rules, in precedence order.
//!
//! The order is significant: the first rule whose pattern matches at the
//! cursor wins. Embedded url forms come before bare url forms, mentions
//! before anything that could claim their digits.

use std::sync::OnceLock;

use crate::{lexer::LexRule, token_kind::TokenKind};

/// An `http(s)://` url. Deliberately permissive: the `$-_` range admits
/// `<`, `>` and `:` so the enclosing forms rely on backtracking to find their
/// closing bracket.
pub const URL_PATTERN: &str =
    r"https?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\(\),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+";

/// Single emoji codepoint: copyright, registered, the general punctuation to
/// CJK symbol blocks, and the supplementary pictograph planes.
pub const UNICODE_EMOJI_PATTERN: &str = r"([\x{00A9}\x{00AE}\x{2000}-\x{3300}\x{1F000}-\x{1FBFF}])";

fn builtin_patterns() -> Vec<(TokenKind, String)> {
    vec![
        (TokenKind::UserMention, r"<@!?([0-9]+)>".to_string()),
        (TokenKind::RoleMention, r"<@&([0-9]+)>".to_string()),
        (TokenKind::SlashCommand, r"</([a-zA-Z0-9_ -]+):([0-9]+)>".to_string()),
        (TokenKind::ChannelMention, r"<#([0-9]+)>".to_string()),
        (TokenKind::Timestamp, r"<t:([0-9]+)(?::([tTdDfFR]))?>".to_string()),
        (TokenKind::CustomEmojiAnimated, r"<a:([a-zA-Z0-9_]{2,}):([0-9]+)>".to_string()),
        (TokenKind::CustomEmoji, r"<:([a-zA-Z0-9_]{2,}):([0-9]+)>".to_string()),
        (TokenKind::UnicodeEmoji, UNICODE_EMOJI_PATTERN.to_string()),
        (TokenKind::EncodedUnicodeEmoji, r":([a-zA-Z0-9_]+):".to_string()),
        (
            TokenKind::EmbeddedUrlWithoutPreview,
            format!(r"\[([^\]]+)\]\(<({URL_PATTERN})>\)"),
        ),
        (
            TokenKind::EmbeddedUrlWithPreview,
            format!(r"\[([^\]]+)\]\(({URL_PATTERN})\)"),
        ),
        (TokenKind::UrlWithoutPreview, format!("<{URL_PATTERN}>")),
        (TokenKind::UrlWithPreview, URL_PATTERN.to_string()),
        (TokenKind::QuoteLinePrefix, r"(>>)?> ".to_string()),
        (TokenKind::Tilde, r"~".to_string()),
        (TokenKind::Star, r"\*".to_string()),
        (TokenKind::Underscore, r"_".to_string()),
        (TokenKind::SpoilerDelimiter, r"\|\|".to_string()),
        (TokenKind::CodeBlockDelimiter, r"```".to_string()),
        (TokenKind::CodeInlineDelimiter, r"`".to_string()),
        (TokenKind::Newline, r"\n".to_string()),
    ]
}

/// The built-in rule table, compiled once per process.
pub fn builtin_rules() -> &'static [LexRule] {
    static RULES: OnceLock<Vec<LexRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        builtin_patterns()
            .into_iter()
            .map(|(kind, pattern)| LexRule::builtin(kind, &pattern))
            .collect()
    })
}
