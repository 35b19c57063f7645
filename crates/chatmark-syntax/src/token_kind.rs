//! TokenKind enum for every lexical rule of the chat markdown dialect.
//!
//! One variant per built-in rule, [`TokenKind::PlainText`] for characters no
//! rule claimed, and [`TokenKind::Custom`] for caller-supplied rules.

use std::fmt;
use std::sync::Arc;

/// Kind of a token produced by the [`Lexer`](crate::lexer::Lexer).
///
/// Each kind has a stable SCREAMING_CASE tag (see [`TokenKind::name`]). The
/// tags are what configuration files use to refer to token kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Run of characters with no markdown meaning
    PlainText,
    /// `<@id>` or `<@!id>`
    UserMention,
    /// `<@&id>`
    RoleMention,
    /// `</name:id>`
    SlashCommand,
    /// `<#id>`
    ChannelMention,
    /// `<t:epoch>` or `<t:epoch:format>`
    Timestamp,
    /// `<a:name:id>`
    CustomEmojiAnimated,
    /// `<:name:id>`
    CustomEmoji,
    /// A single emoji codepoint
    UnicodeEmoji,
    /// `:name:`
    EncodedUnicodeEmoji,
    /// `[label](<url>)`
    EmbeddedUrlWithoutPreview,
    /// `[label](url)`
    EmbeddedUrlWithPreview,
    /// `<url>`
    UrlWithoutPreview,
    /// Bare `http(s)://` url
    UrlWithPreview,
    /// `> ` or `>>> `
    QuoteLinePrefix,
    /// `~`
    Tilde,
    /// `*`
    Star,
    /// `_`
    Underscore,
    /// `||`
    SpoilerDelimiter,
    /// Triple backtick
    CodeBlockDelimiter,
    /// Single backtick
    CodeInlineDelimiter,
    /// `\n`
    Newline,
    /// Produced by a caller-supplied rule, tagged with the rule's name
    Custom(Arc<str>),
}

impl TokenKind {
    /// Creates a custom kind with the given tag.
    pub fn custom(name: impl Into<Arc<str>>) -> Self {
        TokenKind::Custom(name.into())
    }

    /// The stable tag of this kind.
    pub fn name(&self) -> &str {
        match self {
            TokenKind::PlainText => "TEXT_INLINE",
            TokenKind::UserMention => "USER_MENTION",
            TokenKind::RoleMention => "ROLE_MENTION",
            TokenKind::SlashCommand => "SLASH_COMMAND_MENTION",
            TokenKind::ChannelMention => "CHANNEL_MENTION",
            TokenKind::Timestamp => "TIMESTAMP",
            TokenKind::CustomEmojiAnimated => "EMOJI_CUSTOM_ANIMATED",
            TokenKind::CustomEmoji => "EMOJI_CUSTOM",
            TokenKind::UnicodeEmoji => "EMOJI_UNICODE",
            TokenKind::EncodedUnicodeEmoji => "EMOJI_UNICODE_ENCODED",
            TokenKind::EmbeddedUrlWithoutPreview => "URL_WITHOUT_PREVIEW_EMBEDDED",
            TokenKind::EmbeddedUrlWithPreview => "URL_WITH_PREVIEW_EMBEDDED",
            TokenKind::UrlWithoutPreview => "URL_WITHOUT_PREVIEW",
            TokenKind::UrlWithPreview => "URL_WITH_PREVIEW",
            TokenKind::QuoteLinePrefix => "QUOTE_LINE_PREFIX",
            TokenKind::Tilde => "TILDE",
            TokenKind::Star => "STAR",
            TokenKind::Underscore => "UNDERSCORE",
            TokenKind::SpoilerDelimiter => "SPOILER_DELIMITER",
            TokenKind::CodeBlockDelimiter => "CODE_BLOCK_DELIMITER",
            TokenKind::CodeInlineDelimiter => "CODE_INLINE_DELIMITER",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Custom(name) => name.as_ref(),
        }
    }

    /// Looks up a built-in kind by its tag.
    pub fn builtin_from_name(name: &str) -> Option<TokenKind> {
        let kind = match name {
            "TEXT_INLINE" => TokenKind::PlainText,
            "USER_MENTION" => TokenKind::UserMention,
            "ROLE_MENTION" => TokenKind::RoleMention,
            "SLASH_COMMAND_MENTION" => TokenKind::SlashCommand,
            "CHANNEL_MENTION" => TokenKind::ChannelMention,
            "TIMESTAMP" => TokenKind::Timestamp,
            "EMOJI_CUSTOM_ANIMATED" => TokenKind::CustomEmojiAnimated,
            "EMOJI_CUSTOM" => TokenKind::CustomEmoji,
            "EMOJI_UNICODE" => TokenKind::UnicodeEmoji,
            "EMOJI_UNICODE_ENCODED" => TokenKind::EncodedUnicodeEmoji,
            "URL_WITHOUT_PREVIEW_EMBEDDED" => TokenKind::EmbeddedUrlWithoutPreview,
            "URL_WITH_PREVIEW_EMBEDDED" => TokenKind::EmbeddedUrlWithPreview,
            "URL_WITHOUT_PREVIEW" => TokenKind::UrlWithoutPreview,
            "URL_WITH_PREVIEW" => TokenKind::UrlWithPreview,
            "QUOTE_LINE_PREFIX" => TokenKind::QuoteLinePrefix,
            "TILDE" => TokenKind::Tilde,
            "STAR" => TokenKind::Star,
            "UNDERSCORE" => TokenKind::Underscore,
            "SPOILER_DELIMITER" => TokenKind::SpoilerDelimiter,
            "CODE_BLOCK_DELIMITER" => TokenKind::CodeBlockDelimiter,
            "CODE_INLINE_DELIMITER" => TokenKind::CodeInlineDelimiter,
            "NEWLINE" => TokenKind::Newline,
            _ => return None,
        };
        Some(kind)
    }

    /// Resolves a tag to a kind. Tags that are not built-in name a custom rule.
    pub fn from_name(name: &str) -> TokenKind {
        Self::builtin_from_name(name).unwrap_or_else(|| TokenKind::custom(name))
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, TokenKind::Custom(_))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
