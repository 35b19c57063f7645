//! One-token leaf nodes: text, mentions, emoji, timestamps and urls.

use chatmark_syntax::{Token, TokenKind};

use crate::parsing::types::{Node, NodeKind};

/// Base url for custom emoji images, followed by `/<id>.<png|gif>`.
pub const CUSTOM_EMOJI_CDN: &str = "https://cdn.discordapp.com/emojis";

/// Base url for unicode emoji images, followed by `/<hex codepoint>.png`.
pub const UNICODE_EMOJI_CDN: &str = "https://cdn.jsdelivr.net/gh/twitter/twemoji@latest/assets/72x72";

/// Builds the leaf node for a one-token construct.
///
/// Returns `None` for kinds that are not leaves, and for leaves whose id does
/// not fit in a `u64`; the parser then degrades the token to text.
pub fn leaf_node(token: &Token<'_>) -> Option<Node> {
    let node = match &token.kind {
        TokenKind::PlainText => Node::text(token.text),
        TokenKind::UserMention => Node::new(NodeKind::UserMention).with_id(snowflake(token, 0)?),
        TokenKind::RoleMention => Node::new(NodeKind::RoleMention).with_id(snowflake(token, 0)?),
        TokenKind::ChannelMention => {
            Node::new(NodeKind::ChannelMention).with_id(snowflake(token, 0)?)
        }
        TokenKind::SlashCommand => Node::new(NodeKind::SlashCommand)
            .with_name(token.capture(0)?)
            .with_id(snowflake(token, 1)?),
        TokenKind::Timestamp => {
            let node = Node::new(NodeKind::Timestamp).with_id(snowflake(token, 0)?);
            match token.capture(1) {
                Some(format) => node.with_name(format),
                None => node,
            }
        }
        TokenKind::CustomEmoji => custom_emoji(token, NodeKind::CustomEmoji, "png")?,
        TokenKind::CustomEmojiAnimated => {
            custom_emoji(token, NodeKind::CustomEmojiAnimated, "gif")?
        }
        TokenKind::UnicodeEmoji => {
            let codepoint = u32::from(token.text.chars().next()?);
            Node::new(NodeKind::UnicodeEmoji)
                .with_name(token.text)
                .with_id(u64::from(codepoint))
                .with_url(format!("{UNICODE_EMOJI_CDN}/{codepoint:x}.png"))
        }
        TokenKind::EncodedUnicodeEmoji => {
            Node::new(NodeKind::EncodedUnicodeEmoji).with_name(token.capture(0)?)
        }
        TokenKind::UrlWithPreview => Node::new(NodeKind::UrlWithPreview).with_url(token.text),
        TokenKind::UrlWithoutPreview => {
            let url = token
                .text
                .strip_prefix('<')
                .and_then(|s| s.strip_suffix('>'))
                .unwrap_or(token.text);
            Node::new(NodeKind::UrlWithoutPreview).with_url(url)
        }
        TokenKind::EmbeddedUrlWithPreview => embedded_url(token, NodeKind::EmbeddedUrlWithPreview)?,
        TokenKind::EmbeddedUrlWithoutPreview => {
            embedded_url(token, NodeKind::EmbeddedUrlWithoutPreview)?
        }
        _ => return None,
    };
    Some(node)
}

fn snowflake(token: &Token<'_>, index: usize) -> Option<u64> {
    token.capture(index)?.parse().ok()
}

fn custom_emoji(token: &Token<'_>, kind: NodeKind, extension: &str) -> Option<Node> {
    let id = snowflake(token, 1)?;
    Some(
        Node::new(kind)
            .with_name(token.capture(0)?)
            .with_id(id)
            .with_url(format!("{CUSTOM_EMOJI_CDN}/{id}.{extension}")),
    )
}

fn embedded_url(token: &Token<'_>, kind: NodeKind) -> Option<Node> {
    Some(
        Node::new(kind)
            .with_text_content(token.capture(0)?)
            .with_url(token.capture(1)?),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatmark_syntax::tokenize;
    use pretty_assertions::assert_eq;

    fn leaf(input: &str) -> Option<Node> {
        let tokens = tokenize(input);
        assert_eq!(tokens.len(), 1, "expected a single token for {input:?}");
        leaf_node(&tokens[0])
    }

    #[test]
    fn user_mention() {
        assert_eq!(
            leaf("<@!123456789012345678>"),
            Some(Node::new(NodeKind::UserMention).with_id(123456789012345678))
        );
    }

    #[test]
    fn twenty_digit_role_mention() {
        assert_eq!(
            leaf("<@&12345678901234567890>"),
            Some(Node::new(NodeKind::RoleMention).with_id(12345678901234567890))
        );
    }

    #[test]
    fn overflowing_id_is_not_a_leaf() {
        assert_eq!(leaf("<#99999999999999999999999>"), None);
    }

    #[test]
    fn slash_command() {
        assert_eq!(
            leaf("</role add:816437322781949972>"),
            Some(
                Node::new(NodeKind::SlashCommand)
                    .with_name("role add")
                    .with_id(816437322781949972)
            )
        );
    }

    #[test]
    fn timestamp_with_and_without_format() {
        assert_eq!(
            leaf("<t:1618953630:R>"),
            Some(Node::new(NodeKind::Timestamp).with_id(1618953630).with_name("R"))
        );
        assert_eq!(
            leaf("<t:1618953630>"),
            Some(Node::new(NodeKind::Timestamp).with_id(1618953630))
        );
    }

    #[test]
    fn custom_emoji_urls() {
        assert_eq!(
            leaf("<:blob:123456789012345678>").and_then(|n| n.url),
            Some("https://cdn.discordapp.com/emojis/123456789012345678.png".to_string())
        );
        let animated = leaf("<a:dance:123456789012345678>").unwrap();
        assert_eq!(animated.kind, NodeKind::CustomEmojiAnimated);
        assert_eq!(animated.name.as_deref(), Some("dance"));
        assert_eq!(
            animated.url.as_deref(),
            Some("https://cdn.discordapp.com/emojis/123456789012345678.gif")
        );
    }

    #[test]
    fn unicode_emoji() {
        assert_eq!(
            leaf("😀"),
            Some(
                Node::new(NodeKind::UnicodeEmoji)
                    .with_name("😀")
                    .with_id(0x1F600)
                    .with_url(format!("{UNICODE_EMOJI_CDN}/1f600.png"))
            )
        );
    }

    #[test]
    fn encoded_emoji_has_only_a_name() {
        assert_eq!(
            leaf(":wave:"),
            Some(Node::new(NodeKind::EncodedUnicodeEmoji).with_name("wave"))
        );
    }

    #[test]
    fn urls() {
        assert_eq!(
            leaf("<https://example.com/x>"),
            Some(Node::new(NodeKind::UrlWithoutPreview).with_url("https://example.com/x"))
        );
        assert_eq!(
            leaf("https://example.com/x"),
            Some(Node::new(NodeKind::UrlWithPreview).with_url("https://example.com/x"))
        );
        assert_eq!(
            leaf("[the docs](<https://example.com/x>)"),
            Some(
                Node::new(NodeKind::EmbeddedUrlWithoutPreview)
                    .with_text_content("the docs")
                    .with_url("https://example.com/x")
            )
        );
    }

    #[test]
    fn delimiters_are_not_leaves() {
        assert_eq!(leaf("*"), None);
        assert_eq!(leaf("\n"), None);
        assert_eq!(leaf("> "), None);
    }
}
