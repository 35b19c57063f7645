use std::fmt;

/// Kind of an AST node.
///
/// [`NodeKind::name`] gives the tag used at the serialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Literal text; the only kind that takes part in merging.
    Text,
    Italic,
    Bold,
    Underline,
    Strikethrough,
    Spoiler,
    CodeInline,
    /// Fenced code. Content is literal and stored in `text_content`.
    CodeBlock,
    /// Consecutive quote-prefixed lines.
    QuoteBlock,
    UserMention,
    RoleMention,
    ChannelMention,
    SlashCommand,
    CustomEmoji,
    CustomEmojiAnimated,
    UnicodeEmoji,
    EncodedUnicodeEmoji,
    UrlWithPreview,
    UrlWithoutPreview,
    EmbeddedUrlWithPreview,
    EmbeddedUrlWithoutPreview,
    Timestamp,
    /// Span built from a caller-supplied delimiter; `name` holds its name.
    Custom,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Text => "TEXT",
            NodeKind::Italic => "ITALIC",
            NodeKind::Bold => "BOLD",
            NodeKind::Underline => "UNDERLINE",
            NodeKind::Strikethrough => "STRIKETHROUGH",
            NodeKind::Spoiler => "SPOILER",
            NodeKind::CodeInline => "CODE_INLINE",
            NodeKind::CodeBlock => "CODE_BLOCK",
            NodeKind::QuoteBlock => "QUOTE_BLOCK",
            NodeKind::UserMention => "USER",
            NodeKind::RoleMention => "ROLE",
            NodeKind::ChannelMention => "CHANNEL",
            NodeKind::SlashCommand => "SLASH_COMMAND",
            NodeKind::CustomEmoji => "EMOJI_CUSTOM",
            NodeKind::CustomEmojiAnimated => "EMOJI_CUSTOM_ANIMATED",
            NodeKind::UnicodeEmoji => "EMOJI_UNICODE",
            NodeKind::EncodedUnicodeEmoji => "EMOJI_UNICODE_ENCODED",
            NodeKind::UrlWithPreview => "URL_WITH_PREVIEW",
            NodeKind::UrlWithoutPreview => "URL_WITHOUT_PREVIEW",
            NodeKind::EmbeddedUrlWithPreview => "URL_WITH_PREVIEW_EMBEDDED",
            NodeKind::EmbeddedUrlWithoutPreview => "URL_WITHOUT_PREVIEW_EMBEDDED",
            NodeKind::Timestamp => "TIMESTAMP",
            NodeKind::Custom => "CUSTOM",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed AST node.
///
/// Which attributes are set depends on the kind:
/// - `text_content`: Text, CodeBlock, and the label of embedded urls
/// - `id`: mention and emoji snowflakes, unicode emoji codepoint, timestamp epoch
/// - `name`: emoji and slash-command names, code block language, timestamp
///   format letter, custom delimiter name
/// - `url`: urls and emoji images
///
/// Span and quote nodes own their `children`; every other kind is a leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub text_content: Option<String>,
    pub id: Option<u64>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            text_content: None,
            id: None,
            name: None,
            url: None,
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(NodeKind::Text).with_text_content(content)
    }

    pub fn with_children(kind: NodeKind, children: Vec<Node>) -> Self {
        Self {
            children,
            ..Self::new(kind)
        }
    }

    pub fn with_text_content(mut self, content: impl Into<String>) -> Self {
        self.text_content = Some(content.into());
        self
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }
}
