//! Integration tests for the parsing module.
//!
//! Trees are compared either node by node or through the line-based
//! rendering in `normalize`, with inline `insta` snapshots.


use chatmark_syntax::{TokenKind, tokenize};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    DelimiterSpec, Node, NodeKind, TokenParser, merge_adjacent_text, parse_tokens,
};

fn parse(text: &str) -> Vec<Node> {
    let nodes = crate::dialect::parse(text);
    invariants::check(&nodes);
    nodes
}

fn span(kind: NodeKind, children: Vec<Node>) -> Node {
    Node::with_children(kind, children)
}

// Degradation

#[rstest]
#[case("a * b")]
#[case("**")]
#[case("~~x")]
#[case("||")]
#[case("`x")]
#[case("```x")]
#[case("_")]
#[case("> ")]
#[case("just words")]
fn unterminated_constructs_become_one_text_node(#[case] input: &str) {
    assert_eq!(parse(input), vec![Node::text(input)]);
}

#[test]
fn overflowing_mention_id_degrades_to_text() {
    assert_eq!(
        parse("<@99999999999999999999999> hi"),
        vec![Node::text("<@99999999999999999999999> hi")]
    );
}

#[test]
fn empty_input() {
    assert!(parse("").is_empty());
}

// Spans

#[rstest]
#[case("**x**", NodeKind::Bold)]
#[case("__x__", NodeKind::Underline)]
#[case("~~x~~", NodeKind::Strikethrough)]
#[case("*x*", NodeKind::Italic)]
#[case("_x_", NodeKind::Italic)]
#[case("||x||", NodeKind::Spoiler)]
#[case("`x`", NodeKind::CodeInline)]
fn simple_span(#[case] input: &str, #[case] kind: NodeKind) {
    assert_eq!(parse(input), vec![span(kind, vec![Node::text("x")])]);
}

#[test]
fn spans_nest_fully() {
    assert_eq!(
        parse("*a~~b~~c*d"),
        vec![
            span(
                NodeKind::Italic,
                vec![
                    Node::text("a"),
                    span(NodeKind::Strikethrough, vec![Node::text("b")]),
                    Node::text("c"),
                ]
            ),
            Node::text("d"),
        ]
    );
}

#[rstest]
#[case("*a~~bc*d~~", NodeKind::Italic, "a~~bc", "d~~")]
#[case("||a *b|| c*", NodeKind::Spoiler, "a *b", " c*")]
#[case("__a **b__ c**", NodeKind::Underline, "a **b", " c**")]
#[case("~~a ||b~~ c||", NodeKind::Strikethrough, "a ||b", " c||")]
#[case("`a __b` c__", NodeKind::CodeInline, "a __b", " c__")]
fn partial_overlap_is_left_as_text(
    #[case] input: &str,
    #[case] kind: NodeKind,
    #[case] inside: &str,
    #[case] after: &str,
) {
    assert_eq!(
        parse(input),
        vec![span(kind, vec![Node::text(inside)]), Node::text(after)]
    );
}

#[test]
fn closer_search_is_minimal() {
    assert_eq!(
        parse("***bold and italic***"),
        vec![
            span(NodeKind::Bold, vec![Node::text("*bold and italic")]),
            Node::text("*"),
        ]
    );
}

#[test]
fn first_inner_token_is_content() {
    assert_eq!(
        parse("****"),
        vec![span(NodeKind::Italic, vec![Node::text("*")]), Node::text("*")]
    );
}

#[test]
fn inline_code_content_is_parsed_recursively() {
    assert_eq!(
        parse("`*a*`"),
        vec![span(
            NodeKind::CodeInline,
            vec![span(NodeKind::Italic, vec![Node::text("a")])]
        )]
    );
}

#[test]
fn leaves_inside_spans() {
    assert_eq!(
        parse("**<@123456789012345678>**"),
        vec![span(
            NodeKind::Bold,
            vec![Node::new(NodeKind::UserMention).with_id(123456789012345678)]
        )]
    );
    assert_eq!(
        parse("__[x](https://a.io)__"),
        vec![span(
            NodeKind::Underline,
            vec![
                Node::new(NodeKind::EmbeddedUrlWithPreview)
                    .with_text_content("x")
                    .with_url("https://a.io")
            ]
        )]
    );
}

// Code blocks

#[test]
fn code_block_language_is_stripped() {
    assert_eq!(
        parse("```py\ncode\n```"),
        vec![
            Node::new(NodeKind::CodeBlock)
                .with_text_content("code")
                .with_name("py")
        ]
    );
}

#[test]
fn code_block_without_language_drops_leading_newline() {
    assert_eq!(
        parse("```\ncode\n```"),
        vec![Node::new(NodeKind::CodeBlock).with_text_content("code")]
    );
}

#[test]
fn code_block_content_is_literal() {
    assert_eq!(
        parse("```**a** <@123>```"),
        vec![Node::new(NodeKind::CodeBlock).with_text_content("**a** <@123>")]
    );
}

// Quote blocks

#[test]
fn quote_groups_consecutive_lines() {
    assert_eq!(
        parse("> line1\n> line2\nline3"),
        vec![
            span(NodeKind::QuoteBlock, vec![Node::text("line1\nline2\n")]),
            Node::text("line3"),
        ]
    );
}

#[test]
fn blank_line_splits_quotes() {
    assert_eq!(
        parse("> a\n\n> b"),
        vec![
            span(NodeKind::QuoteBlock, vec![Node::text("a\n")]),
            Node::text("\n"),
            span(NodeKind::QuoteBlock, vec![Node::text("b")]),
        ]
    );
}

#[test]
fn quotes_do_not_nest() {
    assert_eq!(
        parse("> > nested"),
        vec![span(NodeKind::QuoteBlock, vec![Node::text("> nested")])]
    );
}

#[test]
fn span_continues_across_quoted_lines() {
    assert_eq!(
        parse("> *a\n> b*"),
        vec![span(
            NodeKind::QuoteBlock,
            vec![span(NodeKind::Italic, vec![Node::text("a\nb")])]
        )]
    );
}

#[test]
fn quote_prefix_mid_line_opens_quote() {
    assert_eq!(
        parse("a > b"),
        vec![
            Node::text("a "),
            span(NodeKind::QuoteBlock, vec![Node::text("b")]),
        ]
    );
}

#[test]
fn in_quote_flag_disables_quotes() {
    let tokens = tokenize("> a");
    assert_eq!(parse_tokens(&tokens, true, &[]), vec![Node::text("> a")]);
}

// Custom delimiters

#[test]
fn custom_delimiters_are_tried_in_order() {
    let tokens = tokenize("~x~");
    let custom = [
        DelimiterSpec::pair("first", TokenKind::Tilde, TokenKind::Tilde),
        DelimiterSpec::pair("second", TokenKind::Tilde, TokenKind::Tilde),
    ];
    assert_eq!(
        parse_tokens(&tokens, false, &custom),
        vec![span(NodeKind::Custom, vec![Node::text("x")]).with_name("first")]
    );
}

#[test]
fn multi_token_custom_delimiter() {
    let tokens = tokenize("<<*x*>>");
    let spec = DelimiterSpec::new(
        "angled",
        vec![TokenKind::PlainText, TokenKind::Star],
        vec![TokenKind::Star, TokenKind::PlainText],
    )
    .unwrap();
    // PlainText is a leaf kind, so it is consumed before any span is tried
    assert_eq!(
        parse_tokens(&tokens, false, &[spec]),
        vec![
            Node::text("<<"),
            span(NodeKind::Italic, vec![Node::text("x")]),
            Node::text(">>"),
        ]
    );
}

// Depth guard

#[test]
fn depth_limit_keeps_nested_spans_as_text() {
    let tokens = tokenize("**a *b* c**");
    assert_eq!(
        TokenParser::new().parse(&tokens, false),
        vec![span(
            NodeKind::Bold,
            vec![
                Node::text("a "),
                span(NodeKind::Italic, vec![Node::text("b")]),
                Node::text(" c"),
            ]
        )]
    );
    assert_eq!(
        TokenParser::new().with_max_depth(1).parse(&tokens, false),
        vec![span(NodeKind::Bold, vec![Node::text("a *b* c")])]
    );
    assert_eq!(
        TokenParser::new().with_max_depth(0).parse(&tokens, false),
        vec![Node::text("**a *b* c**")]
    );
}

#[test]
fn depth_limit_applies_to_quotes() {
    let tokens = tokenize("> hi");
    assert_eq!(
        TokenParser::new().with_max_depth(0).parse(&tokens, false),
        vec![Node::text("> hi")]
    );
}

#[test]
fn depth_limit_cuts_deep_nesting() {
    let input = "||__**~~*`x`*~~**__||";
    insta::assert_snapshot!(normalize::render(&parse(input)), @r#"
    SPOILER
      UNDERLINE
        BOLD
          STRIKETHROUGH
            ITALIC
              CODE_INLINE
                TEXT "x"
    "#);

    let tokens = tokenize(input);
    let nodes = TokenParser::new().with_max_depth(3).parse(&tokens, false);
    invariants::check(&nodes);
    insta::assert_snapshot!(normalize::render(&nodes), @r#"
    SPOILER
      UNDERLINE
        BOLD
          TEXT "~~*`x`*~~"
    "#);
}

// Merge pass

#[rstest]
#[case("a * b")]
#[case("*a~~bc*d~~")]
#[case("> *x* > y\n> z\nw ** q")]
#[case("```\n*a*\n``` trailing _ text")]
fn merge_is_idempotent(#[case] input: &str) {
    let nodes = parse(input);
    assert_eq!(merge_adjacent_text(nodes.clone()), nodes);
}

// Composite messages

#[test]
fn snapshot_quote_with_code_block() {
    let nodes = parse(
        "> **hey** <@123456789012345678>, check `x`\n> ||spoiler||\n```rs\nfn main() {}\n```",
    );
    insta::assert_snapshot!(normalize::render(&nodes), @r#"
    QUOTE_BLOCK
      BOLD
        TEXT "hey"
      TEXT " "
      USER id=123456789012345678
      TEXT ", check "
      CODE_INLINE
        TEXT "x"
      TEXT "\n"
      SPOILER
        TEXT "spoiler"
      TEXT "\n"
    CODE_BLOCK name="rs" "fn main() {}"
    "#);
}

#[test]
fn snapshot_leaf_attributes() {
    let nodes = parse(
        "hi <@&123456789012345678> :wave: <a:dance:123456789012345678> see [docs](<https://example.com>) at <t:1618953630:R>",
    );
    insta::assert_snapshot!(normalize::render(&nodes), @r#"
    TEXT "hi "
    ROLE id=123456789012345678
    TEXT " "
    EMOJI_UNICODE_ENCODED name="wave"
    TEXT " "
    EMOJI_CUSTOM_ANIMATED name="dance" id=123456789012345678 url="https://cdn.discordapp.com/emojis/123456789012345678.gif"
    TEXT " see "
    URL_WITHOUT_PREVIEW_EMBEDDED url="https://example.com" "docs"
    TEXT " at "
    TIMESTAMP name="R" id=1618953630
    "#);
}
