// tests/snapshot_tests.rs
//! Snapshot tests for block rendering and article composition.
//!
//! Snapshots are inline so the expected HTML sits next to the input.

use notion2site::{
    parse_blocks_response, render_block, render_blocks, ApiResponse, ArticleMetadata,
    ArticleTemplate, Block, RenderContext, RichTextItem, TextBlockContent, UnsupportedBlock,
};
use reqwest::StatusCode;

const BLOCK_CHILDREN: &str = include_str!("fixtures/api_responses/block_children.json");

fn text(value: &str) -> TextBlockContent {
    TextBlockContent::new(vec![RichTextItem::plain_text(value)])
}

fn render_one(block: &Block) -> String {
    render_block(block, &RenderContext::default())
}

fn fixture_blocks() -> Vec<Block> {
    parse_blocks_response(ApiResponse {
        data: BLOCK_CHILDREN.to_string(),
        status: StatusCode::OK,
        url: "blocks/abc/children".to_string(),
    })
    .expect("fixture should parse")
}

mod blocks {
    use super::*;

    #[test]
    fn paragraph_block() {
        insta::assert_snapshot!(render_one(&Block::Paragraph(text("Hello, world!"))), @"<p>Hello, world!</p>");
    }

    #[test]
    fn paragraph_empty() {
        insta::assert_snapshot!(render_one(&Block::Paragraph(text(""))), @"");
    }

    #[test]
    fn heading_levels() {
        insta::assert_snapshot!(render_one(&Block::Heading1(text("Main Title"))), @"<h1>Main Title</h1>");
        insta::assert_snapshot!(render_one(&Block::Heading2(text("Section"))), @"<h2>Section</h2>");
        insta::assert_snapshot!(render_one(&Block::Heading3(text("Sub"))), @"<h3>Sub</h3>");
    }

    #[test]
    fn empty_heading_is_still_emitted() {
        insta::assert_snapshot!(render_one(&Block::Heading2(text(""))), @"<h2></h2>");
    }

    #[test]
    fn bulleted_list_item() {
        insta::assert_snapshot!(render_one(&Block::BulletedListItem(text("List item"))), @"<li>List item</li>");
    }

    #[test]
    fn unsupported_block_renders_nothing() {
        let block = Block::Unsupported(UnsupportedBlock {
            block_type: "code".to_string(),
        });
        insta::assert_snapshot!(render_one(&block), @"");
    }

    #[test]
    fn markup_in_text_is_kept_verbatim() {
        insta::assert_snapshot!(
            render_one(&Block::Paragraph(text("<b>bold</b> & more"))),
            @"<p><b>bold</b> & more</p>"
        );
    }

    #[test]
    fn markup_in_text_is_escaped_on_request() {
        let html = render_block(
            &Block::Paragraph(text("<b>bold</b> & more")),
            &RenderContext { escape_html: true },
        );
        insta::assert_snapshot!(html, @"<p>&lt;b&gt;bold&lt;/b&gt; &amp; more</p>");
    }
}

mod article_body {
    use super::*;

    #[test]
    fn fixture_page_body() {
        let body = render_blocks(&fixture_blocks(), &RenderContext::default());
        assert_eq!(body.lines().count(), 6);
        insta::assert_snapshot!(body, @r"
        <h1>Intro</h1>
        <p>Hi there</p>


        <li>One</li>
        <h2></h2>
        ");
    }

    #[test]
    fn fixture_page_in_template() {
        let template = ArticleTemplate::new(
            "<title>{{ title }}</title>\n<h1>{{ title }}</h1>\n<span>{{ date }} · {{ topic }}</span>\n<article>{{ content }}</article>",
        );
        let metadata = ArticleMetadata {
            title: "Hello".to_string(),
            date: "05.03.2024".to_string(),
            topics: vec!["Notes".to_string(), "Rust".to_string()],
        };
        let body = render_blocks(&fixture_blocks()[..2], &RenderContext::default());

        insta::assert_snapshot!(template.render(&metadata, &body, false), @r"
        <title>Hello</title>
        <h1>Hello</h1>
        <span>05.03.2024 · Notes, Rust</span>
        <article><h1>Intro</h1>
        <p>Hi there</p></article>
        ");
    }
}
