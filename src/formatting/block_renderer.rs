// src/formatting/block_renderer.rs
//! Block rendering: converts Notion blocks to HTML fragments.
//!
//! Each block maps to at most one element; there is no nesting and no list
//! wrapping, so a bulleted item is a bare `<li>`.

use super::rich_text::render_text;
use crate::model::{Block, BlockVisitor, TextBlockContent};

/// Options that affect how block text is inserted.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext {
    pub escape_html: bool,
}

/// Visitor producing one HTML fragment per block.
pub struct HtmlBlockRenderer {
    context: RenderContext,
}

impl HtmlBlockRenderer {
    pub fn new(context: RenderContext) -> Self {
        Self { context }
    }

    fn text(&self, content: &TextBlockContent) -> String {
        render_text(&content.rich_text, self.context.escape_html)
    }
}

impl BlockVisitor for HtmlBlockRenderer {
    type Output = String;

    fn visit_paragraph(&mut self, content: &TextBlockContent) -> String {
        let text = self.text(content);
        if text.is_empty() {
            String::new()
        } else {
            format!("<p>{}</p>", text)
        }
    }

    fn visit_heading(&mut self, level: u8, content: &TextBlockContent) -> String {
        format!("<h{level}>{}</h{level}>", self.text(content))
    }

    fn visit_bulleted_list_item(&mut self, content: &TextBlockContent) -> String {
        format!("<li>{}</li>", self.text(content))
    }

    fn visit_unsupported(&mut self, block_type: &str) -> String {
        log::debug!("Skipping unsupported block type '{}'", block_type);
        String::new()
    }
}

// --- Public API ---

/// Renders one block into its HTML fragment, possibly empty.
pub fn render_block(block: &Block, context: &RenderContext) -> String {
    block.accept(&mut HtmlBlockRenderer::new(*context))
}

/// Renders the blocks of one article body, one fragment per line.
///
/// Empty fragments keep their line, so the body has exactly
/// `blocks.len() - 1` newlines.
pub fn render_blocks(blocks: &[Block], context: &RenderContext) -> String {
    let mut renderer = HtmlBlockRenderer::new(*context);
    let fragments: Vec<String> = blocks.iter().map(|b| b.accept(&mut renderer)).collect();

    log::debug!("Rendered {} blocks", blocks.len());
    fragments.join("\n")
}
