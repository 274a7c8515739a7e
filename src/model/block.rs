use super::common::RichTextItem;
use serde::Serialize;
use serde_json::Value;

/// Text payload shared by every block type the site renders.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TextBlockContent {
    pub rich_text: Vec<RichTextItem>,
}

impl TextBlockContent {
    pub fn new(rich_text: Vec<RichTextItem>) -> Self {
        Self { rich_text }
    }

    /// Reads `{"rich_text": [...]}`; anything else is empty content.
    fn from_json(value: Option<&Value>) -> Self {
        Self {
            rich_text: RichTextItem::list_from_json(value.and_then(|v| v.get("rich_text"))),
        }
    }
}

/// A block type the site does not render, kept by name for logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnsupportedBlock {
    pub block_type: String,
}

/// One child block of an entry page.
///
/// Built from the raw JSON record without failing: a record whose type
/// payload is missing or malformed yields empty text, and any type outside
/// the rendered set becomes `Unsupported`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    Paragraph(TextBlockContent),
    Heading1(TextBlockContent),
    Heading2(TextBlockContent),
    Heading3(TextBlockContent),
    BulletedListItem(TextBlockContent),
    Unsupported(UnsupportedBlock),
}

impl Block {
    /// Get block type name as Notion spells it
    pub fn block_type(&self) -> &str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Heading1(_) => "heading_1",
            Block::Heading2(_) => "heading_2",
            Block::Heading3(_) => "heading_3",
            Block::BulletedListItem(_) => "bulleted_list_item",
            Block::Unsupported(b) => &b.block_type,
        }
    }

    /// Accept a visitor
    pub fn accept<V: BlockVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Block::Paragraph(content) => visitor.visit_paragraph(content),
            Block::Heading1(content) => visitor.visit_heading(1, content),
            Block::Heading2(content) => visitor.visit_heading(2, content),
            Block::Heading3(content) => visitor.visit_heading(3, content),
            Block::BulletedListItem(content) => visitor.visit_bulleted_list_item(content),
            Block::Unsupported(b) => visitor.visit_unsupported(&b.block_type),
        }
    }
}

impl From<&Value> for Block {
    fn from(record: &Value) -> Self {
        let block_type = record
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let payload = record.get(block_type);

        match block_type {
            "paragraph" => Block::Paragraph(TextBlockContent::from_json(payload)),
            "heading_1" => Block::Heading1(TextBlockContent::from_json(payload)),
            "heading_2" => Block::Heading2(TextBlockContent::from_json(payload)),
            "heading_3" => Block::Heading3(TextBlockContent::from_json(payload)),
            "bulleted_list_item" => Block::BulletedListItem(TextBlockContent::from_json(payload)),
            other => Block::Unsupported(UnsupportedBlock {
                block_type: other.to_string(),
            }),
        }
    }
}

/// Visitor trait for dispatching over block types.
///
/// All methods have default implementations that return `Default::default()`,
/// so implementors only need to override the methods they care about.
pub trait BlockVisitor {
    type Output: Default;

    fn visit_paragraph(&mut self, _content: &TextBlockContent) -> Self::Output {
        Default::default()
    }
    fn visit_heading(&mut self, _level: u8, _content: &TextBlockContent) -> Self::Output {
        Default::default()
    }
    fn visit_bulleted_list_item(&mut self, _content: &TextBlockContent) -> Self::Output {
        Default::default()
    }
    fn visit_unsupported(&mut self, _block_type: &str) -> Self::Output {
        Default::default()
    }
}
