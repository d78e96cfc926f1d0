//! Structural tags and merged blocks.

use super::TextSpan;
use serde::{Deserialize, Serialize};

/// Structural role assigned to a span or block.
///
/// A closed enumeration: the renderer matches on it exhaustively, so a tag
/// outside this set cannot reach rendering by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// Top-level heading
    H1,
    /// Second-level heading
    H2,
    /// Third-level heading
    H3,
    /// Fourth-level heading
    H4,
    /// Fifth-level heading
    H5,
    /// Sixth-level heading
    H6,
    /// Ordinary body paragraph
    Paragraph,
    /// Code block (monospace font)
    Code,
    /// Annotation text smaller than body (footnotes, captions)
    Small,
}

impl Tag {
    /// The heading level (1-6), or `None` for non-heading tags.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Tag::H1 => Some(1),
            Tag::H2 => Some(2),
            Tag::H3 => Some(3),
            Tag::H4 => Some(4),
            Tag::H5 => Some(5),
            Tag::H6 => Some(6),
            Tag::Paragraph | Tag::Code | Tag::Small => None,
        }
    }

    /// The heading tag for a level, clamped to 1-6.
    pub fn from_heading_level(level: u8) -> Tag {
        match level.clamp(1, 6) {
            1 => Tag::H1,
            2 => Tag::H2,
            3 => Tag::H3,
            4 => Tag::H4,
            5 => Tag::H5,
            _ => Tag::H6,
        }
    }

    /// Check if this tag is a heading.
    pub fn is_heading(&self) -> bool {
        self.heading_level().is_some()
    }
}

/// A span together with its assigned structural tag.
///
/// Bold/italic flags stay on the span metrics rather than being folded into
/// the tag, so the renderer can apply inline emphasis independently of the
/// block-level role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggedSpan {
    /// The original span
    pub span: TextSpan,

    /// Assigned structural role
    pub tag: Tag,
}

impl TaggedSpan {
    /// Create a new tagged span.
    pub fn new(span: TextSpan, tag: Tag) -> Self {
        Self { span, tag }
    }
}

/// A maximal run of consecutively tagged spans, merged for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Structural role of the whole block
    pub tag: Tag,

    /// Merged text content
    pub text: String,
}

impl Block {
    /// Create a new block.
    pub fn new(tag: Tag, text: impl Into<String>) -> Self {
        Self {
            tag,
            text: text.into(),
        }
    }

    /// Check if the block contains only whitespace.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
