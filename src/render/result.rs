//! Rendering result with metadata and statistics.

use crate::model::{Metadata, Tag};
use serde::{Deserialize, Serialize};

/// Result of converting a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (Markdown, text, etc.)
    pub content: String,

    /// Document metadata (copied from source document)
    pub metadata: Metadata,

    /// Extraction statistics
    pub stats: ExtractionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, metadata: Metadata, stats: ExtractionStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected during classification and rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Total number of pages in the source document
    pub page_count: u32,

    /// Number of spans the source produced
    pub span_count: u32,

    /// Number of spans suppressed as headers/footers
    pub suppressed_span_count: u32,

    /// Number of heading blocks emitted
    pub heading_count: u32,

    /// Number of paragraph blocks emitted
    pub paragraph_count: u32,

    /// Number of fenced code blocks emitted
    pub code_block_count: u32,

    /// Number of small-text blocks emitted
    pub small_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a rendered block by its tag.
    pub fn add_block(&mut self, tag: Tag) {
        match tag {
            Tag::Paragraph => self.paragraph_count += 1,
            Tag::Code => self.code_block_count += 1,
            Tag::Small => self.small_count += 1,
            _ => self.heading_count += 1,
        }
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ExtractionStats) {
        self.page_count += other.page_count;
        self.span_count += other.span_count;
        self.suppressed_span_count += other.suppressed_span_count;
        self.heading_count += other.heading_count;
        self.paragraph_count += other.paragraph_count;
        self.code_block_count += other.code_block_count;
        self.small_count += other.small_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
