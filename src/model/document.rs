//! Document-level input types.

use super::TextSpan;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The span-level view of a paginated document.
///
/// This is the crate's input boundary: the extraction engine (an external
/// collaborator) materializes the full list of styled spans together with
/// the per-page geometry the margin filter needs. The document is read-only
/// to the pipeline; each stage clones what it keeps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpanDocument {
    /// All text spans in reading order (page, then order index)
    pub spans: Vec<TextSpan>,

    /// Page height in points, keyed by 1-indexed page number
    pub page_heights: BTreeMap<u32, f32>,

    /// Total number of pages in the document
    pub page_count: u32,

    /// Document metadata (title, author, etc.)
    pub metadata: Metadata,
}

impl SpanDocument {
    /// Create a new empty document with the given page count.
    pub fn new(page_count: u32) -> Self {
        Self {
            spans: Vec::new(),
            page_heights: BTreeMap::new(),
            page_count,
            metadata: Metadata::default(),
        }
    }

    /// Record the height of a page.
    pub fn set_page_height(&mut self, page_number: u32, height: f32) {
        self.page_heights.insert(page_number, height);
    }

    /// Add a span to the document.
    pub fn add_span(&mut self, span: TextSpan) {
        self.spans.push(span);
    }

    /// Look up the height of a page, if known.
    pub fn page_height(&self, page_number: u32) -> Option<f32> {
        self.page_heights.get(&page_number).copied()
    }

    /// Check if the document has no spans.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Number of spans in the document.
    pub fn span_count(&self) -> usize {
        self.spans.len()
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Source file name or identifier
    pub source: Option<String>,

    /// Creation date of the source document
    pub created: Option<DateTime<Utc>>,

    /// Total number of pages
    pub page_count: u32,
}

impl Metadata {
    /// Render metadata as YAML frontmatter for Markdown output.
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        if let Some(ref title) = self.title {
            lines.push(format!("title: \"{}\"", escape_yaml(title)));
        }
        if let Some(ref author) = self.author {
            lines.push(format!("author: \"{}\"", escape_yaml(author)));
        }
        if let Some(ref source) = self.source {
            lines.push(format!("source: \"{}\"", escape_yaml(source)));
        }
        if let Some(ref created) = self.created {
            lines.push(format!("created: {}", created.to_rfc3339()));
        }
        lines.push(format!("pages: {}", self.page_count));

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
