//! # spandown
//!
//! Structure classification and Markdown rendering for styled text spans.
//!
//! Given a sequence of text spans with font metrics (size, family, style
//! flags) and page coordinates, as produced by any page-extraction engine,
//! this library derives the document's body font size from a character
//! histogram, classifies every span into a structural role (headings,
//! paragraph, code, small text), suppresses recurring headers and footers,
//! and renders the result as Markdown.
//!
//! ## Quick Start
//!
//! ```
//! use spandown::{BoundingBox, ConvertOptions, FontMetrics, SpanDocument, TextSpan};
//!
//! fn main() -> spandown::Result<()> {
//!     let mut doc = SpanDocument::new(1);
//!     doc.set_page_height(1, 792.0);
//!     doc.add_span(TextSpan::new(
//!         "Getting Started",
//!         FontMetrics::new(20.0, "Helvetica"),
//!         1,
//!         BoundingBox::new(72.0, 90.0, 300.0, 110.0),
//!         0,
//!     ));
//!     doc.add_span(TextSpan::new(
//!         "Body paragraphs carry most of the document's characters.",
//!         FontMetrics::new(10.0, "Helvetica"),
//!         1,
//!         BoundingBox::new(72.0, 130.0, 500.0, 140.0),
//!         1,
//!     ));
//!
//!     let markdown = spandown::to_markdown(&doc, &ConvertOptions::default())?;
//!     assert!(markdown.starts_with("# Getting Started"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Font-statistics classifier**: body size by character volume, heading
//!   levels by descending size rank, monospace detection for code
//! - **Header/footer suppression**: margin-band spans that recur across
//!   pages are dropped, one-off content is kept
//! - **Multiple output formats**: Markdown, plain text, JSON block list
//! - **Batch conversion**: independent documents convert in parallel via
//!   Rayon, with no shared state

pub mod classify;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod render;

// Re-export commonly used types
pub use classify::{FontAnalysis, MarginFilter, PageMargins, StructureTagger};
pub use error::{Error, Result};
pub use model::{
    Block, BoundingBox, FontMetrics, Metadata, SizeKey, SpanDocument, Tag, TaggedSpan, TextSpan,
};
pub use pipeline::{convert_all, ConvertOptions};
pub use render::{ExtractionStats, JsonFormat, MarkdownRenderer, RenderOptions, RenderResult};

/// Convert a span document to Markdown.
///
/// # Example
///
/// ```no_run
/// use spandown::{ConvertOptions, SpanDocument};
///
/// let doc: SpanDocument = todo!("obtain spans from an extraction engine");
/// let markdown = spandown::to_markdown(&doc, &ConvertOptions::default()).unwrap();
/// std::fs::write("output.md", markdown).unwrap();
/// ```
pub fn to_markdown(doc: &SpanDocument, options: &ConvertOptions) -> Result<String> {
    pipeline::convert(doc, options)
}

/// Convert a span document to Markdown, returning statistics alongside.
pub fn to_markdown_with_stats(
    doc: &SpanDocument,
    options: &ConvertOptions,
) -> Result<RenderResult> {
    pipeline::convert_with_stats(doc, options)
}

/// Convert a span document to plain text.
pub fn to_text(doc: &SpanDocument, options: &ConvertOptions) -> Result<String> {
    pipeline::convert_to_text(doc, options)
}

/// Convert a span document to a JSON list of classified blocks.
pub fn to_json(doc: &SpanDocument, options: &ConvertOptions, format: JsonFormat) -> Result<String> {
    pipeline::convert_to_json(doc, options, format)
}

/// Builder for configuring and running conversions.
///
/// # Example
///
/// ```no_run
/// use spandown::{Spandown, SpanDocument};
///
/// let doc: SpanDocument = todo!("obtain spans from an extraction engine");
/// let markdown = Spandown::new()
///     .with_margins(0.08, 0.12)
///     .with_max_heading(3)
///     .with_frontmatter()
///     .convert(&doc)?;
/// # Ok::<(), spandown::Error>(())
/// ```
pub struct Spandown {
    options: ConvertOptions,
}

impl Spandown {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
        }
    }

    /// Set the top and bottom margin fractions.
    pub fn with_margins(mut self, top_fraction: f32, bottom_fraction: f32) -> Self {
        self.options = self.options.with_margins(top_fraction, bottom_fraction);
        self
    }

    /// Set the maximum heading level (1-6).
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.options = self.options.with_max_heading(level);
        self
    }

    /// Include YAML frontmatter in the output.
    pub fn with_frontmatter(mut self) -> Self {
        self.options = self.options.with_frontmatter(true);
        self
    }

    /// Escape special Markdown characters in prose.
    pub fn with_escaping(mut self) -> Self {
        self.options = self.options.with_escaping(true);
        self
    }

    /// Convert a single document to Markdown.
    pub fn convert(&self, doc: &SpanDocument) -> Result<String> {
        pipeline::convert(doc, &self.options)
    }

    /// Convert a batch of documents in parallel.
    pub fn convert_all(&self, docs: &[SpanDocument]) -> Vec<Result<String>> {
        pipeline::convert_all(docs, &self.options)
    }

    /// The options this builder has accumulated.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }
}

impl Default for Spandown {
    fn default() -> Self {
        Self::new()
    }
}
