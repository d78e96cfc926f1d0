//! The staged conversion pipeline.
//!
//! Data flows strictly left to right: font analysis over all spans, then
//! margin filtering and per-span tagging, then block merge and rendering.
//! Each stage owns its output exclusively and hands it to the next by move;
//! the input [`SpanDocument`] is never mutated. A pipeline run holds no
//! state shared with any other run, so independent documents convert in
//! parallel without locks (see [`convert_all`]).

use rayon::prelude::*;

use crate::classify::{FontAnalysis, MarginFilter, PageMargins, StructureTagger};
use crate::error::Result;
use crate::model::{SpanDocument, TaggedSpan};
use crate::render::{
    self, ExtractionStats, JsonFormat, MarkdownRenderer, RenderOptions, RenderResult,
};

/// Options accepted by the conversion entry points.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Header/footer margin configuration
    pub margins: PageMargins,

    /// Rendering options
    pub render: RenderOptions,
}

impl ConvertOptions {
    /// Create new conversion options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the top and bottom margin fractions.
    pub fn with_margins(mut self, top_fraction: f32, bottom_fraction: f32) -> Self {
        self.margins = PageMargins::new(top_fraction, bottom_fraction);
        self
    }

    /// Set the maximum heading level (1-6).
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.render = self.render.with_max_heading(level);
        self
    }

    /// Include YAML frontmatter in the output.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.render = self.render.with_frontmatter(include);
        self
    }

    /// Escape special Markdown characters in prose.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.render = self.render.with_escaping(escape);
        self
    }

    /// Set rendering options wholesale.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }
}

/// Run the classification stages: analyze fonts, drop header/footer spans,
/// tag the survivors.
///
/// Fails with [`crate::Error::EmptyDocument`] when the document has no
/// visible text; no partial output is ever produced past this point.
pub fn classify(doc: &SpanDocument, options: &ConvertOptions) -> Result<Vec<TaggedSpan>> {
    let analysis = FontAnalysis::from_spans(&doc.spans, options.render.max_heading_level)?;
    log::debug!(
        "font analysis: body {} across {} distinct sizes",
        analysis.body_size,
        analysis.distinct_sizes()
    );

    let kept = MarginFilter::new(options.margins).filter(doc);
    Ok(StructureTagger::new(&analysis).tag(kept))
}

/// Convert a span document to Markdown.
pub fn convert(doc: &SpanDocument, options: &ConvertOptions) -> Result<String> {
    let tagged = classify(doc, options)?;
    let body = render::to_markdown(&tagged, &options.render)?;
    Ok(prepend_frontmatter(doc, options, body))
}

/// Convert a span document to Markdown, returning statistics alongside the
/// content.
pub fn convert_with_stats(doc: &SpanDocument, options: &ConvertOptions) -> Result<RenderResult> {
    let tagged = classify(doc, options)?;

    let renderer = MarkdownRenderer::new(options.render.clone());
    let blocks = renderer.merge(&tagged);
    let body = renderer.render_blocks(&blocks);

    let mut stats = ExtractionStats::new();
    stats.page_count = doc.page_count;
    stats.span_count = doc.span_count() as u32;
    stats.suppressed_span_count = (doc.span_count() - tagged.len()) as u32;
    for block in &blocks {
        stats.add_block(block.tag);
    }
    stats.count_text(&body);

    let content = prepend_frontmatter(doc, options, body);
    Ok(RenderResult::new(content, doc.metadata.clone(), stats))
}

/// Convert a span document to plain text.
pub fn convert_to_text(doc: &SpanDocument, options: &ConvertOptions) -> Result<String> {
    let tagged = classify(doc, options)?;
    render::to_text(&tagged, &options.render)
}

/// Convert a span document to a JSON block list.
pub fn convert_to_json(
    doc: &SpanDocument,
    options: &ConvertOptions,
    format: JsonFormat,
) -> Result<String> {
    let tagged = classify(doc, options)?;
    let plain = options.render.clone().with_emphasis(false);
    let blocks = MarkdownRenderer::new(plain).merge(&tagged);
    render::to_json(&blocks, format)
}

/// Convert a batch of independent documents in parallel.
///
/// Each document gets its own pipeline run with private analysis state;
/// results come back in input order.
pub fn convert_all(docs: &[SpanDocument], options: &ConvertOptions) -> Vec<Result<String>> {
    docs.par_iter().map(|doc| convert(doc, options)).collect()
}

fn prepend_frontmatter(doc: &SpanDocument, options: &ConvertOptions, body: String) -> String {
    if !options.render.include_frontmatter {
        return body;
    }
    let mut output = doc.metadata.to_yaml_frontmatter();
    output.push('\n');
    output.push_str(&body);
    output
}
