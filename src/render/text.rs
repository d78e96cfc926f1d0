//! Plain text rendering for classified span streams.

use crate::error::Result;
use crate::model::TaggedSpan;

use super::{MarkdownRenderer, RenderOptions};

/// Convert a tagged span stream to plain text.
///
/// Uses the same block merge as the Markdown renderer but emits no markup:
/// headings, paragraphs, code, and small text all come out as bare blocks
/// separated by blank lines.
pub fn to_text(tagged: &[TaggedSpan], options: &RenderOptions) -> Result<String> {
    let plain = options
        .clone()
        .with_emphasis(false)
        .with_escaping(false);
    let blocks = MarkdownRenderer::new(plain).merge(tagged);

    let mut output = blocks
        .iter()
        .map(|b| b.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");
    if !output.is_empty() {
        output.push('\n');
    }
    Ok(output)
}
