//! Per-span structural tagging.

use crate::classify::FontAnalysis;
use crate::model::{Tag, TaggedSpan, TextSpan};

/// Assigns a structural tag to every span using the document's font analysis.
pub struct StructureTagger<'a> {
    analysis: &'a FontAnalysis,
}

impl<'a> StructureTagger<'a> {
    /// Create a tagger over a completed font analysis.
    pub fn new(analysis: &'a FontAnalysis) -> Self {
        Self { analysis }
    }

    /// Tag a span sequence, preserving order.
    pub fn tag(&self, spans: Vec<TextSpan>) -> Vec<TaggedSpan> {
        spans
            .into_iter()
            .map(|span| {
                let tag = self.tag_span(&span);
                TaggedSpan::new(span, tag)
            })
            .collect()
    }

    /// Decide the tag for one span.
    ///
    /// Monospace families win over the size mapping: code listings are often
    /// set at body size and would otherwise read as paragraphs. Sizes the
    /// analysis never saw fall back to paragraph; that only happens when the
    /// tagged span set differs from the analyzed one, so it is logged as an
    /// anomaly rather than treated as fatal.
    fn tag_span(&self, span: &TextSpan) -> Tag {
        if span.metrics.is_monospace {
            return Tag::Code;
        }

        let key = span.metrics.size_key();
        match self.analysis.tag_for(key) {
            Some(tag) => tag,
            None => {
                log::warn!(
                    "font size {} on page {} missing from analysis; tagging as paragraph",
                    key,
                    span.page_number
                );
                Tag::Paragraph
            }
        }
    }
}
