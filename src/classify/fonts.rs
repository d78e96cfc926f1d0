//! Document-wide font statistics for structure classification.
//!
//! One pass over all spans builds a histogram of character volume per
//! rounded font size. The dominant bucket is the body text size; everything
//! above it becomes a heading level, everything below it annotation text.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{SizeKey, Tag, TextSpan};

/// Results of analyzing font usage across a whole document.
///
/// Built once per document and read-only thereafter, so parallel pipelines
/// over independent documents never share mutable state. `BTreeMap` keys
/// keep iteration order deterministic: analyzing the same spans twice
/// produces an identical value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontAnalysis {
    /// Accumulated non-whitespace character count per rounded size
    pub size_histogram: BTreeMap<SizeKey, u64>,

    /// The size judged to be ordinary body text
    pub body_size: SizeKey,

    /// Mapping from rounded size to structural tag
    pub size_to_tag: BTreeMap<SizeKey, Tag>,
}

impl FontAnalysis {
    /// Analyze a span sequence and derive the size-to-tag mapping.
    ///
    /// Character volume, not span count, decides the body size: a style used
    /// for a handful of long paragraphs outweighs one used for many short
    /// labels. Ties break toward the smaller size, since body text is rarely
    /// the largest font on a page.
    ///
    /// Returns [`Error::EmptyDocument`] when no span carries visible text.
    pub fn from_spans(spans: &[TextSpan], max_heading_level: u8) -> Result<Self> {
        let mut size_histogram: BTreeMap<SizeKey, u64> = BTreeMap::new();

        for span in spans {
            if span.is_whitespace() {
                continue;
            }
            *size_histogram.entry(span.metrics.size_key()).or_insert(0) += span.char_weight();
        }

        // Ascending iteration plus a strictly-greater comparison keeps the
        // smaller size on a tie.
        let mut body: Option<(SizeKey, u64)> = None;
        for (&key, &count) in &size_histogram {
            if body.map_or(true, |(_, best)| count > best) {
                body = Some((key, count));
            }
        }
        let (body_size, _) = body.ok_or(Error::EmptyDocument)?;

        let max_level = max_heading_level.clamp(1, 6);
        let mut size_to_tag = BTreeMap::new();
        let mut level = 0u8;

        for &key in size_histogram.keys().rev() {
            let tag = if key > body_size {
                // Distinct larger sizes rank H1, H2, ... descending; buckets
                // past the configured depth fold into the last level.
                level = (level + 1).min(max_level);
                Tag::from_heading_level(level)
            } else if key == body_size {
                Tag::Paragraph
            } else {
                Tag::Small
            };
            size_to_tag.insert(key, tag);
        }

        Ok(Self {
            size_histogram,
            body_size,
            size_to_tag,
        })
    }

    /// The body text size in points.
    pub fn body_size_pt(&self) -> f32 {
        self.body_size.as_f32()
    }

    /// Look up the tag for a rounded size, if it was seen during analysis.
    pub fn tag_for(&self, key: SizeKey) -> Option<Tag> {
        self.size_to_tag.get(&key).copied()
    }

    /// Number of distinct sizes observed.
    pub fn distinct_sizes(&self) -> usize {
        self.size_histogram.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoundingBox, FontMetrics};

    fn span(text: &str, size: f32, page: u32, idx: u32) -> TextSpan {
        TextSpan::new(
            text,
            FontMetrics::new(size, "Helvetica"),
            page,
            BoundingBox::new(72.0, 100.0, 400.0, 100.0 + size),
            idx,
        )
    }

    #[test]
    fn test_body_size_by_char_volume_not_span_count() {
        // 10 short spans at 14pt vs 2 long paragraph spans at 10pt: the
        // paragraph size must win on accumulated characters.
        let mut spans: Vec<TextSpan> = (0..10).map(|i| span("label", 14.0, 1, i)).collect();
        spans.push(span(
            "A long paragraph of body text that dominates the character count easily.",
            10.0,
            1,
            10,
        ));
        spans.push(span(
            "Another long paragraph of ordinary prose, also set at the body size.",
            10.0,
            1,
            11,
        ));

        let analysis = FontAnalysis::from_spans(&spans, 6).unwrap();
        assert_eq!(analysis.body_size, SizeKey::from_size(10.0));
        assert_eq!(analysis.tag_for(SizeKey::from_size(14.0)), Some(Tag::H1));
    }

    #[test]
    fn test_body_size_tie_breaks_smaller() {
        let spans = vec![span("abcde", 16.0, 1, 0), span("fghij", 11.0, 1, 1)];
        let analysis = FontAnalysis::from_spans(&spans, 6).unwrap();
        assert_eq!(analysis.body_size, SizeKey::from_size(11.0));
    }

    #[test]
    fn test_empty_document() {
        let result = FontAnalysis::from_spans(&[], 6);
        assert!(matches!(result, Err(Error::EmptyDocument)));

        let whitespace_only = vec![span("   \n", 12.0, 1, 0)];
        let result = FontAnalysis::from_spans(&whitespace_only, 6);
        assert!(matches!(result, Err(Error::EmptyDocument)));
    }

    #[test]
    fn test_heading_ranks_descend_with_size() {
        let mut spans = vec![span(
            "body body body body body body body body",
            10.0,
            1,
            0,
        )];
        for (i, size) in [24.0, 18.0, 14.0, 12.0].iter().enumerate() {
            spans.push(span("heading", *size, 1, i as u32 + 1));
        }

        let analysis = FontAnalysis::from_spans(&spans, 6).unwrap();
        assert_eq!(analysis.tag_for(SizeKey::from_size(24.0)), Some(Tag::H1));
        assert_eq!(analysis.tag_for(SizeKey::from_size(18.0)), Some(Tag::H2));
        assert_eq!(analysis.tag_for(SizeKey::from_size(14.0)), Some(Tag::H3));
        assert_eq!(analysis.tag_for(SizeKey::from_size(12.0)), Some(Tag::H4));
        assert_eq!(
            analysis.tag_for(SizeKey::from_size(10.0)),
            Some(Tag::Paragraph)
        );
    }

    #[test]
    fn test_sizes_beyond_configured_depth_fold_into_last_level() {
        let mut spans = vec![span(
            "body body body body body body body body",
            9.0,
            1,
            0,
        )];
        for (i, size) in [30.0, 28.0, 26.0, 24.0].iter().enumerate() {
            spans.push(span("heading", *size, 1, i as u32 + 1));
        }

        let analysis = FontAnalysis::from_spans(&spans, 2).unwrap();
        assert_eq!(analysis.tag_for(SizeKey::from_size(30.0)), Some(Tag::H1));
        assert_eq!(analysis.tag_for(SizeKey::from_size(28.0)), Some(Tag::H2));
        assert_eq!(analysis.tag_for(SizeKey::from_size(26.0)), Some(Tag::H2));
        assert_eq!(analysis.tag_for(SizeKey::from_size(24.0)), Some(Tag::H2));
    }

    #[test]
    fn test_smaller_sizes_all_map_to_small() {
        let spans = vec![
            span("body body body body body body", 12.0, 1, 0),
            span("footnote", 8.0, 1, 1),
            span("tiny caption", 6.0, 1, 2),
        ];

        let analysis = FontAnalysis::from_spans(&spans, 6).unwrap();
        assert_eq!(analysis.tag_for(SizeKey::from_size(8.0)), Some(Tag::Small));
        assert_eq!(analysis.tag_for(SizeKey::from_size(6.0)), Some(Tag::Small));
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let spans = vec![
            span("body body body body", 10.0, 1, 0),
            span("Title", 20.0, 1, 1),
            span("note", 7.5, 2, 0),
        ];

        let a = FontAnalysis::from_spans(&spans, 6).unwrap();
        let b = FontAnalysis::from_spans(&spans, 6).unwrap();
        assert_eq!(a, b);
    }
}
