//! Header and footer suppression.
//!
//! Running headers and page numbers sit in a narrow band at the top or
//! bottom of each page and repeat across pages with only the digits
//! changing. Spans in the margin band are dropped only when their
//! normalized text recurs on enough other pages; one-off content that
//! merely sits high or low on a page (a chapter title, a closing line)
//! passes through untouched.

use std::collections::{HashMap, HashSet};

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::model::{SpanDocument, TextSpan};

/// Minimum number of distinct pages a normalized margin text must appear on
/// before it is treated as a running header or footer.
const MIN_RECURRENCE_PAGES: usize = 3;

/// Top/bottom page-height fractions treated as header/footer territory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMargins {
    /// Fraction of page height from the top edge
    pub top_fraction: f32,

    /// Fraction of page height from the bottom edge
    pub bottom_fraction: f32,
}

impl PageMargins {
    /// Create margins, clamping each fraction to `0.0..=0.5`.
    pub fn new(top_fraction: f32, bottom_fraction: f32) -> Self {
        Self {
            top_fraction: top_fraction.clamp(0.0, 0.5),
            bottom_fraction: bottom_fraction.clamp(0.0, 0.5),
        }
    }
}

impl Default for PageMargins {
    fn default() -> Self {
        Self {
            top_fraction: 0.1,
            bottom_fraction: 0.1,
        }
    }
}

/// Filter that drops recurring header/footer spans.
pub struct MarginFilter {
    margins: PageMargins,
    digit_runs: Regex,
    whitespace: Regex,
}

impl MarginFilter {
    /// Create a new filter for the given margin configuration.
    pub fn new(margins: PageMargins) -> Self {
        Self {
            margins,
            digit_runs: Regex::new(r"[0-9]+").unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Return the spans that survive suppression, in their original order.
    ///
    /// Two passes: the first counts, per normalized margin text, the set of
    /// pages it appears on; the second drops margin candidates whose text
    /// recurs on at least two other pages. Documents with fewer than three
    /// pages cannot establish recurrence and are passed through whole.
    pub fn filter(&self, doc: &SpanDocument) -> Vec<TextSpan> {
        if doc.page_count < MIN_RECURRENCE_PAGES as u32 {
            return doc.spans.clone();
        }

        let mut pages_by_text: HashMap<String, HashSet<u32>> = HashMap::new();
        for span in &doc.spans {
            if self.is_margin_candidate(span, doc) {
                pages_by_text
                    .entry(self.normalize(&span.text))
                    .or_default()
                    .insert(span.page_number);
            }
        }

        doc.spans
            .iter()
            .filter(|span| {
                if !self.is_margin_candidate(span, doc) {
                    return true;
                }
                let recurrence = pages_by_text
                    .get(&self.normalize(&span.text))
                    .map_or(0, |pages| pages.len());
                if recurrence >= MIN_RECURRENCE_PAGES {
                    log::debug!(
                        "suppressing margin span {:?} on page {} (seen on {} pages)",
                        span.text,
                        span.page_number,
                        recurrence
                    );
                    false
                } else {
                    true
                }
            })
            .cloned()
            .collect()
    }

    /// Check whether a span's vertical center lies in the margin band.
    ///
    /// Spans on pages with unknown height are never candidates.
    fn is_margin_candidate(&self, span: &TextSpan, doc: &SpanDocument) -> bool {
        let Some(height) = doc.page_height(span.page_number) else {
            return false;
        };
        let center = span.bbox.center_y();
        center < height * self.margins.top_fraction
            || center > height * (1.0 - self.margins.bottom_fraction)
    }

    /// Normalize text for recurrence comparison: trim, NFKC-fold, replace
    /// digit runs with a placeholder, collapse inner whitespace.
    ///
    /// The digit placeholder is what makes "Page 1" and "Page 2" compare
    /// equal across pages.
    fn normalize(&self, text: &str) -> String {
        let folded: String = text.trim().nfkc().collect();
        let masked = self.digit_runs.replace_all(&folded, "#");
        self.whitespace.replace_all(&masked, " ").into_owned()
    }
}

impl Default for MarginFilter {
    fn default() -> Self {
        Self::new(PageMargins::default())
    }
}
