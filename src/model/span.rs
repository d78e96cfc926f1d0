//! Styled text spans and their font metrics.

use serde::{Deserialize, Serialize};

/// Font family keywords that indicate a monospace (code) font.
const MONOSPACE_KEYWORDS: [&str; 4] = ["mono", "courier", "code", "consolas"];

/// A font size rounded to the nearest half point.
///
/// Raw sizes coming out of rendering engines jitter by fractions of a point
/// for what is visually the same style; bucketing to 0.5 pt absorbs that
/// jitter while keeping distinct sizes apart. The key is an integer count of
/// half points, so it is `Ord + Eq` and usable in a `BTreeMap`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SizeKey(i32);

impl SizeKey {
    /// Bucket a raw font size to the nearest half point.
    pub fn from_size(size: f32) -> Self {
        SizeKey((size * 2.0).round() as i32)
    }

    /// The size this key represents, in points.
    pub fn as_f32(&self) -> f32 {
        self.0 as f32 / 2.0
    }
}

impl std::fmt::Display for SizeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}pt", self.as_f32())
    }
}

/// Font style information for a single text span.
///
/// Immutable value derived once per span from the raw style the span source
/// reports. Equality is by value; `size_key()` is what the classifier uses
/// as its histogram key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontMetrics {
    /// Font size in points
    pub size: f32,

    /// Font family name (e.g., "Helvetica-Bold")
    pub family: String,

    /// Whether the font is bold
    pub is_bold: bool,

    /// Whether the font is italic
    pub is_italic: bool,

    /// Whether the font family is monospace (code font)
    pub is_monospace: bool,
}

impl FontMetrics {
    /// Create metrics from a size and family name, deriving the style flags
    /// from the family name.
    pub fn new(size: f32, family: impl Into<String>) -> Self {
        let family = family.into();
        let lower = family.to_lowercase();
        let is_bold =
            lower.contains("bold") || lower.contains("black") || lower.contains("heavy");
        let is_italic = lower.contains("italic") || lower.contains("oblique");
        let is_monospace = MONOSPACE_KEYWORDS.iter().any(|k| lower.contains(k));

        Self {
            size,
            family,
            is_bold,
            is_italic,
            is_monospace,
        }
    }

    /// Create metrics with explicit bold/italic flags from the span source.
    ///
    /// Monospace detection still comes from the family name; span sources
    /// generally report weight and slant but not "this is a code font".
    pub fn with_flags(size: f32, family: impl Into<String>, bold: bool, italic: bool) -> Self {
        let mut metrics = Self::new(size, family);
        metrics.is_bold = bold;
        metrics.is_italic = italic;
        metrics
    }

    /// The histogram key for this font size.
    pub fn size_key(&self) -> SizeKey {
        SizeKey::from_size(self.size)
    }
}

/// An axis-aligned bounding box in top-origin page coordinates.
///
/// `y` grows downward: `y0` is the top edge, `y1` the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub y1: f32,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Vertical center of the box.
    pub fn center_y(&self) -> f32 {
        (self.y0 + self.y1) / 2.0
    }

    /// Height of the box.
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }
}

/// A contiguous run of text sharing one font style, as extracted from a page.
///
/// Spans are produced by the span source and never mutated here; every
/// pipeline stage that keeps a span clones it into its own output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextSpan {
    /// The text content
    pub text: String,

    /// Font metrics of the run
    pub metrics: FontMetrics,

    /// Page number (1-indexed)
    pub page_number: u32,

    /// Position on the page
    pub bbox: BoundingBox,

    /// Reading-order index within the page
    pub order_index: u32,
}

impl TextSpan {
    /// Create a new text span.
    pub fn new(
        text: impl Into<String>,
        metrics: FontMetrics,
        page_number: u32,
        bbox: BoundingBox,
        order_index: u32,
    ) -> Self {
        Self {
            text: text.into(),
            metrics,
            page_number,
            bbox,
            order_index,
        }
    }

    /// Check if the span contains only whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Number of non-whitespace characters in the span.
    ///
    /// This is the weight the font analyzer accumulates per size bucket:
    /// long paragraph runs should outweigh many short decorative runs.
    pub fn char_weight(&self) -> u64 {
        self.text.chars().filter(|c| !c.is_whitespace()).count() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_key_rounding() {
        assert_eq!(SizeKey::from_size(12.0), SizeKey::from_size(12.1));
        assert_eq!(SizeKey::from_size(12.0), SizeKey::from_size(11.8));
        assert_ne!(SizeKey::from_size(12.0), SizeKey::from_size(12.5));
        assert_eq!(SizeKey::from_size(12.5).as_f32(), 12.5);
    }

    #[test]
    fn test_bold_italic_detection() {
        let metrics = FontMetrics::new(12.0, "Helvetica-Bold");
        assert!(metrics.is_bold);
        assert!(!metrics.is_italic);

        let metrics = FontMetrics::new(12.0, "Times-Oblique");
        assert!(!metrics.is_bold);
        assert!(metrics.is_italic);
    }

    #[test]
    fn test_monospace_detection() {
        assert!(FontMetrics::new(10.0, "Courier New").is_monospace);
        assert!(FontMetrics::new(10.0, "JetBrains Mono").is_monospace);
        assert!(FontMetrics::new(10.0, "Consolas").is_monospace);
        assert!(!FontMetrics::new(10.0, "Georgia").is_monospace);
    }

    #[test]
    fn test_with_flags_keeps_monospace_from_family() {
        let metrics = FontMetrics::with_flags(10.0, "Courier", true, false);
        assert!(metrics.is_bold);
        assert!(metrics.is_monospace);
    }

    #[test]
    fn test_bbox_center() {
        let bbox = BoundingBox::new(0.0, 10.0, 100.0, 30.0);
        assert_eq!(bbox.center_y(), 20.0);
        assert_eq!(bbox.height(), 20.0);
    }

    #[test]
    fn test_span_char_weight() {
        let span = TextSpan::new(
            "ab cd",
            FontMetrics::new(12.0, "Helvetica"),
            1,
            BoundingBox::new(0.0, 0.0, 50.0, 12.0),
            0,
        );
        assert_eq!(span.char_weight(), 4);
        assert!(!span.is_whitespace());
    }
}
