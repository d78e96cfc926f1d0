//! Structure classification from font metrics.
//!
//! Three cooperating stages: [`FontAnalysis`] derives the body size and the
//! size-to-tag mapping from one pass over all spans, [`MarginFilter`] drops
//! recurring header/footer spans, and [`StructureTagger`] assigns each
//! retained span its structural role.

mod fonts;
mod margins;
mod tagger;

pub use fonts::FontAnalysis;
pub use margins::{MarginFilter, PageMargins};
pub use tagger::StructureTagger;
