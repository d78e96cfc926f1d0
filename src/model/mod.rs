//! Data model for span classification and rendering.
//!
//! These types bridge the external span source and the rendering stages.
//! Everything here is a plain value: spans are produced once by the source
//! and never mutated, and each pipeline stage owns its output exclusively.

mod block;
mod document;
mod span;

pub use block::{Block, Tag, TaggedSpan};
pub use document::{Metadata, SpanDocument};
pub use span::{BoundingBox, FontMetrics, SizeKey, TextSpan};
