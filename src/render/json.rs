//! JSON rendering for classified span streams.

use crate::error::Result;
use crate::model::Block;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize merged blocks to JSON.
pub fn to_json(blocks: &[Block], format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(blocks),
        JsonFormat::Compact => serde_json::to_string(blocks),
    };
    Ok(result?)
}
