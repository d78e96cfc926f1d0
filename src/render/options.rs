//! Rendering options and configuration.

/// Options for rendering classified spans.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Maximum heading level (1-6)
    pub max_heading_level: u8,

    /// Include YAML frontmatter with document metadata
    pub include_frontmatter: bool,

    /// Escape special Markdown characters in prose blocks
    pub escape_special_chars: bool,

    /// Wrap bold/italic spans in Markdown emphasis markers
    pub inline_emphasis: bool,

    /// Collect extraction statistics during conversion
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum heading level.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.max_heading_level = level.clamp(1, 6);
        self
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Enable or disable Markdown escaping in prose.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_special_chars = escape;
        self
    }

    /// Enable or disable inline emphasis markers.
    pub fn with_emphasis(mut self, emphasis: bool) -> Self {
        self.inline_emphasis = emphasis;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_heading_level: 6,
            include_frontmatter: false,
            escape_special_chars: false,
            inline_emphasis: true,
            collect_stats: false,
        }
    }
}
