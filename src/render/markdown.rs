//! Markdown rendering for classified span streams.

use crate::error::Result;
use crate::model::{Block, FontMetrics, Tag, TaggedSpan, TextSpan};

use super::RenderOptions;

/// Convert a tagged span stream to Markdown.
pub fn to_markdown(tagged: &[TaggedSpan], options: &RenderOptions) -> Result<String> {
    Ok(MarkdownRenderer::new(options.clone()).render(tagged))
}

/// Markdown renderer: merges adjacent same-tag spans into blocks and emits
/// Markdown syntax per block.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Merge consecutive same-tag spans into blocks.
    ///
    /// A block ends on a tag change, or on a page boundary unless the run is
    /// monospace on both sides: code listings frequently straddle pages,
    /// prose gets a fresh block per page. Inside a code block span texts are
    /// kept verbatim, one line per span, so indentation survives. Prose
    /// spans are trimmed, inner whitespace collapsed, and joined with single
    /// spaces; emphasis is applied per span before joining so boundaries
    /// stay accurate after differently-styled neighbors merge.
    pub fn merge(&self, tagged: &[TaggedSpan]) -> Vec<Block> {
        let mut blocks = Vec::new();
        let mut run: Vec<&TaggedSpan> = Vec::new();

        for item in tagged {
            if let Some(last) = run.last() {
                let tag_changed = last.tag != item.tag;
                let page_changed = last.span.page_number != item.span.page_number;
                if tag_changed || (page_changed && item.tag != Tag::Code) {
                    self.flush(&mut run, &mut blocks);
                }
            }
            run.push(item);
        }
        self.flush(&mut run, &mut blocks);

        blocks
    }

    /// Render a tagged span stream to a Markdown string.
    ///
    /// Every block is separated from its neighbor by exactly one blank
    /// line. Rendering cannot fail on any [`Tag`]; the enum is closed and
    /// matched exhaustively.
    pub fn render(&self, tagged: &[TaggedSpan]) -> String {
        self.render_blocks(&self.merge(tagged))
    }

    /// Render already-merged blocks to a Markdown string.
    pub fn render_blocks(&self, blocks: &[Block]) -> String {
        let rendered: Vec<String> = blocks.iter().map(|b| self.emit(b)).collect();

        let mut output = rendered.join("\n\n");
        if !output.is_empty() {
            output.push('\n');
        }
        output
    }

    fn flush(&self, run: &mut Vec<&TaggedSpan>, blocks: &mut Vec<Block>) {
        if run.is_empty() {
            return;
        }
        let tag = run[0].tag;

        let text = if tag == Tag::Code {
            run.iter()
                .map(|item| item.span.text.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            run.iter()
                .filter_map(|item| self.prose_piece(&item.span))
                .collect::<Vec<_>>()
                .join(" ")
        };
        run.clear();

        let block = Block::new(tag, text);
        if !block.is_empty() {
            blocks.push(block);
        }
    }

    /// Normalize one prose span: collapse whitespace, optionally escape
    /// Markdown metacharacters, wrap in span-level emphasis.
    fn prose_piece(&self, span: &TextSpan) -> Option<String> {
        let collapsed = collapse_whitespace(&span.text);
        if collapsed.is_empty() {
            return None;
        }

        let text = if self.options.escape_special_chars {
            escape_markdown(&collapsed)
        } else {
            collapsed
        };

        Some(if self.options.inline_emphasis {
            apply_emphasis(text, &span.metrics)
        } else {
            text
        })
    }

    fn emit(&self, block: &Block) -> String {
        if let Some(level) = block.tag.heading_level() {
            let level = level.min(self.options.max_heading_level.clamp(1, 6));
            return format!("{} {}", "#".repeat(level as usize), block.text);
        }

        match block.tag {
            Tag::Paragraph => block.text.clone(),
            Tag::Code => format!("```\n{}\n```", block.text),
            Tag::Small => format!("*{}*", block.text),
            // Heading tags returned above; the enum is closed.
            Tag::H1 | Tag::H2 | Tag::H3 | Tag::H4 | Tag::H5 | Tag::H6 => {
                unreachable!("heading tags are emitted before this match")
            }
        }
    }
}

/// Collapse all runs of whitespace (including newlines) to single spaces.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Wrap text in Markdown emphasis according to the span's style flags.
fn apply_emphasis(text: String, metrics: &FontMetrics) -> String {
    let mut result = text;
    if metrics.is_italic {
        result = format!("*{}*", result);
    }
    if metrics.is_bold {
        result = format!("**{}**", result);
    }
    result
}

/// Escape special Markdown characters.
/// Only escape characters that could be misinterpreted as Markdown syntax;
/// escaping is kept minimal so extracted text stays readable.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}
