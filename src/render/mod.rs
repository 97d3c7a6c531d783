//! Document renderer - markdown to a decorated document tree
//!
//! Rendering runs three stages over one post's raw markdown: parse (GFM),
//! highlight (fenced code with a declared language) and decorate (fixed
//! structural rules). It is total: every input string yields a document.

pub mod decorate;
pub mod document;
pub mod highlight;
pub mod html;
pub mod parse;
pub mod stats;

use serde::Serialize;

use crate::config::SiteConfig;

pub use decorate::{decorate, DecorationRule, DEFAULT_RULES};
pub use document::{Block, CodeBlock, HighlightSpan, Inline, ListItem, ListMarker};
pub use highlight::{CodeHighlighter, SyntectHighlighter};
pub use stats::{DocumentStats, DEFAULT_WORDS_PER_MINUTE};

/// A rendered post body with its display metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedDocument {
    pub blocks: Vec<Block>,
    #[serde(flatten)]
    pub stats: DocumentStats,
}

impl RenderedDocument {
    pub fn to_html(&self) -> String {
        html::to_html(&self.blocks)
    }
}

/// Markdown renderer with syntax highlighting
pub struct DocumentRenderer {
    highlighter: Option<Box<dyn CodeHighlighter>>,
    rules: &'static [&'static dyn DecorationRule],
    words_per_minute: usize,
}

impl DocumentRenderer {
    /// Create a new renderer with syntect highlighting and the default rules
    pub fn new() -> Self {
        Self {
            highlighter: Some(Box::new(SyntectHighlighter::new())),
            rules: DEFAULT_RULES,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }

    /// Create with settings from the site configuration
    pub fn from_config(config: &SiteConfig) -> Self {
        let highlighter: Option<Box<dyn CodeHighlighter>> = if config.highlight.enable {
            Some(Box::new(SyntectHighlighter::new()))
        } else {
            None
        };
        Self {
            highlighter,
            rules: DEFAULT_RULES,
            words_per_minute: config.reading.words_per_minute,
        }
    }

    /// Replace the highlighter
    pub fn with_highlighter(mut self, highlighter: Box<dyn CodeHighlighter>) -> Self {
        self.highlighter = Some(highlighter);
        self
    }

    /// Render markdown to a decorated document
    pub fn render(&self, markdown: &str) -> RenderedDocument {
        let blocks = parse::parse(markdown);
        let blocks = match &self.highlighter {
            Some(highlighter) => highlight::highlight_blocks(blocks, highlighter.as_ref()),
            None => blocks,
        };
        let blocks = decorate(blocks, self.rules);
        let stats = DocumentStats::from_markdown(markdown, self.words_per_minute);

        tracing::debug!(
            "Rendered {} top-level blocks, {} words",
            blocks.len(),
            stats.word_count
        );

        RenderedDocument { blocks, stats }
    }
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new()
    }
}
