//! Code highlighting with syntect

use syntect::easy::ScopeRangeIterator;
use syntect::parsing::{ParseState, ScopeStack, SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use super::document::{map_blocks, Block, CodeBlock, HighlightSpan};

/// Turns code in a known language into classed spans
pub trait CodeHighlighter {
    /// Tokenize `code` as `language`. Never fails; unknown languages come back
    /// as unclassified text.
    fn highlight(&self, language: &str, code: &str) -> Vec<HighlightSpan>;
}

/// Scope-based highlighter backed by syntect's default grammars
pub struct SyntectHighlighter {
    syntax_set: SyntaxSet,
}

impl SyntectHighlighter {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    fn syntax_for(&self, language: &str) -> &SyntaxReference {
        self.syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
    }

    fn tokenize(&self, syntax: &SyntaxReference, code: &str) -> Option<Vec<HighlightSpan>> {
        let mut state = ParseState::new(syntax);
        let mut stack = ScopeStack::new();
        let mut spans: Vec<HighlightSpan> = Vec::new();

        for line in LinesWithEndings::from(code) {
            let ops = state.parse_line(line, &self.syntax_set).ok()?;
            for (range, op) in ScopeRangeIterator::new(&ops, line) {
                stack.apply(op).ok()?;
                if range.is_empty() {
                    continue;
                }
                // The bottom scope names the whole grammar (`source.rust`)
                let class = match stack.as_slice() {
                    [_, .., innermost] => Some(innermost.build_string()),
                    _ => None,
                };
                push_span(&mut spans, &line[range], class);
            }
        }
        Some(spans)
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeHighlighter for SyntectHighlighter {
    fn highlight(&self, language: &str, code: &str) -> Vec<HighlightSpan> {
        let syntax = self.syntax_for(language);
        tracing::debug!("Highlighting {} bytes as {}", code.len(), syntax.name);

        self.tokenize(syntax, code).unwrap_or_else(|| {
            tracing::warn!("Failed to highlight {} block, using plain text", language);
            vec![HighlightSpan::plain(code)]
        })
    }
}

/// Adjacent runs with the same class are merged
fn push_span(spans: &mut Vec<HighlightSpan>, text: &str, class: Option<String>) {
    if let Some(last) = spans.last_mut() {
        if last.class == class {
            last.text.push_str(text);
            return;
        }
    }
    spans.push(HighlightSpan {
        text: text.to_string(),
        class,
    });
}

/// Highlight every code block that declares a language
pub fn highlight_blocks(blocks: Vec<Block>, highlighter: &dyn CodeHighlighter) -> Vec<Block> {
    map_blocks(blocks, &|block| match block {
        Block::CodeBlock(code) => Block::CodeBlock(highlight_code_block(code, highlighter)),
        other => other,
    })
}

fn highlight_code_block(block: CodeBlock, highlighter: &dyn CodeHighlighter) -> CodeBlock {
    let highlighted = block
        .language
        .as_deref()
        .map(|lang| highlighter.highlight(lang, &block.code));
    CodeBlock {
        highlighted,
        ..block
    }
}
