//! Structural decorations applied to the parsed tree
//!
//! Each rule rewrites single blocks; [`decorate`] runs the rules in order,
//! each over the whole tree, bottom-up. Running it twice changes nothing.

use lazy_static::lazy_static;
use regex::Regex;

use super::document::{map_blocks, Block, CodeBlock, Icon, Inline, ListItem, ListMarker};

lazy_static! {
    static ref BADGE_RE: Regex = Regex::new(r"^\w+").expect("valid badge regex");
}

/// A tree transform applied to every block
pub trait DecorationRule: Sync {
    fn name(&self) -> &'static str;
    fn apply(&self, block: Block) -> Block;
}

/// Attaches the declared language as badge text on fenced code
pub struct CodeBadge;

/// Places the quote icon beside blockquote content
pub struct QuoteIcon;

/// Collapses `---`, `***` and `___` into one divider node
pub struct NormalizeRules;

/// Wraps tables in a scrollable container
pub struct ScrollableTables;

/// Marks list items that start with their only checkbox
pub struct CheckboxItems;

/// The fixed decoration order
pub static DEFAULT_RULES: &[&dyn DecorationRule] = &[
    &CodeBadge,
    &QuoteIcon,
    &NormalizeRules,
    &ScrollableTables,
    &CheckboxItems,
];

/// Apply `rules` in order
pub fn decorate(blocks: Vec<Block>, rules: &[&dyn DecorationRule]) -> Vec<Block> {
    rules.iter().fold(blocks, |blocks, rule| {
        tracing::trace!("Applying decoration rule {}", rule.name());
        map_blocks(blocks, &|block| rule.apply(block))
    })
}

/// Badge text for a language tag: its leading word characters
pub fn badge_for(language: &str) -> Option<String> {
    BADGE_RE.find(language).map(|m| m.as_str().to_string())
}

impl DecorationRule for CodeBadge {
    fn name(&self) -> &'static str {
        "code-badge"
    }

    fn apply(&self, block: Block) -> Block {
        match block {
            Block::CodeBlock(code) => {
                let badge = code.language.as_deref().and_then(badge_for);
                Block::CodeBlock(CodeBlock { badge, ..code })
            }
            other => other,
        }
    }
}

impl DecorationRule for QuoteIcon {
    fn name(&self) -> &'static str {
        "quote-icon"
    }

    fn apply(&self, block: Block) -> Block {
        match block {
            Block::Blockquote { children, .. } => Block::Blockquote {
                icon: Some(Icon::Quote),
                children,
            },
            other => other,
        }
    }
}

impl DecorationRule for NormalizeRules {
    fn name(&self) -> &'static str {
        "normalize-rules"
    }

    fn apply(&self, block: Block) -> Block {
        match block {
            Block::ThematicBreak { .. } => Block::Divider,
            other => other,
        }
    }
}

impl DecorationRule for ScrollableTables {
    fn name(&self) -> &'static str {
        "scrollable-tables"
    }

    fn apply(&self, block: Block) -> Block {
        match block {
            table @ Block::Table(_) => Block::ScrollContainer {
                child: Box::new(table),
            },
            other => other,
        }
    }
}

impl DecorationRule for CheckboxItems {
    fn name(&self) -> &'static str {
        "checkbox-items"
    }

    fn apply(&self, block: Block) -> Block {
        match block {
            Block::List { start, items } => Block::List {
                start,
                items: items.into_iter().map(mark_checkbox_item).collect(),
            },
            other => other,
        }
    }
}

fn mark_checkbox_item(item: ListItem) -> ListItem {
    match leading_checkbox(&item) {
        Some(checked) => ListItem {
            marker: ListMarker::None,
            checkbox: Some(checked),
            ..item
        },
        None => item,
    }
}

/// `Some(checked)` if the item's first inline is a checkbox and no other
/// direct inline child is one
fn leading_checkbox(item: &ListItem) -> Option<bool> {
    let first = item.children.first()?;
    let inlines = match first {
        Block::Plain { content } | Block::Paragraph { content } => content,
        _ => return None,
    };

    let checked = match inlines.first()? {
        Inline::Checkbox { checked } => *checked,
        _ => return None,
    };

    let checkboxes = item
        .children
        .iter()
        .flat_map(|b| b.inlines())
        .filter(|i| matches!(i, Inline::Checkbox { .. }))
        .count();

    (checkboxes == 1).then_some(checked)
}
