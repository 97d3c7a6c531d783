//! Document tree produced by the renderer

use serde::Serialize;

/// Column alignment taken from the table delimiter row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    None,
    Left,
    Center,
    Right,
}

impl From<pulldown_cmark::Alignment> for Alignment {
    fn from(a: pulldown_cmark::Alignment) -> Self {
        match a {
            pulldown_cmark::Alignment::None => Alignment::None,
            pulldown_cmark::Alignment::Left => Alignment::Left,
            pulldown_cmark::Alignment::Center => Alignment::Center,
            pulldown_cmark::Alignment::Right => Alignment::Right,
        }
    }
}

/// Source marker of a thematic break
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleStyle {
    Dashes,
    Asterisks,
    Underscores,
}

/// Marker shown in front of a list item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListMarker {
    Bullet,
    Numbered,
    /// Suppressed, e.g. for checkbox items
    None,
}

/// Decorative icons attached by the decoration pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Quote,
}

/// A run of highlighted code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightSpan {
    pub text: String,
    /// Innermost syntax scope, e.g. `keyword.control.rust`; `None` for plain text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl HighlightSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: None,
        }
    }

    pub fn classed(text: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: Some(class.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeBlock {
    /// Full info string of a fenced block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    /// First word of the info string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub code: String,
    /// Set by the highlight stage for blocks with a declared language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted: Option<Vec<HighlightSpan>>,
    /// Set by the decoration pass
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    pub marker: ListMarker,
    /// `Some(checked)` for checkbox items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkbox: Option<bool>,
    pub children: Vec<Block>,
}

impl ListItem {
    pub fn is_checkbox_item(&self) -> bool {
        self.checkbox.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub alignments: Vec<Alignment>,
    pub header: Vec<Vec<Inline>>,
    pub rows: Vec<Vec<Vec<Inline>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph {
        content: Vec<Inline>,
    },
    /// Inline content of a tight list item, not wrapped in a paragraph
    Plain {
        content: Vec<Inline>,
    },
    Heading {
        level: u8,
        content: Vec<Inline>,
    },
    List {
        /// Start number of an ordered list
        #[serde(skip_serializing_if = "Option::is_none")]
        start: Option<u64>,
        items: Vec<ListItem>,
    },
    Blockquote {
        #[serde(skip_serializing_if = "Option::is_none")]
        icon: Option<Icon>,
        children: Vec<Block>,
    },
    Table(Table),
    /// Scrollable wrapper placed around tables
    ScrollContainer {
        child: Box<Block>,
    },
    CodeBlock(CodeBlock),
    ThematicBreak {
        style: RuleStyle,
    },
    /// Normalized horizontal rule
    Divider,
    Html {
        html: String,
    },
    FootnoteDefinition {
        label: String,
        children: Vec<Block>,
    },
}

impl Block {
    /// Inline content directly owned by this block
    pub fn inlines(&self) -> &[Inline] {
        match self {
            Block::Paragraph { content }
            | Block::Plain { content }
            | Block::Heading { content, .. } => content,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    Text {
        text: String,
    },
    Code {
        code: String,
    },
    Emphasis {
        children: Vec<Inline>,
    },
    Strong {
        children: Vec<Inline>,
    },
    Strikethrough {
        children: Vec<Inline>,
    },
    Link {
        url: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        title: String,
        /// Produced from an autolink rather than `[text](url)`
        autolink: bool,
        children: Vec<Inline>,
    },
    Image {
        url: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        title: String,
        alt: String,
    },
    Checkbox {
        checked: bool,
    },
    FootnoteReference {
        label: String,
    },
    Html {
        html: String,
    },
    SoftBreak,
    HardBreak,
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text { text: text.into() }
    }

    /// Concatenated plain text of this inline and its children
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain_text(&mut out);
        out
    }

    fn push_plain_text(&self, out: &mut String) {
        match self {
            Inline::Text { text } => out.push_str(text),
            Inline::Code { code } => out.push_str(code),
            Inline::Emphasis { children }
            | Inline::Strong { children }
            | Inline::Strikethrough { children }
            | Inline::Link { children, .. } => {
                for child in children {
                    child.push_plain_text(out);
                }
            }
            Inline::Image { alt, .. } => out.push_str(alt),
            Inline::SoftBreak | Inline::HardBreak => out.push(' '),
            Inline::Checkbox { .. } | Inline::FootnoteReference { .. } | Inline::Html { .. } => {}
        }
    }
}

/// Plain text of an inline sequence
pub fn inlines_to_text(inlines: &[Inline]) -> String {
    inlines.iter().map(Inline::plain_text).collect()
}

/// Apply `f` to every block bottom-up: children are rewritten before their
/// parent is handed to `f`. The content of a scroll container is left alone.
pub fn map_blocks<F>(blocks: Vec<Block>, f: &F) -> Vec<Block>
where
    F: Fn(Block) -> Block,
{
    blocks.into_iter().map(|b| map_block(b, f)).collect()
}

fn map_block<F>(block: Block, f: &F) -> Block
where
    F: Fn(Block) -> Block,
{
    let block = match block {
        Block::Blockquote { icon, children } => Block::Blockquote {
            icon,
            children: map_blocks(children, f),
        },
        Block::FootnoteDefinition { label, children } => Block::FootnoteDefinition {
            label,
            children: map_blocks(children, f),
        },
        Block::List { start, items } => Block::List {
            start,
            items: items
                .into_iter()
                .map(|item| ListItem {
                    children: map_blocks(item.children, f),
                    ..item
                })
                .collect(),
        },
        other => other,
    };
    f(block)
}
