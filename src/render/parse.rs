//! Markdown parsing into the document tree
//!
//! pulldown-cmark emits a flat event stream; the [`TreeBuilder`] folds it
//! into nested blocks with a stack of open frames. Bare URLs are turned into
//! autolinks in a second pass over the finished tree.

use lazy_static::lazy_static;
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, LinkType, Options, Parser, Tag};
use regex::Regex;

use super::document::{
    map_blocks, Block, CodeBlock, Inline, ListItem, ListMarker, RuleStyle, Table,
};

lazy_static! {
    /// GFM extended autolink literals: URLs (trailing punctuation is trimmed
    /// afterwards) and email addresses
    static ref AUTOLINK_RE: Regex = Regex::new(
        r"(?P<url>(?:https?://|www\.)[^\s<]*[^\s<?!.,:*_~'\x22])|(?P<email>[A-Za-z0-9._+\-]+@[A-Za-z0-9_\-]+(?:\.[A-Za-z0-9_\-]+)+)"
    )
    .expect("valid autolink regex");
}

/// Parser options: the GitHub-flavored extensions
pub fn gfm_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
}

/// Parse markdown into an undecorated block tree
pub fn parse(markdown: &str) -> Vec<Block> {
    let mut builder = TreeBuilder::default();
    for (event, range) in Parser::new_ext(markdown, gfm_options()).into_offset_iter() {
        let source = markdown.get(range).unwrap_or_default();
        builder.event(event, source);
    }
    let blocks = builder.finish();
    map_blocks(blocks, &autolink_block)
}

/// An element that has been opened but not yet closed
enum Frame {
    Paragraph(Vec<Inline>),
    Heading(u8, Vec<Inline>),
    Blockquote(Vec<Block>),
    List(Option<u64>, Vec<ListItem>),
    Item {
        blocks: Vec<Block>,
        inlines: Vec<Inline>,
    },
    Table(Table),
    TableHead(Vec<Vec<Inline>>),
    TableRow(Vec<Vec<Inline>>),
    TableCell(Vec<Inline>),
    CodeBlock {
        info: Option<String>,
        code: String,
    },
    HtmlBlock(String),
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    Strikethrough(Vec<Inline>),
    Link {
        url: String,
        title: String,
        autolink: bool,
        children: Vec<Inline>,
    },
    Image {
        url: String,
        title: String,
        alt: String,
    },
    Footnote(String, Vec<Block>),
    /// Elements without a node of their own; children go to the parent
    Transparent(Vec<Block>),
}

impl Frame {
    /// Hand a block to this frame, or give it back if blocks don't fit here
    fn accept_block(&mut self, block: Block) -> Result<(), Block> {
        match self {
            Frame::Blockquote(children)
            | Frame::Footnote(_, children)
            | Frame::Transparent(children) => children.push(block),
            Frame::Item { blocks, inlines } => {
                flush_plain(blocks, inlines);
                blocks.push(block);
            }
            _ => return Err(block),
        }
        Ok(())
    }

    /// Hand an inline to this frame, or give it back
    fn accept_inline(&mut self, inline: Inline) -> Result<(), Inline> {
        match self {
            Frame::Paragraph(children)
            | Frame::Heading(_, children)
            | Frame::TableCell(children)
            | Frame::Emphasis(children)
            | Frame::Strong(children)
            | Frame::Strikethrough(children)
            | Frame::Link { children, .. }
            | Frame::Item {
                inlines: children, ..
            } => push_merged(children, inline),
            Frame::Image { alt, .. } => alt.push_str(&inline.plain_text()),
            _ => return Err(inline),
        }
        Ok(())
    }
}

/// Adjacent text events are merged into one node
fn push_merged(target: &mut Vec<Inline>, inline: Inline) {
    if let (Some(Inline::Text { text: last }), Inline::Text { text }) = (target.last_mut(), &inline)
    {
        last.push_str(text);
        return;
    }
    target.push(inline);
}

fn flush_plain(blocks: &mut Vec<Block>, inlines: &mut Vec<Inline>) {
    if !inlines.is_empty() {
        blocks.push(Block::Plain {
            content: std::mem::take(inlines),
        });
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn rule_style(source: &str) -> RuleStyle {
    match source.trim_start().chars().next() {
        Some('*') => RuleStyle::Asterisks,
        Some('_') => RuleStyle::Underscores,
        _ => RuleStyle::Dashes,
    }
}

#[derive(Default)]
struct TreeBuilder {
    root: Vec<Block>,
    stack: Vec<Frame>,
}

impl TreeBuilder {
    fn event(&mut self, event: Event<'_>, source: &str) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(_) => self.close(),
            Event::Text(text) => match self.stack.last_mut() {
                Some(Frame::CodeBlock { code, .. }) => code.push_str(&text),
                Some(Frame::HtmlBlock(html)) => html.push_str(&text),
                _ => self.push_inline(Inline::text(text.to_string())),
            },
            Event::Code(code) => self.push_inline(Inline::Code {
                code: code.to_string(),
            }),
            Event::Html(html) | Event::InlineHtml(html) => match self.stack.last_mut() {
                Some(Frame::HtmlBlock(buf)) => buf.push_str(&html),
                _ => self.push_inline(Inline::Html {
                    html: html.to_string(),
                }),
            },
            Event::FootnoteReference(label) => self.push_inline(Inline::FootnoteReference {
                label: label.to_string(),
            }),
            Event::SoftBreak => self.push_inline(Inline::SoftBreak),
            Event::HardBreak => self.push_inline(Inline::HardBreak),
            Event::Rule => self.push_block(Block::ThematicBreak {
                style: rule_style(source),
            }),
            Event::TaskListMarker(checked) => self.push_inline(Inline::Checkbox { checked }),
            _ => {}
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        let frame = match tag {
            Tag::Paragraph => Frame::Paragraph(Vec::new()),
            Tag::Heading { level, .. } => Frame::Heading(heading_level(level), Vec::new()),
            Tag::BlockQuote(_) => Frame::Blockquote(Vec::new()),
            Tag::CodeBlock(kind) => Frame::CodeBlock {
                info: match kind {
                    CodeBlockKind::Fenced(info) if !info.trim().is_empty() => {
                        Some(info.trim().to_string())
                    }
                    _ => None,
                },
                code: String::new(),
            },
            Tag::HtmlBlock => Frame::HtmlBlock(String::new()),
            Tag::List(start) => Frame::List(start, Vec::new()),
            Tag::Item => Frame::Item {
                blocks: Vec::new(),
                inlines: Vec::new(),
            },
            Tag::FootnoteDefinition(label) => Frame::Footnote(label.to_string(), Vec::new()),
            Tag::Table(alignments) => Frame::Table(Table {
                alignments: alignments.into_iter().map(Into::into).collect(),
                header: Vec::new(),
                rows: Vec::new(),
            }),
            Tag::TableHead => Frame::TableHead(Vec::new()),
            Tag::TableRow => Frame::TableRow(Vec::new()),
            Tag::TableCell => Frame::TableCell(Vec::new()),
            Tag::Emphasis => Frame::Emphasis(Vec::new()),
            Tag::Strong => Frame::Strong(Vec::new()),
            Tag::Strikethrough => Frame::Strikethrough(Vec::new()),
            Tag::Link {
                link_type,
                dest_url,
                title,
                ..
            } => Frame::Link {
                url: dest_url.to_string(),
                title: title.to_string(),
                autolink: matches!(link_type, LinkType::Autolink | LinkType::Email),
                children: Vec::new(),
            },
            Tag::Image {
                dest_url, title, ..
            } => Frame::Image {
                url: dest_url.to_string(),
                title: title.to_string(),
                alt: String::new(),
            },
            _ => Frame::Transparent(Vec::new()),
        };
        self.stack.push(frame);
    }

    fn close(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };

        match frame {
            Frame::Paragraph(content) => self.push_block(Block::Paragraph { content }),
            Frame::Heading(level, content) => self.push_block(Block::Heading { level, content }),
            Frame::Blockquote(children) => self.push_block(Block::Blockquote {
                icon: None,
                children,
            }),
            Frame::List(start, items) => self.push_block(Block::List { start, items }),
            Frame::Item {
                mut blocks,
                mut inlines,
            } => {
                flush_plain(&mut blocks, &mut inlines);
                match self.stack.last_mut() {
                    Some(Frame::List(start, items)) => items.push(ListItem {
                        marker: if start.is_some() {
                            ListMarker::Numbered
                        } else {
                            ListMarker::Bullet
                        },
                        checkbox: None,
                        children: blocks,
                    }),
                    _ => {
                        for block in blocks {
                            self.push_block(block);
                        }
                    }
                }
            }
            Frame::TableCell(cell) => match self.stack.last_mut() {
                Some(Frame::TableHead(cells)) | Some(Frame::TableRow(cells)) => cells.push(cell),
                _ => self.push_block(Block::Plain { content: cell }),
            },
            Frame::TableHead(cells) => {
                if let Some(Frame::Table(table)) = self.stack.last_mut() {
                    table.header = cells;
                }
            }
            Frame::TableRow(cells) => {
                if let Some(Frame::Table(table)) = self.stack.last_mut() {
                    table.rows.push(cells);
                }
            }
            Frame::Table(table) => self.push_block(Block::Table(table)),
            Frame::CodeBlock { info, code } => {
                let language = info
                    .as_deref()
                    .and_then(|i| i.split_whitespace().next())
                    .map(str::to_string);
                self.push_block(Block::CodeBlock(CodeBlock {
                    info,
                    language,
                    code,
                    highlighted: None,
                    badge: None,
                }));
            }
            Frame::HtmlBlock(html) => self.push_block(Block::Html { html }),
            Frame::Emphasis(children) => self.push_inline(Inline::Emphasis { children }),
            Frame::Strong(children) => self.push_inline(Inline::Strong { children }),
            Frame::Strikethrough(children) => self.push_inline(Inline::Strikethrough { children }),
            Frame::Link {
                url,
                title,
                autolink,
                children,
            } => self.push_inline(Inline::Link {
                url,
                title,
                autolink,
                children,
            }),
            Frame::Image { url, title, alt } => self.push_inline(Inline::Image { url, title, alt }),
            Frame::Footnote(label, children) => {
                self.push_block(Block::FootnoteDefinition { label, children })
            }
            Frame::Transparent(children) => {
                for block in children {
                    self.push_block(block);
                }
            }
        }
    }

    fn push_block(&mut self, block: Block) {
        let mut block = block;
        for frame in self.stack.iter_mut().rev() {
            match frame.accept_block(block) {
                Ok(()) => return,
                Err(rejected) => block = rejected,
            }
        }
        self.root.push(block);
    }

    fn push_inline(&mut self, inline: Inline) {
        let inline = match self.stack.last_mut() {
            Some(frame) => match frame.accept_inline(inline) {
                Ok(()) => return,
                Err(rejected) => rejected,
            },
            None => inline,
        };
        self.push_block(Block::Plain {
            content: vec![inline],
        });
    }

    /// Close whatever is still open and return the tree
    fn finish(mut self) -> Vec<Block> {
        while !self.stack.is_empty() {
            self.close();
        }
        self.root
    }
}

fn autolink_block(block: Block) -> Block {
    match block {
        Block::Paragraph { content } => Block::Paragraph {
            content: autolink_inlines(content),
        },
        Block::Plain { content } => Block::Plain {
            content: autolink_inlines(content),
        },
        Block::Heading { level, content } => Block::Heading {
            level,
            content: autolink_inlines(content),
        },
        Block::Table(table) => Block::Table(Table {
            header: table.header.into_iter().map(autolink_inlines).collect(),
            rows: table
                .rows
                .into_iter()
                .map(|row| row.into_iter().map(autolink_inlines).collect())
                .collect(),
            alignments: table.alignments,
        }),
        other => other,
    }
}

/// Link bare URLs in text; existing links and code are left alone
fn autolink_inlines(inlines: Vec<Inline>) -> Vec<Inline> {
    inlines
        .into_iter()
        .flat_map(|inline| match inline {
            Inline::Text { text } => split_autolinks(&text),
            Inline::Emphasis { children } => vec![Inline::Emphasis {
                children: autolink_inlines(children),
            }],
            Inline::Strong { children } => vec![Inline::Strong {
                children: autolink_inlines(children),
            }],
            Inline::Strikethrough { children } => vec![Inline::Strikethrough {
                children: autolink_inlines(children),
            }],
            other => vec![other],
        })
        .collect()
}

fn split_autolinks(text: &str) -> Vec<Inline> {
    let mut out = Vec::new();
    let mut last = 0;

    for caps in AUTOLINK_RE.captures_iter(text) {
        let Some(m) = caps.get(0) else {
            continue;
        };
        let preceded_ok = text[..m.start()]
            .chars()
            .next_back()
            .map_or(true, |c| c.is_whitespace() || matches!(c, '*' | '_' | '~' | '('));
        if !preceded_ok {
            continue;
        }

        let (link, url) = if caps.name("email").is_some() {
            let email = m.as_str();
            if email.ends_with(['-', '_']) {
                continue;
            }
            (email, format!("mailto:{email}"))
        } else {
            let link = trim_autolink(m.as_str());
            if !has_valid_domain(link) {
                continue;
            }
            let url = if link.starts_with("www.") {
                format!("http://{link}")
            } else {
                link.to_string()
            };
            (link, url)
        };

        if m.start() > last {
            out.push(Inline::text(&text[last..m.start()]));
        }
        out.push(Inline::Link {
            url,
            title: String::new(),
            autolink: true,
            children: vec![Inline::text(link)],
        });
        last = m.start() + link.len();
    }

    if last < text.len() {
        out.push(Inline::text(&text[last..]));
    }
    out
}

/// A scheme or `www.` prefix followed by at least two dot-separated labels,
/// with no underscore in the last two
fn has_valid_domain(link: &str) -> bool {
    let host = link
        .strip_prefix("https://")
        .or_else(|| link.strip_prefix("http://"))
        .unwrap_or(link);
    if host.len() == link.len() && !link.starts_with("www.") {
        return false;
    }

    let domain = host.split(['/', '?', '#', ':']).next().unwrap_or_default();
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && label
                    .chars()
                    .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        })
        && labels.iter().rev().take(2).all(|label| !label.contains('_'))
}

/// Drop trailing punctuation and unbalanced closing parentheses
fn trim_autolink(candidate: &str) -> &str {
    let mut link = candidate;
    loop {
        let trimmed = link.trim_end_matches(['?', '!', '.', ',', ':', '*', '_', '~', '\'', '"']);
        let trimmed = if trimmed.ends_with(')')
            && trimmed.matches(')').count() > trimmed.matches('(').count()
        {
            &trimmed[..trimmed.len() - 1]
        } else {
            trimmed
        };
        if trimmed.len() == link.len() {
            return link;
        }
        link = trimmed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::document::Alignment;

    fn first_inlines(blocks: &[Block]) -> &[Inline] {
        blocks[0].inlines()
    }

    #[test]
    fn test_empty_document() {
        assert!(parse("").is_empty());
        assert!(parse("   \n\n").is_empty());
    }

    #[test]
    fn test_heading_and_paragraph() {
        let blocks = parse("# Title\n\nSome *emphasis* and **strong** text.");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[0], Block::Heading { level: 1, .. }));
        match &blocks[1] {
            Block::Paragraph { content } => {
                assert_eq!(content.len(), 5);
                assert!(matches!(content[1], Inline::Emphasis { .. }));
                assert!(matches!(content[3], Inline::Strong { .. }));
            }
            other => panic!("expected paragraph, got {other:?}"),
        }
    }

    #[test]
    fn test_task_list_marker_is_checkbox() {
        let blocks = parse("- [x] done\n- [ ] todo\n- plain item\n");
        let Block::List { start, items } = &blocks[0] else {
            panic!("expected list");
        };
        assert_eq!(*start, None);
        assert_eq!(items.len(), 3);

        let first = items[0].children[0].inlines();
        assert_eq!(first[0], Inline::Checkbox { checked: true });
        assert_eq!(first[1], Inline::text("done"));

        let second = items[1].children[0].inlines();
        assert_eq!(second[0], Inline::Checkbox { checked: false });

        let third = items[2].children[0].inlines();
        assert_eq!(third, &[Inline::text("plain item")]);
    }

    #[test]
    fn test_ordered_list_marker() {
        let blocks = parse("3. three\n4. four\n");
        let Block::List { start, items } = &blocks[0] else {
            panic!("expected list");
        };
        assert_eq!(*start, Some(3));
        assert!(items.iter().all(|i| i.marker == ListMarker::Numbered));
    }

    #[test]
    fn test_nested_list_inside_item() {
        let blocks = parse("- outer\n  - inner\n");
        let Block::List { items, .. } = &blocks[0] else {
            panic!("expected list");
        };
        assert_eq!(items[0].children.len(), 2);
        assert!(matches!(items[0].children[0], Block::Plain { .. }));
        assert!(matches!(items[0].children[1], Block::List { .. }));
    }

    #[test]
    fn test_table_passes_alignment() {
        let md = "| Name | Qty |\n|:-----|----:|\n| apple | 3 |\n| pear | 5 |\n";
        let blocks = parse(md);
        let Block::Table(table) = &blocks[0] else {
            panic!("expected table");
        };
        assert_eq!(table.alignments, vec![Alignment::Left, Alignment::Right]);
        assert_eq!(table.header.len(), 2);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1][0], vec![Inline::text("pear")]);
    }

    #[test]
    fn test_fenced_code_language() {
        let blocks = parse("```python title=\"x\"\nprint(1)\n```\n");
        let Block::CodeBlock(code) = &blocks[0] else {
            panic!("expected code block");
        };
        assert_eq!(code.info.as_deref(), Some("python title=\"x\""));
        assert_eq!(code.language.as_deref(), Some("python"));
        assert_eq!(code.code, "print(1)\n");
    }

    #[test]
    fn test_unterminated_fence_runs_to_end() {
        let blocks = parse("intro\n\n```rust\nfn main() {}\n\n# not a heading\n");
        assert_eq!(blocks.len(), 2);
        let Block::CodeBlock(code) = &blocks[1] else {
            panic!("expected code block");
        };
        assert!(code.code.contains("# not a heading"));
    }

    #[test]
    fn test_indented_code_has_no_language() {
        let blocks = parse("    let x = 1;\n");
        let Block::CodeBlock(code) = &blocks[0] else {
            panic!("expected code block");
        };
        assert!(code.info.is_none());
        assert!(code.language.is_none());
    }

    #[test]
    fn test_rule_styles() {
        let blocks = parse("a\n\n---\n\nb\n\n***\n\nc\n\n___\n");
        let styles: Vec<RuleStyle> = blocks
            .iter()
            .filter_map(|b| match b {
                Block::ThematicBreak { style } => Some(*style),
                _ => None,
            })
            .collect();
        assert_eq!(
            styles,
            vec![RuleStyle::Dashes, RuleStyle::Asterisks, RuleStyle::Underscores]
        );
    }

    #[test]
    fn test_strikethrough() {
        let blocks = parse("~~gone~~ kept");
        assert!(matches!(
            first_inlines(&blocks)[0],
            Inline::Strikethrough { .. }
        ));
    }

    #[test]
    fn test_angle_autolink() {
        let blocks = parse("<https://example.com>");
        match &first_inlines(&blocks)[0] {
            Inline::Link { url, autolink, .. } => {
                assert_eq!(url, "https://example.com");
                assert!(autolink);
            }
            other => panic!("expected link, got {other:?}"),
        }
    }

    #[test]
    fn test_bare_url_autolink() {
        let blocks = parse("See https://example.com/docs. Or www.rust-lang.org!");
        let inlines = first_inlines(&blocks);
        assert_eq!(inlines[0], Inline::text("See "));
        match &inlines[1] {
            Inline::Link { url, autolink, .. } => {
                assert_eq!(url, "https://example.com/docs");
                assert!(autolink);
            }
            other => panic!("expected link, got {other:?}"),
        }
        assert_eq!(inlines[2], Inline::text(". Or "));
        match &inlines[3] {
            Inline::Link { url, children, .. } => {
                assert_eq!(url, "http://www.rust-lang.org");
                assert_eq!(children, &vec![Inline::text("www.rust-lang.org")]);
            }
            other => panic!("expected link, got {other:?}"),
        }
        assert_eq!(inlines[4], Inline::text("!"));
    }

    #[test]
    fn test_bare_email_autolink() {
        let blocks = parse("mail me at foo.bar+blog@example.co.kr today");
        let inlines = first_inlines(&blocks);
        assert_eq!(inlines[0], Inline::text("mail me at "));
        assert_eq!(
            inlines[1],
            Inline::Link {
                url: "mailto:foo.bar+blog@example.co.kr".into(),
                title: String::new(),
                autolink: true,
                children: vec![Inline::text("foo.bar+blog@example.co.kr")],
            }
        );
        assert_eq!(inlines[2], Inline::text(" today"));
    }

    #[test]
    fn test_email_with_trailing_dot_or_dash() {
        let inlines = split_autolinks("write to a@b.com.");
        assert!(matches!(&inlines[1], Inline::Link { url, .. } if url == "mailto:a@b.com"));
        assert_eq!(inlines[2], Inline::text("."));

        assert_eq!(split_autolinks("a@b.c-"), vec![Inline::text("a@b.c-")]);
    }

    #[test]
    fn test_url_without_domain_is_text() {
        let blocks = parse("see (www.) now");
        assert_eq!(first_inlines(&blocks), &[Inline::text("see (www.) now")]);
        assert_eq!(split_autolinks("https://x"), vec![Inline::text("https://x")]);
        assert_eq!(split_autolinks("www.a_b.c_d"), vec![Inline::text("www.a_b.c_d")]);
    }

    #[test]
    fn test_valid_domain() {
        assert!(has_valid_domain("www.rust-lang.org"));
        assert!(has_valid_domain("https://docs.rs/regex"));
        assert!(!has_valid_domain("www"));
        assert!(!has_valid_domain("https://localhost:8080"));
        assert!(!has_valid_domain("https://a..b"));
    }

    #[test]
    fn test_autolink_parentheses() {
        assert_eq!(
            trim_autolink("https://en.wikipedia.org/wiki/Rust_(language))"),
            "https://en.wikipedia.org/wiki/Rust_(language)"
        );
        assert_eq!(trim_autolink("https://a.com/x.)"), "https://a.com/x");
    }

    #[test]
    fn test_urls_in_code_and_links_are_untouched() {
        let blocks = parse("`https://a.com` and [site](https://b.com)");
        let inlines = first_inlines(&blocks);
        assert!(matches!(inlines[0], Inline::Code { .. }));
        match &inlines[2] {
            Inline::Link {
                autolink, children, ..
            } => {
                assert!(!autolink);
                assert_eq!(children, &vec![Inline::text("site")]);
            }
            other => panic!("expected link, got {other:?}"),
        }
    }

    #[test]
    fn test_blockquote_children() {
        let blocks = parse("> quoted\n>\n> more\n");
        let Block::Blockquote { icon, children } = &blocks[0] else {
            panic!("expected blockquote");
        };
        assert!(icon.is_none());
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn test_image_alt_text() {
        let blocks = parse("![a *cat*](cat.png \"Cat\")");
        assert_eq!(
            first_inlines(&blocks)[0],
            Inline::Image {
                url: "cat.png".into(),
                title: "Cat".into(),
                alt: "a cat".into(),
            }
        );
    }

    #[test]
    fn test_footnotes() {
        let blocks = parse("Text[^1].\n\n[^1]: The note.\n");
        assert!(first_inlines(&blocks)
            .iter()
            .any(|i| matches!(i, Inline::FootnoteReference { label } if label == "1")));
        assert!(blocks
            .iter()
            .any(|b| matches!(b, Block::FootnoteDefinition { label, .. } if label == "1")));
    }

    #[test]
    fn test_html_block() {
        let blocks = parse("<div class=\"note\">\nhi\n</div>\n");
        assert!(matches!(&blocks[0], Block::Html { html } if html.contains("note")));
    }
}
