//! HTML output for a decorated document

use std::fmt::Write;

use super::document::{Alignment, Block, CodeBlock, Icon, Inline, ListItem, ListMarker, Table};

/// Path data of the quote icon
const QUOTE_ICON_PATH: &str = "M14.017 21v-7.391c0-5.704 3.731-9.57 8.983-10.609l.995 2.151c-2.432.917-3.995 3.638-3.995 5.849h4v10h-9.983zm-14.017 0v-7.391c0-5.704 3.748-9.57 9-10.609l.996 2.151c-2.433.917-3.996 3.638-3.996 5.849h3.983v10h-9.983z";

/// Render blocks to an HTML fragment
pub fn to_html(blocks: &[Block]) -> String {
    let mut out = String::with_capacity(4096);
    for block in blocks {
        push_block(&mut out, block);
    }
    out
}

fn push_block(out: &mut String, block: &Block) {
    match block {
        Block::Paragraph { content } => {
            out.push_str("<p>");
            push_inlines(out, content);
            out.push_str("</p>\n");
        }
        Block::Plain { content } => push_inlines(out, content),
        Block::Heading { level, content } => {
            let id = slug::slugify(super::document::inlines_to_text(content));
            let _ = write!(out, r#"<h{level} id="{}">"#, html_escape(&id));
            push_inlines(out, content);
            let _ = writeln!(out, "</h{level}>");
        }
        Block::List { start, items } => push_list(out, *start, items),
        Block::Blockquote { icon, children } => {
            out.push_str("<blockquote>\n");
            match icon {
                Some(Icon::Quote) => {
                    out.push_str(r#"<div class="quote">"#);
                    let _ = write!(
                        out,
                        r#"<svg class="quote-icon" fill="currentColor" viewBox="0 0 24 24"><path d="{}"/></svg>"#,
                        QUOTE_ICON_PATH
                    );
                    out.push_str(r#"<div class="quote-body">"#);
                    for child in children {
                        push_block(out, child);
                    }
                    out.push_str("</div></div>\n");
                }
                None => {
                    for child in children {
                        push_block(out, child);
                    }
                }
            }
            out.push_str("</blockquote>\n");
        }
        Block::Table(table) => push_table(out, table),
        Block::ScrollContainer { child } => {
            out.push_str(r#"<div class="table-scroll">"#);
            push_block(out, child);
            out.push_str("</div>\n");
        }
        Block::CodeBlock(code) => push_code(out, code),
        Block::ThematicBreak { .. } => out.push_str("<hr />\n"),
        Block::Divider => out.push_str("<hr class=\"divider\" />\n"),
        Block::Html { html } => out.push_str(html),
        Block::FootnoteDefinition { label, children } => {
            let _ = write!(
                out,
                r#"<div class="footnote-definition" id="fn-{}"><sup class="footnote-label">{}</sup>"#,
                html_escape(label),
                html_escape(label)
            );
            for child in children {
                push_block(out, child);
            }
            out.push_str("</div>\n");
        }
    }
}

fn push_list(out: &mut String, start: Option<u64>, items: &[ListItem]) {
    match start {
        Some(1) => out.push_str("<ol>\n"),
        Some(n) => {
            let _ = writeln!(out, r#"<ol start="{n}">"#);
        }
        None => out.push_str("<ul>\n"),
    }

    for item in items {
        if item.marker == ListMarker::None {
            out.push_str(r#"<li class="task-list-item list-none">"#);
        } else {
            out.push_str("<li>");
        }
        for child in &item.children {
            push_block(out, child);
        }
        out.push_str("</li>\n");
    }

    out.push_str(if start.is_some() { "</ol>\n" } else { "</ul>\n" });
}

fn push_table(out: &mut String, table: &Table) {
    out.push_str("<table>\n<thead><tr>");
    for (i, cell) in table.header.iter().enumerate() {
        push_cell(out, "th", table.alignments.get(i).copied(), cell);
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for row in &table.rows {
        out.push_str("<tr>");
        for (i, cell) in row.iter().enumerate() {
            push_cell(out, "td", table.alignments.get(i).copied(), cell);
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
}

fn push_cell(out: &mut String, tag: &str, alignment: Option<Alignment>, content: &[Inline]) {
    let style = match alignment {
        Some(Alignment::Left) => r#" style="text-align: left""#,
        Some(Alignment::Center) => r#" style="text-align: center""#,
        Some(Alignment::Right) => r#" style="text-align: right""#,
        _ => "",
    };
    let _ = write!(out, "<{tag}{style}>");
    push_inlines(out, content);
    let _ = write!(out, "</{tag}>");
}

fn push_code(out: &mut String, code: &CodeBlock) {
    out.push_str(r#"<div class="code-block">"#);
    if let Some(badge) = &code.badge {
        let _ = write!(out, r#"<div class="code-badge">{}</div>"#, html_escape(badge));
    }

    match &code.language {
        Some(lang) => {
            let _ = write!(
                out,
                r#"<pre class="hljs"><code class="language-{}">"#,
                html_escape(lang)
            );
        }
        None => out.push_str(r#"<pre class="hljs"><code>"#),
    }

    match &code.highlighted {
        Some(spans) => {
            for span in spans {
                match &span.class {
                    Some(class) => {
                        let _ = write!(
                            out,
                            r#"<span class="{}">{}</span>"#,
                            html_escape(&class.replace('.', " ")),
                            html_escape(&span.text)
                        );
                    }
                    None => out.push_str(&html_escape(&span.text)),
                }
            }
        }
        None => out.push_str(&html_escape(&code.code)),
    }

    out.push_str("</code></pre></div>\n");
}

fn push_inlines(out: &mut String, inlines: &[Inline]) {
    for inline in inlines {
        push_inline(out, inline);
    }
}

fn push_inline(out: &mut String, inline: &Inline) {
    match inline {
        Inline::Text { text } => out.push_str(&html_escape(text)),
        Inline::Code { code } => {
            let _ = write!(out, "<code>{}</code>", html_escape(code));
        }
        Inline::Emphasis { children } => wrap(out, "em", children),
        Inline::Strong { children } => wrap(out, "strong", children),
        Inline::Strikethrough { children } => wrap(out, "del", children),
        Inline::Link {
            url,
            title,
            children,
            ..
        } => {
            let _ = write!(out, r#"<a href="{}""#, html_escape(url));
            if !title.is_empty() {
                let _ = write!(out, r#" title="{}""#, html_escape(title));
            }
            out.push('>');
            push_inlines(out, children);
            out.push_str("</a>");
        }
        Inline::Image { url, title, alt } => {
            let _ = write!(
                out,
                r#"<img src="{}" alt="{}""#,
                html_escape(url),
                html_escape(alt)
            );
            if !title.is_empty() {
                let _ = write!(out, r#" title="{}""#, html_escape(title));
            }
            out.push_str(" />");
        }
        Inline::Checkbox { checked } => {
            out.push_str(r#"<input type="checkbox" disabled"#);
            if *checked {
                out.push_str(" checked");
            }
            out.push_str(" /> ");
        }
        Inline::FootnoteReference { label } => {
            let label = html_escape(label);
            let _ = write!(
                out,
                r##"<sup class="footnote-reference"><a href="#fn-{label}">{label}</a></sup>"##
            );
        }
        Inline::Html { html } => out.push_str(html),
        Inline::SoftBreak => out.push('\n'),
        Inline::HardBreak => out.push_str("<br />\n"),
    }
}

fn wrap(out: &mut String, tag: &str, children: &[Inline]) {
    let _ = write!(out, "<{tag}>");
    push_inlines(out, children);
    let _ = write!(out, "</{tag}>");
}

/// Simple HTML escaping
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
