//! Render a single post

use anyhow::Result;
use clap::ValueEnum;
use std::fmt::Write;

use crate::content::Post;
use crate::helpers::{date_xml, display_date};
use crate::render::document::{inlines_to_text, Block, Inline, ListItem, ListMarker, Table};
use crate::render::html::html_escape;
use crate::render::RenderedDocument;
use crate::Folio;

/// Output format of the `show` command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

/// Print post `id` in the requested format
pub fn run(folio: &Folio, id: &str, format: OutputFormat) -> Result<()> {
    let mut session = folio.session()?;
    session.select_post(id);

    let Some(document) = session.rendered_document() else {
        println!("No post with id {:?}. Pick one from `postfolio list`.", id);
        return Ok(());
    };
    let Some(post) = session.selected_post() else {
        return Ok(());
    };

    let lang = &folio.config.language;
    let date_format = &folio.config.date_format;

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "id": post.id,
                "title": post.title,
                "category": post.category,
                "date": date_xml(&post.date),
                "document": &*document,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Html => {
            println!(
                r#"<header><span class="badge">{}</span><h1>{}</h1><time datetime="{}">{}</time></header>"#,
                html_escape(&post.category),
                html_escape(&post.title),
                date_xml(&post.date),
                display_date(&post.date, date_format, lang)
            );
            println!("<article>\n{}</article>", document.to_html());
        }
        OutputFormat::Text => {
            print!("{}", header(post, &document, date_format, lang));
            print!("{}", format_text(&document.blocks));
        }
    }

    Ok(())
}

/// Title block with category, date, reading time and word count
pub fn header(post: &Post, document: &RenderedDocument, date_format: &str, lang: &str) -> String {
    format!(
        "[{}]\n{}\n{} · {} min read · {} words\n\n",
        post.category,
        post.title,
        display_date(&post.date, date_format, lang),
        document.stats.reading_time_minutes,
        document.stats.word_count
    )
}

/// Plain text rendering of a decorated document for the terminal
pub fn format_text(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        push_block(&mut out, block, "");
    }
    out
}

fn push_block(out: &mut String, block: &Block, indent: &str) {
    match block {
        Block::Paragraph { content } => {
            push_lines(out, indent, &inlines_to_text(content));
            out.push_str(indent.trim_end());
            out.push('\n');
        }
        Block::Plain { content } => push_lines(out, indent, &inlines_to_text(content)),
        Block::Heading { level, content } => {
            let _ = writeln!(
                out,
                "{}{} {}\n",
                indent,
                "#".repeat(*level as usize),
                inlines_to_text(content)
            );
        }
        Block::List { start, items } => {
            for (i, item) in items.iter().enumerate() {
                push_item(out, item, *start, i, indent);
            }
            out.push('\n');
        }
        Block::Blockquote { icon, children } => {
            if icon.is_some() {
                let _ = writeln!(out, "{}❝", indent);
            }
            let nested = format!("{}│ ", indent);
            for child in children {
                push_block(out, child, &nested);
            }
        }
        Block::Table(table) => push_table(out, table, indent),
        Block::ScrollContainer { child } => push_block(out, child, indent),
        Block::CodeBlock(code) => {
            if let Some(badge) = &code.badge {
                let _ = writeln!(out, "{}[{}]", indent, badge);
            }
            push_lines(out, &format!("{}    ", indent), code.code.trim_end_matches('\n'));
            out.push('\n');
        }
        Block::ThematicBreak { .. } | Block::Divider => {
            let _ = writeln!(out, "{}{}\n", indent, "─".repeat(40));
        }
        Block::Html { html } => push_lines(out, indent, html.trim_end()),
        Block::FootnoteDefinition { label, children } => {
            let _ = writeln!(out, "{}[^{}]:", indent, label);
            let nested = format!("{}  ", indent);
            for child in children {
                push_block(out, child, &nested);
            }
        }
    }
}

fn push_item(out: &mut String, item: &ListItem, start: Option<u64>, i: usize, indent: &str) {
    let marker = match (item.marker, item.checkbox) {
        (_, Some(true)) => "[x] ".to_string(),
        (_, Some(false)) => "[ ] ".to_string(),
        (ListMarker::Numbered, None) => format!("{}. ", start.unwrap_or(1) + i as u64),
        (ListMarker::Bullet, None) => "- ".to_string(),
        (ListMarker::None, None) => String::new(),
    };

    let mut body = String::new();
    let nested = format!("{}{}", indent, " ".repeat(marker.chars().count()));
    for child in &item.children {
        push_block(&mut body, child, &nested);
    }

    let mut body = body.trim_start_matches(nested.as_str());
    if item.is_checkbox_item() {
        body = body.trim_start();
    }
    let _ = write!(out, "{}{}{}", indent, marker, body);
    if !body.ends_with('\n') {
        out.push('\n');
    }
}

fn push_table(out: &mut String, table: &Table, indent: &str) {
    let _ = writeln!(out, "{}| {} |", indent, row(&table.header));
    let _ = writeln!(
        out,
        "{}|{}|",
        indent,
        vec!["---"; table.header.len().max(1)].join("|")
    );
    for cells in &table.rows {
        let _ = writeln!(out, "{}| {} |", indent, row(cells));
    }
    out.push('\n');
}

fn row(cells: &[Vec<Inline>]) -> String {
    cells
        .iter()
        .map(|c| inlines_to_text(c))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn push_lines(out: &mut String, indent: &str, text: &str) {
    for line in text.lines() {
        let _ = writeln!(out, "{}{}", indent, line);
    }
}
