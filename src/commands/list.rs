//! Print the navigation tree

use anyhow::Result;
use std::fmt::Write;

use crate::config::SiteConfig;
use crate::helpers::display_date;
use crate::index::NavigationView;
use crate::session::Selection;
use crate::Folio;

/// Options for the `list` command
#[derive(Debug, Default)]
pub struct ListOptions {
    pub search: Option<String>,
    pub collapse: Vec<String>,
    pub json: bool,
}

/// List posts grouped by category
pub fn run(folio: &Folio, options: &ListOptions) -> Result<()> {
    let mut session = folio.session()?;

    if let Some(query) = &options.search {
        session.set_search_query(query.as_str());
    }
    for category in &options.collapse {
        session.toggle_category(category);
    }

    let view = session.visible_posts();
    if options.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", format_navigation(&view, session.selection(), &folio.config));
    }

    Ok(())
}

/// Text rendering of the navigation tree
pub fn format_navigation(
    view: &NavigationView,
    selection: &Selection,
    config: &SiteConfig,
) -> String {
    let mut out = String::new();

    let groups = match view {
        NavigationView::NoPosts => return "No posts yet.\n".to_string(),
        NavigationView::NoResults { query } => {
            return format!("No results for {:?}.\n", query);
        }
        NavigationView::Groups { groups } => groups,
    };

    for group in groups {
        let arrow = if group.expanded { '▾' } else { '▸' };
        let _ = writeln!(out, "{} {} ({})", arrow, group.category, group.count);
        if !group.expanded {
            continue;
        }
        for post in &group.posts {
            let marker = match selection {
                Selection::Post { id } if *id == post.id => '•',
                _ => ' ',
            };
            let _ = writeln!(
                out,
                "  {} {}  {}  [{}]",
                marker,
                display_date(&post.date, &config.date_format, &config.language),
                post.title,
                post.id
            );
        }
    }

    out
}
