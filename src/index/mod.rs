//! Post index - search, category grouping and navigation state
//!
//! The index owns the load-time post collection. Every query is recomputed
//! from scratch; nothing here caches results between calls.

mod group;
mod search;
mod state;

use indexmap::IndexMap;
use serde::Serialize;

use crate::content::{Post, PostSummary};

pub use group::group_by_category;
pub use search::search;
pub use state::{toggle_category, IndexState};

use search::SearchKey;

/// Resolve a post by id. A missing id means nothing is selected.
pub fn select_post<'a>(posts: &'a [Post], id: &str) -> Option<&'a Post> {
    posts.iter().find(|p| p.id == id)
}

/// One collapsible category in the navigation tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup {
    pub category: String,
    pub count: usize,
    pub expanded: bool,
    pub posts: Vec<PostSummary>,
}

/// What the navigation panel displays
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavigationView {
    /// The collection itself is empty
    NoPosts,
    /// A query is active and matched nothing
    NoResults { query: String },
    Groups { groups: Vec<CategoryGroup> },
}

impl NavigationView {
    /// Groups to display, empty for the two placeholder states
    pub fn groups(&self) -> &[CategoryGroup] {
        match self {
            NavigationView::Groups { groups } => groups,
            _ => &[],
        }
    }
}

/// The post collection with pre-folded search keys
#[derive(Debug, Clone)]
pub struct PostIndex {
    posts: Vec<Post>,
    keys: Vec<SearchKey>,
}

impl PostIndex {
    pub fn new(posts: Vec<Post>) -> Self {
        let keys = posts.iter().map(SearchKey::new).collect();
        Self { posts, keys }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Same result as [`search`], using the folded keys built at load time
    pub fn search(&self, query: &str) -> Vec<&Post> {
        let needle = search::fold(query);
        self.posts
            .iter()
            .zip(&self.keys)
            .filter(|(_, key)| key.matches(&needle))
            .map(|(post, _)| post)
            .collect()
    }

    pub fn select_post(&self, id: &str) -> Option<&Post> {
        select_post(&self.posts, id)
    }

    /// Initial navigation state for this collection
    pub fn initial_state(&self) -> IndexState {
        IndexState::initial(&self.posts)
    }

    /// Distinct categories with their total post counts, in first-seen order
    pub fn categories(&self) -> IndexMap<String, usize> {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for post in &self.posts {
            *counts.entry(post.category.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Filtered, grouped and sorted navigation tree for `state`
    pub fn navigation(&self, state: &IndexState) -> NavigationView {
        let matches = self.search(&state.search_query);
        if matches.is_empty() {
            // An active query reports no results even over an empty collection
            return if state.search_query.is_empty() {
                NavigationView::NoPosts
            } else {
                NavigationView::NoResults {
                    query: state.search_query.clone(),
                }
            };
        }

        let groups = group_by_category(&matches)
            .into_iter()
            .map(|(category, posts)| CategoryGroup {
                count: posts.len(),
                expanded: state.is_expanded(&category),
                posts: posts.into_iter().map(PostSummary::from).collect(),
                category,
            })
            .collect();

        tracing::debug!(
            "Navigation for query {:?}: {} of {} posts",
            state.search_query,
            matches.len(),
            self.posts.len()
        );

        NavigationView::Groups { groups }
    }
}
