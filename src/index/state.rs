//! Navigation state: search query and expanded categories

use serde::Serialize;
use std::collections::BTreeSet;

use crate::content::Post;

/// Filter and expansion state owned by the navigation panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexState {
    /// Current filter; empty means no filter
    pub search_query: String,
    /// Categories currently expanded
    pub expanded_categories: BTreeSet<String>,
}

impl IndexState {
    /// Initial state: no query, every category present at load time expanded
    pub fn initial(posts: &[Post]) -> Self {
        Self {
            search_query: String::new(),
            expanded_categories: posts.iter().map(|p| p.category.clone()).collect(),
        }
    }

    /// Replace the search query
    pub fn with_query(self, query: impl Into<String>) -> Self {
        Self {
            search_query: query.into(),
            ..self
        }
    }

    pub fn is_expanded(&self, category: &str) -> bool {
        self.expanded_categories.contains(category)
    }
}

/// Flip membership of `category` in the expanded set
pub fn toggle_category(state: IndexState, category: &str) -> IndexState {
    let mut expanded = state.expanded_categories;
    if !expanded.remove(category) {
        expanded.insert(category.to_string());
    }
    IndexState {
        search_query: state.search_query,
        expanded_categories: expanded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn posts() -> Vec<Post> {
        let date = Local.with_ymd_and_hms(2025, 10, 20, 0, 0, 0).unwrap();
        vec![
            Post::new("1", "A", "Blog", date, ""),
            Post::new("2", "B", "Dev", date, ""),
            Post::new("3", "C", "Dev", date, ""),
        ]
    }

    #[test]
    fn test_initial_expands_all_categories() {
        let state = IndexState::initial(&posts());
        assert!(state.search_query.is_empty());
        assert!(state.is_expanded("Blog"));
        assert!(state.is_expanded("Dev"));
        assert_eq!(state.expanded_categories.len(), 2);
    }

    #[test]
    fn test_toggle_flips_membership() {
        let state = IndexState::initial(&posts());

        let collapsed = toggle_category(state.clone(), "Dev");
        assert!(!collapsed.is_expanded("Dev"));
        assert!(collapsed.is_expanded("Blog"));

        let unknown = toggle_category(state, "Later");
        assert!(unknown.is_expanded("Later"));
    }

    #[test]
    fn test_toggle_is_involutive() {
        let state = IndexState::initial(&posts()).with_query("react");
        for category in ["Dev", "Blog", "X"] {
            let twice = toggle_category(toggle_category(state.clone(), category), category);
            assert_eq!(twice, state);
        }
    }

    #[test]
    fn test_toggle_keeps_query() {
        let state = IndexState::initial(&posts()).with_query("hooks");
        assert_eq!(toggle_category(state, "Dev").search_query, "hooks");
    }
}
