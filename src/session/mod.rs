//! Browsing session - applies user actions and exposes what to display

use serde::Serialize;
use std::rc::Rc;

use crate::cache::RenderCache;
use crate::content::Post;
use crate::index::{toggle_category, IndexState, NavigationView, PostIndex};
use crate::render::{DocumentRenderer, RenderedDocument};

/// Which post is shown in the reading pane
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selection {
    None,
    Post { id: String },
}

/// A discrete user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetSearchQuery(String),
    ToggleCategory(String),
    SelectPost(String),
}

/// Navigation state, selection and renderer for one user
pub struct Session {
    index: PostIndex,
    state: IndexState,
    selection: Selection,
    renderer: DocumentRenderer,
    cache: RenderCache,
}

impl Session {
    /// Start a session: every category expanded, the first post selected
    pub fn new(index: PostIndex, renderer: DocumentRenderer) -> Self {
        let state = index.initial_state();
        let selection = index
            .posts()
            .first()
            .map(|p| Selection::Post { id: p.id.clone() })
            .unwrap_or(Selection::None);
        Self {
            index,
            state,
            selection,
            renderer,
            cache: RenderCache::new(),
        }
    }

    pub fn apply(&mut self, action: Action) {
        tracing::debug!("Applying {:?}", action);
        match action {
            Action::SetSearchQuery(query) => self.set_search_query(query),
            Action::ToggleCategory(category) => self.toggle_category(&category),
            Action::SelectPost(id) => self.select_post(&id),
        }
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.state = std::mem::take(&mut self.state).with_query(query);
    }

    pub fn toggle_category(&mut self, category: &str) {
        self.state = toggle_category(std::mem::take(&mut self.state), category);
    }

    /// Select `id`; an unknown id clears the selection
    pub fn select_post(&mut self, id: &str) {
        self.selection = match self.index.select_post(id) {
            Some(post) => Selection::Post {
                id: post.id.clone(),
            },
            None => {
                tracing::debug!("No post with id {:?}, clearing selection", id);
                Selection::None
            }
        };
    }

    pub fn index(&self) -> &PostIndex {
        &self.index
    }

    pub fn state(&self) -> &IndexState {
        &self.state
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The grouped navigation tree for the current query and expansion
    pub fn visible_posts(&self) -> NavigationView {
        self.index.navigation(&self.state)
    }

    pub fn selected_post(&self) -> Option<&Post> {
        match &self.selection {
            Selection::Post { id } => self.index.select_post(id),
            Selection::None => None,
        }
    }

    /// Rendered body of the selected post, if any
    pub fn rendered_document(&mut self) -> Option<Rc<RenderedDocument>> {
        let Selection::Post { id } = &self.selection else {
            return None;
        };
        let post = self.index.select_post(id)?;
        Some(
            self.cache
                .get_or_render(&self.renderer, &post.id, &post.content),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{CodeHighlighter, HighlightSpan};
    use chrono::{Local, TimeZone};

    struct NoHighlight;

    impl CodeHighlighter for NoHighlight {
        fn highlight(&self, _language: &str, code: &str) -> Vec<HighlightSpan> {
            vec![HighlightSpan::plain(code)]
        }
    }

    fn session() -> Session {
        let at = |day| Local.with_ymd_and_hms(2025, 10, day, 0, 0, 0).unwrap();
        let index = PostIndex::new(vec![
            Post::new("1", "Dev post one", "Dev", at(23), "# One\n\nreact hooks"),
            Post::new("2", "Dev post two", "Dev", at(25), "```ts\nlet a = 1;\n```"),
            Post::new("3", "Blog post", "Blog", at(20), "publishing"),
        ]);
        let renderer = DocumentRenderer::new().with_highlighter(Box::new(NoHighlight));
        Session::new(index, renderer)
    }

    #[test]
    fn test_initial_selection_is_first_post() {
        let s = session();
        assert_eq!(
            s.selection(),
            &Selection::Post {
                id: "1".to_string()
            }
        );
    }

    #[test]
    fn test_empty_collection_selects_nothing() {
        let mut s = Session::new(PostIndex::new(Vec::new()), DocumentRenderer::new());
        assert_eq!(s.selection(), &Selection::None);
        assert!(s.rendered_document().is_none());
        assert_eq!(s.visible_posts(), NavigationView::NoPosts);
    }

    #[test]
    fn test_end_to_end_grouping() {
        let s = session();
        let view = s.visible_posts();
        let dev = &view.groups()[0];
        assert_eq!(dev.category, "Dev");
        let ids: Vec<&str> = dev.posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_actions() {
        let mut s = session();

        s.apply(Action::SetSearchQuery("HOOKS".into()));
        assert_eq!(s.visible_posts().groups().len(), 1);

        s.apply(Action::ToggleCategory("Dev".into()));
        assert!(!s.visible_posts().groups()[0].expanded);
        s.apply(Action::ToggleCategory("Dev".into()));
        assert!(s.visible_posts().groups()[0].expanded);

        s.apply(Action::SetSearchQuery(String::new()));
        assert_eq!(s.visible_posts().groups().len(), 2);
    }

    #[test]
    fn test_unknown_id_clears_selection() {
        let mut s = session();
        s.select_post("42");
        assert_eq!(s.selection(), &Selection::None);
        assert!(s.selected_post().is_none());
        assert!(s.rendered_document().is_none());
    }

    #[test]
    fn test_search_does_not_change_selection() {
        let mut s = session();
        s.select_post("3");
        s.set_search_query("nothing matches this");
        assert_eq!(s.selected_post().map(|p| p.id.as_str()), Some("3"));
    }

    #[test]
    fn test_rendered_document_is_memoized() {
        let mut s = session();
        s.select_post("2");
        let first = s.rendered_document().unwrap();
        let second = s.rendered_document().unwrap();
        assert!(Rc::ptr_eq(&first, &second));

        match &first.blocks[0] {
            crate::render::Block::CodeBlock(code) => {
                assert_eq!(code.badge.as_deref(), Some("ts"));
                assert_eq!(
                    code.highlighted,
                    Some(vec![HighlightSpan::plain("let a = 1;\n")])
                );
            }
            other => panic!("expected code block, got {other:?}"),
        }
    }
}
