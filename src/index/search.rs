//! Keyword search over titles and raw content

use crate::content::Post;

/// Case-folds text for matching
pub(crate) fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Posts whose title or content contains `query`, ignoring case.
///
/// An empty query matches everything. Order follows the input.
pub fn search<'a>(posts: &'a [Post], query: &str) -> Vec<&'a Post> {
    if query.is_empty() {
        return posts.iter().collect();
    }

    let needle = fold(query);
    posts
        .iter()
        .filter(|post| fold(&post.title).contains(&needle) || fold(&post.content).contains(&needle))
        .collect()
}

/// Pre-folded haystacks for one post
#[derive(Debug, Clone)]
pub(crate) struct SearchKey {
    title: String,
    content: String,
}

impl SearchKey {
    pub(crate) fn new(post: &Post) -> Self {
        Self {
            title: fold(&post.title),
            content: fold(&post.content),
        }
    }

    /// `needle` must already be folded
    pub(crate) fn matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.title.contains(needle) || self.content.contains(needle)
    }
}
