//! Render cache
//!
//! Rendering is a pure function of a post's content, so a rendered document
//! can be reused as long as the content hash recorded with it still matches.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::render::{DocumentRenderer, RenderedDocument};

/// Calculate a hash for post content
pub fn hash_content(content: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    hasher.finish()
}

#[derive(Debug)]
struct CacheEntry {
    content_hash: u64,
    document: Rc<RenderedDocument>,
}

/// Rendered documents keyed by post id
#[derive(Debug, Default)]
pub struct RenderCache {
    entries: HashMap<String, CacheEntry>,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached document for `(post_id, content)`, rendering on a miss
    pub fn get_or_render(
        &mut self,
        renderer: &DocumentRenderer,
        post_id: &str,
        content: &str,
    ) -> Rc<RenderedDocument> {
        let content_hash = hash_content(content);

        if let Some(entry) = self.entries.get(post_id) {
            if entry.content_hash == content_hash {
                return Rc::clone(&entry.document);
            }
        }

        tracing::debug!("Render cache miss for post {}", post_id);
        let document = Rc::new(renderer.render(content));
        self.entries.insert(
            post_id.to_string(),
            CacheEntry {
                content_hash,
                document: Rc::clone(&document),
            },
        );
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_content() {
        assert_eq!(hash_content("a"), hash_content("a"));
        assert_ne!(hash_content("a"), hash_content("b"));
    }

    #[test]
    fn test_same_content_is_reused() {
        let renderer = DocumentRenderer::new();
        let mut cache = RenderCache::new();

        let first = cache.get_or_render(&renderer, "1", "# Title");
        let second = cache.get_or_render(&renderer, "1", "# Title");
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(cache.entries.len(), 1);
    }

    #[test]
    fn test_changed_content_is_rerendered() {
        let renderer = DocumentRenderer::new();
        let mut cache = RenderCache::new();

        let first = cache.get_or_render(&renderer, "1", "one");
        let second = cache.get_or_render(&renderer, "1", "one two");
        assert!(!Rc::ptr_eq(&first, &second));
        assert_eq!(second.stats.word_count, 2);
        assert_eq!(cache.entries.len(), 1);
        assert_eq!(cache.entries["1"].content_hash, hash_content("one two"));
    }
}
