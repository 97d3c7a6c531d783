//! Content loader - loads posts from the posts directory

use chrono::Local;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{ContentError, FrontMatter, Post};
use crate::Folio;

/// Loads the post collection from disk
pub struct ContentLoader<'a> {
    folio: &'a Folio,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(folio: &'a Folio) -> Self {
        Self { folio }
    }

    /// Load all posts, ordered by source path.
    ///
    /// Files with unreadable front-matter are skipped with a warning. Two
    /// posts sharing an id abort the load.
    pub fn load_posts(&self) -> Result<Vec<Post>, ContentError> {
        let posts_dir = &self.folio.posts_dir;
        if !posts_dir.exists() {
            tracing::debug!("Posts directory {:?} does not exist", posts_dir);
            return Ok(Vec::new());
        }

        let mut posts: Vec<Post> = Vec::new();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();

        for entry in WalkDir::new(posts_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            let post = match self.load_post(path) {
                Ok(post) => post,
                Err(ContentError::Io(e)) => return Err(ContentError::Io(e)),
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {}", path, e);
                    continue;
                }
            };

            if let Some(first) = seen.get(&post.id) {
                return Err(ContentError::DuplicateId {
                    id: post.id,
                    first: first.clone(),
                    second: path.to_path_buf(),
                });
            }
            seen.insert(post.id.clone(), path.to_path_buf());
            posts.push(post);
        }

        tracing::info!("Loaded {} posts from {:?}", posts.len(), posts_dir);
        Ok(posts)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<Post, ContentError> {
        let raw = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&raw)?;

        let date = match fm.parse_date()? {
            Some(date) => date,
            None => fs::metadata(path)?
                .modified()
                .ok()
                .map(chrono::DateTime::<Local>::from)
                .unwrap_or_else(Local::now),
        };

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();

        let id = fm.id.unwrap_or_else(|| stem.clone());
        let title = fm.title.unwrap_or(stem);
        let category = fm
            .category
            .unwrap_or_else(|| self.folio.config.default_category.clone());

        let mut post = Post::new(id, title, category, date, body);
        post.source = Some(path.to_path_buf());
        Ok(post)
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_post(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn site() -> (TempDir, Folio) {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        fs::create_dir_all(&folio.posts_dir).unwrap();
        (tmp, folio)
    }

    #[test]
    fn test_load_posts_in_path_order() {
        let (_tmp, folio) = site();
        write_post(
            &folio.posts_dir,
            "b-hooks.md",
            "---\nid: 3\ntitle: React Hooks\ncategory: Dev\ndate: 2025-10-23\n---\n# Hooks\n",
        );
        write_post(
            &folio.posts_dir,
            "a-publish.md",
            "---\nid: 1\ntitle: Publishing\ncategory: Blog\ndate: 2025-10-25\n---\nHello\n",
        );

        let posts = ContentLoader::new(&folio).load_posts().unwrap();
        let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(posts[1].category, "Dev");
        assert_eq!(posts[1].content, "# Hooks\n");
        assert_eq!(posts[0].date.format("%Y-%m-%d").to_string(), "2025-10-25");
    }

    #[test]
    fn test_defaults_from_file_name() {
        let (_tmp, folio) = site();
        write_post(&folio.posts_dir, "notes.md", "Just text\n");
        write_post(&folio.posts_dir, "ignored.txt", "not a post");

        let posts = ContentLoader::new(&folio).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "notes");
        assert_eq!(posts[0].title, "notes");
        assert_eq!(posts[0].category, folio.config.default_category);
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let (_tmp, folio) = site();
        write_post(&folio.posts_dir, "a.md", "---\nid: same\n---\nA\n");
        write_post(&folio.posts_dir, "b.md", "---\nid: same\n---\nB\n");

        let err = ContentLoader::new(&folio).load_posts().unwrap_err();
        assert!(matches!(err, ContentError::DuplicateId { ref id, .. } if id == "same"));
    }

    #[test]
    fn test_bad_frontmatter_is_skipped() {
        let (_tmp, folio) = site();
        write_post(&folio.posts_dir, "bad.md", "---\ntitle: x\ndate: someday\n---\nA\n");
        write_post(&folio.posts_dir, "good.md", "---\ntitle: ok\n---\nB\n");

        let posts = ContentLoader::new(&folio).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "ok");
    }

    #[test]
    fn test_missing_posts_dir() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        assert!(ContentLoader::new(&folio).load_posts().unwrap().is_empty());
    }
}
