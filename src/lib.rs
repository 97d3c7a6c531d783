//! postfolio: a read-only blog browser core
//!
//! The crate holds a fixed post collection in memory, filters and groups it
//! for a navigation panel, and renders one post's GitHub-flavored markdown
//! into a decorated document tree for display.

pub mod cache;
pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod index;
pub mod render;
pub mod session;

use anyhow::Result;
use std::path::Path;

/// The postfolio application
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Source directory
    pub source_dir: std::path::PathBuf,
    /// Directory holding the post files
    pub posts_dir: std::path::PathBuf,
}

impl Folio {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let source_dir = base_dir.join(&config.source_dir);
        let posts_dir = source_dir.join(&config.posts_dir);

        Ok(Self {
            config,
            base_dir,
            source_dir,
            posts_dir,
        })
    }

    /// Load the post collection
    pub fn load_posts(&self) -> Result<Vec<content::Post>> {
        Ok(content::loader::ContentLoader::new(self).load_posts()?)
    }

    /// Load posts and build the index
    pub fn index(&self) -> Result<index::PostIndex> {
        Ok(index::PostIndex::new(self.load_posts()?))
    }

    /// Renderer configured from the site config
    pub fn renderer(&self) -> render::DocumentRenderer {
        render::DocumentRenderer::from_config(&self.config)
    }

    /// Start a browsing session over the loaded posts
    pub fn session(&self) -> Result<session::Session> {
        Ok(session::Session::new(self.index()?, self.renderer()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_new_reads_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("_config.yml"),
            "source_dir: content\nposts_dir: posts\n",
        )
        .unwrap();

        let folio = Folio::new(tmp.path()).unwrap();
        assert_eq!(folio.posts_dir, tmp.path().join("content").join("posts"));
    }

    #[test]
    fn test_session_from_directory() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        fs::create_dir_all(&folio.posts_dir).unwrap();
        fs::write(
            folio.posts_dir.join("hello.md"),
            "---\nid: 1\ntitle: Hello\ncategory: Blog\ndate: 2025-10-25\n---\n- [x] done\n",
        )
        .unwrap();

        let mut session = folio.session().unwrap();
        assert_eq!(session.visible_posts().groups().len(), 1);
        let doc = session.rendered_document().unwrap();
        assert_eq!(doc.stats.word_count, 3);
    }
}
