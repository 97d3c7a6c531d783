//! Post model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique, stable identifier
    pub id: String,

    /// Post title
    pub title: String,

    /// Raw markdown content
    pub content: String,

    /// Free-text category label
    pub category: String,

    /// Publication date
    pub date: DateTime<Local>,

    /// Source file the post was loaded from, if any
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source: Option<PathBuf>,
}

impl Post {
    /// Create a new post
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        date: DateTime<Local>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            category: category.into(),
            date,
            source: None,
        }
    }
}

/// A post reduced to what the navigation panel shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub date: DateTime<Local>,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            date: post.date,
        }
    }
}
