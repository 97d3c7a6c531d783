//! Content loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the post collection
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to parse front-matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Duplicate post id {id:?} in {first:?} and {second:?}")]
    DuplicateId {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
