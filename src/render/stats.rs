//! Word count and reading time

use serde::Serialize;

/// Reading speed used when none is configured
pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

/// Display metadata computed from the raw markdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    pub word_count: usize,
    pub reading_time_minutes: usize,
}

impl DocumentStats {
    /// Count whitespace-delimited tokens of `raw` (code fences included) and
    /// estimate the reading time, never below one minute.
    pub fn from_markdown(raw: &str, words_per_minute: usize) -> Self {
        let word_count = word_count(raw);
        Self {
            word_count,
            reading_time_minutes: reading_time(word_count, words_per_minute),
        }
    }
}

pub fn word_count(raw: &str) -> usize {
    raw.split_whitespace().count()
}

/// ceil(words / wpm), floored at 1
pub fn reading_time(word_count: usize, words_per_minute: usize) -> usize {
    word_count.div_ceil(words_per_minute.max(1)).max(1)
}
