use crate::error::{ResourceError, Result};
use std::collections::HashSet;

/// English function words, one per line.
pub const BUNDLED_STOP_WORDS: &str = include_str!("../../resources/stopwords.txt");

/// Immutable set of function words excluded from matching.
#[derive(Debug, Clone)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// Parses one word per line. Blank lines and `#` comments are skipped.
    pub fn parse(content: &str) -> Result<Self> {
        let words: HashSet<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();

        if words.is_empty() {
            return Err(ResourceError::StopWords("list contains no words".to_string()));
        }

        Ok(Self { words })
    }

    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_STOP_WORDS)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
