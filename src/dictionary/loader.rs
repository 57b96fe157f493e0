use regex::Regex;
use std::fs;
use std::path::Path;

use super::error::DictionaryError;

/// Shortest word kept by the default filter.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

fn word_pattern(min_len: usize) -> String {
    format!("^[a-z]{{{},}}$", min_len)
}

/// Selects the lines of a word list that are usable as puzzle words: all
/// lowercase ASCII letters, at least `min_len` of them.
#[derive(Clone, Debug)]
pub struct WordFilter {
    min_len: usize,
    pattern: Regex,
}

impl WordFilter {
    /// Builds a filter for words of at least `min_len` letters.
    ///
    /// # Errors
    /// Returns `DictionaryError::Pattern` if the pattern cannot be compiled,
    /// which only happens for absurdly large lengths.
    pub fn new(min_len: usize) -> Result<Self, DictionaryError> {
        Ok(Self {
            min_len,
            pattern: Regex::new(&word_pattern(min_len))?,
        })
    }

    /// The filter used when no minimum length is given.
    pub fn standard() -> Result<Self, DictionaryError> {
        Self::new(DEFAULT_MIN_WORD_LENGTH)
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Returns `true` if the trimmed line is kept.
    pub fn accepts(&self, line: &str) -> bool {
        self.pattern.is_match(line.trim())
    }

    /// Keeps the accepted lines, trimmed, in their original order.
    pub fn filter<'a, I>(&self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines
            .into_iter()
            .map(str::trim)
            .filter(|line| self.pattern.is_match(line))
            .map(str::to_string)
            .collect()
    }
}

/// Reads a plain-text word list, one word per line, and keeps the lines the
/// filter accepts.
pub fn load_word_list(path: &Path, filter: &WordFilter) -> Result<Vec<String>, DictionaryError> {
    let content = fs::read_to_string(path)
        .map_err(|e| DictionaryError::ReadFile(path.display().to_string(), e))?;
    Ok(filter.filter(content.lines()))
}
