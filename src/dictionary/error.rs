use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for loading a word list.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Error when reading the word list file.
    #[error("Failed to read word list '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when the word filter pattern cannot be compiled.
    #[error("Invalid word filter pattern: {0}")]
    Pattern(#[from] regex::Error),
}
