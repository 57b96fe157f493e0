use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Word list error: {0}")]
    Dictionary(#[from] rusty_wordsearch::dictionary::DictionaryError),
    #[error("Solve error: {0}")]
    Solve(#[from] rusty_wordsearch::solver::SolveError),
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
    #[error("General error: {0}")]
    General(String),
}
