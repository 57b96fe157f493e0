// error module
mod error;
// sorted prefix index
mod index;
// word list loading
mod loader;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use error::DictionaryError;
pub use index::PrefixIndex;
pub use loader::{load_word_list, WordFilter, DEFAULT_MIN_WORD_LENGTH};
