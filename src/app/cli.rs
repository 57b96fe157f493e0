use clap::Parser;
use std::path::PathBuf;

use rusty_wordsearch::dictionary::DEFAULT_MIN_WORD_LENGTH;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds every dictionary word traceable on a letter grid.", long_about = None)]
pub struct Cli {
    /// Text file holding the grid, one row per line
    pub grid_file: PathBuf,

    /// Word list, one word per line
    #[clap(short, long)]
    pub words: PathBuf,

    /// Shortest word to keep from the word list
    #[clap(long, default_value_t = DEFAULT_MIN_WORD_LENGTH)]
    pub min_length: usize,

    /// Print each word only once, in the order it was first found
    #[clap(short, long)]
    pub unique: bool,

    /// Search start cells on all cores
    #[clap(short, long)]
    pub parallel: bool,

    /// Write the words to this file instead of stdout
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Print the cell path of each word next to it
    #[clap(long)]
    pub trace: bool,

    /// Verbose log file
    #[clap(long, default_value = "wordsearch.log")]
    pub log_file: PathBuf,

    /// Suppress verbose output, only printing the words or errors.
    #[clap(short, long)]
    pub quiet: bool,
}
