//! Main application orchestrator.
//!
//! Coordinates a run:
//! 1. Initializes logging.
//! 2. Validates the grid and word list paths.
//! 3. Loads the word list into a prefix index.
//! 4. Builds the board and searches it.
//! 5. Deduplicates and formats the words as requested.
//! 6. Writes them to stdout or the output file.
//!
//! Verbose progress goes to the log file unless `quiet` is set.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println};
use rusty_wordsearch::solver::WordSearchSolver;

/// Runs the main application logic based on parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` for unreadable inputs, an invalid word filter, a
/// malformed grid, or a failed write of the output file.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(&cli.log_file) {
            // Keep going without the verbose log.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                cli.log_file.display(),
                e
            );
        } else {
            verbose_println!(
                quiet_mode,
                "Verbose logging initialized to {}",
                cli.log_file.display()
            );
        }
    }

    let result = run_steps(&cli);

    if let Err(e) = &result {
        verbose_eprintln!(quiet_mode, "[ERROR] {}", e);
    }
    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!(
                "[WARNING] Failed to perform final flush of {}: {}",
                cli.log_file.display(),
                e
            );
        }
    }
    result
}

fn run_steps(cli: &Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if cli.min_length == 0 {
        return Err(AppError::General(
            "--min-length must be at least 1".to_string(),
        ));
    }
    file_handler::validate_input_file(&cli.grid_file, "Grid", quiet_mode)?;
    file_handler::validate_input_file(&cli.words, "Word list", quiet_mode)?;

    verbose_println!(
        quiet_mode,
        "\n============================================================"
    );
    verbose_println!(quiet_mode, "Board: {}", cli.grid_file.display());
    verbose_println!(quiet_mode, "Words: {}", cli.words.display());
    verbose_println!(
        quiet_mode,
        "============================================================"
    );

    let index = processing::load_dictionary(&cli.words, cli.min_length, quiet_mode)?;
    let grid_text = file_handler::read_grid_file(&cli.grid_file, quiet_mode)?;
    let grid = processing::build_board(&grid_text, quiet_mode)?;

    let solver = WordSearchSolver::new(&index);
    let cols = grid.cols();
    let mut hits = processing::search_board(&solver, grid, cli.parallel, quiet_mode);
    if cli.unique {
        hits = processing::dedup_preserving_order(hits);
        verbose_println!(quiet_mode, "   => {} unique word(s).", hits.len());
    }

    let content = processing::format_words(&hits, cli.trace.then_some(cols));

    match &cli.output {
        Some(path) => {
            file_handler::write_content_to_file(path, &content).map_err(|e| {
                verbose_eprintln!(
                    quiet_mode,
                    "[ERROR] Failed to write words to {}: {}",
                    path.display(),
                    e
                );
                AppError::Io(e)
            })?;
            verbose_println!(quiet_mode, "\n[INFO] Words written to {}", path.display());
            if quiet_mode {
                println!("Done.");
            } else {
                println!(
                    "Wrote {} word(s) to {}. See '{}' for verbose output.",
                    hits.len(),
                    path.display(),
                    cli.log_file.display()
                );
            }
        }
        None => print!("{}", content),
    }

    Ok(())
}
