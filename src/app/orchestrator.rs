//! Main application orchestrator.
//!
//! Coordinates a path search run:
//! 1. Initializes logging.
//! 2. Validates the map file and loads the chamber map.
//! 3. Runs the path search with the requested goal counting policy.
//! 4. Prints the result, or writes it to the output file.
//!
//! Adheres to command-line arguments like `quiet` for controlling verbosity.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::report;
use crate::logger;
use crate::map::{self, ChamberGraph};
use crate::path::{PathError, PathFinder};
use crate::{verbose_eprintln, verbose_println};

/// Runs the main application logic based on parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` if the map cannot be loaded, the search cannot run, or
/// the output file cannot be written.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    // Initialize global logger if not in quiet mode.
    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(&cli.log_file) {
            // Keep going without the verbose log file.
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

    let result = search_and_report(&cli);
    if let Err(e) = &result {
        verbose_eprintln!(quiet_mode, "[ERROR] {}", e);
    }

    // Final flush of the log before exiting.
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

fn search_and_report(cli: &Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;
    file_handler::validate_map_file(&cli.map_file, quiet_mode)?;

    verbose_println!(
        quiet_mode,
        "\n============================================================"
    );
    verbose_println!(quiet_mode, "Processing Map: {}", cli.map_file.display());
    verbose_println!(
        quiet_mode,
        "============================================================"
    );

    verbose_println!(quiet_mode, "\n[STEP 1] Loading chamber map...");
    let chamber_map = map::load_map_from_file(&cli.map_file)?;
    verbose_println!(
        quiet_mode,
        "   => {} chamber(s), {} treasure chamber(s).",
        chamber_map.len(),
        chamber_map.num_goals()
    );

    verbose_println!(quiet_mode, "\n[STEP 2] Searching for a path...");
    let mut finder = PathFinder::new(chamber_map)
        .with_goal_counting(cli.goal_counting.into())
        .quiet(quiet_mode);
    let search_report = finder.search()?;
    let chamber_map = finder.map().ok_or(PathError::GraphUnavailable)?;

    let output = if quiet_mode {
        format!("{}\n", report::summary_line(&search_report))
    } else {
        report::full_report(chamber_map, &search_report)
    };

    match &cli.output {
        Some(output_path) => {
            file_handler::write_content_to_file(output_path, &output)?;
            verbose_println!(
                quiet_mode,
                "\n[INFO] Result written to {}",
                output_path.display()
            );
            if quiet_mode {
                println!("Done.");
            }
        }
        None => print!("{}", output),
    }
    Ok(())
}
