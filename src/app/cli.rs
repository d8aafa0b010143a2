use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::path::GoalCounting;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds a route from the entrance to the treasure chambers of a hex chamber map.", long_about = None)]
pub struct Cli {
    /// Map file to search
    pub map_file: PathBuf,

    /// Suppress verbose output, only printing the final summary or errors.
    #[clap(short, long)]
    pub quiet: bool,

    /// File that receives the verbose log.
    #[clap(long, default_value = "pathfinder.log")]
    pub log_file: PathBuf,

    /// Write the result to this file instead of standard output.
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// How treasure chambers count toward the stop condition.
    #[clap(long, value_enum, default_value_t = CountingMode::Distinct)]
    pub goal_counting: CountingMode,
}

/// Command-line spelling of [`GoalCounting`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CountingMode {
    /// Count each treasure chamber once.
    Distinct,
    /// Count a treasure chamber every time it is on top of the path.
    PerVisit,
}

impl From<CountingMode> for GoalCounting {
    fn from(mode: CountingMode) -> Self {
        match mode {
            CountingMode::Distinct => GoalCounting::Distinct,
            CountingMode::PerVisit => GoalCounting::PerVisit,
        }
    }
}
