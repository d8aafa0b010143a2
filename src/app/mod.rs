mod cli;
mod error;
mod file_handler;
mod orchestrator;
mod report;

pub use cli::{Cli, CountingMode};
pub use error::AppError;
pub use orchestrator::run_app;
pub use report::{format_route, full_report, render_map, summary_line};
