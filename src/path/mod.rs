// error module
mod error;
// finder module
mod finder;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the finder module.
//─────────────────────────────────────────────────────────────────────────────
pub use error::PathError;
pub use finder::{GoalCounting, PathFinder, SearchReport};
