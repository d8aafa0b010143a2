// error module
mod error;
// graph module
mod graph;
// chamber module
mod chamber;
// loader module
mod loader;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the map module.
//─────────────────────────────────────────────────────────────────────────────
pub use chamber::{Chamber, ChamberKind, ChamberMap, Mark};
pub use error::MapError;
pub use graph::{ChamberGraph, ChamberId, NUM_NEIGHBORS};
pub use loader::{load_map_from_file, parse_map};
