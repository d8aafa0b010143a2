use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for map loading and chamber graph queries.
#[derive(Error, Debug)]
pub enum MapError {
    /// Error when a neighbour is requested outside the 0..=5 slot range.
    #[error("Invalid neighbour index {0}, expected 0..=5")]
    InvalidNeighborIndex(usize),

    /// Error when reading a map file.
    #[error("Failed to read map file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when a map cell uses an unknown character.
    #[error("Invalid map character '{ch}' at line {line}, column {column}")]
    InvalidMapCharacter { ch: char, line: usize, column: usize },

    /// Error when the map has no entrance chamber.
    #[error("Map has no entrance chamber")]
    MissingEntrance,

    /// Error when the map declares a second entrance.
    #[error("Map has more than one entrance: {first:?} and {second:?}")]
    MultipleEntrances {
        first: (usize, usize),
        second: (usize, usize),
    },

    /// Error when the map holds no cells at all.
    #[error("Map contains no chambers")]
    EmptyMap,
}
