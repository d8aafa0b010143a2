use crate::stack::StackError;
use thiserror::Error;

// Error type for path search operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Error when the search runs without a chamber map.
    #[error("Chamber map is not available, cannot search for a path.")]
    GraphUnavailable,

    /// Error when the chamber map could not be loaded; keeps the load failure.
    #[error("Chamber map failed to load: {0}")]
    MapNotLoaded(String),

    /// Error when the path stack is misused during the search.
    #[error("Path stack error: {0}")]
    Stack(#[from] StackError),
}
