use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Map loading error: {0}")]
    Map(#[from] crate::map::MapError),
    #[error("Path search error: {0}")]
    Path(#[from] crate::path::PathError),
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
}
