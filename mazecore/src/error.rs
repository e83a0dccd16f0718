use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("invalid maze dimensions {rows}x{cols}, both must be at least 1")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("maze has not been generated yet")]
    NotGenerated,
    #[error("maze has already been generated, reset it first")]
    AlreadyGenerated,
    #[error("no path from entry to exit")]
    NoPathFound,
}
