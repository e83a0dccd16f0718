use mazecore::MazeError;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error("Failed to load/save settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse settings file: {0}")]
    Settings(#[from] ron::error::SpannedError),
    #[error("Failed to write output: {0}")]
    Format(#[from] std::fmt::Error),
}
