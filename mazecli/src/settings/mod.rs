use std::{
    fs,
    path::{Path, PathBuf},
};

use mazecore::algorithms::{MazeSpec, Params};
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");
const DEFAULT_SIZE: usize = 10;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub default_rows: Option<usize>,
    #[serde(default)]
    pub default_cols: Option<usize>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub no_rng: Option<bool>,
}

#[allow(dead_code)]
impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mazecli")
            .join("settings.ron")
    }

    fn options() -> ron::Options {
        ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
    }

    pub fn from_ron(s: &str) -> Result<Self, CliError> {
        Ok(Self::options().from_str(s)?)
    }

    /// Loads settings from `path`, writing the default settings there first if the file does not
    /// exist yet.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_ron(&content),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("settings file {:?} not found, creating default one", path);
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(path, DEFAULT_SETTINGS)?;
                Self::from_ron(DEFAULT_SETTINGS)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn reset_config(path: &Path) -> Result<(), CliError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }

    pub fn set_default_rows(mut self, value: usize) -> Self {
        self.default_rows = Some(value);
        self
    }

    pub fn get_default_rows(&self) -> usize {
        self.default_rows.unwrap_or(DEFAULT_SIZE)
    }

    pub fn set_default_cols(mut self, value: usize) -> Self {
        self.default_cols = Some(value);
        self
    }

    pub fn get_default_cols(&self) -> usize {
        self.default_cols.unwrap_or(DEFAULT_SIZE)
    }

    pub fn set_seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn set_no_rng(mut self, value: bool) -> Self {
        self.no_rng = Some(value);
        self
    }

    pub fn get_no_rng(&self) -> bool {
        self.no_rng.unwrap_or_default()
    }

    /// Builds the maze spec, command line values take precedence over the settings.
    pub fn maze_spec(
        &self,
        rows: Option<usize>,
        cols: Option<usize>,
        seed: Option<u64>,
        no_rng: bool,
    ) -> MazeSpec {
        let mut spec = MazeSpec::new(
            rows.unwrap_or_else(|| self.get_default_rows()),
            cols.unwrap_or_else(|| self.get_default_cols()),
        );
        spec.seed = seed.or(self.get_seed());

        if no_rng || self.get_no_rng() {
            spec.params = Params::new().with("no_rng", true);
        }

        spec
    }
}
