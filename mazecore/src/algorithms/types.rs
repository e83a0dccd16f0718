use std::{collections::HashMap, str::FromStr};

use serde::{Deserialize, Serialize};

/// Parameters for the carving algorithm.
/// Values are kept as strings and parsed on demand, so unknown keys are simply ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params {
    map: HashMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.map.insert(key.into(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(|s| s.as_str())
    }

    pub fn parsed<T: FromStr>(&self, key: &str) -> Option<Result<T, T::Err>> {
        self.get(key).map(|s| s.parse())
    }

    pub fn parsed_or_warn<T: FromStr>(&self, key: &str, default: T) -> T {
        match self.parsed(key) {
            None => default,
            Some(Ok(v)) => v,
            Some(Err(_)) => {
                log::warn!("Invalid value for parameter '{}', using default value", key);
                default
            }
        }
    }
}

/// Description of a maze to build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeSpec {
    pub rows: usize,
    pub cols: usize,

    /// Seed of the maze.
    ///
    /// Used for deterministic generation, a random one is picked when missing.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Parameters passed to the carver.
    #[serde(default)]
    pub params: Params,
}

impl MazeSpec {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            seed: None,
            params: Params::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }
}
