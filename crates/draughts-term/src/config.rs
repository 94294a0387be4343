//! Configuration loading for draughts-term.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Locations searched for `draughts.toml` when no path is given.
const SEARCH_PATHS: [&str; 3] = ["draughts.toml", "../draughts.toml", "../../draughts.toml"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("square_size must be positive")]
    ZeroSquareSize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Edge length of one board square in pixels, for `click` input.
    #[serde(default = "default_square_size")]
    pub square_size: u32,
    /// Print row and column numbers around the board.
    #[serde(default = "default_show_coordinates")]
    pub show_coordinates: bool,
}

fn default_square_size() -> u32 {
    50
}

fn default_show_coordinates() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            square_size: default_square_size(),
            show_coordinates: default_show_coordinates(),
        }
    }
}

impl Config {
    /// Loads the config from `path`, or from the first `draughts.toml` found
    /// in the current or parent directories. Falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        for candidate in SEARCH_PATHS {
            let candidate = Path::new(candidate);
            if candidate.exists() {
                return Self::from_file(candidate);
            }
        }

        tracing::debug!("no draughts.toml found, using defaults");
        Ok(Config::default())
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content)?;
        tracing::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses config text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        if config.square_size == 0 {
            return Err(ConfigError::ZeroSquareSize);
        }
        Ok(config)
    }

    /// Translates a pixel position into a `(row, col)` cell.
    ///
    /// Negative pixels map to negative cells so that they are rejected as
    /// off-board instead of landing on row or column 0.
    pub fn cell_at(&self, x: i32, y: i32) -> (i32, i32) {
        let size = i32::try_from(self.square_size).unwrap_or(i32::MAX);
        (y.div_euclid(size), x.div_euclid(size))
    }
}
