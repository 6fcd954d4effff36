//! Path management for roboplan configuration files.
//!
//! ```text
//! ~/.config/roboplan/          # Config directory (platform config dir)
//! ├── solver.toml              # Solver connection settings
//! └── facility.toml            # Default facility snapshot
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

pub struct RoboplanPaths;

impl RoboplanPaths {
    const APP_DIR: &'static str = "roboplan";

    /// Returns the roboplan configuration directory (e.g. `~/.config/roboplan/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the solver settings file.
    pub fn solver_config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("solver.toml"))
    }

    /// Returns the path to the default facility snapshot.
    pub fn facility_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("facility.toml"))
    }
}
