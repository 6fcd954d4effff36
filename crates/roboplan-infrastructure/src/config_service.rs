//! Loads `SolverConfig` from disk and the environment.
//!
//! Priority: environment variables > config file > built-in defaults.

use crate::paths::RoboplanPaths;
use roboplan_core::config::SolverConfig;
use roboplan_core::error::{PlanError, Result};
use std::fs;
use std::path::Path;

pub const ENV_SOLVER_HOST: &str = "ROBOPLAN_SOLVER_HOST";
pub const ENV_SOLVER_TIMEOUT_SECS: &str = "ROBOPLAN_SOLVER_TIMEOUT_SECS";

/// Loads the solver settings.
///
/// With `path = None` the default `~/.config/roboplan/solver.toml` is used.
/// A missing or empty file yields the defaults.
pub fn load_solver_config(path: Option<&Path>) -> Result<SolverConfig> {
    let path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => RoboplanPaths::solver_config_file().ok(),
    };

    let mut config = match path {
        Some(path) if path.exists() => {
            let content = fs::read_to_string(&path).map_err(|e| PlanError::Io {
                message: format!("Failed to read solver config at {}: {}", path.display(), e),
            })?;
            if content.trim().is_empty() {
                SolverConfig::default()
            } else {
                toml::from_str(&content).map_err(|e| {
                    PlanError::config(format!(
                        "Failed to parse solver config at {}: {}",
                        path.display(),
                        e
                    ))
                })?
            }
        }
        Some(path) => {
            tracing::debug!(
                "[Config] No solver config at {}, using defaults",
                path.display()
            );
            SolverConfig::default()
        }
        None => SolverConfig::default(),
    };

    apply_overrides(&mut config, |key| std::env::var(key).ok())?;
    config.validate()?;
    Ok(config)
}

/// Applies environment overrides read through `var`.
fn apply_overrides(
    config: &mut SolverConfig,
    var: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(host) = var(ENV_SOLVER_HOST) {
        config.host = host;
    }
    if let Some(timeout) = var(ENV_SOLVER_TIMEOUT_SECS) {
        config.timeout_secs = timeout.trim().parse().map_err(|_| {
            PlanError::config(format!(
                "{} must be a whole number of seconds, got '{}'",
                ENV_SOLVER_TIMEOUT_SECS, timeout
            ))
        })?;
    }
    Ok(())
}
