//! Configuration management with layered loading
//!
//! The project layout itself is fixed; settings only cover where projects
//! go by default and how chatty the success message is.
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rscaffold/rscaffold.toml`
//! 3. Environment variables: `RSCAFFOLD_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::application::ApplicationError;
use crate::domain::expand_env_vars;

/// Unified configuration for rscaffold.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Base directory used when no base path is given (default: cwd)
    pub base_dir: Option<PathBuf>,
    /// Print the "Next steps" hints after creating a project
    pub next_steps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_dir: None,
            next_steps: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, keep base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub base_dir: Option<PathBuf>,
    pub next_steps: Option<bool>,
}

/// Get the XDG config directory for rscaffold.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rscaffold").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rscaffold.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Load settings with layered precedence from the XDG location.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings using `global_path` as the config file.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load_from(global_path: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = global_path {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current, None)?;
        current.expand_paths();

        Ok(current)
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            base_dir: overlay.base_dir.clone().or_else(|| self.base_dir.clone()),
            next_steps: overlay.next_steps.unwrap_or(self.next_steps),
        }
    }

    /// Apply RSCAFFOLD_* environment variables as explicit overrides.
    ///
    /// `source` replaces the process environment when given (tests).
    fn apply_env_overrides(
        mut settings: Self,
        source: Option<config::Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("RSCAFFOLD")
                    .prefix_separator("_")
                    .separator("__")
                    .source(source),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("base_dir") {
            settings.base_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_bool("next_steps") {
            settings.next_steps = val;
        }

        Ok(settings)
    }

    /// Expand `~` and `$VAR` in `base_dir`.
    fn expand_paths(&mut self) {
        if let Some(base) = &self.base_dir {
            let expanded = expand_env_vars(base.to_string_lossy().as_ref());
            self.base_dir = Some(PathBuf::from(expanded));
        }
    }
}
