//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.cfgtree/config.toml` (global user preferences)
//! 3. **Project config** - `./.cfgtree/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::types::{CfgTreeConfig, PartialConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Directory holding cfgtree config files, relative to home or project root.
pub const CONFIG_DIR: &str = ".cfgtree";

pub const CONFIG_FILE: &str = "config.toml";

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a file exists but cannot be parsed, or if the merged
/// configuration fails validation. Missing config files are not errors.
pub fn load_hierarchy() -> Result<CfgTreeConfig, ConfigError> {
    let user_path = dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE));
    let project_path = std::env::current_dir()?.join(CONFIG_DIR).join(CONFIG_FILE);
    load_from_paths(user_path.as_deref(), Some(project_path.as_path()))
}

/// Load and merge the given files on top of the defaults, in order.
pub fn load_from_paths(
    user_path: Option<&Path>,
    project_path: Option<&Path>,
) -> Result<CfgTreeConfig, ConfigError> {
    let mut config = CfgTreeConfig::default();

    for path in [user_path, project_path].into_iter().flatten() {
        match load_config_file(path) {
            Ok(partial) => config = merge_config(config, partial),
            Err(ConfigError::ConfigNotFound { path }) => {
                debug!(event = "core.config.file_skipped", path = %path);
            }
            Err(e) => return Err(e),
        }
    }

    validate_config(&config)?;
    Ok(config)
}

/// Load a single configuration file.
pub(crate) fn load_config_file(path: &Path) -> Result<PartialConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Apply the fields set in `partial` over `base`.
pub(crate) fn merge_config(base: CfgTreeConfig, partial: PartialConfig) -> CfgTreeConfig {
    let mut merged = base;
    if let Some(namespace) = partial.router.namespace {
        merged.router.namespace = namespace;
    }
    if let Some(depth) = partial.router.max_include_depth {
        merged.router.max_include_depth = depth;
    }
    if let Some(marker) = partial.batch.comment_marker {
        merged.batch.comment_marker = marker;
    }
    if let Some(width) = partial.status.column_width {
        merged.status.column_width = width;
    }
    merged
}

/// Path of the project config for a given project root.
pub fn project_config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR).join(CONFIG_FILE)
}
