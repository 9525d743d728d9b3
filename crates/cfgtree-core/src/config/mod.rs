//! # Configuration System
//!
//! Hierarchical TOML configuration for the command engine itself (not for
//! the trees it drives).
//!
//! ## Configuration Hierarchy
//!
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.cfgtree/config.toml`
//! 3. **Project config** - `./.cfgtree/config.toml`
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use cfgtree_core::config::CfgTreeConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CfgTreeConfig::load_hierarchy()?;
//!     println!("namespace: {}", config.router.namespace);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use loading::{CONFIG_DIR, CONFIG_FILE, load_from_paths, project_config_path};
pub use types::{BatchConfig, CfgTreeConfig, RouterConfig, StatusConfig};
pub use validation::validate_config;

impl CfgTreeConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
