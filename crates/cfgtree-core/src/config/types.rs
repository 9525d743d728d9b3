//! Configuration type definitions for cfgtree.
//!
//! These types are deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [router]
//! namespace = "o2sim"
//! max_include_depth = 16
//!
//! [batch]
//! comment_marker = "#"
//!
//! [status]
//! column_width = 48
//! ```

use serde::{Deserialize, Serialize};

/// Settings of the command engine itself, loaded from:
/// 1. User config: `~/.cfgtree/config.toml`
/// 2. Project config: `./.cfgtree/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CfgTreeConfig {
    #[serde(default)]
    pub router: RouterConfig,

    #[serde(default)]
    pub batch: BatchConfig,

    #[serde(default)]
    pub status: StatusConfig,
}

/// Command routing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Namespace unqualified `delegate()` type names are looked up under.
    #[serde(default = "super::defaults::default_namespace")]
    pub namespace: String,

    /// How deeply `include()` directives may nest.
    #[serde(default = "super::defaults::default_max_include_depth")]
    pub max_include_depth: usize,
}

/// Batch file settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Everything from the first unescaped marker to end of line is ignored.
    #[serde(default = "super::defaults::default_comment_marker")]
    pub comment_marker: String,
}

/// Status report settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusConfig {
    /// Width of the name column in status output.
    #[serde(default = "super::defaults::default_column_width")]
    pub column_width: usize,
}

/// Partial configuration as read from one file.
///
/// Every field is optional so that a later file only overrides what it sets.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct PartialConfig {
    #[serde(default)]
    pub router: PartialRouterConfig,
    #[serde(default)]
    pub batch: PartialBatchConfig,
    #[serde(default)]
    pub status: PartialStatusConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct PartialRouterConfig {
    pub namespace: Option<String>,
    pub max_include_depth: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct PartialBatchConfig {
    pub comment_marker: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct PartialStatusConfig {
    pub column_width: Option<usize>,
}
