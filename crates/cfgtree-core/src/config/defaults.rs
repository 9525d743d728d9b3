//! Default values for configuration types.
//!
//! The free functions double as serde `#[serde(default = "...")]` providers.

use crate::config::types::{BatchConfig, RouterConfig, StatusConfig};

pub fn default_namespace() -> String {
    "cfgtree".to_string()
}

/// Bounds `include()` nesting so a file that includes itself terminates.
pub fn default_max_include_depth() -> usize {
    32
}

pub fn default_comment_marker() -> String {
    "#".to_string()
}

pub fn default_column_width() -> usize {
    40
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            max_include_depth: default_max_include_depth(),
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            comment_marker: default_comment_marker(),
        }
    }
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            column_width: default_column_width(),
        }
    }
}
