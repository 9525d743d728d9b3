//! Downstream initialisation of a configured tree.

use tracing::{debug, info, warn};

use super::errors::NodeError;
use super::traits::ConfigNode;

/// Initialise every active node of the tree rooted at `root`.
///
/// Walks depth-first in registry order, initialising children before their
/// parent. Inactive nodes and everything below them are skipped. The first
/// failure aborts the walk.
pub fn initialize(root: &mut dyn ConfigNode) -> Result<(), NodeError> {
    info!(event = "core.node.init_started");
    let result = initialize_at(root, "");
    match &result {
        Ok(()) => info!(event = "core.node.init_completed"),
        Err(e) => warn!(event = "core.node.init_failed", error = %e),
    }
    result
}

fn initialize_at(node: &mut dyn ConfigNode, path: &str) -> Result<(), NodeError> {
    if !node.is_active() {
        debug!(event = "core.node.init_skipped", path = path);
        return Ok(());
    }

    for (name, delegate) in node.core_mut().delegates_mut().iter_mut() {
        let child_path = if path.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", path, name)
        };
        initialize_at(delegate.node.as_mut(), &child_path)?;
    }

    node.on_init().map_err(|e| match e {
        NodeError::InitFailed { .. } => e,
        other => NodeError::init_failed(display_path(path), other),
    })?;
    debug!(event = "core.node.init_completed", path = path);
    Ok(())
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "<root>" } else { path }
}
