//! Lifecycle events shared by every front end.

use tracing::{error, info};

use crate::command::CommandError;
use crate::node::NodeError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_shutdown() {
    info!(event = "core.app.shutdown_started");
}

pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}

/// `origin:line` of every batch the failure passed through, outermost first.
///
/// `<buffer>:2 > sim.cfg:14` means line 2 of the buffer included `sim.cfg`,
/// whose line 14 failed.
pub fn include_trail(error: &CommandError) -> String {
    let mut trail = Vec::new();
    let mut current = error;
    while let CommandError::LineFailed {
        origin,
        line,
        source,
    } = current
    {
        trail.push(format!("{}:{}", origin, line));
        current = source.as_ref();
    }
    trail.join(" > ")
}

/// A run stopped while replaying its commands.
pub fn log_run_failed(error: &CommandError) {
    let cause = error.root_cause();
    error!(
        event = "core.run.configure_failed",
        trail = %include_trail(error),
        cause = %cause,
        cause_code = crate::errors::CfgTreeError::error_code(cause)
    );
}

/// A configured tree refused to initialise.
pub fn log_init_failed(error: &NodeError) {
    let node = match error {
        NodeError::InitFailed { node, .. } => node.as_str(),
        _ => "<root>",
    };
    error!(event = "core.run.init_failed", node = node, error = %error);
}

pub fn log_run_completed(commands: usize) {
    info!(event = "core.run.completed", commands = commands);
}
