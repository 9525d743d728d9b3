use clap::ArgMatches;
use tracing::{error, warn};

use cfgtree_core::command::Router;
use cfgtree_core::config::CfgTreeConfig;
use cfgtree_core::events;

use crate::host::{self, RunNode};

mod check;
mod completions;
mod run;
mod status;
mod types;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let result = match matches.subcommand() {
        Some(("run", sub_matches)) => run::handle_run_command(sub_matches),
        Some(("status", sub_matches)) => status::handle_status_command(sub_matches),
        Some(("check", sub_matches)) => check::handle_check_command(sub_matches),
        Some(("types", sub_matches)) => types::handle_types_command(sub_matches),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    events::log_app_shutdown();
    result
}

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
fn load_config_with_warning() -> CfgTreeConfig {
    match CfgTreeConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.cfgtree/config.toml and ./.cfgtree/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            CfgTreeConfig::default()
        }
    }
}

/// Loaded configuration with command-line overrides applied on top.
///
/// Overrides are validated again; an invalid flag value is an error rather
/// than a fallback to defaults.
fn load_config(matches: &ArgMatches) -> Result<CfgTreeConfig, Box<dyn std::error::Error>> {
    let mut config = load_config_with_warning();
    apply_overrides(&mut config, matches);

    if let Err(e) = config.validate() {
        eprintln!("❌ Invalid option: {}", e);
        error!(event = "cli.config.override_invalid", error = %e);
        events::log_app_error(&e);
        return Err(e.into());
    }
    Ok(config)
}

fn apply_overrides(config: &mut CfgTreeConfig, matches: &ArgMatches) {
    if let Some(namespace) = matches.get_one::<String>("namespace") {
        config.router.namespace = namespace.clone();
    }
    if let Some(depth) = matches.get_one::<usize>("max-include-depth") {
        config.router.max_include_depth = *depth;
    }
    if let Some(marker) = matches.get_one::<String>("comment-marker") {
        config.batch.comment_marker = marker.clone();
    }
    if let Some(width) = matches.get_one::<usize>("column-width") {
        config.status.column_width = *width;
    }
}

/// A fresh host tree and a router set up to drive it.
fn build_tree(config: &CfgTreeConfig) -> Result<(Router, RunNode), Box<dyn std::error::Error>> {
    let namespace = &config.router.namespace;
    let factories = host::register_factories(namespace)?;
    let root = RunNode::new(namespace)?;
    Ok((Router::with_config(factories, config), root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::build_cli;

    fn overrides_from(args: &[&str]) -> CfgTreeConfig {
        let matches = build_cli().try_get_matches_from(args).unwrap();
        let (_, sub_matches) = matches.subcommand().unwrap();
        let mut config = CfgTreeConfig::default();
        apply_overrides(&mut config, sub_matches);
        config
    }

    #[test]
    fn test_no_flags_keep_loaded_config() {
        let config = overrides_from(&["cfgtree", "types"]);
        assert_eq!(config, CfgTreeConfig::default());
    }

    #[test]
    fn test_flags_override_each_field() {
        let config = overrides_from(&[
            "cfgtree",
            "--namespace",
            "o2sim",
            "run",
            "--max-include-depth",
            "2",
            "--comment-marker",
            ";",
            "--column-width",
            "16",
        ]);
        assert_eq!(config.router.namespace, "o2sim");
        assert_eq!(config.router.max_include_depth, 2);
        assert_eq!(config.batch.comment_marker, ";");
        assert_eq!(config.status.column_width, 16);
    }

    #[test]
    fn test_zero_width_fails_validation() {
        let config = overrides_from(&["cfgtree", "status", "--column-width", "0"]);
        assert!(config.validate().is_err());
    }
}
