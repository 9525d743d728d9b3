use std::io::Write;

use clap::ArgMatches;
use tracing::{error, info};

use cfgtree_core::command::INCLUDE_DIRECTIVE;
use cfgtree_core::events;
use cfgtree_core::node::initialize;
use cfgtree_core::status::print_report;

use super::{build_tree, load_config};

/// Commands replayed for a run: the config file first, then the overrides.
///
/// Both go through one buffer, so an override may address a delegate the
/// file declares.
fn compose_buffer(config_file: Option<&str>, overrides: &[String]) -> Vec<String> {
    let mut buffer = Vec::with_capacity(overrides.len() + 1);
    if let Some(path) = config_file {
        buffer.push(format!("{} {}", INCLUDE_DIRECTIVE, path));
    }
    buffer.extend(overrides.iter().cloned());
    buffer
}

pub(crate) fn handle_run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(matches)?;
    let config_file = matches.get_one::<String>("config").map(String::as_str);
    let overrides: Vec<String> = matches
        .get_many::<String>("set")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let no_status = matches.get_flag("no-status");
    let no_init = matches.get_flag("no-init");

    // include() takes a single token; commas are separators too
    if let Some(path) = config_file
        && path.contains(|c: char| c.is_whitespace() || c == ',')
    {
        eprintln!("❌ Config path must not contain spaces or commas: {}", path);
        error!(event = "cli.run_invalid_path", path = path);
        return Err("Invalid config path".into());
    }

    info!(
        event = "cli.run_started",
        config_file = ?config_file,
        overrides = overrides.len()
    );

    let (mut router, mut root) = build_tree(&config)?;
    let buffer = compose_buffer(config_file, &overrides);

    if let Err(e) = router.process_buffer(&mut root, &buffer) {
        eprintln!("❌ Configuration failed: {}", e);
        events::log_run_failed(&e);
        events::log_app_error(&e);
        return Err(e.into());
    }

    if !no_init && let Err(e) = initialize(&mut root) {
        eprintln!("❌ Initialisation failed: {}", e);
        events::log_init_failed(&e);
        events::log_app_error(&e);
        return Err(e.into());
    }

    if !no_status {
        let mut stdout = std::io::stdout().lock();
        print_report(&root, config.status.column_width, &mut stdout)?;
        stdout.flush()?;
    }

    events::log_run_completed(buffer.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_buffer_orders_file_before_overrides() {
        let overrides = vec!["simulation.nevents 10".to_string()];
        let buffer = compose_buffer(Some("sim.cfg"), &overrides);
        assert_eq!(buffer, vec!["include() sim.cfg", "simulation.nevents 10"]);
    }

    #[test]
    fn test_compose_buffer_without_file() {
        let buffer = compose_buffer(None, &[]);
        assert!(buffer.is_empty());
    }
}
