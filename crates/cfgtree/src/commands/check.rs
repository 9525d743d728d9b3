use std::path::Path;

use clap::ArgMatches;
use tracing::{error, info};

use cfgtree_core::command::ProcessMode;
use cfgtree_core::events;

use super::{build_tree, load_config};

/// Replay a file against a fresh tree the way `run` would, without
/// initialising or reporting.
pub(crate) fn handle_check_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let file = matches
        .get_one::<String>("file")
        .ok_or("File argument is required")?;
    let path = Path::new(file);

    info!(event = "cli.check_started", path = %path.display());

    let config = load_config(matches)?;
    let (mut router, mut root) = build_tree(&config)?;

    let result = router
        .process_file(&mut root, path, ProcessMode::DelegatesOnly)
        .and_then(|()| router.process_file(&mut root, path, ProcessMode::ValuesOnly));

    match result {
        Ok(()) => {
            println!("✅ {} is valid", path.display());
            info!(event = "cli.check_completed", path = %path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            error!(event = "cli.check_failed", path = %path.display(), error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
