use clap::ArgMatches;
use tracing::info;

use cfgtree_core::status::{print_report, snapshot};

use super::{build_tree, load_config};

pub(crate) fn handle_status_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.status_started", json_output = json_output);

    let config = load_config(matches)?;
    let (_, root) = build_tree(&config)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&snapshot(&root))?);
    } else {
        print_report(&root, config.status.column_width, &mut std::io::stdout().lock())?;
    }

    info!(event = "cli.status_completed");
    Ok(())
}
