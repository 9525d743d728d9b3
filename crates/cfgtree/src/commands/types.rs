use clap::ArgMatches;
use tracing::info;

use super::{build_tree, load_config};

pub(crate) fn handle_types_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(matches)?;
    let (router, _) = build_tree(&config)?;

    let types = router.factories().type_names();
    for type_name in &types {
        println!("{}", type_name);
    }

    info!(
        event = "cli.types_completed",
        namespace = router.namespace(),
        count = types.len()
    );
    Ok(())
}
