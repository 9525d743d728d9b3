use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("cfgtree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Replay configuration commands through a tree of delegates")
        .long_about("cfgtree drives a hierarchical configuration tree with text commands such as 'generator.diamond_xyz 0. 0. 0.'. Commands are read from files and the command line, routed down the tree by their dotted address, and the resulting state is reported.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("namespace")
                .long("namespace")
                .help("Namespace for unqualified delegate() type names (overrides config)")
                .global(true),
        )
        .arg(
            Arg::new("max-include-depth")
                .long("max-include-depth")
                .help("Maximum include() nesting (overrides config)")
                .value_parser(clap::value_parser!(usize))
                .global(true),
        )
        .arg(
            Arg::new("comment-marker")
                .long("comment-marker")
                .help("Marker starting a comment in command files (overrides config)")
                .global(true),
        )
        .arg(
            Arg::new("column-width")
                .long("column-width")
                .help("Width of the name column in status output (overrides config)")
                .value_parser(clap::value_parser!(usize))
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Configure the tree from a file and overrides, then initialise it")
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Command file to include before the overrides")
                )
                .arg(
                    Arg::new("set")
                        .long("set")
                        .short('s')
                        .help("Extra command applied after the config file (repeatable)")
                        .action(ArgAction::Append)
                        .allow_hyphen_values(true)
                )
                .arg(
                    Arg::new("no-status")
                        .long("no-status")
                        .help("Do not print the status report")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("no-init")
                        .long("no-init")
                        .help("Skip initialisation of the configured tree")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("status")
                .about("Show the default tree without applying any commands")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("check")
                .about("Replay a command file against a fresh tree and report the first error")
                .arg(
                    Arg::new("file")
                        .help("Command file to check")
                        .required(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("types")
                .about("List the types delegate() can create")
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Target shell")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(Shell))
                )
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "cfgtree");
    }

    #[test]
    fn test_cli_run_defaults() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["cfgtree", "run"]).unwrap();
        let run_matches = matches.subcommand_matches("run").unwrap();
        assert!(run_matches.get_one::<String>("config").is_none());
        assert!(run_matches.get_many::<String>("set").is_none());
        assert!(!run_matches.get_flag("no-status"));
        assert!(!run_matches.get_flag("no-init"));
    }

    #[test]
    fn test_cli_run_repeated_set() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec![
                "cfgtree",
                "run",
                "-c",
                "sim.cfg",
                "--set",
                "simulation.nevents 10",
                "-s",
                "generator.diamond_xyz 0. 0. -1.",
            ])
            .unwrap();
        let run_matches = matches.subcommand_matches("run").unwrap();
        assert_eq!(
            run_matches.get_one::<String>("config").unwrap(),
            "sim.cfg"
        );
        let sets: Vec<&String> = run_matches.get_many::<String>("set").unwrap().collect();
        assert_eq!(
            sets,
            vec!["simulation.nevents 10", "generator.diamond_xyz 0. 0. -1."]
        );
    }

    #[test]
    fn test_cli_status_json_flag() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["cfgtree", "status", "--json"])
            .unwrap();
        let status_matches = matches.subcommand_matches("status").unwrap();
        assert!(status_matches.get_flag("json"));
    }

    #[test]
    fn test_cli_check_requires_file() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["cfgtree", "check"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_completions_rejects_unknown_shell() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["cfgtree", "completions", "cmd.exe"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_verbose_flag_short() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["cfgtree", "-v", "types"]).unwrap();
        assert!(matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_verbose_flag_after_subcommand() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["cfgtree", "status", "--verbose"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_verbose_flag_default_false() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["cfgtree", "types"]).unwrap();
        assert!(!matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_config_overrides() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec![
                "cfgtree",
                "--namespace",
                "o2sim",
                "run",
                "--max-include-depth",
                "4",
                "--column-width",
                "20",
                "--comment-marker",
                "//",
            ])
            .unwrap();
        let run_matches = matches.subcommand_matches("run").unwrap();
        assert_eq!(run_matches.get_one::<String>("namespace").unwrap(), "o2sim");
        assert_eq!(run_matches.get_one::<usize>("max-include-depth"), Some(&4));
        assert_eq!(run_matches.get_one::<usize>("column-width"), Some(&20));
        assert_eq!(run_matches.get_one::<String>("comment-marker").unwrap(), "//");
    }

    #[test]
    fn test_cli_rejects_non_numeric_width() {
        let app = build_cli();
        let matches =
            app.try_get_matches_from(vec!["cfgtree", "status", "--column-width", "wide"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_requires_subcommand() {
        let app = build_cli();
        assert!(app.try_get_matches_from(vec!["cfgtree"]).is_err());
    }
}
