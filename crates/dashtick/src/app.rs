use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("dashtick")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Pick a dashboard refresh interval and drive the periodic refresh it implies")
        .long_about("dashtick holds a dashboard's refresh interval (OFF, TEN_SECONDS, ONE_MIN, FIVE_MIN, QUARTER, ONE_HOUR), maps it to a wait duration, and re-arms a single periodic refresh timer whenever the selection changes.")
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only log errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("options")
                .about("List the selectable refresh intervals in display order")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("duration")
                .about("Print the refresh period of an interval in milliseconds, or 'off'")
                .arg(
                    Arg::new("interval")
                        .help("Interval name, e.g. ONE_MIN (case-insensitive). Unknown names print 'off'")
                        .required(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("watch")
                .about("Run a refresh loop; read new interval names from stdin")
                .long_about(
                    "Starts a controller from config and flags, then prints a line per refresh tick.\n\n\
                    Each line read from stdin selects a new interval (ignored when read-only or unknown).\n\
                    Exits on end of input, or after --ticks refreshes when given."
                )
                .arg(
                    Arg::new("interval")
                        .long("interval")
                        .short('i')
                        .help("Initial interval (overrides config). Unknown names fall back to OFF")
                )
                .arg(
                    Arg::new("readonly")
                        .long("readonly")
                        .help("Ignore interval changes from stdin (overrides config)")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("editable")
                )
                .arg(
                    Arg::new("editable")
                        .long("editable")
                        .short('e')
                        .help("Accept interval changes from stdin (overrides config)")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("ticks")
                        .long("ticks")
                        .short('n')
                        .help("Stop after this many refresh ticks")
                        .value_parser(clap::value_parser!(u64).range(1..))
                )
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
