use clap::ArgMatches;
use tracing::error;

use dashtick_core::events;

pub mod helpers;

mod completions;
mod duration;
mod options;
mod watch;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let result = match matches.subcommand() {
        Some(("options", sub_matches)) => options::handle_options_command(sub_matches),
        Some(("duration", sub_matches)) => duration::handle_duration_command(sub_matches),
        Some(("watch", sub_matches)) => watch::handle_watch_command(sub_matches),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    if let Err(e) = &result {
        events::log_app_error(e.as_ref());
    }
    events::log_app_shutdown();

    result
}
