use clap::ArgMatches;
use tracing::info;

use dashtick_core::millis_for_key;

pub(crate) fn handle_duration_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let key = matches
        .get_one::<String>("interval")
        .ok_or("Interval argument is required")?;

    let millis = millis_for_key(key);
    info!(
        event = "cli.duration_completed",
        interval = key.as_str(),
        millis = ?millis
    );

    println!("{}", describe_millis(millis));
    Ok(())
}

/// `off` when disabled, otherwise the bare millisecond count.
fn describe_millis(millis: Option<u64>) -> String {
    match millis {
        Some(ms) => ms.to_string(),
        None => "off".to_string(),
    }
}
