use clap::ArgMatches;
use serde::Serialize;
use tracing::info;

use dashtick_core::{RefreshController, RefreshInterval};

use super::helpers::load_config_with_warning;
use crate::table::TableFormatter;

/// One row of `dashtick options --json`.
#[derive(Debug, Serialize)]
struct OptionEntry {
    interval: RefreshInterval,
    label_key: String,
    millis: Option<u64>,
    selected: bool,
}

fn option_entries(controller: &RefreshController) -> Vec<OptionEntry> {
    controller
        .available_options()
        .iter()
        .map(|option| OptionEntry {
            interval: *option,
            label_key: option.label_key(),
            millis: option.millis(),
            selected: *option == controller.selected(),
        })
        .collect()
}

pub(crate) fn handle_options_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let controller = load_config_with_warning().build_controller();

    if json_output {
        let entries = option_entries(&controller);
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        let options = controller.available_options();
        TableFormatter::new(options).print_table(options, controller.selected());
        if controller.is_readonly() {
            println!("Read-only: the interval cannot be changed.");
        }
    }

    info!(
        event = "cli.options_completed",
        selected = %controller.selected(),
        readonly = controller.is_readonly()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_entries_mark_selection() {
        let controller = RefreshController::initialize(RefreshInterval::FiveMin, true);
        let entries = option_entries(&controller);

        assert_eq!(entries.len(), 6);
        let selected: Vec<_> = entries
            .iter()
            .filter(|e| e.selected)
            .map(|e| e.interval)
            .collect();
        assert_eq!(selected, vec![RefreshInterval::FiveMin]);
    }

    #[test]
    fn test_option_entry_json_shape() {
        let controller = RefreshController::initialize(RefreshInterval::Off, true);
        let entries = option_entries(&controller);
        let json = serde_json::to_value(&entries[0]).unwrap();

        assert_eq!(json["interval"], "OFF");
        assert_eq!(json["label_key"], "dashboard.interval.off");
        assert!(json["millis"].is_null());
        assert_eq!(json["selected"], true);
    }
}
