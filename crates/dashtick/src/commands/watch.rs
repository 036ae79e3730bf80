use std::cell::RefCell;
use std::rc::Rc;

use clap::ArgMatches;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};

use dashtick_core::{DashtickConfig, RefreshController, RefreshInterval, SelectOutcome};

use super::helpers::load_config_with_warning;
use crate::table::format_duration;
use crate::timer::RefreshTimer;

/// Flags of `dashtick watch` that override the config file.
#[derive(Debug, Default)]
struct WatchOverrides {
    interval: Option<String>,
    readonly: Option<bool>,
    max_ticks: Option<u64>,
}

impl WatchOverrides {
    fn from_matches(matches: &ArgMatches) -> Self {
        let readonly = if matches.get_flag("editable") {
            Some(false)
        } else if matches.get_flag("readonly") {
            Some(true)
        } else {
            None
        };

        Self {
            interval: matches.get_one::<String>("interval").cloned(),
            readonly,
            max_ticks: matches.get_one::<u64>("ticks").copied(),
        }
    }

    fn build_controller(&self, config: &DashtickConfig) -> RefreshController {
        let readonly = self.readonly.unwrap_or_else(|| config.readonly());
        match self.interval.as_deref().or(config.refresh.interval.as_deref()) {
            Some(key) => RefreshController::initialize_from_key(key, readonly),
            None => RefreshController::initialize(RefreshInterval::default(), readonly),
        }
    }
}

pub(crate) fn handle_watch_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let overrides = WatchOverrides::from_matches(matches);
    let config = load_config_with_warning();
    let mut controller = overrides.build_controller(&config);

    info!(
        event = "cli.watch_started",
        interval = %controller.selected(),
        readonly = controller.is_readonly(),
        max_ticks = ?overrides.max_ticks
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(run_watch(
        &mut controller,
        BufReader::new(tokio::io::stdin()),
        overrides.max_ticks,
    ));
    // A stdin read may still be pending after the tick budget is reached.
    runtime.shutdown_background();
    let ticks = result?;

    info!(event = "cli.watch_completed", ticks = ticks);
    Ok(())
}

/// Drive `controller` with interval names read from `input`, one per line.
///
/// Lines that are not valid UTF-8 are decoded lossily and end up as unknown
/// intervals. Returns the number of refresh ticks printed.
async fn run_watch<R>(
    controller: &mut RefreshController,
    mut input: R,
    max_ticks: Option<u64>,
) -> Result<u64, Box<dyn std::error::Error>>
where
    R: AsyncBufRead + Unpin,
{
    let (tx, mut rx) = mpsc::unbounded_channel();
    let timer = Rc::new(RefCell::new(RefreshTimer::new(tx)));

    let printer = controller.subscribe(|interval| {
        println!("interval {} {}", interval, format_duration(interval));
    });
    let host = Rc::clone(&timer);
    let rearm = controller.subscribe(move |interval| host.borrow_mut().rearm(interval));
    controller.mount();

    let mut line = Vec::new();
    let mut input_open = true;
    let mut count = 0u64;
    let mut failure = None;

    loop {
        tokio::select! {
            Some(tick) = rx.recv() => {
                if tick.generation != timer.borrow().generation() {
                    continue;
                }
                count += 1;
                println!("tick {} {}", count, tick.interval);
                info!(
                    event = "cli.watch.tick",
                    count = count,
                    interval = %tick.interval
                );
                if max_ticks.is_some_and(|max| count >= max) {
                    break;
                }
            }
            read = input.read_until(b'\n', &mut line), if input_open => {
                // Partial reads from a cancelled branch stay in `line`.
                let read = match read {
                    Ok(read) => read,
                    Err(e) => {
                        failure = Some(e);
                        break;
                    }
                };
                if !line.is_empty() {
                    select_line(controller, &line);
                    line.clear();
                }
                if read == 0 {
                    input_open = false;
                    // Keep ticking only when a tick budget can still be reached.
                    if max_ticks.is_none() || !timer.borrow().is_active() {
                        break;
                    }
                }
            }
        }
    }

    controller.unsubscribe(printer);
    controller.unsubscribe(rearm);
    timer.borrow_mut().cancel();

    match failure {
        Some(e) => Err(e.into()),
        None => Ok(count),
    }
}

fn select_line(controller: &mut RefreshController, line: &[u8]) {
    let text = String::from_utf8_lossy(line);
    let key = text.trim();
    if !key.is_empty() {
        report_outcome(key, controller.select_key(key));
    }
}

fn report_outcome(key: &str, outcome: SelectOutcome) {
    match outcome {
        // Already announced by the printing subscriber.
        SelectOutcome::Changed { .. } => {}
        SelectOutcome::Unchanged => println!("unchanged {}", key),
        SelectOutcome::Readonly => {
            warn!(event = "cli.watch.select_rejected", reason = "readonly", requested = key);
            println!("ignored: read-only");
        }
        SelectOutcome::Unknown => {
            warn!(
                event = "cli.watch.select_rejected",
                reason = "unknown_interval",
                requested = key
            );
            println!("ignored: unknown interval '{}'", key);
        }
    }
}
