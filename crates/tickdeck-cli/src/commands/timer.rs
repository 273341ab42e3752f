//! The `timer run` frame loop: the host-side scheduler the engine expects.
//!
//! Each frame sleeps for the configured interval, reads the wall clock once,
//! and hands the instant to `tick()`. Every event comes out as one JSON
//! line; warning/finished events additionally ring the terminal bell when
//! notifications are enabled. The loop runs only while the engine reports a
//! scheduled frame, so a finished or reset run stops immediately.

use std::thread;
use std::time::Duration;

use clap::Subcommand;
use tickdeck_core::clock::now_ms;
use tickdeck_core::input::{check_warning_below_total, duration_from_hms_fields};
use tickdeck_core::notify::{cue_for, Cue, Notifier};
use tickdeck_core::{Config, DeadlineTimer, Threshold, TimerConfig, TimerMode};

use super::print_json;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run a timer to completion, printing one JSON event per line
    Run {
        /// Hours field of the duration
        #[arg(long, default_value = "")]
        hours: String,
        /// Minutes field of the duration
        #[arg(long, default_value = "")]
        minutes: String,
        /// Seconds field of the duration
        #[arg(long, default_value = "")]
        seconds: String,
        /// Minutes field of the warning boundary (remaining time)
        #[arg(long, default_value = "")]
        warn_minutes: String,
        /// Seconds field of the warning boundary (remaining time)
        #[arg(long, default_value = "")]
        warn_seconds: String,
        /// Count up to the duration instead of down
        #[arg(long)]
        up: bool,
        /// Frame interval in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,
    },
}

/// Rings the terminal bell on urgent cues.
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, cue: Cue) {
        match cue {
            Cue::Warning | Cue::Finished => eprint!("\x07"),
            _ => {}
        }
    }
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimerAction::Run {
            hours,
            minutes,
            seconds,
            warn_minutes,
            warn_seconds,
            up,
            interval_ms,
        } => {
            let app_config = Config::load()?;

            let no_duration_given =
                hours.trim().is_empty() && minutes.trim().is_empty() && seconds.trim().is_empty();
            let duration_ms = if no_duration_given {
                app_config.defaults.duration_min * 60_000
            } else {
                duration_from_hms_fields(&hours, &minutes, &seconds)?
            };

            let mut thresholds = Vec::new();
            if !(warn_minutes.trim().is_empty() && warn_seconds.trim().is_empty()) {
                let warning_ms = duration_from_hms_fields("", &warn_minutes, &warn_seconds)?;
                check_warning_below_total(warning_ms, duration_ms)?;
                thresholds.push(Threshold::new(warning_ms, "warning"));
            }

            let mode = if up {
                TimerMode::CountUp
            } else {
                TimerMode::CountDown
            };
            let config = TimerConfig::new(duration_ms, mode, thresholds)?;

            let interval = interval_ms.unwrap_or(app_config.defaults.tick_interval_ms).max(1);
            let bell = app_config.notifications.enabled && app_config.notifications.bell;

            run_loop(DeadlineTimer::new(config), interval, bell)
        }
    }
}

fn run_loop(
    mut timer: DeadlineTimer,
    interval_ms: u64,
    bell: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut notifier = TerminalNotifier;

    let started = timer.start(now_ms())?;
    print_json(&started)?;

    while timer.frame_scheduled() {
        thread::sleep(Duration::from_millis(interval_ms));
        for event in timer.tick(now_ms()) {
            print_json(&event)?;
            if bell {
                if let Some(cue) = cue_for(&event) {
                    notifier.notify(cue);
                }
            }
        }
    }
    Ok(())
}
