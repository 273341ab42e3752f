//! Deadline timer engine.
//!
//! The engine is a wall-clock-based state machine. It does not use internal
//! threads or read the clock itself - the host supplies the current instant
//! (epoch milliseconds) to every command and calls `tick()` once per frame.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> (Paused <-> Running) -> Finished
//!   ^                                           |
//!   +--------------- reset (any phase) ---------+
//! ```
//!
//! Remaining time is always re-derived from the absolute deadline rather
//! than decremented per tick, so irregular frame spacing never accumulates
//! drift, and pause/resume reconstructs the deadline from the frozen
//! accumulated time.
//!
//! ## Usage
//!
//! ```ignore
//! let mut timer = DeadlineTimer::new(TimerConfig::count_down(60_000)?);
//! timer.start(now_ms())?;
//! while timer.frame_scheduled() {
//!     for event in timer.tick(now_ms()) { /* render / notify */ }
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::{Threshold, TimerConfig, TimerMode};
use crate::clock::instant_at;
use crate::error::StateError;
use crate::events::Event;

/// Lifecycle phase of a timer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Running,
    Paused,
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Core timer engine: one configured run, driven to completion by `tick`.
///
/// Exactly one frame callback is pending per running timer; the
/// `frame_scheduled` flag is that callback's handle. Every transition out of
/// `Running` clears it synchronously, so a paused or reset run can never
/// observe a late tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeadlineTimer {
    config: TimerConfig,
    phase: Phase,
    /// Absolute instant at which remaining time reaches zero. Recomputed on
    /// every transition into `Running`; `None` outside a run.
    deadline_epoch_ms: Option<u64>,
    /// Time already counted when the run was paused.
    accumulated_ms: u64,
    /// Index of the next threshold that has not fired yet.
    next_threshold: usize,
    frame_scheduled: bool,
}

impl DeadlineTimer {
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            deadline_epoch_ms: None,
            accumulated_ms: 0,
            next_threshold: 0,
            frame_scheduled: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Whether a frame callback is pending. Hosts keep ticking while this
    /// holds and stop as soon as it clears.
    pub fn frame_scheduled(&self) -> bool {
        self.frame_scheduled
    }

    /// Time until the run ends, derived from the deadline. Never negative.
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        match self.phase {
            Phase::Idle => self.config.duration_ms(),
            Phase::Running => self
                .deadline_epoch_ms
                .map(|deadline| deadline.saturating_sub(now_ms))
                .unwrap_or(0),
            Phase::Paused => self.config.duration_ms() - self.accumulated_ms,
            Phase::Finished => 0,
        }
    }

    /// Time counted so far. The count-up display value.
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        self.config.duration_ms() - self.remaining_ms(now_ms)
    }

    /// 0.0 .. 1.0 progress toward the end of the run.
    pub fn progress(&self, now_ms: u64) -> f64 {
        1.0 - (self.remaining_ms(now_ms) as f64 / self.config.duration_ms() as f64)
    }

    /// Active threshold band for the current remaining time.
    pub fn band(&self, now_ms: u64) -> Option<&Threshold> {
        self.config.band_at(self.remaining_ms(now_ms))
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin the run. Valid only from `Idle`.
    pub fn start(&mut self, now_ms: u64) -> Result<Event, StateError> {
        if self.phase != Phase::Idle {
            return Err(StateError::invalid("start", self.phase));
        }
        self.phase = Phase::Running;
        self.deadline_epoch_ms = Some(now_ms + self.config.duration_ms());
        self.accumulated_ms = 0;
        self.next_threshold = 0;
        self.frame_scheduled = true;
        Ok(Event::Started {
            mode: self.config.mode(),
            duration_ms: self.config.duration_ms(),
            at: instant_at(now_ms),
        })
    }

    /// Freeze the run. Valid from `Running`; pausing an already-paused run
    /// is an idempotent no-op. Cancels the pending frame.
    pub fn pause(&mut self, now_ms: u64) -> Result<Option<Event>, StateError> {
        match self.phase {
            Phase::Running => {
                let remaining = self.remaining_ms(now_ms);
                self.accumulated_ms = self.config.duration_ms() - remaining;
                self.phase = Phase::Paused;
                self.deadline_epoch_ms = None;
                self.frame_scheduled = false;
                Ok(Some(Event::Paused {
                    remaining_ms: remaining,
                    at: instant_at(now_ms),
                }))
            }
            Phase::Paused => Ok(None),
            phase => Err(StateError::invalid("pause", phase)),
        }
    }

    /// Continue a paused run. The deadline is rebuilt from the frozen
    /// accumulated time, so the pause itself costs no run time.
    pub fn resume(&mut self, now_ms: u64) -> Result<Event, StateError> {
        if self.phase != Phase::Paused {
            return Err(StateError::invalid("resume", self.phase));
        }
        let remaining = self.config.duration_ms() - self.accumulated_ms;
        self.phase = Phase::Running;
        self.deadline_epoch_ms = Some(now_ms + remaining);
        self.frame_scheduled = true;
        Ok(Event::Resumed {
            remaining_ms: remaining,
            at: instant_at(now_ms),
        })
    }

    /// Per-frame update. A no-op outside `Running` - a cancelled run never
    /// produces a late tick.
    ///
    /// Emits a `Tick`, then one `ThresholdCrossed` per boundary passed since
    /// the previous frame (in crossing order), then `Finished` when the run
    /// ends. Entering `Finished` clears the pending frame.
    pub fn tick(&mut self, now_ms: u64) -> Vec<Event> {
        if self.phase != Phase::Running {
            return Vec::new();
        }
        let remaining = self.remaining_ms(now_ms);
        let at = instant_at(now_ms);

        let mut events = vec![Event::Tick {
            remaining_ms: remaining,
            elapsed_ms: self.config.duration_ms() - remaining,
            phase: self.phase,
            at,
        }];

        while let Some(threshold) = self.config.thresholds().get(self.next_threshold) {
            if remaining > threshold.remaining_ms {
                break;
            }
            let label = threshold.label.clone();
            events.push(Event::ThresholdCrossed {
                label,
                remaining_ms: remaining,
                at,
            });
            self.next_threshold += 1;
        }

        if remaining == 0 {
            self.phase = Phase::Finished;
            self.accumulated_ms = self.config.duration_ms();
            self.frame_scheduled = false;
            events.push(Event::Finished { at });
        }

        events
    }

    /// Discard the run and return to `Idle`. Reachable from every phase;
    /// cancels any pending frame.
    pub fn reset(&mut self, now_ms: u64) -> Event {
        self.phase = Phase::Idle;
        self.deadline_epoch_ms = None;
        self.accumulated_ms = 0;
        self.next_threshold = 0;
        self.frame_scheduled = false;
        Event::Reset {
            at: instant_at(now_ms),
        }
    }
}
