//! Timer engine events.
//!
//! Every phase transition and every frame of a run produces an [`Event`].
//! Renderers read `Tick`, notifiers react to `ThresholdCrossed` and
//! `Finished`; delivery order within one frame is tick, then crossings in
//! the order the boundaries were passed, then at most one `Finished`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{Phase, TimerMode};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    Started {
        mode: TimerMode,
        duration_ms: u64,
        at: DateTime<Utc>,
    },
    /// Per-frame snapshot of the derived run time.
    Tick {
        remaining_ms: u64,
        elapsed_ms: u64,
        phase: Phase,
        at: DateTime<Utc>,
    },
    /// Remaining time passed a configured boundary. Fired exactly once per
    /// boundary per run.
    ThresholdCrossed {
        label: String,
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    Paused {
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    Resumed {
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    Finished {
        at: DateTime<Utc>,
    },
    Reset {
        at: DateTime<Utc>,
    },
}

impl Event {
    /// The label carried by a threshold crossing, if this is one.
    pub fn threshold_label(&self) -> Option<&str> {
        match self {
            Event::ThresholdCrossed { label, .. } => Some(label),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Event::Finished { .. })
    }
}
