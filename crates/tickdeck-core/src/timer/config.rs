//! Validated timer configuration.
//!
//! A [`TimerConfig`] is immutable once a run starts. Validation happens at
//! construction: a rejected config never reaches the engine, so the engine
//! itself cannot fail once a run exists.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    /// Remaining time runs from the duration down to zero.
    CountDown,
    /// Elapsed time runs from zero up to the duration cap.
    CountUp,
}

/// A remaining-time boundary that fires a one-time notification when crossed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threshold {
    pub remaining_ms: u64,
    pub label: String,
}

impl Threshold {
    pub fn new(remaining_ms: u64, label: impl Into<String>) -> Self {
        Self {
            remaining_ms,
            label: label.into(),
        }
    }
}

/// Immutable run configuration: duration, direction, and threshold bands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    duration_ms: u64,
    mode: TimerMode,
    /// Strictly decreasing by `remaining_ms`.
    thresholds: Vec<Threshold>,
}

impl TimerConfig {
    /// Validate a configuration.
    ///
    /// # Errors
    /// - `ZeroDuration` if `duration_ms == 0`
    /// - `ThresholdOutOfRange` if any threshold is not strictly below the
    ///   duration
    /// - `ThresholdsNotDescending` if thresholds are not in strictly
    ///   decreasing order of remaining time
    pub fn new(
        duration_ms: u64,
        mode: TimerMode,
        thresholds: Vec<Threshold>,
    ) -> Result<Self, ValidationError> {
        if duration_ms == 0 {
            return Err(ValidationError::ZeroDuration);
        }
        for (index, t) in thresholds.iter().enumerate() {
            if t.remaining_ms >= duration_ms {
                return Err(ValidationError::ThresholdOutOfRange {
                    label: t.label.clone(),
                    remaining_ms: t.remaining_ms,
                    duration_ms,
                });
            }
            if index > 0 && thresholds[index - 1].remaining_ms <= t.remaining_ms {
                return Err(ValidationError::ThresholdsNotDescending {
                    index,
                    label: t.label.clone(),
                });
            }
        }
        Ok(Self {
            duration_ms,
            mode,
            thresholds,
        })
    }

    /// Plain countdown with no thresholds.
    pub fn count_down(duration_ms: u64) -> Result<Self, ValidationError> {
        Self::new(duration_ms, TimerMode::CountDown, Vec::new())
    }

    /// Count-up run that finishes when elapsed time reaches `duration_ms`.
    pub fn count_up(duration_ms: u64) -> Result<Self, ValidationError> {
        Self::new(duration_ms, TimerMode::CountUp, Vec::new())
    }

    /// The presentation-timer shape: a total duration with a single warning
    /// boundary at `warning_ms` remaining.
    pub fn presentation(duration_ms: u64, warning_ms: u64) -> Result<Self, ValidationError> {
        Self::new(
            duration_ms,
            TimerMode::CountDown,
            vec![Threshold::new(warning_ms, "warning")],
        )
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn thresholds(&self) -> &[Threshold] {
        &self.thresholds
    }

    /// The active threshold band for a given remaining time: the most
    /// urgent threshold whose bound is at or above `remaining_ms`. `None`
    /// while remaining time is above every threshold.
    pub fn band_at(&self, remaining_ms: u64) -> Option<&Threshold> {
        self.thresholds
            .iter()
            .rev()
            .find(|t| t.remaining_ms >= remaining_ms)
    }
}
