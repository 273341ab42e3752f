//! Lap stopwatch.
//!
//! An unbounded count-up with lap splits. Unlike [`DeadlineTimer`] there is
//! no terminal phase - a stopwatch runs until reset. It shares the same
//! drift-free model: elapsed time is derived from an absolute start instant,
//! frozen into `accumulated_ms` across pauses.
//!
//! [`DeadlineTimer`]: super::DeadlineTimer

use serde::{Deserialize, Serialize};

use super::engine::Phase;
use crate::error::StateError;

/// One recorded lap: cumulative time and the split since the previous lap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lap {
    pub number: u32,
    pub total_ms: u64,
    pub split_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stopwatch {
    phase: Phase,
    /// Instant the current running stretch began, shifted back by any
    /// previously accumulated time. `None` unless running.
    start_epoch_ms: Option<u64>,
    accumulated_ms: u64,
    laps: Vec<Lap>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            start_epoch_ms: None,
            accumulated_ms: 0,
            laps: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn laps(&self) -> &[Lap] {
        &self.laps
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        match self.start_epoch_ms {
            Some(start) => now_ms.saturating_sub(start),
            None => self.accumulated_ms,
        }
    }

    pub fn start(&mut self, now_ms: u64) -> Result<(), StateError> {
        if self.phase != Phase::Idle {
            return Err(StateError::invalid("start", self.phase));
        }
        self.phase = Phase::Running;
        self.start_epoch_ms = Some(now_ms);
        Ok(())
    }

    pub fn pause(&mut self, now_ms: u64) -> Result<(), StateError> {
        if self.phase != Phase::Running {
            return Err(StateError::invalid("pause", self.phase));
        }
        self.accumulated_ms = self.elapsed_ms(now_ms);
        self.start_epoch_ms = None;
        self.phase = Phase::Paused;
        Ok(())
    }

    pub fn resume(&mut self, now_ms: u64) -> Result<(), StateError> {
        if self.phase != Phase::Paused {
            return Err(StateError::invalid("resume", self.phase));
        }
        self.start_epoch_ms = Some(now_ms - self.accumulated_ms);
        self.phase = Phase::Running;
        Ok(())
    }

    /// Record a lap at the current elapsed time. Valid only while running.
    pub fn lap(&mut self, now_ms: u64) -> Result<&Lap, StateError> {
        if self.phase != Phase::Running {
            return Err(StateError::invalid("lap", self.phase));
        }
        let total_ms = self.elapsed_ms(now_ms);
        let split_ms = total_ms - self.laps.last().map(|l| l.total_ms).unwrap_or(0);
        self.laps.push(Lap {
            number: self.laps.len() as u32 + 1,
            total_ms,
            split_ms,
        });
        Ok(self.laps.last().unwrap())
    }

    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.start_epoch_ms = None;
        self.accumulated_ms = 0;
        self.laps.clear();
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_tracks_wall_clock() {
        let mut sw = Stopwatch::new();
        assert_eq!(sw.elapsed_ms(0), 0);
        sw.start(1_000).unwrap();
        assert_eq!(sw.elapsed_ms(4_500), 3_500);
    }

    #[test]
    fn pause_freezes_and_resume_costs_nothing() {
        let mut sw = Stopwatch::new();
        sw.start(0).unwrap();
        sw.pause(10_000).unwrap();
        assert_eq!(sw.elapsed_ms(99_000), 10_000);
        sw.resume(100_000).unwrap();
        assert_eq!(sw.elapsed_ms(105_000), 15_000);
    }

    #[test]
    fn lap_splits_are_deltas_and_sum_to_total() {
        let mut sw = Stopwatch::new();
        sw.start(0).unwrap();
        sw.lap(3_000).unwrap();
        sw.lap(7_500).unwrap();
        let lap = sw.lap(9_000).unwrap().clone();
        assert_eq!(lap.number, 3);
        assert_eq!(lap.split_ms, 1_500);

        let split_sum: u64 = sw.laps().iter().map(|l| l.split_ms).sum();
        assert_eq!(split_sum, sw.laps().last().unwrap().total_ms);
    }

    #[test]
    fn lap_requires_a_running_watch() {
        let mut sw = Stopwatch::new();
        assert!(sw.lap(0).is_err());
        sw.start(0).unwrap();
        sw.pause(1_000).unwrap();
        assert!(sw.lap(2_000).is_err());
    }

    #[test]
    fn reset_discards_laps_and_elapsed() {
        let mut sw = Stopwatch::new();
        sw.start(0).unwrap();
        sw.lap(2_000).unwrap();
        sw.reset();
        assert_eq!(sw.phase(), Phase::Idle);
        assert_eq!(sw.elapsed_ms(5_000), 0);
        assert!(sw.laps().is_empty());
    }
}
