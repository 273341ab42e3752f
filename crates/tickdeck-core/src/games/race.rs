//! Race simulation.
//!
//! A tick-driven state machine like the deadline timer, except each frame
//! advances every unfinished racer by a random burst instead of deriving a
//! remaining time. Speed factors are drawn once per race, so reruns with the
//! same roster produce different outcomes.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{StateError, ValidationError};
use crate::timer::Phase;

/// Track length in percent.
const FINISH_LINE: f64 = 100.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Racer {
    pub id: u32,
    pub name: String,
    /// 0.0 ..= 100.0 position along the track.
    pub progress: f64,
    /// Per-race speed variance, drawn from [0.8, 1.2).
    pub speed_factor: f64,
    /// Finish position, assigned in arrival order. `None` until finished.
    pub rank: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Race {
    racers: Vec<Racer>,
    phase: Phase,
    next_id: u32,
    finished_count: u32,
}

impl Race {
    pub fn new() -> Self {
        let mut race = Self {
            racers: Vec::new(),
            phase: Phase::Idle,
            next_id: 1,
            finished_count: 0,
        };
        race.add_racer("RACER 1");
        race.add_racer("RACER 2");
        race
    }

    pub fn with_roster<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut race = Self {
            racers: Vec::new(),
            phase: Phase::Idle,
            next_id: 1,
            finished_count: 0,
        };
        for name in names {
            race.add_racer(name);
        }
        race
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn racers(&self) -> &[Racer] {
        &self.racers
    }

    pub fn winner(&self) -> Option<&Racer> {
        self.racers.iter().find(|r| r.rank == Some(1))
    }

    // ── Roster editing (Idle only) ───────────────────────────────────

    pub fn add_racer(&mut self, name: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.racers.push(Racer {
            id,
            name: name.into(),
            progress: 0.0,
            speed_factor: 1.0,
            rank: None,
        });
        id
    }

    pub fn remove_racer(&mut self, id: u32) {
        self.racers.retain(|r| r.id != id);
    }

    pub fn rename_racer(&mut self, id: u32, name: impl Into<String>) {
        if let Some(racer) = self.racers.iter_mut().find(|r| r.id == id) {
            racer.name = name.into();
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin racing: reset positions and draw fresh speed factors.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), ValidationError> {
        if self.racers.len() < 2 {
            return Err(ValidationError::EmptyCollection(
                "at least 2 racers are required".into(),
            ));
        }
        for racer in &mut self.racers {
            racer.progress = 0.0;
            racer.rank = None;
            racer.speed_factor = 0.8 + rng.gen::<f64>() * 0.4;
        }
        self.finished_count = 0;
        self.phase = Phase::Running;
        Ok(())
    }

    /// One frame: every unfinished racer lurches forward by a random burst.
    /// The race finishes when the last racer crosses the line.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), StateError> {
        if self.phase != Phase::Running {
            return Err(StateError::invalid("tick", self.phase));
        }
        let mut all_finished = true;
        for racer in &mut self.racers {
            if racer.progress >= FINISH_LINE {
                continue;
            }
            let burst = (rng.gen::<f64>() * 0.5 + 0.1) * racer.speed_factor;
            racer.progress = (racer.progress + burst).min(FINISH_LINE);
            if racer.progress >= FINISH_LINE {
                self.finished_count += 1;
                racer.rank = Some(self.finished_count);
            } else {
                all_finished = false;
            }
        }
        if all_finished {
            self.phase = Phase::Finished;
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.finished_count = 0;
        for racer in &mut self.racers {
            racer.progress = 0.0;
            racer.rank = None;
        }
    }
}

impl Default for Race {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn race_terminates_with_unique_ranks() {
        let mut rng = Pcg64Mcg::seed_from_u64(21);
        let mut race = Race::with_roster(["A", "B", "C", "D"]);
        race.start(&mut rng).unwrap();

        // Minimum advance per tick is 0.1 * 0.8 percent, so the race is
        // bounded well below this.
        let mut ticks = 0;
        while race.phase() == Phase::Running {
            race.tick(&mut rng).unwrap();
            ticks += 1;
            assert!(ticks < 5_000, "race did not terminate");
        }

        let mut ranks: Vec<u32> = race.racers().iter().map(|r| r.rank.unwrap()).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
        assert_eq!(race.winner().unwrap().rank, Some(1));
    }

    #[test]
    fn progress_never_passes_the_finish_line() {
        let mut rng = Pcg64Mcg::seed_from_u64(22);
        let mut race = Race::new();
        race.start(&mut rng).unwrap();
        while race.phase() == Phase::Running {
            race.tick(&mut rng).unwrap();
            for racer in race.racers() {
                assert!(racer.progress <= FINISH_LINE);
            }
        }
    }

    #[test]
    fn roster_editing() {
        let mut race = Race::new();
        let id = race.add_racer("NEW");
        assert_eq!(race.racers().len(), 3);
        race.rename_racer(id, "RENAMED");
        assert_eq!(race.racers().last().unwrap().name, "RENAMED");
        race.remove_racer(id);
        assert_eq!(race.racers().len(), 2);
    }

    #[test]
    fn a_race_needs_two_racers() {
        let mut rng = Pcg64Mcg::seed_from_u64(23);
        let mut race = Race::with_roster(["ALONE"]);
        assert!(race.start(&mut rng).is_err());
    }

    #[test]
    fn tick_outside_a_race_is_a_state_error() {
        let mut rng = Pcg64Mcg::seed_from_u64(24);
        let mut race = Race::new();
        assert!(race.tick(&mut rng).is_err());
    }

    #[test]
    fn reset_clears_positions_and_ranks() {
        let mut rng = Pcg64Mcg::seed_from_u64(25);
        let mut race = Race::new();
        race.start(&mut rng).unwrap();
        while race.phase() == Phase::Running {
            race.tick(&mut rng).unwrap();
        }
        race.reset();
        assert_eq!(race.phase(), Phase::Idle);
        assert!(race.racers().iter().all(|r| r.progress == 0.0 && r.rank.is_none()));
    }
}
