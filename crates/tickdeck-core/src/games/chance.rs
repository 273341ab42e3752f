//! Chance games: coin flip, dice roll, Magic 8-Ball, rock-paper-scissors.
//!
//! Each game is a single uniform draw resolved at the instant the host's
//! spin/flip animation ends; the animation itself is presentation and lives
//! outside this crate.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::random::draw_uniform;

/// The Magic 8-Ball's fixed answer table.
pub const MAGIC_8_ANSWERS: [&str; 16] = [
    "IT IS CERTAIN",
    "WITHOUT A DOUBT",
    "YES DEFINITELY",
    "YOU MAY RELY ON IT",
    "AS I SEE IT YES",
    "MOST LIKELY",
    "OUTLOOK GOOD",
    "YES",
    "REPLY HAZY TRY AGAIN",
    "ASK AGAIN LATER",
    "BETTER NOT TELL YOU",
    "CANNOT PREDICT NOW",
    "DON'T COUNT ON IT",
    "MY REPLY IS NO",
    "MY SOURCES SAY NO",
    "OUTLOOK NOT SO GOOD",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinSide {
    Heads,
    Tails,
}

pub fn flip_coin<R: Rng + ?Sized>(rng: &mut R) -> CoinSide {
    if rng.gen_bool(0.5) {
        CoinSide::Heads
    } else {
        CoinSide::Tails
    }
}

/// Roll a six-sided die: uniform over 1..=6.
pub fn roll_die<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(1..=6)
}

pub fn shake_eight_ball<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    // The table is non-empty, so the draw cannot fail.
    let idx = draw_uniform(rng, MAGIC_8_ANSWERS.len()).unwrap_or(0);
    MAGIC_8_ANSWERS[idx]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RpsHand {
    Rock,
    Paper,
    Scissors,
}

impl RpsHand {
    /// The hand this one defeats.
    pub fn beats(self) -> RpsHand {
        match self {
            RpsHand::Rock => RpsHand::Scissors,
            RpsHand::Paper => RpsHand::Rock,
            RpsHand::Scissors => RpsHand::Paper,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RpsResult {
    Win,
    Lose,
    Draw,
}

/// Outcome of one round against a uniformly random CPU hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpsOutcome {
    pub user: RpsHand,
    pub cpu: RpsHand,
    pub result: RpsResult,
}

pub fn play_rps<R: Rng + ?Sized>(rng: &mut R, user: RpsHand) -> RpsOutcome {
    const HANDS: [RpsHand; 3] = [RpsHand::Rock, RpsHand::Paper, RpsHand::Scissors];
    let cpu = HANDS[rng.gen_range(0..HANDS.len())];
    let result = if user == cpu {
        RpsResult::Draw
    } else if user.beats() == cpu {
        RpsResult::Win
    } else {
        RpsResult::Lose
    };
    RpsOutcome { user, cpu, result }
}
