use clap::ValueEnum;
use serde::Serialize;
use tickdeck_core::games::chance::{flip_coin, play_rps, roll_die, shake_eight_ball, RpsHand};

use super::print_json;

#[derive(Clone, Copy, ValueEnum)]
pub enum HandArg {
    Rock,
    Paper,
    Scissors,
}

impl From<HandArg> for RpsHand {
    fn from(hand: HandArg) -> Self {
        match hand {
            HandArg::Rock => RpsHand::Rock,
            HandArg::Paper => RpsHand::Paper,
            HandArg::Scissors => RpsHand::Scissors,
        }
    }
}

#[derive(Serialize)]
struct FlipResult {
    side: tickdeck_core::games::CoinSide,
}

#[derive(Serialize)]
struct RollResult {
    face: u8,
}

#[derive(Serialize)]
struct EightBallResult {
    answer: &'static str,
}

pub fn run_flip() -> Result<(), Box<dyn std::error::Error>> {
    print_json(&FlipResult {
        side: flip_coin(&mut rand::thread_rng()),
    })
}

pub fn run_roll() -> Result<(), Box<dyn std::error::Error>> {
    print_json(&RollResult {
        face: roll_die(&mut rand::thread_rng()),
    })
}

pub fn run_eightball() -> Result<(), Box<dyn std::error::Error>> {
    print_json(&EightBallResult {
        answer: shake_eight_ball(&mut rand::thread_rng()),
    })
}

pub fn run_rps(hand: HandArg) -> Result<(), Box<dyn std::error::Error>> {
    let outcome = play_rps(&mut rand::thread_rng(), hand.into());
    print_json(&outcome)
}
