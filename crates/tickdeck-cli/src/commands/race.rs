use clap::Args;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use serde::Serialize;
use tickdeck_core::games::Race;
use tickdeck_core::Phase;

use super::print_json;

#[derive(Args)]
pub struct RaceArgs {
    /// Comma-separated racer names (defaults to two racers)
    #[arg(long, value_delimiter = ',')]
    pub racers: Vec<String>,
    /// Seed for a reproducible race
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Serialize)]
struct Standing {
    rank: u32,
    name: String,
}

#[derive(Serialize)]
struct RaceResult {
    winner: String,
    standings: Vec<Standing>,
    ticks: u64,
}

pub fn run(args: RaceArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut race = if args.racers.is_empty() {
        Race::new()
    } else {
        Race::with_roster(args.racers)
    };

    let result = match args.seed {
        Some(seed) => simulate(&mut race, &mut Pcg64Mcg::seed_from_u64(seed))?,
        None => simulate(&mut race, &mut rand::thread_rng())?,
    };
    print_json(&result)
}

fn simulate<R: Rng>(race: &mut Race, rng: &mut R) -> Result<RaceResult, Box<dyn std::error::Error>> {
    race.start(rng)?;
    let mut ticks = 0u64;
    while race.phase() == Phase::Running {
        race.tick(rng)?;
        ticks += 1;
    }

    let mut standings: Vec<Standing> = race
        .racers()
        .iter()
        .map(|r| Standing {
            rank: r.rank.unwrap_or(0),
            name: r.name.clone(),
        })
        .collect();
    standings.sort_by_key(|s| s.rank);

    Ok(RaceResult {
        winner: standings[0].name.clone(),
        standings,
        ticks,
    })
}
