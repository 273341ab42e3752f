use clap::Args;
use serde::Serialize;
use tickdeck_core::games::picker::pick_winner;

use super::print_json;

#[derive(Args)]
pub struct PickArgs {
    /// Candidate names
    #[arg(required = true)]
    pub names: Vec<String>,
}

#[derive(Serialize)]
struct PickResult<'a> {
    winner: &'a str,
    candidates: usize,
}

pub fn run(args: PickArgs) -> Result<(), Box<dyn std::error::Error>> {
    let winner = pick_winner(&mut rand::thread_rng(), &args.names)?;
    print_json(&PickResult {
        winner,
        candidates: args.names.len(),
    })
}
