use clap::Args;
use serde::Serialize;
use tickdeck_core::random::draw_in_range;

use super::print_json;

#[derive(Args)]
pub struct DrawArgs {
    /// Inclusive lower bound
    #[arg(long, default_value_t = 1)]
    pub min: i64,
    /// Inclusive upper bound
    #[arg(long, default_value_t = 100)]
    pub max: i64,
}

#[derive(Serialize)]
struct DrawResult {
    min: i64,
    max: i64,
    result: i64,
}

pub fn run(args: DrawArgs) -> Result<(), Box<dyn std::error::Error>> {
    let result = draw_in_range(&mut rand::thread_rng(), args.min, args.max)?;
    print_json(&DrawResult {
        min: args.min,
        max: args.max,
        result,
    })
}
