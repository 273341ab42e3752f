use clap::Args;
use serde::Serialize;
use tickdeck_core::games::groups::generate_groups;

use super::print_json;

#[derive(Args)]
pub struct GroupsArgs {
    /// Number of groups to deal into
    #[arg(long, default_value_t = 2)]
    pub count: usize,
    /// Names to distribute
    #[arg(required = true)]
    pub names: Vec<String>,
}

#[derive(Serialize)]
struct GroupsResult {
    count: usize,
    groups: Vec<Vec<String>>,
}

pub fn run(args: GroupsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let groups = generate_groups(&mut rand::thread_rng(), args.names, args.count)?;
    print_json(&GroupsResult {
        count: groups.len(),
        groups,
    })
}
