use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;

#[derive(Parser)]
#[command(name = "tickdeck", version, about = "Tickdeck CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Draw a random number
    Draw(commands::draw::DrawArgs),
    /// Pick a random winner from a name list
    Pick(commands::pick::PickArgs),
    /// Deal names into random groups
    Groups(commands::groups::GroupsArgs),
    /// Flip a coin
    Flip,
    /// Roll a six-sided die
    Roll,
    /// Shake the Magic 8-Ball
    Eightball,
    /// Play rock-paper-scissors against the machine
    Rps {
        #[arg(value_enum)]
        hand: commands::chance::HandArg,
    },
    /// Run a race simulation
    Race(commands::race::RaceArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Draw(args) => commands::draw::run(args),
        Commands::Pick(args) => commands::pick::run(args),
        Commands::Groups(args) => commands::groups::run(args),
        Commands::Flip => commands::chance::run_flip(),
        Commands::Roll => commands::chance::run_roll(),
        Commands::Eightball => commands::chance::run_eightball(),
        Commands::Rps { hand } => commands::chance::run_rps(hand),
        Commands::Race(args) => commands::race::run(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "tickdeck", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
