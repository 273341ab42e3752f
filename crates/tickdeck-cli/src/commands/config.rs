use clap::Subcommand;
use tickdeck_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the active configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Update configuration values
    Set {
        /// Default run length in minutes
        #[arg(long)]
        duration_min: Option<u64>,
        /// Default warning boundary in minutes of remaining time
        #[arg(long)]
        warning_min: Option<u64>,
        /// Frame interval in milliseconds
        #[arg(long)]
        tick_interval_ms: Option<u64>,
        /// Ring the terminal bell on warning/finished cues
        #[arg(long)]
        bell: Option<bool>,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
            Ok(())
        }
        ConfigAction::Set {
            duration_min,
            warning_min,
            tick_interval_ms,
            bell,
        } => {
            let mut config = Config::load()?;
            if let Some(v) = duration_min {
                config.defaults.duration_min = v;
            }
            if let Some(v) = warning_min {
                config.defaults.warning_min = v;
            }
            if let Some(v) = tick_interval_ms {
                config.defaults.tick_interval_ms = v;
            }
            if let Some(v) = bell {
                config.notifications.bell = v;
            }
            config.save()?;
            println!("configuration saved");
            Ok(())
        }
    }
}
