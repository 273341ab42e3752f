mod config;
mod engine;
mod stopwatch;

pub use config::{Threshold, TimerConfig, TimerMode};
pub use engine::{DeadlineTimer, Phase};
pub use stopwatch::{Lap, Stopwatch};
