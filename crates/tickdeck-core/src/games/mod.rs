pub mod chance;
pub mod groups;
pub mod picker;
pub mod race;

pub use chance::{CoinSide, RpsHand, RpsOutcome, RpsResult};
pub use race::{Race, Racer};
