//! # Tickdeck Core Library
//!
//! Core logic for Tickdeck's deck of countdown and chance widgets. The CLI
//! binary is a thin layer over this crate; anything visual (theming, audio,
//! layout) lives outside it.
//!
//! ## Architecture
//!
//! - **Deadline Timer Engine**: a wall-clock-based state machine. The host
//!   supplies the current instant to every command and calls `tick()` once
//!   per frame; remaining time is always re-derived from an absolute
//!   deadline, so pause/resume and frame jitter never accumulate drift.
//! - **Random draws**: uniform single draws, shuffles, and round-robin
//!   partitioning shared by the chance widgets.
//! - **Widgets**: stopwatch with laps, chance games, name picker, group
//!   generator, race simulation.
//! - **Storage**: TOML-based configuration.
//!
//! ## Key Components
//!
//! - [`DeadlineTimer`]: core timer state machine
//! - [`TimerConfig`]: validated run configuration with threshold bands
//! - [`Event`]: serialized engine output consumed by renderers/notifiers
//! - [`Config`]: application configuration management

pub mod clock;
pub mod error;
pub mod events;
pub mod format;
pub mod games;
pub mod input;
pub mod notify;
pub mod random;
pub mod storage;
pub mod timer;

pub use error::{CoreError, Result, StateError, ValidationError};
pub use events::Event;
pub use notify::{Cue, Notifier, NullNotifier};
pub use storage::Config;
pub use timer::{DeadlineTimer, Lap, Phase, Stopwatch, Threshold, TimerConfig, TimerMode};
