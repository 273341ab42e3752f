//! Notification cues.
//!
//! The engine never constructs audio or visual resources. It emits events;
//! hosts map those to symbolic [`Cue`]s and hand them to a [`Notifier`]
//! implementation (terminal bell, audio backend, nothing at all).

use serde::{Deserialize, Serialize};

use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cue {
    Tick,
    Warning,
    Finished,
    Win,
    Loss,
}

pub trait Notifier {
    fn notify(&mut self, cue: Cue);
}

/// Swallows every cue. The default collaborator for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _cue: Cue) {}
}

/// Map a timer event to the cue a host should raise for it, if any.
pub fn cue_for(event: &Event) -> Option<Cue> {
    match event {
        Event::ThresholdCrossed { .. } => Some(Cue::Warning),
        Event::Finished { .. } => Some(Cue::Finished),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::instant_at;

    #[test]
    fn crossings_and_finish_raise_cues() {
        let at = instant_at(0);
        let crossed = Event::ThresholdCrossed {
            label: "warning".into(),
            remaining_ms: 10_000,
            at,
        };
        assert_eq!(cue_for(&crossed), Some(Cue::Warning));
        assert_eq!(cue_for(&Event::Finished { at }), Some(Cue::Finished));
        assert_eq!(cue_for(&Event::Reset { at }), None);
    }
}
