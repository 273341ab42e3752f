//! Wall-clock access in epoch milliseconds.
//!
//! Engine arithmetic runs on plain `u64` epoch-ms instants supplied by the
//! caller, so tests can drive runs with synthetic clocks. Hosts use
//! [`now_ms`] to read the real clock once per frame.

use chrono::{DateTime, Utc};

/// Current wall-clock time as milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Convert an epoch-ms instant into a chrono timestamp for event payloads.
///
/// Instants beyond chrono's representable range collapse to the epoch, which
/// cannot occur for real wall-clock input.
pub fn instant_at(epoch_ms: u64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(epoch_ms as i64).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_at_round_trips_millis() {
        let at = instant_at(1_700_000_000_123);
        assert_eq!(at.timestamp_millis(), 1_700_000_000_123);
    }

    #[test]
    fn now_ms_is_nonzero() {
        assert!(now_ms() > 0);
    }
}
