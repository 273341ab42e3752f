//! Digital-clock formatting of millisecond values.

/// `HH:MM:SS`, zero-padded.
pub fn digital(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// `HH:MM:SS.cc` with two centisecond digits, for stopwatch displays.
pub fn digital_with_centis(ms: u64) -> String {
    let centis = (ms % 1_000) / 10;
    format!("{}.{centis:02}", digital(ms))
}
