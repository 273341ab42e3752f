//! User-input validation for timer configuration.
//!
//! Text fields combine as `h*3_600_000 + m*60_000 + s*1_000`. Empty fields
//! count as zero; anything else must parse as a non-negative integer. The
//! combined total must be strictly positive, and a warning boundary must sit
//! strictly below it.

use crate::error::ValidationError;

fn parse_field(field: &'static str, value: &str) -> Result<u64, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<u64>()
        .map_err(|_| ValidationError::InvalidValue {
            field: field.into(),
            message: format!("'{trimmed}' is not a non-negative integer"),
        })
}

/// Combine minutes/seconds text fields into a total duration in ms.
///
/// # Errors
/// `InvalidValue` on unparseable fields; `ZeroDuration` when the total is 0.
pub fn duration_from_fields(minutes: &str, seconds: &str) -> Result<u64, ValidationError> {
    duration_from_hms_fields("", minutes, seconds)
}

/// As [`duration_from_fields`], with an hours field.
pub fn duration_from_hms_fields(
    hours: &str,
    minutes: &str,
    seconds: &str,
) -> Result<u64, ValidationError> {
    let h = parse_field("hours", hours)?;
    let m = parse_field("minutes", minutes)?;
    let s = parse_field("seconds", seconds)?;
    let total_ms = h
        .saturating_mul(3_600_000)
        .saturating_add(m.saturating_mul(60_000))
        .saturating_add(s.saturating_mul(1_000));
    if total_ms == 0 {
        return Err(ValidationError::ZeroDuration);
    }
    Ok(total_ms)
}

/// Check a warning boundary against the total duration.
///
/// # Errors
/// `InvalidValue` unless `warning_ms < total_ms`.
pub fn check_warning_below_total(warning_ms: u64, total_ms: u64) -> Result<(), ValidationError> {
    if warning_ms >= total_ms {
        return Err(ValidationError::InvalidValue {
            field: "warning".into(),
            message: format!(
                "warning time ({warning_ms}ms) must be less than total time ({total_ms}ms)"
            ),
        });
    }
    Ok(())
}
