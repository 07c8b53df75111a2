use chrono::NaiveTime;

use crate::core::types::TimeMode;

/// Splits a 24-hour value into the 12-hour dial hour (1-12) and its mode.
///
/// Hours 12-23 are PM. Midnight and noon both show as 12 on the dial.
#[must_use]
pub fn split_hour24(hour24: u32) -> (u32, TimeMode) {
    let mode = if hour24 >= 12 {
        TimeMode::Pm
    } else {
        TimeMode::Am
    };
    let hour12 = match hour24 % 12 {
        0 => 12,
        hour => hour,
    };
    (hour12, mode)
}

/// 24-hour value of a dial hour: `(hour12 mod 12) + 12` in PM.
#[must_use]
pub fn to_hour24(hour12: u32, mode: TimeMode) -> u32 {
    let base = hour12 % 12;
    match mode {
        TimeMode::Am => base,
        TimeMode::Pm => base + 12,
    }
}

/// Composes the dial state into a time of day. `None` for out-of-range parts.
#[must_use]
pub fn compose_time(hour12: u32, minute: u32, second: u32, mode: TimeMode) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(to_hour24(hour12, mode), minute, second)
}
