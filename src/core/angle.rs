//! Clock-face angle math.
//!
//! All angles are degrees measured clockwise from 12 o'clock and normalized
//! into `[0, 360)`. Twelve hours span the full circle (30° per hour); sixty
//! minutes or seconds span it as well (6° per unit).

pub const FULL_TURN_DEG: f64 = 360.0;
pub const DEGREES_PER_HOUR: f64 = 30.0;
pub const DEGREES_PER_MINUTE_OR_SECOND: f64 = 6.0;

/// Normalizes any finite angle into `[0, 360)`. Non-finite input maps to 0°.
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let normalized = degrees.rem_euclid(FULL_TURN_DEG);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if normalized >= FULL_TURN_DEG {
        0.0
    } else {
        normalized
    }
}

/// Angle of the hour hand for `hour` (1-12), crept forward by the minute hand.
///
/// The offset is `30 / (360 / minute_angle)`, i.e. `minute_angle / 12`, so a
/// 0° minute hand leaves the hour hand exactly on `hour * 30`.
#[must_use]
pub fn hour_to_angle(hour: u32, minute_angle: f64) -> f64 {
    let minute_offset = normalize_degrees(minute_angle) * DEGREES_PER_HOUR / FULL_TURN_DEG;
    normalize_degrees(f64::from(hour) * DEGREES_PER_HOUR + minute_offset)
}

#[must_use]
pub fn minute_or_second_to_angle(unit: u32) -> f64 {
    normalize_degrees(f64::from(unit) * DEGREES_PER_MINUTE_OR_SECOND)
}

/// Nearest hour (1-12) for a hand angle. 0° and anything rounding to it is 12.
#[must_use]
pub fn angle_to_hour(angle: f64) -> u32 {
    let angle = normalize_degrees(angle);
    if angle == 0.0 {
        return 12;
    }
    match (angle / DEGREES_PER_HOUR).round() as u32 {
        0 => 12,
        hour => hour.min(12),
    }
}

/// Nearest minute/second (0-59) for a hand angle. 0° is 0; 60 wraps to 0.
#[must_use]
pub fn angle_to_minute_or_second(angle: f64) -> u32 {
    let angle = normalize_degrees(angle);
    if angle == 0.0 {
        return 0;
    }
    ((angle / DEGREES_PER_MINUTE_OR_SECOND).round() as u32) % 60
}

/// Clockwise angle of `(x, y)` around `(center_x, center_y)` in screen
/// coordinates (y grows downward).
#[must_use]
pub fn pointer_to_degrees(x: f64, y: f64, center_x: f64, center_y: f64) -> f64 {
    let mut degrees = -(center_x - x).atan2(center_y - y).to_degrees();
    if degrees < 0.0 {
        degrees += FULL_TURN_DEG;
    }
    normalize_degrees(degrees)
}
