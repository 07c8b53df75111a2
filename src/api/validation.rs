use crate::core::BoundingRect;
use crate::error::{PickerError, PickerResult};

use super::{DatePickerConfig, TimePickerConfig};

pub(super) fn validate_time_picker_config(
    config: TimePickerConfig,
) -> PickerResult<TimePickerConfig> {
    if let Some(hour) = config.hour {
        if hour > 23 {
            return Err(PickerError::InvalidConfig(format!(
                "hour must be in 0..=23, got {hour}"
            )));
        }
    }
    for (name, value) in [("minute", config.minute), ("second", config.second)] {
        if let Some(value) = value {
            if value > 59 {
                return Err(PickerError::InvalidConfig(format!(
                    "{name} must be in 0..=59, got {value}"
                )));
            }
        }
    }
    if !config.clock_face_size.is_finite() || config.clock_face_size <= 0.0 {
        return Err(PickerError::InvalidConfig(
            "clock face size must be finite and > 0".to_owned(),
        ));
    }
    Ok(config)
}

pub(super) fn validate_date_picker_config(config: &DatePickerConfig) -> PickerResult<()> {
    if let Some(month) = config.month {
        validate_month(month)?;
    }
    if config.width == Some(0) {
        return Err(PickerError::InvalidConfig(
            "width must be > 0 when set".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_month(month: u32) -> PickerResult<u32> {
    if !(1..=12).contains(&month) {
        return Err(PickerError::InvalidMonth { month });
    }
    Ok(month)
}

pub(super) fn validate_clock_bounds(bounds: BoundingRect) -> PickerResult<BoundingRect> {
    if !bounds.is_valid() {
        return Err(PickerError::GeometryUnavailable(
            "clock bounds must be finite with non-negative size".to_owned(),
        ));
    }
    Ok(bounds)
}

pub(super) fn validate_pointer(client_x: f64, client_y: f64) -> PickerResult<(f64, f64)> {
    if !client_x.is_finite() || !client_y.is_finite() {
        return Err(PickerError::InvalidInput(
            "pointer coordinates must be finite".to_owned(),
        ));
    }
    Ok((client_x, client_y))
}
