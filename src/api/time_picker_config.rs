use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{PickerError, PickerResult};

use super::Theme;

pub const DEFAULT_CLOCK_FACE_SIZE: f64 = 340.0;

/// Time picker bootstrap parameters.
///
/// Explicit `hour`/`minute`/`second` (24-hour `hour`) take precedence over
/// the matching component of `selected_time`; anything still missing comes
/// from the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimePickerConfig {
    pub selected_time: Option<NaiveTime>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
    pub enabled: bool,
    pub theme: Theme,
    pub visible: bool,
    /// Edge length of the square clock face; its center is the drag pivot.
    pub clock_face_size: f64,
}

impl Default for TimePickerConfig {
    fn default() -> Self {
        Self {
            selected_time: None,
            hour: None,
            minute: None,
            second: None,
            enabled: true,
            theme: Theme::default(),
            visible: false,
            clock_face_size: DEFAULT_CLOCK_FACE_SIZE,
        }
    }
}

impl TimePickerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_selected_time(mut self, selected_time: Option<NaiveTime>) -> Self {
        self.selected_time = selected_time;
        self
    }

    /// Explicit components; `hour` is 0-23.
    #[must_use]
    pub fn with_components(
        mut self,
        hour: Option<u32>,
        minute: Option<u32>,
        second: Option<u32>,
    ) -> Self {
        self.hour = hour;
        self.minute = minute;
        self.second = second;
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn with_clock_face_size(mut self, clock_face_size: f64) -> Self {
        self.clock_face_size = clock_face_size;
        self
    }

    pub fn from_json_str(input: &str) -> PickerResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            PickerError::InvalidConfig(format!("failed to parse time picker config: {e}"))
        })
    }
}
