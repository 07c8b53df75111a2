use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{PickerError, PickerResult};

use super::Theme;

/// Date picker bootstrap parameters.
///
/// `month` and `year` each fall back independently to the selected date and
/// then to today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatePickerConfig {
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub selected_date: Option<NaiveDate>,
    /// Locale identifier ("en", "hi-IN"); blank or absent uses the system locale.
    pub culture: Option<String>,
    pub first_day_of_week: Weekday,
    pub theme: Theme,
    pub visible: bool,
    /// Fixed width in pixels; `None` lets the host auto-size.
    pub width: Option<u32>,
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self {
            month: None,
            year: None,
            selected_date: None,
            culture: None,
            first_day_of_week: Weekday::Mon,
            theme: Theme::default(),
            visible: false,
            width: None,
        }
    }
}

impl DatePickerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_month_year(mut self, month: Option<u32>, year: Option<i32>) -> Self {
        self.month = month;
        self.year = year;
        self
    }

    #[must_use]
    pub fn with_selected_date(mut self, selected_date: Option<NaiveDate>) -> Self {
        self.selected_date = selected_date;
        self
    }

    #[must_use]
    pub fn with_culture(mut self, culture: impl Into<String>) -> Self {
        self.culture = Some(culture.into());
        self
    }

    #[must_use]
    pub fn with_first_day_of_week(mut self, first_day_of_week: Weekday) -> Self {
        self.first_day_of_week = first_day_of_week;
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
    pub fn with_width(mut self, width: Option<u32>) -> Self {
        self.width = width;
        self
    }

    pub fn from_json_str(input: &str) -> PickerResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            PickerError::InvalidConfig(format!("failed to parse date picker config: {e}"))
        })
    }
}
