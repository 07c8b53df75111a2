use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::{PickerWeek, TimeMode};
use crate::error::PickerResult;
use crate::interaction::{ClockHands, DragState};

use super::{
    DatePickerEngine, Hideable, NameLookup, PickerDay, PickerMonth, Theme, Themeable,
    TimePickerEngine,
};

/// Everything a render layer needs to draw the clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePickerSnapshot {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub mode: TimeMode,
    pub enabled: bool,
    pub selected_time: Option<NaiveTime>,
    pub hands: ClockHands,
    pub drag_state: DragState,
    pub theme: Theme,
    pub visible: bool,
}

/// Everything a render layer needs to draw the month view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatePickerSnapshot {
    pub month: u32,
    pub year: i32,
    pub selected_date: Option<NaiveDate>,
    pub selected_date_text: String,
    pub selected_date_day_text: String,
    pub first_day_of_week: Weekday,
    pub months: Vec<PickerMonth>,
    pub days: Vec<PickerDay>,
    pub weeks: Vec<PickerWeek>,
    pub theme: Theme,
    pub visible: bool,
    pub width: Option<u32>,
}

impl TimePickerEngine {
    #[must_use]
    pub fn snapshot(&self) -> TimePickerSnapshot {
        TimePickerSnapshot {
            hour: self.hour(),
            minute: self.minute(),
            second: self.second(),
            mode: self.mode(),
            enabled: self.is_enabled(),
            selected_time: self.selected_time(),
            hands: self.hands(),
            drag_state: self.drag_state(),
            theme: self.theme(),
            visible: self.is_visible(),
        }
    }
}

impl<N: NameLookup> DatePickerEngine<N> {
    /// Snapshot with the grid computed against `today`.
    pub fn snapshot_at(&self, today: NaiveDate) -> PickerResult<DatePickerSnapshot> {
        Ok(DatePickerSnapshot {
            month: self.month(),
            year: self.year(),
            selected_date: self.selected_date(),
            selected_date_text: self.selected_date_text(),
            selected_date_day_text: self.selected_date_day_text(),
            first_day_of_week: self.first_day_of_week(),
            months: self.months().to_vec(),
            days: self.days().to_vec(),
            weeks: self.weeks_at(today)?.into_weeks(),
            theme: self.theme(),
            visible: self.is_visible(),
            width: self.width(),
        })
    }

    pub fn snapshot(&self) -> PickerResult<DatePickerSnapshot> {
        self.snapshot_at(chrono::Local::now().date_naive())
    }
}
