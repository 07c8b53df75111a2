use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{PickerError, PickerResult};

pub const DAYS_PER_WEEK: usize = 7;

/// One cell of the calendar grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerDate {
    pub date: NaiveDate,
    /// Display text, the day-of-month digits.
    pub text: String,
    pub is_today: bool,
    /// `false` for padding cells taken from the previous/next month.
    pub belongs_to_current_month: bool,
    pub is_selected: bool,
}

pub type PickerWeek = [PickerDate; DAYS_PER_WEEK];

/// Week rows of a month view. Every row starts on the configured first day of
/// the week and holds exactly seven dates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeekGrid {
    weeks: Vec<PickerWeek>,
}

impl WeekGrid {
    #[must_use]
    pub fn weeks(&self) -> &[PickerWeek] {
        &self.weeks
    }

    #[must_use]
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    pub fn dates(&self) -> impl Iterator<Item = &PickerDate> {
        self.weeks.iter().flat_map(|week| week.iter())
    }

    #[must_use]
    pub fn into_weeks(self) -> Vec<PickerWeek> {
        self.weeks
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarGridRequest {
    pub month: u32,
    pub year: i32,
    pub first_day_of_week: Weekday,
    pub selected_date: Option<NaiveDate>,
    pub today: NaiveDate,
}

impl CalendarGridRequest {
    /// Monday-first request without a selection.
    #[must_use]
    pub fn new(year: i32, month: u32, today: NaiveDate) -> Self {
        Self {
            month,
            year,
            first_day_of_week: Weekday::Mon,
            selected_date: None,
            today,
        }
    }

    #[must_use]
    pub fn with_first_day_of_week(mut self, first_day_of_week: Weekday) -> Self {
        self.first_day_of_week = first_day_of_week;
        self
    }

    #[must_use]
    pub fn with_selected_date(mut self, selected_date: Option<NaiveDate>) -> Self {
        self.selected_date = selected_date;
        self
    }
}

/// The weekday closing each grid row for a given week start.
#[must_use]
pub fn last_day_of_week(first_day_of_week: Weekday) -> Weekday {
    first_day_of_week.pred()
}

/// First and last date of `month` in `year`.
pub fn month_bounds(year: i32, month: u32) -> PickerResult<(NaiveDate, NaiveDate)> {
    if !(1..=12).contains(&month) {
        return Err(PickerError::InvalidMonth { month });
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(PickerError::InvalidDate {
        year,
        month,
        day: 1,
    })?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|next_first| next_first.pred_opt())
        .ok_or(PickerError::InvalidDate {
            year,
            month,
            day: 31,
        })?;
    Ok((first, last))
}

/// Days from `to` back to `from`, going backward through the week (0..=6).
fn days_back(from: Weekday, to: Weekday) -> u32 {
    (from.num_days_from_monday() + 7 - to.num_days_from_monday()) % 7
}

/// Builds the padded week-by-week grid for the requested month.
pub fn build_week_grid(request: &CalendarGridRequest) -> PickerResult<WeekGrid> {
    let (first_of_month, last_of_month) = month_bounds(request.year, request.month)?;
    let first_day = request.first_day_of_week;
    let last_day = last_day_of_week(first_day);

    let start = first_of_month
        .checked_sub_days(chrono::Days::new(u64::from(days_back(
            first_of_month.weekday(),
            first_day,
        ))))
        .ok_or_else(|| PickerError::InvalidData("grid start is out of range".to_owned()))?;
    let end = last_of_month
        .checked_add_days(chrono::Days::new(u64::from(days_back(
            last_day,
            last_of_month.weekday(),
        ))))
        .ok_or_else(|| PickerError::InvalidData("grid end is out of range".to_owned()))?;

    let mut weeks = Vec::with_capacity(6);
    let mut current = Vec::with_capacity(DAYS_PER_WEEK);
    for date in start.iter_days().take_while(|date| *date <= end) {
        current.push(PickerDate {
            date,
            text: date.day().to_string(),
            is_today: date == request.today,
            belongs_to_current_month: date.month() == request.month,
            is_selected: request.selected_date == Some(date),
        });

        if date.weekday() == last_day {
            let week: PickerWeek = std::mem::take(&mut current).try_into().map_err(
                |partial: Vec<PickerDate>| {
                    PickerError::InvalidData(format!(
                        "week closed with {} dates instead of {DAYS_PER_WEEK}",
                        partial.len()
                    ))
                },
            )?;
            weeks.push(week);
        }
    }

    if !current.is_empty() {
        return Err(PickerError::InvalidData(format!(
            "grid ended mid-week with {} trailing dates",
            current.len()
        )));
    }

    Ok(WeekGrid { weeks })
}
