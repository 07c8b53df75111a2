use chrono::{Datelike, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{CalendarGridRequest, WeekGrid, build_week_grid, month_bounds};
use crate::error::{PickerError, PickerResult};

use super::validation::{validate_date_picker_config, validate_month};
use super::{
    ChronoCulture, DatePickerConfig, Hideable, NameLookup, PropertyObserver, Theme, Themeable,
};

/// Month header entry. Exactly one of the twelve entries is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerMonth {
    pub month: u32,
    pub name: String,
    pub is_active: bool,
}

/// Weekday column header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerDay {
    pub weekday: Weekday,
    pub name: String,
}

/// Month-view calendar controller.
///
/// Month and weekday tables are built once from the name lookup at
/// initialization; the week grid is recomputed on every [`Self::weeks`] call.
#[derive(Debug)]
pub struct DatePickerEngine<N: NameLookup> {
    names: N,
    months: Vec<PickerMonth>,
    days: Vec<PickerDay>,
    month: u32,
    year: i32,
    selected_date: Option<NaiveDate>,
    first_day_of_week: Weekday,
    theme: Theme,
    visible: bool,
    width: Option<u32>,
    selected_date_observer: PropertyObserver<Option<NaiveDate>>,
    visibility_observer: PropertyObserver<bool>,
}

impl DatePickerEngine<ChronoCulture> {
    /// Resolves `config.culture` and initializes against today's local date.
    ///
    /// An unknown culture identifier is a fatal initialization error.
    pub fn initialize(config: DatePickerConfig) -> PickerResult<Self> {
        Self::initialize_at(config, Local::now().date_naive())
    }

    pub fn initialize_at(config: DatePickerConfig, today: NaiveDate) -> PickerResult<Self> {
        let culture = ChronoCulture::from_identifier(config.culture.as_deref())?;
        Self::with_names_at(culture, config, today)
    }
}

impl<N: NameLookup> DatePickerEngine<N> {
    /// Initializes with an injected name lookup; `config.culture` is ignored.
    pub fn with_names(names: N, config: DatePickerConfig) -> PickerResult<Self> {
        Self::with_names_at(names, config, Local::now().date_naive())
    }

    pub fn with_names_at(
        names: N,
        config: DatePickerConfig,
        today: NaiveDate,
    ) -> PickerResult<Self> {
        validate_date_picker_config(&config)?;

        let month = config
            .month
            .or_else(|| config.selected_date.map(|date| date.month()))
            .unwrap_or_else(|| today.month());
        let year = config
            .year
            .or_else(|| config.selected_date.map(|date| date.year()))
            .unwrap_or_else(|| today.year());
        month_bounds(year, month)?;

        let months = (1..=12)
            .map(|month| PickerMonth {
                month,
                name: names.abbreviated_month_name(month),
                is_active: false,
            })
            .collect();
        let days = std::iter::successors(Some(config.first_day_of_week), |day| Some(day.succ()))
            .take(7)
            .map(|weekday| PickerDay {
                weekday,
                name: names.abbreviated_day_name(weekday),
            })
            .collect();

        debug!(
            month,
            year,
            first_day_of_week = %config.first_day_of_week,
            has_selected_date = config.selected_date.is_some(),
            "initialize date picker"
        );

        let mut engine = Self {
            names,
            months,
            days,
            month,
            year,
            selected_date: config.selected_date,
            first_day_of_week: config.first_day_of_week,
            theme: config.theme,
            visible: config.visible,
            width: config.width,
            selected_date_observer: PropertyObserver::default(),
            visibility_observer: PropertyObserver::default(),
        };
        engine.change_month(month)?;
        Ok(engine)
    }

    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    #[must_use]
    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    #[must_use]
    pub fn months(&self) -> &[PickerMonth] {
        &self.months
    }

    /// Weekday headers in column order.
    #[must_use]
    pub fn days(&self) -> &[PickerDay] {
        &self.days
    }

    #[must_use]
    pub fn names(&self) -> &N {
        &self.names
    }

    #[must_use]
    pub fn width(&self) -> Option<u32> {
        self.width
    }

    pub fn set_width(&mut self, width: Option<u32>) -> PickerResult<()> {
        if width == Some(0) {
            return Err(PickerError::InvalidConfig(
                "width must be > 0 when set".to_owned(),
            ));
        }
        self.width = width;
        Ok(())
    }

    pub fn on_selected_date_changed(
        &mut self,
        listener: impl FnMut(Option<NaiveDate>) + 'static,
    ) {
        if self.selected_date_observer.register(listener) {
            debug!("replaced selected-date listener");
        }
    }

    pub fn clear_selected_date_listener(&mut self) -> bool {
        self.selected_date_observer.clear()
    }

    pub fn on_visibility_changed(&mut self, listener: impl FnMut(bool) + 'static) {
        self.visibility_observer.register(listener);
    }

    /// Switches the active month and moves the active flag onto its entry.
    pub fn change_month(&mut self, month: u32) -> PickerResult<()> {
        let month = validate_month(month)?;
        self.month = month;
        for entry in &mut self.months {
            entry.is_active = entry.month == month;
        }
        trace!(month, "change month");
        Ok(())
    }

    /// Selects a clicked date and hides the picker.
    pub fn change_date(&mut self, date: NaiveDate) {
        self.set_selected_date(Some(date));
        self.hide();
    }

    /// Binding write. Notifies only when the value actually changes; returns
    /// whether it did.
    pub fn set_selected_date(&mut self, date: Option<NaiveDate>) -> bool {
        if self.selected_date == date {
            return false;
        }
        self.selected_date = date;
        trace!(?date, "selected date changed");
        self.selected_date_observer.notify(date);
        true
    }

    /// Grid for the active month, with `is_today` against the local date.
    pub fn weeks(&self) -> PickerResult<WeekGrid> {
        self.weeks_at(Local::now().date_naive())
    }

    pub fn weeks_at(&self, today: NaiveDate) -> PickerResult<WeekGrid> {
        let request = CalendarGridRequest::new(self.year, self.month, today)
            .with_first_day_of_week(self.first_day_of_week)
            .with_selected_date(self.selected_date);
        build_week_grid(&request)
    }

    /// Selected date as two-digit day plus full month name ("05 March").
    #[must_use]
    pub fn selected_date_text(&self) -> String {
        self.selected_date
            .map(|date| format!("{:02} {}", date.day(), self.names.month_name(date.month())))
            .unwrap_or_default()
    }

    /// Full weekday name of the selected date.
    #[must_use]
    pub fn selected_date_day_text(&self) -> String {
        self.selected_date
            .map(|date| self.names.day_name(date.weekday()))
            .unwrap_or_default()
    }
}

impl<N: NameLookup> Themeable for DatePickerEngine<N> {
    fn theme(&self) -> Theme {
        self.theme
    }

    fn change_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

impl<N: NameLookup> Hideable for DatePickerEngine<N> {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            trace!(visible, "date picker visibility changed");
            self.visibility_observer.notify(visible);
        }
    }
}
