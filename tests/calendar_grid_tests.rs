use chrono::{Datelike, NaiveDate, Weekday};
use picker_rs::PickerError;
use picker_rs::core::{CalendarGridRequest, build_week_grid, last_day_of_week};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn leap_february_monday_start_is_padded_to_full_weeks() {
    let request = CalendarGridRequest::new(2024, 2, date(2024, 2, 10));
    let grid = build_week_grid(&request).expect("grid");

    assert_eq!(grid.week_count(), 5);
    assert!(grid.weeks().iter().all(|week| week.len() == 7));
    assert_eq!(grid.dates().count() % 7, 0);

    let dates: Vec<_> = grid.dates().collect();
    assert_eq!(dates.first().map(|d| d.date), Some(date(2024, 1, 29)));
    assert_eq!(dates.last().map(|d| d.date), Some(date(2024, 3, 3)));

    let leading: Vec<_> = dates
        .iter()
        .take_while(|d| !d.belongs_to_current_month)
        .map(|d| d.date)
        .collect();
    assert_eq!(leading, vec![date(2024, 1, 29), date(2024, 1, 30), date(2024, 1, 31)]);

    let in_month: Vec<_> = dates.iter().filter(|d| d.belongs_to_current_month).collect();
    assert_eq!(in_month.len(), 29);
    assert!(in_month.iter().all(|d| d.date.month() == 2));
    assert_eq!(in_month.last().map(|d| d.text.as_str()), Some("29"));

    let trailing = dates
        .iter()
        .rev()
        .take_while(|d| !d.belongs_to_current_month)
        .count();
    assert_eq!(trailing, 3);
}

#[test]
fn each_week_starts_and_ends_on_configured_days() {
    for first_day in [Weekday::Mon, Weekday::Sun, Weekday::Sat, Weekday::Wed] {
        let request = CalendarGridRequest::new(2024, 2, date(2024, 2, 10))
            .with_first_day_of_week(first_day);
        let grid = build_week_grid(&request).expect("grid");
        for week in grid.weeks() {
            assert_eq!(week[0].date.weekday(), first_day);
            assert_eq!(week[6].date.weekday(), last_day_of_week(first_day));
        }
    }
}

#[test]
fn sunday_start_shifts_padding() {
    let request = CalendarGridRequest::new(2024, 2, date(2024, 2, 10))
        .with_first_day_of_week(Weekday::Sun);
    let grid = build_week_grid(&request).expect("grid");
    let dates: Vec<_> = grid.dates().map(|d| d.date).collect();

    assert_eq!(dates.first(), Some(&date(2024, 1, 28)));
    assert_eq!(dates.last(), Some(&date(2024, 3, 2)));
}

#[test]
fn month_starting_on_week_start_has_no_leading_padding() {
    // April 2024 begins on a Monday.
    let request = CalendarGridRequest::new(2024, 4, date(2024, 4, 1));
    let grid = build_week_grid(&request).expect("grid");
    let first = &grid.weeks()[0][0];

    assert_eq!(first.date, date(2024, 4, 1));
    assert!(first.belongs_to_current_month);
    assert_eq!(grid.dates().last().map(|d| d.date), Some(date(2024, 5, 5)));
}

#[test]
fn today_is_flagged_once_when_inside_padded_range() {
    let in_month = CalendarGridRequest::new(2024, 2, date(2024, 2, 10));
    let grid = build_week_grid(&in_month).expect("grid");
    assert_eq!(grid.dates().filter(|d| d.is_today).count(), 1);

    let in_padding = CalendarGridRequest::new(2024, 2, date(2024, 1, 30));
    let grid = build_week_grid(&in_padding).expect("grid");
    let today: Vec<_> = grid.dates().filter(|d| d.is_today).collect();
    assert_eq!(today.len(), 1);
    assert!(!today[0].belongs_to_current_month);

    let outside = CalendarGridRequest::new(2024, 2, date(2024, 6, 1));
    let grid = build_week_grid(&outside).expect("grid");
    assert_eq!(grid.dates().filter(|d| d.is_today).count(), 0);
}

#[test]
fn selected_date_is_flagged() {
    let request = CalendarGridRequest::new(2024, 2, date(2024, 2, 10))
        .with_selected_date(Some(date(2024, 2, 14)));
    let grid = build_week_grid(&request).expect("grid");
    let selected: Vec<_> = grid.dates().filter(|d| d.is_selected).map(|d| d.date).collect();

    assert_eq!(selected, vec![date(2024, 2, 14)]);
}

#[test]
fn invalid_month_is_rejected() {
    let request = CalendarGridRequest::new(2024, 13, date(2024, 2, 10));
    assert!(matches!(
        build_week_grid(&request),
        Err(PickerError::InvalidMonth { month: 13 })
    ));

    let request = CalendarGridRequest::new(2024, 0, date(2024, 2, 10));
    assert!(build_week_grid(&request).is_err());
}
