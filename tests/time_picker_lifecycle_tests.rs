use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_abs_diff_eq;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use picker_rs::api::{Hideable, Theme, Themeable, TimePickerConfig, TimePickerEngine};
use picker_rs::core::{BoundingRect, TimeMode};
use picker_rs::interaction::DragTarget;
use picker_rs::{PickerError, PickerResult};

fn now(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .expect("valid now")
}

fn time(hour: u32, minute: u32, second: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, second).expect("valid time")
}

fn record(engine: &mut TimePickerEngine) -> Rc<RefCell<Vec<Option<NaiveTime>>>> {
    let emitted = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&emitted);
    engine.on_selected_time_changed(move |value| sink.borrow_mut().push(value));
    emitted
}

#[test]
fn init_without_selected_time_uses_wall_clock() {
    let engine =
        TimePickerEngine::initialize_at(TimePickerConfig::default(), now(14, 30, 0)).expect("init");

    assert_eq!(engine.hour(), 2);
    assert_eq!(engine.minute(), 30);
    assert_eq!(engine.second(), 0);
    assert_eq!(engine.mode(), TimeMode::Pm);
    assert_eq!(engine.mode_text(), "PM");
    assert_eq!(engine.selected_time(), Some(time(14, 30, 0)));
    assert_eq!(engine.hour_base(), 2);

    let hands = engine.hands();
    assert_abs_diff_eq!(hands.minute_degrees, 180.0);
    assert_abs_diff_eq!(hands.hour_degrees, 75.0);
    assert_abs_diff_eq!(hands.second_degrees, 0.0);
}

#[test]
fn init_prefers_selected_time_over_wall_clock() {
    let config = TimePickerConfig::default().with_selected_time(Some(time(9, 5, 42)));
    let engine = TimePickerEngine::initialize_at(config, now(14, 30, 0)).expect("init");

    assert_eq!((engine.hour(), engine.minute(), engine.second()), (9, 5, 42));
    assert_eq!(engine.mode(), TimeMode::Am);
}

#[test]
fn explicit_components_win_independently() {
    let config = TimePickerConfig::default()
        .with_selected_time(Some(time(9, 5, 42)))
        .with_components(Some(20), None, Some(0));
    let engine = TimePickerEngine::initialize_at(config, now(14, 30, 0)).expect("init");

    assert_eq!(engine.hour(), 8);
    assert_eq!(engine.mode(), TimeMode::Pm);
    assert_eq!(engine.minute(), 5);
    assert_eq!(engine.second(), 0);
    assert_eq!(engine.selected_time(), Some(time(20, 5, 0)));
}

#[test]
fn noon_and_midnight_keep_their_composed_value() {
    let noon = TimePickerEngine::initialize_at(TimePickerConfig::default(), now(12, 0, 0))
        .expect("init");
    assert_eq!((noon.hour(), noon.mode()), (12, TimeMode::Pm));
    assert_eq!(noon.selected_time(), Some(time(12, 0, 0)));

    let midnight = TimePickerEngine::initialize_at(TimePickerConfig::default(), now(0, 15, 0))
        .expect("init");
    assert_eq!((midnight.hour(), midnight.mode()), (12, TimeMode::Am));
    assert_eq!(midnight.selected_time(), Some(time(0, 15, 0)));
}

#[test]
fn invalid_components_are_rejected() {
    let config = TimePickerConfig::default().with_components(Some(24), None, None);
    assert!(matches!(
        TimePickerEngine::initialize_at(config, now(1, 0, 0)),
        Err(PickerError::InvalidConfig(_))
    ));

    let config = TimePickerConfig::default().with_components(None, Some(60), None);
    assert!(TimePickerEngine::initialize_at(config, now(1, 0, 0)).is_err());

    let config = TimePickerConfig::default().with_clock_face_size(0.0);
    assert!(TimePickerEngine::initialize_at(config, now(1, 0, 0)).is_err());
}

#[test]
fn toggling_enabled_emits_absent_then_previous_time() {
    let mut engine =
        TimePickerEngine::initialize_at(TimePickerConfig::default(), now(14, 30, 0)).expect("init");
    let emitted = record(&mut engine);

    engine.toggle_enabled();
    assert!(!engine.is_enabled());
    assert_eq!(engine.selected_time(), None);
    assert_eq!((engine.hour(), engine.minute()), (2, 30));

    engine.toggle_enabled();
    assert_eq!(
        emitted.borrow().as_slice(),
        &[None, Some(time(14, 30, 0))]
    );
}

#[test]
fn disabled_config_starts_without_selection() {
    let config = TimePickerConfig::default().with_enabled(false);
    let engine = TimePickerEngine::initialize_at(config, now(14, 30, 0)).expect("init");
    assert_eq!(engine.selected_time(), None);
}

#[test]
fn toggling_am_pm_shifts_composed_time_by_twelve_hours() {
    let mut engine =
        TimePickerEngine::initialize_at(TimePickerConfig::default(), now(14, 30, 0)).expect("init");
    let emitted = record(&mut engine);

    engine.toggle_am_pm();
    assert_eq!(engine.mode(), TimeMode::Am);
    engine.toggle_am_pm();

    assert_eq!(
        emitted.borrow().as_slice(),
        &[Some(time(2, 30, 0)), Some(time(14, 30, 0))]
    );
}

#[test]
fn toggling_am_pm_while_disabled_still_notifies_absent() {
    let config = TimePickerConfig::default().with_enabled(false);
    let mut engine = TimePickerEngine::initialize_at(config, now(14, 30, 0)).expect("init");
    let emitted = record(&mut engine);

    engine.toggle_am_pm();
    assert_eq!(emitted.borrow().as_slice(), &[None]);
}

#[test]
fn binding_write_rederives_dial_and_skips_no_ops() {
    let mut engine =
        TimePickerEngine::initialize_at(TimePickerConfig::default(), now(14, 30, 0)).expect("init");
    let emitted = record(&mut engine);

    engine.set_selected_time(Some(time(14, 30, 0)));
    assert!(emitted.borrow().is_empty());

    engine.set_selected_time(Some(time(7, 45, 10)));
    assert_eq!((engine.hour(), engine.minute(), engine.second()), (7, 45, 10));
    assert_eq!(engine.mode(), TimeMode::Am);
    assert_eq!(engine.hour_base(), 7);
    assert_abs_diff_eq!(engine.hands().hour_degrees, 232.5);

    engine.set_selected_time(None);
    assert!(!engine.is_enabled());
    engine.set_selected_time(Some(time(7, 45, 10)));
    assert!(engine.is_enabled());

    assert_eq!(
        emitted.borrow().as_slice(),
        &[Some(time(7, 45, 10)), None, Some(time(7, 45, 10))]
    );
}

#[test]
fn drag_is_inert_until_bounds_resolve() {
    let mut engine =
        TimePickerEngine::initialize_at(TimePickerConfig::default(), now(14, 30, 0)).expect("init");
    let emitted = record(&mut engine);

    let mut failing = || -> PickerResult<BoundingRect> {
        Err(PickerError::GeometryUnavailable("element detached".to_owned()))
    };
    engine.after_render(&mut failing);
    assert_eq!(engine.clock_bounds(), None);

    engine.drag_start(DragTarget::MinuteHand);
    engine.drag_over(270.0, 220.0).expect("inert drag");
    assert_eq!(engine.minute(), 30);
    assert!(emitted.borrow().is_empty());

    // Late asynchronous resolution.
    engine
        .set_clock_bounds(BoundingRect::new(0.0, 0.0, 340.0, 340.0))
        .expect("bounds");
    engine.drag_over(170.0, 300.0).expect("drag");
    assert_eq!(engine.minute(), 30);
    engine.drag_over(300.0, 170.0).expect("drag");
    assert_eq!(engine.minute(), 15);
    assert_eq!(emitted.borrow().len(), 2);
}

#[test]
fn geometry_is_queried_once_until_invalidated() {
    let mut engine =
        TimePickerEngine::initialize_at(TimePickerConfig::default(), now(14, 30, 0)).expect("init");
    let calls = Rc::new(RefCell::new(0u32));
    let counter = Rc::clone(&calls);
    let mut provider = move || -> PickerResult<BoundingRect> {
        *counter.borrow_mut() += 1;
        Ok(BoundingRect::new(10.0, 20.0, 340.0, 340.0))
    };

    engine.after_render(&mut provider);
    engine.after_render(&mut provider);
    assert_eq!(*calls.borrow(), 1);
    assert_eq!(engine.clock_bounds().map(|b| b.left), Some(10.0));

    engine.invalidate_clock_bounds();
    assert!(engine.clock_bounds().is_some());
    engine.after_render(&mut provider);
    assert_eq!(*calls.borrow(), 2);
}

#[test]
fn invalid_bounds_are_rejected() {
    let mut engine =
        TimePickerEngine::initialize_at(TimePickerConfig::default(), now(14, 30, 0)).expect("init");
    let bounds = BoundingRect::new(f64::NAN, 0.0, 340.0, 340.0);
    assert!(matches!(
        engine.set_clock_bounds(bounds),
        Err(PickerError::GeometryUnavailable(_))
    ));
}

#[test]
fn theme_and_visibility_follow_host_commands() {
    let config = TimePickerConfig::default().with_theme(Theme::Pink);
    let mut engine = TimePickerEngine::initialize_at(config, now(14, 30, 0)).expect("init");
    assert_eq!(engine.theme(), Theme::Pink);
    engine.change_theme(Theme::Black);
    assert_eq!(engine.theme(), Theme::Black);

    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    engine.on_visibility_changed(move |visible| sink.borrow_mut().push(visible));

    assert!(!engine.is_visible());
    engine.show();
    engine.show();
    engine.toggle_visibility();
    assert_eq!(changes.borrow().as_slice(), &[true, false]);
}

#[test]
fn replacing_listener_routes_to_latest_only() {
    let mut engine =
        TimePickerEngine::initialize_at(TimePickerConfig::default(), now(14, 30, 0)).expect("init");
    let first = record(&mut engine);
    let second = record(&mut engine);

    engine.toggle_am_pm();
    assert!(first.borrow().is_empty());
    assert_eq!(second.borrow().len(), 1);

    assert!(engine.clear_selected_time_listener());
    engine.toggle_am_pm();
    assert_eq!(second.borrow().len(), 1);
}
