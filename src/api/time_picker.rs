use chrono::{Local, NaiveDateTime, NaiveTime, Timelike};
use tracing::{debug, trace, warn};

use crate::core::{
    BoundingRect, TimeMode, angle_to_hour, angle_to_minute_or_second, compose_time,
    hour_to_angle, minute_or_second_to_angle, pointer_to_degrees, split_hour24,
};
use crate::error::PickerResult;
use crate::interaction::{ClockHands, ClockInteraction, DragState, DragTarget};

use super::validation::{validate_clock_bounds, validate_pointer, validate_time_picker_config};
use super::{
    ClockGeometryProvider, Hideable, PropertyObserver, Theme, Themeable, TimePickerConfig,
};

/// Analog clock controller.
///
/// Owns the dial time (12-hour hour plus AM/PM), hand angles, drag state and
/// the cached clock bounds. Every mutation that changes the composed time
/// notifies the selected-time listener before returning.
#[derive(Debug)]
pub struct TimePickerEngine {
    hour: u32,
    minute: u32,
    second: u32,
    mode: TimeMode,
    enabled: bool,
    hands: ClockHands,
    interaction: ClockInteraction,
    clock_face_size: f64,
    clock_bounds: Option<BoundingRect>,
    bounds_requested: bool,
    theme: Theme,
    visible: bool,
    selected_time_observer: PropertyObserver<Option<NaiveTime>>,
    visibility_observer: PropertyObserver<bool>,
}

impl TimePickerEngine {
    /// Initializes from `config`, filling missing components from the local wall clock.
    pub fn initialize(config: TimePickerConfig) -> PickerResult<Self> {
        Self::initialize_at(config, Local::now().naive_local())
    }

    /// Initializes from `config` with an explicit "now".
    pub fn initialize_at(config: TimePickerConfig, now: NaiveDateTime) -> PickerResult<Self> {
        let config = validate_time_picker_config(config)?;
        let source = config.selected_time.unwrap_or_else(|| now.time());
        let hour24 = config.hour.unwrap_or_else(|| source.hour());
        let minute = config.minute.unwrap_or_else(|| source.minute());
        let second = config.second.unwrap_or_else(|| source.second());
        let (hour, mode) = split_hour24(hour24);

        debug!(
            hour,
            minute,
            second,
            mode = mode.label(),
            from_selected_time = config.selected_time.is_some(),
            "initialize time picker"
        );

        Ok(Self {
            hour,
            minute,
            second,
            mode,
            enabled: config.enabled,
            hands: ClockHands::at(hour, minute, second),
            interaction: ClockInteraction::new(hour),
            clock_face_size: config.clock_face_size,
            clock_bounds: None,
            bounds_requested: false,
            theme: config.theme,
            visible: config.visible,
            selected_time_observer: PropertyObserver::default(),
            visibility_observer: PropertyObserver::default(),
        })
    }

    #[must_use]
    pub fn hour(&self) -> u32 {
        self.hour
    }

    #[must_use]
    pub fn minute(&self) -> u32 {
        self.minute
    }

    #[must_use]
    pub fn second(&self) -> u32 {
        self.second
    }

    #[must_use]
    pub fn mode(&self) -> TimeMode {
        self.mode
    }

    /// "AM" or "PM".
    #[must_use]
    pub fn mode_text(&self) -> &'static str {
        self.mode.label()
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn hands(&self) -> ClockHands {
        self.hands
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.interaction.state()
    }

    #[must_use]
    pub fn hour_base(&self) -> u32 {
        self.interaction.hour_base()
    }

    #[must_use]
    pub fn clock_face_size(&self) -> f64 {
        self.clock_face_size
    }

    #[must_use]
    pub fn clock_bounds(&self) -> Option<BoundingRect> {
        self.clock_bounds
    }

    /// Composed 24-hour time, `None` while the picker is disabled.
    #[must_use]
    pub fn selected_time(&self) -> Option<NaiveTime> {
        if !self.enabled {
            return None;
        }
        compose_time(self.hour, self.minute, self.second, self.mode)
    }

    /// Registers the selected-time listener, replacing any previous one.
    pub fn on_selected_time_changed(
        &mut self,
        listener: impl FnMut(Option<NaiveTime>) + 'static,
    ) {
        if self.selected_time_observer.register(listener) {
            debug!("replaced selected-time listener");
        }
    }

    pub fn clear_selected_time_listener(&mut self) -> bool {
        self.selected_time_observer.clear()
    }

    pub fn on_visibility_changed(&mut self, listener: impl FnMut(bool) + 'static) {
        self.visibility_observer.register(listener);
    }

    /// Binding write from the host. `None` disables the picker.
    pub fn set_selected_time(&mut self, time: Option<NaiveTime>) {
        let previous = self.selected_time();
        match time {
            Some(time) => {
                let (hour, mode) = split_hour24(time.hour());
                self.hour = hour;
                self.minute = time.minute();
                self.second = time.second();
                self.mode = mode;
                self.enabled = true;
                self.interaction.set_hour_base(hour);
                self.hands = ClockHands::at(hour, self.minute, self.second);
            }
            None => self.enabled = false,
        }
        if self.selected_time() != previous {
            self.emit_selected_time();
        }
    }

    /// Runs the one-time geometry query after the first render.
    ///
    /// A failing provider is logged and leaves dragging inert; it is not retried
    /// until [`Self::invalidate_clock_bounds`] is called.
    pub fn after_render(&mut self, provider: &mut impl ClockGeometryProvider) {
        if self.bounds_requested {
            return;
        }
        self.bounds_requested = true;
        match provider.bounding_rect().and_then(validate_clock_bounds) {
            Ok(bounds) => {
                debug!(left = bounds.left, top = bounds.top, "clock bounds resolved");
                self.clock_bounds = Some(bounds);
            }
            Err(err) => {
                warn!(error = %err, "clock geometry query failed; drag input stays inert");
            }
        }
    }

    /// Accepts bounds resolved outside [`Self::after_render`], e.g. by an
    /// asynchronous host query completing late.
    pub fn set_clock_bounds(&mut self, bounds: BoundingRect) -> PickerResult<()> {
        self.clock_bounds = Some(validate_clock_bounds(bounds)?);
        self.bounds_requested = true;
        Ok(())
    }

    /// Lets the next [`Self::after_render`] query geometry again. Cached bounds
    /// keep serving drag input until replaced.
    pub fn invalidate_clock_bounds(&mut self) {
        self.bounds_requested = false;
    }

    pub fn drag_start(&mut self, target: DragTarget) {
        self.interaction.on_drag_start(target);
        trace!(?target, "drag start");
    }

    /// Applies a pointer position (client coordinates) to the dragged hand.
    ///
    /// Ignored while idle or before clock bounds are known.
    pub fn drag_over(&mut self, client_x: f64, client_y: f64) -> PickerResult<()> {
        let (client_x, client_y) = validate_pointer(client_x, client_y)?;
        let target = self.interaction.active_target();
        if target == DragTarget::None {
            trace!("drag over ignored: no active hand");
            return Ok(());
        }
        let Some(bounds) = self.clock_bounds else {
            trace!("drag over ignored: clock bounds not resolved");
            return Ok(());
        };

        let (x, y) = bounds.to_local(client_x, client_y);
        let center = self.clock_face_size / 2.0;
        let degrees = pointer_to_degrees(x, y, center, center);

        match target {
            DragTarget::HourHand => {
                self.hands.hour_degrees = degrees;
                self.hour = angle_to_hour(degrees);
                self.interaction.set_hour_base(self.hour);
            }
            DragTarget::MinuteHand => {
                self.hands.minute_degrees = degrees;
                self.minute = angle_to_minute_or_second(degrees);
                self.hands.hour_degrees = hour_to_angle(self.interaction.hour_base(), degrees);
            }
            DragTarget::SecondHand => {
                self.hands.second_degrees = degrees;
                self.second = angle_to_minute_or_second(degrees);
            }
            DragTarget::None => {}
        }
        trace!(
            ?target,
            degrees,
            hour = self.hour,
            minute = self.minute,
            second = self.second,
            "drag over"
        );

        self.emit_selected_time();
        Ok(())
    }

    /// Ends the drag and snaps the released hand onto its discrete value.
    pub fn drag_end(&mut self, target: DragTarget) {
        let active = self.interaction.on_drag_end();
        if active != target && active != DragTarget::None {
            warn!(?active, ?target, "drag end target differs from active drag");
        }
        match target {
            DragTarget::HourHand => {
                self.hands.hour_degrees = hour_to_angle(self.hour, self.hands.minute_degrees);
            }
            DragTarget::MinuteHand => {
                self.hands.minute_degrees = minute_or_second_to_angle(self.minute);
                self.hands.hour_degrees =
                    hour_to_angle(self.interaction.hour_base(), self.hands.minute_degrees);
            }
            DragTarget::SecondHand => {
                self.hands.second_degrees = minute_or_second_to_angle(self.second);
            }
            DragTarget::None => {}
        }
        trace!(?target, "drag end");
    }

    pub fn toggle_am_pm(&mut self) {
        self.mode = self.mode.toggled();
        debug!(mode = self.mode.label(), "toggle am/pm");
        self.emit_selected_time();
    }

    pub fn toggle_enabled(&mut self) {
        self.enabled = !self.enabled;
        debug!(enabled = self.enabled, "toggle enabled");
        self.emit_selected_time();
    }

    fn emit_selected_time(&mut self) {
        let selected = self.selected_time();
        trace!(?selected, "selected time changed");
        self.selected_time_observer.notify(selected);
    }
}

impl Themeable for TimePickerEngine {
    fn theme(&self) -> Theme {
        self.theme
    }

    fn change_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

impl Hideable for TimePickerEngine {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.visibility_observer.notify(visible);
        }
    }
}
