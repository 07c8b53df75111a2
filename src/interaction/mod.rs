use serde::{Deserialize, Serialize};

use crate::core::{hour_to_angle, minute_or_second_to_angle};

/// Clock hand a drag gesture operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragTarget {
    #[default]
    None,
    HourHand,
    MinuteHand,
    SecondHand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragTarget),
}

/// Rendered angles of the three hands, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClockHands {
    pub hour_degrees: f64,
    pub minute_degrees: f64,
    pub second_degrees: f64,
}

impl ClockHands {
    /// Hands resting exactly on the given dial values.
    #[must_use]
    pub fn at(hour12: u32, minute: u32, second: u32) -> Self {
        let minute_degrees = minute_or_second_to_angle(minute);
        Self {
            hour_degrees: hour_to_angle(hour12, minute_degrees),
            minute_degrees,
            second_degrees: minute_or_second_to_angle(second),
        }
    }
}

/// Drag bookkeeping for the analog clock.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClockInteraction {
    state: DragState,
    /// Hour last set by an hour-hand drag (or initialization); the minute
    /// hand offsets the displayed hour angle from this base.
    hour_base: u32,
}

impl ClockInteraction {
    #[must_use]
    pub fn new(hour_base: u32) -> Self {
        Self {
            state: DragState::Idle,
            hour_base,
        }
    }

    #[must_use]
    pub fn state(self) -> DragState {
        self.state
    }

    /// Hand being dragged, `DragTarget::None` when idle.
    #[must_use]
    pub fn active_target(self) -> DragTarget {
        match self.state {
            DragState::Idle => DragTarget::None,
            DragState::Dragging(target) => target,
        }
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    #[must_use]
    pub fn hour_base(self) -> u32 {
        self.hour_base
    }

    pub fn set_hour_base(&mut self, hour: u32) {
        self.hour_base = hour;
    }

    pub fn on_drag_start(&mut self, target: DragTarget) {
        self.state = match target {
            DragTarget::None => DragState::Idle,
            target => DragState::Dragging(target),
        };
    }

    /// Ends the gesture and returns the hand that was being dragged.
    pub fn on_drag_end(&mut self) -> DragTarget {
        let released = self.active_target();
        self.state = DragState::Idle;
        released
    }
}
