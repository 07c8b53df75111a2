//! picker-rs: headless date picker and analog time picker engines.
//!
//! The crate owns the interaction math and selection state of both widgets
//! (calendar grids, clock-hand drag conversion, AM/PM composition) and leaves
//! drawing to the host, which feeds events in and renders from snapshots.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{
    DatePickerConfig, DatePickerEngine, Hideable, Theme, Themeable, TimePickerConfig,
    TimePickerEngine,
};
pub use error::{PickerError, PickerResult};
