mod culture;
mod date_picker;
mod date_picker_config;
mod geometry;
mod json_contract;
mod observers;
mod snapshot;
mod theme;
mod time_picker;
mod time_picker_config;
mod validation;
mod visibility;

pub use culture::{ChronoCulture, EnglishNames, NameLookup};
pub use date_picker::{DatePickerEngine, PickerDay, PickerMonth};
pub use date_picker_config::DatePickerConfig;
pub use geometry::{ClockGeometryProvider, FixedGeometry};
pub use json_contract::{
    DATE_PICKER_SNAPSHOT_JSON_SCHEMA_V1, DatePickerSnapshotJsonContractV1,
    TIME_PICKER_SNAPSHOT_JSON_SCHEMA_V1, TimePickerSnapshotJsonContractV1,
};
pub use observers::PropertyObserver;
pub use snapshot::{DatePickerSnapshot, TimePickerSnapshot};
pub use theme::{Theme, Themeable};
pub use time_picker::TimePickerEngine;
pub use time_picker_config::{DEFAULT_CLOCK_FACE_SIZE, TimePickerConfig};
pub use visibility::Hideable;
