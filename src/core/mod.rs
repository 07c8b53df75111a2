pub mod angle;
pub mod calendar;
pub mod clock_time;
pub mod types;

pub use angle::{
    angle_to_hour, angle_to_minute_or_second, hour_to_angle, minute_or_second_to_angle,
    normalize_degrees, pointer_to_degrees,
};
pub use calendar::{
    CalendarGridRequest, PickerDate, PickerWeek, WeekGrid, build_week_grid, last_day_of_week,
    month_bounds,
};
pub use clock_time::{compose_time, split_hour24, to_hour24};
pub use types::{BoundingRect, TimeMode};
