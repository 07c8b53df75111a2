use thiserror::Error;

pub type PickerResult<T> = Result<T, PickerError>;

#[derive(Debug, Error)]
pub enum PickerError {
    #[error("invalid culture identifier: `{0}`")]
    InvalidCulture(String),

    #[error("invalid calendar month: {month}")]
    InvalidMonth { month: u32 },

    #[error("invalid calendar date: year={year}, month={month}, day={day}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("clock geometry unavailable: {0}")]
    GeometryUnavailable(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
