use thiserror::Error;
use workout_types::ActivityType;

#[derive(Debug, Error, PartialEq)]
pub enum WorkoutError {
    #[error("invalid duration: {0} h, expected a positive number of hours")]
    InvalidDuration(f64),
    #[error("malformed {activity} package: {reason}")]
    MalformedInput {
        activity: ActivityType,
        reason: MalformedReason,
    },
    #[error("unknown activity code `{0}`")]
    UnknownActivityCode(String),
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum MalformedReason {
    #[error("expected {expected} values, got {actual}")]
    WrongArity { expected: usize, actual: usize },
    #[error("missing value for `{0}`")]
    Missing(&'static str),
    #[error("`{field}` is not a number ({value})")]
    NotANumber { field: &'static str, value: f64 },
    #[error("`{field}` must be a whole non-negative count, got {value}")]
    NotACount { field: &'static str, value: f64 },
    #[error("`{field}` must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
}
