use thiserror::Error;

use crate::models::WorkoutType;

#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error(
        "Unknown workout type '{code}', expected one of: {codes}",
        codes = WorkoutType::codes().join(", ")
    )]
    UnknownWorkoutType { code: String },

    #[error("{workout} expects {expected} fields, got {got}")]
    WrongFieldCount {
        workout: WorkoutType,
        expected: usize,
        got: usize,
    },

    #[error("Division by zero: {field} must not be zero")]
    DivisionByZero { field: &'static str },

    /// A count reading (`action`, `count_pool`) that is not a whole,
    /// non-negative number. Fractional counts are rejected rather than
    /// carried through the formulas as-is.
    #[error("Invalid count for {field}: {value}")]
    InvalidCount { field: &'static str, value: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
