//! Sensor package dispatch.
//!
//! A package is a workout code plus positional readings. The code selects the
//! workout kind and the readings are unpacked in that kind's field order.

use crate::errors::WorkoutError;
use crate::models::WorkoutType;
use crate::training::{Running, SportsWalking, Swimming, Training};

/// Build the workout described by a sensor package.
///
/// An unknown code is reported and yields `Ok(None)`: no workout exists for
/// that package. Wrong arity or unusable readings are errors.
pub fn read_package(code: &str, data: &[f64]) -> Result<Option<Training>, WorkoutError> {
    let workout_type = match code.parse::<WorkoutType>() {
        Ok(workout_type) => workout_type,
        Err(e) => {
            tracing::error!(code, "{e}");
            return Ok(None);
        }
    };

    build_training(workout_type, data).map(Some)
}

/// Build a workout of a known kind from positional readings.
pub fn build_training(workout_type: WorkoutType, data: &[f64]) -> Result<Training, WorkoutError> {
    let training = match (workout_type, data) {
        (WorkoutType::Running, &[action, duration, weight]) => {
            Running::new(to_count("action", action)?, duration, weight)?.into()
        }
        (WorkoutType::SportsWalking, &[action, duration, weight, height]) => {
            SportsWalking::new(to_count("action", action)?, duration, weight, height)?.into()
        }
        (WorkoutType::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
            Swimming::new(
                to_count("action", action)?,
                duration,
                weight,
                length_pool,
                to_count("count_pool", count_pool)?,
            )?
            .into()
        }
        _ => {
            return Err(WorkoutError::WrongFieldCount {
                workout: workout_type,
                expected: workout_type.field_count(),
                got: data.len(),
            });
        }
    };

    tracing::debug!("Built {} workout from {} fields", workout_type, data.len());
    Ok(training)
}

/// Convert a reading that must be a whole, non-negative count.
fn to_count(field: &'static str, value: f64) -> Result<u32, WorkoutError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidCount { field, value })
    }
}
