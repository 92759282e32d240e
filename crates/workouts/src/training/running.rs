//! Running workout.

use serde::Serialize;

use super::{BaseWorkout, M_IN_KM, Workout};
use crate::errors::WorkoutError;
use crate::models::WorkoutType;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Running {
    base: BaseWorkout,
}

impl Running {
    /// Speed multiplier of the calorie formula.
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    /// Speed offset of the calorie formula.
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            base: BaseWorkout::new(action, duration_h, weight_kg)?,
        })
    }
}

impl Workout for Running {
    const WORKOUT_TYPE: WorkoutType = WorkoutType::Running;

    fn base(&self) -> &BaseWorkout {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()
            - Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.base.weight_kg()
            / M_IN_KM
            * self.base.duration_min()
    }
}
