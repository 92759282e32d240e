//! Swimming workout.
//!
//! Mean speed comes from the pool geometry (`length_pool * count_pool`)
//! rather than from the stroke count, so [`Workout::distance_km`] and
//! [`Workout::mean_speed_kmh`] are independent for swimming.

use serde::Serialize;

use super::{BaseWorkout, M_IN_KM, Workout};
use crate::errors::WorkoutError;
use crate::models::WorkoutType;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swimming {
    base: BaseWorkout,
    /// Pool length in meters.
    length_pool: f64,
    /// Number of pool lengths swum.
    count_pool: u32,
}

impl Swimming {
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> Result<Self, WorkoutError> {
        Ok(Self {
            base: BaseWorkout::new(action, duration_h, weight_kg)?,
            length_pool,
            count_pool,
        })
    }

    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    pub fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

impl Workout for Swimming {
    const WORKOUT_TYPE: WorkoutType = WorkoutType::Swimming;
    const STEP_LENGTH_M: f64 = 1.38;

    fn base(&self) -> &BaseWorkout {
        &self.base
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.base.duration_h()
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight_kg()
    }
}
