//! Sports walking workout.

use serde::Serialize;

use super::{BaseWorkout, Workout};
use crate::errors::WorkoutError;
use crate::models::WorkoutType;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SportsWalking {
    base: BaseWorkout,
    /// Athlete height, in the unit the sensor reports.
    height: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        height: f64,
    ) -> Result<Self, WorkoutError> {
        if height == 0.0 {
            return Err(WorkoutError::DivisionByZero { field: "height" });
        }
        Ok(Self {
            base: BaseWorkout::new(action, duration_h, weight_kg)?,
            height,
        })
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Workout for SportsWalking {
    const WORKOUT_TYPE: WorkoutType = WorkoutType::SportsWalking;

    fn base(&self) -> &BaseWorkout {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        // The speed/height term is quantized to whole units.
        let speed_height_ratio = floor_div(self.mean_speed_kmh().powi(2), self.height);
        (Self::CALORIES_WEIGHT_MULTIPLIER * self.base.weight_kg()
            + speed_height_ratio * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * self.base.weight_kg())
            * self.base.duration_min()
    }
}

/// Floored quotient of `x / y`, derived from the remainder rather than the
/// rounded quotient so that e.g. `floor_div(1.0, 0.1)` is `9.0`, not `10.0`.
fn floor_div(x: f64, y: f64) -> f64 {
    let rem = x % y;
    let mut div = (x - rem) / y;
    if rem != 0.0 && (y < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(x / y);
    }
    let floor = div.floor();
    if div - floor > 0.5 { floor + 1.0 } else { floor }
}
