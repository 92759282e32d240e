//! Workout formulas.
//!
//! Each workout kind turns its sensor readings into distance, mean speed and
//! spent calories. Kinds share distance and speed defaults through the
//! [`Workout`] trait; the calorie formula has no default and must be supplied
//! by every kind. [`Training`] is the closed set of kinds the dispatcher
//! produces.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use serde::Serialize;

use crate::errors::WorkoutError;
use crate::message::InfoMessage;
use crate::models::WorkoutType;

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_HOUR: f64 = 60.0;

/// Readings common to every workout kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BaseWorkout {
    /// Steps or strokes counted by the sensor.
    action: u32,
    /// Duration in hours.
    duration_h: f64,
    /// Athlete weight in kilograms.
    weight_kg: f64,
}

impl BaseWorkout {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        if duration_h == 0.0 {
            return Err(WorkoutError::DivisionByZero { field: "duration" });
        }
        Ok(Self {
            action,
            duration_h,
            weight_kg,
        })
    }

    pub fn action(&self) -> u32 {
        self.action
    }

    pub fn duration_h(&self) -> f64 {
        self.duration_h
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Duration in minutes, the time basis of the calorie formulas.
    pub fn duration_min(&self) -> f64 {
        self.duration_h * MIN_IN_HOUR
    }
}

/// Formulas shared by all workout kinds.
pub trait Workout {
    const WORKOUT_TYPE: WorkoutType;

    /// Distance covered by one action, in meters.
    const STEP_LENGTH_M: f64 = 0.65;

    fn base(&self) -> &BaseWorkout;

    /// Distance in kilometers.
    fn distance_km(&self) -> f64 {
        f64::from(self.base().action()) * Self::STEP_LENGTH_M / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.base().duration_h()
    }

    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: Self::WORKOUT_TYPE,
            duration: self.base().duration_h(),
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}

/// A workout of one of the supported kinds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Training {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Training {
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            Training::Running(_) => Running::WORKOUT_TYPE,
            Training::SportsWalking(_) => SportsWalking::WORKOUT_TYPE,
            Training::Swimming(_) => Swimming::WORKOUT_TYPE,
        }
    }

    pub fn base(&self) -> &BaseWorkout {
        match self {
            Training::Running(w) => w.base(),
            Training::SportsWalking(w) => w.base(),
            Training::Swimming(w) => w.base(),
        }
    }

    pub fn distance_km(&self) -> f64 {
        match self {
            Training::Running(w) => w.distance_km(),
            Training::SportsWalking(w) => w.distance_km(),
            Training::Swimming(w) => w.distance_km(),
        }
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Training::Running(w) => w.mean_speed_kmh(),
            Training::SportsWalking(w) => w.mean_speed_kmh(),
            Training::Swimming(w) => w.mean_speed_kmh(),
        }
    }

    pub fn spent_calories(&self) -> f64 {
        match self {
            Training::Running(w) => w.spent_calories(),
            Training::SportsWalking(w) => w.spent_calories(),
            Training::Swimming(w) => w.spent_calories(),
        }
    }

    pub fn show_training_info(&self) -> InfoMessage {
        match self {
            Training::Running(w) => w.show_training_info(),
            Training::SportsWalking(w) => w.show_training_info(),
            Training::Swimming(w) => w.show_training_info(),
        }
    }
}

impl From<Running> for Training {
    fn from(w: Running) -> Self {
        Training::Running(w)
    }
}

impl From<SportsWalking> for Training {
    fn from(w: SportsWalking) -> Self {
        Training::SportsWalking(w)
    }
}

impl From<Swimming> for Training {
    fn from(w: Swimming) -> Self {
        Training::Swimming(w)
    }
}
