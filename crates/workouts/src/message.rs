//! Human-readable workout summaries.

use std::fmt;

use serde::Serialize;

use crate::models::WorkoutType;

/// Computed figures for one workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: WorkoutType,
    /// Duration in hours
    pub duration: f64,
    /// Distance in kilometers
    pub distance: f64,
    /// Mean speed in km/h
    pub speed: f64,
    pub calories: f64,
}

impl InfoMessage {
    pub fn message(&self) -> String {
        format_summary(
            self.training_type,
            self.duration,
            self.distance,
            self.speed,
            self.calories,
        )
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Renders the summary line, every figure with three decimals.
pub fn format_summary(
    training_type: WorkoutType,
    duration: f64,
    distance: f64,
    speed: f64,
    calories: f64,
) -> String {
    format!(
        "Тип тренировки: {training_type}; \
         Длительность: {duration:.3} ч.; \
         Дистанция: {distance:.3} км; \
         Ср. скорость: {speed:.3} км/ч; \
         Потрачено ккал: {calories:.3}."
    )
}
