use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::WorkoutError;

/// The closed set of workout kinds a sensor package can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WorkoutType {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutType {
    /// Every kind, in dispatcher table order.
    pub const ALL: [WorkoutType; 3] = [
        WorkoutType::Swimming,
        WorkoutType::Running,
        WorkoutType::SportsWalking,
    ];

    /// Three-letter code used by sensor packages.
    pub fn code(self) -> &'static str {
        match self {
            WorkoutType::Running => "RUN",
            WorkoutType::SportsWalking => "WLK",
            WorkoutType::Swimming => "SWM",
        }
    }

    /// Canonical type name shown in summaries.
    pub fn name(self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::SportsWalking => "SportsWalking",
            WorkoutType::Swimming => "Swimming",
        }
    }

    /// Positional field layout of a package for this kind.
    pub fn field_names(self) -> &'static [&'static str] {
        match self {
            WorkoutType::Running => &["action", "duration", "weight"],
            WorkoutType::SportsWalking => &["action", "duration", "weight", "height"],
            WorkoutType::Swimming => &[
                "action",
                "duration",
                "weight",
                "length_pool",
                "count_pool",
            ],
        }
    }

    pub fn field_count(self) -> usize {
        self.field_names().len()
    }

    pub fn codes() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.code()).collect()
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WorkoutType {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.code() == code)
            .ok_or_else(|| WorkoutError::UnknownWorkoutType {
                code: code.to_string(),
            })
    }
}
