//! Workout statistics from raw sensor packages.
//!
//! A package is a workout code (`RUN`, `WLK`, `SWM`) plus positional sensor
//! readings. The dispatcher turns it into a [`training::Training`], which
//! computes distance, mean speed and spent calories and renders them as a
//! one-line summary.
//!
//! ```rust,ignore
//! use workouts::dispatch::read_package;
//!
//! if let Some(training) = read_package("RUN", &[15000.0, 1.0, 75.0])? {
//!     println!("{}", training.show_training_info());
//! }
//! ```

pub mod config;
pub mod dispatch;
pub mod errors;
pub mod message;
pub mod models;
pub mod runner;
pub mod training;

pub use runner::{RunReport, run};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{Package, RunConfig};
    pub use crate::dispatch::{build_training, read_package};
    pub use crate::errors::WorkoutError;
    pub use crate::message::{InfoMessage, format_summary};
    pub use crate::models::WorkoutType;
    pub use crate::runner::{RunReport, run};
    pub use crate::training::{
        BaseWorkout, Running, SportsWalking, Swimming, Training, Workout,
    };
}
