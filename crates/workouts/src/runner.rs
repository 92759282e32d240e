use std::io::Write;

use crate::config::Package;
use crate::dispatch::read_package;
use crate::errors::WorkoutError;

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Summary lines written.
    pub printed: usize,
    /// Packages with an unknown code.
    pub skipped: usize,
}

/// Process packages in order, writing one summary line per workout.
///
/// Packages with an unknown code produce no line and are counted as skipped.
/// Any other error stops the run before later packages are read.
pub fn run<W: Write>(packages: &[Package], out: &mut W) -> Result<RunReport, WorkoutError> {
    tracing::info!("Processing {} packages", packages.len());

    let mut report = RunReport::default();
    for package in packages {
        let Some(training) = read_package(&package.code, &package.data)? else {
            report.skipped += 1;
            continue;
        };

        let info = training.show_training_info();
        tracing::debug!(
            "{}: distance {:.3} km, speed {:.3} km/h, calories {:.3}",
            info.training_type,
            info.distance,
            info.speed,
            info.calories
        );
        writeln!(out, "{}", info.message())?;
        report.printed += 1;
    }

    tracing::info!(
        "Run complete: {} printed, {} skipped",
        report.printed,
        report.skipped
    );
    Ok(report)
}
