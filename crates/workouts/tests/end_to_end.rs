//! End-to-end tests: sensor package in, summary line out.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use workouts::config::{Package, RunConfig};
use workouts::dispatch::read_package;
use workouts::models::WorkoutType;
use workouts::{RunReport, run};

/// Log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn summary_line(code: &str, data: &[f64]) -> String {
    read_package(code, data)
        .expect("package should be valid")
        .expect("code should be known")
        .show_training_info()
        .message()
}

#[test]
fn test_running_scenario() {
    let info = read_package("RUN", &[15000.0, 1.0, 75.0])
        .unwrap()
        .unwrap()
        .show_training_info();

    assert_eq!(info.training_type, WorkoutType::Running);
    assert!((info.distance - 9.75).abs() < 1e-9);
    assert!((info.speed - 9.75).abs() < 1e-9);
    assert!((info.calories - 699.75).abs() < 1e-9);
    assert_eq!(
        info.message(),
        "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
         Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
    );
}

#[test]
fn test_swimming_scenario() {
    assert_eq!(
        summary_line("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
         Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
    );
}

#[test]
fn test_walking_scenario() {
    assert_eq!(
        summary_line("WLK", &[9000.0, 1.0, 75.0, 180.0]),
        "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
         Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500."
    );
}

#[test]
fn test_walking_ratio_is_floored_from_remainder() {
    let info = read_package("WLK", &[1000.0, 0.65, 70.0, 0.1])
        .unwrap()
        .unwrap()
        .show_training_info();

    assert!((info.calories - 808.08).abs() < 1e-9);
    assert!(info.message().ends_with("Потрачено ккал: 808.080."));
}

#[test]
fn test_unknown_code_is_reported() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || {
        read_package("XYZ", &[1.0, 1.0, 1.0])
    });

    assert!(result.unwrap().is_none());
    let output = logs.contents();
    assert!(output.contains("ERROR"));
    assert!(output.contains("Unknown workout type 'XYZ'"));
    assert!(output.contains("SWM, RUN, WLK"));
}

#[test]
fn test_unknown_code_prints_nothing() {
    let packages = [Package::new("XYZ", [15000.0, 1.0, 75.0])];
    let mut out = Vec::new();

    let report = run(&packages, &mut out).unwrap();

    assert_eq!(report, RunReport { printed: 0, skipped: 1 });
    assert!(out.is_empty());
}

#[test]
fn test_default_run_output() {
    let mut out = Vec::new();
    let report = run(&RunConfig::default().packages, &mut out).unwrap();

    assert_eq!(report, RunReport { printed: 3, skipped: 0 });
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
         Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.\n\
         Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
         Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.\n\
         Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
         Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.\n"
    );
}
