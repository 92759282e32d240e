//! Run configuration.

use serde::{Deserialize, Serialize};

/// One raw sensor package: a workout code and its positional readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }
}

/// Packages processed by a run, in output order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub packages: Vec<Package>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            packages: vec![
                Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
                Package::new("RUN", [15000.0, 1.0, 75.0]),
                Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sample_order() {
        let codes: Vec<_> = RunConfig::default()
            .packages
            .into_iter()
            .map(|p| p.code)
            .collect();
        assert_eq!(codes, ["SWM", "RUN", "WLK"]);
    }

    #[test]
    fn test_package_from_json() {
        let package: Package =
            serde_json::from_str(r#"{"code": "RUN", "data": [15000, 1, 75]}"#).unwrap();
        assert_eq!(package, Package::new("RUN", [15000.0, 1.0, 75.0]));
    }
}
