//! Common test utilities shared across all test modules
//!
//! Provides synthetic run builders and float comparison helpers.

use scrutineer::parsers::types::{Channel, Log, Value};

/// Build a log from named columns. All columns must share the same length.
pub fn log_from_columns(columns: &[(&str, Vec<f64>)]) -> Log {
    let rows = columns.first().map(|(_, v)| v.len()).unwrap_or(0);
    for (name, values) in columns {
        assert_eq!(
            values.len(),
            rows,
            "column '{}' length mismatch in test fixture",
            name
        );
    }

    Log {
        channels: columns.iter().map(|(n, _)| Channel::new(*n)).collect(),
        data: (0..rows)
            .map(|r| columns.iter().map(|(_, v)| Value::float(v[r])).collect())
            .collect(),
    }
}

/// Create a time column with uniform spacing starting at 0.
pub fn uniform_times(count: usize, interval: f64) -> Vec<f64> {
    (0..count).map(|i| i as f64 * interval).collect()
}

/// Build a full run log with every required channel.
///
/// All vectors must share the same length; add extra lambda channels by
/// passing more than one entry in `lambdas`.
pub fn run_log(
    times: Vec<f64>,
    tps: Vec<f64>,
    lambdas: Vec<Vec<f64>>,
    fuel: Vec<f64>,
    iat: Vec<f64>,
    ect: Vec<f64>,
) -> Log {
    let mut columns: Vec<(String, Vec<f64>)> = vec![
        ("TPS (%)".to_string(), tps),
        ("Fuel Pressure (psi)".to_string(), fuel),
        ("IAT (°C)".to_string(), iat),
        ("ECT (°C)".to_string(), ect),
        ("Time (s)".to_string(), times),
    ];
    for (i, lambda) in lambdas.into_iter().enumerate() {
        columns.push((format!("Lambda {}", i + 1), lambda));
    }

    let borrowed: Vec<(&str, Vec<f64>)> = columns
        .iter()
        .map(|(n, v)| (n.as_str(), v.clone()))
        .collect();
    log_from_columns(&borrowed)
}

/// A run where every sensor sits comfortably inside its band at wide-open
/// throttle, sampled every `interval` seconds.
pub fn clean_run(rows: usize, interval: f64) -> Log {
    run_log(
        uniform_times(rows, interval),
        vec![100.0; rows],
        vec![vec![0.85; rows]],
        vec![340.0; rows],
        vec![20.0; rows],
        vec![20.0; rows],
    )
}

/// Ambient temperature matching [`clean_run`]'s sensor values.
pub const AMBIENT: f64 = 20.0;

/// Float comparison helpers for testing
pub mod float_cmp {
    /// Check if two floats are approximately equal within a tolerance
    pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    /// Assert that two floats are approximately equal
    pub fn assert_approx_eq(a: f64, b: f64, tolerance: f64) {
        assert!(
            approx_eq(a, b, tolerance),
            "Values not approximately equal: {} vs {} (tolerance: {})",
            a,
            b,
            tolerance
        );
    }

    /// Default tolerance for float comparisons (0.0001)
    pub const DEFAULT_TOLERANCE: f64 = 0.0001;
}
