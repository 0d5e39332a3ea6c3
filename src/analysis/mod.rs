//! Throttle-cheat classification over a parsed datalog.
//!
//! The classifier is a fixed pipeline of row-wise passes:
//!
//! 1. [`resolver`] - locate the required channels and derive the averaged
//!    Lambda column
//! 2. [`rules`] - per-row threshold checks combined into one instantaneous
//!    violation flag (OUT)
//! 3. [`debounce`] - temporal persistence filter turning OUT streaks into
//!    confirmed episode starts
//! 4. [`verdict`] - per-row qualification flags and the run verdict
//!
//! Each pass is a pure function of its inputs; nothing is retained between
//! calls and the caller's [`Log`] is never mutated.

pub mod debounce;
pub mod resolver;
pub mod rules;
pub mod verdict;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parsers::types::Log;

pub use verdict::Verdict;

/// Errors that can occur during classification.
///
/// These are structural problems with the input table. Row-level data
/// quality (non-numeric cells, gaps) never raises - it degrades into
/// failing rule outcomes instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// A required channel is absent from the datalog.
    #[error("Colonne manquante : {0}")]
    MissingColumn(String),

    /// No channel name contains "lambda" (case-insensitive).
    #[error("Aucune colonne Lambda détectée dans le fichier")]
    NoLambdaChannel,
}

/// Classification thresholds.
///
/// Defaults are the homologation values used by the scrutineering bench;
/// they are not operator-tunable in normal use.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheatConfig {
    /// Minimum throttle % for a violation to be considered at all.
    pub tps_cheat_min: f64,
    /// Acceptable air-fuel-ratio band, inclusive.
    pub lambda_range: (f64, f64),
    /// Acceptable fuel-pressure band (psi), inclusive.
    pub fuel_range: (f64, f64),
    /// Degrees added to ambient to form the intake/coolant ceiling.
    pub ambient_offset: f64,
    /// Minimum sustained violation duration before an episode is confirmed.
    pub cheat_delay_sec: f64,
}

impl Default for CheatConfig {
    fn default() -> Self {
        Self {
            tps_cheat_min: 97.0,
            lambda_range: (0.80, 0.92),
            fuel_range: (317.0, 372.0),
            ambient_offset: 15.0,
            cheat_delay_sec: 0.5,
        }
    }
}

/// Derived per-row results, one per input row, in input order.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct RowAnnotation {
    /// Averaged Lambda value (NaN when every source cell was missing).
    pub lambda: f64,
    pub tps_ok: bool,
    pub lambda_ok: bool,
    pub fuel_ok: bool,
    pub iat_ok: bool,
    pub ect_ok: bool,
    /// Instantaneous violation: high throttle with some other rule failing.
    pub out: bool,
    /// Elapsed-time delta to the previous row (0 for the first row and for
    /// non-increasing time).
    pub dt: f64,
    /// First row at which the current violation streak crossed the delay
    /// threshold.
    pub cheat_start: bool,
    /// False on a confirmed-start row and on the row immediately after it.
    pub qualified: bool,
}

/// Result of one classification call.
#[derive(Clone, Debug)]
pub struct Analysis {
    /// One annotation per input row, order preserved.
    pub annotations: Vec<RowAnnotation>,
    pub verdict: Verdict,
}

impl Analysis {
    pub fn is_pass(&self) -> bool {
        matches!(self.verdict, Verdict::Pass)
    }
}

/// Classify a run with the standard scrutineering thresholds.
pub fn classify(log: &Log, ambient_temp: f64) -> Result<Analysis, AnalysisError> {
    classify_with(log, ambient_temp, &CheatConfig::default())
}

/// Classify a run with explicit thresholds.
pub fn classify_with(
    log: &Log,
    ambient_temp: f64,
    config: &CheatConfig,
) -> Result<Analysis, AnalysisError> {
    let columns = resolver::resolve(log)?;

    let lambda = resolver::averaged_lambda(log, &columns.lambda);
    let tps = log.column_values(columns.tps);
    let fuel = log.column_values(columns.fuel_pressure);
    let iat = log.column_values(columns.iat);
    let ect = log.column_values(columns.ect);
    let times = log.column_values(columns.time);

    let flags = rules::evaluate(&tps, &lambda, &fuel, &iat, &ect, ambient_temp, config);

    let dt = debounce::time_deltas(&times);
    let out: Vec<bool> = flags.iter().map(|f| f.out).collect();
    let cheat_start = debounce::confirm_episodes(&dt, &out, config.cheat_delay_sec);

    let qualified = verdict::qualified_flags(&cheat_start);
    let verdict = verdict::reduce(&times, &cheat_start);

    let annotations = (0..log.row_count())
        .map(|i| RowAnnotation {
            lambda: lambda[i],
            tps_ok: flags[i].tps_ok,
            lambda_ok: flags[i].lambda_ok,
            fuel_ok: flags[i].fuel_ok,
            iat_ok: flags[i].iat_ok,
            ect_ok: flags[i].ect_ok,
            out: flags[i].out,
            dt: dt[i],
            cheat_start: cheat_start[i],
            qualified: qualified[i],
        })
        .collect();

    Ok(Analysis {
        annotations,
        verdict,
    })
}
