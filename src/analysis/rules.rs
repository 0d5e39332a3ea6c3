//! Per-row rule evaluation.
//!
//! A violation is only meaningful while the operator demands high throttle;
//! at idle or part throttle, sensor excursions are normal running conditions
//! and must not trigger detection. Hence OUT requires the throttle rule to
//! hold AND at least one other rule to fail.
//!
//! All comparisons are inclusive at the band edges. NaN (missing data)
//! compares false, so a missing sample fails its rule rather than passing.

use serde::Serialize;

use super::CheatConfig;

/// Outcome of the five independent checks for one row, plus the combined
/// instantaneous-violation flag.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct RuleFlags {
    pub tps_ok: bool,
    pub lambda_ok: bool,
    pub fuel_ok: bool,
    pub iat_ok: bool,
    pub ect_ok: bool,
    pub out: bool,
}

/// Evaluate one row.
pub fn evaluate_row(
    tps: f64,
    lambda: f64,
    fuel: f64,
    iat: f64,
    ect: f64,
    ambient_temp: f64,
    config: &CheatConfig,
) -> RuleFlags {
    let temp_limit = ambient_temp + config.ambient_offset;

    let tps_ok = tps >= config.tps_cheat_min;
    let lambda_ok = lambda >= config.lambda_range.0 && lambda <= config.lambda_range.1;
    let fuel_ok = fuel >= config.fuel_range.0 && fuel <= config.fuel_range.1;
    let iat_ok = iat <= temp_limit;
    let ect_ok = ect <= temp_limit;

    let out = tps_ok && !(lambda_ok && fuel_ok && iat_ok && ect_ok);

    RuleFlags {
        tps_ok,
        lambda_ok,
        fuel_ok,
        iat_ok,
        ect_ok,
        out,
    }
}

/// Evaluate every row. All slices are one value per row, same length.
pub fn evaluate(
    tps: &[f64],
    lambda: &[f64],
    fuel: &[f64],
    iat: &[f64],
    ect: &[f64],
    ambient_temp: f64,
    config: &CheatConfig,
) -> Vec<RuleFlags> {
    (0..tps.len())
        .map(|i| {
            evaluate_row(
                tps[i],
                lambda[i],
                fuel[i],
                iat[i],
                ect[i],
                ambient_temp,
                config,
            )
        })
        .collect()
}
