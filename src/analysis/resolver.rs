//! Column resolution: required-channel checks and the derived Lambda column.
//!
//! Required channels are matched on exact spellings. Lambda channels are the
//! exception - loggers name them freely ("Lambda 1", "WBO2 lambda", ...), so
//! any channel whose name contains "lambda" (case-insensitive) is a source,
//! and the derived column is the per-row mean across all of them.

use strum::{AsRefStr, EnumIter, IntoEnumIterator};

use super::AnalysisError;
use crate::parsers::types::Log;

/// The channels every scrutineering log must carry, in the fixed priority
/// order missing-column errors are reported in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, EnumIter)]
pub enum RequiredChannel {
    #[strum(serialize = "TPS (%)")]
    Tps,
    #[strum(serialize = "Fuel Pressure (psi)")]
    FuelPressure,
    #[strum(serialize = "IAT (°C)")]
    Iat,
    #[strum(serialize = "ECT (°C)")]
    Ect,
    #[strum(serialize = "Time (s)")]
    Time,
}

/// Column indices located by [`resolve`].
#[derive(Clone, Debug)]
pub struct ResolvedColumns {
    pub tps: usize,
    pub fuel_pressure: usize,
    pub iat: usize,
    pub ect: usize,
    pub time: usize,
    /// All lambda source columns, in channel order.
    pub lambda: Vec<usize>,
}

/// Validate channel presence and locate every column the classifier reads.
///
/// Fails with [`AnalysisError::MissingColumn`] naming the first absent
/// required channel (checked in [`RequiredChannel`] declaration order), then
/// with [`AnalysisError::NoLambdaChannel`] if no column name contains
/// "lambda".
pub fn resolve(log: &Log) -> Result<ResolvedColumns, AnalysisError> {
    let mut indices = [0usize; 5];
    for (slot, required) in RequiredChannel::iter().enumerate() {
        let name = required.as_ref();
        match log.find_channel_index(name) {
            Some(idx) => indices[slot] = idx,
            None => return Err(AnalysisError::MissingColumn(name.to_string())),
        }
    }

    let lambda: Vec<usize> = log
        .channels
        .iter()
        .enumerate()
        .filter(|(_, c)| c.name.to_lowercase().contains("lambda"))
        .map(|(i, _)| i)
        .collect();

    if lambda.is_empty() {
        return Err(AnalysisError::NoLambdaChannel);
    }

    Ok(ResolvedColumns {
        tps: indices[0],
        fuel_pressure: indices[1],
        iat: indices[2],
        ect: indices[3],
        time: indices[4],
        lambda,
    })
}

/// Per-row arithmetic mean across the lambda source columns.
///
/// Missing cells are skipped; the result is missing (NaN) only when every
/// source cell in the row is missing, matching how the bench's previous
/// tooling averaged partial sensor dropouts.
pub fn averaged_lambda(log: &Log, lambda_columns: &[usize]) -> Vec<f64> {
    log.data
        .iter()
        .map(|row| {
            let mut sum = 0.0;
            let mut count = 0usize;
            for &col in lambda_columns {
                if let Some(v) = row.get(col) {
                    let v = v.as_f64();
                    if v.is_finite() {
                        sum += v;
                        count += 1;
                    }
                }
            }
            if count == 0 {
                f64::NAN
            } else {
                sum / count as f64
            }
        })
        .collect()
}
