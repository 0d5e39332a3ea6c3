//! Qualification flags and the run verdict.

use serde::Serialize;
use std::fmt;

/// Outcome of a scrutineering run.
///
/// `Display` renders the exact strings the inspection sheet expects:
/// `PASS`, or `CHEAT – Début à {t:.2} s` carrying the elapsed time of the
/// first confirmed episode start.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Verdict {
    Pass,
    Cheat { start_time: f64 },
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS"),
            Verdict::Cheat { start_time } => {
                write!(f, "CHEAT – Début à {:.2} s", start_time)
            }
        }
    }
}

/// Per-row qualification: row i is disqualified when a confirmed episode
/// starts on row i or on row i-1 (trailing two-row window; the first row's
/// window holds only itself).
pub fn qualified_flags(cheat_start: &[bool]) -> Vec<bool> {
    cheat_start
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let prev = i > 0 && cheat_start[i - 1];
            !(start || prev)
        })
        .collect()
}

/// Reduce the confirmed-start flags to a verdict.
///
/// The first chronological match wins; `times` supplies the elapsed-time
/// value reported for it.
pub fn reduce(times: &[f64], cheat_start: &[bool]) -> Verdict {
    match cheat_start.iter().position(|&s| s) {
        Some(i) => Verdict::Cheat {
            start_time: times.get(i).copied().unwrap_or(f64::NAN),
        },
        None => Verdict::Pass,
    }
}
