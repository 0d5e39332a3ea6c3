//! Temporal persistence filter over the instantaneous violation flag.
//!
//! Accumulating elapsed log time rather than counting rows keeps the delay
//! threshold meaningful across irregular sampling rates: a logger running at
//! 10 Hz and one running at 50 Hz both need the same half second in
//! violation before an episode is confirmed.

/// Inter-row elapsed-time deltas.
///
/// The first row gets 0. A non-increasing or missing timestamp also yields
/// 0 - time never accumulates backwards.
pub fn time_deltas(times: &[f64]) -> Vec<f64> {
    times
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            if i == 0 {
                0.0
            } else {
                let dt = t - times[i - 1];
                if dt.is_finite() && dt > 0.0 {
                    dt
                } else {
                    0.0
                }
            }
        })
        .collect()
}

/// Walk rows in order, accumulating time while OUT holds and resetting the
/// instant it drops. A row is flagged as a confirmed episode start once the
/// accumulated violation time reaches `delay_sec`.
///
/// The reset is unconditional: a single in-bounds row zeroes the
/// accumulator, so isolated spikes shorter than the delay never confirm.
/// Conversely a single OUT row whose `dt` alone reaches the delay confirms
/// immediately - the filter measures sustained real time, not row counts.
pub fn confirm_episodes(dt: &[f64], out: &[bool], delay_sec: f64) -> Vec<bool> {
    debug_assert_eq!(dt.len(), out.len());

    let mut acc = 0.0_f64;
    dt.iter()
        .zip(out.iter())
        .map(|(&dt, &out)| {
            if out {
                acc += dt;
                acc >= delay_sec
            } else {
                acc = 0.0;
                false
            }
        })
        .collect()
}
