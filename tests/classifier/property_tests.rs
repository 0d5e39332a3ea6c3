//! Row-level invariants over a mixed run.
//!
//! These exercise the classifier against a run that alternates between
//! clean samples, short excursions and a sustained violation, and assert
//! the properties that must hold for every row regardless of data.

#[path = "../common/mod.rs"]
mod common;

use common::{run_log, uniform_times, AMBIENT};
use scrutineer::analysis::{classify, Analysis};
use scrutineer::parsers::types::Log;

/// A run mixing idle, clean full-throttle, a short spike and a sustained
/// out-of-band stretch.
fn mixed_run() -> Log {
    let rows = 40;
    let times = uniform_times(rows, 0.1);

    // Idle for 10 rows, then wide open
    let mut tps = vec![15.0; rows];
    for t in tps.iter_mut().skip(10) {
        *t = 100.0;
    }

    // Clean lambda except: a one-row spike at 12, sustained lean 25..35
    let mut lambda = vec![0.85; rows];
    lambda[12] = 1.4;
    for l in lambda.iter_mut().take(35).skip(25) {
        *l = 0.55;
    }

    // Fuel pressure drops out of band while idling (normal, no throttle)
    let mut fuel = vec![340.0; rows];
    for f in fuel.iter_mut().take(8) {
        *f = 150.0;
    }

    run_log(
        times,
        tps,
        vec![lambda],
        fuel,
        vec![22.0; rows],
        vec![24.0; rows],
    )
}

fn analyzed() -> (Log, Analysis) {
    let log = mixed_run();
    let analysis = classify(&log, AMBIENT).unwrap();
    (log, analysis)
}

#[test]
fn test_out_implies_throttle_ok() {
    let (_, analysis) = analyzed();
    for (i, a) in analysis.annotations.iter().enumerate() {
        assert!(!a.out || a.tps_ok, "row {}: OUT without high throttle", i);
    }
}

#[test]
fn test_cheat_start_implies_out() {
    let (_, analysis) = analyzed();
    for (i, a) in analysis.annotations.iter().enumerate() {
        assert!(
            !a.cheat_start || a.out,
            "row {}: confirmed start on an in-bounds row",
            i
        );
    }
}

#[test]
fn test_row_count_preserved() {
    let (log, analysis) = analyzed();
    assert_eq!(analysis.annotations.len(), log.row_count());
}

#[test]
fn test_idempotence() {
    let log = mixed_run();
    let first = classify(&log, AMBIENT).unwrap();
    let second = classify(&log, AMBIENT).unwrap();

    assert_eq!(first.verdict, second.verdict);
    assert_eq!(first.annotations.len(), second.annotations.len());
    for (a, b) in first.annotations.iter().zip(&second.annotations) {
        assert_eq!(a.out, b.out);
        assert_eq!(a.cheat_start, b.cheat_start);
        assert_eq!(a.qualified, b.qualified);
        assert!(a.lambda == b.lambda || (a.lambda.is_nan() && b.lambda.is_nan()));
    }
}

#[test]
fn test_caller_log_is_not_mutated() {
    let log = mixed_run();
    let before: Vec<Vec<f64>> = log
        .data
        .iter()
        .map(|r| r.iter().map(|v| v.as_f64()).collect())
        .collect();
    let channels_before: Vec<String> = log.channels.iter().map(|c| c.name.clone()).collect();

    let _ = classify(&log, AMBIENT).unwrap();

    let after: Vec<Vec<f64>> = log
        .data
        .iter()
        .map(|r| r.iter().map(|v| v.as_f64()).collect())
        .collect();
    let channels_after: Vec<String> = log.channels.iter().map(|c| c.name.clone()).collect();

    assert_eq!(before, after);
    assert_eq!(channels_before, channels_after);
}

#[test]
fn test_accumulator_never_survives_a_false_row() {
    // Reconstruct streak sums from the annotations: within any OUT streak
    // the confirmation flag must be monotonic (once true, stays true until
    // the streak ends), and a fresh streak starts unconfirmed unless its
    // first dt alone crosses the threshold.
    let (_, analysis) = analyzed();

    let mut acc = 0.0;
    for a in &analysis.annotations {
        if a.out {
            acc += a.dt;
            assert_eq!(a.cheat_start, acc >= 0.5);
        } else {
            acc = 0.0;
            assert!(!a.cheat_start);
        }
    }
}

#[test]
fn test_idle_excursions_do_not_flag() {
    let (_, analysis) = analyzed();
    // Rows 0..8 have fuel far out of band but idle throttle
    for a in &analysis.annotations[..8] {
        assert!(!a.fuel_ok);
        assert!(!a.out);
    }
}

#[test]
fn test_one_row_spike_does_not_confirm() {
    let (_, analysis) = analyzed();
    let spike = &analysis.annotations[12];
    assert!(spike.out, "the lambda spike at full throttle is OUT");
    assert!(
        !spike.cheat_start,
        "0.1 s of violation must not confirm an episode"
    );
}

#[test]
fn test_sustained_stretch_confirms_and_disqualifies() {
    let (_, analysis) = analyzed();

    // Lean from row 25; 0.5 s accumulates a few rows in
    let first_start = analysis
        .annotations
        .iter()
        .position(|a| a.cheat_start)
        .expect("sustained stretch must confirm");
    assert!(first_start > 25 && first_start < 35);

    assert!(!analysis.annotations[first_start].qualified);
    assert!(!analysis.annotations[first_start + 1].qualified);
    assert!(analysis.annotations[first_start - 1].qualified);
    assert!(!analysis.is_pass());
}
