//! Scrutineer CLI - analyze one engine test datalog and report the verdict.
//!
//! Usage: `scrutineer <datalog.csv> <ambient-temp-°C> [output.csv] [--json]`
//!
//! Parses the datalog, runs the throttle-cheat classifier against the given
//! ambient temperature, writes the annotated CSV (next to the input unless
//! an output path is given) and prints the verdict - as text, or as a JSON
//! summary with `--json` for callers that post-process the result.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;

use scrutineer::analysis::classify;
use scrutineer::export::write_annotated_csv;
use scrutineer::parsers::{Datalog, Parseable};

#[derive(Serialize)]
struct Summary {
    verdict: String,
    pass: bool,
    rows: usize,
    out_rows: usize,
    disqualified_rows: usize,
    annotated_csv: String,
}

fn usage() -> ! {
    eprintln!("Usage: scrutineer <datalog.csv> <ambient-temp-°C> [output.csv] [--json]");
    std::process::exit(2);
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json_output = args.iter().any(|a| a == "--json");
    args.retain(|a| a != "--json");
    if args.len() < 2 || args.len() > 3 {
        usage();
    }

    let input = PathBuf::from(&args[0]);
    let ambient_temp: f64 = args[1]
        .parse()
        .with_context(|| format!("Invalid ambient temperature: {}", args[1]))?;
    let output = match args.get(2) {
        Some(path) => PathBuf::from(path),
        None => {
            let stem = input
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "datalog".to_string());
            input.with_file_name(format!("{stem}_result.csv"))
        }
    };

    let contents = std::fs::read_to_string(&input)
        .with_context(|| format!("Cannot read datalog '{}'", input.display()))?;

    let log = Datalog
        .parse(&contents)
        .map_err(|e| anyhow!("{e}"))
        .with_context(|| format!("Failed to parse '{}'", input.display()))?;

    let analysis = classify(&log, ambient_temp)?;

    write_annotated_csv(&output, &log, &analysis)
        .with_context(|| format!("Cannot write annotated CSV '{}'", output.display()))?;

    let out_rows = analysis.annotations.iter().filter(|a| a.out).count();
    let disqualified = analysis.annotations.iter().filter(|a| !a.qualified).count();

    if json_output {
        let summary = Summary {
            verdict: analysis.verdict.to_string(),
            pass: analysis.is_pass(),
            rows: analysis.annotations.len(),
            out_rows,
            disqualified_rows: disqualified,
            annotated_csv: output.display().to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", analysis.verdict);
        println!(
            "{} rows analyzed, {} out of bounds, {} disqualified",
            analysis.annotations.len(),
            out_rows,
            disqualified
        );
        println!("Annotated CSV: {}", output.display());
    }

    Ok(())
}
