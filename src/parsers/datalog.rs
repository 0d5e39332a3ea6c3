//! Plain CSV datalog parser.
//!
//! Engine test benches export flat CSV: one header line naming the sensor
//! channels, then one row per sample. Two dialects are seen in the wild:
//! comma-separated (most loggers) and semicolon-separated (European
//! exports), so the delimiter is detected from the header line.
//!
//! Data quality is handled at the cell level: a cell that does not parse as
//! a number becomes a missing [`Value`], and short rows are padded with
//! missing values. Only structural problems (no header line at all) are
//! parse errors; noisy real-world logs must stay analyzable.

use rayon::prelude::*;
use regex::Regex;
use std::error::Error;

use super::types::{Channel, Log, Parseable, Value};

/// Plain CSV datalog parser
pub struct Datalog;

impl Datalog {
    /// Detect if content looks like a flat CSV datalog: a delimited header
    /// line whose cells are channel names rather than numbers.
    pub fn detect(contents: &str) -> bool {
        let Some(header) = contents.lines().find(|l| !l.trim().is_empty()) else {
            return false;
        };
        let delimiter = Self::detect_delimiter(header);
        let numeric = Regex::new(r"^-?(\d+\.?\d*|\.\d+)([eE][-+]?\d+)?$")
            .expect("Failed to compile regex");

        let mut cells = header.split(delimiter).map(str::trim).peekable();
        if cells.peek().is_none() {
            return false;
        }
        // A header line has at least one non-numeric, non-empty cell
        cells.any(|c| !c.is_empty() && !numeric.is_match(c))
    }

    /// Pick the delimiter from the header line: semicolon exports never use
    /// commas between fields, so a semicolon wins when present.
    fn detect_delimiter(header: &str) -> char {
        if header.contains(';') {
            ';'
        } else {
            ','
        }
    }

    /// Strip surrounding quotes and whitespace from a cell.
    fn clean_cell(cell: &str) -> &str {
        cell.trim().trim_matches('"').trim()
    }
}

impl Parseable for Datalog {
    fn parse(&self, file_contents: &str) -> Result<Log, Box<dyn Error>> {
        let mut lines = file_contents.lines().filter(|l| !l.trim().is_empty());

        let header = lines
            .next()
            .ok_or("Datalog is empty - no header line found")?;
        let delimiter = Self::detect_delimiter(header);

        let channels: Vec<Channel> = header
            .split(delimiter)
            .map(|name| Channel::new(Self::clean_cell(name)))
            .collect();

        if channels.iter().all(|c| c.name.is_empty()) {
            return Err("Datalog header contains no channel names".into());
        }

        let data_lines: Vec<&str> = lines.collect();

        // Parse rows in parallel; collect preserves input order
        let channel_count = channels.len();
        let data: Vec<Vec<Value>> = data_lines
            .par_iter()
            .map(|line| {
                let mut row: Vec<Value> = line
                    .split(delimiter)
                    .take(channel_count)
                    .map(|cell| {
                        Self::clean_cell(cell)
                            .parse::<f64>()
                            .map(Value::float)
                            .unwrap_or_else(|_| Value::missing())
                    })
                    .collect();
                // Short rows pad out with missing so columns stay aligned
                row.resize(channel_count, Value::missing());
                row
            })
            .collect();

        tracing::info!(
            "Parsed datalog: {} channels, {} rows (delimiter '{}')",
            channels.len(),
            data.len(),
            delimiter
        );

        Ok(Log { channels, data })
    }
}
