use serde::Serialize;
use std::error::Error;

/// A single datalog column.
///
/// The name is kept exactly as it appears in the file header: the analysis
/// layer matches on exact spellings (and a case-insensitive substring for
/// Lambda channels), so no normalization happens here.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Channel {
    pub name: String,
}

impl Channel {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Display unit, read from a trailing parenthesized suffix of the
    /// channel name ("Fuel Pressure (psi)" -> "psi"). Empty if the name
    /// carries no unit.
    pub fn unit(&self) -> &str {
        let name = self.name.trim_end();
        if let Some(stripped) = name.strip_suffix(')') {
            if let Some(open) = stripped.rfind('(') {
                return stripped[open + 1..].trim();
            }
        }
        ""
    }
}

/// A single sample value, stored as f64.
///
/// A NaN payload marks a missing or unparseable cell. Rule evaluation relies
/// on NaN comparisons being false, so missing data fails checks instead of
/// passing them.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Value(f64);

impl Value {
    #[inline]
    pub fn float(value: f64) -> Self {
        Self(value)
    }

    /// A missing/unparseable sample.
    #[inline]
    pub fn missing() -> Self {
        Self(f64::NAN)
    }

    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_missing(&self) -> bool {
        self.0.is_nan()
    }
}

impl Default for Value {
    /// Defaults to missing, not zero: a padded cell must fail threshold
    /// checks rather than look like a valid reading.
    fn default() -> Self {
        Self::missing()
    }
}

/// Parsed datalog structure.
///
/// Row-major: `data[row][column]` aligns with `channels[column]`. Elapsed
/// time is an ordinary channel ("Time (s)"), located by the column resolver
/// rather than split out at parse time, so a log without it is still
/// representable and fails with the proper error during analysis.
#[derive(Clone, Debug, Default)]
pub struct Log {
    pub channels: Vec<Channel>,
    pub data: Vec<Vec<Value>>,
}

impl Log {
    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Find a channel index by exact name.
    pub fn find_channel_index(&self, name: &str) -> Option<usize> {
        self.channels.iter().position(|c| c.name == name)
    }

    /// Extract one column as f64 values (NaN for missing cells).
    pub fn column_values(&self, channel_index: usize) -> Vec<f64> {
        self.data
            .iter()
            .map(|row| {
                row.get(channel_index)
                    .map(|v| v.as_f64())
                    .unwrap_or(f64::NAN)
            })
            .collect()
    }
}

/// Trait for datalog parsers.
pub trait Parseable {
    fn parse(&self, data: &str) -> Result<Log, Box<dyn Error>>;
}
