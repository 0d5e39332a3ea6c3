//! Scrutineer - throttle-cheat scrutineering for boat engine test datalogs
//!
//! This library classifies whether a recorded engine test run exhibits a
//! sustained out-of-bounds condition on the throttle-position signal
//! combined with correlated sensors (air-fuel ratio, fuel pressure, intake
//! and coolant temperature relative to ambient).
//!
//! ## Module Structure
//!
//! - [`parsers`] - Datalog file parsing into the tabular [`parsers::Log`]
//! - [`analysis`] - The threshold-and-debounce classifier
//! - [`export`] - Annotated-CSV output for the inspection archive
//!
//! ## Usage
//!
//! ```no_run
//! use scrutineer::analysis::classify;
//! use scrutineer::parsers::{Datalog, Parseable};
//!
//! let contents = std::fs::read_to_string("run.csv").unwrap();
//! let log = Datalog.parse(&contents).unwrap();
//! let analysis = classify(&log, 21.5).unwrap();
//! println!("{}", analysis.verdict);
//! ```

pub mod analysis;
pub mod export;
pub mod parsers;
