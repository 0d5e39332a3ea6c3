pub mod datalog;
pub mod types;

pub use datalog::Datalog;
pub use types::{Channel, Log, Parseable, Value};
