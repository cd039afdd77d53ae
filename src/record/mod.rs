mod components;

pub use components::{Record, RecordSummaryLine};
