mod components;

pub use components::{HistoryList, HistoryTable};
