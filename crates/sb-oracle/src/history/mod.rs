//! Saved readings and spins.

pub mod log;
pub mod record;
pub mod spins;
pub mod stats;

pub use log::ReadingHistory;
pub use record::ReadingRecord;
pub use spins::SpinLog;
pub use stats::HistoryStats;
