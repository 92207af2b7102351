//! The Starboard reading engine.
//!
//! Draws charms from a [`sb_core::Catalog`] with rarity and question
//! weighting, relabels houses from the question, detects charm combinations,
//! and synthesizes the reading text. [`Reader`] ties the stages together and
//! owns the random source; [`ReadingHistory`] keeps saved readings.

pub mod combos;
pub mod config;
pub mod context;
pub mod error;
pub mod fortune;
pub mod history;
pub mod lunar;
pub mod random;
pub mod reader;
pub mod reading;
pub mod select;
pub mod synth;

pub use combos::{combination_insight, find_combinations, most_powerful};
pub use config::ReaderConfig;
pub use context::{ContextTheme, HouseContext, detect_house_context, map_houses};
pub use error::{ReadingError, ReadingResult};
pub use fortune::{Fortune, FortuneCategory, SpinRecord};
pub use history::{HistoryStats, ReadingHistory, ReadingRecord, SpinLog};
pub use random::{RandomSource, ScriptedSource};
pub use reader::Reader;
pub use reading::{DrawnReading, Placement};
pub use select::{DrawContext, select_charms};
pub use synth::{ReadingStyle, Synopsis, SynthesisChances, synthesize};
