//! Error types for the reading engine.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use sb_core::CharmId;

/// Result type for reading operations.
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Errors that can occur while drawing, interpreting, or storing readings.
#[derive(Debug, Error)]
pub enum ReadingError {
    /// More charms were requested than the catalog holds.
    #[error("cannot draw {requested} charms from a catalog of {available}")]
    CatalogExhausted {
        /// Charms requested.
        requested: usize,
        /// Charms available.
        available: usize,
    },

    /// A reading needs at least one charm.
    #[error("a reading needs at least one charm")]
    EmptyDraw,

    /// A chosen charm is not in the catalog.
    #[error("unknown charm: {0}")]
    UnknownCharm(String),

    /// The same charm was chosen twice.
    #[error("charm chosen more than once: {0}")]
    DuplicateCharm(CharmId),

    /// Too many charms were chosen by hand.
    #[error("at most {max} charms may be chosen, got {given}")]
    TooManyCharms {
        /// Upper bound.
        max: usize,
        /// Number supplied.
        given: usize,
    },

    /// The lucky spin was already used today.
    #[error("already spun today; next spin available on {next_available}")]
    SpinCooldown {
        /// First date a spin is allowed again.
        next_available: NaiveDate,
    },

    /// No saved reading has this id.
    #[error("reading not found: {0}")]
    NotFound(Uuid),

    /// No saved reading matches an id prefix, or more than one does.
    #[error("no single reading matches \"{0}\"")]
    NoSuchReading(String),
}
