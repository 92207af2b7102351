use crate::charm::CharmId;

/// Alias for `Result<T, CatalogError>`.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised when a catalog fails validation.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Two charms share the same id.
    #[error("duplicate charm id: \"{0}\"")]
    DuplicateCharm(CharmId),

    /// The wheel does not have exactly twelve houses.
    #[error("expected 12 houses, found {0}")]
    HouseCount(usize),

    /// A house sits at the wrong position on the wheel.
    #[error("house at position {position} has ordinal {ordinal}")]
    HouseOrdinal {
        /// Expected 1-based position.
        position: usize,
        /// Ordinal found there.
        ordinal: u8,
    },

    /// A combination requires fewer than two distinct charms.
    #[error("combination \"{0}\" needs at least two distinct charms")]
    CombinationTooSmall(String),

    /// A combination refers to a charm the catalog does not contain.
    #[error("combination \"{combination}\" refers to unknown charm \"{charm}\"")]
    UnknownCombinationCharm {
        /// Combination name.
        combination: String,
        /// Unresolved charm id.
        charm: CharmId,
    },
}
