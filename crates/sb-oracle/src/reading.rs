//! The output of one cast.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sb_core::{Charm, CharmCombination, House, house_for_position};

use crate::synth::Synopsis;

/// A charm and the house it landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement<'a> {
    /// House ordinal (1-12).
    pub house: u8,
    /// The charm.
    pub charm: &'a Charm,
}

/// A complete reading: drawn charms, houses, combinations, and text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawnReading {
    /// Unique id.
    pub id: Uuid,
    /// When the reading was cast.
    pub created_at: DateTime<Utc>,
    /// The querent's question (may be empty).
    pub question: String,
    /// Drawn charms in draw order.
    pub charms: Vec<Charm>,
    /// The twelve houses, with any question overlay applied.
    pub houses: Vec<House>,
    /// Matched combinations in acceptance order.
    pub combinations: Vec<CharmCombination>,
    /// Synthesized text and its classification.
    pub synopsis: Synopsis,
    /// User-assigned display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DrawnReading {
    /// Where each charm sits on the wheel.
    pub fn placements(&self) -> Vec<Placement<'_>> {
        self.charms
            .iter()
            .enumerate()
            .map(|(idx, charm)| Placement {
                house: house_for_position(idx),
                charm,
            })
            .collect()
    }

    /// The house with the given ordinal.
    pub fn house(&self, ordinal: u8) -> Option<&House> {
        self.houses.iter().find(|h| h.ordinal == ordinal)
    }

    /// The reading text.
    pub fn text(&self) -> &str {
        &self.synopsis.text
    }
}
