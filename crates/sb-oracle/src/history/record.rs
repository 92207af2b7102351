//! The persisted shape of a reading.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sb_core::{CharmId, House};

use crate::reading::DrawnReading;

/// A saved reading, flattened for storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingRecord {
    /// Reading id.
    pub id: Uuid,
    /// When the reading was cast.
    pub date: DateTime<Utc>,
    /// The question asked.
    pub question: String,
    /// Drawn charm ids in draw order.
    pub charms: Vec<CharmId>,
    /// Houses as shown, including overlays.
    pub houses: Vec<House>,
    /// Names of matched combinations.
    #[serde(default)]
    pub combinations: Vec<String>,
    /// Reading text.
    pub interpretation: String,
    /// Display name.
    pub name: String,
}

impl ReadingRecord {
    /// Flatten a drawn reading. Unnamed readings are named after their date.
    pub fn from_reading(reading: &DrawnReading) -> Self {
        let name = reading
            .name
            .clone()
            .unwrap_or_else(|| format!("Reading on {}", reading.created_at.format("%Y-%m-%d")));
        Self {
            id: reading.id,
            date: reading.created_at,
            question: reading.question.clone(),
            charms: reading.charms.iter().map(|c| c.id.clone()).collect(),
            houses: reading.houses.clone(),
            combinations: reading.combinations.iter().map(|c| c.name.clone()).collect(),
            interpretation: reading.synopsis.text.clone(),
            name,
        }
    }

    /// First eight characters of the id, for display.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}
