use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier for a charm (kebab-case, e.g. `"tipping-point"`).
///
/// Every lookup, combination requirement, and persisted reading refers to
/// charms through this id. The display name is presentation only.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharmId(String);

impl CharmId {
    /// Create an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CharmId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// How often a charm turns up in a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharmRarity {
    /// Drawn at full weight.
    Common,
    /// Drawn at full weight; reserved for catalog extensions.
    Uncommon,
    /// Drawn at reduced weight, boosted on new and full moons.
    Rare,
}

impl CharmRarity {
    /// Parse a rarity from user input.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "common" => Some(Self::Common),
            "uncommon" => Some(Self::Uncommon),
            "rare" => Some(Self::Rare),
            _ => None,
        }
    }
}

impl fmt::Display for CharmRarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Common => write!(f, "common"),
            Self::Uncommon => write!(f, "uncommon"),
            Self::Rare => write!(f, "rare"),
        }
    }
}

/// The life theme a charm speaks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharmCategory {
    /// Personal development and nurturing.
    Growth,
    /// Obstacles and tests.
    Challenges,
    /// Openings and favourable chances.
    Opportunities,
    /// Passages from one state to another.
    Transitions,
    /// Realizations and understanding.
    Insights,
}

impl CharmCategory {
    /// All categories in canonical order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Growth,
            Self::Challenges,
            Self::Opportunities,
            Self::Transitions,
            Self::Insights,
        ]
    }

    /// Parse a category from user input (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.to_string().to_lowercase() == lower)
    }
}

impl fmt::Display for CharmCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Growth => write!(f, "Growth"),
            Self::Challenges => write!(f, "Challenges"),
            Self::Opportunities => write!(f, "Opportunities"),
            Self::Transitions => write!(f, "Transitions"),
            Self::Insights => write!(f, "Insights"),
        }
    }
}

/// A symbolic token that can be drawn in a reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charm {
    /// Stable identifier.
    pub id: CharmId,
    /// Display name.
    pub name: String,
    /// One-line meaning.
    pub description: String,
    /// Draw rarity.
    pub rarity: CharmRarity,
    /// Life theme.
    pub category: CharmCategory,
}

impl Charm {
    /// Create a charm.
    pub fn new(
        id: impl Into<CharmId>,
        name: impl Into<String>,
        description: impl Into<String>,
        rarity: CharmRarity,
        category: CharmCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            rarity,
            category,
        }
    }

    /// Whether this charm is rare.
    pub fn is_rare(&self) -> bool {
        self.rarity == CharmRarity::Rare
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charm_id_serializes_as_plain_string() {
        let id = CharmId::new("gut-check");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"gut-check\"");
        assert_eq!(id.to_string(), "gut-check");
    }

    #[test]
    fn rarity_parse_and_display() {
        assert_eq!(CharmRarity::parse("RARE"), Some(CharmRarity::Rare));
        assert_eq!(CharmRarity::parse(" common "), Some(CharmRarity::Common));
        assert_eq!(CharmRarity::parse("legendary"), None);
        assert_eq!(CharmRarity::Uncommon.to_string(), "uncommon");
    }

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!(CharmCategory::parse("growth"), Some(CharmCategory::Growth));
        assert_eq!(
            CharmCategory::parse("TRANSITIONS"),
            Some(CharmCategory::Transitions)
        );
        assert_eq!(CharmCategory::parse("luck"), None);
        assert_eq!(CharmCategory::all().len(), 5);
    }

    #[test]
    fn rarity_serializes_snake_case() {
        let charm = Charm::new(
            "void",
            "Void",
            "Complete emptiness",
            CharmRarity::Rare,
            CharmCategory::Challenges,
        );
        let json = serde_json::to_string(&charm).unwrap();
        assert!(json.contains("\"rarity\":\"rare\""));
        assert!(charm.is_rare());
    }
}
