use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::charm::CharmId;

/// Priority tier of a charm combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinationRarity {
    /// Lowest priority.
    Common,
    /// Above common.
    Uncommon,
    /// Eligible to lead a reading.
    Rare,
    /// Highest priority; eligible to lead a reading.
    Legendary,
}

impl CombinationRarity {
    /// Numeric rank; higher is more powerful.
    pub fn rank(self) -> u8 {
        match self {
            Self::Common => 1,
            Self::Uncommon => 2,
            Self::Rare => 3,
            Self::Legendary => 4,
        }
    }

    /// Whether a combination of this tier may lead the reading text.
    pub fn can_lead(self) -> bool {
        matches!(self, Self::Rare | Self::Legendary)
    }
}

impl fmt::Display for CombinationRarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Common => write!(f, "common"),
            Self::Uncommon => write!(f, "uncommon"),
            Self::Rare => write!(f, "rare"),
            Self::Legendary => write!(f, "legendary"),
        }
    }
}

/// What kind of message a combination carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinationCategory {
    /// Momentum and favourable forces.
    Power,
    /// Caution and protection.
    Warning,
    /// Deep change.
    Transformation,
    /// Realization.
    Insight,
    /// When things happen.
    Timing,
}

impl fmt::Display for CombinationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Power => write!(f, "power"),
            Self::Warning => write!(f, "warning"),
            Self::Transformation => write!(f, "transformation"),
            Self::Insight => write!(f, "insight"),
            Self::Timing => write!(f, "timing"),
        }
    }
}

/// A named narrative unlocked when all of its charms appear in one draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharmCombination {
    /// Required charms (at least two, all distinct).
    pub charms: Vec<CharmId>,
    /// Display name.
    pub name: String,
    /// Short summary.
    pub description: String,
    /// Pre-written interpretation paragraph.
    pub interpretation: String,
    /// Priority tier.
    pub rarity: CombinationRarity,
    /// Message kind.
    pub category: CombinationCategory,
}

impl CharmCombination {
    /// Number of required charms.
    pub fn size(&self) -> usize {
        self.charms.len()
    }

    /// Whether this combination requires the given charm.
    pub fn requires(&self, id: &CharmId) -> bool {
        self.charms.contains(id)
    }

    /// Compare by power: rarity first, then number of charms.
    pub fn power_cmp(&self, other: &Self) -> Ordering {
        self.rarity
            .rank()
            .cmp(&other.rarity.rank())
            .then_with(|| self.size().cmp(&other.size()))
    }

    /// First sentence of the interpretation, including its terminator.
    pub fn first_sentence(&self) -> &str {
        let text = self.interpretation.trim();
        match text.find(['.', '!', '?']) {
            Some(idx) => &text[..=idx],
            None => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combo(rarity: CombinationRarity, ids: &[&str]) -> CharmCombination {
        CharmCombination {
            charms: ids.iter().map(|s| CharmId::from(*s)).collect(),
            name: "Test".to_string(),
            description: String::new(),
            interpretation: "First part. Second part!".to_string(),
            rarity,
            category: CombinationCategory::Insight,
        }
    }

    #[test]
    fn rarity_ranks_are_ordered() {
        assert!(CombinationRarity::Legendary.rank() > CombinationRarity::Rare.rank());
        assert!(CombinationRarity::Rare.rank() > CombinationRarity::Uncommon.rank());
        assert!(CombinationRarity::Uncommon.rank() > CombinationRarity::Common.rank());
    }

    #[test]
    fn only_rare_and_legendary_lead() {
        assert!(CombinationRarity::Legendary.can_lead());
        assert!(CombinationRarity::Rare.can_lead());
        assert!(!CombinationRarity::Uncommon.can_lead());
        assert!(!CombinationRarity::Common.can_lead());
    }

    #[test]
    fn power_prefers_rarity_then_size() {
        let rare_pair = combo(CombinationRarity::Rare, &["a", "b"]);
        let rare_triple = combo(CombinationRarity::Rare, &["a", "b", "c"]);
        let legendary_pair = combo(CombinationRarity::Legendary, &["x", "y"]);
        assert_eq!(rare_triple.power_cmp(&rare_pair), Ordering::Greater);
        assert_eq!(legendary_pair.power_cmp(&rare_triple), Ordering::Greater);
        assert_eq!(rare_pair.power_cmp(&rare_pair), Ordering::Equal);
    }

    #[test]
    fn first_sentence_stops_at_terminator() {
        let c = combo(CombinationRarity::Common, &["a", "b"]);
        assert_eq!(c.first_sentence(), "First part.");
        assert!(c.requires(&CharmId::from("a")));
        assert!(!c.requires(&CharmId::from("z")));
    }
}
