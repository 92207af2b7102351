use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::charm::{Charm, CharmId};
use crate::combination::CharmCombination;
use crate::error::{CatalogError, CatalogResult};
use crate::house::{HOUSE_COUNT, House};
use crate::tables;

/// The full set of static tables a reading draws from.
///
/// Charms are indexed by [`CharmId`]; names are resolved case-insensitively
/// for user input only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CatalogTables", into = "CatalogTables")]
pub struct Catalog {
    charms: Vec<Charm>,
    houses: Vec<House>,
    combinations: Vec<CharmCombination>,
    by_id: HashMap<CharmId, usize>,
}

/// Serialized form of a [`Catalog`]; validated on the way in.
#[derive(Serialize, Deserialize)]
struct CatalogTables {
    charms: Vec<Charm>,
    houses: Vec<House>,
    combinations: Vec<CharmCombination>,
}

impl TryFrom<CatalogTables> for Catalog {
    type Error = CatalogError;

    fn try_from(tables: CatalogTables) -> CatalogResult<Self> {
        Self::new(tables.charms, tables.houses, tables.combinations)
    }
}

impl From<Catalog> for CatalogTables {
    fn from(catalog: Catalog) -> Self {
        Self {
            charms: catalog.charms,
            houses: catalog.houses,
            combinations: catalog.combinations,
        }
    }
}

// The id index is derived from `charms`.
impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        self.charms == other.charms
            && self.houses == other.houses
            && self.combinations == other.combinations
    }
}

impl Catalog {
    /// Build a catalog from custom tables, validating them first.
    pub fn new(
        charms: Vec<Charm>,
        houses: Vec<House>,
        combinations: Vec<CharmCombination>,
    ) -> CatalogResult<Self> {
        let catalog = Self::from_parts(charms, houses, combinations);
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in catalog: 72 charms, 12 houses, 32 combinations.
    pub fn standard() -> Self {
        Self::from_parts(
            tables::standard_charms(),
            tables::standard_houses(),
            tables::standard_combinations(),
        )
    }

    fn from_parts(
        charms: Vec<Charm>,
        houses: Vec<House>,
        combinations: Vec<CharmCombination>,
    ) -> Self {
        let by_id = charms
            .iter()
            .enumerate()
            .map(|(idx, charm)| (charm.id.clone(), idx))
            .collect();
        Self {
            charms,
            houses,
            combinations,
            by_id,
        }
    }

    /// Check every catalog invariant.
    pub fn validate(&self) -> CatalogResult<()> {
        let mut seen = HashSet::new();
        for charm in &self.charms {
            if !seen.insert(&charm.id) {
                return Err(CatalogError::DuplicateCharm(charm.id.clone()));
            }
        }

        if self.houses.len() != HOUSE_COUNT {
            return Err(CatalogError::HouseCount(self.houses.len()));
        }
        for (idx, house) in self.houses.iter().enumerate() {
            if usize::from(house.ordinal) != idx + 1 {
                return Err(CatalogError::HouseOrdinal {
                    position: idx + 1,
                    ordinal: house.ordinal,
                });
            }
        }

        for combo in &self.combinations {
            let distinct: HashSet<_> = combo.charms.iter().collect();
            if distinct.len() < 2 || distinct.len() != combo.charms.len() {
                return Err(CatalogError::CombinationTooSmall(combo.name.clone()));
            }
            if let Some(missing) = combo.charms.iter().find(|id| !seen.contains(id)) {
                return Err(CatalogError::UnknownCombinationCharm {
                    combination: combo.name.clone(),
                    charm: missing.clone(),
                });
            }
        }

        Ok(())
    }

    /// All charms in catalog order.
    pub fn charms(&self) -> &[Charm] {
        &self.charms
    }

    /// The twelve houses in wheel order.
    pub fn houses(&self) -> &[House] {
        &self.houses
    }

    /// All combinations in table order.
    pub fn combinations(&self) -> &[CharmCombination] {
        &self.combinations
    }

    /// Look up a charm by id.
    pub fn charm(&self, id: &CharmId) -> Option<&Charm> {
        self.by_id.get(id).and_then(|idx| self.charms.get(*idx))
    }

    /// Find a charm by display name (case-insensitive).
    pub fn charm_by_name(&self, name: &str) -> Option<&Charm> {
        let lower = name.trim().to_lowercase();
        self.charms.iter().find(|c| c.name.to_lowercase() == lower)
    }

    /// Resolve user input that may be either an id or a display name.
    pub fn resolve(&self, input: &str) -> Option<&Charm> {
        let trimmed = input.trim();
        self.charm(&CharmId::new(trimmed.to_lowercase()))
            .or_else(|| self.charm_by_name(trimmed))
    }

    /// Find a combination by name (case-insensitive).
    pub fn combination_by_name(&self, name: &str) -> Option<&CharmCombination> {
        let lower = name.trim().to_lowercase();
        self.combinations
            .iter()
            .find(|c| c.name.to_lowercase() == lower)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charm::{CharmCategory, CharmRarity};
    use crate::combination::{CombinationCategory, CombinationRarity};

    fn pair(name: &str, ids: &[&str]) -> CharmCombination {
        CharmCombination {
            charms: ids.iter().map(|s| CharmId::from(*s)).collect(),
            name: name.to_string(),
            description: String::new(),
            interpretation: String::new(),
            rarity: CombinationRarity::Common,
            category: CombinationCategory::Power,
        }
    }

    fn charm(id: &str) -> Charm {
        Charm::new(id, id, "", CharmRarity::Common, CharmCategory::Growth)
    }

    #[test]
    fn standard_catalog_is_valid() {
        let catalog = Catalog::standard();
        catalog.validate().unwrap();
        assert_eq!(catalog.charms().len(), 72);
        assert_eq!(catalog.houses().len(), 12);
        assert_eq!(catalog.combinations().len(), 32);
    }

    #[test]
    fn loading_twice_yields_equal_tables() {
        assert_eq!(Catalog::standard(), Catalog::standard());
    }

    #[test]
    fn lookup_by_id_name_and_input() {
        let catalog = Catalog::standard();
        let id = CharmId::from("tipping-point");
        assert_eq!(catalog.charm(&id).unwrap().name, "Tipping Point");
        assert_eq!(
            catalog.charm_by_name("tipping point").unwrap().id.as_str(),
            "tipping-point"
        );
        assert_eq!(catalog.resolve("Gut-Check").unwrap().name, "Gut Check");
        assert_eq!(catalog.resolve("Déjà Vu").unwrap().id.as_str(), "deja-vu");
        assert!(catalog.resolve("nonsense").is_none());
    }

    #[test]
    fn rare_charms_are_flagged() {
        let catalog = Catalog::standard();
        let rare = catalog.charms().iter().filter(|c| c.is_rare()).count();
        assert_eq!(rare, 13);
        assert!(catalog.resolve("supernova").unwrap().is_rare());
    }

    #[test]
    fn categories_match_legacy_name_hash() {
        let legacy = [
            CharmCategory::Growth,
            CharmCategory::Challenges,
            CharmCategory::Opportunities,
            CharmCategory::Transitions,
            CharmCategory::Insights,
        ];
        for charm in Catalog::standard().charms() {
            let code = charm.name.chars().next().unwrap() as u32;
            assert_eq!(charm.category, legacy[(code % 5) as usize], "{}", charm.name);
        }
    }

    #[test]
    fn rejects_duplicate_charm() {
        let err = Catalog::new(
            vec![charm("a"), charm("a")],
            tables::standard_houses(),
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCharm(_)));
    }

    #[test]
    fn rejects_wrong_house_count_and_order() {
        let mut houses = tables::standard_houses();
        houses.pop();
        let err = Catalog::new(vec![charm("a")], houses, Vec::new()).unwrap_err();
        assert!(matches!(err, CatalogError::HouseCount(11)));

        let mut houses = tables::standard_houses();
        houses.swap(0, 1);
        let err = Catalog::new(vec![charm("a")], houses, Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::HouseOrdinal {
                position: 1,
                ordinal: 2
            }
        ));
    }

    #[test]
    fn rejects_bad_combinations() {
        let charms = vec![charm("a"), charm("b")];
        let err = Catalog::new(
            charms.clone(),
            tables::standard_houses(),
            vec![pair("Solo", &["a"])],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::CombinationTooSmall(_)));

        let err = Catalog::new(
            charms.clone(),
            tables::standard_houses(),
            vec![pair("Twice", &["a", "a"])],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::CombinationTooSmall(_)));

        let err = Catalog::new(
            charms,
            tables::standard_houses(),
            vec![pair("Ghost", &["a", "zzz"])],
        )
        .unwrap_err();
        assert!(err.to_string().contains("zzz"));
    }

    #[test]
    fn serde_roundtrip_keeps_lookups_working() {
        let catalog = Catalog::standard();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
        assert!(back.charm(&CharmId::from("void")).is_some());
    }

    #[test]
    fn deserialize_rejects_invalid_tables() {
        let empty = r#"{"charms":[],"houses":[],"combinations":[]}"#;
        let err = serde_json::from_str::<Catalog>(empty).unwrap_err();
        assert!(err.to_string().contains("expected 12 houses, found 0"));

        let catalog = Catalog::standard();
        let mut value = serde_json::to_value(&catalog).unwrap();
        let first = value["charms"][0].clone();
        value["charms"].as_array_mut().unwrap().push(first);
        assert!(serde_json::from_value::<Catalog>(value).is_err());
    }
}
