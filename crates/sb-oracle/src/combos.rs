//! Combination detection over a drawn set of charms.

use std::collections::HashSet;

use tracing::debug;

use sb_core::{CharmCombination, CharmId};

/// Find the combinations present in a draw.
///
/// Candidates whose charms are all drawn are ranked by rarity and then size
/// (table order breaks ties) and accepted greedily, skipping any candidate
/// that shares a charm with one already accepted. Results come back in
/// acceptance order.
pub fn find_combinations<'a>(
    drawn: &[CharmId],
    table: &'a [CharmCombination],
) -> Vec<&'a CharmCombination> {
    let present: HashSet<&CharmId> = drawn.iter().collect();

    let mut candidates: Vec<&CharmCombination> = table
        .iter()
        .filter(|combo| combo.charms.iter().all(|id| present.contains(id)))
        .collect();
    // Stable sort keeps table order among equals.
    candidates.sort_by(|a, b| b.power_cmp(a));

    let mut claimed: HashSet<&CharmId> = HashSet::new();
    let mut accepted = Vec::new();
    for combo in candidates {
        if combo.charms.iter().any(|id| claimed.contains(id)) {
            continue;
        }
        claimed.extend(combo.charms.iter());
        accepted.push(combo);
    }

    debug!(
        matched = ?accepted.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
        "combinations matched"
    );
    accepted
}

/// The strongest combination by rarity, then size. The first one wins ties.
pub fn most_powerful<'a>(combinations: &[&'a CharmCombination]) -> Option<&'a CharmCombination> {
    let mut best: Option<&'a CharmCombination> = None;
    for &combo in combinations {
        match best {
            Some(current) if !combo.power_cmp(current).is_gt() => {}
            _ => best = Some(combo),
        }
    }
    best
}

/// Interpretation of the strongest combination, or an empty string.
pub fn combination_insight(combinations: &[&CharmCombination]) -> String {
    most_powerful(combinations)
        .map(|c| c.interpretation.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use proptest::sample::subsequence;
    use sb_core::{Catalog, CombinationRarity};

    fn ids(list: &[&str]) -> Vec<CharmId> {
        list.iter().map(|s| CharmId::from(*s)).collect()
    }

    #[test]
    fn trinity_beats_breaking_point() {
        let catalog = Catalog::standard();
        let drawn = ids(&["catalyst", "tipping-point", "supernova"]);
        let found = find_combinations(&drawn, catalog.combinations());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "The Trinity of Destruction");
        assert_eq!(found[0].rarity, CombinationRarity::Legendary);
        assert!(found.iter().all(|c| c.name != "The Breaking Point"));
    }

    #[test]
    fn pair_matches_without_third_charm() {
        let catalog = Catalog::standard();
        let drawn = ids(&["catalyst", "tipping-point", "fog"]);
        let found = find_combinations(&drawn, catalog.combinations());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "The Breaking Point");
    }

    #[test]
    fn disjoint_combinations_all_match() {
        let catalog = Catalog::standard();
        let drawn = ids(&["catalyst", "tipping-point", "gut-check", "gasp"]);
        let found = find_combinations(&drawn, catalog.combinations());
        assert_eq!(found.len(), 2);
        assert!(found[0].power_cmp(found[1]).is_ge());
    }

    #[test]
    fn nothing_matches_an_empty_draw() {
        let catalog = Catalog::standard();
        assert!(find_combinations(&[], catalog.combinations()).is_empty());
        assert!(most_powerful(&[]).is_none());
        assert_eq!(combination_insight(&[]), "");
    }

    #[test]
    fn most_powerful_keeps_first_on_ties() {
        let catalog = Catalog::standard();
        let a = catalog.combination_by_name("The Breaking Point").unwrap();
        let b = catalog.combination_by_name("Death and Rebirth").unwrap();
        assert_eq!(a.power_cmp(b), std::cmp::Ordering::Equal);
        let found = vec![a, b];
        assert_eq!(most_powerful(&found).unwrap().name, a.name);
    }

    #[test]
    fn insight_uses_strongest_interpretation() {
        let catalog = Catalog::standard();
        let drawn = ids(&["catalyst", "tipping-point", "supernova", "gut-check", "gasp"]);
        let found = find_combinations(&drawn, catalog.combinations());
        let trinity = catalog
            .combination_by_name("The Trinity of Destruction")
            .unwrap();
        assert_eq!(combination_insight(&found), trinity.interpretation);
    }

    #[test]
    fn matching_is_deterministic() {
        let catalog = Catalog::standard();
        let drawn: Vec<CharmId> = catalog.charms().iter().map(|c| c.id.clone()).collect();
        let first = find_combinations(&drawn, catalog.combinations());
        let second = find_combinations(&drawn, catalog.combinations());
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn matches_are_subsets_and_disjoint(
            picked in subsequence(
                Catalog::standard().charms().iter().map(|c| c.id.clone()).collect::<Vec<_>>(),
                0..=24,
            )
        ) {
            let catalog = Catalog::standard();
            let found = find_combinations(&picked, catalog.combinations());
            let mut claimed = HashSet::new();
            for combo in &found {
                for id in &combo.charms {
                    prop_assert!(picked.contains(id));
                    prop_assert!(claimed.insert(id.clone()));
                }
            }
            for pair in found.windows(2) {
                prop_assert!(pair[0].power_cmp(pair[1]).is_ge());
            }
        }
    }
}
