//! Reading text synthesis.
//!
//! A reading either leads with the interpretation of a strong combination or
//! is composed from fragments: an opening, an insight on the dominant charm
//! category, a focus on one house, a tone clause, and topic advice.

pub mod classify;
pub mod templates;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use sb_core::{Charm, CharmCategory, CharmCombination, House, house_for_position};

use crate::combos::most_powerful;
use crate::error::{ReadingError, ReadingResult};
use crate::random::RandomSource;

pub use classify::{QuestionProfile, ReadingStyle, Sentiment, Topic, Urgency, choose_style};

/// Probabilities for the synthesizer's random branches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisChances {
    /// Chance a rare or legendary combination leads the text.
    pub lead: f64,
    /// Chance the strongest combination is echoed after composed text.
    pub echo: f64,
}

impl Default for SynthesisChances {
    fn default() -> Self {
        Self {
            lead: 0.7,
            echo: 0.4,
        }
    }
}

/// The synthesized reading and what went into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synopsis {
    /// Reading text.
    pub text: String,
    /// Voice used.
    pub style: ReadingStyle,
    /// Most common charm category in the draw.
    pub dominant: CharmCategory,
    /// Question topic.
    pub topic: Topic,
    /// Question urgency.
    pub urgency: Urgency,
    /// Question sentiment.
    pub sentiment: Sentiment,
    /// Name of the combination that led the text, if one did.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead: Option<String>,
}

impl fmt::Display for Synopsis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Most frequent category in the draw; ties go to the first one seen.
pub fn dominant_category(charms: &[Charm]) -> Option<CharmCategory> {
    let mut tally: Vec<(CharmCategory, usize)> = Vec::new();
    for charm in charms {
        match tally.iter_mut().find(|(cat, _)| *cat == charm.category) {
            Some((_, count)) => *count += 1,
            None => tally.push((charm.category, 1)),
        }
    }

    let mut best: Option<(CharmCategory, usize)> = None;
    for (category, count) in tally {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((category, count));
        }
    }
    best.map(|(category, _)| category)
}

fn pick<'a, R: RandomSource + ?Sized>(pool: &[&'a str], rng: &mut R) -> &'a str {
    pool[rng.pick_index(pool.len())]
}

/// Build the reading text for a draw.
///
/// `houses` are the (possibly context-mapped) houses of the reading; charm
/// `i` sits in house `(i mod 12) + 1`. Fails with
/// [`ReadingError::EmptyDraw`] when no charms are given.
pub fn synthesize<R>(
    charms: &[Charm],
    houses: &[House],
    question: &str,
    combinations: &[&CharmCombination],
    style: Option<ReadingStyle>,
    rng: &mut R,
    chances: SynthesisChances,
) -> ReadingResult<Synopsis>
where
    R: RandomSource + ?Sized,
{
    let dominant = dominant_category(charms).ok_or(ReadingError::EmptyDraw)?;
    let profile = QuestionProfile::classify(question);
    let style = choose_style(style, charms, &profile);
    let strongest = most_powerful(combinations);
    debug!(%style, %dominant, topic = %profile.topic, "synthesizing reading");

    let leader = strongest
        .filter(|c| c.rarity.can_lead())
        .filter(|_| rng.chance(chances.lead));
    if let Some(combo) = leader {
        debug!(combination = %combo.name, "combination leads reading");
        let mut text = templates::adapt_lead(style, &combo.name, &combo.interpretation);
        text.push(' ');
        text.push_str(pick(templates::closings(profile.topic), rng));
        return Ok(Synopsis {
            text: text.trim().to_string(),
            style,
            dominant,
            topic: profile.topic,
            urgency: profile.urgency,
            sentiment: profile.sentiment,
            lead: Some(combo.name.clone()),
        });
    }

    let mut parts: Vec<String> = vec![
        pick(templates::openings(style), rng).to_string(),
        pick(templates::insights(dominant, style), rng).to_string(),
    ];

    let anchor = charms
        .iter()
        .enumerate()
        .find(|(_, c)| c.category == dominant)
        .and_then(|(idx, charm)| {
            let ordinal = house_for_position(idx);
            houses
                .iter()
                .find(|h| h.ordinal == ordinal)
                .map(|house| templates::focus(style, &charm.name, house.display_keyword()))
        });
    parts.extend(anchor);

    parts.push(templates::tone(profile.urgency, profile.sentiment).to_string());
    parts.push(pick(templates::closings(profile.topic), rng).to_string());

    if let Some(combo) = strongest.filter(|_| rng.chance(chances.echo)) {
        debug!(combination = %combo.name, "echoing combination");
        parts.push(combo.first_sentence().to_string());
    }

    Ok(Synopsis {
        text: parts.join(" ").trim().to_string(),
        style,
        dominant,
        topic: profile.topic,
        urgency: profile.urgency,
        sentiment: profile.sentiment,
        lead: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combos::find_combinations;
    use crate::random::ScriptedSource;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use sb_core::{Catalog, CharmId, CombinationRarity};

    fn draw(catalog: &Catalog, ids: &[&str]) -> Vec<Charm> {
        ids.iter()
            .map(|id| catalog.charm(&CharmId::from(*id)).unwrap().clone())
            .collect()
    }

    fn ids(charms: &[Charm]) -> Vec<CharmId> {
        charms.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn empty_draw_is_rejected() {
        let mut src = ScriptedSource::constant(0.0);
        let err = synthesize(
            &[],
            &[],
            "anything",
            &[],
            None,
            &mut src,
            SynthesisChances::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ReadingError::EmptyDraw));
    }

    #[test]
    fn dominant_ties_go_to_first_seen() {
        let catalog = Catalog::standard();
        // flow: Growth, catalyst: Opportunities.
        let charms = draw(&catalog, &["catalyst", "flow"]);
        assert_eq!(dominant_category(&charms), Some(CharmCategory::Opportunities));
        assert_eq!(dominant_category(&[]), None);
    }

    #[test]
    fn legendary_combination_can_lead() {
        let catalog = Catalog::standard();
        let charms = draw(&catalog, &["catalyst", "tipping-point", "supernova"]);
        let combos = find_combinations(&ids(&charms), catalog.combinations());
        assert_eq!(combos[0].rarity, CombinationRarity::Legendary);

        let mut src = ScriptedSource::constant(0.0);
        let synopsis = synthesize(
            &charms,
            catalog.houses(),
            "Should I quit?",
            &combos,
            None,
            &mut src,
            SynthesisChances::default(),
        )
        .unwrap();
        assert!(synopsis.text.contains("The Trinity of Destruction"));
        assert_eq!(synopsis.lead.as_deref(), Some("The Trinity of Destruction"));
    }

    #[test]
    fn composed_path_names_dominant_category() {
        let catalog = Catalog::standard();
        let charms = draw(&catalog, &["catalyst", "tipping-point", "supernova"]);
        let combos = find_combinations(&ids(&charms), catalog.combinations());

        // 0.99 fails both the lead and the echo rolls.
        let mut src = ScriptedSource::constant(0.99);
        let synopsis = synthesize(
            &charms,
            catalog.houses(),
            "",
            &combos,
            None,
            &mut src,
            SynthesisChances::default(),
        )
        .unwrap();
        assert!(synopsis.lead.is_none());
        assert!(synopsis.text.contains(&synopsis.dominant.to_string()));
        assert!(!synopsis.text.contains("The Trinity of Destruction"));
    }

    #[test]
    fn echo_appends_first_sentence() {
        let catalog = Catalog::standard();
        let charms = draw(&catalog, &["gut-check", "gasp"]);
        let combos = find_combinations(&ids(&charms), catalog.combinations());
        let chances = SynthesisChances {
            lead: 0.0,
            echo: 1.0,
        };
        let mut src = ScriptedSource::constant(0.5);
        let synopsis = synthesize(
            &charms,
            catalog.houses(),
            "",
            &combos,
            Some(ReadingStyle::Direct),
            &mut src,
            chances,
        )
        .unwrap();
        assert!(synopsis.text.ends_with(combos[0].first_sentence()));
    }

    #[test]
    fn lead_requires_rare_or_legendary() {
        let catalog = Catalog::standard();
        let common = catalog
            .combinations()
            .iter()
            .find(|c| c.rarity == CombinationRarity::Common)
            .unwrap();
        let charms: Vec<Charm> = common
            .charms
            .iter()
            .map(|id| catalog.charm(id).unwrap().clone())
            .collect();
        let combos = find_combinations(&ids(&charms), catalog.combinations());
        let chances = SynthesisChances {
            lead: 1.0,
            echo: 0.0,
        };
        let mut src = ScriptedSource::constant(0.0);
        let synopsis = synthesize(
            &charms,
            catalog.houses(),
            "",
            &combos,
            None,
            &mut src,
            chances,
        )
        .unwrap();
        assert!(synopsis.lead.is_none());
    }

    #[test]
    fn style_override_is_honoured() {
        let catalog = Catalog::standard();
        let charms = draw(&catalog, &["flow"]);
        let mut src = ScriptedSource::constant(0.3);
        let synopsis = synthesize(
            &charms,
            catalog.houses(),
            "Will I get the job?",
            &[],
            Some(ReadingStyle::Poetic),
            &mut src,
            SynthesisChances::default(),
        )
        .unwrap();
        assert_eq!(synopsis.style, ReadingStyle::Poetic);
        assert_eq!(synopsis.topic, Topic::Career);
        assert_eq!(synopsis.to_string(), synopsis.text);
    }

    #[test]
    fn focus_uses_context_keyword() {
        let catalog = Catalog::standard();
        let charms = draw(&catalog, &["flow"]);
        let houses = crate::context::map_houses("my career", catalog.houses());
        let mut src = ScriptedSource::constant(0.0);
        let synopsis = synthesize(
            &charms,
            &houses,
            "my career",
            &[],
            Some(ReadingStyle::Direct),
            &mut src,
            SynthesisChances::default(),
        )
        .unwrap();
        assert!(synopsis.text.contains("Flow in your Self-Image house"));
    }

    proptest! {
        #[test]
        fn non_empty_draws_yield_text(seed in any::<u64>(), count in 1usize..=12) {
            let catalog = Catalog::standard();
            let mut rng = StdRng::seed_from_u64(seed);
            let charms = crate::select::select_charms(
                catalog.charms(),
                count,
                &crate::select::DrawContext::new(),
                &mut rng,
            )
            .unwrap();
            let drawn = ids(&charms);
            let combos = find_combinations(&drawn, catalog.combinations());
            let synopsis = synthesize(
                &charms,
                catalog.houses(),
                "What should I know?",
                &combos,
                None,
                &mut rng,
                SynthesisChances::default(),
            )
            .unwrap();
            prop_assert!(!synopsis.text.is_empty());
            prop_assert_eq!(synopsis.text.trim(), synopsis.text.as_str());
        }
    }
}
