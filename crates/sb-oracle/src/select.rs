//! Weighted charm selection without replacement.

use tracing::debug;

use sb_core::{Charm, CharmCategory, CharmRarity};

use crate::error::{ReadingError, ReadingResult};
use crate::lunar::is_moon_peak;
use crate::random::RandomSource;

/// Base weight of a rare charm.
pub const RARE_WEIGHT: f64 = 0.2;
/// Rare charm weight on a new or full moon.
pub const RARE_PEAK_WEIGHT: f64 = 0.5;
/// Multiplier applied when a question favours a charm's category.
pub const QUESTION_BOOST: f64 = 1.5;

const BOOSTS: &[(&[&str], CharmCategory)] = &[
    (&["love", "relationship", "partner"], CharmCategory::Growth),
    (&["career", "job", "work"], CharmCategory::Opportunities),
    (&["problem", "challenge", "difficult"], CharmCategory::Challenges),
];

/// Inputs that shift charm weights for one draw.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DrawContext<'a> {
    /// The querent's question, if any.
    pub question: Option<&'a str>,
    /// Lunar phase (0-29), if known.
    pub lunar_phase: Option<u32>,
}

impl<'a> DrawContext<'a> {
    /// A context with no question and no lunar phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a question.
    pub fn with_question(mut self, question: &'a str) -> Self {
        self.question = Some(question);
        self
    }

    /// Attach a lunar phase.
    pub fn with_lunar_phase(mut self, phase: u32) -> Self {
        self.lunar_phase = Some(phase);
        self
    }
}

/// Selection weight of a charm under the given context.
pub fn charm_weight(charm: &Charm, ctx: &DrawContext<'_>) -> f64 {
    let mut weight = match charm.rarity {
        CharmRarity::Rare if ctx.lunar_phase.is_some_and(is_moon_peak) => RARE_PEAK_WEIGHT,
        CharmRarity::Rare => RARE_WEIGHT,
        CharmRarity::Common | CharmRarity::Uncommon => 1.0,
    };

    if let Some(question) = ctx.question {
        let lower = question.to_lowercase();
        for (words, category) in BOOSTS {
            if charm.category == *category && words.iter().any(|w| lower.contains(w)) {
                weight *= QUESTION_BOOST;
            }
        }
    }

    weight
}

/// Draw `count` distinct charms, weighted by [`charm_weight`].
///
/// Fails with [`ReadingError::CatalogExhausted`] before sampling when the
/// pool is too small. A count of zero yields an empty draw.
pub fn select_charms<R>(
    charms: &[Charm],
    count: usize,
    ctx: &DrawContext<'_>,
    rng: &mut R,
) -> ReadingResult<Vec<Charm>>
where
    R: RandomSource + ?Sized,
{
    if count > charms.len() {
        return Err(ReadingError::CatalogExhausted {
            requested: count,
            available: charms.len(),
        });
    }

    let mut pool: Vec<(&Charm, f64)> = charms.iter().map(|c| (c, charm_weight(c, ctx))).collect();
    let mut drawn = Vec::with_capacity(count);

    while drawn.len() < count {
        let total: f64 = pool.iter().map(|(_, w)| w).sum();
        let mut target = rng.next_float() * total;
        let mut idx = pool.len() - 1;
        for (i, (_, weight)) in pool.iter().enumerate() {
            target -= weight;
            if target <= 0.0 {
                idx = i;
                break;
            }
        }
        let (charm, _) = pool.remove(idx);
        drawn.push(charm.clone());
    }

    debug!(
        count,
        lunar_phase = ?ctx.lunar_phase,
        ids = ?drawn.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
        "charms drawn"
    );
    Ok(drawn)
}
