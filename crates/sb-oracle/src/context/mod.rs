//! Question-driven house keyword overlays.
//!
//! A question like "Will I get this job?" relabels the twelve houses with
//! career vocabulary. Matching is plain substring containment against the
//! lowercased question, first rule wins.

pub mod tables;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use sb_core::House;

use self::tables::{CONTEXT_RULES, FALLBACK_RULES};

/// Life area a question is about, as far as house labelling goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextTheme {
    /// Jobs and work.
    Career,
    /// Love and partnership.
    Relationships,
    /// Body and wellbeing.
    Health,
    /// Money.
    Financial,
    /// Parents, children, kin.
    Family,
    /// Purpose and learning.
    Growth,
    /// Journeys and moves.
    Travel,
    /// Choices.
    Decision,
    /// When something will happen.
    Timing,
}

impl fmt::Display for ContextTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Career => "career",
            Self::Relationships => "relationships",
            Self::Health => "health",
            Self::Financial => "financial",
            Self::Family => "family",
            Self::Growth => "growth",
            Self::Travel => "travel",
            Self::Decision => "decision",
            Self::Timing => "timing",
        };
        f.write_str(s)
    }
}

/// The rule that matched a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HouseContext {
    /// Theme of the matched rule.
    pub theme: ContextTheme,
    /// Word or phrase that triggered the match.
    pub trigger: &'static str,
    keywords: &'static [&'static str; 12],
}

impl HouseContext {
    /// Keyword overlay for a house ordinal (1-12).
    pub fn keyword_for(&self, ordinal: u8) -> Option<&'static str> {
        let idx = usize::from(ordinal).checked_sub(1)?;
        self.keywords.get(idx).copied()
    }
}

/// Find the context rule a question triggers, if any.
pub fn detect_house_context(question: &str) -> Option<HouseContext> {
    let lower = question.trim().to_lowercase();
    if lower.is_empty() {
        return None;
    }

    if let Some(rule) = CONTEXT_RULES.iter().find(|r| lower.contains(r.trigger)) {
        return Some(HouseContext {
            theme: rule.theme,
            trigger: rule.trigger,
            keywords: rule.keywords,
        });
    }

    FALLBACK_RULES.iter().find_map(|rule| {
        rule.triggers
            .iter()
            .find(|t| lower.contains(*t))
            .map(|trigger| HouseContext {
                theme: rule.theme,
                trigger: *trigger,
                keywords: rule.keywords,
            })
    })
}

/// Overlay question-specific keywords onto the base houses.
///
/// Returns the base houses unchanged when no rule matches. The input slice
/// is never modified.
pub fn map_houses(question: &str, base: &[House]) -> Vec<House> {
    let Some(ctx) = detect_house_context(question) else {
        return base.to_vec();
    };
    debug!(theme = %ctx.theme, trigger = ctx.trigger, "house context matched");
    base.iter()
        .map(|house| match ctx.keyword_for(house.ordinal) {
            Some(keyword) => house.with_context(keyword),
            None => house.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sb_core::tables::standard_houses;

    #[test]
    fn job_question_uses_career_keywords() {
        let houses = map_houses("Will I get this job?", &standard_houses());
        assert_eq!(houses.len(), 12);
        assert_eq!(houses[0].context_keyword.as_deref(), Some("Self-Image"));
        assert_eq!(houses[0].keyword, "Genesis");
    }

    #[test]
    fn empty_question_returns_base_houses() {
        let base = standard_houses();
        assert_eq!(map_houses("", &base), base);
        assert_eq!(map_houses("   ", &base), base);
        assert!(detect_house_context("").is_none());
    }

    #[test]
    fn unmatched_question_returns_base_houses() {
        let base = standard_houses();
        assert_eq!(map_houses("xyzzy", &base), base);
    }

    #[test]
    fn first_rule_wins() {
        // "work" precedes "love" in rule order.
        let ctx = detect_house_context("Will love survive my work schedule?").unwrap();
        assert_eq!(ctx.theme, ContextTheme::Career);
        assert_eq!(ctx.trigger, "work");
    }

    #[test]
    fn family_rules_match() {
        let ctx = detect_house_context("How is my child doing?").unwrap();
        assert_eq!(ctx.theme, ContextTheme::Family);
        assert_eq!(ctx.trigger, "child");
    }

    #[test]
    fn fallbacks_apply_in_order() {
        let ctx = detect_house_context("I feel lost").unwrap();
        assert_eq!(ctx.theme, ContextTheme::Relationships);
        let ctx = detect_house_context("Is it the right choice?").unwrap();
        assert_eq!(ctx.theme, ContextTheme::Decision);
        let ctx = detect_house_context("What does the future hold?").unwrap();
        assert_eq!(ctx.theme, ContextTheme::Growth);
        let ctx = detect_house_context("How long until it ends?").unwrap();
        assert_eq!(ctx.theme, ContextTheme::Timing);
        assert_eq!(ctx.keyword_for(12), Some("Divine Timing"));
    }

    #[test]
    fn keyword_for_rejects_bad_ordinals() {
        let ctx = detect_house_context("career").unwrap();
        assert_eq!(ctx.keyword_for(0), None);
        assert_eq!(ctx.keyword_for(13), None);
    }

    #[test]
    fn mapping_is_deterministic() {
        let base = standard_houses();
        let q = "Should I invest in a house?";
        assert_eq!(map_houses(q, &base), map_houses(q, &base));
    }

    proptest! {
        #[test]
        fn any_question_keeps_twelve_houses(question in ".{0,80}") {
            let base = standard_houses();
            let houses = map_houses(&question, &base);
            prop_assert_eq!(houses.len(), 12);
            for (mapped, plain) in houses.iter().zip(&base) {
                prop_assert_eq!(mapped.ordinal, plain.ordinal);
                prop_assert_eq!(&mapped.keyword, &plain.keyword);
            }
        }
    }
}
