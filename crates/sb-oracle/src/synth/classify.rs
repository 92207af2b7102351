//! Question classification and style selection.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use sb_core::Charm;

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        fn $name() -> &'static Regex {
            static CELL: OnceLock<Regex> = OnceLock::new();
            CELL.get_or_init(|| Regex::new($re).expect("static pattern compiles"))
        }
    };
}

pattern!(
    career_re,
    r"(?i)\b(jobs?|careers?|work\w*|boss|promotion|interview|business|office|colleagues?)\b"
);
pattern!(
    relationships_re,
    r"(?i)\b(love|relationships?|partner|boyfriend|girlfriend|husband|wife|marriage|dating|crush|ex)\b"
);
pattern!(
    financial_re,
    r"(?i)\b(money|financ\w*|invest\w*|debts?|savings?|salary|rent|budget|loan)\b"
);
pattern!(
    health_re,
    r"(?i)\b(health\w*|sick|illness|diet|fitness|exercise|sleep|stress|doctor)\b"
);
pattern!(
    family_re,
    r"(?i)\b(family|parents?|mother|father|mom|dad|child|children|kids?|sister|brother)\b"
);
pattern!(
    urgent_re,
    r"(?i)\b(now|today|tonight|urgent\w*|immediately|asap|right away)\b"
);
pattern!(
    soon_re,
    r"(?i)\b(soon|this week|this month|shortly|upcoming|next week)\b"
);
pattern!(
    positive_re,
    r"(?i)\b(hope\w*|excited|happy|good|success\w*|win|grateful|ready|better)\b"
);
pattern!(
    negative_re,
    r"(?i)\b(worr\w*|afraid|scared|anxious|fear\w*|lost|stuck|hurt|fail\w*|problems?|wrong|bad)\b"
);
pattern!(
    spiritual_re,
    r"(?i)\b(spirit\w*|soul|universe|destiny|fate|purpose|meaning|divine|cosmic)\b"
);
pattern!(
    practical_re,
    r"(?i)\b(jobs?|work\w*|careers?|money|financ\w*|business|salary|invest\w*)\b"
);

/// What a question is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    /// Work and ambition.
    Career,
    /// Love and partnership.
    Relationships,
    /// Money.
    Financial,
    /// Body and mind.
    Health,
    /// Kin.
    Family,
    /// Anything else.
    General,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Career => "career",
            Self::Relationships => "relationships",
            Self::Financial => "financial",
            Self::Health => "health",
            Self::Family => "family",
            Self::General => "general",
        };
        f.write_str(s)
    }
}

/// How pressing a question sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// Needs an answer now.
    High,
    /// Needs an answer soon.
    Medium,
    /// No time pressure.
    Low,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        };
        f.write_str(s)
    }
}

/// Emotional tone of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    /// Hopeful.
    Positive,
    /// Worried.
    Negative,
    /// Neither.
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

/// Voice the reading text is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingStyle {
    /// Plain and to the point.
    Direct,
    /// Cosmic imagery.
    Mystical,
    /// Action items.
    Practical,
    /// Lyrical. Only chosen on request.
    Poetic,
}

impl ReadingStyle {
    /// All styles.
    pub fn all() -> &'static [Self] {
        &[Self::Direct, Self::Mystical, Self::Practical, Self::Poetic]
    }

    /// Parse a style name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "direct" => Some(Self::Direct),
            "mystical" => Some(Self::Mystical),
            "practical" => Some(Self::Practical),
            "poetic" => Some(Self::Poetic),
            _ => None,
        }
    }
}

impl fmt::Display for ReadingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Direct => "direct",
            Self::Mystical => "mystical",
            Self::Practical => "practical",
            Self::Poetic => "poetic",
        };
        f.write_str(s)
    }
}

/// Everything the synthesizer reads off a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionProfile {
    /// Subject area.
    pub topic: Topic,
    /// Time pressure.
    pub urgency: Urgency,
    /// Tone.
    pub sentiment: Sentiment,
    /// Spiritually worded.
    pub spiritual: bool,
    /// Work or money worded.
    pub practical: bool,
}

impl QuestionProfile {
    /// Classify a question. Each axis takes its first matching branch.
    pub fn classify(question: &str) -> Self {
        let topic = if career_re().is_match(question) {
            Topic::Career
        } else if relationships_re().is_match(question) {
            Topic::Relationships
        } else if financial_re().is_match(question) {
            Topic::Financial
        } else if health_re().is_match(question) {
            Topic::Health
        } else if family_re().is_match(question) {
            Topic::Family
        } else {
            Topic::General
        };

        let urgency = if urgent_re().is_match(question) {
            Urgency::High
        } else if soon_re().is_match(question) {
            Urgency::Medium
        } else {
            Urgency::Low
        };

        let sentiment = if positive_re().is_match(question) {
            Sentiment::Positive
        } else if negative_re().is_match(question) {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        };

        Self {
            topic,
            urgency,
            sentiment,
            spiritual: spiritual_re().is_match(question),
            practical: practical_re().is_match(question),
        }
    }
}

/// Pick a style: the override if given, else inferred from the draw.
pub fn choose_style(
    requested: Option<ReadingStyle>,
    charms: &[Charm],
    profile: &QuestionProfile,
) -> ReadingStyle {
    if let Some(style) = requested {
        return style;
    }
    let rare = charms.iter().filter(|c| c.is_rare()).count();
    if rare >= 2 || profile.spiritual {
        ReadingStyle::Mystical
    } else if profile.practical {
        ReadingStyle::Practical
    } else {
        ReadingStyle::Direct
    }
}
