//! Keyword tables for question-driven house overlays.
//!
//! Each rule pairs a trigger word with a twelve-slot keyword table, one
//! keyword per house ordinal. Rules are tested in order and the first
//! trigger contained in the question wins.

use super::ContextTheme;

const CAREER: [&str; 12] = [
    "Self-Image",
    "Income",
    "Skills",
    "Work Environment",
    "Creativity",
    "Daily Tasks",
    "Colleagues",
    "Transformation",
    "Growth",
    "Reputation",
    "Network",
    "Hidden Obstacles",
];

const BUSINESS: [&str; 12] = [
    "Leadership",
    "Resources",
    "Communication",
    "Foundation",
    "Innovation",
    "Operations",
    "Partnerships",
    "Investments",
    "Expansion",
    "Achievement",
    "Team",
    "Unseen Factors",
];

const PROMOTION: [&str; 12] = [
    "Self-Presentation",
    "Value",
    "Skills",
    "Stability",
    "Recognition",
    "Performance",
    "Superiors",
    "Power Dynamics",
    "Advancement",
    "Status",
    "Supporters",
    "Competition",
];

const INTERVIEW: [&str; 12] = [
    "First Impression",
    "Compensation",
    "Communication",
    "Fit",
    "Standout Qualities",
    "Responsibilities",
    "Interviewer",
    "Hidden Factors",
    "Potential",
    "Outcome",
    "Team Dynamics",
    "Blind Spots",
];

const LOVE: [&str; 12] = [
    "Self-Love",
    "Values",
    "Communication",
    "Emotional Needs",
    "Romance",
    "Habits",
    "Partnership",
    "Intimacy",
    "Shared Beliefs",
    "Commitment",
    "Friendship",
    "Subconscious Patterns",
];

const RELATIONSHIP: [&str; 12] = [
    "Self-Image",
    "Values",
    "Communication",
    "Emotional Foundation",
    "Romance",
    "Daily Interaction",
    "Partnership",
    "Intimacy",
    "Shared Experiences",
    "Public Image",
    "Social Circle",
    "Hidden Dynamics",
];

const MARRIAGE: [&str; 12] = [
    "Identity",
    "Shared Resources",
    "Communication",
    "Home Life",
    "Joy",
    "Responsibilities",
    "Commitment",
    "Transformation",
    "Growth Together",
    "Social Status",
    "Community",
    "Spiritual Bond",
];

const DATING: [&str; 12] = [
    "Attraction",
    "Priorities",
    "Connection",
    "Comfort",
    "Chemistry",
    "Compatibility",
    "Relationship",
    "Vulnerability",
    "Experiences",
    "Direction",
    "Social Life",
    "Intuition",
];

const BREAKUP: [&str; 12] = [
    "Self-Recovery",
    "Self-Worth",
    "Processing",
    "Emotional Healing",
    "Joy After Pain",
    "New Routines",
    "Future Partners",
    "Transformation",
    "New Perspective",
    "New Path",
    "Support System",
    "Closure",
];

const HEALTH: [&str; 12] = [
    "Physical Body",
    "Resources",
    "Mental Health",
    "Emotional Health",
    "Vitality",
    "Daily Habits",
    "Balance",
    "Healing",
    "Beliefs",
    "Structure",
    "Support System",
    "Rest",
];

const ILLNESS: [&str; 12] = [
    "Body",
    "Treatment",
    "Diagnosis",
    "Emotional Impact",
    "Recovery",
    "Care Routine",
    "Healthcare",
    "Transformation",
    "Outlook",
    "Management",
    "Support",
    "Hidden Factors",
];

const FITNESS: [&str; 12] = [
    "Physical Form",
    "Energy",
    "Plan",
    "Motivation",
    "Enjoyment",
    "Routine",
    "Guidance",
    "Transformation",
    "Goals",
    "Achievement",
    "Community",
    "Rest",
];

const DIET: [&str; 12] = [
    "Body Needs",
    "Nutrition",
    "Knowledge",
    "Emotional Eating",
    "Enjoyment",
    "Habits",
    "Balance",
    "Transformation",
    "Philosophy",
    "Discipline",
    "Support",
    "Cravings",
];

const MONEY: [&str; 12] = [
    "Self-Worth",
    "Assets",
    "Financial Planning",
    "Security",
    "Investments",
    "Budget",
    "Partnerships",
    "Shared Resources",
    "Expansion",
    "Career",
    "Financial Network",
    "Hidden Costs",
];

const INVEST: [&str; 12] = [
    "Risk Tolerance",
    "Capital",
    "Research",
    "Security",
    "Growth",
    "Strategy",
    "Advisors",
    "Returns",
    "Long-term Vision",
    "Goals",
    "Market Trends",
    "Unknown Factors",
];

const DEBT: [&str; 12] = [
    "Attitude",
    "Resources",
    "Plan",
    "Emotional Impact",
    "Creative Solutions",
    "Management",
    "Agreements",
    "Transformation",
    "Learning",
    "Responsibility",
    "Support",
    "Hidden Factors",
];

const SAVINGS: [&str; 12] = [
    "Discipline",
    "Assets",
    "Strategy",
    "Security",
    "Growth",
    "Habits",
    "Advice",
    "Compound Growth",
    "Future Plans",
    "Goals",
    "Influences",
    "Unexpected Expenses",
];

const GROWTH: [&str; 12] = [
    "Identity",
    "Resources",
    "Learning",
    "Foundations",
    "Self-Expression",
    "Improvement",
    "Relationships",
    "Transformation",
    "Expansion",
    "Achievement",
    "Community",
    "Reflection",
];

const PURPOSE: [&str; 12] = [
    "Identity",
    "Values",
    "Ideas",
    "Roots",
    "Passion",
    "Service",
    "Connections",
    "Transformation",
    "Beliefs",
    "Calling",
    "Contribution",
    "Intuition",
];

const SPIRITUAL: [&str; 12] = [
    "Soul",
    "Values",
    "Learning",
    "Inner Peace",
    "Creative Expression",
    "Practice",
    "Teachers",
    "Transformation",
    "Beliefs",
    "Path",
    "Community",
    "Transcendence",
];

const LEARN: [&str; 12] = [
    "Aptitude",
    "Resources",
    "Information",
    "Foundation",
    "Creativity",
    "Practice",
    "Teachers",
    "Mastery",
    "Wisdom",
    "Expertise",
    "Peers",
    "Self-Sabotage",
];

const CHANGE: [&str; 12] = [
    "New Identity",
    "Resources",
    "Decisions",
    "Emotional Impact",
    "New Possibilities",
    "Adjustments",
    "Support",
    "Transformation",
    "New Perspective",
    "Direction",
    "Community",
    "Letting Go",
];

const TRAVEL: [&str; 12] = [
    "Self-Discovery",
    "Budget",
    "Local Travel",
    "Home Base",
    "Adventure",
    "Itinerary",
    "Companions",
    "Transformation",
    "Distant Travel",
    "Destination",
    "Groups",
    "Retreat",
];

const JOURNEY: [&str; 12] = [
    "Self-Discovery",
    "Resources",
    "Routes",
    "Origins",
    "Adventure",
    "Planning",
    "Companions",
    "Transformation",
    "Exploration",
    "Destination",
    "Community",
    "Reflection",
];

const MOVE: [&str; 12] = [
    "New Beginning",
    "Finances",
    "Neighborhood",
    "New Home",
    "New Experiences",
    "Logistics",
    "Relationships",
    "Life Change",
    "Distance",
    "Direction",
    "Community",
    "Letting Go",
];

const VACATION: [&str; 12] = [
    "Relaxation",
    "Budget",
    "Planning",
    "Comfort",
    "Enjoyment",
    "Itinerary",
    "Companions",
    "Experiences",
    "Exploration",
    "Destination",
    "Group Activities",
    "Retreat",
];

const DECISION: [&str; 12] = [
    "Self-Interest",
    "Resources",
    "Information",
    "Security",
    "Risks",
    "Practicality",
    "Others Affected",
    "Consequences",
    "Long-term View",
    "Goals",
    "Community Impact",
    "Intuition",
];

const SHOULD: [&str; 12] = [
    "Authentic Self",
    "Values",
    "Options",
    "Emotional Needs",
    "Desires",
    "Practicality",
    "Relationships",
    "Transformation",
    "Principles",
    "Goals",
    "Social Factors",
    "Inner Wisdom",
];

const FAMILY: [&str; 12] = [
    "Role in Family",
    "Shared Resources",
    "Siblings",
    "Roots",
    "Children",
    "Caregiving",
    "In-Laws",
    "Inheritance",
    "Traditions",
    "Parents",
    "Extended Family",
    "Family Secrets",
];

const PARENT: [&str; 12] = [
    "Identity as Parent",
    "Provision",
    "Guidance",
    "Home",
    "Play",
    "Routines",
    "Co-Parenting",
    "Letting Go",
    "Values Passed On",
    "Authority",
    "Village",
    "Worries",
];

const TIMING: [&str; 12] = [
    "Readiness",
    "Resources",
    "Signs",
    "Foundation",
    "Opportunity",
    "Preparation",
    "Alignment",
    "Transition",
    "Timing",
    "Manifestation",
    "External Factors",
    "Divine Timing",
];

/// A trigger word and the house keywords it unlocks.
#[derive(Debug)]
pub struct ContextRule {
    /// Substring searched for in the lowercased question.
    pub trigger: &'static str,
    /// Theme the rule belongs to.
    pub theme: ContextTheme,
    /// Keyword per house, indexed by `ordinal - 1`.
    pub keywords: &'static [&'static str; 12],
}

const fn rule(
    trigger: &'static str,
    theme: ContextTheme,
    keywords: &'static [&'static str; 12],
) -> ContextRule {
    ContextRule {
        trigger,
        theme,
        keywords,
    }
}

/// Primary rules in priority order.
pub const CONTEXT_RULES: &[ContextRule] = &[
    rule("career", ContextTheme::Career, &CAREER),
    rule("job", ContextTheme::Career, &CAREER),
    rule("work", ContextTheme::Career, &CAREER),
    rule("business", ContextTheme::Career, &BUSINESS),
    rule("promotion", ContextTheme::Career, &PROMOTION),
    rule("interview", ContextTheme::Career, &INTERVIEW),
    rule("love", ContextTheme::Relationships, &LOVE),
    rule("relationship", ContextTheme::Relationships, &RELATIONSHIP),
    rule("partner", ContextTheme::Relationships, &RELATIONSHIP),
    rule("marriage", ContextTheme::Relationships, &MARRIAGE),
    rule("dating", ContextTheme::Relationships, &DATING),
    rule("breakup", ContextTheme::Relationships, &BREAKUP),
    rule("health", ContextTheme::Health, &HEALTH),
    rule("wellness", ContextTheme::Health, &HEALTH),
    rule("illness", ContextTheme::Health, &ILLNESS),
    rule("fitness", ContextTheme::Health, &FITNESS),
    rule("diet", ContextTheme::Health, &DIET),
    rule("money", ContextTheme::Financial, &MONEY),
    rule("financial", ContextTheme::Financial, &MONEY),
    rule("invest", ContextTheme::Financial, &INVEST),
    rule("debt", ContextTheme::Financial, &DEBT),
    rule("savings", ContextTheme::Financial, &SAVINGS),
    rule("family", ContextTheme::Family, &FAMILY),
    rule("parent", ContextTheme::Family, &PARENT),
    rule("child", ContextTheme::Family, &PARENT),
    rule("growth", ContextTheme::Growth, &GROWTH),
    rule("purpose", ContextTheme::Growth, &PURPOSE),
    rule("spiritual", ContextTheme::Growth, &SPIRITUAL),
    rule("learn", ContextTheme::Growth, &LEARN),
    rule("change", ContextTheme::Growth, &CHANGE),
    rule("travel", ContextTheme::Travel, &TRAVEL),
    rule("journey", ContextTheme::Travel, &JOURNEY),
    rule("move", ContextTheme::Travel, &MOVE),
    rule("vacation", ContextTheme::Travel, &VACATION),
    rule("decision", ContextTheme::Decision, &DECISION),
    rule("choice", ContextTheme::Decision, &DECISION),
    rule("should", ContextTheme::Decision, &SHOULD),
];

/// A group of looser phrases tried when no primary rule matches.
#[derive(Debug)]
pub struct FallbackRule {
    /// Phrases searched for in the lowercased question.
    pub triggers: &'static [&'static str],
    /// Theme the fallback maps to.
    pub theme: ContextTheme,
    /// Keyword per house, indexed by `ordinal - 1`.
    pub keywords: &'static [&'static str; 12],
}

/// Fallbacks in priority order: emotional, decision, future, timing.
pub const FALLBACK_RULES: &[FallbackRule] = &[
    FallbackRule {
        triggers: &["feel", "emotion", "happy", "sad"],
        theme: ContextTheme::Relationships,
        keywords: &RELATIONSHIP,
    },
    FallbackRule {
        triggers: &["should", "decide", "right choice"],
        theme: ContextTheme::Decision,
        keywords: &DECISION,
    },
    FallbackRule {
        triggers: &["will i", "future", "going to"],
        theme: ContextTheme::Growth,
        keywords: &GROWTH,
    },
    FallbackRule {
        triggers: &["when", "how long", "time"],
        theme: ContextTheme::Timing,
        keywords: &TIMING,
    },
];
