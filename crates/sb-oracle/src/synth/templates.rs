//! Text fragments the synthesizer stitches together.

use sb_core::CharmCategory;

use super::classify::{ReadingStyle, Sentiment, Topic, Urgency};

/// Opening sentences for a style.
pub fn openings(style: ReadingStyle) -> &'static [&'static str] {
    match style {
        ReadingStyle::Direct => &[
            "Here is what the board shows.",
            "The charms are clear about this.",
            "Let's get straight to it.",
        ],
        ReadingStyle::Mystical => &[
            "The stars have turned their gaze toward you.",
            "Across the wheel, the old lights are stirring.",
            "The veil is thin tonight and the charms speak plainly.",
        ],
        ReadingStyle::Practical => &[
            "Looking at the pattern on the board:",
            "Here is the situation as the charms lay it out.",
            "Breaking this reading down:",
        ],
        ReadingStyle::Poetic => &[
            "Like scattered seeds upon dark water, your charms have settled.",
            "The wheel turns slowly, and each charm finds its place.",
            "Between one breath and the next, a pattern blooms.",
        ],
    }
}

/// Insight sentences for the dominant category in a style.
///
/// Every variant names its category.
pub fn insights(category: CharmCategory, style: ReadingStyle) -> &'static [&'static str] {
    use CharmCategory::{Challenges, Growth, Insights, Opportunities, Transitions};
    use ReadingStyle::{Direct, Mystical, Poetic, Practical};

    match (category, style) {
        (Growth, Direct) => &[
            "Growth charms lead this draw: you are expanding, whether you feel it yet or not.",
            "Growth is the headline. Something in you is getting bigger than its container.",
        ],
        (Growth, Mystical) => &[
            "The current of Growth runs strongest here, pulling you toward a larger self.",
            "Growth gathers like moonlight on water; a wider version of you is taking shape.",
        ],
        (Growth, Practical) => &[
            "Growth charms dominate, so invest in skills and habits that compound.",
            "With Growth in the lead, this is the time to build, not to coast.",
        ],
        (Growth, Poetic) => &[
            "Growth stirs beneath the soil, green and certain.",
            "Like a vine that finds the sun, Growth reaches through every gap.",
        ],
        (Challenges, Direct) => &[
            "Challenges dominate the board. There is friction ahead and it is worth facing.",
            "Challenges are loud in this reading: the obstacle is the assignment.",
        ],
        (Challenges, Mystical) => &[
            "The Challenges gathered here are trials set by the cosmos, not punishments.",
            "Shadows of Challenges cross the wheel; each one guards a hidden strength.",
        ],
        (Challenges, Practical) => &[
            "Challenges lead this draw, so list the blockers and tackle the smallest first.",
            "Expect Challenges and plan for them: buffer time, backup options, clear limits.",
        ],
        (Challenges, Poetic) => &[
            "Challenges rise like cliffs from the sea, and the climbing makes you.",
            "Through the thorns of Challenges, the path still winds upward.",
        ],
        (Opportunities, Direct) => &[
            "Opportunities dominate. Doors are open right now; walk through one.",
            "This is an Opportunities reading: say yes more than you say maybe.",
        ],
        (Opportunities, Mystical) => &[
            "The universe lays Opportunities at your feet like stars fallen to earth.",
            "Opportunities shimmer at the edges of the wheel, waiting to be claimed.",
        ],
        (Opportunities, Practical) => &[
            "Opportunities lead the draw, so follow up on open leads this week.",
            "With Opportunities strong, update your pitch and reach out first.",
        ],
        (Opportunities, Poetic) => &[
            "Opportunities drift past like lanterns on a river, bright and brief.",
            "A tide of Opportunities is rising; let it lift you.",
        ],
        (Transitions, Direct) => &[
            "Transitions dominate the board. Something is ending so something else can start.",
            "This is a Transitions reading: the in-between is the point.",
        ],
        (Transitions, Mystical) => &[
            "Transitions weave through the houses like a comet's tail; one era closes, another opens.",
            "The wheel speaks of Transitions, of thresholds crossed under a changing sky.",
        ],
        (Transitions, Practical) => &[
            "Transitions lead this draw, so wrap up loose ends before starting anything new.",
            "Plan for Transitions: give yourself room to change course.",
        ],
        (Transitions, Poetic) => &[
            "Transitions come like dusk, softly, until the light is new.",
            "Leaves let go and rivers bend; Transitions carry you downstream.",
        ],
        (Insights, Direct) => &[
            "Insights dominate. You already know more than you are admitting.",
            "This is an Insights reading: the answer is in what you noticed and ignored.",
        ],
        (Insights, Mystical) => &[
            "Insights glow in the wheel like distant fires; your inner sight is waking.",
            "The cosmos whispers Insights through every house tonight.",
        ],
        (Insights, Practical) => &[
            "Insights lead the draw, so write down what you have learned before acting.",
            "With Insights strong, gather the facts and trust the conclusion they point to.",
        ],
        (Insights, Poetic) => &[
            "Insights surface like stones in a clearing stream.",
            "In the quiet between thoughts, Insights bloom like night flowers.",
        ],
    }
}

/// A sentence anchoring the reading to the house of its first dominant charm.
pub fn focus(style: ReadingStyle, charm: &str, house: &str) -> String {
    match style {
        ReadingStyle::Direct => format!("Pay attention to {charm} in your {house} house."),
        ReadingStyle::Mystical => format!("{charm} burns brightest in the house of {house}."),
        ReadingStyle::Practical => format!("Start with {charm}, sitting in your {house} house."),
        ReadingStyle::Poetic => format!("{charm} rests in the house of {house}, like a coin in a well."),
    }
}

/// A clause reflecting how pressing and how hopeful the question sounds.
pub fn tone(urgency: Urgency, sentiment: Sentiment) -> &'static str {
    match (urgency, sentiment) {
        (Urgency::High, Sentiment::Positive) => {
            "Your excitement is justified; move while the energy is high."
        }
        (Urgency::High, Sentiment::Negative) => {
            "Breathe before you act; the pressure you feel is louder than the danger."
        }
        (Urgency::High, Sentiment::Neutral) => {
            "Things are moving fast, so decide what matters most today."
        }
        (Urgency::Medium, Sentiment::Positive) => {
            "The good news you are hoping for is closer than it looks."
        }
        (Urgency::Medium, Sentiment::Negative) => {
            "The worry will ease in the coming days as things become clearer."
        }
        (Urgency::Medium, Sentiment::Neutral) => "Expect movement soon.",
        (Urgency::Low, Sentiment::Positive) => "Your optimism is well placed; let it grow slowly.",
        (Urgency::Low, Sentiment::Negative) => {
            "There is no rush; give yourself time to find your footing."
        }
        (Urgency::Low, Sentiment::Neutral) => "Let this unfold at its own pace.",
    }
}

/// Closing advice for a question topic.
pub fn closings(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Career => &[
            "In your work, trust your track record and ask for what you have earned.",
            "Professionally, the next step is visible; take it.",
        ],
        Topic::Relationships => &[
            "In love, honesty will do more than strategy.",
            "With the people close to you, say the thing you have been holding back.",
        ],
        Topic::Financial => &[
            "With money, patience beats speed right now.",
            "Financially, review before you commit and the numbers will follow.",
        ],
        Topic::Health => &[
            "For your wellbeing, rest is part of the work.",
            "Listen to your body; it has been trying to tell you something.",
        ],
        Topic::Family => &[
            "At home, a small gesture will mend more than a long talk.",
            "Your family needs your presence more than your solutions.",
        ],
        Topic::General => &[
            "Trust the process and keep your eyes open.",
            "The path reveals itself one step at a time.",
        ],
    }
}

/// Wrap a combination interpretation in the voice of a style.
pub fn adapt_lead(style: ReadingStyle, name: &str, interpretation: &str) -> String {
    match style {
        ReadingStyle::Direct => format!("{name}. {interpretation}"),
        ReadingStyle::Mystical => format!("The stars align into {name}. {interpretation}"),
        ReadingStyle::Practical => format!("Key pattern: {name}. {interpretation}"),
        ReadingStyle::Poetic => {
            format!("As if drawn by an unseen hand, {name} takes shape. {interpretation}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_insight_names_its_category() {
        for category in CharmCategory::all() {
            for style in ReadingStyle::all() {
                let pool = insights(*category, *style);
                assert!(!pool.is_empty());
                for line in pool {
                    assert!(line.contains(&category.to_string()), "{category}/{style}: {line}");
                }
            }
        }
    }

    #[test]
    fn pools_are_never_empty() {
        for style in ReadingStyle::all() {
            assert!(!openings(*style).is_empty());
        }
        for topic in [
            Topic::Career,
            Topic::Relationships,
            Topic::Financial,
            Topic::Health,
            Topic::Family,
            Topic::General,
        ] {
            assert!(!closings(topic).is_empty());
        }
    }

    #[test]
    fn lead_adaptation_names_combination() {
        for style in ReadingStyle::all() {
            let text = adapt_lead(*style, "The Golden Path", "Go.");
            assert!(text.contains("The Golden Path"));
            assert!(text.ends_with("Go."));
        }
    }
}
