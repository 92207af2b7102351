//! The standard combination table.

use crate::charm::CharmId;
use crate::combination::{CharmCombination, CombinationCategory, CombinationRarity};

use CombinationCategory::{Insight, Power, Timing, Transformation, Warning};
use CombinationRarity::{Common, Legendary, Rare, Uncommon};

/// Static definition of a combination, keyed by charm ids.
pub struct CombinationDef {
    /// Required charm ids.
    pub charms: &'static [&'static str],
    /// Display name.
    pub name: &'static str,
    /// Short summary.
    pub description: &'static str,
    /// Interpretation paragraph.
    pub interpretation: &'static str,
    /// Priority tier.
    pub rarity: CombinationRarity,
    /// Message kind.
    pub category: CombinationCategory,
}

/// Standard combinations, grouped by tier.
pub const COMBINATIONS: &[CombinationDef] = &[
    // legendary
    CombinationDef {
        charms: &["catalyst", "tipping-point", "supernova"],
        name: "The Trinity of Destruction",
        description: "Complete system overhaul incoming",
        interpretation: "Your entire reality is about to explode and rebuild itself. This isn't a gentle transition—it's a controlled demolition of everything that no longer serves you. The old you dies here. What emerges will be unrecognizable but infinitely more powerful.",
        rarity: Legendary,
        category: Transformation,
    },
    CombinationDef {
        charms: &["eclipse", "stargate", "quantum-leap"],
        name: "The Cosmic Portal",
        description: "Dimensional shift in progress",
        interpretation: "You're being pulled into a completely different timeline. This combination opens doorways that most people never even see. Reality is bending around you—step through the portal or spend your life wondering what could have been.",
        rarity: Legendary,
        category: Power,
    },
    CombinationDef {
        charms: &["flow", "synchronicity", "wormhole"],
        name: "The Divine Current",
        description: "Perfect alignment with universal forces",
        interpretation: "You've tapped into the universe's operating system. Every door opens, every light turns green, every person you need appears. This is what it feels like when you're completely in sync with your destiny. Don't question it—ride it.",
        rarity: Legendary,
        category: Power,
    },
    CombinationDef {
        charms: &["red-light", "locked-door", "thin-ice"],
        name: "The Wall of No",
        description: "Universe is protecting you from disaster",
        interpretation: "Every path forward is blocked because you're about to walk off a cliff. This isn't punishment—it's protection. The universe is literally saving you from yourself. Stop pushing and start listening.",
        rarity: Legendary,
        category: Warning,
    },
    // rare
    CombinationDef {
        charms: &["catalyst", "tipping-point"],
        name: "The Breaking Point",
        description: "Critical mass achieved",
        interpretation: "You've reached the moment where small actions create massive results. One conversation, one decision, one bold move will trigger an avalanche of change. The pressure you've been feeling? It's about to release spectacularly.",
        rarity: Rare,
        category: Transformation,
    },
    CombinationDef {
        charms: &["eclipse", "supernova"],
        name: "Death and Rebirth",
        description: "Phoenix rising from ashes",
        interpretation: "Something in your life is dying a spectacular death so something infinitely better can be born. This isn't loss—it's metamorphosis. What's exploding needed to go anyway. Embrace the destruction.",
        rarity: Rare,
        category: Transformation,
    },
    CombinationDef {
        charms: &["gut-check", "gasp"],
        name: "The Truth Bomb",
        description: "Sudden realization shatters illusions",
        interpretation: "Your intuition is about to deliver a reality check that changes everything. That nagging feeling you've been ignoring? It's about to become impossible to deny. The truth will hit like lightning.",
        rarity: Rare,
        category: Insight,
    },
    CombinationDef {
        charms: &["last-call", "red-light"],
        name: "The Final Warning",
        description: "Last chance before consequences",
        interpretation: "This is your final opportunity to change course before the universe makes the decision for you. You've been given multiple chances—this is the last one. Act now or have action taken for you.",
        rarity: Rare,
        category: Warning,
    },
    CombinationDef {
        charms: &["flow", "shortcut"],
        name: "The Golden Path",
        description: "Effortless progress toward goals",
        interpretation: "You've found the secret passage. While others struggle uphill, you're gliding downstream toward your destination. This is what happens when you stop forcing and start flowing. Trust the current.",
        rarity: Rare,
        category: Power,
    },
    CombinationDef {
        charms: &["rewind", "quantum-leap"],
        name: "Time Paradox",
        description: "Past and future colliding",
        interpretation: "An old situation is returning with new possibilities. What felt like going backward is actually a quantum jump forward. You're getting a second chance to do it right this time—with everything you've learned.",
        rarity: Rare,
        category: Timing,
    },
    CombinationDef {
        charms: &["mirror-check", "exposed"],
        name: "The Naked Truth",
        description: "Self-deception ends now",
        interpretation: "You can't hide from yourself anymore. Every mask is coming off, every lie you've told yourself is being exposed. This brutal honesty is exactly what you need to finally become who you're meant to be.",
        rarity: Rare,
        category: Insight,
    },
    CombinationDef {
        charms: &["synchronicity", "stargate"],
        name: "The Cosmic Invitation",
        description: "Universe is actively recruiting you",
        interpretation: "The signs aren't coincidences—they're invitations. The universe is literally trying to get your attention and guide you toward something extraordinary. Stop dismissing the magic as luck.",
        rarity: Rare,
        category: Power,
    },
    CombinationDef {
        charms: &["interference", "fog"],
        name: "The Confusion Matrix",
        description: "External chaos clouding judgment",
        interpretation: "Someone or something is deliberately muddying the waters. The confusion you're feeling isn't natural—it's manufactured. Cut through the noise and trust what you knew before the chaos started.",
        rarity: Rare,
        category: Warning,
    },
    CombinationDef {
        charms: &["second-wind", "jumpstart"],
        name: "The Comeback",
        description: "Renewed energy after setback",
        interpretation: "Just when you thought you were down for the count, you're getting a surge of power that will surprise everyone—including yourself. This isn't just recovery—it's a complete comeback story.",
        rarity: Rare,
        category: Power,
    },
    // uncommon
    CombinationDef {
        charms: &["catalyst", "jumpstart"],
        name: "The Ignition",
        description: "Sudden acceleration of plans",
        interpretation: "Something that's been stuck is about to move fast. The energy you've been building up is ready to explode into action. Buckle up—things are about to accelerate beyond your expectations.",
        rarity: Uncommon,
        category: Power,
    },
    CombinationDef {
        charms: &["detour", "shortcut"],
        name: "The Scenic Route",
        description: "Unexpected path leads to better destination",
        interpretation: "What looks like going the wrong way is actually the fastest route to where you need to be. The detour isn't delaying you—it's delivering you to something better than your original plan.",
        rarity: Uncommon,
        category: Timing,
    },
    CombinationDef {
        charms: &["fine-print", "exposed"],
        name: "The Devil's Details",
        description: "Hidden information comes to light",
        interpretation: "Someone's been hiding the fine print, but not anymore. The details that were conveniently omitted are about to surface. Read everything twice and trust nothing at face value.",
        rarity: Uncommon,
        category: Warning,
    },
    CombinationDef {
        charms: &["overtime", "last-call"],
        name: "The Final Push",
        description: "Extra effort required before deadline",
        interpretation: "You're in the final stretch, but it's going to take everything you've got. This is where champions are made—when you're exhausted but you push through anyway. The finish line is closer than it feels.",
        rarity: Uncommon,
        category: Timing,
    },
    CombinationDef {
        charms: &["reminder", "deja-vu"],
        name: "The Pattern Recognition",
        description: "History repeating with new awareness",
        interpretation: "You've been here before, but this time you're awake to the pattern. The lesson you missed the first time is presenting itself again. Don't make the same mistake twice.",
        rarity: Uncommon,
        category: Insight,
    },
    CombinationDef {
        charms: &["wrong-turn", "wormhole"],
        name: "The Happy Accident",
        description: "Mistake becomes miraculous shortcut",
        interpretation: "That 'wrong' decision is about to prove itself brilliantly right. What felt like a mistake was actually a cosmic course correction. Sometimes the universe has to trick you into your destiny.",
        rarity: Uncommon,
        category: Timing,
    },
    CombinationDef {
        charms: &["hiccup", "flow"],
        name: "The Rhythm Breaker",
        description: "Minor disruption improves overall flow",
        interpretation: "This small interruption is actually recalibrating your rhythm. What feels like a setback is adjusting your timing to sync with something bigger. Let the hiccup reset your flow.",
        rarity: Uncommon,
        category: Timing,
    },
    CombinationDef {
        charms: &["open-tab", "reminder"],
        name: "The Unfinished Business",
        description: "Past obligations demanding attention",
        interpretation: "Something you left incomplete is demanding closure. This isn't about going backward—it's about clearing the deck so you can move forward without baggage. Finish what you started.",
        rarity: Uncommon,
        category: Insight,
    },
    CombinationDef {
        charms: &["out-of-context", "gasp"],
        name: "The Missing Piece",
        description: "Crucial information suddenly makes sense",
        interpretation: "You've been trying to solve a puzzle with missing pieces. The context you've been lacking is about to click into place, and suddenly everything will make perfect sense. The 'aha' moment is coming.",
        rarity: Uncommon,
        category: Insight,
    },
    CombinationDef {
        charms: &["missed-call", "synchronicity"],
        name: "The Second Chance",
        description: "Opportunity returns in new form",
        interpretation: "That opportunity you thought you missed? It's circling back in a different package. The universe rarely gives up on a good match—it just changes the delivery method. Pay attention this time.",
        rarity: Uncommon,
        category: Timing,
    },
    // common
    CombinationDef {
        charms: &["flow", "backdrop"],
        name: "The Perfect Setting",
        description: "Environment supports natural progress",
        interpretation: "Everything around you is aligned to support your success. The timing, the people, the circumstances—it's all working in your favor. Stop second-guessing and start moving.",
        rarity: Common,
        category: Power,
    },
    CombinationDef {
        charms: &["rewind", "reminder"],
        name: "The Lesson Replay",
        description: "Past wisdom resurfaces when needed",
        interpretation: "Something you learned before is exactly what you need now. The experience you thought was just history is actually your instruction manual for the present situation.",
        rarity: Common,
        category: Insight,
    },
    CombinationDef {
        charms: &["interference", "red-light"],
        name: "The Protective Block",
        description: "Obstacles preventing bigger problems",
        interpretation: "These frustrating delays are actually saving you from something worse. The interference isn't random—it's protective. Trust that being stopped now prevents a crash later.",
        rarity: Common,
        category: Warning,
    },
    CombinationDef {
        charms: &["gut-check", "fine-print"],
        name: "The Instinct Alert",
        description: "Intuition warns about hidden details",
        interpretation: "Your gut is picking up on something the details aren't revealing. That uneasy feeling isn't paranoia—it's your inner radar detecting what's not being said. Dig deeper.",
        rarity: Common,
        category: Warning,
    },
    CombinationDef {
        charms: &["jumpstart", "second-wind"],
        name: "The Energy Boost",
        description: "Renewed motivation after stagnation",
        interpretation: "The energy you've been missing is suddenly available again. This isn't just getting back to where you were—it's launching from a higher platform. Use this momentum wisely.",
        rarity: Common,
        category: Power,
    },
    CombinationDef {
        charms: &["mirror-check", "reminder"],
        name: "The Self-Awareness Moment",
        description: "Honest self-reflection reveals truth",
        interpretation: "It's time to look honestly at your role in your current situation. The reminder you need isn't external—it's internal. What you already know but haven't admitted is the key.",
        rarity: Common,
        category: Insight,
    },
    CombinationDef {
        charms: &["overtime", "fine-print"],
        name: "The Extra Mile",
        description: "Additional effort reveals hidden benefits",
        interpretation: "The extra work you're putting in has benefits you haven't discovered yet. Read the fine print of your efforts—there are rewards hidden in the details of your dedication.",
        rarity: Common,
        category: Insight,
    },
    CombinationDef {
        charms: &["fog", "gut-check"],
        name: "The Intuitive Navigation",
        description: "Inner guidance through confusion",
        interpretation: "When you can't see clearly, your instincts become your compass. The fog is external—your inner knowing is crystal clear. Trust what you feel over what you think you see.",
        rarity: Common,
        category: Insight,
    },
];

/// Build owned combinations from [`COMBINATIONS`].
pub fn standard_combinations() -> Vec<CharmCombination> {
    COMBINATIONS
        .iter()
        .map(|def| CharmCombination {
            charms: def.charms.iter().map(|id| CharmId::from(*id)).collect(),
            name: def.name.to_string(),
            description: def.description.to_string(),
            interpretation: def.interpretation.to_string(),
            rarity: def.rarity,
            category: def.category,
        })
        .collect()
}
