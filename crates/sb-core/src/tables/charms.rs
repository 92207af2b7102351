//! The standard charm catalog.

use crate::charm::{Charm, CharmCategory, CharmRarity};

use CharmCategory::{Challenges, Growth, Insights, Opportunities, Transitions};
use CharmRarity::{Common, Rare};

/// Standard charms: `(id, name, description, rarity, category)`.
pub const CHARMS: &[(&str, &str, &str, CharmRarity, CharmCategory)] = &[
    ("flow", "Flow", "Go with the natural rhythm of events", Common, Growth),
    ("catalyst", "Catalyst", "A trigger for significant change", Common, Opportunities),
    ("detour", "Detour", "An unexpected but necessary path", Common, Transitions),
    ("shortcut", "Shortcut", "A faster way to your destination", Common, Transitions),
    ("backdrop", "Backdrop", "The setting or environment matters", Common, Challenges),
    ("rewind", "Rewind", "Return to a previous point", Common, Opportunities),
    ("gut-check", "Gut Check", "Trust your intuition here", Common, Challenges),
    ("fine-print", "Fine Print", "Pay attention to details", Common, Growth),
    ("last-call", "Last Call", "A final opportunity", Common, Challenges),
    ("overtime", "Overtime", "Extra effort is required", Common, Insights),
    ("tipping-point", "Tipping Point", "A moment of critical change", Common, Insights),
    ("reminder", "Reminder", "Something you already know but forgot", Common, Opportunities),
    ("interference", "Interference", "External factors disrupting progress", Common, Transitions),
    ("missed-call", "Missed Call", "An opportunity you didn't notice", Common, Opportunities),
    ("open-tab", "Open Tab", "Unfinished business to address", Common, Insights),
    ("out-of-context", "Out of Context", "You're missing important information", Common, Insights),
    ("deja-vu", "Déjà Vu", "A pattern repeating itself", Common, Transitions),
    ("jumpstart", "Jumpstart", "A boost of energy or motivation", Common, Insights),
    ("red-light", "Red Light", "Stop and reconsider", Common, Opportunities),
    ("second-wind", "Second Wind", "Renewed strength after difficulty", Common, Transitions),
    ("exposed", "Exposed", "Hidden truths coming to light", Common, Insights),
    ("synchronicity", "Synchronicity", "Meaningful coincidences", Common, Transitions),
    ("locked-door", "Locked Door", "A path that's currently closed", Common, Challenges),
    ("wrong-turn", "Wrong Turn", "A mistake that leads somewhere unexpected", Common, Opportunities),
    ("hiccup", "Hiccup", "A minor but annoying obstacle", Common, Opportunities),
    ("fog", "Fog", "Unclear vision or confusion", Common, Growth),
    ("mirror-check", "Mirror Check", "Time for self-reflection", Common, Opportunities),
    ("gasp", "Gasp", "A sudden realization", Common, Challenges),
    ("thin-ice", "Thin Ice", "Proceed with extreme caution", Common, Insights),
    ("green-light", "Green Light", "Permission to proceed with confidence", Common, Challenges),
    ("breakthrough", "Breakthrough", "A moment of clarity that changes everything", Common, Challenges),
    ("anchor", "Anchor", "Stability in turbulent times", Common, Growth),
    ("compass", "Compass", "Inner guidance pointing true north", Common, Opportunities),
    ("sunrise", "Sunrise", "A fresh beginning after darkness", Common, Transitions),
    ("bridge", "Bridge", "Connection across a divide", Common, Challenges),
    ("harvest", "Harvest", "Reaping the rewards of past efforts", Common, Opportunities),
    ("spark", "Spark", "The beginning of something brilliant", Common, Transitions),
    ("oasis", "Oasis", "Refreshment in a challenging journey", Common, Insights),
    ("key", "Key", "The solution you've been seeking", Common, Growth),
    ("crossroads", "Crossroads", "A difficult choice must be made", Common, Opportunities),
    ("storm-warning", "Storm Warning", "Turbulence ahead, prepare accordingly", Common, Transitions),
    ("quicksand", "Quicksand", "The more you struggle, the deeper you sink", Common, Challenges),
    ("echo", "Echo", "Past actions returning with consequences", Common, Insights),
    ("mask", "Mask", "Someone is not showing their true self", Common, Opportunities),
    ("leak", "Leak", "Energy or resources slowly draining away", Common, Challenges),
    ("shadow", "Shadow", "Hidden aspects demanding attention", Common, Transitions),
    ("friction", "Friction", "Resistance that slows progress", Common, Growth),
    ("mirage", "Mirage", "What appears real may be illusion", Common, Opportunities),
    ("undertow", "Undertow", "Hidden currents pulling you off course", Common, Growth),
    ("pause", "Pause", "A moment to breathe and reassess", Common, Growth),
    ("shuffle", "Shuffle", "Rearranging elements for better alignment", Common, Transitions),
    ("pendulum", "Pendulum", "Natural swing between opposing forces", Common, Growth),
    ("threshold", "Threshold", "Standing at the edge of transformation", Common, Insights),
    ("tide", "Tide", "Natural ebb and flow of circumstances", Common, Insights),
    ("prism", "Prism", "Multiple perspectives revealing truth", Common, Growth),
    ("spiral", "Spiral", "Circular progress with deeper understanding", Common, Transitions),
    ("metamorphosis", "Metamorphosis", "Gradual transformation in progress", Common, Opportunities),
    ("compass-rose", "Compass Rose", "All directions hold potential", Common, Opportunities),
    ("hourglass", "Hourglass", "Time is both limited and cyclical", Common, Opportunities),
    ("eclipse", "Eclipse", "A rare alignment bringing profound change", Rare, Insights),
    ("supernova", "Supernova", "Explosive transformation", Rare, Transitions),
    ("wormhole", "Wormhole", "A shortcut through space and time", Rare, Opportunities),
    ("quantum-leap", "Quantum Leap", "An inexplicable jump forward", Rare, Challenges),
    ("stargate", "Stargate", "A portal to new dimensions", Rare, Transitions),
    ("phoenix-rising", "Phoenix Rising", "Rebirth from complete destruction into something magnificent", Rare, Growth),
    ("golden-thread", "Golden Thread", "Divine connection weaving through all circumstances", Rare, Challenges),
    ("cosmic-alignment", "Cosmic Alignment", "Universal forces conspiring in your favor", Rare, Opportunities),
    ("dark-night", "Dark Night", "A profound spiritual crisis that precedes awakening", Rare, Transitions),
    ("void", "Void", "Complete emptiness that contains infinite potential", Rare, Challenges),
    ("shattered-mirror", "Shattered Mirror", "Illusions breaking apart to reveal deeper truth", Rare, Transitions),
    ("ouroboros", "Ouroboros", "The eternal cycle of endings becoming beginnings", Rare, Insights),
    ("singularity", "Singularity", "A point where all possibilities converge", Rare, Transitions),
];

/// Build owned charms from [`CHARMS`].
pub fn standard_charms() -> Vec<Charm> {
    CHARMS
        .iter()
        .map(|(id, name, description, rarity, category)| {
            Charm::new(*id, *name, *description, *rarity, *category)
        })
        .collect()
}
