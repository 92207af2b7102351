//! The standard twelve-house wheel.

use crate::house::House;

/// Standard houses: `(ordinal, name, keyword, description)`.
pub const HOUSES: [(u8, &str, &str, &str); 12] = [
    (1, "First House", "Genesis", "Self, identity, appearance, beginnings"),
    (2, "Second House", "Resources", "Money, possessions, values, self-worth"),
    (3, "Third House", "Communication", "Learning, siblings, local travel, thoughts"),
    (4, "Fourth House", "Foundation", "Home, family, roots, security, the past"),
    (5, "Fifth House", "Creation", "Creativity, romance, children, pleasure"),
    (6, "Sixth House", "Service", "Work, health, routines, improvement"),
    (7, "Seventh House", "Partnership", "Relationships, contracts, open enemies"),
    (8, "Eighth House", "Transformation", "Shared resources, death, rebirth, the occult"),
    (9, "Ninth House", "Expansion", "Higher learning, travel, philosophy, beliefs"),
    (10, "Tenth House", "Legacy", "Career, public image, authority, achievement"),
    (11, "Eleventh House", "Community", "Friends, groups, hopes, humanitarian causes"),
    (12, "Twelfth House", "Dissolution", "Unconscious, secrets, spirituality, endings"),
];

/// Build owned houses from [`HOUSES`].
pub fn standard_houses() -> Vec<House> {
    HOUSES
        .iter()
        .map(|(ordinal, name, keyword, description)| {
            House::new(*ordinal, *name, *keyword, *description)
        })
        .collect()
}
