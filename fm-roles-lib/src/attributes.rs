//! Attribute name normalization.
//!
//! Attribute rows carry display names like `"Off The Ball"`; the rating engine
//! keys on the concatenated form (`"OffTheBall"`).

/// Known transcription mistakes in the source tables, as
/// `(normalized misspelling, corrected name)`. Matched exactly after
/// whitespace removal.
pub static KNOWN_TYPOS: &[(&str, &str)] = &[("NatualFitness", "NaturalFitness")];

/// Attribute names the player-rating engine can score.
pub static KNOWN_ATTRIBUTES: &[&str] = &[
    // Technical
    "Crossing",
    "Dribbling",
    "Finishing",
    "FirstTouch",
    "Heading",
    "LongShots",
    "Marking",
    "Passing",
    "Tackling",
    "Technique",
    // Set pieces
    "Corners",
    "FreeKickTaking",
    "LongThrows",
    "PenaltyTaking",
    // Mental
    "Aggression",
    "Anticipation",
    "Bravery",
    "Composure",
    "Concentration",
    "Decisions",
    "Determination",
    "Flair",
    "Leadership",
    "OffTheBall",
    "Positioning",
    "Teamwork",
    "Vision",
    "WorkRate",
    // Physical
    "Acceleration",
    "Agility",
    "Balance",
    "JumpingReach",
    "NaturalFitness",
    "Pace",
    "Stamina",
    "Strength",
];

/// Normalize a raw attribute cell: drop all whitespace, then fix known typos.
///
/// `" Off The Ball "` → `"OffTheBall"`, `"Natual Fitness"` → `"NaturalFitness"`.
pub fn normalize_attribute(raw: &str) -> String {
    let compact: String = raw.trim().chars().filter(|c| !c.is_whitespace()).collect();

    KNOWN_TYPOS
        .iter()
        .find(|(bad, _)| *bad == compact)
        .map(|(_, fixed)| fixed.to_string())
        .unwrap_or(compact)
}

/// Check whether the rating engine recognizes a normalized attribute name.
/// The engine looks names up case-insensitively.
pub fn is_known_attribute(name: &str) -> bool {
    KNOWN_ATTRIBUTES.iter().any(|known| known.eq_ignore_ascii_case(name))
}
