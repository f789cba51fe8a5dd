use serde::{Deserialize, Serialize};

/// The game state a role table describes.
///
/// Variant order is processing order: in-possession roles are always emitted
/// before out-of-possession roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    /// Our team has the ball
    InPossession,
    /// The opponent has the ball
    OutPossession,
}

static ALL_PHASES: &[Phase] = &[Phase::InPossession, Phase::OutPossession];

impl Phase {
    /// Tag written to the `Phase` field of every role and used as the id prefix.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::InPossession => "InPossession",
            Self::OutPossession => "OutPossession",
        }
    }

    /// Human-readable label for console output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InPossession => "In-Possession",
            Self::OutPossession => "Out-Of-Possession",
        }
    }

    /// CSV file read for this phase when no override is configured.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::InPossession => "in_possession.csv",
            Self::OutPossession => "out_possession.csv",
        }
    }

    /// Accepted spellings besides the tag itself (lowercase).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::InPossession => &["in", "in-possession", "in_possession", "ip"],
            Self::OutPossession => &["out", "out-possession", "out_possession", "oop"],
        }
    }

    /// Both phases, in processing order.
    pub fn all() -> &'static [Phase] {
        ALL_PHASES
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Error returned when a string cannot be parsed into a `Phase`.
#[derive(Debug, Clone)]
pub struct PhaseParseError(pub String);

impl std::fmt::Display for PhaseParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown phase: '{}'", self.0)
    }
}

impl std::error::Error for PhaseParseError {}

impl std::str::FromStr for Phase {
    type Err = PhaseParseError;

    /// Parse a phase from its tag or any alias (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        for &phase in ALL_PHASES {
            if phase.tag().to_lowercase() == lower {
                return Ok(phase);
            }
            if phase.aliases().contains(&lower.as_str()) {
                return Ok(phase);
            }
        }
        Err(PhaseParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/phase_tests.rs"]
mod tests;
