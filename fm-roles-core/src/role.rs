use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::phase::Phase;

/// Weight for an attribute marked `primary` in the source table.
pub const PRIMARY_WEIGHT: u32 = 3;

/// Weight for an attribute marked `secondary` in the source table.
pub const SECONDARY_WEIGHT: u32 = 2;

/// Attribute name → weight, in the order attributes appear in the source table.
pub type Weights = IndexMap<String, u32>;

/// A single role definition as written to `roles.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoleRecord {
    /// Slug of phase, category and name (see [`generate_id`])
    pub id: String,
    /// Role label, e.g. `"Deep-Lying Forward"`
    pub name: String,
    /// Position group, e.g. `"Striker"` (may be empty)
    pub category: String,
    /// Which phase table produced this role
    pub phase: Phase,
    /// Only non-zero weights are stored
    #[serde(default)]
    pub weights: Weights,
}

impl RoleRecord {
    /// Create a role with a generated id and no weights.
    pub fn new(phase: Phase, category: impl Into<String>, name: impl Into<String>) -> Self {
        let category = category.into();
        let name = name.into();
        Self {
            id: generate_id(phase.tag(), &category, &name),
            name,
            category,
            phase,
            weights: Weights::new(),
        }
    }

    /// Record a weight for an attribute.
    ///
    /// Zero is never stored and never replaces an existing entry. A non-zero
    /// weight overwrites whatever an earlier row stored for the same attribute.
    pub fn set_weight(&mut self, attribute: impl Into<String>, weight: u32) {
        if weight > 0 {
            self.weights.insert(attribute.into(), weight);
        }
    }

    /// Stored weight for an attribute, or 0 if absent.
    pub fn weight(&self, attribute: &str) -> u32 {
        self.weights.get(attribute).copied().unwrap_or(0)
    }
}

/// Build a role id from its phase tag, category and name.
///
/// Each part is lowercased and spaces in category and name become hyphens.
/// Everything else (including existing hyphens) passes through unchanged.
///
/// `("InPossession", "Center Back", "Ball-Playing Center-Back")` →
/// `"inpossession-center-back-ball-playing-center-back"`
pub fn generate_id(phase: &str, category: &str, name: &str) -> String {
    let category_slug = category.to_lowercase().replace(' ', "-");
    let name_slug = name.to_lowercase().replace(' ', "-");
    format!("{}-{}-{}", phase.to_lowercase(), category_slug, name_slug)
}

#[cfg(test)]
#[path = "tests/role_tests.rs"]
mod tests;
