//! Weight assignment from the attribute rows of a scouting table.

use fm_roles_core::{PRIMARY_WEIGHT, SECONDARY_WEIGHT};

use crate::attributes::{is_known_attribute, normalize_attribute};
use crate::extract::ExtractedRole;
use crate::table::Row;

const FIRST_ATTRIBUTE_ROW: usize = 2;
const ATTRIBUTE_COLUMN: usize = 0;

/// Map a table cell to a weight: `primary` → 3, `secondary` → 2, anything
/// else → 0. Case and surrounding whitespace are ignored.
pub fn weight_for_cell(value: &str) -> u32 {
    match value.trim().to_lowercase().as_str() {
        "primary" => PRIMARY_WEIGHT,
        "secondary" => SECONDARY_WEIGHT,
        _ => 0,
    }
}

/// Fill each role's weights from the attribute rows (row 2 onwards).
///
/// Rows without an attribute name are skipped. A row shorter than a role's
/// column contributes nothing to that role. When an attribute repeats, the
/// later non-zero weight replaces the earlier one.
///
/// Returns the normalized attribute names the rating engine does not know,
/// in first-seen order.
pub fn assign_weights(rows: &[Row], roles: &mut [ExtractedRole]) -> Vec<String> {
    let mut unknown: Vec<String> = Vec::new();

    for row in rows.iter().skip(FIRST_ATTRIBUTE_ROW) {
        let Some(raw_attr) = row.get(ATTRIBUTE_COLUMN) else {
            continue;
        };
        if raw_attr.trim().is_empty() {
            continue;
        }

        let attr_name = normalize_attribute(raw_attr);
        if !is_known_attribute(&attr_name) && !unknown.contains(&attr_name) {
            unknown.push(attr_name.clone());
        }

        for role in roles.iter_mut() {
            let Some(cell) = row.get(role.column) else {
                continue;
            };
            role.record.set_weight(attr_name.as_str(), weight_for_cell(cell));
        }
    }

    unknown
}

#[cfg(test)]
#[path = "tests/weights_tests.rs"]
mod tests;
