//! Role extraction from the two header rows of a scouting table.
//!
//! Layout:
//! - row 0: category per column (e.g. `"Striker"`, `"Wing"`)
//! - row 1: role name per column (e.g. `"Deep-Lying Forward"`)
//! - row 2+: attribute rows, handled by [`crate::weights`]
//!
//! Column 0 holds attribute names and never describes a role.

use std::path::Path;

use fm_roles_core::{Phase, RoleRecord};

use crate::error::GenerateError;
use crate::table::Row;

/// Category row, name row, and at least one attribute row.
pub const MIN_TABLE_ROWS: usize = 3;

const CATEGORY_ROW: usize = 0;
const NAME_ROW: usize = 1;
const FIRST_ROLE_COLUMN: usize = 1;

/// A role under construction together with the source column it reads from.
///
/// The column index only lives as long as the table does; it is dropped when
/// the record is handed to the generator.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedRole {
    pub column: usize,
    pub record: RoleRecord,
}

/// Trim a header cell.
pub fn clean_header(text: &str) -> &str {
    text.trim()
}

/// Reject tables that cannot hold any weighted role.
pub fn check_table_shape(rows: &[Row], path: &Path) -> Result<(), GenerateError> {
    if rows.len() < MIN_TABLE_ROWS {
        return Err(GenerateError::malformed_table(path, rows.len()));
    }
    Ok(())
}

/// Build one role per non-empty name cell, left to right.
///
/// Columns with an empty name are spacers and produce nothing. A category
/// row shorter than the name row leaves the category empty.
pub fn extract_roles(rows: &[Row], phase: Phase) -> Vec<ExtractedRole> {
    let (Some(categories), Some(names)) = (rows.get(CATEGORY_ROW), rows.get(NAME_ROW)) else {
        return Vec::new();
    };

    let mut roles = Vec::new();
    for (column, raw_name) in names.iter().enumerate().skip(FIRST_ROLE_COLUMN) {
        let name = clean_header(raw_name);
        if name.is_empty() {
            continue;
        }

        let category = categories
            .get(column)
            .map(|c| clean_header(c))
            .unwrap_or("");

        roles.push(ExtractedRole {
            column,
            record: RoleRecord::new(phase, category, name),
        });
    }

    roles
}

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod tests;
