//! Reading a generated roles file back, the way the rating tool consumes it.

use std::io::ErrorKind;
use std::path::Path;

use fm_roles_core::{Phase, RoleRecord};

use crate::error::GenerateError;

/// Load every role from a `roles.json` file.
pub fn load_roles(path: &Path) -> Result<Vec<RoleRecord>, GenerateError> {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(GenerateError::missing_input(path));
        }
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_str(&json)?)
}

/// Roles belonging to one phase, in file order.
pub fn roles_for_phase(roles: &[RoleRecord], phase: Phase) -> impl Iterator<Item = &RoleRecord> {
    roles.iter().filter(move |role| role.phase == phase)
}
