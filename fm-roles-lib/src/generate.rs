//! Run both phase pipelines and write the pooled roles as JSON.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use fm_roles_core::{Phase, RoleRecord};

use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::extract::{check_table_shape, extract_roles};
use crate::progress::GenerateProgress;
use crate::table::load_table;
use crate::weights::assign_weights;

/// What happened to one phase table during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseStatus {
    /// Table was read and produced this many roles
    Loaded { roles: usize },
    /// Table file does not exist
    Missing,
    /// Table has fewer than the minimum number of rows
    Malformed { rows: usize },
}

impl PhaseStatus {
    /// Status for a phase skipped because of `err`, or `None` if `err` must
    /// abort the run.
    fn skipped(err: &GenerateError) -> Option<Self> {
        if !err.is_recoverable() {
            return None;
        }
        match err {
            GenerateError::MalformedTable { rows, .. } => Some(Self::Malformed { rows: *rows }),
            _ => Some(Self::Missing),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseOutcome {
    pub phase: Phase,
    pub path: PathBuf,
    pub status: PhaseStatus,
}

/// Roles from every phase, before anything is written.
#[derive(Debug, Clone, Default)]
pub struct CollectedRoles {
    pub roles: Vec<RoleRecord>,
    pub outcomes: Vec<PhaseOutcome>,
    /// Ids produced more than once (same phase, category and name)
    pub duplicate_ids: Vec<String>,
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub outcomes: Vec<PhaseOutcome>,
    pub total: usize,
    pub output: PathBuf,
    pub duplicate_ids: Vec<String>,
}

/// Load one phase table and turn it into finished role records.
pub fn build_phase_roles(path: &Path, phase: Phase) -> Result<Vec<RoleRecord>, GenerateError> {
    let rows = load_table(path)?;
    check_table_shape(&rows, path)?;

    let mut roles = extract_roles(&rows, phase);
    let unknown = assign_weights(&rows, &mut roles);
    for name in &unknown {
        log::warn!(
            "{}: attribute '{}' is not recognized by the rating engine",
            path.display(),
            name
        );
    }

    Ok(roles.into_iter().map(|role| role.record).collect())
}

/// Run every phase in order and pool the results.
///
/// A missing or too-short table contributes zero roles and the run goes on.
/// Any other error aborts.
pub fn collect_roles(
    config: &GeneratorConfig,
    progress: &dyn GenerateProgress,
) -> Result<CollectedRoles, GenerateError> {
    let mut collected = CollectedRoles::default();

    for (phase, path) in config.phase_inputs() {
        progress.on_phase_start(phase, &path);

        let status = match build_phase_roles(&path, phase) {
            Ok(roles) => {
                progress.on_phase_done(phase, roles.len());
                let status = PhaseStatus::Loaded { roles: roles.len() };
                collected.roles.extend(roles);
                status
            }
            Err(e) => match PhaseStatus::skipped(&e) {
                Some(status) => {
                    progress.on_phase_skipped(phase, &e);
                    status
                }
                None => return Err(e),
            },
        };

        collected.outcomes.push(PhaseOutcome {
            phase,
            path,
            status,
        });
    }

    collected.duplicate_ids = find_duplicate_ids(&collected.roles);
    for id in &collected.duplicate_ids {
        log::warn!("Duplicate role id '{}': consumers keyed by id will see only one", id);
    }

    Ok(collected)
}

fn find_duplicate_ids(roles: &[RoleRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();
    for role in roles {
        if !seen.insert(role.id.as_str()) && !duplicates.contains(&role.id) {
            duplicates.push(role.id.clone());
        }
    }
    duplicates
}

/// Serialize roles as a pretty-printed JSON array (2-space indent).
pub fn render_roles_json(roles: &[RoleRecord]) -> Result<String, GenerateError> {
    Ok(serde_json::to_string_pretty(roles)?)
}

/// Write roles to `path`, replacing any existing content.
pub fn write_roles(path: &Path, roles: &[RoleRecord]) -> Result<(), GenerateError> {
    let json = render_roles_json(roles)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Collect roles from both phases and write the output file.
pub fn generate(
    config: &GeneratorConfig,
    progress: &dyn GenerateProgress,
) -> Result<GenerateReport, GenerateError> {
    let collected = collect_roles(config, progress)?;
    let output = config.output_path();
    write_roles(&output, &collected.roles)?;

    let total = collected.roles.len();
    progress.on_complete(total, &output);

    Ok(GenerateReport {
        outcomes: collected.outcomes,
        total,
        output,
        duplicate_ids: collected.duplicate_ids,
    })
}

#[cfg(test)]
#[path = "tests/generate_tests.rs"]
mod tests;
