//! Generator configuration: where the phase tables live and where
//! `roles.json` goes.
//!
//! Defaults reproduce the fixed layout of a plain run in the data directory:
//! `in_possession.csv` and `out_possession.csv` in, `roles.json` out. An
//! optional TOML file can override any of these, e.g.
//!
//! ```toml
//! root = "data/fm26"
//! out_possession = "oop.csv"
//! output = "../roles.json"
//! ```

use std::path::{Path, PathBuf};

use fm_roles_core::Phase;
use serde::Deserialize;

use crate::error::GenerateError;

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "roles.json";

/// Input and output locations for a generator run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory relative paths are resolved against (`None` = working directory)
    pub root: Option<PathBuf>,
    /// In-possession table
    pub in_possession: PathBuf,
    /// Out-of-possession table
    pub out_possession: PathBuf,
    /// Generated roles file
    pub output: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            root: None,
            in_possession: PathBuf::from(Phase::InPossession.default_file_name()),
            out_possession: PathBuf::from(Phase::OutPossession.default_file_name()),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl GeneratorConfig {
    /// Default file names under a different directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            ..Self::default()
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) => root.join(path),
            None => path.to_path_buf(),
        }
    }

    /// Resolved table path for a phase.
    pub fn input_path(&self, phase: Phase) -> PathBuf {
        match phase {
            Phase::InPossession => self.resolve(&self.in_possession),
            Phase::OutPossession => self.resolve(&self.out_possession),
        }
    }

    /// Resolved output path.
    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.output)
    }

    /// Every phase with its table path, in processing order.
    pub fn phase_inputs(&self) -> Vec<(Phase, PathBuf)> {
        Phase::all()
            .iter()
            .map(|&phase| (phase, self.input_path(phase)))
            .collect()
    }
}

/// Load a configuration file. Keys that are absent keep their defaults.
pub fn load_config(path: &Path) -> Result<GeneratorConfig, GenerateError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| GenerateError::config(format!("cannot read {}: {e}", path.display())))?;
    toml::from_str(&contents)
        .map_err(|e| GenerateError::config(format!("invalid {}: {e}", path.display())))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
