//! Generation progress reporting.

use std::path::Path;

use fm_roles_core::Phase;

use crate::error::GenerateError;

/// Trait for receiving generation progress updates.
pub trait GenerateProgress {
    /// Called before a phase table is read.
    fn on_phase_start(&self, phase: Phase, path: &Path);

    /// Called after a phase produced its roles.
    fn on_phase_done(&self, phase: Phase, roles: usize);

    /// Called when a phase contributes nothing because of a recoverable error.
    fn on_phase_skipped(&self, phase: Phase, reason: &GenerateError);

    /// Called once the output file has been written.
    fn on_complete(&self, total: usize, output: &Path);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl GenerateProgress for SilentProgress {
    fn on_phase_start(&self, _phase: Phase, _path: &Path) {}
    fn on_phase_done(&self, _phase: Phase, _roles: usize) {}
    fn on_phase_skipped(&self, _phase: Phase, _reason: &GenerateError) {}
    fn on_complete(&self, _total: usize, _output: &Path) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl GenerateProgress for LogProgress {
    fn on_phase_start(&self, phase: Phase, path: &Path) {
        log::info!("Processing {}...", phase.label());
        log::debug!("  reading {}", path.display());
    }

    fn on_phase_done(&self, _phase: Phase, roles: usize) {
        log::info!(" -> Found {} roles.", roles);
    }

    fn on_phase_skipped(&self, _phase: Phase, reason: &GenerateError) {
        log::warn!("{}", reason);
    }

    fn on_complete(&self, total: usize, output: &Path) {
        log::info!("");
        log::info!(
            "Success! Generated {} roles in '{}'.",
            total,
            output.display()
        );
    }
}
