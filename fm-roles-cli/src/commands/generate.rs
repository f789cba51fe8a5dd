use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use fm_roles_lib::{GeneratorConfig, LogProgress, PhaseStatus, generate};

use crate::error::CliError;

/// Generate the roles file and print a per-phase summary.
pub(crate) fn run_generate(config: &GeneratorConfig) -> Result<(), CliError> {
    let report = generate(config, &LogProgress)?;

    for outcome in &report.outcomes {
        let status = match outcome.status {
            PhaseStatus::Loaded { roles } => format!("{roles} roles")
                .if_supports_color(Stdout, |t| t.green())
                .to_string(),
            PhaseStatus::Missing => "missing"
                .if_supports_color(Stdout, |t| t.yellow())
                .to_string(),
            PhaseStatus::Malformed { rows } => format!("skipped ({rows} rows)")
                .if_supports_color(Stdout, |t| t.yellow())
                .to_string(),
        };
        log::debug!(
            "  {:<16} {} ({})",
            outcome.phase.label(),
            status,
            outcome.path.display()
        );
    }

    if !report.duplicate_ids.is_empty() {
        log::warn!(
            "{} duplicate role id(s) written; see warnings above",
            report.duplicate_ids.len()
        );
    }

    Ok(())
}
