use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use fm_roles_lib::{Phase, RoleRecord, load_roles, roles_for_phase};

use crate::error::CliError;

/// Print the roles in a generated file, grouped by phase.
pub(crate) fn run_list(path: &Path, only: Option<Phase>, show_weights: bool) -> Result<(), CliError> {
    let roles = load_roles(path)?;

    log::info!(
        "{} {}",
        "Roles in".if_supports_color(Stdout, |t| t.bold()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );

    for &phase in Phase::all() {
        if only.is_some_and(|p| p != phase) {
            continue;
        }

        let in_phase: Vec<&RoleRecord> = roles_for_phase(&roles, phase).collect();
        log::info!("");
        log::info!(
            "{} ({} roles):",
            phase.label().if_supports_color(Stdout, |t| t.bold()),
            in_phase.len(),
        );

        for role in in_phase {
            print_role(role, show_weights);
        }
    }

    Ok(())
}

fn print_role(role: &RoleRecord, show_weights: bool) {
    let category = if role.category.is_empty() {
        "-"
    } else {
        role.category.as_str()
    };

    log::info!(
        "  {} {} / {} [{} weights]",
        role.id.if_supports_color(Stdout, |t| t.cyan()),
        category,
        role.name,
        role.weights.len(),
    );

    if show_weights {
        for (attribute, weight) in &role.weights {
            log::info!(
                "      {}: {}",
                attribute.if_supports_color(Stdout, |t| t.dimmed()),
                weight
            );
        }
    }
}
