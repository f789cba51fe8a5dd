mod generate;
mod list;

use std::path::Path;

use fm_roles_lib::{GeneratorConfig, load_config};

use crate::cli_types::GenerateArgs;
use crate::error::CliError;

pub(crate) use generate::run_generate;
pub(crate) use list::run_list;

/// Resolve the generator configuration: config file (or defaults), then the
/// global `--root`, then per-command path overrides.
pub(crate) fn resolve_config(
    config_file: Option<&Path>,
    root: Option<&Path>,
    args: &GenerateArgs,
) -> Result<GeneratorConfig, CliError> {
    let mut config = match config_file {
        Some(path) => load_config(path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(root) = root {
        config.root = Some(root.to_path_buf());
    }
    if let Some(p) = &args.in_possession {
        config.in_possession = p.clone();
    }
    if let Some(p) = &args.out_possession {
        config.out_possession = p.clone();
    }
    if let Some(p) = &args.output {
        config.output = p.clone();
    }

    log::debug!("Using config: {:?}", config);
    Ok(config)
}
