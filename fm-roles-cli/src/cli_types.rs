//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use fm_roles_lib::Phase;

#[derive(Parser)]
#[command(name = "fm-roles")]
#[command(about = "Generate roles.json from in/out-of-possession scouting tables", long_about = None)]
pub(crate) struct Cli {
    /// Directory containing the phase tables (defaults to current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// TOML file overriding input and output locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Defaults to `generate` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Path overrides for a generator run.
#[derive(Args, Clone, Default)]
pub(crate) struct GenerateArgs {
    /// In-possession CSV table
    #[arg(long)]
    pub in_possession: Option<PathBuf>,

    /// Out-of-possession CSV table
    #[arg(long)]
    pub out_possession: Option<PathBuf>,

    /// Where to write the roles JSON
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Read both phase tables and write roles.json
    Generate(GenerateArgs),

    /// Show the roles in a generated roles file
    List {
        /// Roles file to read (defaults to the configured output)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Only show one phase (in, out)
        #[arg(short, long)]
        phase: Option<Phase>,

        /// Print each role's attribute weights
        #[arg(short, long)]
        weights: bool,
    },
}
