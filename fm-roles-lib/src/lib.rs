//! Generate `roles.json` from per-phase scouting CSV tables.
//!
//! The pipeline runs once per [`Phase`]: [`table`] loads the CSV into rows,
//! [`extract`] turns the two header rows into role records, [`weights`] fills
//! each record from the attribute rows, and [`generate`] pools both phases and
//! writes the JSON array.

pub mod attributes;
pub mod config;
pub mod error;
pub mod extract;
pub mod generate;
pub mod progress;
pub mod roles_file;
pub mod table;
pub mod weights;

pub use fm_roles_core::{Phase, RoleRecord, Weights, generate_id};

pub use attributes::{KNOWN_ATTRIBUTES, KNOWN_TYPOS, is_known_attribute, normalize_attribute};
pub use config::{DEFAULT_OUTPUT, GeneratorConfig, load_config};
pub use error::GenerateError;
pub use extract::{ExtractedRole, MIN_TABLE_ROWS, check_table_shape, clean_header, extract_roles};
pub use generate::{
    CollectedRoles, GenerateReport, PhaseOutcome, PhaseStatus, build_phase_roles, collect_roles,
    generate, render_roles_json, write_roles,
};
pub use progress::{GenerateProgress, LogProgress, SilentProgress};
pub use roles_file::{load_roles, roles_for_phase};
pub use table::{Row, load_table, parse_table};
pub use weights::{assign_weights, weight_for_cell};
