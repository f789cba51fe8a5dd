//! Role definition data model shared by the generator and its consumers.
//!
//! A role is one column of a scouting table: a named position variant with a
//! sparse set of attribute weights. Roles are grouped by the game [`Phase`]
//! whose table they came from.

pub mod phase;
pub mod role;

pub use phase::{Phase, PhaseParseError};
pub use role::{PRIMARY_WEIGHT, RoleRecord, SECONDARY_WEIGHT, Weights, generate_id};
