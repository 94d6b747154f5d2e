//! CLI commands for prdoc
//!
//! - **check**: Validate a directory of records against the schema
//! - **bumps**: Aggregate per-crate version-bump obligations
//! - **audience**: List doc entries addressed to a given audience
//! - **changelog**: Render a versioned changelog grouped by audience
//! - **version**: Propose (and optionally apply) next workspace versions

pub mod audience;
pub mod bumps;
pub mod changelog;
pub mod check;
pub mod version;

pub use audience::run_audience;
pub use bumps::run_bumps;
pub use changelog::run_changelog;
pub use check::run_check;
pub use version::run_version;
