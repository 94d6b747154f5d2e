//! PRDoc record store
//!
//! - **schema**: Typed record model plus parse-time validation
//! - **store**: Directory scanning with partial-failure semantics
//! - **aggregate**: Max-bump and audience queries over validated records
//! - **changelog**: Versioned changelog rendering grouped by audience

pub mod aggregate;
pub mod changelog;
pub mod schema;
pub mod store;
