//! Core building blocks for prdoc
//!
//! - **error**: Unified error types with contextual help messages and exit codes

pub mod error;
