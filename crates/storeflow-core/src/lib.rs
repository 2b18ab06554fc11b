// Rust guideline compliant 2026-10-18

//! storeflow Core Library
//!
//! Pure building blocks shared by client-side data-access actions:
//! - Query descriptors for paginated and filtered list views
//! - Typed error payloads as reported by backends
//! - Dotted version identifier comparison
//! - Configuration and error types

pub mod config;
pub mod error;
pub mod payload;
pub mod query;
pub mod version;

pub use config::Config;
pub use error::{Error, Result};
pub use payload::{ErrorPayload, ErrorRecord};
pub use query::{
    build_query, FilterClause, PaginationState, QueryDescriptor, SearchState, SortOrder,
};
pub use version::{compare_version_values, compare_versions, Component, Version};
