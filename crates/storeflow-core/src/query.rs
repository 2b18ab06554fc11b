// Rust guideline compliant 2026-10-18

//! Query descriptor construction for paginated list views.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Default number of rows requested per page.
pub const DEFAULT_ROWS_PER_PAGE: u32 = 10;

/// Pagination state as reported by a table or list widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    /// Field to sort by.
    #[serde(default)]
    pub sort_by: Option<String>,
    /// Whether the sort is descending.
    #[serde(default)]
    pub descending: bool,
    /// One-based page index.
    pub page: u32,
    /// Number of rows on a page.
    pub rows_per_page: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            sort_by: None,
            descending: false,
            page: 1,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

/// Active search filter for a list view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    /// Free-form filter value passed through to the backend.
    pub query: Value,
    /// Fields the filter applies to, in order.
    #[serde(default)]
    pub fields: Vec<String>,
}

/// Sort direction as understood by the backend: `1` or `-1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending, serialized as `1`.
    #[default]
    Ascending,
    /// Descending, serialized as `-1`.
    Descending,
}

impl SortOrder {
    /// Returns the order for a `descending` flag.
    #[must_use]
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }

    /// Returns the numeric form sent to the backend.
    #[must_use]
    pub fn as_i8(self) -> i8 {
        match self {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        }
    }
}

impl Serialize for SortOrder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.as_i8())
    }
}

/// Filter clause attached to a descriptor when a search is active.
///
/// `filter` and `fields` only ever appear together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterClause {
    /// The search query.
    pub filter: Value,
    /// The searched fields.
    pub fields: Vec<String>,
}

/// Normalized list query consumed by the transport layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryDescriptor {
    /// Sort field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Sort direction.
    pub order: SortOrder,
    /// One-based page index.
    pub page: u32,
    /// Page size.
    pub limit: u32,
    /// Search clause; omitted entirely when no search is active.
    #[serde(flatten)]
    pub search: Option<FilterClause>,
}

impl QueryDescriptor {
    /// Returns the descriptor as a JSON object.
    ///
    /// # Returns
    ///
    /// The serialized descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> crate::Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Builds a backend query descriptor from pagination and search state.
///
/// No validation is applied to any field.
///
/// # Arguments
///
/// * `pagination` - Current pagination state
/// * `search` - Active search, if any
///
/// # Returns
///
/// The query descriptor.
#[must_use]
pub fn build_query(pagination: &PaginationState, search: Option<&SearchState>) -> QueryDescriptor {
    QueryDescriptor {
        sort: pagination.sort_by.clone(),
        order: SortOrder::from_descending(pagination.descending),
        page: pagination.page,
        limit: pagination.rows_per_page,
        search: search.map(|search| FilterClause {
            filter: search.query.clone(),
            fields: search.fields.clone(),
        }),
    }
}
