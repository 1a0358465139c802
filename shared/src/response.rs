//! API Response types
//!
//! Every backend response is wrapped in the same envelope:
//! ```json
//! {
//!     "success": true,
//!     "message": "optional",
//!     "data": [ ... ],
//!     "pagination": { "total": 3, "totalPages": 1, "page": 1, "limit": 10 }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Unified API response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the backend considers the call successful
    #[serde(default = "default_success")]
    pub success: bool,
    /// Response payload (absent on errors and on some mutations)
    pub data: Option<T>,
    /// Human-readable message, usually only set on failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Pagination metadata, list endpoints only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

// Mutation endpoints sometimes answer with a bare `{ "data": ... }`.
fn default_success() -> bool {
    true
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            pagination: None,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            pagination: None,
        }
    }

    /// Attach pagination metadata
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Unwrap a list envelope into a [`Page`].
    ///
    /// Missing data is an empty page, missing pagination a zero total.
    pub fn into_page(self) -> Page<T> {
        Page {
            items: self.data.unwrap_or_default(),
            total: self.pagination.map(|p| p.total).unwrap_or(0),
        }
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    /// Total number of items
    pub total: u64,
    /// Total number of pages
    pub total_pages: u32,
    /// Current page number (1-based)
    pub page: u32,
    /// Items per page
    pub limit: u32,
}

impl Pagination {
    /// Create a new pagination
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total.div_ceil(u64::from(limit)) as u32
        };
        Self {
            total,
            total_pages,
            page,
            limit,
        }
    }
}

/// One page of a list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_into_page() {
        let json = r#"{"success":true,"data":[1,2,3],"pagination":{"total":3,"totalPages":1,"page":1,"limit":10}}"#;
        let resp: ApiResponse<Vec<u32>> = serde_json::from_str(json).unwrap();
        let page = resp.into_page();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_envelope_without_data_or_pagination() {
        let resp: ApiResponse<Vec<u32>> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert_eq!(resp.into_page(), Page::empty());
    }

    #[test]
    fn test_missing_success_defaults_true() {
        let resp: ApiResponse<u32> = serde_json::from_str(r#"{"data":7}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.data, Some(7));
    }

    #[test]
    fn test_pagination_total_pages() {
        assert_eq!(Pagination::new(2, 10, 101).total_pages, 11);
        assert_eq!(Pagination::new(1, 0, 5).total_pages, 0);
    }
}
