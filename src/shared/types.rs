use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE, MAX_PAGE_SIZE};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    pub total: i64,
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Clamp a 1-indexed page request into (limit, offset)
///
/// Pages past `MAX_PAGE` are read as `MAX_PAGE`, which lands past the end of
/// any realistic result set and yields an empty page.
pub fn page_window(page: i64, page_size: i64) -> (i64, i64) {
    let limit = page_size.clamp(1, MAX_PAGE_SIZE);
    let offset = (page.clamp(1, MAX_PAGE) - 1).saturating_mul(limit);
    (limit, offset)
}

pub fn default_page() -> i64 {
    1
}

pub fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 10), (10, 0));
        assert_eq!(page_window(3, 20), (20, 40));
        assert_eq!(page_window(0, 10), (10, 0));
        assert_eq!(page_window(2, 1000), (MAX_PAGE_SIZE, MAX_PAGE_SIZE));
        assert_eq!(page_window(1, 0), (1, 0));
    }

    #[test]
    fn test_page_window_huge_page_does_not_overflow() {
        assert_eq!(page_window(i64::MAX, 10), (10, (MAX_PAGE - 1) * 10));
        assert_eq!(
            page_window(i64::MAX, i64::MAX),
            (MAX_PAGE_SIZE, (MAX_PAGE - 1) * MAX_PAGE_SIZE)
        );
        assert_eq!(page_window(i64::MIN, 10), (10, 0));
    }
}
