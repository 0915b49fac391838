//! Response envelopes returned by every endpoint of the dashboard API.

use serde::{Deserialize, Serialize};

/// Pagination block attached to list responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_pages: u32,
}

/// `{ success, data }` on success, `{ success, message }` on failure.
///
/// List endpoints additionally carry `pagination`. A 403 from the config
/// endpoint may still carry partial `data`. Some write endpoints omit
/// `success` altogether, so it is only meaningful when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub data: Option<T>,
    pub message: Option<String>,
    pub pagination: Option<PaginationMeta>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: Some(true),
            data: Some(data),
            message: None,
            pagination: None,
        }
    }

    /// An empty 2xx reply.
    pub fn empty() -> Self {
        Self {
            success: None,
            data: None,
            message: None,
            pagination: None,
        }
    }

    /// Only an explicit `success: false` marks a rejected request.
    pub fn is_rejected(&self) -> bool {
        self.success == Some(false)
    }
}

/// Normalized list page: the only shape list views consume.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub rows: Vec<T>,
    pub total: u64,
    pub total_pages: u32,
}

impl<T> ListPage<T> {
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            total: 0,
            total_pages: 0,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Collapses the envelope into `{rows, total, total_pages}`.
    ///
    /// Endpoints that return a bare collection without a pagination block
    /// are treated as a single page holding every row.
    pub fn into_list_page(self) -> ListPage<T> {
        let rows = self.data.unwrap_or_default();
        match self.pagination {
            Some(meta) => ListPage {
                rows,
                total: meta.total,
                total_pages: meta.total_pages,
            },
            None => {
                let total = rows.len() as u64;
                ListPage {
                    rows,
                    total,
                    total_pages: u32::from(total > 0),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_envelope_with_pagination() {
        let body = r#"{
            "success": true,
            "data": [1, 2, 3],
            "pagination": { "page": 2, "limit": 3, "total": 42, "totalPages": 14 }
        }"#;
        let response: ApiResponse<Vec<u32>> = serde_json::from_str(body).unwrap();
        let page = response.into_list_page();
        assert_eq!(page.rows, vec![1, 2, 3]);
        assert_eq!(page.total, 42);
        assert_eq!(page.total_pages, 14);
    }

    #[test]
    fn test_list_envelope_without_pagination() {
        let response: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"success": true, "data": [7, 8]}"#).unwrap();
        let page = response.into_list_page();
        assert_eq!(page.total, 2);
        assert_eq!(page.total_pages, 1);

        let response: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"success": true, "data": []}"#).unwrap();
        assert_eq!(response.into_list_page(), ListPage::empty());
    }

    #[test]
    fn test_failure_envelope_has_message() {
        let response: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"success": false, "message": "Article exists"}"#).unwrap();
        assert!(response.is_rejected());
        assert!(response.data.is_none());
        assert_eq!(response.message.as_deref(), Some("Article exists"));
    }

    #[test]
    fn test_missing_success_flag_is_not_a_rejection() {
        let response: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"data":{"id":"1"},"message":"Deleted"}"#).unwrap();
        assert_eq!(response.success, None);
        assert!(!response.is_rejected());
        assert_eq!(response.data.unwrap()["id"], "1");
    }
}
