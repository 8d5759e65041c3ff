use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;
use validator::Validate;

/// Paged, sorted, free-text search over one entity.
///
/// Every field is optional in JSON; `{}` returns the first ten rows ordered by id.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    /// 1-based page number
    #[validate(range(min = 1))]
    pub page_no: u64,
    #[validate(range(min = 1, max = 20))]
    pub page_size: u64,
    pub ascending: bool,
    pub order_by_column: String,
    /// Matched against the entity's searchable fields; blank means no filter
    pub global_filter: String,
    /// Accepted and ignored
    pub criteria: HashMap<String, String>,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            page_no: 1,
            page_size: 10,
            ascending: true,
            order_by_column: "id".to_string(),
            global_filter: String::new(),
            criteria: HashMap::new(),
        }
    }
}

impl SearchRequest {
    pub fn offset(&self) -> u64 {
        self.page_no.saturating_sub(1).saturating_mul(self.page_size)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse<T> {
    pub page_count: u64,
    pub items: Vec<T>,
}

/// Number of pages needed for `total` rows; 0 for an empty result.
pub fn page_count(total: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_uses_defaults() {
        let request: SearchRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, SearchRequest::default());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_camel_case_fields() {
        let request: SearchRequest = serde_json::from_str(
            r#"{"pageNo":3,"pageSize":5,"ascending":false,"orderByColumn":"title",
                "globalFilter":"milk","criteria":{"status_id":"1"}}"#,
        )
        .unwrap();

        assert_eq!(request.page_no, 3);
        assert_eq!(request.page_size, 5);
        assert!(!request.ascending);
        assert_eq!(request.order_by_column, "title");
        assert_eq!(request.global_filter, "milk");
        assert_eq!(request.criteria["status_id"], "1");
        assert_eq!(request.offset(), 10);
    }

    #[test]
    fn test_page_size_out_of_range_is_rejected() {
        for page_size in [0, 21, 100] {
            let request = SearchRequest {
                page_size,
                ..Default::default()
            };
            let errors = request.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("page_size"));
        }
    }

    #[test]
    fn test_page_no_zero_is_rejected() {
        let request = SearchRequest {
            page_no: 0,
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(45, 20), 3);
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let response = SearchResponse {
            page_count: 2,
            items: vec![1, 2],
        };
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            serde_json::json!({"pageCount": 2, "items": [1, 2]})
        );
    }
}
