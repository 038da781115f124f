//! Types shared by several Help Center resources.

use serde::{Deserialize, Serialize};

/// Field to sort list results by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Manual order set in the Help Center.
    Position,
    /// Alphabetical by title.
    Title,
    /// By creation time.
    CreatedAt,
    /// By last update time.
    UpdatedAt,
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// Parameters for listing resources.
///
/// Unset fields are left out of the query string.
///
/// ```rust
/// use help_center::rest::resources::{ListParams, SortBy, SortOrder};
///
/// let params = ListParams {
///     per_page: Some(50),
///     sort_by: Some(SortBy::UpdatedAt),
///     sort_order: Some(SortOrder::Desc),
///     ..Default::default()
/// };
/// assert_eq!(params.page, None);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Page number, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Results per page (the API caps this at 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    /// Sort field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,

    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_serialize_only_set_fields() {
        let params = ListParams {
            page: Some(2),
            sort_by: Some(SortBy::CreatedAt),
            sort_order: Some(SortOrder::Asc),
            ..Default::default()
        };

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"page": 2, "sort_by": "created_at", "sort_order": "asc"})
        );
    }
}
