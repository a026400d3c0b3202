//! Query string construction for list endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sorting, filtering and pagination options for list operations.
///
/// Every field is optional and is sent only when set. Pages are 1-indexed;
/// the API defaults to 30 entries per page (maximum 100).
///
/// ```rust
/// use dnsimple_client::ListOptions;
///
/// let opts = ListOptions::new()
///     .sort("expiration:asc")
///     .filter("name_like", "example")
///     .page(2)
///     .per_page(10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Page number (1-indexed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Number of entries per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Comma separated `field:direction` pairs (e.g. `"id:asc,name:desc"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Endpoint specific filters (e.g. `name_like`, `type`).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub filters: BTreeMap<String, String>,
    /// Additional query parameters that change the shape of the result
    /// (e.g. `groupings` for DNS analytics).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Flatten into query pairs.
    ///
    /// Order: extra params, `page`, `per_page`, `sort`, filters. A key given
    /// both as a param and a filter keeps the filter value.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .params
            .iter()
            .filter(|(k, _)| !self.filters.contains_key(*k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page".to_string(), per_page.to_string()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort".to_string(), sort.clone()));
        }
        pairs.extend(self.filters.iter().map(|(k, v)| (k.clone(), v.clone())));

        pairs
    }
}
