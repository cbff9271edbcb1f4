// src/domain/search.rs

use crate::domain::property::Property;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_MAX_PRICE: i64 = 1_000_000;

/// Filters for the teardown-candidate search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuery {
    pub max_price: i64,
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    #[serde(default)]
    pub results: Vec<Property>,
    #[serde(default)]
    pub total_count: Option<u64>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            max_price: DEFAULT_MAX_PRICE,
            page: 1,
            city: None,
        }
    }
}

impl SearchQuery {
    /// Unparseable numbers fall back to their defaults; a blank city means any city.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let defaults = Self::default();

        Self {
            max_price: params
                .get("max_price")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.max_price),
            page: params
                .get("page")
                .and_then(|v| v.trim().parse().ok())
                .filter(|p| *p > 0)
                .unwrap_or(defaults.page),
            city: params
                .get("city")
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
        }
    }
}
