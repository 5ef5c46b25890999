//! Reference (dropdown) values served by the utils endpoints.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ApiError;
use crate::models::ApiResponse;

/// Categories the dropdown endpoint understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefCategory {
    Customer,
    Area,
    SalesPerson,
}

impl RefCategory {
    pub const ALL: [Self; 3] = [Self::Customer, Self::Area, Self::SalesPerson];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Area => "area",
            Self::SalesPerson => "salesperson",
        }
    }
}

impl fmt::Display for RefCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RefCategory {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| format!("Invalid category: {value}"))
    }
}

/// One selectable option.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefValue {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// Message shown when reference values cannot be loaded and the backend gave no reason.
pub const REF_VALUES_FALLBACK: &str = "Failed to fetch reference values from backend";

/// Message for a failed reference-value fetch.
#[must_use]
pub fn failure_message(error: &ApiError) -> String {
    error.reason_or(REF_VALUES_FALLBACK)
}

/// Extracts `response.values` from a single-category payload; anything missing yields no values.
#[must_use]
pub fn values_from_response(envelope: &ApiResponse) -> Vec<RefValue> {
    envelope
        .response
        .as_ref()
        .and_then(|response| response.get("values"))
        .map(values_from_json)
        .unwrap_or_default()
}

fn values_from_json(values: &Value) -> Vec<RefValue> {
    values
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}
