//! DTOs for the membership check endpoint.

use serde::{Deserialize, Serialize};

/// Query string of `GET /domains/check`.
///
/// Built from the raw `(key, value)` pairs so a repeated `domain` key does
/// not reject the request; the first occurrence wins and unknown keys are
/// ignored.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckQuery {
    pub domain: Option<String>,
}

impl CheckQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let domain = pairs
            .into_iter()
            .find(|(key, _)| key == "domain")
            .map(|(_, value)| value);

        Self { domain }
    }
}

/// Membership answer for a single name.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckResponse {
    #[serde(rename = "isIncluded")]
    pub is_included: bool,
}
