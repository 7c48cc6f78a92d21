//! The `{STATUS, CODE, FLAG, MESSAGE, DATA}` envelope used by write endpoints.

use serde::{Deserialize, Serialize};

use super::Club;

/// Standard response envelope.
///
/// Club endpoints fill every field; user endpoints only send `FLAG` and
/// `MESSAGE`, so the numeric fields default to zero.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct StandardResponse {
    #[serde(rename = "STATUS", default)]
    pub status: i64,
    #[serde(rename = "CODE", default)]
    pub code: i64,
    #[serde(rename = "FLAG")]
    pub flag: bool,
    #[serde(rename = "MESSAGE", default)]
    pub message: String,
    #[serde(rename = "DATA", default)]
    pub data: Option<serde_json::Value>,
}

impl StandardResponse {
    /// Extracts `DATA.club`, if present and well formed.
    pub fn club(&self) -> Option<Club> {
        let club = self.data.as_ref()?.get("club")?;
        serde_json::from_value(club.clone()).ok()
    }
}
