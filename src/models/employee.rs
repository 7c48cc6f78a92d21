//! Employee records as served by `GET /employees`.

use serde::{Deserialize, Serialize};

use super::deserialize_id;

/// A registered employee.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Employee {
    /// Employee ID (the backend stores these as strings, older builds as integers)
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    /// Display name
    pub name: String,

    /// Club member code, if the employee belongs to a club
    #[serde(default)]
    pub member_code: Option<String>,

    /// Relative path of the enrolment photo
    #[serde(default)]
    pub image_path: Option<String>,
}

/// One page of the employee collection.
///
/// `total` and `page` fall back to `0` and `1` when the backend omits them,
/// which is what unpaged builds of the backend do.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct EmployeePage {
    /// Records on this page
    #[serde(default)]
    pub employees: Vec<Employee>,

    /// Size of the whole collection
    #[serde(default)]
    pub total: u64,

    /// The page the server actually served (1-based)
    #[serde(default = "first_page")]
    pub page: u32,
}

fn first_page() -> u32 {
    1
}
