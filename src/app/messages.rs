//! AppMessage enum for async communication within the application.

use crate::error::AdminResult;
use crate::models::{Club, ClubUser, EmployeePage};

use super::RequestToken;

/// Results of spawned backend requests, delivered back to the event loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A page of employees arrived
    PageLoaded {
        token: RequestToken,
        result: AdminResult<EmployeePage>,
    },
    /// The club list arrived
    ClubsLoaded {
        token: RequestToken,
        result: AdminResult<Vec<Club>>,
    },
    /// Members of `club_id` arrived
    MembersLoaded {
        token: RequestToken,
        club_id: i64,
        result: AdminResult<Vec<ClubUser>>,
    },
    /// A club create (`editing: None`) or update finished
    ClubSaved {
        editing: Option<i64>,
        result: AdminResult<Option<Club>>,
    },
    ClubDeleted {
        club_id: i64,
        result: AdminResult<()>,
    },
    /// An employee delete finished; `Ok` carries the backend's message
    EmployeeDeleted {
        employee_id: String,
        result: AdminResult<String>,
    },
    /// A member update finished; `Ok` carries the backend's message
    MemberSaved {
        user_id: i64,
        result: AdminResult<String>,
    },
    MemberDeleted {
        user_id: i64,
        result: AdminResult<()>,
    },
}
