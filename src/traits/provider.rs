//! Record provider trait abstraction.
//!
//! The controller only ever talks to the backend through this trait, so tests
//! can drive it with any implementation.

use async_trait::async_trait;

use crate::error::AdminResult;
use crate::models::{Club, ClubDraft, ClubUser, EmployeePage, UserDraft};

/// The backend's record API.
#[async_trait]
pub trait RecordProvider: Send + Sync {
    /// `GET /employees?page={page}&size={size}`
    async fn list_employees(&self, page: u32, size: u32) -> AdminResult<EmployeePage>;

    /// `DELETE /employees/{id}`, returning the backend's message.
    async fn delete_employee(&self, employee_id: &str) -> AdminResult<String>;

    /// `GET /clubs`
    async fn list_clubs(&self) -> AdminResult<Vec<Club>>;

    /// `POST /clubs`. Returns the created club when the backend echoes it.
    async fn create_club(&self, draft: &ClubDraft) -> AdminResult<Option<Club>>;

    /// `PUT /clubs/{id}`. Returns the updated club when the backend echoes it.
    async fn update_club(&self, club_id: i64, draft: &ClubDraft) -> AdminResult<Option<Club>>;

    /// `DELETE /clubs/{id}`
    async fn delete_club(&self, club_id: i64) -> AdminResult<()>;

    /// `GET /clubs/{id}/users`
    async fn list_club_users(&self, club_id: i64) -> AdminResult<Vec<ClubUser>>;

    /// `PUT /users/{id}`, returning the backend's message.
    async fn update_user(&self, user_id: i64, draft: &UserDraft) -> AdminResult<String>;

    /// `DELETE /users/{id}`
    async fn delete_user(&self, user_id: i64) -> AdminResult<()>;
}
