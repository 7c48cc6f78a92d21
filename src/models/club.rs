//! Club and club-member models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Required length of a club code, as enforced by the backend.
pub const CLUB_CODE_LEN: usize = 18;

/// A club as returned by `GET /clubs` and in write envelopes.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Club {
    pub id: i64,
    pub club_name: String,
    pub club_code: String,
    /// Absolute scanner URL (`{base}/club/{code}/scan/`)
    #[serde(default)]
    pub url: Option<String>,
}

/// `GET /clubs` body.
#[derive(Debug, Clone, Deserialize)]
pub struct ClubList {
    #[serde(default)]
    pub clubs: Vec<Club>,
}

/// Body of `POST /clubs` and `PUT /clubs/{id}`.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ClubDraft {
    pub club_name: String,
    pub club_code: String,
}

impl ClubDraft {
    pub fn new(club_name: impl Into<String>, club_code: impl Into<String>) -> Self {
        Self {
            club_name: club_name.into(),
            club_code: club_code.into(),
        }
    }

    /// Trims both fields and checks them the way the backend would.
    ///
    /// Returns the message to show the user when the draft is unacceptable.
    pub fn validate(&self) -> Result<ClubDraft, String> {
        let club_name = self.club_name.trim();
        let club_code = self.club_code.trim();

        if club_name.is_empty() || club_code.is_empty() {
            return Err("Club name and club code are required".to_string());
        }
        if club_code.chars().count() != CLUB_CODE_LEN {
            return Err(format!("Club code must be {} digits", CLUB_CODE_LEN));
        }

        Ok(ClubDraft::new(club_name, club_code))
    }
}

impl From<&Club> for ClubDraft {
    fn from(club: &Club) -> Self {
        ClubDraft::new(club.club_name.clone(), club.club_code.clone())
    }
}

/// A user registered under a club (`GET /clubs/{id}/users`).
///
/// The backend sends the stored password along with the rest. It is kept
/// only so an edit that leaves the password blank can send it back
/// unchanged; it is never serialized or shown.
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ClubUser {
    pub id: i64,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default, skip_serializing)]
    pub password: String,
}

impl fmt::Debug for ClubUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClubUser")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("mobile", &self.mobile)
            .finish_non_exhaustive()
    }
}

/// Body of `PUT /users/{id}`. The backend replaces all four fields.
#[derive(Clone, Default, Serialize, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub username: String,
    pub password: String,
    pub mobile: String,
}

impl UserDraft {
    /// Trims the text fields and checks the ones the backend cannot store
    /// empty. The password is sent as typed.
    pub fn validate(&self) -> Result<UserDraft, String> {
        let name = self.name.trim();
        let username = self.username.trim();

        if name.is_empty() || username.is_empty() {
            return Err("Name and username are required".to_string());
        }
        if self.password.is_empty() {
            return Err("Password is required".to_string());
        }

        Ok(UserDraft {
            name: name.to_string(),
            username: username.to_string(),
            password: self.password.clone(),
            mobile: self.mobile.trim().to_string(),
        })
    }
}

impl fmt::Debug for UserDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserDraft")
            .field("name", &self.name)
            .field("username", &self.username)
            .field("mobile", &self.mobile)
            .finish_non_exhaustive()
    }
}

/// `GET /clubs/{id}/users` body.
#[derive(Debug, Clone, Deserialize)]
pub struct ClubUserList {
    #[serde(default)]
    pub users: Vec<ClubUser>,
}
