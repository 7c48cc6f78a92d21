//! Type definitions for the controller.
//!
//! - [`RequestToken`] - Identifies one fetch of a collection
//! - [`RequestTokens`] - The latest token issued per collection

use std::fmt;

use crate::traits::ListSlot;

/// Identifies one fetch. Tokens increase monotonically for the lifetime of
/// the controller, across all collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Latest token issued for each collection.
///
/// A response is applied only if it carries the latest token for its
/// collection, so whichever request was issued last wins regardless of the
/// order responses arrive in.
#[derive(Debug, Clone, Default)]
pub struct RequestTokens {
    issued: u64,
    employees: Option<RequestToken>,
    clubs: Option<RequestToken>,
    members: Option<RequestToken>,
}

impl RequestTokens {
    fn latest_mut(&mut self, slot: ListSlot) -> &mut Option<RequestToken> {
        match slot {
            ListSlot::Employees => &mut self.employees,
            ListSlot::Clubs => &mut self.clubs,
            ListSlot::Members => &mut self.members,
        }
    }

    /// Issues a new token for `slot`, superseding any outstanding one.
    pub fn issue(&mut self, slot: ListSlot) -> RequestToken {
        self.issued += 1;
        let token = RequestToken(self.issued);
        *self.latest_mut(slot) = Some(token);
        token
    }

    pub fn latest(&self, slot: ListSlot) -> Option<RequestToken> {
        match slot {
            ListSlot::Employees => self.employees,
            ListSlot::Clubs => self.clubs,
            ListSlot::Members => self.members,
        }
    }

    pub fn is_current(&self, slot: ListSlot, token: RequestToken) -> bool {
        self.latest(slot) == Some(token)
    }

    /// Makes every outstanding response for `slot` stale.
    pub fn invalidate(&mut self, slot: ListSlot) {
        *self.latest_mut(slot) = None;
    }
}
