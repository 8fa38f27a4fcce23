use std::fmt;

use crate::domain::PublicProfile;

/// Read-only actions on a stored [`UserRecord`](crate::domain::UserRecord).
#[derive(Clone)]
pub enum UserAction {
    /// Compares the supplied password with the stored one.
    VerifyPassword(String),
    /// Returns the password-free view of the record.
    PublicProfile,
}

// Hand-written so credentials never reach logs.
impl fmt::Debug for UserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAction::VerifyPassword(_) => f.write_str("VerifyPassword(<redacted>)"),
            UserAction::PublicProfile => f.write_str("PublicProfile"),
        }
    }
}

/// Results from UserActions - variants match 1:1 with UserAction
#[derive(Debug, Clone, PartialEq)]
pub enum UserActionResult {
    VerifyPassword(bool),
    PublicProfile(PublicProfile),
}
