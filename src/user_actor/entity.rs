use crate::actor_framework::Entity;
use crate::domain::{UserPatch, UserRecord};
use super::actions::{UserAction, UserActionResult};

impl Entity for UserRecord {
    type Key = String;
    type Patch = UserPatch;
    type Action = UserAction;
    type ActionResult = UserActionResult;

    fn key(&self) -> &String {
        self.username_key()
    }

    /// Rejects records without a username; they could never be looked up by a patch.
    fn on_create(&self) -> Result<(), String> {
        if self.username().is_empty() {
            return Err("username must not be empty".to_string());
        }
        Ok(())
    }

    /// Builds the replacement record.
    ///
    /// # Fields Updated
    /// Every field present in `patch` except `username`, which stays as stored.
    fn apply_patch(&self, patch: UserPatch) -> Result<Self, String> {
        Ok(patch.apply_to(self))
    }

    /// Handles user-specific actions.
    ///
    /// # Actions
    /// - `VerifyPassword(candidate)`: whether `candidate` matches the stored password
    /// - `PublicProfile`: the record without its password
    fn handle_action(&self, action: UserAction) -> Result<UserActionResult, String> {
        match action {
            UserAction::VerifyPassword(candidate) => {
                Ok(UserActionResult::VerifyPassword(self.password() == candidate))
            }
            UserAction::PublicProfile => Ok(UserActionResult::PublicProfile(self.public_profile())),
        }
    }
}
