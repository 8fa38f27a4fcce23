use tracing::{debug, info, instrument, warn};
use crate::domain::{PublicProfile, UserPatch, UserRecord};
use crate::user_actor::{UserAction, UserActionResult, UserError};
use crate::actor_framework::{FrameworkError, ResourceClient};

/// Client for interacting with the user store actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<UserRecord>,
}

impl_basic_client!(UserClient, UserRecord, UserError, user);

impl UserClient {
    /// Stores a new user. Fails with [`UserError::AlreadyExists`] when the
    /// username is taken.
    #[instrument(skip(self, user), fields(username = %user.username()))]
    pub async fn create_user(&self, user: UserRecord) -> Result<String, UserError> {
        debug!("Sending request");
        self.inner.create(user).await.map_err(UserError::from)
    }

    /// Applies `patch` to the user named by `patch.username()` and returns the
    /// stored result.
    #[instrument(skip(self, patch), fields(username = %patch.username(), changed = ?patch.set_fields()))]
    pub async fn update_user(&self, patch: UserPatch) -> Result<UserRecord, UserError> {
        debug!("Sending request");
        let username = patch.username().to_string();
        self.inner.update(username, patch).await.map_err(UserError::from)
    }

    #[instrument(skip(self))]
    pub async fn get_public_profile(&self, username: String) -> Result<Option<PublicProfile>, UserError> {
        debug!("Sending request");
        match self.inner.perform_action(username, UserAction::PublicProfile).await {
            Ok(UserActionResult::PublicProfile(profile)) => Ok(Some(profile)),
            Ok(_) => Err(UserError::ActorCommunicationError("Unexpected result".to_string())),
            Err(FrameworkError::NotFound(_)) => Ok(None),
            Err(e) => Err(UserError::from(e)),
        }
    }

    /// Checks `password` against the stored credential.
    #[instrument(skip(self, password))]
    pub async fn log_in(&self, username: String, password: String) -> Result<(), UserError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(username.clone(), UserAction::VerifyPassword(password))
            .await
        {
            Ok(UserActionResult::VerifyPassword(true)) => {
                info!("Login accepted");
                Ok(())
            }
            Ok(UserActionResult::VerifyPassword(false)) => {
                warn!("Login rejected");
                Err(UserError::InvalidCredentials(username))
            }
            Ok(_) => Err(UserError::ActorCommunicationError("Unexpected result".to_string())),
            Err(e) => Err(UserError::from(e)),
        }
    }
}
