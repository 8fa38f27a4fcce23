use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(String),
    #[error("User already exists: {0}")]
    AlreadyExists(String),
    #[error("Invalid credentials for user: {0}")]
    InvalidCredentials(String),
    /// The store refused the record, e.g. an empty username on create.
    #[error("User validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for UserError {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::NotFound(username) => UserError::NotFound(username),
            FrameworkError::AlreadyExists(username) => UserError::AlreadyExists(username),
            FrameworkError::Rejected(reason) => UserError::ValidationError(reason),
            e @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                UserError::ActorCommunicationError(e.to_string())
            }
        }
    }
}
