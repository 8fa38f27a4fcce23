//! # Profile Store
//!
//! User profile records, sparse profile patches, and an actor-backed store
//! that applies those patches.
//!
//! - **Domain types** - [`UserRecord`](domain::UserRecord), [`UserPatch`](domain::UserPatch)
//!   and the merge rule [`apply`](domain::apply)
//! - **Actor framework** - a generic keyed store running as one tokio task → [`actor_framework`]
//! - **Clients** - typed, instrumented handles over the store → [`clients::UserClient`]
//! - **System** - startup, configuration, tracing and shutdown → [`app_system`]
//!
//! ```rust,no_run
//! # use profile_store::app_system::{ProfileSystem, SystemConfig};
//! # use profile_store::domain::{UserPatch, UserRecord};
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let system = ProfileSystem::new(&SystemConfig::default());
//! system.user_client.create_user(UserRecord::default()).await?;
//! let user = system.user_client
//!     .update_user(UserPatch::new("aramirez").with_name("Alice"))
//!     .await?;
//! assert_eq!(user.name(), "Alice");
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod clients;
pub mod app_system;
pub mod actor_framework;
pub mod user_actor;

#[cfg(test)]
mod mock_framework;
