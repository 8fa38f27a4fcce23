use tracing::{error, info};
use crate::actor_framework::ResourceActor;
use crate::clients::UserClient;
use crate::domain::UserRecord;
use super::SystemConfig;

/// Owns the user store actor and hands out its client.
///
/// Responsible for starting the actor and for handling shutdown.
pub struct ProfileSystem {
    pub user_client: UserClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ProfileSystem {
    pub fn new(config: &SystemConfig) -> Self {
        info!(channel_capacity = config.channel_capacity, "Starting profile system");

        let (user_actor, user_resource_client) =
            ResourceActor::<UserRecord>::new(config.channel_capacity);
        let user_client = UserClient::new(user_resource_client);
        let user_handle = tokio::spawn(user_actor.run());

        Self {
            user_client,
            handles: vec![user_handle],
        }
    }

    /// Drops the clients (closing the mailbox) and waits for the actor to exit.
    ///
    /// Clones of `user_client` held elsewhere keep the actor alive until they
    /// are dropped too.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserPatch;

    #[tokio::test]
    async fn test_system_round_trip_and_shutdown() {
        let system = ProfileSystem::new(&SystemConfig::default());

        system.user_client.create_user(UserRecord::default()).await.unwrap();
        let updated = system
            .user_client
            .update_user(UserPatch::new("aramirez").with_name("Alice"))
            .await
            .unwrap();
        assert_eq!(updated, UserRecord::new("aramirez", "Alice", "", "", "", "qwe"));

        system.shutdown().await.unwrap();
    }
}
