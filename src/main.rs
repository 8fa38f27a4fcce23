use tracing::{error, info, Instrument};
use profile_store::domain::{UserPatch, UserRecord};
use profile_store::app_system::{ProfileSystem, SystemConfig, setup_tracing};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing(&SystemConfig::default().log_filter);
    let config = SystemConfig::from_env();

    info!("Starting profile store");

    let system = ProfileSystem::new(&config);

    let span = tracing::info_span!("user_creation");
    let username = async {
        info!("Creating default user");
        system.user_client.create_user(UserRecord::default()).await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(username = %username, "User created successfully");

    let span = tracing::info_span!("profile_update");
    let update_result = async {
        let patch = UserPatch::new(username.clone())
            .with_name("Adrian")
            .with_lastname("Ramirez")
            .with_description("Hello, my name is Adrian!");
        info!(changed = ?patch.set_fields(), "Applying patch");
        system.user_client.update_user(patch).await
    }
    .instrument(span)
    .await;

    match update_result {
        Ok(user) => info!(name = %user.name(), lastname = %user.lastname(), "Profile updated"),
        Err(e) => error!(error = %e, "Profile update failed"),
    }

    match system.user_client.log_in(username.clone(), "qwe".to_string()).await {
        Ok(()) => info!("Login succeeded"),
        Err(e) => error!(error = %e, "Login failed"),
    }

    if let Ok(Some(profile)) = system.user_client.get_public_profile(username).await {
        match serde_json::to_string(&profile) {
            Ok(json) => info!(profile = %json, "Public profile"),
            Err(e) => error!(error = %e, "Could not serialize profile"),
        }
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
