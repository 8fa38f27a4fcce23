use tracing::warn;

/// Environment variable that overrides [`SystemConfig::channel_capacity`].
pub const CHANNEL_CAPACITY_VAR: &str = "PROFILE_CHANNEL_CAPACITY";

/// Runtime knobs for the profile system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    /// Bounded mailbox size of the user store actor
    pub channel_capacity: usize,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl SystemConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unusable values fall back to the
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let channel_capacity = match lookup(CHANNEL_CAPACITY_VAR) {
            None => defaults.channel_capacity,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => {
                    warn!(value = %raw, "Ignoring invalid {}", CHANNEL_CAPACITY_VAR);
                    defaults.channel_capacity
                }
            },
        };

        let log_filter = lookup("RUST_LOG")
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            channel_capacity,
            log_filter,
        }
    }
}
