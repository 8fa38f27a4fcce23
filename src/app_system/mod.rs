//! System orchestration, configuration, startup, and shutdown logic.

pub mod config;
pub mod profile_system;
pub mod tracing;

pub use config::*;
pub use profile_system::*;
pub use self::tracing::*;
