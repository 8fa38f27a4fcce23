//! User-specific store logic, including credential checks.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
