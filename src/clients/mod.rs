//! Typed handles over the generic [`ResourceClient`](crate::actor_framework::ResourceClient).

#[macro_use]
mod macros;
mod user_client;

pub use user_client::*;
