//! Ambient plumbing shared by Tienda services: configuration loading,
//! tracing setup, request-id middleware, health checks and serde helpers.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
