//! # Middleware Modules
//!
//! Tower middleware layers for the API service. The authorization gate
//! lives in [`crate::auth`].

pub mod metrics;
pub mod tracing_layer;
