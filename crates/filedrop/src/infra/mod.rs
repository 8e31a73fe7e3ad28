//! Adapters at the host-runtime boundary: event shims and configuration.

pub mod config;
pub mod events;
