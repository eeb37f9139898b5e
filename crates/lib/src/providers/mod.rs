//! # Providers
//!
//! Clients for the external generation services, plus a factory that picks one
//! from configuration.

pub mod ai;
pub mod factory;
