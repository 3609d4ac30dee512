//! External Services
//!
//! This module contains background services:
//! - api: Repository request queue service
//! - events: Host event bus
pub mod api;
pub mod events;
