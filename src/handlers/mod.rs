//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - api: Responses from the background request worker
//! - events: Host events from the rest of the console
//! - keyboard: User keyboard input
//!
//! Handlers take &mut App, map their input to `Msg`s and dispatch them
//! through the reducer.

pub mod api;
pub mod events;
pub mod keyboard;

pub use api::handle_api_response;
pub use events::handle_host_event;
pub use keyboard::handle_key;
