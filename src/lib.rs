//! Repository Browser Library
//!
//! The headless browser core: repository client, models, the reducer and
//! the view model. The terminal front end lives in the binary.

pub mod api;
pub mod cache;
pub mod config;
pub mod logic;
pub mod messages;
pub mod model;
pub mod update;

pub use messages::{Effect, Msg};
pub use model::{BrowserContext, Model};
pub use update::update;
