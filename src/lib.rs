//! Chat user state for an IRC-to-stream chat bot.
//!
//! ## Architecture
//!
//! - `models` - `ChatUser` record and the known-bot set
//! - `config` - Environment configuration
//! - `inspect` - Line inspector used by the `chatuser` binary
//! - `utils` - Clock and string helpers

pub mod config;
pub mod inspect;
pub mod models;
pub mod utils;

pub use models::{is_known_bot, ChatUser, KnownBots};
