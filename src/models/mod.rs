//! Model exports.

pub mod chat_user;
pub mod known_bots;

pub use chat_user::{ChatUser, IDLE_THRESHOLD_MS};
pub use known_bots::{is_known_bot, KnownBots, DEFAULT_KNOWN_BOTS};
