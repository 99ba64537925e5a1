//! Configuration module for the chat user inspector.
//!
//! Loads configuration from environment variables.

use serde::Deserialize;
use std::env;

use crate::models::KnownBots;
use crate::utils::split_names;

/// Output format for rendered users
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Parse a format name. Unknown names fall back to text.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Accounts excluded from AFK tracking.
    pub known_bots: KnownBots,

    pub output: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// - `KNOWN_BOTS` replaces the built-in bot list when non-empty
    /// - `EXTRA_KNOWN_BOTS` adds to whichever list is in use
    /// - `OUTPUT_FORMAT` is `text` (default) or `json`
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_vars(
            env::var("KNOWN_BOTS").ok().as_deref(),
            env::var("EXTRA_KNOWN_BOTS").ok().as_deref(),
            env::var("OUTPUT_FORMAT").ok().as_deref(),
        )
    }

    fn from_vars(
        known_bots: Option<&str>,
        extra_known_bots: Option<&str>,
        output: Option<&str>,
    ) -> Self {
        let mut bots = match known_bots.map(split_names) {
            Some(names) if !names.is_empty() => KnownBots::from_names(names),
            _ => KnownBots::default(),
        };

        if let Some(extra) = extra_known_bots {
            bots.extend(split_names(extra));
        }

        Self {
            known_bots: bots,
            output: output.map(OutputFormat::parse).unwrap_or_default(),
        }
    }
}
