//! Known bot accounts.
//!
//! Automated accounts never count as AFK. The set ships with a default list
//! and can be replaced or extended from configuration.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Bot accounts known out of the box.
pub const DEFAULT_KNOWN_BOTS: [&str; 13] = [
    "wow_deku_onehand",
    "lavasbot",
    "facts_bot",
    "totally_not_facts_bot",
    "23forces",
    "twitchplaysleaderboard",
    "recordingbot",
    "twitchnotify",
    "io_ol7bot",
    "tppstatbot",
    "tppstatsbot",
    "pikalaxbot",
    "wowitsbot",
];

static DEFAULT_SET: LazyLock<KnownBots> = LazyLock::new(KnownBots::default);

/// Case-insensitive set of bot account names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownBots {
    /// Lowercased names
    names: HashSet<String>,
}

impl Default for KnownBots {
    fn default() -> Self {
        Self::from_names(DEFAULT_KNOWN_BOTS)
    }
}

impl KnownBots {
    /// Create an empty set (nobody is treated as a bot).
    pub fn empty() -> Self {
        Self {
            names: HashSet::new(),
        }
    }

    /// Build a set from names. Names are stored lowercased.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: HashSet<String> = names
            .into_iter()
            .map(|n| n.as_ref().to_lowercase())
            .collect();
        debug!("Known bot set built with {} names", names.len());
        Self { names }
    }

    /// The shared built-in set.
    pub fn builtin() -> &'static KnownBots {
        &DEFAULT_SET
    }

    /// Add more names to the set.
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.names
            .extend(names.into_iter().map(|n| n.as_ref().to_lowercase()));
    }

    /// Check if a nick belongs to a known bot (case-insensitive).
    pub fn contains(&self, nick: &str) -> bool {
        self.names.contains(&nick.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Check a name against the built-in bot list (case-insensitive).
pub fn is_known_bot(name: &str) -> bool {
    KnownBots::builtin().contains(name)
}
