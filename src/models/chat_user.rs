//! Chat user model.
//!
//! State of one user as observed in one channel: identity, privileges,
//! activity recency and the decorations a Twitch-bridged network attaches.

use std::any::Any;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::known_bots::KnownBots;
use crate::utils::{java_compare, now_millis};

/// Milliseconds without a message after which a user counts as AFK (15 minutes).
pub const IDLE_THRESHOLD_MS: i64 = 900_000;

/// A user seen in a channel.
///
/// Equality compares `nick`, `last_message_time`, the stored AFK flag and
/// `channel`. Hashing only looks at the lowercased nick, so values that differ
/// in channel or timestamps still land in the same bucket.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatUser {
    nick: String,
    channel: String,
    /// Epoch milliseconds of the last message from this user.
    last_message_time: i64,
    afk: bool,
    operator: bool,
    voiced: bool,

    // --- Platform decorations ---
    #[serde(default)]
    previous_message: String,
    #[serde(default)]
    color: String,
    #[serde(default)]
    emotes: String,
    #[serde(default)]
    subscriber: bool,
    #[serde(default)]
    turbo: bool,
    #[serde(default)]
    user_type: String,
}

impl ChatUser {
    /// Create a user who just showed up in `channel`.
    pub fn new(nick: impl Into<String>, channel: impl Into<String>) -> Self {
        Self::with_flags(nick, channel, now_millis(), false, false, false)
    }

    /// Create a user whose last message was at `last_message_time`.
    pub fn with_last_message(
        nick: impl Into<String>,
        channel: impl Into<String>,
        last_message_time: i64,
    ) -> Self {
        Self::with_flags(nick, channel, last_message_time, false, false, false)
    }

    /// Create a user with an explicit AFK flag.
    ///
    /// Quirk: the timestamp argument is ignored and the current time is stored
    /// instead. Existing callers rely on the fresh timestamp.
    pub fn with_afk(
        nick: impl Into<String>,
        channel: impl Into<String>,
        _last_message_time: i64,
        afk: bool,
    ) -> Self {
        Self::with_flags(nick, channel, now_millis(), afk, false, false)
    }

    /// Create a user with every flag given.
    pub fn with_flags(
        nick: impl Into<String>,
        channel: impl Into<String>,
        last_message_time: i64,
        afk: bool,
        operator: bool,
        voiced: bool,
    ) -> Self {
        Self {
            nick: nick.into(),
            channel: channel.into(),
            last_message_time,
            afk,
            operator,
            voiced,
            previous_message: String::new(),
            color: String::new(),
            emotes: String::new(),
            subscriber: false,
            turbo: false,
            user_type: String::new(),
        }
    }

    /// Copy a user into another channel.
    ///
    /// Keeps nick, AFK, operator and voice. The timestamp is reset to now and
    /// the decorations start empty.
    pub fn from_existing(user: &ChatUser, channel: impl Into<String>) -> Self {
        Self::with_flags(
            user.nick.clone(),
            channel,
            now_millis(),
            user.afk,
            user.operator,
            user.voiced,
        )
    }

    /// Change the user's nick. No validation is done.
    pub fn rename(&mut self, new_nick: impl Into<String>) {
        let new_nick = new_nick.into();
        debug!("Renaming {} to {} in {}", self.nick, new_nick, self.channel);
        self.nick = new_nick;
    }

    pub fn nick(&self) -> &str {
        &self.nick
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn set_channel(&mut self, channel: impl Into<String>) {
        self.channel = channel.into();
    }

    pub fn last_message_time(&self) -> i64 {
        self.last_message_time
    }

    pub fn set_last_message_time(&mut self, last_message_time: i64) {
        self.last_message_time = last_message_time;
    }

    /// Decide whether the user is AFK, caching a positive idle result.
    ///
    /// Known bots are never AFK. Otherwise a stored flag wins; failing that,
    /// the user is AFK once more than [`IDLE_THRESHOLD_MS`] passed since the
    /// last message, and that result is written back to the stored flag.
    pub fn compute_is_afk(&mut self, bots: &KnownBots) -> bool {
        self.compute_is_afk_at(bots, now_millis())
    }

    /// [`compute_is_afk`](Self::compute_is_afk) with an explicit clock reading.
    pub fn compute_is_afk_at(&mut self, bots: &KnownBots, now: i64) -> bool {
        if bots.contains(&self.nick) {
            return false;
        }
        if self.afk {
            return true;
        }
        // Saturate so extreme timestamps can't overflow.
        self.afk = now.saturating_sub(self.last_message_time) > IDLE_THRESHOLD_MS;
        if self.afk {
            debug!("{} in {} went idle", self.nick, self.channel);
        }
        self.afk
    }

    /// Raw stored AFK flag, without any idle check.
    pub fn is_afk_flag(&self) -> bool {
        self.afk
    }

    pub fn set_afk(&mut self, afk: bool) {
        self.afk = afk;
    }

    pub fn is_operator(&self) -> bool {
        self.operator
    }

    pub fn set_operator(&mut self, operator: bool) {
        self.operator = operator;
    }

    pub fn is_voiced(&self) -> bool {
        self.voiced
    }

    pub fn set_voiced(&mut self, voiced: bool) {
        self.voiced = voiced;
    }

    /// Last message body sent by the user.
    pub fn previous_message(&self) -> &str {
        &self.previous_message
    }

    pub fn set_previous_message(&mut self, message: impl Into<String>) {
        self.previous_message = message.into();
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub fn emotes(&self) -> &str {
        &self.emotes
    }

    pub fn set_emotes(&mut self, emotes: impl Into<String>) {
        self.emotes = emotes.into();
    }

    pub fn is_subscriber(&self) -> bool {
        self.subscriber
    }

    pub fn set_subscriber(&mut self, subscriber: bool) {
        self.subscriber = subscriber;
    }

    pub fn is_turbo(&self) -> bool {
        self.turbo
    }

    pub fn set_turbo(&mut self, turbo: bool) {
        self.turbo = turbo;
    }

    pub fn user_type(&self) -> &str {
        &self.user_type
    }

    pub fn set_user_type(&mut self, user_type: impl Into<String>) {
        self.user_type = user_type.into();
    }

    /// Copy Twitch message tags onto the decorations.
    ///
    /// Reads `color`, `emotes`, `subscriber`, `turbo` and `user-type`. Flags
    /// are true only for the value `"1"`. Missing tags leave fields alone.
    pub fn apply_tags(&mut self, tags: &HashMap<String, String>) {
        if let Some(color) = tags.get("color") {
            self.color = color.clone();
        }
        if let Some(emotes) = tags.get("emotes") {
            self.emotes = emotes.clone();
        }
        if let Some(subscriber) = tags.get("subscriber") {
            self.subscriber = subscriber == "1";
        }
        if let Some(turbo) = tags.get("turbo") {
            self.turbo = turbo == "1";
        }
        if let Some(user_type) = tags.get("user-type") {
            self.user_type = user_type.clone();
        }
    }

    /// Display form: `"{@}{+}{nick} {(AFK)} ({channel})"`.
    ///
    /// Uses the stored AFK flag; no idle check is made.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Compare nicks case-insensitively, in reverse.
    ///
    /// Returns -1 when `other` is not a `ChatUser`. Otherwise compares
    /// `other`'s lowercased nick against this one's, so sorting ascending on
    /// the result orders nicks Z to A.
    pub fn compare_nicks(&self, other: &dyn Any) -> i32 {
        match other.downcast_ref::<ChatUser>() {
            Some(other) => java_compare(&other.nick.to_lowercase(), &self.nick.to_lowercase()),
            None => -1,
        }
    }

    /// Same order as [`compare_nicks`](Self::compare_nicks), usable with `sort_by`.
    pub fn nick_ordering(&self, other: &ChatUser) -> Ordering {
        self.compare_nicks(other).cmp(&0)
    }
}

impl fmt::Display for ChatUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = if self.operator { "@" } else { "" };
        let voice = if self.voiced { "+" } else { "" };
        let afk = if self.afk { "(AFK)" } else { "" };
        write!(f, "{}{}{} {} ({})", op, voice, self.nick, afk, self.channel)
    }
}

impl PartialEq for ChatUser {
    fn eq(&self, other: &Self) -> bool {
        self.nick == other.nick
            && self.last_message_time == other.last_message_time
            && self.afk == other.afk
            && self.channel == other.channel
    }
}

impl Eq for ChatUser {}

impl Hash for ChatUser {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.nick.to_lowercase().hash(state);
    }
}
