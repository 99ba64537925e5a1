//! Line inspector.
//!
//! Turns `"<nick> <channel> [last_message_ms]"` lines into rendered users.
//! The nick may carry leading `@` (operator) and `+` (voice) markers.

use thiserror::Error;

use crate::config::{Config, OutputFormat};
use crate::models::ChatUser;

/// Errors raised while reading an inspector line.
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("missing nick")]
    MissingNick,

    #[error("missing channel for {0}")]
    MissingChannel(String),

    #[error("invalid timestamp '{0}'")]
    InvalidTimestamp(String),

    #[error("failed to encode user: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Fields read from one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub nick: String,
    pub channel: String,
    pub last_message_time: Option<i64>,
    pub operator: bool,
    pub voiced: bool,
}

impl ParsedLine {
    /// Build the user this line describes.
    pub fn into_user(self) -> ChatUser {
        match self.last_message_time {
            Some(ts) => ChatUser::with_flags(
                self.nick,
                self.channel,
                ts,
                false,
                self.operator,
                self.voiced,
            ),
            None => {
                let mut user = ChatUser::new(self.nick, self.channel);
                user.set_operator(self.operator);
                user.set_voiced(self.voiced);
                user
            }
        }
    }
}

/// Parse a line. Blank lines and `#!` comments yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<ParsedLine>, InspectError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with("#!") {
        return Ok(None);
    }

    let mut parts = line.split_whitespace();
    let raw_nick = parts.next().ok_or(InspectError::MissingNick)?;

    let mut operator = false;
    let mut voiced = false;
    let nick = raw_nick.trim_start_matches(|c| match c {
        '@' => {
            operator = true;
            true
        }
        '+' => {
            voiced = true;
            true
        }
        _ => false,
    });
    if nick.is_empty() {
        return Err(InspectError::MissingNick);
    }

    let channel = parts
        .next()
        .ok_or_else(|| InspectError::MissingChannel(nick.to_string()))?;

    let last_message_time = parts
        .next()
        .map(|raw| {
            raw.parse::<i64>()
                .map_err(|_| InspectError::InvalidTimestamp(raw.to_string()))
        })
        .transpose()?;

    Ok(Some(ParsedLine {
        nick: nick.to_string(),
        channel: channel.to_string(),
        last_message_time,
        operator,
        voiced,
    }))
}

/// Parse a line and render the resulting user in the configured format.
///
/// AFK is computed against the configured bot list before rendering.
pub fn inspect_line(line: &str, config: &Config) -> Result<Option<String>, InspectError> {
    let Some(parsed) = parse_line(line)? else {
        return Ok(None);
    };

    let mut user = parsed.into_user();
    user.compute_is_afk(&config.known_bots);

    let out = match config.output {
        OutputFormat::Text => user.render(),
        OutputFormat::Json => serde_json::to_string(&user)?,
    };
    Ok(Some(out))
}
