//! Reference time-telling agent

use async_trait::async_trait;
use chrono::{FixedOffset, Local, Utc};

use crate::protocol::{ExchangeError, Message};

use super::TaskAgent;

/// How the agent treats timezone input
///
/// The reference behavior ignores any timezone the caller provides and
/// answers in server-local time. That gap between the advertised contract
/// ("timezone-aware replies") and the actual behavior is deliberate, so the
/// choice is an explicit configuration knob instead of a silent fix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimezonePolicy {
    /// Ignore caller timezone input and answer in server-local time
    #[default]
    Ignore,

    /// Always answer in UTC
    Utc,

    /// Honor a `timezone` metadata entry carrying a `±HH:MM` offset,
    /// falling back to UTC when absent or unparseable
    Honor,
}

/// Agent that replies with the current wall-clock time
///
/// Replies carry a single text part formatted `YYYY-MM-DD HH:MM:SS`.
#[derive(Debug, Clone, Default)]
pub struct TimeTeller {
    policy: TimezonePolicy,
}

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl TimeTeller {
    /// Create a time teller with the reference behavior (ignore timezones)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a time teller with an explicit timezone policy
    pub fn with_policy(policy: TimezonePolicy) -> Self {
        Self { policy }
    }

    fn format_now(&self, message: &Message) -> String {
        match self.policy {
            TimezonePolicy::Ignore => Local::now().format(TIME_FORMAT).to_string(),
            TimezonePolicy::Utc => Utc::now().format(TIME_FORMAT).to_string(),
            TimezonePolicy::Honor => {
                let offset = message
                    .metadata
                    .get("timezone")
                    .and_then(|v| v.as_str())
                    .and_then(parse_offset);

                match offset {
                    Some(offset) => Utc::now()
                        .with_timezone(&offset)
                        .format(TIME_FORMAT)
                        .to_string(),
                    None => {
                        tracing::warn!("no usable timezone metadata, replying in UTC");
                        Utc::now().format(TIME_FORMAT).to_string()
                    }
                }
            }
        }
    }
}

/// Parse a `±HH:MM` offset string
fn parse_offset(raw: &str) -> Option<FixedOffset> {
    let (sign, rest) = match raw.split_at_checked(1)? {
        ("+", rest) => (1, rest),
        ("-", rest) => (-1, rest),
        _ => return None,
    };

    let (hours, minutes) = rest.split_once(':')?;
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

#[async_trait]
impl TaskAgent for TimeTeller {
    async fn reply(&self, message: &Message) -> Result<Message, ExchangeError> {
        Ok(Message::agent(self.format_now(message)))
    }
}
