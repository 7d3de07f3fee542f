//! Public models for the atomic-counters module.
//!
//! These are transport-agnostic data structures: the transport layer decodes
//! wire requests into `CommandRequest` and the command routing layer hands them
//! to the module's handler.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Counter command supported by the module.
///
/// The routing layer only ever builds requests with one of these tags, so
/// matching on it is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CounterCommand {
    /// Add `delta` to the counter.
    #[serde(rename = "incr")]
    Increment,
    /// Subtract `delta` from the counter.
    #[serde(rename = "decr")]
    Decrement,
}

impl CounterCommand {
    /// All supported commands, in routing-table order.
    pub const ALL: [CounterCommand; 2] = [CounterCommand::Increment, CounterCommand::Decrement];

    /// Command identifier as used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CounterCommand::Increment => "incr",
            CounterCommand::Decrement => "decr",
        }
    }
}

impl fmt::Display for CounterCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a command identifier is not served by this module.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported counter command: {0}")]
pub struct UnknownCommand(pub String);

impl FromStr for CounterCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "incr" => Ok(CounterCommand::Increment),
            "decr" => Ok(CounterCommand::Decrement),
            other => Err(UnknownCommand(other.to_owned())),
        }
    }
}

/// Decoded client request for a counter command.
///
/// `key` and `delta` are mandatory but may be absent after decoding; the
/// module's validator rejects such requests before any work is scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRequest {
    pub command: CounterCommand,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub delta: Option<i64>,
    /// Value the counter is created with when it does not exist yet.
    #[serde(default, rename = "init")]
    pub initial: Option<i64>,
}

impl CommandRequest {
    /// Creates a request for `command` with no parameters set.
    #[must_use]
    pub fn new(command: CounterCommand) -> Self {
        Self {
            command,
            key: None,
            delta: None,
            initial: None,
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_delta(mut self, delta: i64) -> Self {
        self.delta = Some(delta);
        self
    }

    #[must_use]
    pub fn with_initial(mut self, initial: i64) -> Self {
        self.initial = Some(initial);
        self
    }

    #[must_use]
    pub fn command(&self) -> CounterCommand {
        self.command
    }

    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    #[must_use]
    pub fn delta(&self) -> Option<i64> {
        self.delta
    }

    #[must_use]
    pub fn initial(&self) -> Option<i64> {
        self.initial
    }
}
