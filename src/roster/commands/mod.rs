//! # Command Layer
//!
//! One module per operation. Each `run` takes the store (and whatever the
//! operation needs), performs the business logic and returns a [`CmdResult`]
//! describing what happened. Nothing here prints or prompts.
//!
//! Store rejections that a user can fix (blank names, records that vanished)
//! come back as messages on the result rather than as errors, so a UI can show
//! them and carry on. Errors are reserved for things the caller got wrong,
//! such as an index that is not on screen.

use crate::config::RosterConfig;
use crate::index::DisplayRecord;
use crate::model::Record;

pub mod add;
pub mod config;
pub mod helpers;
pub mod list;
pub mod remove;
pub mod rename;
pub mod search;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<DisplayRecord>,
    pub config: Option<RosterConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_config(mut self, config: RosterConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when any message is a warning or an error.
    pub fn has_problems(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}
