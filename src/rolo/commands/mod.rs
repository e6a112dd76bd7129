//! Business logic for each command: plain functions over a
//! [`ContactBook`](crate::book::ContactBook), no I/O, no terminal
//! assumptions. Expected negative results ("phone does not exist",
//! "fragment not found", "birthday not specified") are reported through
//! [`CmdMessage`]s; only validation failures, missing contacts and storage
//! trouble use the error channel.

use crate::model::Record;

pub mod add;
pub mod birthday;
pub mod change;
pub mod find;
pub mod remove;
pub mod show;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
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
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records a mutating command touched.
    pub affected: Vec<Record>,
    /// (name, record) pairs a query command wants displayed.
    pub listed: Vec<(String, Record)>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected(mut self, records: Vec<Record>) -> Self {
        self.affected = records;
        self
    }

    pub fn with_listed(mut self, listed: Vec<(String, Record)>) -> Self {
        self.listed = listed;
        self
    }
}
