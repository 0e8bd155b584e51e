//! # Commands
//!
//! One module per user-facing operation. Every command takes the page and
//! the store it needs, performs the state change, and returns a
//! [`CmdResult`] describing what happened. Commands never print.
//!
//! The order inside a mutating command is fixed: mutate the feed, re-render
//! the page, then persist. A missed post id is reported as a warning message
//! and changes nothing.

use crate::config::WarblerConfig;
use crate::index::DisplayPost;
use crate::model::{Post, Theme};

pub mod compose;
pub mod config;
pub mod engagement;
pub mod replies;
pub mod reset;
pub mod theme;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
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
    pub affected_posts: Vec<Post>,
    pub listed_posts: Vec<DisplayPost>,
    pub html: Option<String>,
    pub theme: Option<Theme>,
    pub config: Option<WarblerConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_posts(mut self, posts: Vec<Post>) -> Self {
        self.affected_posts = posts;
        self
    }

    pub fn with_listed_posts(mut self, posts: Vec<DisplayPost>) -> Self {
        self.listed_posts = posts;
        self
    }

    pub fn with_html(mut self, html: String) -> Self {
        self.html = Some(html);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_config(mut self, config: WarblerConfig) -> Self {
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
