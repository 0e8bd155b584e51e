//! # Event Dispatcher
//!
//! The page has a single click listener. It looks at the element that was
//! clicked and picks exactly one action, checking markers in a fixed order:
//!
//! 1. `data-like`    → [`Action::Like`]
//! 2. `data-repost`  → [`Action::Repost`]
//! 3. `data-reply`   → [`Action::ToggleReplies`]
//! 4. id `tweet-btn` → [`Action::Compose`]
//! 5. id `theme-toggle` → [`Action::ToggleTheme`]
//!
//! Anything else is ignored. An empty marker value counts as absent.

use crate::model::PostId;

pub const FEED_ID: &str = "feed";
pub const COMPOSE_BUTTON_ID: &str = "tweet-btn";
pub const COMPOSE_INPUT_ID: &str = "tweet-input";
pub const EMPTY_MESSAGE_ID: &str = "empty-message";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

/// The element a click landed on: its id and its data markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    pub id: Option<String>,
    pub like: Option<String>,
    pub repost: Option<String>,
    pub reply: Option<String>,
}

impl ClickTarget {
    pub fn like(post: &PostId) -> Self {
        Self {
            like: Some(post.to_string()),
            ..Default::default()
        }
    }

    pub fn repost(post: &PostId) -> Self {
        Self {
            repost: Some(post.to_string()),
            ..Default::default()
        }
    }

    pub fn reply(post: &PostId) -> Self {
        Self {
            reply: Some(post.to_string()),
            ..Default::default()
        }
    }

    /// An element identified only by its id attribute.
    pub fn element(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn compose_button() -> Self {
        Self::element(COMPOSE_BUTTON_ID)
    }

    pub fn theme_toggle() -> Self {
        Self::element(THEME_TOGGLE_ID)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Like(PostId),
    Repost(PostId),
    ToggleReplies(PostId),
    Compose,
    ToggleTheme,
}

fn marker(value: &Option<String>) -> Option<PostId> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(PostId::from)
}

/// Picks the single action a click on `target` triggers, if any.
pub fn route(target: &ClickTarget) -> Option<Action> {
    if let Some(id) = marker(&target.like) {
        return Some(Action::Like(id));
    }
    if let Some(id) = marker(&target.repost) {
        return Some(Action::Repost(id));
    }
    if let Some(id) = marker(&target.reply) {
        return Some(Action::ToggleReplies(id));
    }
    match target.id.as_deref() {
        Some(COMPOSE_BUTTON_ID) => Some(Action::Compose),
        Some(THEME_TOGGLE_ID) => Some(Action::ToggleTheme),
        _ => None,
    }
}
