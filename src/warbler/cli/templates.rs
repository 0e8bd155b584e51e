//! Terminal output templates.
//!
//! Templates live in `templates/` next to this file and are embedded as
//! string constants. They are minijinja templates with explicit line breaks:
//! every `\n` in the output comes from a visible line end in the file. Style
//! choices are computed in Rust and passed in by name.

pub const FEED_TEMPLATE: &str = include_str!("templates/feed.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
