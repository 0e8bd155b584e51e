//! # Rendering Module
//!
//! Styled terminal output for the feed and for command messages. Templates
//! are rendered with minijinja and a `style` filter that looks names up in
//! the palette for the current theme.
//!
//! Layout calculations (width, truncation, padding) stay in Rust because they
//! need Unicode-aware processing. Templates only arrange pre-computed strings
//! and pick styles by name.

use super::styles::{names, palette_for, Palette};
use super::templates::{FEED_TEMPLATE, MESSAGES_TEMPLATE};
use chrono::{DateTime, Utc};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;
use warbler::api::{CmdMessage, MessageLevel};
use warbler::index::DisplayPost;
use warbler::model::Theme;

pub const LINE_WIDTH: usize = 80;
pub const TIME_WIDTH: usize = 16;
const LEFT_PAD: &str = "  ";
const INDENT: &str = "      ";

#[derive(Serialize)]
struct ReplyLine {
    handle: String,
    text: String,
}

#[derive(Serialize)]
struct PostBlock {
    index: String,
    handle: String,
    padding: String,
    time_ago: String,
    lines: Vec<String>,
    like_label: String,
    like_style: &'static str,
    repost_label: String,
    repost_style: &'static str,
    reply_label: String,
    replies: Vec<ReplyLine>,
}

#[derive(Serialize)]
struct FeedData {
    posts: Vec<PostBlock>,
    empty: bool,
    left_pad: &'static str,
    indent: &'static str,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn render_template<T: Serialize>(
    source: &'static str,
    data: &T,
    palette: &'static Palette,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if use_color {
            palette.apply(&name, &text)
        } else {
            text
        }
    });
    env.add_template("output", source)?;
    env.get_template("output")?.render(data)
}

fn color_default() -> bool {
    console::colors_enabled()
}

fn post_block(dp: &DisplayPost) -> PostBlock {
    let post = &dp.post;
    let index = format!("{}. ", dp.index);
    let text_width = LINE_WIDTH.saturating_sub(INDENT.width());

    let header_width = LEFT_PAD.width() + index.width() + TIME_WIDTH;
    let handle = truncate_to_width(&post.handle, LINE_WIDTH.saturating_sub(header_width));
    let padding = " ".repeat(
        LINE_WIDTH
            .saturating_sub(header_width)
            .saturating_sub(handle.width()),
    );

    let replies = if dp.replies_expanded {
        post.replies
            .iter()
            .map(|r| ReplyLine {
                handle: r.handle.clone(),
                text: truncate_to_width(
                    &r.text.replace('\n', " "),
                    text_width.saturating_sub(r.handle.width() + 4),
                ),
            })
            .collect()
    } else {
        Vec::new()
    };

    PostBlock {
        index,
        handle,
        padding,
        time_ago: post.created_at.map(format_time_ago).unwrap_or_default(),
        lines: post
            .text
            .lines()
            .map(|line| truncate_to_width(line, text_width))
            .collect(),
        like_label: format!("♥ {}", post.likes),
        like_style: if post.is_liked {
            names::LIKED
        } else {
            names::COUNT
        },
        repost_label: format!("⇄ {}", post.reposts),
        repost_style: if post.is_reposted {
            names::REPOSTED
        } else {
            names::COUNT
        },
        reply_label: format!("↩ {}", post.replies.len()),
        replies,
    }
}

/// Renders the numbered feed for the terminal.
pub fn render_feed_list(posts: &[DisplayPost], theme: Theme) -> String {
    render_feed_list_internal(posts, theme, color_default())
}

fn render_feed_list_internal(posts: &[DisplayPost], theme: Theme, use_color: bool) -> String {
    let data = FeedData {
        posts: posts.iter().map(post_block).collect(),
        empty: posts.is_empty(),
        left_pad: LEFT_PAD,
        indent: INDENT,
    };

    render_template(FEED_TEMPLATE, &data, palette_for(theme), use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders command messages, one per line.
pub fn render_messages(messages: &[CmdMessage], theme: Theme) -> String {
    render_messages_internal(messages, theme, color_default())
}

fn render_messages_internal(messages: &[CmdMessage], theme: Theme, use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_template(MESSAGES_TEMPLATE, &data, palette_for(theme), use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn print_messages(messages: &[CmdMessage], theme: Theme) {
    let output = render_messages(messages, theme);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use warbler::model::{Post, PostId, Reply};

    fn display(index: usize, text: &str) -> DisplayPost {
        let mut post = Post::compose("@tester", "t.png", text.to_string());
        post.uuid = PostId::from(format!("id-{}", index).as_str());
        post.likes = 3;
        post.reposts = 1;
        post.replies.push(Reply::new("@friend", "f.png", "nice one"));
        DisplayPost {
            index,
            post,
            replies_expanded: false,
        }
    }

    #[test]
    fn empty_feed_says_so() {
        let output = render_feed_list_internal(&[], Theme::Light, false);
        assert_eq!(output.trim(), "No posts yet.");
    }

    #[test]
    fn post_shows_index_handle_text_and_counts() {
        let output = render_feed_list_internal(&[display(1, "hello feed")], Theme::Light, false);

        assert!(output.contains("  1. @tester"));
        assert!(output.contains("hello feed"));
        assert!(output.contains("♥ 3"));
        assert!(output.contains("⇄ 1"));
        assert!(output.contains("↩ 1"));
        assert!(!output.contains("nice one"));
    }

    #[test]
    fn expanded_post_lists_replies() {
        let mut dp = display(1, "parent");
        dp.replies_expanded = true;
        let output = render_feed_list_internal(&[dp], Theme::Light, false);
        assert!(output.contains("↳ @friend nice one"));
    }

    #[test]
    fn multi_line_text_is_indented() {
        let output = render_feed_list_internal(&[display(1, "one\ntwo")], Theme::Light, false);
        assert!(output.contains(&format!("{}one\n{}two\n", INDENT, INDENT)));
    }

    #[test]
    fn posts_keep_display_order() {
        let output = render_feed_list_internal(
            &[display(1, "first"), display(2, "second")],
            Theme::Dark,
            false,
        );
        assert!(output.find("first").unwrap() < output.find("second").unwrap());
        assert!(output.contains("  2. @tester"));
    }

    #[test]
    fn color_adds_ansi_codes() {
        let mut dp = display(1, "styled");
        dp.post.is_liked = true;
        let plain = render_feed_list_internal(std::slice::from_ref(&dp), Theme::Light, false);
        let colored = render_feed_list_internal(&[dp], Theme::Light, true);
        assert!(!plain.contains("\u{1b}["));
        assert!(colored.contains("\u{1b}["));
    }

    #[test]
    fn test_render_messages_empty() {
        assert!(render_messages_internal(&[], Theme::Light, false).is_empty());
    }

    #[test]
    fn test_render_messages_multiple() {
        let messages = vec![
            CmdMessage::info("Info message"),
            CmdMessage::warning("Warning message"),
            CmdMessage::error("Error message"),
        ];
        let output = render_messages_internal(&messages, Theme::Dark, false);
        assert_eq!(output, "Info message\nWarning message\nError message\n");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn time_ago_is_right_aligned() {
        let formatted = format_time_ago(Utc::now() - chrono::Duration::minutes(5));
        assert_eq!(formatted.width(), TIME_WIDTH);
        assert!(formatted.trim_start().starts_with("5 minutes"));
    }
}
