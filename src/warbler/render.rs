//! # View Renderer
//!
//! Turns feed state into HTML. Rendering is a pure function of its inputs and
//! regenerates the whole feed on every call; there is no diffing and no
//! caching.
//!
//! Templates live in `src/warbler/templates/` and are embedded at compile time.
//! They are registered with `.html` names, so minijinja escapes every
//! interpolated value. Class names are worked out here and handed to the
//! template ready to use, keeping conditionals out of the markup.
//!
//! ## Markup contract
//!
//! - `data-like`, `data-repost`, `data-reply` carry the post id
//! - `replies-<id>` wraps a post's replies and starts with the `hidden` class
//! - replies carry no data markers
//! - `feed`, `tweet-input`, `tweet-btn`, `empty-message` and `theme-toggle`
//!   are fixed element ids in the document

use crate::error::Result;
use crate::feed::FeedState;
use crate::model::{Post, PostId, Reply, Theme};
use minijinja::Environment;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeSet;

pub const HIDDEN_CLASS: &str = "hidden";
pub const LIKED_CLASS: &str = "liked";
pub const REPOSTED_CLASS: &str = "reposted";
pub const DARK_MODE_CLASS: &str = "dark-mode";

const FEED_TEMPLATE: &str = include_str!("templates/feed.html");
const DOCUMENT_TEMPLATE: &str = include_str!("templates/document.html");

static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.add_template("feed.html", FEED_TEMPLATE)
        .expect("feed template compiles");
    env.add_template("document.html", DOCUMENT_TEMPLATE)
        .expect("document template compiles");
    env
});

#[derive(Serialize)]
struct ReplyView<'a> {
    handle: &'a str,
    profile_pic: &'a str,
    text: &'a str,
}

impl<'a> From<&'a Reply> for ReplyView<'a> {
    fn from(reply: &'a Reply) -> Self {
        Self {
            handle: &reply.handle,
            profile_pic: &reply.profile_pic,
            text: &reply.text,
        }
    }
}

#[derive(Serialize)]
struct PostView<'a> {
    uuid: &'a str,
    handle: &'a str,
    profile_pic: &'a str,
    text: &'a str,
    likes: u64,
    reposts: u64,
    reply_count: usize,
    like_icon_class: String,
    repost_icon_class: String,
    replies_class: &'static str,
    replies: Vec<ReplyView<'a>>,
}

fn icon_class(base: &str, active: bool, active_class: &str) -> String {
    if active {
        format!("{} {}", base, active_class)
    } else {
        base.to_string()
    }
}

impl<'a> PostView<'a> {
    fn new(post: &'a Post, expanded: bool) -> Self {
        Self {
            uuid: post.uuid.as_str(),
            handle: &post.handle,
            profile_pic: &post.profile_pic,
            text: &post.text,
            likes: post.likes,
            reposts: post.reposts,
            reply_count: post.replies.len(),
            like_icon_class: icon_class("fa-solid fa-heart", post.is_liked, LIKED_CLASS),
            repost_icon_class: icon_class("fa-solid fa-retweet", post.is_reposted, REPOSTED_CLASS),
            replies_class: if expanded { "" } else { HIDDEN_CLASS },
            replies: post.replies.iter().map(ReplyView::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct FeedView<'a> {
    posts: Vec<PostView<'a>>,
}

/// Everything outside the feed container that the document shows.
#[derive(Debug, Clone, Copy)]
pub struct DocumentParts<'a> {
    pub theme: Theme,
    pub profile_pic: &'a str,
    pub compose_input: &'a str,
    pub empty_message: &'a str,
    pub feed_html: &'a str,
}

#[derive(Serialize)]
struct DocumentView<'a> {
    body_class: &'static str,
    theme_label: &'static str,
    profile_pic: &'a str,
    compose_input: &'a str,
    empty_message: &'a str,
    feed_html: &'a str,
}

/// Renders the feed container's contents with every reply block hidden.
pub fn render_feed(feed: &FeedState) -> Result<String> {
    render_feed_with(feed, &BTreeSet::new())
}

/// Renders the feed container's contents, showing replies of `expanded` posts.
pub fn render_feed_with(feed: &FeedState, expanded: &BTreeSet<PostId>) -> Result<String> {
    let view = FeedView {
        posts: feed
            .posts()
            .iter()
            .map(|p| PostView::new(p, expanded.contains(&p.uuid)))
            .collect(),
    };
    let html = TEMPLATES.get_template("feed.html")?.render(&view)?;
    Ok(html)
}

/// Renders the full page around an already rendered feed.
pub fn render_document(parts: &DocumentParts<'_>) -> Result<String> {
    let view = DocumentView {
        body_class: if parts.theme.is_dark() {
            DARK_MODE_CLASS
        } else {
            ""
        },
        theme_label: if parts.theme.is_dark() { "☀" } else { "☾" },
        profile_pic: parts.profile_pic,
        compose_input: parts.compose_input,
        empty_message: parts.empty_message,
        feed_html: parts.feed_html,
    };
    let html = TEMPLATES.get_template("document.html")?.render(&view)?;
    Ok(html)
}
