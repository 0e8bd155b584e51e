//! Display indexes for posts.
//!
//! The terminal lists posts numbered from 1 in feed order, newest composed
//! post first. Commands take a selector that is either such a number or a
//! post id, so `warbler like 2` and `warbler like 3fa8...` both work.
//!
//! Indexes are positional: composing a post shifts every other post down by
//! one. Ids never change.

use crate::error::{Result, WarblerError};
use crate::feed::FeedState;
use crate::model::{Post, PostId};
use crate::page::Page;
use std::str::FromStr;

/// A user input that picks a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostSelector {
    Index(usize),
    Id(PostId),
}

impl std::fmt::Display for PostSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostSelector::Index(i) => write!(f, "{}", i),
            PostSelector::Id(id) => write!(f, "\"{}\"", id),
        }
    }
}

impl FromStr for PostSelector {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty post selector".to_string());
        }
        match s.parse::<usize>() {
            Ok(0) => Err("Post indexes start at 1".to_string()),
            Ok(n) => Ok(PostSelector::Index(n)),
            Err(_) => Ok(PostSelector::Id(PostId::from(s))),
        }
    }
}

impl PostSelector {
    /// Finds the post this selector points at.
    ///
    /// A numeric selector that is out of range is retried as an id, since
    /// seed ids are free-form and may well be digits.
    pub fn resolve<'a>(&self, feed: &'a FeedState) -> Option<&'a Post> {
        match self {
            PostSelector::Index(n) => feed
                .posts()
                .get(n - 1)
                .or_else(|| feed.find(&PostId::new(n.to_string()))),
            PostSelector::Id(id) => feed.find(id),
        }
    }
}

/// Resolves raw selector input to a post id.
pub fn resolve(feed: &FeedState, input: &str) -> Result<PostId> {
    let selector: PostSelector = input.parse().map_err(WarblerError::Api)?;
    selector
        .resolve(feed)
        .map(|p| p.uuid.clone())
        .ok_or_else(|| WarblerError::PostNotFound(selector.to_string()))
}

/// Resolves many selectors, failing on the first miss.
pub fn resolve_all<I: AsRef<str>>(feed: &FeedState, inputs: &[I]) -> Result<Vec<PostId>> {
    inputs.iter().map(|s| resolve(feed, s.as_ref())).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPost {
    pub index: usize,
    pub post: Post,
    pub replies_expanded: bool,
}

/// Numbers the page's posts in display order.
pub fn index_posts(page: &Page) -> Vec<DisplayPost> {
    page.feed()
        .posts()
        .iter()
        .enumerate()
        .map(|(i, post)| DisplayPost {
            index: i + 1,
            post: post.clone(),
            replies_expanded: page.replies_visible(&post.uuid),
        })
        .collect()
}
