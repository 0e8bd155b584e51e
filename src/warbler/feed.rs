//! # Post Store
//!
//! [`FeedState`] is the ordered, in-memory list of posts and the single source
//! of truth for rendering. Posts are never removed or reordered; the only
//! structural change is prepending a newly composed post.
//!
//! Mutations here are pure state changes. Re-rendering and persisting are the
//! caller's job (see `commands/`), which keeps this layer testable without a
//! page or a store.

use crate::model::{InteractionRecord, Post, PostId};
use std::collections::BTreeMap;

/// Shown in the compose form when the input is blank.
pub const EMPTY_MESSAGE: &str = "Message is empty. Write something first and try again.";

/// Outcome of [`FeedState::compose_post`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeOutcome {
    Posted(PostId),
    Rejected(&'static str),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedState {
    posts: Vec<Post>,
}

impl FeedState {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// First post whose id matches.
    pub fn find(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|p| &p.uuid == id)
    }

    fn find_mut(&mut self, id: &PostId) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| &p.uuid == id)
    }

    /// Flips the like flag of the matching post. `None` leaves the feed untouched.
    pub fn toggle_like(&mut self, id: &PostId) -> Option<&Post> {
        let post = self.find_mut(id)?;
        post.toggle_like();
        Some(&*post)
    }

    /// Flips the repost flag of the matching post. `None` leaves the feed untouched.
    pub fn toggle_repost(&mut self, id: &PostId) -> Option<&Post> {
        let post = self.find_mut(id)?;
        post.toggle_repost();
        Some(&*post)
    }

    /// Prepends a new post unless `text` is blank.
    pub fn compose_post(&mut self, text: &str, handle: &str, profile_pic: &str) -> ComposeOutcome {
        if text.trim().is_empty() {
            return ComposeOutcome::Rejected(EMPTY_MESSAGE);
        }
        let post = Post::compose(handle, profile_pic, text.to_string());
        let id = post.uuid.clone();
        self.posts.insert(0, post);
        ComposeOutcome::Posted(id)
    }

    /// Prepends already-composed posts, keeping their order.
    ///
    /// Posts whose id is already in the feed are skipped.
    pub fn prepend(&mut self, posts: Vec<Post>) {
        let fresh: Vec<Post> = posts
            .into_iter()
            .filter(|p| self.find(&p.uuid).is_none())
            .collect();
        self.posts.splice(0..0, fresh);
    }

    /// Posts that carry a timestamp, i.e. were composed rather than seeded.
    pub fn composed_posts(&self) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|p| p.created_at.is_some())
            .cloned()
            .collect()
    }

    /// The full interaction-state mapping, keyed by post id.
    pub fn interaction_records(&self) -> BTreeMap<PostId, InteractionRecord> {
        self.posts
            .iter()
            .map(|p| (p.uuid.clone(), p.interaction_record()))
            .collect()
    }

    /// Overlays persisted records onto matching posts. Returns how many applied.
    ///
    /// Records for ids not in the feed are ignored; posts without a record keep
    /// their seed values.
    pub fn apply_records(&mut self, records: &BTreeMap<PostId, InteractionRecord>) -> usize {
        let mut applied = 0;
        for post in &mut self.posts {
            if let Some(record) = records.get(&post.uuid) {
                post.apply_record(record);
                applied += 1;
            }
        }
        applied
    }
}
