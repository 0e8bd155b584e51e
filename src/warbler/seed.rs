//! Seed content: the immutable part of the feed loaded at startup.
//!
//! A small feed is embedded in the binary. A JSON file with the same shape
//! (an array of posts) can replace it through the `seed_file` config key.

use crate::error::{Result, WarblerError};
use crate::model::Post;
use std::fs;
use std::path::Path;

const BUILTIN_SEED: &str = include_str!("seed/posts.json");

/// The embedded seed feed.
pub fn builtin_seed() -> Vec<Post> {
    serde_json::from_str(BUILTIN_SEED).expect("embedded seed is valid JSON")
}

/// Loads seed posts from `path`, or the embedded seed when no path is given.
///
/// Any `createdAt` in the file is dropped.
pub fn load_seed(path: Option<&Path>) -> Result<Vec<Post>> {
    let Some(path) = path else {
        return Ok(builtin_seed());
    };
    let content = fs::read_to_string(path).map_err(WarblerError::Io)?;
    let mut posts: Vec<Post> =
        serde_json::from_str(&content).map_err(WarblerError::Serialization)?;
    // A timestamp marks a post as composed; seed posts never carry one.
    for post in &mut posts {
        post.created_at = None;
    }
    tracing::debug!(path = %path.display(), count = posts.len(), "loaded seed file");
    Ok(posts)
}
