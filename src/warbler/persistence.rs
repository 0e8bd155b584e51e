//! # Local Persistence Adapter
//!
//! Maps feed state to and from the flat values kept in a [`KeyValueStore`].
//!
//! Reads are forgiving: a value that is absent, unreadable or malformed means
//! "nothing persisted" and the caller falls back to seed defaults. Writes
//! overwrite the whole value for their key and report failures.

use crate::error::{Result, WarblerError};
use crate::feed::FeedState;
use crate::model::{InteractionRecord, Post, PostId, Theme};
use crate::store::{KeyValueStore, ALL_KEYS, COMPOSED_KEY, INTERACTIONS_KEY, THEME_KEY};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

pub type InteractionMap = BTreeMap<PostId, InteractionRecord>;

fn read_json<S: KeyValueStore, T: DeserializeOwned>(store: &S, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "could not read stored value, using defaults");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "ignoring malformed stored value");
            None
        }
    }
}

fn write_json<S: KeyValueStore, T: serde::Serialize>(
    store: &mut S,
    key: &str,
    value: &T,
) -> Result<()> {
    let content = serde_json::to_string(value).map_err(WarblerError::Serialization)?;
    store.set(key, &content)?;
    tracing::debug!(key, bytes = content.len(), "persisted");
    Ok(())
}

/// The persisted interaction mapping, empty when nothing usable is stored.
pub fn load_interactions<S: KeyValueStore>(store: &S) -> InteractionMap {
    read_json(store, INTERACTIONS_KEY).unwrap_or_default()
}

/// Overwrites the interaction mapping with the feed's current state.
pub fn save_interactions<S: KeyValueStore>(store: &mut S, feed: &FeedState) -> Result<()> {
    write_json(store, INTERACTIONS_KEY, &feed.interaction_records())
}

/// Previously composed posts, newest first.
pub fn load_composed<S: KeyValueStore>(store: &S) -> Vec<Post> {
    read_json(store, COMPOSED_KEY).unwrap_or_default()
}

pub fn save_composed<S: KeyValueStore>(store: &mut S, feed: &FeedState) -> Result<()> {
    write_json(store, COMPOSED_KEY, &feed.composed_posts())
}

/// The persisted theme. Anything other than the literal `dark` is light.
pub fn load_theme<S: KeyValueStore>(store: &S) -> Theme {
    match store.get(THEME_KEY) {
        Ok(Some(raw)) if raw == Theme::Dark.as_str() => Theme::Dark,
        Ok(_) => Theme::Light,
        Err(e) => {
            tracing::warn!(error = %e, "could not read stored theme, using light");
            Theme::Light
        }
    }
}

pub fn save_theme<S: KeyValueStore>(store: &mut S, theme: Theme) -> Result<()> {
    store.set(THEME_KEY, theme.as_str())?;
    tracing::debug!(theme = %theme, "persisted theme");
    Ok(())
}

/// Builds the startup feed: seed posts, prepended with composed posts, then
/// overlaid with persisted interaction records.
pub fn restore_feed<S: KeyValueStore>(store: &S, seed: Vec<Post>) -> FeedState {
    let mut feed = FeedState::new(seed);
    feed.prepend(load_composed(store));
    let records = load_interactions(store);
    let applied = feed.apply_records(&records);
    tracing::debug!(
        posts = feed.len(),
        stored = records.len(),
        applied,
        "restored feed"
    );
    feed
}

/// Drops everything warbler has persisted.
pub fn clear<S: KeyValueStore>(store: &mut S) -> Result<()> {
    for key in ALL_KEYS {
        store.remove(key)?;
    }
    Ok(())
}
