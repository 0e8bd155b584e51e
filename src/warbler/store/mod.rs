//! # Storage Layer
//!
//! Warbler persists a handful of string values under fixed keys, the same
//! shape a browser's local storage offers. The [`KeyValueStore`] trait is that
//! contract; what gets stored under each key is decided by
//! [`crate::persistence`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - All keys live in one `storage.json` object in the data directory
//!   - Every write replaces the file atomically (tmp file + rename)
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Keys
//!
//! ```text
//! warbler.interactions   {"<post id>": {"likes": 6, "isLiked": true, ...}, ...}
//! warbler.theme          dark | light
//! warbler.composed       [<post>, ...]   newest first
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

pub const INTERACTIONS_KEY: &str = "warbler.interactions";
pub const THEME_KEY: &str = "warbler.theme";
pub const COMPOSED_KEY: &str = "warbler.composed";

/// Every key warbler writes.
pub const ALL_KEYS: [&str; 3] = [INTERACTIONS_KEY, THEME_KEY, COMPOSED_KEY];

/// Flat string key-value storage.
///
/// Writes replace the whole value; there are no partial updates.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a value. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}
