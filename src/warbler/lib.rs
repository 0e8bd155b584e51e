//! # Warbler Architecture
//!
//! Warbler is a **UI-agnostic social-feed library**: a list of posts that can
//! be liked, reposted, have their replies expanded, and grow by composing new
//! posts. Interaction state and the light/dark theme survive restarts through
//! a small key-value store. The terminal binary is one client of this library;
//! the HTML document it renders is another view of the same state.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints feed and messages, logging      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns store, page and config for one session              │
//! │  - Routes clicks (dispatch.rs), resolves selectors          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - mutate feed → re-render page → persist                   │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  State, view and storage                                    │
//! │  - feed.rs (posts), page.rs (document), render.rs (HTML)    │
//! │  - persistence.rs over store/ (FileStore, InMemoryStore)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rendering
//!
//! Every like, repost or compose re-renders the whole feed from state. There
//! is no diffing. A re-render throws away the previous markup, so any reply
//! block the user had opened is closed again. Opening replies and switching
//! theme never re-render.
//!
//! ## Persistence
//!
//! Three keys, each overwritten wholesale:
//!
//! - `warbler.interactions`: post id → likes, isLiked, reposts, isReposted
//! - `warbler.theme`: `light` or `dark`
//! - `warbler.composed`: posts composed locally, newest first
//!
//! Anything unreadable on startup is ignored with a warning and the seed
//! values stand.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`dispatch`]: Click routing by data marker and element id
//! - [`page`]: Document state: rendered feed, open replies, compose form
//! - [`feed`]: The ordered post list and its mutations
//! - [`render`]: HTML templates for the feed and the page
//! - [`persistence`]: Mapping feed state to stored values
//! - [`store`]: Key-value storage abstraction and implementations
//! - [`theme`]: Light/dark switching
//! - [`index`]: Display indexes (`1`, `2`, ...) and selectors
//! - [`seed`]: Built-in and file-based seed posts
//! - [`config`]: Configuration management
//! - [`model`]: Core data types (`Post`, `Reply`, `Theme`, ...)
//! - [`error`]: Error types
//! - `cli`: Argument parsing and terminal rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod feed;
pub mod index;
pub mod model;
pub mod page;
pub mod persistence;
pub mod render;
pub mod seed;
pub mod store;
pub mod theme;
