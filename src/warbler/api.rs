//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every warbler operation, whichever client drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the session**: the store, the page and the loaded configuration
//! - **Dispatches** clicks and named operations to the matching command
//! - **Normalizes inputs** (display indexes and ids become [`PostId`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O of its own beyond loading config and seed at startup, and
//! it never formats output.
//!
//! ## Two ways in
//!
//! [`WarblerApi::click`] is the page's single click listener: it routes a raw
//! [`ClickTarget`] and treats unknown ids as ignorable. The named methods
//! (`like`, `repost`, ...) take user-typed selectors and fail with
//! [`WarblerError::PostNotFound`] when the selector matches nothing.
//!
//! ## Generic Over KeyValueStore
//!
//! - Production: `WarblerApi<FileStore>`
//! - Testing: `WarblerApi<InMemoryStore>`

use crate::commands;
use crate::config::WarblerConfig;
use crate::dispatch::{self, Action, ClickTarget};
use crate::error::{Result, WarblerError};
use crate::index;
use crate::model::{Post, PostId};
use crate::page::Page;
use crate::persistence;
use crate::seed;
use crate::store::KeyValueStore;
use crate::theme;
use std::path::PathBuf;

pub struct WarblerApi<S: KeyValueStore> {
    store: S,
    page: Page,
    config: WarblerConfig,
    seed: Vec<Post>,
    data_dir: PathBuf,
}

impl<S: KeyValueStore> WarblerApi<S> {
    /// Loads config and seed, restores persisted state and renders the page.
    ///
    /// An unreadable seed file falls back to the built-in seed, so `config`
    /// and `reset` stay usable to repair it.
    pub fn open(store: S, data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        let config = WarblerConfig::load(&data_dir)?;
        let seed = seed::load_seed(config.seed_file.as_deref()).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "seed file unusable, using built-in seed");
            seed::builtin_seed()
        });
        Self::with_seed(store, data_dir, config, seed)
    }

    pub fn with_seed(
        store: S,
        data_dir: PathBuf,
        config: WarblerConfig,
        seed: Vec<Post>,
    ) -> Result<Self> {
        let feed = persistence::restore_feed(&store, seed.clone());
        let page = Page::new(feed, theme::initial_theme(&store))?;
        Ok(Self {
            store,
            page,
            config,
            seed,
            data_dir,
        })
    }

    /// Handles one click anywhere on the page.
    pub fn click(&mut self, target: &ClickTarget) -> Result<commands::CmdResult> {
        let Some(action) = dispatch::route(target) else {
            tracing::debug!(?target, "click ignored");
            return Ok(commands::CmdResult::default());
        };
        tracing::debug!(?action, "dispatching click");
        match action {
            Action::Like(id) => commands::engagement::like(&mut self.page, &mut self.store, &id),
            Action::Repost(id) => {
                commands::engagement::repost(&mut self.page, &mut self.store, &id)
            }
            Action::ToggleReplies(id) => commands::replies::toggle(&mut self.page, &id),
            Action::Compose => {
                commands::compose::run(&mut self.page, &mut self.store, &self.config)
            }
            Action::ToggleTheme => commands::theme::run(
                &mut self.page,
                &mut self.store,
                commands::theme::ThemeAction::Toggle,
            ),
        }
    }

    pub fn like(&mut self, selector: &str) -> Result<commands::CmdResult> {
        let id = self.resolve(selector)?;
        commands::engagement::like(&mut self.page, &mut self.store, &id)
    }

    pub fn repost(&mut self, selector: &str) -> Result<commands::CmdResult> {
        let id = self.resolve(selector)?;
        commands::engagement::repost(&mut self.page, &mut self.store, &id)
    }

    pub fn toggle_replies(&mut self, selector: &str) -> Result<commands::CmdResult> {
        let id = self.resolve(selector)?;
        commands::replies::toggle(&mut self.page, &id)
    }

    pub fn expand_replies<I: AsRef<str>>(
        &mut self,
        selectors: &[I],
    ) -> Result<commands::CmdResult> {
        let ids = index::resolve_all(self.page.feed(), selectors)?;
        commands::replies::expand(&mut self.page, &ids)
    }

    /// Types `text` into the compose input and presses the post button.
    pub fn compose(&mut self, text: &str) -> Result<commands::CmdResult> {
        self.page.set_compose_input(text);
        self.click(&ClickTarget::compose_button())
    }

    pub fn theme(&mut self, action: ThemeAction) -> Result<commands::CmdResult> {
        commands::theme::run(&mut self.page, &mut self.store, action)
    }

    pub fn list_posts(&self) -> Result<commands::CmdResult> {
        commands::view::list(&self.page)
    }

    pub fn document(&self) -> Result<commands::CmdResult> {
        commands::view::html(&self.page, &self.config.profile_pic)
    }

    pub fn reset(&mut self) -> Result<commands::CmdResult> {
        commands::reset::run(&mut self.page, &mut self.store, self.seed.clone())
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn resolve(&self, selector: &str) -> Result<PostId> {
        index::resolve(self.page.feed(), selector).map_err(|e| match e {
            WarblerError::PostNotFound(sel) => WarblerError::PostNotFound(format!(
                "{} (feed has {} posts)",
                sel,
                self.page.feed().len()
            )),
            other => other,
        })
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::theme::ThemeAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
