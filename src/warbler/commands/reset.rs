use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Post, Theme};
use crate::page::Page;
use crate::persistence;
use crate::store::KeyValueStore;

/// Forgets all persisted state and puts the page back to the seed feed.
pub fn run<S: KeyValueStore>(
    page: &mut Page,
    store: &mut S,
    seed: Vec<Post>,
) -> Result<CmdResult> {
    persistence::clear(store)?;
    *page = Page::new(persistence::restore_feed(store, seed), Theme::default())?;
    tracing::info!("persisted state cleared");

    let mut result = CmdResult::default().with_theme(page.theme());
    result.add_message(CmdMessage::success("Cleared likes, reposts, posts and theme"));
    Ok(result)
}
