use crate::commands::{CmdMessage, CmdResult};
use crate::config::WarblerConfig;
use crate::error::Result;
use crate::feed::ComposeOutcome;
use crate::page::Page;
use crate::persistence;
use crate::store::KeyValueStore;

/// Posts whatever is in the compose input.
///
/// Blank input leaves the feed alone and shows the validation message on the
/// page. Otherwise the new post goes to the top of the feed, the page is
/// re-rendered, state is persisted and the form is reset.
pub fn run<S: KeyValueStore>(
    page: &mut Page,
    store: &mut S,
    config: &WarblerConfig,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let text = page.compose_input().to_string();

    let outcome = page
        .feed_mut()
        .compose_post(&text, &config.handle, &config.profile_pic);

    let id = match outcome {
        ComposeOutcome::Rejected(message) => {
            tracing::debug!("blank post rejected");
            page.set_empty_message(message);
            result.add_message(CmdMessage::warning(message));
            return Ok(result);
        }
        ComposeOutcome::Posted(id) => id,
    };

    page.rerender()?;
    persistence::save_interactions(store, page.feed())?;
    persistence::save_composed(store, page.feed())?;
    page.clear_compose_input();
    page.set_empty_message("");

    let post = page.feed().find(&id).cloned();
    tracing::info!(post = %id, "post composed");
    result.add_message(CmdMessage::success(format!("Posted as {}", config.handle)));
    Ok(result.with_affected_posts(post.into_iter().collect()))
}
