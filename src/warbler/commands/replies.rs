use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PostId;
use crate::page::Page;

/// Shows or hides one post's replies. Nothing is rendered or persisted.
pub fn toggle(page: &mut Page, id: &PostId) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match page.toggle_replies(id) {
        Some(visible) => {
            tracing::debug!(post = %id, visible, "replies toggled");
            let verb = if visible { "Showing" } else { "Hiding" };
            let count = page.feed().find(id).map_or(0, |p| p.replies.len());
            result.add_message(CmdMessage::info(format!("{} {} replies", verb, count)));
        }
        None => {
            tracing::warn!(post = %id, "no reply block for post");
            result.add_message(CmdMessage::warning(format!("No post with id {}", id)));
        }
    }
    Ok(result)
}

/// Opens the reply blocks of `ids`, leaving already open ones as they are.
pub fn expand(page: &mut Page, ids: &[PostId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for id in ids {
        if page.replies_visible(id) {
            continue;
        }
        let toggled = toggle(page, id)?;
        result.messages.extend(toggled.messages);
    }
    Ok(result)
}
