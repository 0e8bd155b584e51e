use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::feed::FeedState;
use crate::model::{Post, PostId};
use crate::page::Page;
use crate::persistence;
use crate::store::KeyValueStore;

pub fn like<S: KeyValueStore>(page: &mut Page, store: &mut S, id: &PostId) -> Result<CmdResult> {
    engage(page, store, id, FeedState::toggle_like, |post| {
        let verb = if post.is_liked { "Liked" } else { "Unliked" };
        format!("{} {} ({} likes)", verb, post.handle, post.likes)
    })
}

pub fn repost<S: KeyValueStore>(
    page: &mut Page,
    store: &mut S,
    id: &PostId,
) -> Result<CmdResult> {
    engage(page, store, id, FeedState::toggle_repost, |post| {
        let verb = if post.is_reposted {
            "Reposted"
        } else {
            "Undid repost of"
        };
        format!("{} {} ({} reposts)", verb, post.handle, post.reposts)
    })
}

fn engage<S, T, D>(
    page: &mut Page,
    store: &mut S,
    id: &PostId,
    toggle: T,
    describe: D,
) -> Result<CmdResult>
where
    S: KeyValueStore,
    T: for<'a> Fn(&'a mut FeedState, &PostId) -> Option<&'a Post>,
    D: Fn(&Post) -> String,
{
    let mut result = CmdResult::default();

    let Some(post) = toggle(page.feed_mut(), id).cloned() else {
        tracing::warn!(post = %id, "click on unknown post ignored");
        result.add_message(CmdMessage::warning(format!("No post with id {}", id)));
        return Ok(result);
    };

    page.rerender()?;
    persistence::save_interactions(store, page.feed())?;

    result.add_message(CmdMessage::success(describe(&post)));
    Ok(result.with_affected_posts(vec![post]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Theme;
    use crate::seed::builtin_seed;
    use crate::store::memory::InMemoryStore;
    use crate::store::INTERACTIONS_KEY;

    fn setup() -> (Page, InMemoryStore) {
        let page = Page::new(FeedState::new(builtin_seed()), Theme::Light).unwrap();
        (page, InMemoryStore::new())
    }

    #[test]
    fn like_mutates_rerenders_and_persists() {
        let (mut page, mut store) = setup();
        let id = page.feed().posts()[0].uuid.clone();
        let before = page.feed().posts()[0].likes;

        let result = like(&mut page, &mut store, &id).unwrap();

        assert_eq!(result.affected_posts[0].likes, before + 1);
        assert!(result.affected_posts[0].is_liked);
        assert_eq!(page.render_count(), 2);
        assert!(page.feed_markup().unwrap().contains("fa-heart liked"));

        let stored = persistence::load_interactions(&store);
        assert_eq!(stored[&id].likes, before + 1);
        assert!(stored[&id].is_liked);
    }

    #[test]
    fn like_twice_restores() {
        let (mut page, mut store) = setup();
        let original = page.feed().clone();
        let id = original.posts()[0].uuid.clone();

        like(&mut page, &mut store, &id).unwrap();
        let result = like(&mut page, &mut store, &id).unwrap();

        assert!(result.messages[0].content.starts_with("Unliked"));
        assert_eq!(page.feed(), &original);
    }

    #[test]
    fn repost_mutates_and_persists() {
        let (mut page, mut store) = setup();
        let id = page.feed().posts()[1].uuid.clone();
        let before = page.feed().posts()[1].reposts;

        repost(&mut page, &mut store, &id).unwrap();

        let post = page.feed().find(&id).unwrap();
        assert_eq!((post.reposts, post.is_reposted), (before + 1, true));
        assert!(persistence::load_interactions(&store)[&id].is_reposted);
    }

    #[test]
    fn unknown_id_warns_without_side_effects() {
        let (mut page, mut store) = setup();
        let original = page.feed().clone();

        let result = like(&mut page, &mut store, &PostId::from("ghost")).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.affected_posts.is_empty());
        assert_eq!(page.feed(), &original);
        assert_eq!(page.render_count(), 1);
        assert!(store.get(INTERACTIONS_KEY).unwrap().is_none());
    }

    #[test]
    fn like_collapses_open_replies() {
        let (mut page, mut store) = setup();
        let id = page
            .feed()
            .posts()
            .iter()
            .find(|p| !p.replies.is_empty())
            .map(|p| p.uuid.clone())
            .unwrap();
        page.toggle_replies(&id);

        like(&mut page, &mut store, &id).unwrap();
        assert!(!page.replies_visible(&id));
    }

    #[test]
    fn write_failure_is_reported_after_mutation() {
        let (mut page, mut store) = setup();
        store.set_simulate_write_error(true);
        let id = page.feed().posts()[0].uuid.clone();

        assert!(like(&mut page, &mut store, &id).is_err());
        assert!(page.feed().find(&id).unwrap().is_liked);
    }
}
