//! # Page
//!
//! The document the user is looking at: the feed container's markup plus the
//! compose form, the empty-input message and the body's theme marker.
//!
//! [`Page::rerender`] replaces the feed container wholesale. Because the old
//! markup is thrown away, any reply block the user had opened goes back to
//! hidden. Toggling replies only flips the visibility of one existing block and
//! never triggers a re-render.

use crate::error::Result;
use crate::feed::FeedState;
use crate::model::{PostId, Theme};
use crate::render::{self, DocumentParts};
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct Page {
    feed: FeedState,
    theme: Theme,
    feed_html: String,
    expanded: BTreeSet<PostId>,
    compose_input: String,
    empty_message: String,
    render_count: usize,
}

impl Page {
    /// Builds the page and performs the initial render.
    pub fn new(feed: FeedState, theme: Theme) -> Result<Self> {
        let mut page = Self {
            feed,
            theme,
            feed_html: String::new(),
            expanded: BTreeSet::new(),
            compose_input: String::new(),
            empty_message: String::new(),
            render_count: 0,
        };
        page.rerender()?;
        Ok(page)
    }

    pub fn feed(&self) -> &FeedState {
        &self.feed
    }

    pub(crate) fn feed_mut(&mut self) -> &mut FeedState {
        &mut self.feed
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Replaces the feed container's contents from current state.
    pub fn rerender(&mut self) -> Result<()> {
        self.feed_html = render::render_feed(&self.feed)?;
        self.expanded.clear();
        self.render_count += 1;
        tracing::trace!(render = self.render_count, posts = self.feed.len(), "feed rendered");
        Ok(())
    }

    /// How many times the feed container has been replaced.
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    /// Flips visibility of one post's reply block.
    ///
    /// Returns the new visibility, or `None` when no such block exists.
    pub fn toggle_replies(&mut self, id: &PostId) -> Option<bool> {
        self.feed.find(id)?;
        if self.expanded.remove(id) {
            Some(false)
        } else {
            self.expanded.insert(id.clone());
            Some(true)
        }
    }

    pub fn replies_visible(&self, id: &PostId) -> bool {
        self.expanded.contains(id)
    }

    /// The feed container as currently displayed, open reply blocks included.
    pub fn feed_markup(&self) -> Result<String> {
        if self.expanded.is_empty() {
            Ok(self.feed_html.clone())
        } else {
            render::render_feed_with(&self.feed, &self.expanded)
        }
    }

    pub fn compose_input(&self) -> &str {
        &self.compose_input
    }

    pub fn set_compose_input(&mut self, text: impl Into<String>) {
        self.compose_input = text.into();
    }

    pub fn clear_compose_input(&mut self) {
        self.compose_input.clear();
    }

    pub fn empty_message(&self) -> &str {
        &self.empty_message
    }

    pub(crate) fn set_empty_message(&mut self, message: &str) {
        self.empty_message = message.to_string();
    }

    /// The whole document as currently displayed.
    pub fn document(&self, profile_pic: &str) -> Result<String> {
        let feed_html = self.feed_markup()?;
        render::render_document(&DocumentParts {
            theme: self.theme,
            profile_pic,
            compose_input: &self.compose_input,
            empty_message: &self.empty_message,
            feed_html: &feed_html,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::builtin_seed;

    fn page() -> Page {
        Page::new(FeedState::new(builtin_seed()), Theme::Light).unwrap()
    }

    fn id_with_replies(page: &Page) -> PostId {
        page.feed()
            .posts()
            .iter()
            .find(|p| !p.replies.is_empty())
            .map(|p| p.uuid.clone())
            .unwrap()
    }

    #[test]
    fn initial_render_happens_once() {
        let page = page();
        assert_eq!(page.render_count(), 1);
        assert_eq!(page.feed_markup().unwrap(), render::render_feed(page.feed()).unwrap());
    }

    #[test]
    fn toggling_replies_does_not_rerender() {
        let mut page = page();
        let id = id_with_replies(&page);

        assert_eq!(page.toggle_replies(&id), Some(true));
        assert!(page.replies_visible(&id));
        assert!(page
            .feed_markup()
            .unwrap()
            .contains(&format!("<div class=\"\" id=\"replies-{}\">", id)));

        assert_eq!(page.toggle_replies(&id), Some(false));
        assert!(!page.replies_visible(&id));
        assert_eq!(page.render_count(), 1);
    }

    #[test]
    fn toggling_unknown_replies_is_a_noop() {
        let mut page = page();
        assert_eq!(page.toggle_replies(&PostId::from("nope")), None);
        assert_eq!(page.render_count(), 1);
    }

    #[test]
    fn rerender_collapses_open_replies() {
        let mut page = page();
        let id = id_with_replies(&page);
        page.toggle_replies(&id);

        page.feed_mut().toggle_like(&id);
        page.rerender().unwrap();

        assert!(!page.replies_visible(&id));
        assert!(page
            .feed_markup()
            .unwrap()
            .contains(&format!("<div class=\"hidden\" id=\"replies-{}\">", id)));
        assert_eq!(page.render_count(), 2);
    }

    #[test]
    fn document_reflects_theme_and_form() {
        let mut page = page();
        page.set_theme(Theme::Dark);
        page.set_compose_input("draft");
        page.set_empty_message("careful");

        let html = page.document("me.png").unwrap();
        assert!(html.contains("dark-mode"));
        assert!(html.contains(">draft</textarea>"));
        assert!(html.contains(">careful</p>"));
    }
}
