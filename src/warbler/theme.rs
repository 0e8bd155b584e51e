//! # Theme Controller
//!
//! Light/dark is a page-level marker. It is read from the store once at
//! startup and written back on every change. Switching theme never touches
//! the feed markup.

use crate::error::Result;
use crate::model::Theme;
use crate::page::Page;
use crate::persistence;
use crate::store::KeyValueStore;

/// The theme to start with: dark only if the stored value says so.
pub fn initial_theme<S: KeyValueStore>(store: &S) -> Theme {
    persistence::load_theme(store)
}

/// Flips the page theme and persists the new value.
pub fn toggle<S: KeyValueStore>(page: &mut Page, store: &mut S) -> Result<Theme> {
    let next = page.theme().toggled();
    set(page, store, next)?;
    Ok(next)
}

/// Applies `theme` to the page and persists it.
pub fn set<S: KeyValueStore>(page: &mut Page, store: &mut S, theme: Theme) -> Result<()> {
    page.set_theme(theme);
    persistence::save_theme(store, theme)?;
    tracing::debug!(%theme, "theme applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::FeedState;
    use crate::seed::builtin_seed;
    use crate::store::memory::InMemoryStore;
    use crate::store::THEME_KEY;

    fn page_for(store: &InMemoryStore) -> Page {
        Page::new(FeedState::new(builtin_seed()), initial_theme(store)).unwrap()
    }

    #[test]
    fn starts_light_without_stored_value() {
        let store = InMemoryStore::new();
        assert_eq!(page_for(&store).theme(), Theme::Light);
    }

    #[test]
    fn starts_dark_only_for_literal_dark() {
        let mut store = InMemoryStore::new();
        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(initial_theme(&store), Theme::Dark);
        store.set(THEME_KEY, "DARK").unwrap();
        assert_eq!(initial_theme(&store), Theme::Light);
    }

    #[test]
    fn toggling_twice_restores_page_and_store() {
        let mut store = InMemoryStore::new();
        let mut page = page_for(&store);

        assert_eq!(toggle(&mut page, &mut store).unwrap(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert!(page.document("me.png").unwrap().contains("dark-mode"));

        assert_eq!(toggle(&mut page, &mut store).unwrap(), Theme::Light);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert!(!page.document("me.png").unwrap().contains("dark-mode"));
    }

    #[test]
    fn theme_change_does_not_rerender_feed() {
        let mut store = InMemoryStore::new();
        let mut page = page_for(&store);
        toggle(&mut page, &mut store).unwrap();
        assert_eq!(page.render_count(), 1);
    }

    #[test]
    fn theme_survives_restart() {
        let mut store = InMemoryStore::new();
        let mut page = page_for(&store);
        set(&mut page, &mut store, Theme::Dark).unwrap();
        assert_eq!(page_for(&store).theme(), Theme::Dark);
    }
}
