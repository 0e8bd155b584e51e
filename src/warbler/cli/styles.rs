//! Terminal palettes.
//!
//! The terminal follows the same light/dark choice as the page: whatever
//! theme is persisted picks the palette. Templates refer to styles by name
//! through the `style` filter, never to colors.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use warbler::model::Theme;

pub mod names {
    pub const INDEX: &str = "index";
    pub const HANDLE: &str = "handle";
    pub const TIME: &str = "time";
    pub const COUNT: &str = "count";
    pub const LIKED: &str = "liked";
    pub const REPOSTED: &str = "reposted";
    pub const REPLY_HANDLE: &str = "reply_handle";
    pub const REPLY_TEXT: &str = "reply_text";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

/// Named styles for one theme.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    styles: HashMap<&'static str, Style>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// Styles `text` with ANSI codes. Unknown names pass text through.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.clone().force_styling(true).apply_to(text).to_string(),
            None => text.to_string(),
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }
}

pub static LIGHT_PALETTE: Lazy<Palette> = Lazy::new(|| {
    Palette::new()
        .add(names::INDEX, Style::new().yellow())
        .add(names::HANDLE, Style::new().bold())
        .add(names::TIME, Style::new().color256(246).italic())
        .add(names::COUNT, Style::new().color256(244))
        .add(names::LIKED, Style::new().red().bold())
        .add(names::REPOSTED, Style::new().green().bold())
        .add(names::REPLY_HANDLE, Style::new().cyan())
        .add(names::REPLY_TEXT, Style::new().color256(240))
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
});

pub static DARK_PALETTE: Lazy<Palette> = Lazy::new(|| {
    Palette::new()
        .add(names::INDEX, Style::new().color256(221))
        .add(names::HANDLE, Style::new().white().bold())
        .add(names::TIME, Style::new().color256(250).italic())
        .add(names::COUNT, Style::new().color256(248))
        .add(names::LIKED, Style::new().color256(204).bold())
        .add(names::REPOSTED, Style::new().color256(114).bold())
        .add(names::REPLY_HANDLE, Style::new().color256(117))
        .add(names::REPLY_TEXT, Style::new().color256(252))
        .add(names::INFO, Style::new().color256(250))
        .add(names::SUCCESS, Style::new().color256(114))
        .add(names::WARNING, Style::new().color256(221))
        .add(names::ERROR, Style::new().color256(203))
});

pub fn palette_for(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT_PALETTE,
        Theme::Dark => &DARK_PALETTE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_palettes_define_every_name() {
        let all = [
            names::INDEX,
            names::HANDLE,
            names::TIME,
            names::COUNT,
            names::LIKED,
            names::REPOSTED,
            names::REPLY_HANDLE,
            names::REPLY_TEXT,
            names::INFO,
            names::SUCCESS,
            names::WARNING,
            names::ERROR,
        ];
        for theme in [Theme::Light, Theme::Dark] {
            for name in all {
                assert!(palette_for(theme).has(name), "{} missing {}", theme, name);
            }
        }
    }

    #[test]
    fn apply_adds_ansi_codes() {
        let styled = LIGHT_PALETTE.apply(names::ERROR, "boom");
        assert!(styled.contains("boom"));
        assert!(styled.contains("\u{1b}["));
    }

    #[test]
    fn unknown_style_is_plain() {
        assert_eq!(LIGHT_PALETTE.apply("nope", "text"), "text");
    }
}
