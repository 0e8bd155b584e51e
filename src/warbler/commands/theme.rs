use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Theme;
use crate::page::Page;
use crate::store::KeyValueStore;
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Toggle,
    Set(Theme),
}

pub fn run<S: KeyValueStore>(
    page: &mut Page,
    store: &mut S,
    action: ThemeAction,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match action {
        ThemeAction::Show => {
            result.add_message(CmdMessage::info(format!("Theme: {}", page.theme())));
        }
        ThemeAction::Toggle => {
            let next = theme::toggle(page, store)?;
            result.add_message(CmdMessage::success(format!("Theme set to {}", next)));
        }
        ThemeAction::Set(next) => {
            theme::set(page, store, next)?;
            result.add_message(CmdMessage::success(format!("Theme set to {}", next)));
        }
    }
    Ok(result.with_theme(page.theme()))
}
