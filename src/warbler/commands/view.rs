use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_posts;
use crate::page::Page;

/// The feed as currently displayed, numbered for selection.
pub fn list(page: &Page) -> Result<CmdResult> {
    Ok(CmdResult::default()
        .with_listed_posts(index_posts(page))
        .with_theme(page.theme()))
}

/// The whole HTML document as currently displayed.
pub fn html(page: &Page, profile_pic: &str) -> Result<CmdResult> {
    let document = page.document(profile_pic)?;
    Ok(CmdResult::default()
        .with_html(document)
        .with_theme(page.theme()))
}
