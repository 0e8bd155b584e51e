//! # CLI Layer
//!
//! This module is **one possible UI client** for warbler. It stands in for
//! the browser page: clicks arrive as subcommands, the feed is printed to the
//! terminal, and `html` emits the document a browser would show.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the tracing subscriber
//! - Resolves where state lives on disk
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with the API over a `FileStore`
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::render::{print_messages, render_feed_list};
use super::setup::{Cli, ClickArgs, Commands, ThemeMode};
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use warbler::api::{CmdResult, ConfigAction, ThemeAction, WarblerApi};
use warbler::error::{Result, WarblerError};
use warbler::model::Theme;
use warbler::store::fs::FileStore;

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "WARBLER_DATA";

struct AppContext {
    api: WarblerApi<FileStore>,
}

impl AppContext {
    fn theme(&self) -> Theme {
        self.api.page().theme()
    }

    fn print(&self, result: &CmdResult) {
        print_messages(&result.messages, self.theme());
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { expand }) => handle_list(&mut ctx, &expand),
        Some(Commands::Like { selector }) => handle_like(&mut ctx, &selector),
        Some(Commands::Repost { selector }) => handle_repost(&mut ctx, &selector),
        Some(Commands::Replies { selector }) => handle_replies(&mut ctx, &selector),
        Some(Commands::Post { text }) => handle_post(&mut ctx, text.join(" ")),
        Some(Commands::Theme { mode }) => handle_theme(&mut ctx, mode),
        Some(Commands::Html { expand, out }) => handle_html(&mut ctx, &expand, out),
        Some(Commands::Click(args)) => handle_click(&mut ctx, args),
        Some(Commands::Reset) => handle_reset(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, &[]),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_level = if verbose { "info" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "warbler", "warbler")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| WarblerError::Store("Could not determine a data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dir = data_dir(cli)?;
    tracing::info!(data_dir = %dir.display(), "opening feed");

    let store = FileStore::new(dir.clone());
    let api = WarblerApi::open(store, dir)?;
    Ok(AppContext { api })
}

fn print_feed(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_posts()?;
    print!("{}", render_feed_list(&result.listed_posts, ctx.theme()));
    Ok(())
}

fn handle_list(ctx: &mut AppContext, expand: &[String]) -> Result<()> {
    let expanded = ctx.api.expand_replies(expand)?;
    print_feed(ctx)?;
    ctx.print(&expanded);
    Ok(())
}

fn handle_like(ctx: &mut AppContext, selector: &str) -> Result<()> {
    let result = ctx.api.like(selector)?;
    ctx.print(&result);
    Ok(())
}

fn handle_repost(ctx: &mut AppContext, selector: &str) -> Result<()> {
    let result = ctx.api.repost(selector)?;
    ctx.print(&result);
    Ok(())
}

fn handle_replies(ctx: &mut AppContext, selector: &str) -> Result<()> {
    let slice = [selector];
    ctx.api.expand_replies(&slice)?;
    print_feed(ctx)
}

fn handle_post(ctx: &mut AppContext, text: String) -> Result<()> {
    let result = ctx.api.compose(&text)?;
    ctx.print(&result);
    Ok(())
}

fn handle_theme(ctx: &mut AppContext, mode: Option<ThemeMode>) -> Result<()> {
    let action = match mode {
        None => ThemeAction::Show,
        Some(ThemeMode::Toggle) => ThemeAction::Toggle,
        Some(ThemeMode::Light) => ThemeAction::Set(Theme::Light),
        Some(ThemeMode::Dark) => ThemeAction::Set(Theme::Dark),
    };
    let result = ctx.api.theme(action)?;
    ctx.print(&result);
    Ok(())
}

fn handle_html(ctx: &mut AppContext, expand: &[String], out: Option<PathBuf>) -> Result<()> {
    ctx.api.expand_replies(expand)?;
    let result = ctx.api.document()?;
    let html = result.html.unwrap_or_default();

    match out {
        Some(path) => {
            std::fs::write(&path, html).map_err(WarblerError::Io)?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", html),
    }
    Ok(())
}

fn handle_click(ctx: &mut AppContext, args: ClickArgs) -> Result<()> {
    let result = ctx.api.click(&args.into())?;
    ctx.print(&result);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.reset()?;
    ctx.print(&result);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let result = ctx.api.config(action)?;
    ctx.print(&result);
    Ok(())
}
