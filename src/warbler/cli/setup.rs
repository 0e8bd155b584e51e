use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use warbler::dispatch::ClickTarget;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("WARBLER_GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("WARBLER_GIT_DATE");
    const IS_RELEASE: &str = env!("WARBLER_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "warbler", bin_name = "warbler", version = get_version())]
#[command(about = "A tiny social feed: like, repost, reply and post from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding stored state and config.json (overrides WARBLER_DATA)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the feed (default)
    #[command(alias = "ls")]
    List {
        /// Show the replies of these posts
        #[arg(short, long = "expand", value_name = "SEL")]
        expand: Vec<String>,
    },

    /// Like a post, or take the like back
    Like {
        /// Display index or post id
        selector: String,
    },

    /// Repost a post, or undo the repost
    Repost {
        /// Display index or post id
        selector: String,
    },

    /// Print the feed with one post's replies showing
    Replies {
        /// Display index or post id
        selector: String,
    },

    /// Compose a new post
    Post {
        /// Post text; words are joined with spaces
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Show, toggle or set the theme
    Theme {
        #[arg(value_enum)]
        mode: Option<ThemeMode>,
    },

    /// Print the whole page as HTML
    Html {
        /// Show the replies of these posts
        #[arg(short, long = "expand", value_name = "SEL")]
        expand: Vec<String>,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Send a raw click to the page
    Click(ClickArgs),

    /// Forget likes, reposts, composed posts and theme
    Reset,

    /// Get or set config (handle, profile-pic, seed-file)
    Config {
        key: Option<String>,
        value: Option<String>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeMode {
    Toggle,
    Light,
    Dark,
}

#[derive(Args, Debug, Clone, Default)]
#[group(required = true, multiple = false)]
pub struct ClickArgs {
    /// Element carrying data-like=ID
    #[arg(long, value_name = "ID")]
    pub like: Option<String>,

    /// Element carrying data-repost=ID
    #[arg(long, value_name = "ID")]
    pub repost: Option<String>,

    /// Element carrying data-reply=ID
    #[arg(long, value_name = "ID")]
    pub reply: Option<String>,

    /// Element with this id attribute (tweet-btn, theme-toggle, ...)
    #[arg(long = "id", value_name = "ELEMENT")]
    pub element: Option<String>,
}

impl From<ClickArgs> for ClickTarget {
    fn from(args: ClickArgs) -> Self {
        ClickTarget {
            id: args.element,
            like: args.like,
            repost: args.repost,
            reply: args.reply,
        }
    }
}
