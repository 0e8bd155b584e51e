use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque post identifier.
///
/// Seed posts carry whatever token the seed file gives them; composed posts
/// get a fresh UUID v4.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A non-interactive reply shown under its parent post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub handle: String,
    pub profile_pic: String,
    #[serde(alias = "tweetText")]
    pub text: String,
}

impl Reply {
    pub fn new(
        handle: impl Into<String>,
        profile_pic: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            handle: handle.into(),
            profile_pic: profile_pic.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub uuid: PostId,
    pub handle: String,
    pub profile_pic: String,
    #[serde(alias = "tweetText")]
    pub text: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub reposts: u64,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub is_reposted: bool,
    #[serde(default)]
    pub replies: Vec<Reply>,
    // Seed posts have no timestamp; only composed posts do
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Post {
    /// A freshly composed post: no engagement, no replies.
    pub fn compose(handle: &str, profile_pic: &str, text: String) -> Self {
        Self {
            uuid: PostId::generate(),
            handle: handle.to_string(),
            profile_pic: profile_pic.to_string(),
            text,
            likes: 0,
            reposts: 0,
            is_liked: false,
            is_reposted: false,
            replies: Vec::new(),
            created_at: Some(Utc::now()),
        }
    }

    pub fn toggle_like(&mut self) {
        if self.is_liked {
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.likes = self.likes.saturating_add(1);
        }
        self.is_liked = !self.is_liked;
    }

    pub fn toggle_repost(&mut self) {
        if self.is_reposted {
            self.reposts = self.reposts.saturating_sub(1);
        } else {
            self.reposts = self.reposts.saturating_add(1);
        }
        self.is_reposted = !self.is_reposted;
    }

    pub fn interaction_record(&self) -> InteractionRecord {
        InteractionRecord {
            likes: self.likes,
            is_liked: self.is_liked,
            reposts: self.reposts,
            is_reposted: self.is_reposted,
        }
    }

    pub fn apply_record(&mut self, record: &InteractionRecord) {
        self.likes = record.likes;
        self.is_liked = record.is_liked;
        self.reposts = record.reposts;
        self.is_reposted = record.is_reposted;
    }
}

/// The mutable subset of a post that survives across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionRecord {
    pub likes: u64,
    pub is_liked: bool,
    pub reposts: u64,
    pub is_reposted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with(likes: u64, is_liked: bool) -> Post {
        let mut post = Post::compose("@test", "a.png", "hello".into());
        post.likes = likes;
        post.is_liked = is_liked;
        post
    }

    #[test]
    fn like_toggle_moves_count_with_flag() {
        let mut post = post_with(5, false);
        post.toggle_like();
        assert_eq!((post.likes, post.is_liked), (6, true));
        post.toggle_like();
        assert_eq!((post.likes, post.is_liked), (5, false));
    }

    #[test]
    fn unlike_at_zero_does_not_underflow() {
        let mut post = post_with(0, true);
        post.toggle_like();
        assert_eq!(post.likes, 0);
        assert!(!post.is_liked);
    }

    #[test]
    fn like_and_repost_at_max_saturate() {
        let mut post = post_with(u64::MAX, false);
        post.reposts = u64::MAX;
        post.toggle_like();
        post.toggle_repost();
        assert_eq!((post.likes, post.is_liked), (u64::MAX, true));
        assert_eq!((post.reposts, post.is_reposted), (u64::MAX, true));
    }

    #[test]
    fn repost_toggle_is_symmetric() {
        let mut post = post_with(0, false);
        post.reposts = 3;
        post.toggle_repost();
        assert_eq!((post.reposts, post.is_reposted), (4, true));
        post.toggle_repost();
        assert_eq!((post.reposts, post.is_reposted), (3, false));
    }

    #[test]
    fn composed_post_starts_clean() {
        let post = Post::compose("@me", "me.png", "first".into());
        assert_eq!(post.likes, 0);
        assert_eq!(post.reposts, 0);
        assert!(!post.is_liked && !post.is_reposted);
        assert!(post.replies.is_empty());
        assert!(post.created_at.is_some());
    }

    #[test]
    fn composed_posts_get_distinct_ids() {
        let a = Post::compose("@me", "me.png", "a".into());
        let b = Post::compose("@me", "me.png", "b".into());
        assert_ne!(a.uuid, b.uuid);
    }

    #[test]
    fn interaction_record_uses_camel_case_keys() {
        let record = InteractionRecord {
            likes: 2,
            is_liked: true,
            reposts: 1,
            is_reposted: false,
        };
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json["likes"], 2);
        assert_eq!(json["isLiked"], true);
        assert_eq!(json["reposts"], 1);
        assert_eq!(json["isReposted"], false);
    }

    #[test]
    fn post_accepts_legacy_text_field() {
        let json = r#"{
            "uuid": "abc",
            "handle": "@x",
            "profilePic": "x.png",
            "tweetText": "legacy",
            "likes": 3
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.text, "legacy");
        assert_eq!(post.likes, 3);
        assert!(post.replies.is_empty());
        assert!(post.created_at.is_none());
    }

    #[test]
    fn theme_parses_and_toggles() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("purple".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::default(), Theme::Light);
    }
}
