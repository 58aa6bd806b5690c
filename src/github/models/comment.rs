//! Comment, reaction and review thread shapes.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::account::Account;
use crate::github::diff_hunk::DiffHunk;

/// Kind of emoji reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionContent {
    /// 👍
    ThumbsUp,
    /// 👎
    ThumbsDown,
    /// 😄
    Laugh,
    /// 🎉
    Hooray,
    /// 😕
    Confused,
    /// ❤️
    Heart,
    /// 🚀
    Rocket,
    /// 👀
    Eyes,
}

impl ReactionContent {
    /// Maps a GraphQL `ReactionContent` enum value to a reaction kind.
    #[must_use]
    pub fn from_graphql(value: &str) -> Option<Self> {
        match value {
            "THUMBS_UP" => Some(Self::ThumbsUp),
            "THUMBS_DOWN" => Some(Self::ThumbsDown),
            "LAUGH" => Some(Self::Laugh),
            "HOORAY" => Some(Self::Hooray),
            "CONFUSED" => Some(Self::Confused),
            "HEART" => Some(Self::Heart),
            "ROCKET" => Some(Self::Rocket),
            "EYES" => Some(Self::Eyes),
            _ => None,
        }
    }
}

/// Count of one reaction kind on a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reaction {
    /// Reaction kind.
    pub content: ReactionContent,
    /// Number of accounts that reacted.
    pub count: u32,
    /// Whether the viewer is among them; REST payloads never report this.
    pub viewer_has_reacted: bool,
}

/// A review or conversation comment.
///
/// Review comments carry their diff location and the parsed hunks of their
/// `diff_hunk` text; conversation comments leave those fields empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Comment {
    /// Numeric database identifier.
    pub id: Option<u64>,
    /// Global node identifier.
    pub node_id: Option<String>,
    /// API URL, REST only.
    pub url: Option<String>,
    /// Web URL.
    pub html_url: Option<String>,
    /// Markdown body.
    pub body: Option<String>,
    /// Rendered HTML body, GraphQL only.
    pub body_html: Option<String>,
    /// Author.
    pub author: Option<Account>,
    /// Author's association with the repository.
    pub author_association: Option<String>,
    /// File path the comment is attached to.
    pub path: Option<String>,
    /// Diff position in the current diff.
    pub position: Option<u32>,
    /// Diff position in the original diff.
    pub original_position: Option<u32>,
    /// Line in the current file version.
    pub line: Option<u32>,
    /// Line in the original file version.
    pub original_line: Option<u32>,
    /// Commit the comment currently applies to.
    pub commit_id: Option<String>,
    /// Commit the comment was written against.
    pub original_commit_id: Option<String>,
    /// Review this comment belongs to.
    pub pull_request_review_id: Option<u64>,
    /// Comment this one replies to.
    pub in_reply_to_id: Option<u64>,
    /// Raw diff hunk text.
    pub diff_hunk: Option<String>,
    /// Hunks parsed from `diff_hunk`.
    pub diff_hunks: Vec<DiffHunk>,
    /// Viewer may edit the comment.
    pub can_edit: bool,
    /// Viewer may delete the comment.
    pub can_delete: bool,
    /// Comment belongs to a pending review.
    pub is_draft: bool,
    /// Resolution state of the enclosing thread, when known.
    pub is_resolved: Option<bool>,
    /// Non-zero reaction counts.
    pub reactions: Vec<Reaction>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Side of the diff a review thread is anchored to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffSide {
    /// The old file version.
    Left,
    /// The new file version.
    #[default]
    Right,
}

/// Comments grouped on one diff location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReviewThread {
    /// Global node identifier.
    pub id: Option<String>,
    /// Thread has been resolved.
    pub is_resolved: bool,
    /// Thread refers to outdated code.
    pub is_outdated: bool,
    /// Viewer may resolve the thread.
    pub can_resolve: bool,
    /// Viewer may unresolve the thread.
    pub can_unresolve: bool,
    /// File path.
    pub path: Option<String>,
    /// Line in the current file version.
    pub line: Option<u32>,
    /// Line in the original file version.
    pub original_line: Option<u32>,
    /// Diff side.
    pub diff_side: DiffSide,
    /// Comments in thread order.
    pub comments: Vec<Comment>,
}
