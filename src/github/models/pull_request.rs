//! Pull request domain shapes.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::account::Account;

/// Lifecycle state of a pull request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PullRequestState {
    /// Open for review.
    #[default]
    Open,
    /// Closed without merging.
    Closed,
    /// Merged into its base.
    Merged,
}

/// Whether a pull request can currently be merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mergeability {
    /// Can be merged.
    Mergeable,
    /// Blocked by checks, reviews or branch protection.
    NotMergeable,
    /// Has merge conflicts.
    Conflict,
    /// Head is behind its base.
    Behind,
    /// Not yet computed, or not reported.
    #[default]
    Unknown,
}

/// Head or base ref of a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GitRef {
    /// `owner:branch` label.
    pub label: String,
    /// Branch name.
    pub ref_name: String,
    /// Commit SHA the ref points at.
    pub sha: String,
    /// Clone URL of the repository holding the ref, if it still exists.
    pub clone_url: Option<String>,
}

/// Issue or pull request label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Label {
    /// Label name.
    pub name: String,
    /// Hex colour without the leading `#`.
    pub color: Option<String>,
    /// Label description.
    pub description: Option<String>,
}

/// Milestone attached to a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Milestone {
    /// Milestone title.
    pub title: String,
    /// Number within the repository.
    pub number: Option<u64>,
    /// Due date.
    pub due_on: Option<DateTime<Utc>>,
    /// Web URL.
    pub url: Option<String>,
}

/// A pull request normalised from either API family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PullRequest {
    /// Numeric database identifier.
    pub id: Option<u64>,
    /// Global node identifier.
    pub node_id: Option<String>,
    /// Pull request number.
    pub number: u64,
    /// Title.
    pub title: Option<String>,
    /// Markdown body.
    pub body: Option<String>,
    /// Rendered HTML body, GraphQL only.
    pub body_html: Option<String>,
    /// API URL, REST only.
    pub url: Option<String>,
    /// Web URL.
    pub html_url: Option<String>,
    /// Lifecycle state.
    pub state: PullRequestState,
    /// Merge flag; false when the source does not report it.
    pub merged: bool,
    /// Draft flag.
    pub is_draft: bool,
    /// Author.
    pub author: Option<Account>,
    /// Assigned accounts.
    pub assignees: Vec<Account>,
    /// Applied labels.
    pub labels: Vec<Label>,
    /// Milestone, if any.
    pub milestone: Option<Milestone>,
    /// Head ref.
    pub head: Option<GitRef>,
    /// Base ref.
    pub base: Option<GitRef>,
    /// Mergeability.
    pub mergeability: Mergeability,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
    /// Merge time.
    pub merged_at: Option<DateTime<Utc>>,
    /// Close time.
    pub closed_at: Option<DateTime<Utc>>,
}
