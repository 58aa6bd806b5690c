//! Source shapes mirroring GitHub REST API responses.
//!
//! Types prefixed with `Api` are deserialisation targets only. They keep the
//! wire field names (snake case) and make every optional field an `Option`
//! so that partial payloads decode. `ShapeAdapter` converts them into the
//! domain models.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::payload::null_as_default;

/// REST user or organisation record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiUser {
    /// Login handle.
    pub login: Option<String>,
    /// Numeric database identifier.
    pub id: Option<u64>,
    /// Global node identifier.
    pub node_id: Option<String>,
    /// Display name, present on full user payloads only.
    pub name: Option<String>,
    /// Public email, present on full user payloads only.
    pub email: Option<String>,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
    /// Profile page URL.
    pub html_url: Option<String>,
    /// Account type string (`User`, `Organization`, `Bot`, ...).
    #[serde(rename = "type")]
    pub account_type: Option<String>,
}

/// Repository record embedded in a pull request ref.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiRepository {
    /// Repository name.
    pub name: Option<String>,
    /// `owner/name` form.
    pub full_name: Option<String>,
    /// HTTPS clone URL.
    pub clone_url: Option<String>,
    /// Web URL.
    pub html_url: Option<String>,
    /// Owning account.
    pub owner: Option<ApiUser>,
}

/// Head or base ref of a pull request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiRef {
    /// `owner:branch` label.
    pub label: Option<String>,
    /// Branch name.
    #[serde(rename = "ref")]
    pub ref_name: Option<String>,
    /// Commit SHA the ref points at.
    pub sha: Option<String>,
    /// Repository the ref lives in; `null` when it has been deleted.
    pub repo: Option<ApiRepository>,
}

/// Issue or pull request label.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiLabel {
    /// Label name.
    pub name: Option<String>,
    /// Hex colour without the leading `#`.
    pub color: Option<String>,
    /// Label description.
    pub description: Option<String>,
}

/// Milestone attached to an issue or pull request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiMilestone {
    /// Milestone number within the repository.
    pub number: Option<u64>,
    /// Milestone title.
    pub title: Option<String>,
    /// `open` or `closed`.
    pub state: Option<String>,
    /// Due date timestamp.
    pub due_on: Option<String>,
    /// Web URL.
    pub html_url: Option<String>,
}

/// Pull request payload from the `pulls` endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPullRequest {
    /// Numeric database identifier.
    pub id: Option<u64>,
    /// Global node identifier.
    pub node_id: Option<String>,
    /// Pull request number.
    pub number: u64,
    /// API URL.
    pub url: Option<String>,
    /// Web URL.
    pub html_url: Option<String>,
    /// Title.
    pub title: Option<String>,
    /// Markdown body.
    pub body: Option<String>,
    /// `open` or `closed`.
    pub state: Option<String>,
    /// Present on single pull request responses only.
    pub merged: Option<bool>,
    /// Draft flag.
    pub draft: Option<bool>,
    /// Author.
    pub user: Option<ApiUser>,
    /// Assigned accounts.
    #[serde(default, deserialize_with = "null_as_default")]
    pub assignees: Vec<ApiUser>,
    /// Applied labels.
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<ApiLabel>,
    /// Milestone, if any.
    pub milestone: Option<ApiMilestone>,
    /// Head ref.
    pub head: Option<ApiRef>,
    /// Base ref.
    pub base: Option<ApiRef>,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Last update timestamp.
    pub updated_at: Option<String>,
    /// Merge timestamp.
    pub merged_at: Option<String>,
    /// Close timestamp.
    pub closed_at: Option<String>,
    /// `null` while GitHub is still computing mergeability.
    pub mergeable: Option<bool>,
    /// Mergeable state string (`clean`, `dirty`, `behind`, ...).
    pub mergeable_state: Option<String>,
}

/// Pull request link block attached to issue-shaped responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiIssuePullRequestLinks {
    /// API URL of the pull request.
    pub url: Option<String>,
    /// Web URL of the pull request.
    pub html_url: Option<String>,
    /// Merge timestamp, when merged.
    pub merged_at: Option<String>,
}

/// Issue-shaped payload, as returned by the search and issues endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiIssue {
    /// Numeric database identifier.
    pub id: Option<u64>,
    /// Global node identifier.
    pub node_id: Option<String>,
    /// Issue number.
    pub number: u64,
    /// API URL.
    pub url: Option<String>,
    /// Web URL.
    pub html_url: Option<String>,
    /// Title.
    pub title: Option<String>,
    /// Markdown body.
    pub body: Option<String>,
    /// `open` or `closed`.
    pub state: Option<String>,
    /// Draft flag, present for pull requests.
    pub draft: Option<bool>,
    /// Author.
    pub user: Option<ApiUser>,
    /// Assigned accounts.
    #[serde(default, deserialize_with = "null_as_default")]
    pub assignees: Vec<ApiUser>,
    /// Applied labels.
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<ApiLabel>,
    /// Milestone, if any.
    pub milestone: Option<ApiMilestone>,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Last update timestamp.
    pub updated_at: Option<String>,
    /// Close timestamp.
    pub closed_at: Option<String>,
    /// Present when the issue is a pull request.
    pub pull_request: Option<ApiIssuePullRequestLinks>,
}

/// Reaction roll-up attached to comments.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiReactions {
    /// Total across all reaction kinds.
    pub total_count: Option<u32>,
    /// Thumbs up.
    #[serde(rename = "+1")]
    pub plus_one: Option<u32>,
    /// Thumbs down.
    #[serde(rename = "-1")]
    pub minus_one: Option<u32>,
    /// Laugh.
    pub laugh: Option<u32>,
    /// Hooray.
    pub hooray: Option<u32>,
    /// Confused.
    pub confused: Option<u32>,
    /// Heart.
    pub heart: Option<u32>,
    /// Rocket.
    pub rocket: Option<u32>,
    /// Eyes.
    pub eyes: Option<u32>,
}

/// Review comment attached to a line of a pull request diff.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiReviewComment {
    /// Numeric database identifier.
    pub id: u64,
    /// Global node identifier.
    pub node_id: Option<String>,
    /// API URL.
    pub url: Option<String>,
    /// Web URL.
    pub html_url: Option<String>,
    /// Markdown body.
    pub body: Option<String>,
    /// Author.
    pub user: Option<ApiUser>,
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
    /// Raw diff hunk text.
    pub diff_hunk: Option<String>,
    /// Commit the comment currently applies to.
    pub commit_id: Option<String>,
    /// Commit the comment was written against.
    pub original_commit_id: Option<String>,
    /// Review this comment belongs to.
    pub pull_request_review_id: Option<u64>,
    /// Comment this one replies to.
    pub in_reply_to_id: Option<u64>,
    /// Author's association with the repository.
    pub author_association: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Last update timestamp.
    pub updated_at: Option<String>,
    /// Reaction roll-up.
    pub reactions: Option<ApiReactions>,
}

/// Conversation comment on an issue or pull request.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiIssueComment {
    /// Numeric database identifier.
    pub id: u64,
    /// Global node identifier.
    pub node_id: Option<String>,
    /// API URL.
    pub url: Option<String>,
    /// Web URL.
    pub html_url: Option<String>,
    /// Markdown body.
    pub body: Option<String>,
    /// Author.
    pub user: Option<ApiUser>,
    /// Author's association with the repository.
    pub author_association: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Last update timestamp.
    pub updated_at: Option<String>,
    /// Reaction roll-up.
    pub reactions: Option<ApiReactions>,
}

/// Submitted pull request review.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiReview {
    /// Numeric database identifier.
    pub id: u64,
    /// Global node identifier.
    pub node_id: Option<String>,
    /// Web URL.
    pub html_url: Option<String>,
    /// Markdown body.
    pub body: Option<String>,
    /// Reviewer.
    pub user: Option<ApiUser>,
    /// Review state (`APPROVED`, `changes_requested`, ...).
    pub state: Option<String>,
    /// Reviewer's association with the repository.
    pub author_association: Option<String>,
    /// Submission timestamp.
    pub submitted_at: Option<String>,
    /// Commit the review was made against.
    pub commit_id: Option<String>,
}

/// Entry of the issue timeline endpoint.
///
/// The `event` discriminator selects the shape of the remaining fields,
/// which are kept untyped until the adapter picks the matching event kind.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiTimelineItem {
    /// Event discriminator (`committed`, `reviewed`, ...).
    #[serde(default)]
    pub event: Option<String>,
    /// Remaining event fields.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Name/email/date triple used for git authors and committers.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiGitActor {
    pub(crate) name: Option<String>,
    pub(crate) email: Option<String>,
    pub(crate) date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiCommittedEvent {
    pub(crate) sha: Option<String>,
    pub(crate) node_id: Option<String>,
    pub(crate) author: Option<ApiGitActor>,
    pub(crate) message: Option<String>,
    pub(crate) html_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiLabeledEvent {
    pub(crate) id: Option<u64>,
    pub(crate) node_id: Option<String>,
    pub(crate) actor: Option<ApiUser>,
    pub(crate) label: Option<ApiLabel>,
    pub(crate) created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiMilestonedEvent {
    pub(crate) id: Option<u64>,
    pub(crate) node_id: Option<String>,
    pub(crate) actor: Option<ApiUser>,
    pub(crate) milestone: Option<ApiMilestone>,
    pub(crate) created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiAssignedEvent {
    pub(crate) id: Option<u64>,
    pub(crate) node_id: Option<String>,
    pub(crate) actor: Option<ApiUser>,
    pub(crate) assignee: Option<ApiUser>,
    pub(crate) created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiMergedEvent {
    pub(crate) id: Option<u64>,
    pub(crate) node_id: Option<String>,
    pub(crate) actor: Option<ApiUser>,
    pub(crate) commit_id: Option<String>,
    pub(crate) commit_url: Option<String>,
    pub(crate) created_at: Option<String>,
}
