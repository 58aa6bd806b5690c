//! Source shapes mirroring GitHub GraphQL API responses.
//!
//! Field names follow the GraphQL schema (camel case). Polymorphic nodes
//! carry their `__typename`, which the adapter uses as the discriminator.
//! Connections are read through their `nodes` list only; pagination cursors
//! are the client's concern.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::payload::null_as_default;

/// `nodes` list of a GraphQL connection.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct GqlConnection<T> {
    /// Connection nodes; `null` entries are not expected.
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub nodes: Vec<T>,
}

impl<T> Default for GqlConnection<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

/// Any `Actor` implementor: user, bot, organisation, mannequin.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GqlActor {
    /// Concrete actor type.
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    /// Global node identifier.
    pub id: Option<String>,
    /// Numeric database identifier.
    pub database_id: Option<u64>,
    /// Login handle.
    pub login: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Public email.
    pub email: Option<String>,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
    /// Profile page URL.
    pub url: Option<String>,
}

/// Label node.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GqlLabel {
    /// Label name.
    pub name: Option<String>,
    /// Hex colour without the leading `#`.
    pub color: Option<String>,
    /// Label description.
    pub description: Option<String>,
}

/// Milestone node.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GqlMilestone {
    /// Milestone number within the repository.
    pub number: Option<u64>,
    /// Milestone title.
    pub title: Option<String>,
    /// `OPEN` or `CLOSED`.
    pub state: Option<String>,
    /// Due date timestamp.
    pub due_on: Option<String>,
    /// Web URL.
    pub url: Option<String>,
}

/// Owner of a repository.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GqlRepositoryOwner {
    /// Owner login.
    pub login: Option<String>,
}

/// Repository a head or base ref lives in.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GqlRepository {
    /// Repository name.
    pub name: Option<String>,
    /// Web URL, also usable as the clone URL.
    pub url: Option<String>,
    /// Owning account.
    pub owner: Option<GqlRepositoryOwner>,
}

/// Pull request node.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GqlPullRequest {
    /// Global node identifier.
    pub id: Option<String>,
    /// Numeric database identifier.
    pub database_id: Option<u64>,
    /// Pull request number.
    pub number: u64,
    /// Web URL.
    pub url: Option<String>,
    /// Title.
    pub title: Option<String>,
    /// Markdown body.
    pub body: Option<String>,
    /// Rendered HTML body.
    #[serde(rename = "bodyHTML")]
    pub body_html: Option<String>,
    /// `OPEN`, `CLOSED` or `MERGED`.
    pub state: Option<String>,
    /// Merge flag.
    pub merged: Option<bool>,
    /// Draft flag.
    pub is_draft: Option<bool>,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Last update timestamp.
    pub updated_at: Option<String>,
    /// Merge timestamp.
    pub merged_at: Option<String>,
    /// Close timestamp.
    pub closed_at: Option<String>,
    /// Author.
    pub author: Option<GqlActor>,
    /// Assigned accounts.
    #[serde(default, deserialize_with = "null_as_default")]
    pub assignees: GqlConnection<GqlActor>,
    /// Applied labels.
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: GqlConnection<GqlLabel>,
    /// Milestone, if any.
    pub milestone: Option<GqlMilestone>,
    /// Head branch name.
    pub head_ref_name: Option<String>,
    /// Head commit SHA.
    pub head_ref_oid: Option<String>,
    /// Repository holding the head branch.
    pub head_repository: Option<GqlRepository>,
    /// Base branch name.
    pub base_ref_name: Option<String>,
    /// Base commit SHA.
    pub base_ref_oid: Option<String>,
    /// Repository holding the base branch.
    pub base_repository: Option<GqlRepository>,
    /// `MERGEABLE`, `CONFLICTING` or `UNKNOWN`.
    pub mergeable: Option<String>,
    /// Merge state status (`CLEAN`, `BEHIND`, `DIRTY`, ...).
    pub merge_state_status: Option<String>,
}

/// Reference to a commit by object id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GqlCommitRef {
    /// Commit SHA.
    pub oid: Option<String>,
    /// Web URL of the commit.
    pub commit_url: Option<String>,
}

/// Reference to a node by database id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GqlDatabaseRef {
    /// Numeric database identifier.
    pub database_id: Option<u64>,
}

/// Count wrapper used by reaction groups.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GqlTotalCount {
    /// Number of items.
    pub total_count: Option<u32>,
}

/// Reactions of one kind on a comment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GqlReactionGroup {
    /// Reaction content enum (`THUMBS_UP`, `HEART`, ...).
    pub content: Option<String>,
    /// Reacting users.
    pub users: Option<GqlTotalCount>,
    /// Reacting actors; newer schema name for `users`.
    pub reactors: Option<GqlTotalCount>,
    /// Whether the viewer left this reaction.
    pub viewer_has_reacted: Option<bool>,
}

/// Pull request review comment node.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GqlReviewComment {
    /// Global node identifier.
    pub id: Option<String>,
    /// Numeric database identifier.
    pub database_id: Option<u64>,
    /// Web URL.
    pub url: Option<String>,
    /// Markdown body.
    pub body: Option<String>,
    /// Rendered HTML body.
    #[serde(rename = "bodyHTML")]
    pub body_html: Option<String>,
    /// File path the comment is attached to.
    pub path: Option<String>,
    /// Raw diff hunk text.
    pub diff_hunk: Option<String>,
    /// Diff position in the current diff.
    pub position: Option<u32>,
    /// Diff position in the original diff.
    pub original_position: Option<u32>,
    /// Line in the current file version.
    pub line: Option<u32>,
    /// Line in the original file version.
    pub original_line: Option<u32>,
    /// Commit the comment currently applies to.
    pub commit: Option<GqlCommitRef>,
    /// Commit the comment was written against.
    pub original_commit: Option<GqlCommitRef>,
    /// Author.
    pub author: Option<GqlActor>,
    /// Author's association with the repository.
    pub author_association: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Last update timestamp.
    pub updated_at: Option<String>,
    /// Viewer may edit the comment.
    pub viewer_can_update: Option<bool>,
    /// Viewer may delete the comment.
    pub viewer_can_delete: Option<bool>,
    /// `PENDING` or `SUBMITTED`.
    pub state: Option<String>,
    /// Comment this one replies to.
    pub reply_to: Option<GqlDatabaseRef>,
    /// Review this comment belongs to.
    pub pull_request_review: Option<GqlDatabaseRef>,
    /// Reactions grouped by kind.
    #[serde(default, deserialize_with = "null_as_default")]
    pub reaction_groups: Vec<GqlReactionGroup>,
}

/// Review thread node grouping comments on one diff location.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GqlReviewThread {
    /// Global node identifier.
    pub id: Option<String>,
    /// Thread has been resolved.
    pub is_resolved: Option<bool>,
    /// Thread refers to outdated code.
    pub is_outdated: Option<bool>,
    /// Viewer may resolve the thread.
    pub viewer_can_resolve: Option<bool>,
    /// Viewer may unresolve the thread.
    pub viewer_can_unresolve: Option<bool>,
    /// File path.
    pub path: Option<String>,
    /// Line in the current file version.
    pub line: Option<u32>,
    /// Line in the original file version.
    pub original_line: Option<u32>,
    /// `LEFT` or `RIGHT`.
    pub diff_side: Option<String>,
    /// Comments in the thread.
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: GqlConnection<GqlReviewComment>,
}

/// Item of a pull request `timelineItems` connection.
///
/// `__typename` selects the event kind; the remaining fields stay untyped
/// until the adapter decodes them into the matching shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GqlTimelineItem {
    /// Concrete item type (`PullRequestCommit`, `MergedEvent`, ...).
    #[serde(rename = "__typename", default)]
    pub typename: Option<String>,
    /// Remaining item fields.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GqlGitActor {
    pub(crate) name: Option<String>,
    pub(crate) email: Option<String>,
    pub(crate) date: Option<String>,
    pub(crate) user: Option<GqlActor>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GqlCommit {
    pub(crate) oid: Option<String>,
    pub(crate) message: Option<String>,
    pub(crate) url: Option<String>,
    pub(crate) authored_date: Option<String>,
    pub(crate) author: Option<GqlGitActor>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GqlCommitItem {
    pub(crate) id: Option<String>,
    pub(crate) url: Option<String>,
    pub(crate) commit: Option<GqlCommit>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GqlLabeledItem {
    pub(crate) id: Option<String>,
    pub(crate) actor: Option<GqlActor>,
    pub(crate) label: Option<GqlLabel>,
    pub(crate) created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GqlMilestonedItem {
    pub(crate) id: Option<String>,
    pub(crate) actor: Option<GqlActor>,
    pub(crate) milestone_title: Option<String>,
    pub(crate) created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GqlAssignedItem {
    pub(crate) id: Option<String>,
    pub(crate) actor: Option<GqlActor>,
    pub(crate) assignee: Option<GqlActor>,
    pub(crate) created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GqlIssueCommentItem {
    pub(crate) id: Option<String>,
    pub(crate) database_id: Option<u64>,
    pub(crate) url: Option<String>,
    pub(crate) body: Option<String>,
    #[serde(rename = "bodyHTML")]
    pub(crate) body_html: Option<String>,
    pub(crate) author: Option<GqlActor>,
    pub(crate) author_association: Option<String>,
    pub(crate) created_at: Option<String>,
    pub(crate) updated_at: Option<String>,
    pub(crate) viewer_can_update: Option<bool>,
    pub(crate) viewer_can_delete: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GqlReviewItem {
    pub(crate) id: Option<String>,
    pub(crate) database_id: Option<u64>,
    pub(crate) url: Option<String>,
    pub(crate) body: Option<String>,
    pub(crate) author: Option<GqlActor>,
    pub(crate) author_association: Option<String>,
    pub(crate) state: Option<String>,
    pub(crate) submitted_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) comments: GqlConnection<GqlReviewComment>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GqlMergedItem {
    pub(crate) id: Option<String>,
    pub(crate) url: Option<String>,
    pub(crate) actor: Option<GqlActor>,
    pub(crate) created_at: Option<String>,
    pub(crate) merge_ref_name: Option<String>,
    pub(crate) commit: Option<GqlCommitRef>,
}
