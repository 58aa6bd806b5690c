//! Pull request timeline events.
//!
//! Each historical action on a pull request becomes one [`TimelineEvent`]
//! variant. The variant is chosen from the platform discriminator through a
//! fixed lookup table ([`EventKind`]); anything the table does not name is
//! kept as [`TimelineEvent::Other`] so that callers still see it happened.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::account::Account;
use super::comment::Comment;
use super::pull_request::Label;

/// Discriminator of a timeline event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A commit was pushed.
    Committed,
    /// A label was added.
    Labeled,
    /// A milestone was set.
    Milestoned,
    /// An account was assigned.
    Assigned,
    /// A conversation comment was posted.
    Commented,
    /// A review was submitted.
    Reviewed,
    /// The pull request was merged.
    Merged,
    /// Any other event type.
    Other,
}

impl EventKind {
    /// Maps a GraphQL `__typename` to an event kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use prshape::github::models::EventKind;
    ///
    /// assert_eq!(EventKind::from_graphql_typename("MergedEvent"), EventKind::Merged);
    /// assert_eq!(EventKind::from_graphql_typename("RenamedTitleEvent"), EventKind::Other);
    /// ```
    #[must_use]
    pub fn from_graphql_typename(typename: &str) -> Self {
        match typename {
            "PullRequestCommit" => Self::Committed,
            "LabeledEvent" => Self::Labeled,
            "MilestonedEvent" => Self::Milestoned,
            "AssignedEvent" => Self::Assigned,
            "IssueComment" => Self::Commented,
            "PullRequestReview" => Self::Reviewed,
            "MergedEvent" => Self::Merged,
            _ => Self::Other,
        }
    }

    /// Maps a REST timeline `event` string to an event kind.
    #[must_use]
    pub fn from_rest_event(event: &str) -> Self {
        match event {
            "committed" => Self::Committed,
            "labeled" => Self::Labeled,
            "milestoned" => Self::Milestoned,
            "assigned" => Self::Assigned,
            "commented" => Self::Commented,
            "reviewed" => Self::Reviewed,
            "merged" => Self::Merged,
            _ => Self::Other,
        }
    }
}

/// Outcome of a submitted review.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewState {
    /// Approved the changes.
    Approved,
    /// Requested changes.
    ChangesRequested,
    /// Left comments only.
    Commented,
    /// Review was dismissed.
    Dismissed,
    /// Review has not been submitted.
    Pending,
    /// State absent or not recognised.
    #[default]
    Unknown,
}

impl ReviewState {
    /// Parses a review state, ignoring case.
    ///
    /// REST timeline entries use lower case (`changes_requested`) while the
    /// reviews endpoint and GraphQL use upper case.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "APPROVED" => Self::Approved,
            "CHANGES_REQUESTED" => Self::ChangesRequested,
            "COMMENTED" => Self::Commented,
            "DISMISSED" => Self::Dismissed,
            "PENDING" => Self::Pending,
            _ => Self::Unknown,
        }
    }
}

/// Git identity of a commit author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommitAuthor {
    /// Git author name.
    pub name: Option<String>,
    /// Git author email.
    pub email: Option<String>,
    /// Platform account linked to the email, when known.
    pub account: Option<Account>,
}

/// A commit pushed to the pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommitEvent {
    /// Global node identifier.
    pub node_id: Option<String>,
    /// Commit SHA.
    pub sha: Option<String>,
    /// Commit author.
    pub author: Option<CommitAuthor>,
    /// Commit message.
    pub message: Option<String>,
    /// Web URL of the commit.
    pub html_url: Option<String>,
    /// Author date.
    pub authored_at: Option<DateTime<Utc>>,
}

/// A label added to the pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LabelEvent {
    /// Numeric database identifier, REST only.
    pub id: Option<u64>,
    /// Global node identifier.
    pub node_id: Option<String>,
    /// Account that added the label.
    pub actor: Option<Account>,
    /// The label.
    pub label: Option<Label>,
    /// Event time.
    pub created_at: Option<DateTime<Utc>>,
}

/// A milestone set on the pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MilestoneEvent {
    /// Numeric database identifier, REST only.
    pub id: Option<u64>,
    /// Global node identifier.
    pub node_id: Option<String>,
    /// Account that set the milestone.
    pub actor: Option<Account>,
    /// Milestone title.
    pub milestone_title: Option<String>,
    /// Event time.
    pub created_at: Option<DateTime<Utc>>,
}

/// An account assigned to the pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssignEvent {
    /// Numeric database identifier, REST only.
    pub id: Option<u64>,
    /// Global node identifier.
    pub node_id: Option<String>,
    /// Account that made the assignment.
    pub actor: Option<Account>,
    /// Assigned account.
    pub assignee: Option<Account>,
    /// Event time.
    pub created_at: Option<DateTime<Utc>>,
}

/// A conversation comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommentEvent {
    /// Numeric database identifier.
    pub id: Option<u64>,
    /// Global node identifier.
    pub node_id: Option<String>,
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
    /// Viewer may edit the comment.
    pub can_edit: bool,
    /// Viewer may delete the comment.
    pub can_delete: bool,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
}

/// A submitted review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReviewEvent {
    /// Numeric database identifier.
    pub id: Option<u64>,
    /// Global node identifier.
    pub node_id: Option<String>,
    /// Web URL.
    pub html_url: Option<String>,
    /// Review summary body.
    pub body: Option<String>,
    /// Reviewer.
    pub author: Option<Account>,
    /// Reviewer's association with the repository.
    pub author_association: Option<String>,
    /// Review outcome.
    pub state: ReviewState,
    /// Submission time.
    pub submitted_at: Option<DateTime<Utc>>,
    /// Review comments belonging to this review.
    pub comments: Vec<Comment>,
}

/// The merge of the pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergedEvent {
    /// Numeric database identifier, REST only.
    pub id: Option<u64>,
    /// Global node identifier.
    pub node_id: Option<String>,
    /// Account that merged.
    pub actor: Option<Account>,
    /// Name of the ref merged into, GraphQL only.
    pub merge_ref: Option<String>,
    /// Merge commit SHA.
    pub sha: Option<String>,
    /// URL of the merge commit.
    pub commit_url: Option<String>,
    /// Web URL of the event, GraphQL only.
    pub url: Option<String>,
    /// Merge time.
    pub created_at: Option<DateTime<Utc>>,
}

/// An event the lookup table does not model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OtherEvent {
    /// Platform discriminator as received; empty when absent.
    pub type_name: String,
    /// Node or database identifier as received, if any.
    pub id: Option<String>,
}

/// One entry of a pull request timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TimelineEvent {
    /// A commit was pushed.
    Committed(CommitEvent),
    /// A label was added.
    Labeled(LabelEvent),
    /// A milestone was set.
    Milestoned(MilestoneEvent),
    /// An account was assigned.
    Assigned(AssignEvent),
    /// A conversation comment was posted.
    Commented(CommentEvent),
    /// A review was submitted.
    Reviewed(ReviewEvent),
    /// The pull request was merged.
    Merged(MergedEvent),
    /// Any other event.
    Other(OtherEvent),
}

impl TimelineEvent {
    /// Returns the discriminator of this event.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Committed(_) => EventKind::Committed,
            Self::Labeled(_) => EventKind::Labeled,
            Self::Milestoned(_) => EventKind::Milestoned,
            Self::Assigned(_) => EventKind::Assigned,
            Self::Commented(_) => EventKind::Commented,
            Self::Reviewed(_) => EventKind::Reviewed,
            Self::Merged(_) => EventKind::Merged,
            Self::Other(_) => EventKind::Other,
        }
    }

    /// Accounts that took part in this event, in a stable order.
    fn participants(&self) -> Vec<&Account> {
        match self {
            Self::Committed(event) => event
                .author
                .as_ref()
                .and_then(|author| author.account.as_ref())
                .into_iter()
                .collect(),
            Self::Labeled(event) => event.actor.iter().collect(),
            Self::Milestoned(event) => event.actor.iter().collect(),
            Self::Assigned(event) => event.actor.iter().chain(&event.assignee).collect(),
            Self::Commented(event) => event.author.iter().collect(),
            Self::Reviewed(event) => event
                .author
                .iter()
                .chain(event.comments.iter().filter_map(|comment| comment.author.as_ref()))
                .collect(),
            Self::Merged(event) => event.actor.iter().collect(),
            Self::Other(_) => Vec::new(),
        }
    }
}

/// Fills each review with the review comments that belong to it.
///
/// Comments are matched on `pull_request_review_id` and keep their input
/// order. Comments already attached to a review are replaced.
#[must_use]
pub fn attach_review_comments(
    events: Vec<TimelineEvent>,
    comments: &[Comment],
) -> Vec<TimelineEvent> {
    events
        .into_iter()
        .map(|event| match event {
            TimelineEvent::Reviewed(review) => {
                let review_comments = comments
                    .iter()
                    .filter(|comment| {
                        review.id.is_some() && comment.pull_request_review_id == review.id
                    })
                    .cloned()
                    .collect();
                TimelineEvent::Reviewed(ReviewEvent {
                    comments: review_comments,
                    ..review
                })
            }
            other => other,
        })
        .collect()
}

/// Returns the distinct accounts that took part in the timeline.
///
/// Accounts are de-duplicated by login and returned in first-seen order.
/// Accounts without a login are skipped.
#[must_use]
pub fn related_accounts(events: &[TimelineEvent]) -> Vec<Account> {
    let mut seen = HashSet::new();
    events
        .iter()
        .flat_map(TimelineEvent::participants)
        .filter(|account| !account.login.is_empty() && seen.insert(account.login.clone()))
        .cloned()
        .collect()
}
