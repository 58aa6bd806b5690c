//! Domain models produced by the adapters.
//!
//! These are the normalised shapes downstream presentation code consumes.
//! They are independent of the API family a payload came from: a pull request
//! built from a REST response and one built from a GraphQL node have the same
//! type and the same field meanings.

mod account;
mod comment;
mod pull_request;
mod timeline;

#[cfg(feature = "test-support")]
pub mod test_support;

pub use account::{Account, AccountKind};
pub use comment::{Comment, DiffSide, Reaction, ReactionContent, ReviewThread};
pub use pull_request::{GitRef, Label, Mergeability, Milestone, PullRequest, PullRequestState};
pub use timeline::{
    AssignEvent, CommentEvent, CommitAuthor, CommitEvent, EventKind, LabelEvent, MergedEvent,
    MilestoneEvent, OtherEvent, ReviewEvent, ReviewState, TimelineEvent, attach_review_comments,
    related_accounts,
};

#[cfg(test)]
mod tests;
