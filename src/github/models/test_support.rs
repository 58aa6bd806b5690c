//! Test helpers for constructing domain model fixtures.
//!
//! These builders keep test modules free of long struct literals. Every
//! unset field takes its `Default` value.
//!
//! # Examples
//!
//! ```
//! use prshape::github::models::test_support::{account, review_comment};
//!
//! let alice = account("alice");
//! assert!(alice.is_user);
//!
//! let comment = review_comment(7, Some(3), "alice");
//! assert_eq!(comment.pull_request_review_id, Some(3));
//! ```

use super::{Account, AccountKind, Comment, ReviewEvent, ReviewState, TimelineEvent};

/// Constructs a user account with only the login set.
#[must_use]
pub fn account(login: &str) -> Account {
    Account {
        login: login.to_owned(),
        kind: AccountKind::User,
        is_user: true,
        ..Default::default()
    }
}

/// Constructs a review comment belonging to `review_id`.
///
/// # Examples
///
/// ```
/// use prshape::github::models::test_support::review_comment;
///
/// let comment = review_comment(1, None, "bob");
/// assert_eq!(comment.id, Some(1));
/// assert_eq!(comment.author.map(|author| author.login).as_deref(), Some("bob"));
/// ```
#[must_use]
pub fn review_comment(id: u64, review_id: Option<u64>, author: &str) -> Comment {
    Comment {
        id: Some(id),
        body: Some(format!("Comment {id}")),
        author: Some(account(author)),
        pull_request_review_id: review_id,
        ..Default::default()
    }
}

/// Constructs a submitted review event with no comments attached.
#[must_use]
pub fn review_event(id: u64, author: &str, state: ReviewState) -> TimelineEvent {
    TimelineEvent::Reviewed(ReviewEvent {
        id: Some(id),
        author: Some(account(author)),
        state,
        ..Default::default()
    })
}
