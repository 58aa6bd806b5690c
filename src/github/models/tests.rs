//! Unit tests for the domain models.

use rstest::rstest;

use super::test_support::{account, review_comment, review_event};
use super::{
    AccountKind, CommentEvent, EventKind, OtherEvent, ReviewEvent, ReviewState, TimelineEvent,
    attach_review_comments, related_accounts,
};

#[rstest]
#[case("PullRequestCommit", EventKind::Committed)]
#[case("LabeledEvent", EventKind::Labeled)]
#[case("MilestonedEvent", EventKind::Milestoned)]
#[case("AssignedEvent", EventKind::Assigned)]
#[case("IssueComment", EventKind::Commented)]
#[case("PullRequestReview", EventKind::Reviewed)]
#[case("MergedEvent", EventKind::Merged)]
#[case("HeadRefDeletedEvent", EventKind::Other)]
#[case("", EventKind::Other)]
fn graphql_typename_lookup(#[case] typename: &str, #[case] expected: EventKind) {
    assert_eq!(EventKind::from_graphql_typename(typename), expected);
}

#[rstest]
#[case("committed", EventKind::Committed)]
#[case("labeled", EventKind::Labeled)]
#[case("milestoned", EventKind::Milestoned)]
#[case("assigned", EventKind::Assigned)]
#[case("commented", EventKind::Commented)]
#[case("reviewed", EventKind::Reviewed)]
#[case("merged", EventKind::Merged)]
#[case("head_ref_force_pushed", EventKind::Other)]
#[case("Merged", EventKind::Other)]
fn rest_event_lookup(#[case] event: &str, #[case] expected: EventKind) {
    assert_eq!(EventKind::from_rest_event(event), expected);
}

#[rstest]
#[case("APPROVED", ReviewState::Approved)]
#[case("approved", ReviewState::Approved)]
#[case("changes_requested", ReviewState::ChangesRequested)]
#[case("COMMENTED", ReviewState::Commented)]
#[case("dismissed", ReviewState::Dismissed)]
#[case("PENDING", ReviewState::Pending)]
#[case("bogus", ReviewState::Unknown)]
fn review_state_parses_any_case(#[case] value: &str, #[case] expected: ReviewState) {
    assert_eq!(ReviewState::parse(value), expected);
}

#[rstest]
#[case::user("User", AccountKind::User)]
#[case::organisation("Organization", AccountKind::Organization)]
#[case::bot("Bot", AccountKind::Bot)]
#[case::mannequin("Mannequin", AccountKind::Mannequin)]
#[case::enterprise("Enterprise", AccountKind::Enterprise)]
#[case::lower_case("user", AccountKind::Unknown)]
fn account_kind_lookup(#[case] type_name: &str, #[case] expected: AccountKind) {
    assert_eq!(AccountKind::from_type_name(type_name), expected);
}

#[rstest]
fn kind_matches_variant() {
    let other = TimelineEvent::Other(OtherEvent {
        type_name: "RenamedTitleEvent".to_owned(),
        id: None,
    });
    assert_eq!(other.kind(), EventKind::Other);
    assert_eq!(
        review_event(1, "alice", ReviewState::Approved).kind(),
        EventKind::Reviewed
    );
}

#[rstest]
fn attach_review_comments_groups_by_review_id() {
    let events = vec![
        review_event(10, "alice", ReviewState::Approved),
        TimelineEvent::Commented(CommentEvent::default()),
        review_event(20, "bob", ReviewState::Commented),
    ];
    let comments = vec![
        review_comment(1, Some(20), "commenter"),
        review_comment(2, Some(10), "commenter"),
        review_comment(3, Some(20), "commenter"),
        review_comment(4, None, "commenter"),
    ];

    let attached = attach_review_comments(events, &comments);

    let ids_per_review: Vec<Vec<Option<u64>>> = attached
        .iter()
        .filter_map(|event| match event {
            TimelineEvent::Reviewed(review) => {
                Some(review.comments.iter().map(|comment| comment.id).collect())
            }
            _ => None,
        })
        .collect();
    assert_eq!(
        ids_per_review,
        vec![vec![Some(2)], vec![Some(1), Some(3)]]
    );
    assert_eq!(attached.len(), 3);
}

#[rstest]
fn attach_review_comments_skips_reviews_without_id() {
    let review_without_id = TimelineEvent::Reviewed(ReviewEvent {
        id: None,
        author: Some(account("alice")),
        ..Default::default()
    });
    let attached =
        attach_review_comments(vec![review_without_id], &[review_comment(1, None, "bob")]);

    let Some(TimelineEvent::Reviewed(review)) = attached.first() else {
        panic!("expected a review event, got {attached:?}");
    };
    assert!(review.comments.is_empty());
}

#[rstest]
fn related_accounts_deduplicates_by_login() {
    let events = vec![
        review_event(1, "alice", ReviewState::Approved),
        TimelineEvent::Commented(CommentEvent {
            author: Some(account("bob")),
            ..Default::default()
        }),
        review_event(2, "alice", ReviewState::Dismissed),
        TimelineEvent::Commented(CommentEvent {
            author: Some(account("")),
            ..Default::default()
        }),
    ];

    let logins: Vec<_> = related_accounts(&events)
        .into_iter()
        .map(|participant| participant.login)
        .collect();
    assert_eq!(logins, vec!["alice", "bob"]);
}
