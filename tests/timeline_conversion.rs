//! Integration tests for pull request timeline conversion.
//!
//! A GraphQL `timelineItems` page and a REST timeline are converted into the
//! same event model, reviews are filled with their comments, and the
//! participants are collected.

use prshape::github::graphql::{GqlConnection, GqlTimelineItem};
use prshape::github::models::test_support::{account, review_comment, review_event};
use prshape::github::models::{
    EventKind, ReviewState, TimelineEvent, attach_review_comments, related_accounts,
};
use prshape::github::payload::decode_str;
use prshape::github::rest::ApiTimelineItem;
use prshape::{AdapterConfig, ShapeAdapter};
use rstest::rstest;

const GRAPHQL_TIMELINE: &str = r#"{
  "nodes": [
    {
      "__typename": "PullRequestCommit",
      "id": "PRC_1",
      "commit": {
        "oid": "1a2b3c",
        "message": "Add parser",
        "authoredDate": "2024-06-01T09:00:00Z",
        "author": { "name": "Alice", "email": "alice@example.com", "user": { "__typename": "User", "login": "alice" } }
      }
    },
    {
      "__typename": "LabeledEvent",
      "id": "LE_1",
      "actor": { "__typename": "User", "login": "bob" },
      "label": { "name": "enhancement" },
      "createdAt": "2024-06-01T09:05:00Z"
    },
    {
      "__typename": "PullRequestReview",
      "id": "PRR_1",
      "databaseId": 501,
      "state": "APPROVED",
      "author": { "__typename": "User", "login": "bob" }
    },
    { "__typename": "ReadyForReviewEvent", "id": "RFR_1" },
    {
      "__typename": "MergedEvent",
      "id": "ME_1",
      "actor": { "__typename": "User", "login": "carol" },
      "mergeRefName": "main",
      "commit": { "oid": "4d5e6f" }
    }
  ]
}"#;

const REST_TIMELINE: &str = r#"[
  { "event": "committed", "sha": "1a2b3c", "message": "Add parser", "author": { "name": "Alice", "date": "2024-06-01T09:00:00Z" } },
  { "event": "labeled", "id": 11, "actor": { "login": "bob", "type": "User" }, "label": { "name": "enhancement" } },
  { "event": "reviewed", "id": 501, "state": "approved", "user": { "login": "bob", "type": "User" } },
  { "event": "ready_for_review", "id": 12 },
  { "event": "merged", "id": 13, "actor": { "login": "carol", "type": "User" }, "commit_id": "4d5e6f" }
]"#;

const EXPECTED_KINDS: [EventKind; 5] = [
    EventKind::Committed,
    EventKind::Labeled,
    EventKind::Reviewed,
    EventKind::Other,
    EventKind::Merged,
];

fn graphql_timeline(config: &AdapterConfig) -> Vec<TimelineEvent> {
    let page: GqlConnection<GqlTimelineItem> = decode_str(GRAPHQL_TIMELINE)
        .unwrap_or_else(|error| panic!("timeline page should decode: {error}"));
    ShapeAdapter::new(config).timeline_from_graphql(page.nodes)
}

fn rest_timeline(config: &AdapterConfig) -> Vec<TimelineEvent> {
    let items: Vec<ApiTimelineItem> = decode_str(REST_TIMELINE)
        .unwrap_or_else(|error| panic!("timeline should decode: {error}"));
    ShapeAdapter::new(config).timeline_from_rest(items)
}

fn kinds(events: &[TimelineEvent]) -> Vec<EventKind> {
    events.iter().map(TimelineEvent::kind).collect()
}

#[rstest]
fn both_api_families_yield_the_same_event_sequence() {
    let config = AdapterConfig::default();

    assert_eq!(kinds(&graphql_timeline(&config)), EXPECTED_KINDS);
    assert_eq!(kinds(&rest_timeline(&config)), EXPECTED_KINDS);
}

#[rstest]
fn reviews_collect_their_comments() {
    let config = AdapterConfig::default();
    let comments = vec![
        review_comment(1, Some(501), "bob"),
        review_comment(2, Some(999), "dave"),
        review_comment(3, Some(501), "erin"),
    ];

    let events = attach_review_comments(rest_timeline(&config), &comments);

    let review = events
        .iter()
        .find_map(|event| match event {
            TimelineEvent::Reviewed(review) => Some(review),
            _ => None,
        })
        .expect("timeline should contain a review");
    assert_eq!(review.state, ReviewState::Approved);
    let attached: Vec<_> = review.comments.iter().map(|comment| comment.id).collect();
    assert_eq!(attached, vec![Some(1), Some(3)]);
}

#[rstest]
fn related_accounts_are_distinct_in_first_seen_order() {
    let config = AdapterConfig::default();
    let events = graphql_timeline(&config);

    let logins: Vec<_> = related_accounts(&events)
        .into_iter()
        .map(|participant| participant.login)
        .collect();

    assert_eq!(logins, vec!["alice", "bob", "carol"]);
}

#[rstest]
fn related_accounts_include_review_comment_authors() {
    let events = attach_review_comments(
        vec![review_event(7, "bob", ReviewState::Commented)],
        &[review_comment(1, Some(7), "erin"), review_comment(2, Some(7), "bob")],
    );

    assert_eq!(related_accounts(&events), vec![account("bob"), account("erin")]);
}

#[rstest]
fn unknown_events_keep_their_identity() {
    let config = AdapterConfig::default();
    let events = rest_timeline(&config);

    let Some(TimelineEvent::Other(other)) = events.get(3) else {
        panic!("fourth event should be kept as other");
    };
    assert_eq!(other.type_name, "ready_for_review");
    assert_eq!(other.id.as_deref(), Some("12"));
}

#[rstest]
fn events_serialise_with_a_kind_tag() {
    let config = AdapterConfig::default();
    let events = graphql_timeline(&config);

    let json = serde_json::to_value(&events)
        .unwrap_or_else(|error| panic!("events should serialise: {error}"));
    let tags: Vec<_> = json
        .as_array()
        .expect("events serialise to an array")
        .iter()
        .map(|event| event.get("event").and_then(serde_json::Value::as_str))
        .collect();

    assert_eq!(
        tags,
        vec![
            Some("committed"),
            Some("labeled"),
            Some("reviewed"),
            Some("other"),
            Some("merged"),
        ]
    );
}
