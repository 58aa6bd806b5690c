//! Timeline event conversions.
//!
//! A timeline item is decoded in two steps. The discriminator (`__typename`
//! or `event`) picks an [`EventKind`] from the fixed lookup table, then the
//! remaining fields are decoded into the typed source shape for that kind and
//! converted into its variant. Items whose fields do not fit the shape their
//! discriminator announces degrade to [`TimelineEvent::Other`].

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::{ShapeAdapter, parse_timestamp};
use crate::github::graphql::{
    GqlAssignedItem, GqlCommitItem, GqlIssueCommentItem, GqlLabeledItem, GqlMergedItem,
    GqlMilestonedItem, GqlReviewItem, GqlTimelineItem,
};
use crate::github::models::{
    AssignEvent, CommentEvent, CommitAuthor, CommitEvent, EventKind, Label, LabelEvent,
    MergedEvent, MilestoneEvent, OtherEvent, ReviewEvent, ReviewState, TimelineEvent,
};
use crate::github::rest::{
    ApiAssignedEvent, ApiCommittedEvent, ApiIssueComment, ApiLabeledEvent, ApiMergedEvent,
    ApiMilestonedEvent, ApiReview, ApiTimelineItem,
};

impl ShapeAdapter<'_> {
    /// Converts one GraphQL `timelineItems` node.
    ///
    /// # Examples
    ///
    /// ```
    /// use prshape::AdapterConfig;
    /// use prshape::github::ShapeAdapter;
    /// use prshape::github::graphql::GqlTimelineItem;
    /// use prshape::github::models::EventKind;
    /// use prshape::github::payload::decode_str;
    ///
    /// let config = AdapterConfig::default();
    /// let item: GqlTimelineItem =
    ///     decode_str(r#"{"__typename": "MergedEvent", "id": "ME_1"}"#).expect("item decodes");
    ///
    /// let event = ShapeAdapter::new(&config).timeline_event_from_graphql(item);
    /// assert_eq!(event.kind(), EventKind::Merged);
    /// ```
    #[must_use]
    pub fn timeline_event_from_graphql(&self, item: GqlTimelineItem) -> TimelineEvent {
        let type_name = item.typename.unwrap_or_default();
        let fallback = other_event(&type_name, &item.fields);
        let fields = item.fields;

        let event = match EventKind::from_graphql_typename(&type_name) {
            EventKind::Committed => {
                decode_fields(&type_name, fields).map(|value| self.graphql_commit(value))
            }
            EventKind::Labeled => {
                decode_fields(&type_name, fields).map(|value| self.graphql_labeled(value))
            }
            EventKind::Milestoned => {
                decode_fields(&type_name, fields).map(|value| self.graphql_milestoned(value))
            }
            EventKind::Assigned => {
                decode_fields(&type_name, fields).map(|value| self.graphql_assigned(value))
            }
            EventKind::Commented => {
                decode_fields(&type_name, fields).map(|value| self.graphql_commented(value))
            }
            EventKind::Reviewed => {
                decode_fields(&type_name, fields).map(|value| self.graphql_reviewed(value))
            }
            EventKind::Merged => {
                decode_fields(&type_name, fields).map(|value| self.graphql_merged(value))
            }
            EventKind::Other => {
                tracing::debug!("keeping unmodelled timeline item '{type_name}' as other");
                None
            }
        };

        event.unwrap_or_else(|| TimelineEvent::Other(fallback))
    }

    /// Converts one entry of the REST issue timeline.
    #[must_use]
    pub fn timeline_event_from_rest(&self, item: ApiTimelineItem) -> TimelineEvent {
        let type_name = item.event.unwrap_or_default();
        let fallback = other_event(&type_name, &item.fields);
        let fields = item.fields;

        let event = match EventKind::from_rest_event(&type_name) {
            EventKind::Committed => decode_fields(&type_name, fields).map(rest_committed),
            EventKind::Labeled => {
                decode_fields(&type_name, fields).map(|value| self.rest_labeled(value))
            }
            EventKind::Milestoned => {
                decode_fields(&type_name, fields).map(|value| self.rest_milestoned(value))
            }
            EventKind::Assigned => {
                decode_fields(&type_name, fields).map(|value| self.rest_assigned(value))
            }
            EventKind::Commented => {
                decode_fields(&type_name, fields).map(|value| self.rest_commented(value))
            }
            EventKind::Reviewed => decode_fields(&type_name, fields)
                .map(|value| TimelineEvent::Reviewed(self.review_from_rest(value))),
            EventKind::Merged => {
                decode_fields(&type_name, fields).map(|value| self.rest_merged(value))
            }
            EventKind::Other => {
                tracing::debug!("keeping unmodelled timeline event '{type_name}' as other");
                None
            }
        };

        event.unwrap_or_else(|| TimelineEvent::Other(fallback))
    }

    /// Converts a whole GraphQL timeline, preserving order.
    #[must_use]
    pub fn timeline_from_graphql(&self, items: Vec<GqlTimelineItem>) -> Vec<TimelineEvent> {
        items
            .into_iter()
            .map(|item| self.timeline_event_from_graphql(item))
            .collect()
    }

    /// Converts a whole REST timeline, preserving order.
    #[must_use]
    pub fn timeline_from_rest(&self, items: Vec<ApiTimelineItem>) -> Vec<TimelineEvent> {
        items
            .into_iter()
            .map(|item| self.timeline_event_from_rest(item))
            .collect()
    }

    /// Converts a review from the REST reviews endpoint or a `reviewed`
    /// timeline entry.
    ///
    /// The review's comments are not part of the payload; see
    /// [`attach_review_comments`](crate::github::models::attach_review_comments).
    #[must_use]
    pub fn review_from_rest(&self, value: ApiReview) -> ReviewEvent {
        ReviewEvent {
            id: Some(value.id),
            node_id: value.node_id,
            html_url: value.html_url,
            body: value.body,
            author: self.optional_rest_account(value.user),
            author_association: value.author_association,
            state: value
                .state
                .as_deref()
                .map_or(ReviewState::Unknown, ReviewState::parse),
            submitted_at: parse_timestamp(value.submitted_at.as_deref()),
            comments: Vec::new(),
        }
    }

    fn graphql_commit(&self, value: GqlCommitItem) -> TimelineEvent {
        let commit = value.commit.unwrap_or_default();
        let author = commit.author.map(|actor| CommitAuthor {
            name: actor.name,
            email: actor.email,
            account: self.optional_graphql_account(actor.user),
        });

        TimelineEvent::Committed(CommitEvent {
            node_id: value.id,
            sha: commit.oid,
            author,
            message: commit.message,
            html_url: value.url.or(commit.url),
            authored_at: parse_timestamp(commit.authored_date.as_deref()),
        })
    }

    fn graphql_labeled(&self, value: GqlLabeledItem) -> TimelineEvent {
        TimelineEvent::Labeled(LabelEvent {
            id: None,
            node_id: value.id,
            actor: self.optional_graphql_account(value.actor),
            label: value.label.map(Label::from),
            created_at: parse_timestamp(value.created_at.as_deref()),
        })
    }

    fn graphql_milestoned(&self, value: GqlMilestonedItem) -> TimelineEvent {
        TimelineEvent::Milestoned(MilestoneEvent {
            id: None,
            node_id: value.id,
            actor: self.optional_graphql_account(value.actor),
            milestone_title: value.milestone_title,
            created_at: parse_timestamp(value.created_at.as_deref()),
        })
    }

    fn graphql_assigned(&self, value: GqlAssignedItem) -> TimelineEvent {
        TimelineEvent::Assigned(AssignEvent {
            id: None,
            node_id: value.id,
            actor: self.optional_graphql_account(value.actor),
            assignee: self.optional_graphql_account(value.assignee),
            created_at: parse_timestamp(value.created_at.as_deref()),
        })
    }

    fn graphql_commented(&self, value: GqlIssueCommentItem) -> TimelineEvent {
        TimelineEvent::Commented(CommentEvent {
            id: value.database_id,
            node_id: value.id,
            html_url: value.url,
            body: value.body,
            body_html: value.body_html,
            author: self.optional_graphql_account(value.author),
            author_association: value.author_association,
            can_edit: value.viewer_can_update.unwrap_or(false),
            can_delete: value.viewer_can_delete.unwrap_or(false),
            created_at: parse_timestamp(value.created_at.as_deref()),
            updated_at: parse_timestamp(value.updated_at.as_deref()),
        })
    }

    fn graphql_reviewed(&self, value: GqlReviewItem) -> TimelineEvent {
        TimelineEvent::Reviewed(ReviewEvent {
            id: value.database_id,
            node_id: value.id,
            html_url: value.url,
            body: value.body,
            author: self.optional_graphql_account(value.author),
            author_association: value.author_association,
            state: value
                .state
                .as_deref()
                .map_or(ReviewState::Unknown, ReviewState::parse),
            submitted_at: parse_timestamp(value.submitted_at.as_deref()),
            comments: value
                .comments
                .nodes
                .into_iter()
                .map(|comment| self.graphql_comment(comment, None))
                .collect(),
        })
    }

    fn graphql_merged(&self, value: GqlMergedItem) -> TimelineEvent {
        let commit = value.commit.unwrap_or_default();

        TimelineEvent::Merged(MergedEvent {
            id: None,
            node_id: value.id,
            actor: self.optional_graphql_account(value.actor),
            merge_ref: value.merge_ref_name,
            sha: commit.oid,
            commit_url: commit.commit_url,
            url: value.url,
            created_at: parse_timestamp(value.created_at.as_deref()),
        })
    }

    fn rest_labeled(&self, value: ApiLabeledEvent) -> TimelineEvent {
        TimelineEvent::Labeled(LabelEvent {
            id: value.id,
            node_id: value.node_id,
            actor: self.optional_rest_account(value.actor),
            label: value.label.map(Label::from),
            created_at: parse_timestamp(value.created_at.as_deref()),
        })
    }

    fn rest_milestoned(&self, value: ApiMilestonedEvent) -> TimelineEvent {
        TimelineEvent::Milestoned(MilestoneEvent {
            id: value.id,
            node_id: value.node_id,
            actor: self.optional_rest_account(value.actor),
            milestone_title: value.milestone.and_then(|milestone| milestone.title),
            created_at: parse_timestamp(value.created_at.as_deref()),
        })
    }

    fn rest_assigned(&self, value: ApiAssignedEvent) -> TimelineEvent {
        TimelineEvent::Assigned(AssignEvent {
            id: value.id,
            node_id: value.node_id,
            actor: self.optional_rest_account(value.actor),
            assignee: self.optional_rest_account(value.assignee),
            created_at: parse_timestamp(value.created_at.as_deref()),
        })
    }

    fn rest_commented(&self, value: ApiIssueComment) -> TimelineEvent {
        let owned_by_viewer = self.authored_by_viewer(value.user.as_ref());

        TimelineEvent::Commented(CommentEvent {
            id: Some(value.id),
            node_id: value.node_id,
            html_url: value.html_url,
            body: value.body,
            body_html: None,
            author: self.optional_rest_account(value.user),
            author_association: value.author_association,
            can_edit: owned_by_viewer,
            can_delete: owned_by_viewer,
            created_at: parse_timestamp(value.created_at.as_deref()),
            updated_at: parse_timestamp(value.updated_at.as_deref()),
        })
    }

    fn rest_merged(&self, value: ApiMergedEvent) -> TimelineEvent {
        TimelineEvent::Merged(MergedEvent {
            id: value.id,
            node_id: value.node_id,
            actor: self.optional_rest_account(value.actor),
            merge_ref: None,
            sha: value.commit_id,
            commit_url: value.commit_url,
            url: None,
            created_at: parse_timestamp(value.created_at.as_deref()),
        })
    }
}

fn rest_committed(value: ApiCommittedEvent) -> TimelineEvent {
    let authored_at = value
        .author
        .as_ref()
        .and_then(|actor| parse_timestamp(actor.date.as_deref()));
    let author = value.author.map(|actor| CommitAuthor {
        name: actor.name,
        email: actor.email,
        account: None,
    });

    TimelineEvent::Committed(CommitEvent {
        node_id: value.node_id,
        sha: value.sha,
        author,
        message: value.message,
        html_url: value.html_url,
        authored_at,
    })
}

/// Decodes the untyped fields of a timeline item into the shape its
/// discriminator announces.
fn decode_fields<T: DeserializeOwned>(type_name: &str, fields: Map<String, Value>) -> Option<T> {
    match serde_json::from_value(Value::Object(fields)) {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::debug!("timeline item '{type_name}' does not match its shape: {error}");
            None
        }
    }
}

fn other_event(type_name: &str, fields: &Map<String, Value>) -> OtherEvent {
    let id = ["id", "node_id", "sha"]
        .into_iter()
        .find_map(|key| match fields.get(key) {
            Some(Value::String(text)) => Some(text.clone()),
            Some(Value::Number(number)) => Some(number.to_string()),
            _ => None,
        });

    OtherEvent {
        type_name: type_name.to_owned(),
        id,
    }
}
