//! Comment and review thread conversions.

use super::{ShapeAdapter, parse_timestamp};
use crate::github::diff_hunk::{DiffHunk, parse_diff_hunks};
use crate::github::graphql::{GqlReactionGroup, GqlReviewComment, GqlReviewThread};
use crate::github::models::{Comment, DiffSide, Reaction, ReactionContent, ReviewThread};
use crate::github::rest::{ApiIssueComment, ApiReactions, ApiReviewComment, ApiUser};

/// Parses the hunks of a comment's raw `diff_hunk` text.
fn diff_hunks(text: Option<&str>) -> Vec<DiffHunk> {
    text.map(|hunk| parse_diff_hunks(hunk).collect())
        .unwrap_or_default()
}

/// Expands a REST reaction roll-up into non-zero per-kind counts.
fn rest_reactions(value: Option<ApiReactions>) -> Vec<Reaction> {
    let Some(reactions) = value else {
        return Vec::new();
    };

    [
        (ReactionContent::ThumbsUp, reactions.plus_one),
        (ReactionContent::ThumbsDown, reactions.minus_one),
        (ReactionContent::Laugh, reactions.laugh),
        (ReactionContent::Hooray, reactions.hooray),
        (ReactionContent::Confused, reactions.confused),
        (ReactionContent::Heart, reactions.heart),
        (ReactionContent::Rocket, reactions.rocket),
        (ReactionContent::Eyes, reactions.eyes),
    ]
    .into_iter()
    .filter_map(|(content, count)| {
        count.filter(|total| *total > 0).map(|total| Reaction {
            content,
            count: total,
            viewer_has_reacted: false,
        })
    })
    .collect()
}

/// Converts GraphQL reaction groups, dropping unknown kinds and zero counts.
fn graphql_reactions(groups: Vec<GqlReactionGroup>) -> Vec<Reaction> {
    groups
        .into_iter()
        .filter_map(|group| {
            let content = group.content.as_deref().and_then(ReactionContent::from_graphql)?;
            let count = group
                .reactors
                .or(group.users)
                .and_then(|users| users.total_count)
                .unwrap_or(0);
            (count > 0).then_some(Reaction {
                content,
                count,
                viewer_has_reacted: group.viewer_has_reacted.unwrap_or(false),
            })
        })
        .collect()
}

impl ShapeAdapter<'_> {
    /// Converts a REST review comment and parses its diff hunk.
    ///
    /// REST payloads carry no viewer permissions: the comment is editable and
    /// deletable when its author is the configured viewer. REST never
    /// returns pending comments, so `is_draft` is false.
    #[must_use]
    pub fn comment_from_rest_review(&self, value: ApiReviewComment) -> Comment {
        let owned_by_viewer = self.authored_by_viewer(value.user.as_ref());

        Comment {
            id: Some(value.id),
            node_id: value.node_id,
            url: value.url,
            html_url: value.html_url,
            body: value.body,
            body_html: None,
            author: self.optional_rest_account(value.user),
            author_association: value.author_association,
            path: value.path,
            position: value.position,
            original_position: value.original_position,
            line: value.line,
            original_line: value.original_line,
            commit_id: value.commit_id,
            original_commit_id: value.original_commit_id,
            pull_request_review_id: value.pull_request_review_id,
            in_reply_to_id: value.in_reply_to_id,
            diff_hunks: diff_hunks(value.diff_hunk.as_deref()),
            diff_hunk: value.diff_hunk,
            can_edit: owned_by_viewer,
            can_delete: owned_by_viewer,
            is_draft: false,
            is_resolved: None,
            reactions: rest_reactions(value.reactions),
            created_at: parse_timestamp(value.created_at.as_deref()),
            updated_at: parse_timestamp(value.updated_at.as_deref()),
        }
    }

    /// Converts a REST conversation comment.
    #[must_use]
    pub fn comment_from_rest_issue(&self, value: ApiIssueComment) -> Comment {
        let owned_by_viewer = self.authored_by_viewer(value.user.as_ref());

        Comment {
            id: Some(value.id),
            node_id: value.node_id,
            url: value.url,
            html_url: value.html_url,
            body: value.body,
            author: self.optional_rest_account(value.user),
            author_association: value.author_association,
            can_edit: owned_by_viewer,
            can_delete: owned_by_viewer,
            reactions: rest_reactions(value.reactions),
            created_at: parse_timestamp(value.created_at.as_deref()),
            updated_at: parse_timestamp(value.updated_at.as_deref()),
            ..Comment::default()
        }
    }

    /// Converts a GraphQL review comment and parses its diff hunk.
    ///
    /// `can_edit` and `can_delete` come from the viewer permission flags and
    /// `is_draft` is set for comments of a `PENDING` review.
    #[must_use]
    pub fn comment_from_graphql(&self, value: GqlReviewComment) -> Comment {
        self.graphql_comment(value, None)
    }

    /// Converts a GraphQL review thread and its comments.
    ///
    /// The thread's resolution state is copied onto every comment.
    #[must_use]
    pub fn review_thread_from_graphql(&self, value: GqlReviewThread) -> ReviewThread {
        let is_resolved = value.is_resolved.unwrap_or(false);
        let diff_side = match value.diff_side.as_deref() {
            Some("LEFT") => DiffSide::Left,
            _ => DiffSide::Right,
        };

        ReviewThread {
            id: value.id,
            is_resolved,
            is_outdated: value.is_outdated.unwrap_or(false),
            can_resolve: value.viewer_can_resolve.unwrap_or(false),
            can_unresolve: value.viewer_can_unresolve.unwrap_or(false),
            path: value.path,
            line: value.line,
            original_line: value.original_line,
            diff_side,
            comments: value
                .comments
                .nodes
                .into_iter()
                .map(|comment| self.graphql_comment(comment, Some(is_resolved)))
                .collect(),
        }
    }

    pub(super) fn graphql_comment(
        &self,
        value: GqlReviewComment,
        is_resolved: Option<bool>,
    ) -> Comment {
        Comment {
            id: value.database_id,
            node_id: value.id,
            url: None,
            html_url: value.url,
            body: value.body,
            body_html: value.body_html,
            author: self.optional_graphql_account(value.author),
            author_association: value.author_association,
            path: value.path,
            position: value.position,
            original_position: value.original_position,
            line: value.line,
            original_line: value.original_line,
            commit_id: value.commit.and_then(|commit| commit.oid),
            original_commit_id: value.original_commit.and_then(|commit| commit.oid),
            pull_request_review_id: value
                .pull_request_review
                .and_then(|review| review.database_id),
            in_reply_to_id: value.reply_to.and_then(|reply| reply.database_id),
            diff_hunks: diff_hunks(value.diff_hunk.as_deref()),
            diff_hunk: value.diff_hunk,
            can_edit: value.viewer_can_update.unwrap_or(false),
            can_delete: value.viewer_can_delete.unwrap_or(false),
            is_draft: value.state.as_deref() == Some("PENDING"),
            is_resolved,
            reactions: graphql_reactions(value.reaction_groups),
            created_at: parse_timestamp(value.created_at.as_deref()),
            updated_at: parse_timestamp(value.updated_at.as_deref()),
        }
    }

    pub(super) fn authored_by_viewer(&self, user: Option<&ApiUser>) -> bool {
        user.and_then(|author| author.login.as_deref())
            .is_some_and(|login| self.config.is_viewer(login))
    }
}
