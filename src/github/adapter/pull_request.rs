//! Pull request conversions.

use super::{ShapeAdapter, parse_timestamp};
use crate::github::graphql::{GqlLabel, GqlMilestone, GqlPullRequest, GqlRepository};
use crate::github::models::{
    GitRef, Label, Mergeability, Milestone, PullRequest, PullRequestState,
};
use crate::github::rest::{ApiIssue, ApiLabel, ApiMilestone, ApiPullRequest, ApiRef};

impl From<ApiLabel> for Label {
    fn from(value: ApiLabel) -> Self {
        Self {
            name: value.name.unwrap_or_default(),
            color: value.color,
            description: value.description,
        }
    }
}

impl From<GqlLabel> for Label {
    fn from(value: GqlLabel) -> Self {
        Self {
            name: value.name.unwrap_or_default(),
            color: value.color,
            description: value.description,
        }
    }
}

impl From<ApiMilestone> for Milestone {
    fn from(value: ApiMilestone) -> Self {
        Self {
            title: value.title.unwrap_or_default(),
            number: value.number,
            due_on: parse_timestamp(value.due_on.as_deref()),
            url: value.html_url,
        }
    }
}

impl From<GqlMilestone> for Milestone {
    fn from(value: GqlMilestone) -> Self {
        Self {
            title: value.title.unwrap_or_default(),
            number: value.number,
            due_on: parse_timestamp(value.due_on.as_deref()),
            url: value.url,
        }
    }
}

impl From<ApiRef> for GitRef {
    fn from(value: ApiRef) -> Self {
        Self {
            label: value.label.unwrap_or_default(),
            ref_name: value.ref_name.unwrap_or_default(),
            sha: value.sha.unwrap_or_default(),
            clone_url: value.repo.and_then(|repo| repo.clone_url),
        }
    }
}

/// Builds a ref from the flattened GraphQL `*RefName`/`*RefOid`/`*Repository`
/// fields. The label follows the REST `owner:branch` form.
fn graphql_ref(
    name: Option<String>,
    sha: Option<String>,
    repository: Option<GqlRepository>,
) -> Option<GitRef> {
    let ref_name = name?;
    let (owner, clone_url) = repository.map_or((None, None), |repo| {
        (repo.owner.and_then(|owner| owner.login), repo.url)
    });
    let label = owner.map_or_else(|| ref_name.clone(), |login| format!("{login}:{ref_name}"));

    Some(GitRef {
        label,
        ref_name,
        sha: sha.unwrap_or_default(),
        clone_url,
    })
}

fn rest_state(state: Option<&str>, merged: bool) -> PullRequestState {
    if merged {
        return PullRequestState::Merged;
    }
    match state {
        Some(value) if value.eq_ignore_ascii_case("closed") => PullRequestState::Closed,
        _ => PullRequestState::Open,
    }
}

fn rest_mergeability(mergeable: Option<bool>, mergeable_state: Option<&str>) -> Mergeability {
    match (mergeable_state, mergeable) {
        (Some("dirty"), _) => Mergeability::Conflict,
        (Some("behind"), _) => Mergeability::Behind,
        (Some("blocked"), _) | (_, Some(false)) => Mergeability::NotMergeable,
        (_, Some(true)) => Mergeability::Mergeable,
        (_, None) => Mergeability::Unknown,
    }
}

fn graphql_mergeability(mergeable: Option<&str>, merge_state: Option<&str>) -> Mergeability {
    match (mergeable, merge_state) {
        (Some("CONFLICTING"), _) => Mergeability::Conflict,
        (_, Some("BEHIND")) => Mergeability::Behind,
        (_, Some("BLOCKED")) => Mergeability::NotMergeable,
        (Some("MERGEABLE"), _) => Mergeability::Mergeable,
        _ => Mergeability::Unknown,
    }
}

impl ShapeAdapter<'_> {
    /// Converts a REST pull request.
    ///
    /// `merged` comes from the response's `merged` field and defaults to
    /// false when the shape lacks it, as list responses do. The head and base
    /// refs select `{label, ref, sha, repo.clone_url}`.
    #[must_use]
    pub fn pull_request_from_rest(&self, value: ApiPullRequest) -> PullRequest {
        let merged = value.merged.unwrap_or(false);

        PullRequest {
            id: value.id,
            node_id: value.node_id,
            number: value.number,
            title: value.title,
            body: value.body,
            body_html: None,
            url: value.url,
            html_url: value.html_url,
            state: rest_state(value.state.as_deref(), merged),
            merged,
            is_draft: value.draft.unwrap_or(false),
            author: self.optional_rest_account(value.user),
            assignees: value
                .assignees
                .into_iter()
                .map(|user| self.account_from_rest(user))
                .collect(),
            labels: value.labels.into_iter().map(Label::from).collect(),
            milestone: value.milestone.map(Milestone::from),
            head: value.head.map(GitRef::from),
            base: value.base.map(GitRef::from),
            mergeability: rest_mergeability(value.mergeable, value.mergeable_state.as_deref()),
            created_at: parse_timestamp(value.created_at.as_deref()),
            updated_at: parse_timestamp(value.updated_at.as_deref()),
            merged_at: parse_timestamp(value.merged_at.as_deref()),
            closed_at: parse_timestamp(value.closed_at.as_deref()),
        }
    }

    /// Converts an issue-shaped response describing a pull request.
    ///
    /// Issue payloads carry no refs or mergeability. The pull request is
    /// considered merged when its `pull_request.merged_at` link field is set.
    #[must_use]
    pub fn pull_request_from_rest_issue(&self, value: ApiIssue) -> PullRequest {
        let merged_at = parse_timestamp(
            value
                .pull_request
                .as_ref()
                .and_then(|links| links.merged_at.as_deref()),
        );
        let merged = value
            .pull_request
            .as_ref()
            .is_some_and(|links| links.merged_at.is_some());

        PullRequest {
            id: value.id,
            node_id: value.node_id,
            number: value.number,
            title: value.title,
            body: value.body,
            body_html: None,
            url: value.url,
            html_url: value.html_url,
            state: rest_state(value.state.as_deref(), merged),
            merged,
            is_draft: value.draft.unwrap_or(false),
            author: self.optional_rest_account(value.user),
            assignees: value
                .assignees
                .into_iter()
                .map(|user| self.account_from_rest(user))
                .collect(),
            labels: value.labels.into_iter().map(Label::from).collect(),
            milestone: value.milestone.map(Milestone::from),
            head: None,
            base: None,
            mergeability: Mergeability::Unknown,
            created_at: parse_timestamp(value.created_at.as_deref()),
            updated_at: parse_timestamp(value.updated_at.as_deref()),
            merged_at,
            closed_at: parse_timestamp(value.closed_at.as_deref()),
        }
    }

    /// Converts a GraphQL pull request node.
    ///
    /// A `MERGED` state implies `merged` even when the node omits the flag.
    #[must_use]
    pub fn pull_request_from_graphql(&self, value: GqlPullRequest) -> PullRequest {
        let merged = value.merged.unwrap_or(false) || value.state.as_deref() == Some("MERGED");
        let state = match value.state.as_deref() {
            _ if merged => PullRequestState::Merged,
            Some("CLOSED") => PullRequestState::Closed,
            _ => PullRequestState::Open,
        };

        PullRequest {
            id: value.database_id,
            node_id: value.id,
            number: value.number,
            title: value.title,
            body: value.body,
            body_html: value.body_html,
            url: None,
            html_url: value.url,
            state,
            merged,
            is_draft: value.is_draft.unwrap_or(false),
            author: self.optional_graphql_account(value.author),
            assignees: value
                .assignees
                .nodes
                .into_iter()
                .map(|actor| self.account_from_graphql(actor))
                .collect(),
            labels: value.labels.nodes.into_iter().map(Label::from).collect(),
            milestone: value.milestone.map(Milestone::from),
            head: graphql_ref(value.head_ref_name, value.head_ref_oid, value.head_repository),
            base: graphql_ref(value.base_ref_name, value.base_ref_oid, value.base_repository),
            mergeability: graphql_mergeability(
                value.mergeable.as_deref(),
                value.merge_state_status.as_deref(),
            ),
            created_at: parse_timestamp(value.created_at.as_deref()),
            updated_at: parse_timestamp(value.updated_at.as_deref()),
            merged_at: parse_timestamp(value.merged_at.as_deref()),
            closed_at: parse_timestamp(value.closed_at.as_deref()),
        }
    }
}
