//! Account conversions.

use super::ShapeAdapter;
use crate::github::graphql::GqlActor;
use crate::github::models::{Account, AccountKind};
use crate::github::rest::ApiUser;

impl ShapeAdapter<'_> {
    /// Converts a REST user record.
    ///
    /// The kind and the `is_user`/`is_enterprise` flags derive from the
    /// record's `type` field.
    #[must_use]
    pub fn account_from_rest(&self, value: ApiUser) -> Account {
        self.account(
            value.account_type.as_deref(),
            AccountFields {
                login: value.login,
                id: value.id,
                node_id: value.node_id,
                name: value.name,
                email: value.email,
                avatar_url: value.avatar_url,
                url: value.html_url,
            },
        )
    }

    /// Converts a GraphQL actor node.
    ///
    /// The kind and flags derive from the node's `__typename`.
    #[must_use]
    pub fn account_from_graphql(&self, value: GqlActor) -> Account {
        self.account(
            value.typename.as_deref(),
            AccountFields {
                login: value.login,
                id: value.database_id,
                node_id: value.id,
                name: value.name,
                email: value.email,
                avatar_url: value.avatar_url,
                url: value.url,
            },
        )
    }

    pub(super) fn optional_rest_account(&self, value: Option<ApiUser>) -> Option<Account> {
        value.map(|user| self.account_from_rest(user))
    }

    pub(super) fn optional_graphql_account(&self, value: Option<GqlActor>) -> Option<Account> {
        value.map(|actor| self.account_from_graphql(actor))
    }

    fn account(&self, type_name: Option<&str>, fields: AccountFields) -> Account {
        let kind = type_name.map_or(AccountKind::Unknown, AccountKind::from_type_name);
        let avatar_url = if self.config.enterprise {
            None
        } else {
            fields.avatar_url
        };

        Account {
            login: fields.login.unwrap_or_default(),
            id: fields.id,
            node_id: fields.node_id,
            name: fields.name,
            email: fields.email,
            avatar_url,
            url: fields.url,
            kind,
            is_user: kind == AccountKind::User,
            is_enterprise: kind == AccountKind::Enterprise,
        }
    }
}

/// Identity fields shared by both API families.
struct AccountFields {
    login: Option<String>,
    id: Option<u64>,
    node_id: Option<String>,
    name: Option<String>,
    email: Option<String>,
    avatar_url: Option<String>,
    url: Option<String>,
}
