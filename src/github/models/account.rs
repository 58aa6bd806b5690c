//! Normalised account identity.

use serde::Serialize;

/// Kind of platform identity an account represents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    /// A regular user.
    User,
    /// An organisation.
    Organization,
    /// A GitHub App or bot account.
    Bot,
    /// A placeholder for an imported, unclaimed identity.
    Mannequin,
    /// An enterprise-managed account.
    Enterprise,
    /// Type string absent or not recognised.
    #[default]
    Unknown,
}

impl AccountKind {
    /// Maps a REST `type` or GraphQL `__typename` string to a kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use prshape::github::models::AccountKind;
    ///
    /// assert_eq!(AccountKind::from_type_name("User"), AccountKind::User);
    /// assert_eq!(
    ///     AccountKind::from_type_name("EnterpriseUserAccount"),
    ///     AccountKind::Enterprise
    /// );
    /// assert_eq!(AccountKind::from_type_name("Team"), AccountKind::Unknown);
    /// ```
    #[must_use]
    pub fn from_type_name(type_name: &str) -> Self {
        match type_name {
            "User" => Self::User,
            "Organization" => Self::Organization,
            "Bot" => Self::Bot,
            "Mannequin" => Self::Mannequin,
            "Enterprise" | "EnterpriseUserAccount" => Self::Enterprise,
            _ => Self::Unknown,
        }
    }
}

/// A user, organisation, or bot identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Account {
    /// Login handle; empty when the source omitted it.
    pub login: String,
    /// Numeric database identifier.
    pub id: Option<u64>,
    /// Global node identifier.
    pub node_id: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Public email.
    pub email: Option<String>,
    /// Avatar image URL; dropped for enterprise hosts.
    pub avatar_url: Option<String>,
    /// Profile page URL.
    pub url: Option<String>,
    /// Identity kind.
    pub kind: AccountKind,
    /// True for regular user accounts.
    pub is_user: bool,
    /// True for enterprise-managed accounts.
    pub is_enterprise: bool,
}
