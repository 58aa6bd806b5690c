//! Decoding of raw JSON payloads into source shapes.
//!
//! These helpers are the only fallible entry points of the adapter layer:
//! once a payload has been decoded, every conversion is total.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use super::error::AdaptError;

/// Decodes a JSON string into a source shape such as
/// [`ApiPullRequest`](super::rest::ApiPullRequest).
///
/// # Examples
///
/// ```
/// use prshape::github::payload::decode_str;
/// use prshape::github::rest::ApiUser;
///
/// let user: ApiUser = decode_str(r#"{"login": "octocat", "type": "User"}"#)
///     .expect("user should decode");
/// assert_eq!(user.login.as_deref(), Some("octocat"));
/// ```
///
/// # Errors
///
/// Returns [`AdaptError::Deserialise`] when the JSON is malformed or a
/// required field has the wrong type.
pub fn decode_str<T: DeserializeOwned>(json: &str) -> Result<T, AdaptError> {
    serde_json::from_str(json).map_err(|error| deserialise_error::<T>(&error))
}

/// Decodes an already-parsed JSON value into a source shape.
///
/// # Errors
///
/// Returns [`AdaptError::Deserialise`] when the value does not match the
/// shape.
pub fn decode_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, AdaptError> {
    serde_json::from_value(value).map_err(|error| deserialise_error::<T>(&error))
}

fn deserialise_error<T>(error: &serde_json::Error) -> AdaptError {
    AdaptError::Deserialise {
        shape: short_type_name::<T>(),
        message: error.to_string(),
    }
}

/// Returns the type name of `T` with every module path stripped, so
/// `alloc::vec::Vec<prshape::github::rest::ApiUser>` becomes `Vec<ApiUser>`.
fn short_type_name<T>() -> String {
    let full = std::any::type_name::<T>();
    let mut short = String::with_capacity(full.len());
    let mut path_start = 0;
    for (index, delimiter) in full.match_indices(|c: char| !is_path_char(c)) {
        push_last_segment(&mut short, full.get(path_start..index).unwrap_or_default());
        short.push_str(delimiter);
        path_start = index + delimiter.len();
    }
    push_last_segment(&mut short, full.get(path_start..).unwrap_or_default());
    short
}

const fn is_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == ':'
}

fn push_last_segment(out: &mut String, path: &str) {
    out.push_str(path.rsplit("::").next().unwrap_or(path));
}

/// Treats an explicit JSON `null` the same as an absent field.
///
/// GitHub sends `null` for empty connections and collections in several
/// payloads; serde's `default` alone only covers missing keys.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::{decode_str, decode_value};
    use crate::github::error::AdaptError;
    use crate::github::graphql::{GqlConnection, GqlReviewThread};
    use crate::github::rest::{ApiPullRequest, ApiReviewComment, ApiUser};

    #[rstest]
    fn decode_value_reads_source_shape() {
        let user: ApiUser = decode_value(json!({ "login": "alice", "type": "Bot" }))
            .expect("user should decode");
        assert_eq!(user.account_type.as_deref(), Some("Bot"));
    }

    #[rstest]
    #[case::malformed_json("{ not json")]
    #[case::missing_number(r#"{"title": "no number"}"#)]
    fn decode_str_reports_shape_on_failure(#[case] json: &str) {
        let result = decode_str::<ApiPullRequest>(json);
        assert!(
            matches!(
                &result,
                Err(AdaptError::Deserialise { shape, .. }) if shape == "ApiPullRequest"
            ),
            "expected Deserialise error naming ApiPullRequest, got {result:?}"
        );
    }

    #[rstest]
    fn generic_shapes_keep_their_arguments() {
        let list = decode_str::<Vec<ApiReviewComment>>("nope");
        let page = decode_str::<GqlConnection<GqlReviewThread>>("nope");
        let pair = decode_str::<(ApiUser, Option<ApiUser>)>("nope");

        let shapes: Vec<_> = [list.err(), page.err(), pair.err()]
            .into_iter()
            .map(|error| match error {
                Some(AdaptError::Deserialise { shape, .. }) => shape,
                other => panic!("expected a decode error, got {other:?}"),
            })
            .collect();
        assert_eq!(
            shapes,
            vec![
                "Vec<ApiReviewComment>",
                "GqlConnection<GqlReviewThread>",
                "(ApiUser, Option<ApiUser>)",
            ]
        );
    }
}
