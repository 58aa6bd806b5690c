//! Tests for configuration layer precedence.

use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::build_config_from_layers;

#[rstest]
#[case::file_overrides_defaults(
    vec![
        ("defaults", json!({"viewer_login": "default-user"})),
        ("file", json!({"viewer_login": "file-user"}))
    ],
    "file-user",
    "file should override default"
)]
#[case::environment_overrides_file(
    vec![
        ("file", json!({"viewer_login": "file-user"})),
        ("environment", json!({"viewer_login": "env-user"}))
    ],
    "env-user",
    "environment should override file"
)]
#[case::cli_overrides_environment(
    vec![
        ("environment", json!({"viewer_login": "env-user"})),
        ("cli", json!({"viewer_login": "cli-user"}))
    ],
    "cli-user",
    "CLI should override environment"
)]
fn viewer_login_follows_layer_precedence(
    #[case] layers: Vec<(&str, Value)>,
    #[case] expected: &str,
    #[case] message: &str,
) {
    let config = build_config_from_layers(&layers);

    assert_eq!(config.viewer_login.as_deref(), Some(expected), "{message}");
}

#[rstest]
fn enterprise_flag_loads_from_file() {
    let config = build_config_from_layers(&[("file", json!({"enterprise": true}))]);

    assert!(config.enterprise, "file layer should enable enterprise mode");
    assert!(config.viewer_login.is_none(), "viewer should stay unset");
}

#[rstest]
fn defaults_describe_anonymous_public_host() {
    let config = build_config_from_layers(&[("defaults", json!({"viewer_login": null}))]);

    assert!(config.viewer_login.is_none(), "viewer_login should be None");
    assert!(!config.enterprise, "enterprise should default to false");
}
