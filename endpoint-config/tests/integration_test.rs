//! Integration tests for endpoint-config

use endpoint_config::*;
use endpoint_names::default_alias_table;
use serde_json::{json, Map, Value};
use std::fs;
use temp_env::with_vars;

/// Endpoints block declaring every known key, mostly empty, the way the host
/// framework hands it over
fn endpoints_block(set: &[(&str, &str)]) -> Value {
    let table = default_alias_table().unwrap();
    let mut endpoints = Map::new();
    for key in table.all_keys() {
        endpoints.insert(key.to_string(), Value::String(String::new()));
    }
    for (key, url) in set {
        endpoints.insert(key.to_string(), Value::String(url.to_string()));
    }
    json!({ "endpoints": [Value::Object(endpoints)] })
}

fn resolve(set: &[(&str, &str)], env: &[(&str, &str)]) -> ResolutionResult {
    let table = default_alias_table().unwrap();
    let sources = SourcesLoader::new(table)
        .with_environment(env.iter().copied().collect())
        .from_value(&endpoints_block(set))
        .unwrap();
    EndpointResolver::new(table).resolve(&sources)
}

#[test]
fn test_expand_endpoints() {
    let result = resolve(&[("sts", "https://sts.fake.test")], &[]);

    assert!(result.diagnostics().is_empty());
    assert_eq!(result.len(), 1);
    assert_eq!(result.endpoint("sts"), Some("https://sts.fake.test"));
}

#[test]
fn test_endpoint_multiple_keys() {
    let cases: [(&[(&str, &str)], &str); 3] = [
        (&[("transcribe", "https://transcribe.fake.test")], "https://transcribe.fake.test"),
        (&[("transcribeservice", "https://transcribe.fake.test")], "https://transcribe.fake.test"),
        (
            &[
                ("transcribe", "https://transcribe.fake.test"),
                ("transcribeservice", "https://transcribeservice.fake.test"),
            ],
            "https://transcribe.fake.test",
        ),
    ];

    for (endpoints, expected) in cases {
        let result = resolve(endpoints, &[]);
        assert!(result.diagnostics().is_empty());
        assert_eq!(result.len(), 1);
        assert_eq!(result.endpoint("transcribe"), Some(expected));
    }
}

#[test]
fn test_endpoint_env_var_precedence() {
    let current = Diagnostic::deprecated_env_var("TF_AWS_STS_ENDPOINT", "AWS_ENDPOINT_URL_STS");
    let legacy = Diagnostic::deprecated_env_var("AWS_STS_ENDPOINT", "AWS_ENDPOINT_URL_STS");

    struct Case<'a> {
        endpoints: &'a [(&'a str, &'a str)],
        envvars: &'a [(&'a str, &'a str)],
        expected_endpoint: &'a str,
        expected_diags: Vec<Diagnostic>,
    }

    let cases = [
        Case {
            endpoints: &[],
            envvars: &[("AWS_ENDPOINT_URL_STS", "https://sts.fake.test")],
            expected_endpoint: "https://sts.fake.test",
            expected_diags: vec![],
        },
        Case {
            endpoints: &[],
            envvars: &[("TF_AWS_STS_ENDPOINT", "https://sts.fake.test")],
            expected_endpoint: "https://sts.fake.test",
            expected_diags: vec![current.clone()],
        },
        Case {
            endpoints: &[],
            envvars: &[("AWS_STS_ENDPOINT", "https://sts-deprecated.fake.test")],
            expected_endpoint: "https://sts-deprecated.fake.test",
            expected_diags: vec![legacy],
        },
        Case {
            endpoints: &[],
            envvars: &[
                ("TF_AWS_STS_ENDPOINT", "https://sts.fake.test"),
                ("AWS_STS_ENDPOINT", "https://sts-deprecated.fake.test"),
            ],
            expected_endpoint: "https://sts.fake.test",
            expected_diags: vec![current],
        },
        Case {
            endpoints: &[("sts", "https://sts-config.fake.test")],
            envvars: &[("TF_AWS_STS_ENDPOINT", "https://sts-env.fake.test")],
            expected_endpoint: "https://sts-config.fake.test",
            expected_diags: vec![],
        },
    ];

    for case in cases {
        let result = resolve(case.endpoints, case.envvars);
        assert_eq!(result.diagnostics().as_slice(), case.expected_diags.as_slice());
        assert_eq!(result.len(), 1);
        assert_eq!(result.endpoint("sts"), Some(case.expected_endpoint));
    }
}

#[test]
fn test_current_and_deprecated_set_yields_no_warning() {
    let result = resolve(
        &[],
        &[
            ("AWS_ENDPOINT_URL_S3", "https://s3-current"),
            ("AWS_S3_ENDPOINT", "https://s3-legacy"),
        ],
    );
    assert_eq!(result.endpoint("s3"), Some("https://s3-current"));
    assert!(result
        .diagnostics()
        .iter()
        .all(|d| !d.detail.contains("AWS_S3_ENDPOINT")));
}

#[test]
fn test_one_warning_per_deprecated_variable() {
    let result = resolve(
        &[],
        &[
            ("TF_AWS_STS_ENDPOINT", "https://sts"),
            ("AWS_IAM_ENDPOINT", "https://iam"),
            ("TF_AWS_DYNAMODB_ENDPOINT", "https://dynamodb"),
        ],
    );
    assert_eq!(result.len(), 3);
    assert_eq!(result.diagnostics().len(), 3);
    assert!(result
        .diagnostics()
        .iter()
        .all(|d| d.severity == Severity::Warning));

    let names: Vec<&str> = result.diagnostics().deprecated_env_vars().collect();
    assert_eq!(
        names,
        vec!["AWS_IAM_ENDPOINT", "TF_AWS_DYNAMODB_ENDPOINT", "TF_AWS_STS_ENDPOINT"]
    );
    // Diagnostics follow canonical key order
    assert!(result.diagnostics().as_slice()[0]
        .detail
        .contains("TF_AWS_DYNAMODB_ENDPOINT"));
}

#[test]
fn test_shared_deprecated_variable_warns_once() {
    let table = AliasTable::new([
        ServiceDefinition::new("sqs").with_deprecated_env_var("AWS_QUEUE_ENDPOINT"),
        ServiceDefinition::new("sns").with_deprecated_env_var("AWS_QUEUE_ENDPOINT"),
    ])
    .unwrap();
    let sources = ConfigurationSources::default().with_environment(
        EnvironmentView::new().with_var("AWS_QUEUE_ENDPOINT", "https://queue"),
    );

    let result = EndpointResolver::new(&table).resolve(&sources);
    assert_eq!(result.endpoint("sqs"), Some("https://queue"));
    assert_eq!(result.endpoint("sns"), Some("https://queue"));
    assert_eq!(result.diagnostics().len(), 1);
}

#[test]
fn test_unknown_explicit_keys_are_ignored() {
    let result = resolve(&[("notaservice", "https://nowhere")], &[]);
    assert!(result.is_empty());
    assert!(result.diagnostics().is_empty());
}

#[test]
fn test_malformed_values_pass_through() {
    let result = resolve(&[("sts", "not a url")], &[]);
    assert_eq!(result.endpoint("sts"), Some("not a url"));
}

#[test]
fn test_resolve_from_process_environment() {
    let vars = vec![
        ("AWS_ENDPOINT_URL_STS", None),
        ("TF_AWS_STS_ENDPOINT", Some("https://sts-old.fake.test")),
        ("AWS_STS_ENDPOINT", None),
        ("AWS_ENDPOINT_URL", None),
        ("AWS_IGNORE_CONFIGURED_ENDPOINT_URLS", None),
    ];

    with_vars(vars, || {
        let table = default_alias_table().unwrap();
        let sources = SourcesLoader::new(table).from_env();
        let result = resolve_endpoints(&sources).unwrap();

        assert_eq!(result.endpoint("sts"), Some("https://sts-old.fake.test"));
        assert_eq!(
            result.source("sts"),
            Some(&EndpointSource::TfAwsEnvVar {
                name: "TF_AWS_STS_ENDPOINT".to_string()
            })
        );
        assert!(result.diagnostics().as_slice().contains(&Diagnostic::deprecated_env_var(
            "TF_AWS_STS_ENDPOINT",
            "AWS_ENDPOINT_URL_STS"
        )));
    });
}

#[test]
fn test_loader_from_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("provider.yaml");
    let config_content = r#"
region: us-west-2
endpoints:
  - transcribeservice: "https://transcribe.fake.test"
    sts: ""
shared_config:
  base_url: "https://file-base.fake.test"
  services:
    iam: "https://iam-file.fake.test"
"#;
    fs::write(&config_path, config_content).unwrap();

    let table = default_alias_table().unwrap();
    let sources = SourcesLoader::new(table)
        .with_environment(EnvironmentView::new())
        .load(Some(&config_path))
        .unwrap();
    let result = EndpointResolver::new(table).resolve(&sources);

    assert_eq!(result.endpoint("transcribe"), Some("https://transcribe.fake.test"));
    assert_eq!(result.endpoint("iam"), Some("https://iam-file.fake.test"));
    assert_eq!(result.endpoint("sts"), Some("https://file-base.fake.test"));
    assert_eq!(result.source("sts"), Some(&EndpointSource::ConfigFileBase));
    assert_eq!(result.len(), table.len());
}

#[test]
fn test_loader_missing_file() {
    let table = default_alias_table().unwrap();
    let result = SourcesLoader::new(table).from_file("/nonexistent/provider.yaml");
    assert!(matches!(result, Err(ConfigError::FileReadError(_))));
}

#[test]
fn test_loader_invalid_yaml() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("provider.yaml");
    fs::write(&config_path, "endpoints: [unterminated").unwrap();

    let table = default_alias_table().unwrap();
    let result = SourcesLoader::new(table).from_file(&config_path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn test_loader_rejects_multiple_endpoint_blocks() {
    let table = default_alias_table().unwrap();
    let result = SourcesLoader::new(table)
        .with_environment(EnvironmentView::new())
        .from_value(&json!({ "endpoints": [{ "sts": "a" }, { "iam": "b" }] }));
    assert!(matches!(result, Err(ConfigError::InvalidEndpointsBlock(_))));
}

#[test]
fn test_load_without_path_uses_environment() {
    let table = default_alias_table().unwrap();
    let sources = SourcesLoader::new(table)
        .with_environment(EnvironmentView::new().with_var("AWS_ENDPOINT_URL_KMS", "https://kms"))
        .load(None::<&str>)
        .unwrap();
    let result = EndpointResolver::new(table).resolve(&sources);
    assert_eq!(result.endpoints().into_iter().collect::<Vec<_>>(), vec![("kms", "https://kms")]);
}
