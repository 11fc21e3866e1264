//! Endpoint resolution demo
//!
//! Loads a provider configuration file, resolves endpoints against the
//! built-in service registry and prints the decisions.
//!
//! Run with `RUST_LOG=debug` to see every resolved service.

use endpoint_config::{ConfigError, ConfigResult, EndpointResolver, SourcesLoader};
use endpoint_names::default_alias_table;
use std::fs;
use tempfile::TempDir;

fn main() -> ConfigResult<()> {
    env_logger::init();

    println!("Endpoint Resolution Demo");

    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("provider.yaml");
    let config_content = r#"
endpoints:
  - sts: "https://sts.localstack.test"
    transcribeservice: "https://transcribe.localstack.test"
shared_config:
  base_url: "https://localstack.test"
"#;

    fs::write(&config_path, config_content).map_err(ConfigError::FileReadError)?;

    let table = default_alias_table()?;
    let sources = SourcesLoader::new(table).from_file(&config_path)?;
    let result = EndpointResolver::new(table).resolve(&sources);

    println!("Resolved {} of {} services", result.len(), table.len());
    for service in table.services() {
        if let Some(resolved) = result.resolved(service.key().as_str()) {
            println!("   {:<16} {} ({})", service.key(), resolved.url, resolved.source);
        }
    }

    for diagnostic in result.diagnostics() {
        println!("{}", diagnostic);
    }

    Ok(())
}
