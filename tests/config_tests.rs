//! Configuration loading tests

use dbt_mcp_server::config::{load_config, load_config_from_str};
use dbt_mcp_server::error::ConfigError;
use serial_test::serial;

const MINIMAL_CONFIG: &str = r#"
[server]
name = "test-server"
version = "1.0.0"
"#;

const FULL_CONFIG: &str = r#"
[server]
name = "dbt-mcp-test"
version = "0.1.0"
instructions = "Query dbt project metadata"

[dbt]
project_dir = "/srv/analytics"
profiles_dir = "/etc/dbt"
target = "prod"
command_timeout_secs = 120

[logging]
level = "debug"
json = true
"#;

#[test]
fn test_minimal_config() {
    let config = load_config_from_str(MINIMAL_CONFIG).unwrap();

    assert_eq!(config.server.name, "test-server");
    assert_eq!(config.server.version, "1.0.0");
    assert!(config.server.instructions.is_none());
    // Everything else defaulted
    assert_eq!(config.dbt.project_dir, ".");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_full_config() {
    let config = load_config_from_str(FULL_CONFIG).unwrap();

    assert_eq!(config.server.name, "dbt-mcp-test");
    assert_eq!(
        config.server.instructions.as_deref(),
        Some("Query dbt project metadata")
    );
    assert_eq!(config.dbt.project_dir, "/srv/analytics");
    assert_eq!(config.dbt.profiles_dir, "/etc/dbt");
    assert_eq!(config.dbt.target.as_deref(), Some("prod"));
    assert_eq!(config.dbt.command_timeout_secs, 120);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
}

#[test]
fn test_validation_rejects_empty_project_dir() {
    let toml = r#"
[dbt]
project_dir = ""
"#;

    let result = load_config_from_str(toml);
    assert!(
        matches!(result, Err(ConfigError::Missing { ref field }) if field == "dbt.project_dir")
    );
}

#[test]
#[serial]
fn test_load_config_reads_file_from_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("dbt-mcp.toml"),
        r#"
[server]
name = "from-file"
"#,
    )
    .unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = load_config();
    std::env::set_current_dir(original).unwrap();

    assert_eq!(result.unwrap().server.name, "from-file");
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("dbt-mcp.toml"),
        r#"
[server]
name = "from-file"
"#,
    )
    .unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    unsafe { std::env::set_var("DBT_MCP_SERVER__NAME", "from-env") };
    let result = load_config();
    unsafe { std::env::remove_var("DBT_MCP_SERVER__NAME") };
    std::env::set_current_dir(original).unwrap();

    assert_eq!(result.unwrap().server.name, "from-env");
}

#[test]
#[serial]
fn test_load_config_without_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = load_config();
    std::env::set_current_dir(original).unwrap();

    assert_eq!(result.unwrap().server.name, "dbt-mcp-server");
}
