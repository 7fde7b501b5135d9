//! Configuration loading from disk and environment.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Overrides `database.url`.
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
/// Overrides `listener.bind_address`.
pub const ENV_BIND_ADDRESS: &str = "TRAVEL_BIND_ADDRESS";
/// Overrides `observability.log_level`.
pub const ENV_LOG_LEVEL: &str = "TRAVEL_LOG_LEVEL";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load, override and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: AppConfig = toml::from_str(&content)?;

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Defaults plus environment overrides, validated.
pub fn from_env() -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::default();

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load a `.env` file into the process environment.
///
/// With no `path`, `.env` is searched for from the working directory upward.
/// Variables already set in the environment are kept. A missing file is not
/// an error and yields `Ok(None)`.
pub fn load_dotenv(path: Option<&Path>) -> Result<Option<PathBuf>, dotenv::Error> {
    let loaded = match path {
        Some(path) => dotenv::from_path(path).map(|()| path.to_path_buf()),
        None => dotenv::dotenv(),
    };

    match loaded {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Apply environment overrides using `lookup` to read variables.
///
/// Empty values are ignored.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = get(ENV_DATABASE_URL) {
        config.database.url = Some(url);
    }
    if let Some(addr) = get(ENV_BIND_ADDRESS) {
        config.listener.bind_address = addr;
    }
    if let Some(level) = get(ENV_LOG_LEVEL) {
        config.observability.log_level = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [listener]
            bind_address = "127.0.0.1:8123"

            [cors]
            allowed_origins = ["https://app.example.com"]
            "#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:8123");
        assert_eq!(config.cors.allowed_origins, vec!["https://app.example.com"]);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[timeouts]\nrequest_secs = 0").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("timeouts.request_secs"));
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[listener\nbind_address = ").unwrap();

        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_example_config_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("travel-assistant.example.toml");
        let content = fs::read_to_string(path).unwrap();
        let config: AppConfig = toml::from_str(&content).unwrap();

        assert!(validate_config(&config).is_ok());
        assert_eq!(config.listener.bind_address, "0.0.0.0:8000");
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_dotenv_sets_missing_variables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(
            &path,
            "TRAVEL_DOTENV_LOADER_TEST=from-file\nTRAVEL_DOTENV_LOADER_KEEP=from-file\n",
        )
        .unwrap();
        std::env::set_var("TRAVEL_DOTENV_LOADER_KEEP", "from-process");

        let loaded = load_dotenv(Some(&path)).unwrap();

        assert_eq!(loaded.as_deref(), Some(path.as_path()));
        assert_eq!(
            std::env::var("TRAVEL_DOTENV_LOADER_TEST").as_deref(),
            Ok("from-file")
        );
        assert_eq!(
            std::env::var("TRAVEL_DOTENV_LOADER_KEEP").as_deref(),
            Ok("from-process")
        );
    }

    #[test]
    fn test_load_dotenv_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_dotenv(Some(&dir.path().join(".env"))).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_DATABASE_URL, "postgresql://user:pass@db:5432/travel"),
            (ENV_BIND_ADDRESS, "127.0.0.1:9999"),
            (ENV_LOG_LEVEL, ""),
        ]);

        let mut config = AppConfig::default();
        apply_env_overrides(&mut config, |key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(
            config.database.url.as_deref(),
            Some("postgresql://user:pass@db:5432/travel")
        );
        assert_eq!(config.listener.bind_address, "127.0.0.1:9999");
        assert_eq!(config.observability.log_level, "info");
    }
}
