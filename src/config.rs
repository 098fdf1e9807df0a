// src/config.rs
use crate::types::{Config, ParaMinerError};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub fn load_config(config_path_str: &str) -> Result<Config, ParaMinerError> {
    let mut config = Config::default();

    if Path::new(config_path_str).exists() {
        let contents = fs::read_to_string(config_path_str)
            .map_err(|e| ParaMinerError::ConfigError(format!("Failed to read config file: {}", e)))?;

        let toml_config: toml::Value = toml::from_str(&contents)
            .map_err(|e| ParaMinerError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        if let Some(table) = toml_config.as_table() {
            if let Some(timeout) = table.get("timeout_secs").and_then(|v| v.as_integer()) {
                config.timeout = Duration::from_secs(timeout as u64);
            }
            if let Some(user_agent) = table.get("user_agent").and_then(|v| v.as_str()) {
                config.user_agent = user_agent.to_string();
            }
            if let Some(proxy) = table.get("proxy").and_then(|v| v.as_str()) {
                config.proxy = Some(proxy.to_string());
            }
            if let Some(sources) = table.get("sources").and_then(|v| v.as_array()) {
                config.sources = sources
                    .iter()
                    .filter_map(|v| v.as_str().map(|s| s.to_string()))
                    .collect();
            }
        }
    }

    apply_env_overrides(&mut config)?;
    validate_config(&config)?;

    Ok(config)
}

fn apply_env_overrides(config: &mut Config) -> Result<(), ParaMinerError> {
    if let Ok(proxy) = env::var("PARAMINER_PROXY") {
        config.proxy = Some(proxy);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<(), ParaMinerError> {
    if config.timeout.as_secs() == 0 {
        return Err(ParaMinerError::ConfigError(
            "Timeout must be greater than 0".to_string(),
        ));
    }
    if config.sources.is_empty() {
        return Err(ParaMinerError::ConfigError(
            "At least one source must be configured".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_missing_file_uses_defaults() {
        let config = load_config("/nonexistent/paraminer.toml").unwrap();
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.sources, vec!["wayback".to_string()]);
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs = 15").unwrap();
        writeln!(file, "user_agent = \"test-agent\"").unwrap();
        writeln!(file, "proxy = \"socks5://127.0.0.1:9050\"").unwrap();

        let config = load_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.proxy.as_deref(), Some("socks5://127.0.0.1:9050"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs = 0").unwrap();

        assert!(load_config(file.path().to_str().unwrap()).is_err());
    }
}
