// src/types.rs
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub timeout: Duration,
    pub user_agent: String,
    pub proxy: Option<String>,
    pub output: OutputConfig,
    pub sources: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // The archive index can take a while on large domains
            timeout: Duration::from_secs(60),
            user_agent: "ParaMiner/1.0".to_string(),
            proxy: None,
            output: OutputConfig::default(),
            sources: vec!["wayback".to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub file: Option<String>,
    pub verbose: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            file: None,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiningStats {
    pub total_records: usize,
    pub unique_urls: usize,
    pub sources_used: Vec<String>,
    pub duration: Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainReport {
    pub domain: String,
    pub urls: Vec<String>,
    pub stats: MiningStats,
    pub timestamp: String,
}

pub struct SourceInfo {
    pub name: String,
    pub needs_key: bool,
    pub is_default: bool,
}

#[derive(Debug, Error)]
pub enum ParaMinerError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Source error in {source_name}: {message}")]
    SourceError {
        source_name: String,
        message: String,
    },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("Invalid domain: {0}")]
    InvalidDomain(String),
}
