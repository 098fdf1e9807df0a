// src/sources/mod.rs
use crate::session::Session;
use crate::types::{Config, ParaMinerError, SourceInfo};
use async_trait::async_trait;

mod wayback;

pub use wayback::WaybackSource;

/// A passive URL source: given a domain, return every raw URL record it
/// knows about. Records are opaque strings at this layer; the engine
/// normalizes them afterwards.
#[async_trait]
pub trait Source: Send + Sync {
    fn name(&self) -> &str;
    fn info(&self) -> SourceInfo;
    async fn fetch_urls(
        &self,
        domain: &str,
        session: &Session,
    ) -> Result<Vec<String>, ParaMinerError>;
    fn clone_source(&self) -> Box<dyn Source>;
}

pub fn create_source(name: &str, _config: &Config) -> Option<Box<dyn Source>> {
    match name.to_lowercase().as_str() {
        "wayback" => Some(Box::new(WaybackSource::new())),
        _ => None,
    }
}

pub fn get_all_sources(config: &Config) -> Vec<Box<dyn Source>> {
    vec!["wayback"]
        .into_iter()
        .filter_map(|name| create_source(name, config))
        .collect()
}
