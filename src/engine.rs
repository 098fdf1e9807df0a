// src/engine.rs
use crate::cli::Args;
use crate::config;
use crate::normalize::{clean_urls, EXCLUDED_EXTENSIONS};
use crate::output::OutputManager;
use crate::session::Session;
use crate::sources::{create_source, get_all_sources, Source};
use crate::types::{Config, DomainReport, MiningStats, ParaMinerError};
use log::{error, info, warn};
use std::time::Instant;

pub struct ParaMinerEngine {
    config: Config,
    session: Session,
    sources: Vec<Box<dyn Source>>,
    output_manager: OutputManager,
    args: Args,
}

impl ParaMinerEngine {
    pub fn new(args: Args) -> Result<Self, ParaMinerError> {
        let mut config = if let Some(config_path_str) = args.config_path.as_deref() {
            config::load_config(config_path_str)?
        } else {
            Config::default()
        };

        // Command line arguments override the config file
        if let Some(proxy) = args.proxy.clone() {
            config.proxy = Some(proxy);
        }
        if let Some(output_file) = args.output_file.clone() {
            config.output.file = Some(output_file);
        }
        if args.verbose {
            config.output.verbose = true;
        }
        if args.json {
            config.output.format = crate::types::OutputFormat::Json;
        }

        let session = Session::new(&config)?;

        let mut sources = Vec::new();
        for name in &config.sources {
            if let Some(source) = create_source(name, &config) {
                sources.push(source);
            } else {
                warn!("Unknown source: {}", name);
            }
        }
        if sources.is_empty() {
            sources = get_all_sources(&config);
        }
        if sources.is_empty() {
            return Err(ParaMinerError::ConfigError(
                "No valid sources configured".to_string(),
            ));
        }

        let output_manager = OutputManager::new(config.output.clone());

        Ok(Self {
            config,
            session,
            sources,
            output_manager,
            args,
        })
    }

    pub fn args(&self) -> &Args {
        &self.args
    }

    /// Mine every domain in turn. One domain at a time, one source at a
    /// time; a failing domain is logged and the run moves on.
    pub async fn run(&mut self, domains: Vec<String>) -> Result<MiningStats, ParaMinerError> {
        if domains.is_empty() {
            return Err(ParaMinerError::ConfigError(
                "No domains provided".to_string(),
            ));
        }

        info!("Mining URLs for {} domain(s)", domains.len());
        let start_time = Instant::now();
        let mut total_records = 0;
        let mut unique_urls = 0;

        for domain in domains {
            match self.mine_domain(&domain).await {
                Ok(report) => {
                    total_records += report.stats.total_records;
                    unique_urls += report.stats.unique_urls;

                    // Stream mode already printed incrementally
                    if !self.args.stream {
                        self.output_manager.write_report(&report)?;
                    }

                    info!(
                        "Completed {}: {} URLs with parameters",
                        domain, report.stats.unique_urls
                    );
                }
                Err(e) => {
                    error!("Failed to mine {}: {}", domain, e);
                    if self.config.output.verbose {
                        eprintln!("Error details: {:?}", e);
                    }
                }
            }
        }

        Ok(MiningStats {
            total_records,
            unique_urls,
            sources_used: self.sources.iter().map(|s| s.name().to_string()).collect(),
            duration: start_time.elapsed(),
        })
    }

    pub async fn mine_domain(&self, domain: &str) -> Result<DomainReport, ParaMinerError> {
        if !crate::utils::is_valid_domain(domain) {
            return Err(ParaMinerError::InvalidDomain(domain.to_string()));
        }

        info!("Fetching archived URLs for: {}", domain);
        let start_time = Instant::now();

        let mut records = Vec::new();
        for source in &self.sources {
            match source.fetch_urls(domain, &self.session).await {
                Ok(urls) => {
                    info!("{}: {} records for {}", source.name(), urls.len(), domain);
                    records.extend(urls);
                }
                Err(e) => {
                    error!("{}: failed for {}: {}", source.name(), domain, e);
                }
            }
        }

        let total_records = records.len();
        let cleaned = clean_urls(&records, EXCLUDED_EXTENSIONS, &self.args.placeholder);

        // Only URLs that still carry a query string are worth fuzzing
        let mut urls: Vec<String> = cleaned.into_iter().filter(|u| u.contains('?')).collect();
        urls.sort();

        if self.args.stream {
            for url in &urls {
                println!("{}", url);
            }
        }

        let stats = MiningStats {
            total_records,
            unique_urls: urls.len(),
            sources_used: self.sources.iter().map(|s| s.name().to_string()).collect(),
            duration: start_time.elapsed(),
        };

        Ok(DomainReport {
            domain: domain.to_string(),
            urls,
            stats,
            timestamp: chrono::Utc::now().to_rfc3339(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn test_args() -> Args {
        Args::parse_from(["paraminer", "-d", "example.com"])
    }

    #[test]
    fn test_engine_builds_with_default_sources() {
        let engine = ParaMinerEngine::new(test_args()).unwrap();
        assert_eq!(engine.sources.len(), 1);
        assert_eq!(engine.sources[0].name(), "wayback");
    }

    #[tokio::test]
    async fn test_mine_domain_rejects_invalid_domain() {
        let engine = ParaMinerEngine::new(test_args()).unwrap();
        let result = engine.mine_domain("not a domain").await;
        assert!(matches!(result, Err(ParaMinerError::InvalidDomain(_))));
    }

    #[tokio::test]
    async fn test_run_rejects_empty_domain_list() {
        let mut engine = ParaMinerEngine::new(test_args()).unwrap();
        assert!(engine.run(Vec::new()).await.is_err());
    }
}
