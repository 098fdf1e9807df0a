use anyhow::Result;
use clap::Parser;
use log::{error, info};
use std::process;

mod cli;
mod config;
mod engine;
mod normalize;
mod output;
mod session;
mod sources;
mod types;
mod utils;

use cli::Args;
use engine::ParaMinerEngine;
use types::Config;

const BANNER: &str = r#"    ____                  __  ___
   / __ \____ __________ /  |/  (_)___  ___  _____
  / /_/ / __ `/ ___/ __ `/ /|_/ / / __ \/ _ \/ ___/
 / ____/ /_/ / /  / /_/ / /  / / / / / /  __/ /
/_/    \__,_/_/   \__,_/_/  /_/_/_/ /_/\___/_/

     Mining URLs from the dark corners of Web Archives
"#;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    if !args.silent {
        println!("{}", BANNER);
    }

    if args.list_sources {
        list_sources();
        return Ok(());
    }

    if args.domain.is_some() && args.domains_file.is_some() {
        error!("Please provide either -d/--domain or -l/--list, not both");
        process::exit(1);
    }
    if args.domain.is_none() && args.domains_file.is_none() {
        error!("No input provided. Use -d <domain> or -l <file>");
        process::exit(1);
    }

    let domains = get_domains_from_args(&args)?;
    if domains.is_empty() {
        error!("No domains found in input");
        process::exit(1);
    }

    let mut engine = ParaMinerEngine::new(args)
        .map_err(|e| anyhow::anyhow!("Failed to initialize engine: {}", e))?;

    let stats = engine
        .run(domains)
        .await
        .map_err(|e| anyhow::anyhow!("Mining failed: {}", e))?;

    if !engine.args().silent {
        info!(
            "Mining completed: {} parameterized URLs from {} records in {:.2}s",
            stats.unique_urls,
            stats.total_records,
            stats.duration.as_secs_f64()
        );
    }

    Ok(())
}

fn list_sources() {
    println!("Available sources:\n");

    let config = Config::default();
    for source in sources::get_all_sources(&config) {
        let info = source.info();
        let marker = if info.needs_key { " *" } else { "" };
        let default = if info.is_default { " (default)" } else { "" };
        println!("  {}{}{}", info.name, marker, default);
    }

    println!("\n* = Requires API key");
}

fn get_domains_from_args(args: &Args) -> Result<Vec<String>> {
    if let Some(domain) = &args.domain {
        return Ok(vec![utils::normalize_domain(domain)]);
    }

    match &args.domains_file {
        Some(file_path) => utils::load_domain_list(file_path).map_err(|e| {
            anyhow::anyhow!("Failed to read domains from file {:?}: {}", file_path, e)
        }),
        None => Ok(Vec::new()),
    }
}
