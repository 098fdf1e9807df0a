use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "paraminer",
    about = "Mine URLs with query parameters from web archives",
    long_about = "ParaMiner queries the Wayback Machine's historical URL index for a domain,\nnormalizes and deduplicates the results, and prints the URLs that carry\nquery strings, ready for parameter fuzzing."
)]
pub struct Args {
    /// Domain name to fetch related URLs for
    #[arg(short = 'd', long = "domain", value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// File containing a list of domain names
    #[arg(short = 'l', long = "list", value_name = "FILE")]
    pub domains_file: Option<PathBuf>,

    /// Stream URLs to the terminal as each domain completes
    #[arg(short = 's', long = "stream")]
    pub stream: bool,

    /// Proxy address for web requests
    #[arg(long = "proxy", value_name = "ADDRESS")]
    pub proxy: Option<String>,

    /// Placeholder for parameter values
    #[arg(short = 'p', long = "placeholder", default_value = "FUZZ")]
    pub placeholder: String,

    /// Output file
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_file: Option<String>,

    /// Output in JSON format
    #[arg(long = "json")]
    pub json: bool,

    /// Silent mode (only output URLs)
    #[arg(long = "silent")]
    pub silent: bool,

    /// Verbose mode
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// List all available sources
    #[arg(long = "list-sources")]
    pub list_sources: bool,

    /// Configuration file path
    #[arg(short = 'c', long = "config")]
    pub config_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_defaults_to_fuzz() {
        let args = Args::parse_from(["paraminer", "-d", "example.com"]);
        assert_eq!(args.placeholder, "FUZZ");
        assert!(!args.stream);
    }

    #[test]
    fn test_domain_and_list_both_parse() {
        let args = Args::parse_from(["paraminer", "-l", "domains.txt", "--proxy", "socks5://127.0.0.1:9050"]);
        assert!(args.domain.is_none());
        assert_eq!(args.domains_file, Some(PathBuf::from("domains.txt")));
        assert_eq!(args.proxy.as_deref(), Some("socks5://127.0.0.1:9050"));
    }
}
