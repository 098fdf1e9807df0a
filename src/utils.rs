// src/utils.rs
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Reads lines from a file into a vector of strings.
pub fn read_lines(path: &PathBuf) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    reader.lines().collect()
}

/// Load a domain list file: one domain per line, lowercased, scheme
/// prefixes stripped, blanks and duplicates removed. Order is not
/// preserved.
pub fn load_domain_list(path: &PathBuf) -> io::Result<Vec<String>> {
    let lines = read_lines(path)?;

    let domains: HashSet<String> = lines
        .iter()
        .map(|line| normalize_domain(line))
        .filter(|domain| !domain.is_empty())
        .collect();

    Ok(domains.into_iter().collect())
}

/// Lowercase a domain entry and strip any scheme prefix.
pub fn normalize_domain(entry: &str) -> String {
    let entry = entry.trim().to_lowercase();
    entry
        .strip_prefix("https://")
        .or_else(|| entry.strip_prefix("http://"))
        .unwrap_or(&entry)
        .to_string()
}

/// Check if a string is a valid domain
pub fn is_valid_domain(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > 253 {
        return false;
    }

    let parts: Vec<&str> = domain.split('.').collect();
    if parts.len() < 2 {
        return false;
    }

    for part in parts {
        if part.is_empty() || part.len() > 63 {
            return false;
        }

        if !part.chars().all(|c| c.is_alphanumeric() || c == '-') {
            return false;
        }

        if part.starts_with('-') || part.ends_with('-') {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_normalize_domain() {
        assert_eq!(normalize_domain("HTTPS://Example.com"), "example.com");
        assert_eq!(normalize_domain("http://example.com"), "example.com");
        assert_eq!(normalize_domain("  example.com  "), "example.com");
        assert_eq!(normalize_domain(""), "");
    }

    #[test]
    fn test_load_domain_list() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "HTTPS://Example.com").unwrap();
        writeln!(file, "example.com").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "http://example.com").unwrap();

        let domains = load_domain_list(&file.path().to_path_buf()).unwrap();
        assert_eq!(domains, vec!["example.com".to_string()]);
    }

    #[test]
    fn test_is_valid_domain() {
        assert!(is_valid_domain("example.com"));
        assert!(is_valid_domain("sub.example.com"));
        assert!(!is_valid_domain("example"));
        assert!(!is_valid_domain(""));
        assert!(!is_valid_domain("-example.com"));
        assert!(!is_valid_domain("example-.com"));
    }
}
