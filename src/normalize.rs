// src/normalize.rs
use log::debug;
use std::collections::HashSet;
use url::Url;

/// Static-asset extensions that are never worth fuzzing.
pub const EXCLUDED_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".pdf", ".svg", ".json", ".css", ".js", ".webp", ".woff",
    ".woff2", ".eot", ".ttf", ".otf", ".mp4", ".txt",
];

/// Check whether the URL's path ends in one of the given extensions
/// (case-insensitive). A final segment without a dot, or a dotfile,
/// has no extension and is never matched.
pub fn has_extension(url: &Url, extensions: &[&str]) -> bool {
    let segment = url.path().rsplit('/').next().unwrap_or("");
    match segment.rfind('.') {
        Some(idx) if idx > 0 => {
            let ext = segment[idx..].to_ascii_lowercase();
            extensions.iter().any(|e| *e == ext)
        }
        _ => false,
    }
}

/// Parse a raw URL record and produce its canonical form, the string
/// used as the deduplication key.
///
/// Default ports are elided (http:80, https:443), repeated query
/// parameters collapse into a single comma-joined value keeping
/// first-appearance order, and blank values are discarded. Returns
/// `None` for records that do not parse as URLs.
pub fn canonicalize(raw: &str) -> Option<Url> {
    let mut url = Url::parse(raw).ok()?;

    // The parser already drops default ports; keep the invariant explicit
    // for any Url constructed some other way.
    if let Some(port) = url.port() {
        let is_default =
            (url.scheme() == "http" && port == 80) || (url.scheme() == "https" && port == 443);
        if is_default {
            url.set_port(None).ok();
        }
    }

    // Group values under their parameter name, first-appearance order.
    let mut params: Vec<(String, Vec<String>)> = Vec::new();
    for (name, value) in url.query_pairs() {
        if value.is_empty() {
            continue;
        }
        match params.iter_mut().find(|(n, _)| *n == name) {
            Some((_, values)) => values.push(value.into_owned()),
            None => params.push((name.into_owned(), vec![value.into_owned()])),
        }
    }

    if params.is_empty() {
        url.set_query(None);
    } else {
        let rebuilt = params
            .iter()
            .map(|(name, values)| format!("{}={}", name, values.join(",")))
            .collect::<Vec<_>>()
            .join("&");
        url.set_query(Some(&rebuilt));
    }

    Some(url)
}

/// Canonicalize a batch of raw URL records, dropping static assets and
/// duplicates. Records that fail to parse are skipped. The placeholder
/// is reserved for parameter fuzzing and not applied at this stage.
pub fn clean_urls(urls: &[String], extensions: &[&str], _placeholder: &str) -> Vec<String> {
    let mut cleaned = HashSet::new();
    let mut dropped = 0usize;

    for raw in urls {
        let Some(url) = canonicalize(raw) else {
            dropped += 1;
            continue;
        };
        if has_extension(&url, extensions) {
            continue;
        }
        cleaned.insert(url.to_string());
    }

    if dropped > 0 {
        debug!("Dropped {} unparseable records", dropped);
    }

    cleaned.into_iter().collect()
}
