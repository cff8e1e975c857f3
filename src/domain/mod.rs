//! Domain extraction utilities.
//!
//! This module reduces URLs to their registrable domain using the Public
//! Suffix List (PSL), so that `www.news.example.co.uk` and `example.co.uk`
//! share one key in the robots cache.

use psl::{Psl, Type};

/// Extracts the registrable domain from a URL.
///
/// # Arguments
///
/// * `extractor` - The Public Suffix List instance
/// * `url` - The URL to extract the domain from
///
/// # Returns
///
/// The registrable domain (e.g., "example.co.uk" from
/// "https://www.news.example.co.uk/path"). Never fails; degrades instead:
///
/// - IP literals are returned unchanged
/// - a host under an unlisted suffix keeps only its last label
/// - a bare public suffix (`co.uk`) is returned as-is
/// - a URL without a host yields an empty string
///
/// Only ICANN suffixes count; private registrations such as `github.io` are
/// treated as ordinary domains.
pub fn registrable_domain(extractor: &psl::List, url: &str) -> String {
    let parsed = match url::Url::parse(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::debug!("Cannot resolve domain of '{url}': {e}");
            return String::new();
        }
    };

    match parsed.host() {
        Some(url::Host::Domain(host)) => host_domain(extractor, &host.to_lowercase()),
        Some(url::Host::Ipv4(ip)) => ip.to_string(),
        Some(url::Host::Ipv6(ip)) => ip.to_string(),
        None => String::new(),
    }
}

fn host_domain(extractor: &psl::List, host: &str) -> String {
    let host = host.trim_end_matches('.');
    if let Some(domain) = icann_domain(extractor, host) {
        return domain;
    }

    // No registrable domain: either the host is itself a suffix or its TLD is unlisted
    match extractor.suffix(host.as_bytes()) {
        Some(suffix) if suffix.is_known() => host.to_string(),
        _ => host.rsplit('.').next().unwrap_or_default().to_string(),
    }
}

/// Registrable domain under ICANN rules only.
///
/// When the matched suffix is a private registration, the ICANN registrable
/// domain lies inside that suffix, so resolve the suffix itself.
fn icann_domain(extractor: &psl::List, host: &str) -> Option<String> {
    let domain = extractor.domain(host.as_bytes())?;
    if !domain.suffix().is_known() {
        return None;
    }
    if domain.suffix().typ() == Some(Type::Private) {
        let suffix = String::from_utf8_lossy(domain.suffix().as_bytes()).into_owned();
        return icann_domain(extractor, &suffix).or(Some(suffix));
    }
    Some(String::from_utf8_lossy(domain.as_bytes()).into_owned())
}
