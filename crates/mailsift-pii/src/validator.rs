//! Syntactic domain/URL validation

use once_cell::sync::Lazy;
use regex::Regex;

/// Accepts an optional http/https scheme, an optional `www.` prefix, one or
/// more dot-separated alphanumeric/hyphen labels, a 2-63 letter top-level
/// label, and an optional path/query/fragment suffix over the RFC 3986
/// character set.
static DOMAIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(https?://)?(www\.)?([A-Za-z0-9-]+\.)+[A-Za-z]{2,63}(/[A-Za-z0-9\-._~:/?#\[\]@!$&'()*+,;=]*)?$",
    )
    .unwrap()
});

/// Check whether the input looks like a domain or HTTP(S) URL.
///
/// Purely syntactic: no DNS resolution, no reachability check, no TLD
/// registry lookup. Non-HTTP schemes (e.g. `ftp://`) are rejected.
pub fn is_valid_domain(input: &str) -> bool {
    DOMAIN_REGEX.is_match(input)
}
