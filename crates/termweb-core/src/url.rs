//! URL scheme extraction and allow-list checks.
//!
//! Untrusted escape sequences can smuggle arbitrary URLs into links and
//! image sources, so emission is gated on an explicit scheme allow-list.

/// Schemes accepted by default for links and external images.
///
/// `artifact` is the scheme CI systems use for build-output references.
pub const DEFAULT_URL_SCHEMES: &[&str] = &["http", "https", "artifact"];

/// Extract the scheme of a URL, if it has a syntactically valid one.
///
/// Follows the RFC 3986 shape: a leading ASCII letter, then letters,
/// digits, `+`, `-` or `.`, terminated by `:`. Relative URLs have no
/// scheme and return `None`.
#[must_use]
pub fn url_scheme(url: &str) -> Option<&str> {
    let scheme = &url[..url.find(':')?];
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        Some(scheme)
    } else {
        None
    }
}

/// True iff the URL's scheme is on the allow-list (case-insensitive).
///
/// Schemeless (relative) URLs are rejected: an attacker-controlled
/// relative reference is indistinguishable from a path traversal.
#[must_use]
pub fn scheme_allowed(url: &str, allowed: &[String]) -> bool {
    let Some(scheme) = url_scheme(url) else {
        return false;
    };
    allowed.iter().any(|a| a.eq_ignore_ascii_case(scheme))
}
