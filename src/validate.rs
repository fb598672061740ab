//! Entry field checks.
//!
//! All checks are syntactic: nothing here resolves hosts or fetches URLs.

use crate::model::CHANGE_FREQUENCIES;
use url::Url;

/// Base used to resolve origin-form locations such as `/about`.
const PATH_BASE: &str = "http://localhost/";

/// Check that `s` is a usable request URI.
///
/// Accepts absolute URIs (`https://example.com/a?b=c`) and absolute paths
/// (`/about`). Rejects empty strings, whitespace, control characters,
/// malformed percent-escapes (`%zz`) and relative references like
/// `http//example.com` or `about`.
///
/// `url::Url` trims and repairs some of these on its own, so they are
/// checked on the raw string first.
pub fn is_valid_url(s: &str) -> bool {
    if s.is_empty()
        || s.chars().any(|c| c.is_ascii_control() || c.is_ascii_whitespace())
        || !has_valid_percent_escapes(s)
    {
        return false;
    }

    if s.starts_with('/') {
        Url::parse(PATH_BASE).and_then(|base| base.join(s)).is_ok()
    } else {
        Url::parse(s).is_ok()
    }
}

/// Every `%` must start a `%XX` escape with two hex digits.
fn has_valid_percent_escapes(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.iter().enumerate().all(|(i, &b)| {
        b != b'%'
            || bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
    })
}

/// Exact, case-sensitive match against the protocol values.
pub fn is_valid_change_frequency(s: &str) -> bool {
    CHANGE_FREQUENCIES.contains(&s)
}

/// Priority within `0.0..=1.0`. `NaN` is rejected.
pub fn is_valid_priority(priority: f64) -> bool {
    (0.0..=1.0).contains(&priority)
}
