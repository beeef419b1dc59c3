//! Label keys the way Cloud Monitoring accepts them.

use std::sync::LazyLock;

use regex::Regex;

/// Anything that is not a letter, a decimal digit or an underscore.
/// Letters outside ascii are accepted by the backend and left alone.
static FORBIDDEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{Nd}_]").expect("label character class must compile"));

const DIGIT_PREFIX: &str = "key_";

/// Convert an arbitrary attribute key into a legal label key.
///
/// Every forbidden character becomes `_`; nothing is dropped. A key that starts
/// with a digit is prefixed with `key_`. Normalizing an already-normalized key
/// returns it unchanged.
///
/// ```
/// use cloudmetrics::label::normalize_label_key;
/// assert_eq!("key_123", normalize_label_key("123"));
/// assert_eq!("hyphens_dots_slashes_", normalize_label_key("hyphens-dots.slashes/"));
/// ```
pub fn normalize_label_key(key: &str) -> String {
    let replaced = FORBIDDEN.replace_all(key, "_");
    match replaced.chars().next() {
        Some(first) if first.is_numeric() => format!("{DIGIT_PREFIX}{replaced}"),
        _ => replaced.into_owned(),
    }
}
