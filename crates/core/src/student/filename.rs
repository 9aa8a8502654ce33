//! Photo filename generation.

use unicode_normalization::UnicodeNormalization;
use uuid::Uuid;

/// Sanitize an uploaded filename so it is safe to use as a storage key.
///
/// Accented letters are folded to their ASCII base, path separators and
/// whitespace runs become `_`, anything outside ASCII
/// alphanumerics, `.`, `-` and `_` is dropped, and leading or trailing `.`
/// and `_` are trimmed. The result may be empty.
#[must_use]
pub fn sanitize_filename(filename: &str) -> String {
    let flattened: String = filename
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = flattened.split_whitespace().collect::<Vec<_>>().join("_");

    joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect::<String>()
        .trim_matches(|c| c == '.' || c == '_')
        .to_string()
}

/// Generate a unique storage key: 32 hex characters followed by the
/// sanitized original name.
#[must_use]
pub fn unique_filename(original: &str) -> String {
    format!("{}{}", Uuid::new_v4().simple(), sanitize_filename(original))
}

/// Last `/`-separated segment of a stored image URL.
///
/// Only used for rows that predate the explicit key column.
#[must_use]
pub fn key_from_url(url: &str) -> Option<String> {
    url.rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}
