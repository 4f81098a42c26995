//! UTF-8-safe string helpers
//!
//! Truncation here counts characters rather than bytes so titles written in
//! CJK scripts or containing emoji never split a code point.

use super::constants::MAX_DIRNAME_CHARS;

/// Safely truncate a string to a maximum number of CHARACTERS (not bytes).
///
/// # Examples
/// ```
/// # use articlemd::utils::string_utils::safe_truncate_chars;
/// assert_eq!(safe_truncate_chars("Hello, World!", 5), "Hello");
/// assert_eq!(safe_truncate_chars("标题标题", 2), "标题");
/// assert_eq!(safe_truncate_chars("Hi", 100), "Hi");
/// ```
#[inline]
#[must_use]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}

/// Turn an article title into a directory name that is valid on Windows and Unix
///
/// Reserved characters become `_`, surrounding whitespace is trimmed, the
/// result is capped at 100 characters and an empty result becomes `untitled`.
///
/// # Examples
/// ```
/// # use articlemd::utils::string_utils::sanitize_dirname;
/// assert_eq!(sanitize_dirname("  a/b: c?  "), "a_b_ c_");
/// assert_eq!(sanitize_dirname("   "), "untitled");
/// ```
#[must_use]
pub fn sanitize_dirname(title: &str) -> String {
    let replaced: String = title
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            other => other,
        })
        .collect();

    let truncated = safe_truncate_chars(replaced.trim(), MAX_DIRNAME_CHARS);

    if truncated.is_empty() {
        "untitled".to_string()
    } else {
        truncated.to_string()
    }
}
