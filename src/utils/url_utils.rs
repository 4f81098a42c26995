//! URL helpers for image reference resolution.

use url::Url;

/// Check whether a reference already carries an HTTP(S) scheme
///
/// Only a literal `http://` / `https://` prefix counts; protocol-relative
/// (`//host/x.png`) and other schemes are treated as relative references.
#[must_use]
pub fn is_absolute_http(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

/// Resolve an image reference to an absolute URL
///
/// Returns `Ok(None)` when the reference is relative and no base URL is
/// known, so the caller can keep the reference untouched.
///
/// # Errors
///
/// Returns the parse error when the reference or the base URL is not a
/// valid URL.
pub fn resolve_reference(reference: &str, base_url: Option<&str>) -> Result<Option<Url>, url::ParseError> {
    if is_absolute_http(reference) {
        return Url::parse(reference).map(Some);
    }

    match base_url.filter(|base| !base.is_empty()) {
        Some(base) => Url::parse(base)?.join(reference).map(Some),
        None => Ok(None),
    }
}
