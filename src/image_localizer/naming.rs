//! Deterministic local filenames for image URLs

use url::Url;
use xxhash_rust::xxh3::xxh3_128;

use crate::utils::{FALLBACK_IMAGE_EXTENSION, IMAGE_HASH_HEX_LEN, MAX_IMAGE_EXTENSION_LEN};

/// Local filename for an absolute image URL: `img_<hash><ext>`
///
/// The hash is the first 8 hex characters of the XXH3-128 digest of the URL
/// string, so the same URL maps to the same file on every run.
#[must_use]
pub fn image_file_name(absolute_url: &Url) -> String {
    let digest = format!("{:032x}", xxh3_128(absolute_url.as_str().as_bytes()));
    format!(
        "img_{}{}",
        &digest[..IMAGE_HASH_HEX_LEN],
        image_extension(absolute_url.path())
    )
}

/// Extension of the last path segment, including the dot
///
/// Falls back to `.jpg` when the segment has no extension or when the
/// extension is longer than 4 characters. Leading dots of the segment do
/// not start an extension (`/.hidden` has none).
#[must_use]
pub fn image_extension(path: &str) -> &str {
    let segment = path.rsplit('/').next().unwrap_or_default();
    let stem_start = segment.len() - segment.trim_start_matches('.').len();

    let extension = segment[stem_start..]
        .rfind('.')
        .map(|idx| &segment[stem_start + idx..])
        .filter(|ext| ext.len() > 1 && ext.len() <= MAX_IMAGE_EXTENSION_LEN);

    extension.unwrap_or(FALLBACK_IMAGE_EXTENSION)
}
