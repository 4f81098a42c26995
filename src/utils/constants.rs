//! Shared configuration constants for articlemd
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

use std::time::Duration;

/// Chrome user agent string sent with image downloads
///
/// Image hosts that guard against hotlinking commonly reject requests
/// without a browser-like user agent.
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";

/// Timeout for a single image download: 10 seconds
pub const DEFAULT_IMAGE_TIMEOUT: Duration = Duration::from_secs(10);

/// Pause after each successful image download: 100ms
///
/// Images in one article usually share an origin, so this keeps the request
/// rate against that origin low.
pub const DEFAULT_DOWNLOAD_THROTTLE: Duration = Duration::from_millis(100);

/// Buffer size used when streaming image bodies to disk: 8 KiB
pub const IMAGE_WRITE_CHUNK_SIZE: usize = 8192;

/// Alt text used for images without a usable `alt` attribute
pub const DEFAULT_IMAGE_ALT: &str = "图片";

/// Subdirectory of the save directory that receives localized images
pub const IMAGES_DIR_NAME: &str = "images";

/// Extension used when an image URL has none, or an implausibly long one
pub const FALLBACK_IMAGE_EXTENSION: &str = ".jpg";

/// Longest accepted image extension, counting the leading dot
pub const MAX_IMAGE_EXTENSION_LEN: usize = 4;

/// Number of hex characters of the URL digest used in image filenames
pub const IMAGE_HASH_HEX_LEN: usize = 8;

/// Default recursion limit for the DOM walker
///
/// Fragments nested deeper than this are converted with the plain-text
/// fallback instead of risking stack exhaustion.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 512;

/// Longest directory name produced from an article title, in characters
pub const MAX_DIRNAME_CHARS: usize = 100;
