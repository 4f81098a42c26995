//! Core configuration types for HTML to Markdown conversion
//!
//! This module contains the `ConversionOptions` struct and the HTTP settings
//! used when images are localized.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::utils::{
    CHROME_USER_AGENT, DEFAULT_DOWNLOAD_THROTTLE, DEFAULT_IMAGE_ALT, DEFAULT_IMAGE_TIMEOUT,
    DEFAULT_MAX_NESTING_DEPTH,
};

/// Per-call parameters for converting one HTML fragment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOptions {
    /// Download images and reference the local copies (default: false)
    ///
    /// Has no effect unless `save_dir` is set as well.
    pub download_images: bool,

    /// Directory that receives the `images/` subdirectory (default: None)
    ///
    /// Localized image references are relative to this directory, so the
    /// Markdown file is expected to be written into it.
    pub save_dir: Option<PathBuf>,

    /// Base URL for resolving relative image references (default: None)
    ///
    /// Also sent as the `Referer` header when downloading images.
    pub base_url: Option<String>,

    /// Alt text for images whose `alt` attribute is missing or empty (default: `图片`)
    pub default_alt: String,

    /// Recursion limit for the DOM walk (default: 512)
    ///
    /// Deeper fragments fall back to plain text.
    pub max_nesting_depth: usize,

    /// HTTP settings for image downloads
    pub image: ImageDownloadConfig,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            download_images: false,
            save_dir: None,
            base_url: None,
            default_alt: DEFAULT_IMAGE_ALT.to_string(),
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            image: ImageDownloadConfig::default(),
        }
    }
}

/// HTTP settings for image downloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageDownloadConfig {
    /// Timeout for a single image request, including the body
    pub timeout: Duration,

    /// Pause after each successful download
    pub throttle: Duration,

    /// `User-Agent` header value
    pub user_agent: String,
}

impl Default for ImageDownloadConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_IMAGE_TIMEOUT,
            throttle: DEFAULT_DOWNLOAD_THROTTLE,
            user_agent: CHROME_USER_AGENT.to_string(),
        }
    }
}
