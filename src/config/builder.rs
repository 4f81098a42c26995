//! Fluent construction and presets for `ConversionOptions`

use std::path::PathBuf;
use std::time::Duration;

use super::types::ConversionOptions;

impl ConversionOptions {
    /// Create options with every default: no downloads, no base URL
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for localizing images into `save_dir`
    ///
    /// Relative image references resolve against `base_url`.
    #[must_use]
    pub fn localized(save_dir: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self::default()
            .with_download_images(true)
            .with_save_dir(save_dir)
            .with_base_url(base_url)
    }

    #[must_use]
    pub fn with_download_images(mut self, enabled: bool) -> Self {
        self.download_images = enabled;
        self
    }

    #[must_use]
    pub fn with_save_dir(mut self, save_dir: impl Into<PathBuf>) -> Self {
        self.save_dir = Some(save_dir.into());
        self
    }

    /// Set the base URL; an empty string clears it
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = (!base_url.is_empty()).then_some(base_url);
        self
    }

    #[must_use]
    pub fn with_default_alt(mut self, alt: impl Into<String>) -> Self {
        self.default_alt = alt.into();
        self
    }

    #[must_use]
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    #[must_use]
    pub fn with_image_timeout(mut self, timeout: Duration) -> Self {
        self.image.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_download_throttle(mut self, throttle: Duration) -> Self {
        self.image.throttle = throttle;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.image.user_agent = user_agent.into();
        self
    }
}
