//! Image localization
//!
//! Resolves image references against the page URL, mirrors the bytes into
//! `<save_dir>/images/` under a name derived from the URL and hands back a
//! path relative to `save_dir` for use in the Markdown output.
//!
//! Localization never fails from the caller's point of view: when anything
//! goes wrong the original reference is returned and the Markdown keeps
//! pointing at the remote image.
//!
//! ```no_run
//! # use articlemd::image_localizer::ImageLocalizer;
//! # use articlemd::config::ImageDownloadConfig;
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let localizer = ImageLocalizer::new(
//!     "output/My Article",
//!     Some("https://example.com/posts/1".to_string()),
//!     ImageDownloadConfig::default(),
//! )?;
//! let path = localizer.localize("/static/cover.png").await;
//! assert!(path.starts_with("images/img_"));
//! # Ok::<(), articlemd::image_localizer::LocalizeError>(())
//! # }).unwrap();
//! ```

// Sub-modules
mod downloader;
pub mod naming;
pub mod sources;
pub mod types;

// Re-exports for public API
pub use naming::{image_extension, image_file_name};
pub use sources::{ImageRecorder, ImageSource, RemoteImages};
pub use types::{ImageFailure, LocalizeError, Localized, LocalizedImages};

use reqwest::Client;
use std::path::{Path, PathBuf};

use crate::config::{ConversionOptions, ImageDownloadConfig};
use crate::utils::{IMAGES_DIR_NAME, resolve_reference};

/// Mirrors remote images into a save directory
#[derive(Debug, Clone)]
pub struct ImageLocalizer {
    client: Client,
    save_dir: PathBuf,
    base_url: Option<String>,
    config: ImageDownloadConfig,
}

impl ImageLocalizer {
    /// Create a localizer writing into `<save_dir>/images/`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(
        save_dir: impl Into<PathBuf>,
        base_url: Option<String>,
        config: ImageDownloadConfig,
    ) -> Result<Self, LocalizeError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(client, save_dir, base_url, config))
    }

    /// Create a localizer that shares an existing HTTP client
    #[must_use]
    pub fn with_client(
        client: Client,
        save_dir: impl Into<PathBuf>,
        base_url: Option<String>,
        config: ImageDownloadConfig,
    ) -> Self {
        Self {
            client,
            save_dir: save_dir.into(),
            base_url: base_url.filter(|base| !base.is_empty()),
            config,
        }
    }

    /// Localizer for `options`, or `None` when downloads are disabled or no
    /// save directory is configured
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn from_options(options: &ConversionOptions) -> Result<Option<Self>, LocalizeError> {
        match (&options.save_dir, options.download_images) {
            (Some(save_dir), true) => Ok(Some(Self::new(
                save_dir.clone(),
                options.base_url.clone(),
                options.image.clone(),
            )?)),
            _ => Ok(None),
        }
    }

    #[must_use]
    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    /// Directory that receives the image files
    #[must_use]
    pub fn images_dir(&self) -> PathBuf {
        self.save_dir.join(IMAGES_DIR_NAME)
    }

    /// Link target for `reference`: the local `images/...` path on success,
    /// the unchanged reference otherwise
    pub async fn localize(&self, reference: &str) -> String {
        match self.try_localize(reference).await {
            Ok(localized) => localized
                .local_path()
                .map_or_else(|| reference.to_string(), str::to_string),
            Err(e) => {
                log::warn!("Failed to localize image {reference}: {e}");
                reference.to_string()
            }
        }
    }

    /// Localize `reference`, reporting what happened
    ///
    /// # Errors
    ///
    /// Returns an error when the URL cannot be resolved, the download fails
    /// or the image cannot be written.
    pub async fn try_localize(&self, reference: &str) -> Result<Localized, LocalizeError> {
        let Some(url) = resolve_reference(reference, self.base_url.as_deref())? else {
            log::debug!("Keeping relative image reference without base URL: {reference}");
            return Ok(Localized::Unresolvable);
        };

        let images_dir = self.images_dir();
        tokio::fs::create_dir_all(&images_dir).await?;

        let file_name = image_file_name(&url);
        let relative_path = format!("{IMAGES_DIR_NAME}/{file_name}");
        let destination = images_dir.join(&file_name);

        if tokio::fs::try_exists(&destination).await? {
            log::debug!("Image already cached: {url} -> {}", destination.display());
            return Ok(Localized::Cached(relative_path));
        }

        let referer = self.base_url.as_deref().unwrap_or(url.as_str());
        let bytes = downloader::download_image(&self.client, &url, referer, &self.config, &destination).await?;
        log::debug!("Downloaded image {url} ({bytes} bytes) to {}", destination.display());

        if !self.config.throttle.is_zero() {
            tokio::time::sleep(self.config.throttle).await;
        }

        Ok(Localized::Downloaded(relative_path))
    }

    /// Localize every reference once, in order
    ///
    /// Downloads run one at a time so the throttle applies between requests
    /// to the same origin.
    pub async fn localize_all<I, S>(&self, references: I) -> LocalizedImages
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut result = LocalizedImages::default();

        for reference in references {
            let reference = reference.as_ref();
            if result.paths.contains_key(reference) {
                continue;
            }

            let target = match self.try_localize(reference).await {
                Ok(Localized::Unresolvable) => reference.to_string(),
                Ok(Localized::Cached(path)) => {
                    result.cached += 1;
                    path
                }
                Ok(Localized::Downloaded(path)) => {
                    result.downloaded += 1;
                    path
                }
                Err(e) => {
                    log::warn!("Failed to localize image {reference}: {e}");
                    result.failures.push(ImageFailure {
                        reference: reference.to_string(),
                        error: e.to_string(),
                    });
                    reference.to_string()
                }
            };

            result.paths.insert(reference.to_string(), target);
        }

        result
    }
}

/// Number of localized image files in `<save_dir>/images/`
///
/// Only `img_*` files count, so leftovers of an interrupted download are
/// ignored. A missing directory counts as zero.
///
/// # Errors
///
/// Returns an error if the directory exists but cannot be read.
pub async fn count_local_images(save_dir: &Path) -> std::io::Result<usize> {
    let images_dir = save_dir.join(IMAGES_DIR_NAME);
    let mut entries = match tokio::fs::read_dir(&images_dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e),
    };

    let mut count = 0;
    while let Some(entry) = entries.next_entry().await? {
        let is_image = entry.file_name().to_string_lossy().starts_with("img_");
        if is_image && entry.file_type().await?.is_file() {
            count += 1;
        }
    }
    Ok(count)
}
