//! Shared helpers for integration tests

#![allow(dead_code)]

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use articlemd::{ConversionOptions, ImageDownloadConfig, convert_html_to_markdown_sync};
use mockito::{Mock, Server, ServerGuard};
use tempfile::TempDir;

/// Bytes served as image bodies; content is never inspected
pub const FAKE_PNG: &[u8] = b"\x89PNG\r\n\x1a\nfake image body";

/// Creates a temporary directory that is removed on drop
pub fn create_test_dir() -> Result<TempDir> {
    Ok(tempfile::tempdir()?)
}

/// Converts with default options and no images downloaded
pub fn convert(html: &str) -> String {
    convert_with_title(html, "")
}

pub fn convert_with_title(html: &str, title: &str) -> String {
    convert_html_to_markdown_sync(html, title, &ConversionOptions::default())
        .expect("conversion without downloads never needs a runtime")
}

/// Download settings that skip the inter-request pause
pub fn fast_download_config() -> ImageDownloadConfig {
    ImageDownloadConfig {
        timeout: Duration::from_secs(5),
        throttle: Duration::ZERO,
        ..ImageDownloadConfig::default()
    }
}

/// Options that localize into `save_dir` against `base_url`, unthrottled
pub fn localized_options(save_dir: &Path, base_url: &str) -> ConversionOptions {
    ConversionOptions::localized(save_dir, base_url)
        .with_download_throttle(Duration::ZERO)
        .with_image_timeout(Duration::from_secs(5))
}

/// Sets up a mock HTTP server
pub async fn setup_mock_server() -> ServerGuard {
    Server::new_async().await
}

/// Creates a mock endpoint that serves an image exactly `hits` times
pub async fn create_image_mock(server: &mut ServerGuard, path: &str, hits: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "image/png")
        .with_body(FAKE_PNG)
        .expect(hits)
        .create_async()
        .await
}

/// Creates a mock endpoint that returns an error status
pub async fn create_error_mock(server: &mut ServerGuard, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_body("Error")
        .create_async()
        .await
}

/// Names of the files in `<save_dir>/images`, sorted
pub fn image_files(save_dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(save_dir.join("images")) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
