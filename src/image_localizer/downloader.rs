//! HTTP download of a single image into the images directory
//!
//! The body is streamed through a fixed-size buffer into a temporary file
//! next to the destination, which is renamed into place only after the last
//! chunk has been written. An interrupted download leaves no file behind, so
//! the existence check in the localizer never mistakes a partial image for a
//! cached one.

use futures::StreamExt;
use reqwest::Client;
use reqwest::header::{ACCEPT, REFERER, USER_AGENT};
use std::path::Path;
use tokio::io::{AsyncWriteExt, BufWriter};
use url::Url;

use super::types::LocalizeError;
use crate::config::ImageDownloadConfig;
use crate::utils::IMAGE_WRITE_CHUNK_SIZE;

/// Download `url` to `destination`, returning the number of bytes written
///
/// # Errors
///
/// Returns an error on transport failure, timeout, non-2xx status or any
/// filesystem error. No file exists at `destination` after an error.
pub(crate) async fn download_image(
    client: &Client,
    url: &Url,
    referer: &str,
    config: &ImageDownloadConfig,
    destination: &Path,
) -> Result<u64, LocalizeError> {
    let response = client
        .get(url.clone())
        .timeout(config.timeout)
        .header(USER_AGENT, config.user_agent.as_str())
        .header(REFERER, referer)
        .header(ACCEPT, "image/avif,image/webp,image/apng,image/*,*/*;q=0.8")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(LocalizeError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let images_dir = destination.parent().ok_or_else(|| {
        std::io::Error::other(format!(
            "Image destination has no parent directory: {}",
            destination.display()
        ))
    })?;

    // Dropping `temp_path` on an early return deletes the partial file
    let (file, temp_path) = tempfile::Builder::new()
        .prefix(".img_")
        .suffix(".part")
        .tempfile_in(images_dir)?
        .into_parts();

    let mut writer = BufWriter::with_capacity(IMAGE_WRITE_CHUNK_SIZE, tokio::fs::File::from_std(file));
    let mut stream = response.bytes_stream();
    let mut written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        writer.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }

    writer.flush().await?;
    let file = writer.into_inner();
    file.sync_all().await?;
    drop(file);

    temp_path.persist(destination).map_err(std::io::Error::from)?;

    Ok(written)
}
