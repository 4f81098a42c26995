use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::utils::sanitize_dirname;

/// File name of the Markdown document inside an article directory
pub const MARKDOWN_FILE_NAME: &str = "content.md";

/// Directory that holds everything saved for one article
///
/// `<output_dir>/<sanitized title>`; localized images go into its `images/`
/// subdirectory so the Markdown can reference them relatively.
#[must_use]
pub fn article_dir(output_dir: &Path, title: &str) -> PathBuf {
    output_dir.join(sanitize_dirname(title))
}

/// Save markdown content into an article directory
///
/// # Arguments
///
/// * `markdown_content` - The markdown text to save
/// * `article_dir` - Directory for this article, created if missing
///
/// # Returns
///
/// * `Result<PathBuf>` - Path of the written file
pub async fn save_markdown_content(markdown_content: &str, article_dir: &Path) -> Result<PathBuf> {
    tokio::fs::create_dir_all(article_dir)
        .await
        .with_context(|| format!("Failed to create article directory {}", article_dir.display()))?;

    let path = article_dir.join(MARKDOWN_FILE_NAME);
    tokio::fs::write(&path, markdown_content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::debug!("Saved markdown ({} bytes) to {}", markdown_content.len(), path.display());

    Ok(path)
}
