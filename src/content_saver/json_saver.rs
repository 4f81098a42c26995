use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::time::timeout;

/// File name of the JSON record inside an article directory
pub const JSON_FILE_NAME: &str = "content.json";

/// Timeout for blocking JSON serialization
/// Prevents hangs on pathological data structures
const BLOCKING_SERIALIZATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything known about one converted article
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleRecord {
    pub title: String,
    pub base_url: Option<String>,
    pub html: String,
    pub markdown: String,
}

/// Save the article record as pretty-printed JSON
///
/// Non-ASCII text is written as-is, not escaped.
pub async fn save_json_data(record: ArticleRecord, article_dir: &Path) -> Result<PathBuf> {
    // JSON serialization (keep spawn_blocking - CPU intensive for large pages)
    let blocking_task = tokio::task::spawn_blocking(move || serde_json::to_string_pretty(&record));

    let json_str = match timeout(BLOCKING_SERIALIZATION_TIMEOUT, blocking_task).await {
        Ok(Ok(result)) => result?,
        Ok(Err(e)) => return Err(anyhow::anyhow!("JSON serialization task panicked: {}", e)),
        Err(_) => {
            log::warn!("JSON serialization timeout (timeout: {:?})", BLOCKING_SERIALIZATION_TIMEOUT);
            return Err(anyhow::anyhow!(
                "JSON serialization timed out after {:?}",
                BLOCKING_SERIALIZATION_TIMEOUT
            ));
        }
    };

    tokio::fs::create_dir_all(article_dir)
        .await
        .with_context(|| format!("Failed to create article directory {}", article_dir.display()))?;

    let path = article_dir.join(JSON_FILE_NAME);
    tokio::fs::write(&path, json_str)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}
