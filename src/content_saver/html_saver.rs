use anyhow::{Context, Result};
use scraper::Html;
use std::path::{Path, PathBuf};

/// File name of the standalone HTML copy inside an article directory
pub const HTML_FILE_NAME: &str = "content.html";

/// Wrap an article fragment in a self-contained, readable HTML page
///
/// The fragment is re-serialized through the parser, so unclosed tags are
/// closed and attribute quoting is normalized. `no-referrer` lets the page
/// load hotlink-protected remote images.
#[must_use]
pub fn standalone_html_document(title: &str, fragment: &str) -> String {
    let body = Html::parse_fragment(fragment).root_element().inner_html();
    let title = html_escape::encode_text(title.trim());

    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="referrer" content="no-referrer">
    <title>{title}</title>
    <style>
        body {{
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
            line-height: 1.6;
        }}
        img {{
            max-width: 100%;
            height: auto;
        }}
    </style>
</head>
<body>
{body}
</body>
</html>
"#
    )
}

/// Save the article fragment as a standalone HTML page
///
/// Returns `None` without touching the filesystem when the fragment is blank.
pub async fn save_html_content(html: &str, title: &str, article_dir: &Path) -> Result<Option<PathBuf>> {
    if html.trim().is_empty() {
        log::debug!("Skipping HTML copy of empty fragment");
        return Ok(None);
    }

    tokio::fs::create_dir_all(article_dir)
        .await
        .with_context(|| format!("Failed to create article directory {}", article_dir.display()))?;

    let path = article_dir.join(HTML_FILE_NAME);
    tokio::fs::write(&path, standalone_html_document(title, html))
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(Some(path))
}
