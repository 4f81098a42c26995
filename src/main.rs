// Command-line front end: converts a saved article fragment to Markdown
// and writes it, with standalone HTML and JSON copies and localized images,
// into a per-article directory.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

use articlemd::image_localizer::count_local_images;
use articlemd::{
    ArticleRecord, ConversionOptions, article_dir, convert_html_to_markdown, save_html_content,
    save_json_data, save_markdown_content,
};

#[derive(Debug, Parser)]
#[command(name = "articlemd", version, about = "Convert article HTML to Markdown")]
struct Cli {
    /// HTML fragment to convert, or `-` for stdin
    input: String,

    /// Article title, written as the top-level heading and used for the output directory
    #[arg(short, long, default_value = "")]
    title: String,

    /// URL the article was fetched from; relative image references resolve against it
    #[arg(short, long)]
    base_url: Option<String>,

    /// Directory that receives one subdirectory per article
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// Download images and reference the local copies
    #[arg(short, long)]
    download_images: bool,

    /// Print the Markdown instead of writing files
    #[arg(long, conflicts_with = "download_images")]
    stdout: bool,
}

async fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut html = String::new();
        tokio::io::stdin()
            .read_to_string(&mut html)
            .await
            .context("Failed to read HTML from stdin")?;
        Ok(html)
    } else {
        tokio::fs::read_to_string(input)
            .await
            .with_context(|| format!("Failed to read HTML from {input}"))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let html = read_input(&cli.input).await?;

    if cli.stdout {
        let options = ConversionOptions::new().with_base_url(cli.base_url.clone().unwrap_or_default());
        println!("{}", convert_html_to_markdown(&html, &cli.title, &options).await);
        return Ok(());
    }

    let dir = article_dir(&cli.output_dir, &cli.title);
    let mut options = ConversionOptions::new()
        .with_save_dir(&dir)
        .with_download_images(cli.download_images);
    if let Some(base_url) = &cli.base_url {
        options = options.with_base_url(base_url.as_str());
    }

    if cli.download_images {
        tracing::info!("Downloading images into {}", dir.display());
    }
    let markdown = convert_html_to_markdown(&html, &cli.title, &options).await;

    let html_path = save_html_content(&html, &cli.title, &dir).await?;
    let markdown_path = save_markdown_content(&markdown, &dir).await?;
    let json_path = save_json_data(
        ArticleRecord {
            title: cli.title.clone(),
            base_url: options.base_url.clone(),
            html,
            markdown,
        },
        &dir,
    )
    .await?;

    tracing::info!("Saved article to {}", dir.display());
    if let Some(html_path) = &html_path {
        tracing::info!("  - HTML: {}", html_path.display());
    }
    tracing::info!("  - Markdown: {}", markdown_path.display());
    tracing::info!("  - JSON: {}", json_path.display());

    if cli.download_images {
        match count_local_images(&dir).await {
            Ok(count) if count > 0 => tracing::info!("  - Images: {count}"),
            Ok(_) => {}
            Err(e) => tracing::warn!("Could not count images in {}: {e}", dir.display()),
        }
    }

    Ok(())
}
