pub mod config;
pub mod content_saver;
pub mod image_localizer;
pub mod utils;

pub use config::{ConversionOptions, ImageDownloadConfig};
pub use content_saver::markdown_converter::{
    ConversionError, convert_html_to_markdown, convert_html_to_markdown_sync, extract_plain_text,
};
pub use content_saver::{
    ArticleRecord, article_dir, save_html_content, save_json_data, save_markdown_content,
};
pub use image_localizer::{ImageLocalizer, LocalizeError, Localized, LocalizedImages};
