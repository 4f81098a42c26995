//! Conversion and persistence of extracted article content

// Module declarations
mod html_saver;
mod json_saver;
pub mod markdown_converter;
mod markdown_saver;

// Re-export public API from html_saver module
pub use html_saver::{HTML_FILE_NAME, save_html_content, standalone_html_document};

// Re-export public API from json_saver module
pub use json_saver::{ArticleRecord, JSON_FILE_NAME, save_json_data};

// Re-export public API from markdown_saver module
pub use markdown_saver::{MARKDOWN_FILE_NAME, article_dir, save_markdown_content};

// Re-export the conversion entry points
pub use markdown_converter::{convert_html_to_markdown, convert_html_to_markdown_sync};
