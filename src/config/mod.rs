//! Configuration module for HTML to Markdown conversion
//!
//! This module provides the `ConversionOptions` struct, its fluent builder
//! methods and the image download settings it carries.

// Sub-modules
pub mod builder;
pub mod types;

// Re-exports for public API
pub use types::{ConversionOptions, ImageDownloadConfig};
