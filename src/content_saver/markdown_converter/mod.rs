//! HTML to Markdown conversion pipeline
//!
//! Converts an already-isolated article fragment into Markdown:
//! 1. Parse the fragment into a DOM
//! 2. Walk the DOM, mapping a fixed set of elements to Markdown
//! 3. Collapse blank-line runs and trim the result
//!
//! When image download is enabled the walk runs twice: a dry run records the
//! images the document references, those are localized, and the real walk
//! substitutes the local paths.
//!
//! If the structured walk fails the whole fragment degrades to its plain
//! text. That fallback cannot fail, so conversion always yields a document.
//!
//! # Usage
//!
//! ## Synchronous (for blocking contexts)
//! ```rust
//! # use articlemd::content_saver::markdown_converter::convert_html_to_markdown_sync;
//! # use articlemd::config::ConversionOptions;
//! let html = "<h2>Intro</h2><p>This is <strong>important</strong>.</p>";
//! let markdown = convert_html_to_markdown_sync(html, "My Article", &ConversionOptions::default())?;
//! assert_eq!(markdown, "# My Article\n\n## Intro\n\nThis is **important**.");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Asynchronous (with image download)
//! ```no_run
//! # use articlemd::content_saver::markdown_converter::convert_html_to_markdown;
//! # use articlemd::config::ConversionOptions;
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let html = r#"<p><img src="/cover.png" alt="Cover"></p>"#;
//! let options = ConversionOptions::localized("output/my-article", "https://example.com/posts/1");
//! let markdown = convert_html_to_markdown(html, "", &options).await;
//! // e.g. "![Cover](images/img_1a2b3c4d.png)"
//! # });
//! ```

use anyhow::{Context, Result};
use scraper::{Html, Node};

// Declare sub-modules
pub mod dom_walker;
pub mod element_kind;
pub mod errors;
pub mod markdown_postprocessing;
mod node_util;

// Re-export sub-modules for advanced usage
pub use dom_walker::{DomWalker, Fragment, WalkContext, append_fragment, join_fragment};
pub use element_kind::ElementKind;
pub use errors::ConversionError;
pub use markdown_postprocessing::{collapse_blank_lines, finalize_markdown};

use crate::config::ConversionOptions;
use crate::image_localizer::{ImageLocalizer, ImageRecorder, ImageSource, RemoteImages};

/// Convert an HTML fragment to Markdown, localizing images if configured
///
/// A non-empty `title` becomes a level-1 heading at the top of the document.
///
/// Image failures never surface here: an image that cannot be localized
/// keeps its original reference. A fragment the walker cannot handle comes
/// back as plain text without the title.
///
/// # Examples
///
/// ```rust
/// # use articlemd::content_saver::markdown_converter::convert_html_to_markdown;
/// # use articlemd::config::ConversionOptions;
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let markdown = convert_html_to_markdown(
///     "<ul><li>a</li><li>b</li></ul>",
///     "",
///     &ConversionOptions::default(),
/// )
/// .await;
/// assert_eq!(markdown, "- a\n- b");
/// # });
/// ```
pub async fn convert_html_to_markdown(html: &str, title: &str, options: &ConversionOptions) -> String {
    let localizer = match ImageLocalizer::from_options(options) {
        Ok(localizer) => localizer,
        Err(e) => {
            tracing::warn!("Image localizer unavailable: {}, keeping remote image references", e);
            None
        }
    };

    let Some(localizer) = localizer else {
        return convert_with_images(html, title, options, &RemoteImages);
    };

    let references = match collect_image_references(html, options) {
        Ok(references) => references,
        Err(e) => {
            tracing::warn!("Markdown conversion failed: {}, falling back to plain text", e);
            return extract_plain_text(html);
        }
    };

    tracing::debug!("Localizing {} image(s) into {}", references.len(), localizer.images_dir().display());
    let localized = localizer.localize_all(&references).await;
    if localized.has_failures() {
        tracing::warn!(
            "{} of {} image(s) could not be localized",
            localized.failures.len(),
            localized.total()
        );
    }

    convert_with_images(html, title, options, &localized)
}

/// Convert HTML to Markdown synchronously (blocking)
///
/// Without image download this is a pure function of its inputs. With image
/// download enabled it drives [`convert_html_to_markdown`] on a private
/// current-thread runtime, so it must not be called from inside an async
/// context in that case.
///
/// # Errors
///
/// Returns an error only if the runtime for image downloads cannot be built.
pub fn convert_html_to_markdown_sync(html: &str, title: &str, options: &ConversionOptions) -> Result<String> {
    if !(options.download_images && options.save_dir.is_some()) {
        return Ok(convert_with_images(html, title, options, &RemoteImages));
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build runtime for image downloads")?;

    Ok(runtime.block_on(convert_html_to_markdown(html, title, options)))
}

/// Convert with a caller-supplied image source, falling back to plain text
#[must_use]
pub fn convert_with_images(
    html: &str,
    title: &str,
    options: &ConversionOptions,
    images: &dyn ImageSource,
) -> String {
    match render_markdown(html, title, options, images) {
        Ok(markdown) => markdown,
        Err(e) => {
            tracing::warn!("Markdown conversion failed: {}, falling back to plain text", e);
            extract_plain_text(html)
        }
    }
}

/// Structured conversion without fallback
///
/// # Errors
///
/// Returns [`ConversionError`] when the walker gives up on the fragment.
pub fn render_markdown(
    html: &str,
    title: &str,
    options: &ConversionOptions,
    images: &dyn ImageSource,
) -> Result<String, ConversionError> {
    let document = Html::parse_fragment(html);
    let walker = DomWalker::new(images, &options.default_alt, options.max_nesting_depth);
    let pieces = walker.walk(document.tree.root(), WalkContext::default())?;

    let mut markdown = String::new();
    let title = title.trim();
    if !title.is_empty() {
        markdown.push_str("# ");
        markdown.push_str(title);
        markdown.push('\n');
    }
    append_fragment(&mut markdown, &pieces);

    Ok(finalize_markdown(&markdown))
}

/// Image references the conversion of `html` will emit, in document order
///
/// # Errors
///
/// Returns [`ConversionError`] when the walker gives up on the fragment.
pub fn collect_image_references(html: &str, options: &ConversionOptions) -> Result<Vec<String>, ConversionError> {
    let recorder = ImageRecorder::new();
    {
        let document = Html::parse_fragment(html);
        let walker = DomWalker::new(&recorder, &options.default_alt, options.max_nesting_depth);
        walker.walk(document.tree.root(), WalkContext::default())?;
    }
    Ok(recorder.into_references())
}

/// All text of the fragment, concatenated, without any Markdown structure
///
/// Iterates the tree without recursion; parsing is infallible, so this is
/// the terminal fallback of the pipeline.
#[must_use]
pub fn extract_plain_text(html: &str) -> String {
    let document = Html::parse_fragment(html);
    let text: String = document
        .tree
        .root()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => Some(&**text),
            _ => None,
        })
        .collect();
    text
}
