//! Link targets for image nodes met during the DOM walk

use std::borrow::Cow;
use std::cell::RefCell;

use super::types::LocalizedImages;

/// Supplies the Markdown link target for an image's `src` attribute
///
/// The walker stays synchronous; downloads happen before the walk and are
/// looked up here.
pub trait ImageSource {
    fn image_target<'a>(&'a self, src: &'a str) -> Cow<'a, str>;
}

/// Keeps every `src` as written in the HTML
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoteImages;

impl ImageSource for RemoteImages {
    fn image_target<'a>(&'a self, src: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(src)
    }
}

/// Records every `src` the walker emits, in document order
///
/// Used for a dry-run walk that discovers exactly the images the real walk
/// will reference, so nothing outside the emitted Markdown gets downloaded.
#[derive(Debug, Default)]
pub struct ImageRecorder {
    references: RefCell<Vec<String>>,
}

impl ImageRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded references, duplicates removed, first occurrence kept
    #[must_use]
    pub fn into_references(self) -> Vec<String> {
        let mut references = self.references.into_inner();
        let mut seen = std::collections::HashSet::new();
        references.retain(|reference| seen.insert(reference.clone()));
        references
    }
}

impl ImageSource for ImageRecorder {
    fn image_target<'a>(&'a self, src: &'a str) -> Cow<'a, str> {
        self.references.borrow_mut().push(src.to_string());
        Cow::Borrowed(src)
    }
}

impl ImageSource for LocalizedImages {
    fn image_target<'a>(&'a self, src: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(self.path_for(src).unwrap_or(src))
    }
}
