//! Final clean-up of the assembled Markdown document

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static EXCESS_NEWLINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n{3,}").expect("EXCESS_NEWLINES: hardcoded regex is valid")
});

/// Collapse every run of three or more newlines to exactly two
#[must_use]
pub fn collapse_blank_lines(markdown: &str) -> Cow<'_, str> {
    EXCESS_NEWLINES.replace_all(markdown, "\n\n")
}

/// Collapse blank-line runs, then trim the document edges
#[must_use]
pub fn finalize_markdown(markdown: &str) -> String {
    collapse_blank_lines(markdown).trim().to_string()
}
