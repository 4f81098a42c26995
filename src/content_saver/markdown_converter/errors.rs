//! Error types for structured Markdown conversion

/// Reason the structured walk gave up
///
/// The pipeline answers any of these by converting the whole fragment to
/// plain text instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Element nesting exceeded the configured recursion limit
    #[error("HTML nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: usize },
}
