//! Closed classification of the HTML elements the walker understands

/// What the DOM walker does with an element
///
/// Every tag outside the listed set maps to `Unknown`, which behaves like
/// `Container`: children are converted, no wrapper syntax is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// `h1`..`h6`
    Heading(usize),
    Paragraph,
    LineBreak,
    /// `strong`, `b`
    Bold,
    /// `em`, `i`
    Italic,
    InlineCode,
    Preformatted,
    Anchor,
    Image,
    /// `ul`, `ol`
    List { ordered: bool },
    ListItem,
    Blockquote,
    Table,
    HorizontalRule,
    /// `div`, `section`, `article`, `span`
    Container,
    Unknown,
}

impl ElementKind {
    /// Classify a lowercase tag name
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            "p" => Self::Paragraph,
            "br" => Self::LineBreak,
            "strong" | "b" => Self::Bold,
            "em" | "i" => Self::Italic,
            "code" => Self::InlineCode,
            "pre" => Self::Preformatted,
            "a" => Self::Anchor,
            "img" => Self::Image,
            "ul" => Self::List { ordered: false },
            "ol" => Self::List { ordered: true },
            "li" => Self::ListItem,
            "blockquote" => Self::Blockquote,
            "table" => Self::Table,
            "hr" => Self::HorizontalRule,
            "div" | "section" | "article" | "span" => Self::Container,
            _ => Self::Unknown,
        }
    }
}
