//! Recursive HTML → Markdown tree walk
//!
//! Each node converts to a [`Fragment`], an ordered list of text pieces.
//! Concatenating the fragments of the whole tree in document order gives the
//! raw document that [`super::markdown_postprocessing`] then tidies.
//!
//! Block constructs wrap themselves in `\n` so that neighbouring blocks end
//! up separated by blank lines once runs of newlines are collapsed. Inline
//! formatting (`**`, `*`, code spans, links) is built from the element's
//! plain text, so nested formatting inside those elements is flattened.

use ego_tree::NodeRef;
use scraper::Node;
use scraper::node::Element;

use super::element_kind::ElementKind;
use super::errors::ConversionError;
use super::node_util::{child_elements, descendant_elements, text_content};
use crate::image_localizer::ImageSource;

/// Text pieces produced by one node
pub type Fragment = Vec<String>;

/// Per-node position in the tree
///
/// Copied on every step down; list nesting only changes when the walk enters
/// a `ul`/`ol`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkContext<'a> {
    /// Number of enclosing lists
    pub list_depth: usize,
    /// Whether the innermost enclosing list is an `ol`
    pub ordered: bool,
    /// Tag of the direct parent element
    pub parent_tag: Option<&'a str>,
    /// Number of ancestors, checked against the recursion limit
    pub depth: usize,
}

impl<'a> WalkContext<'a> {
    fn child_of(self, tag: &'a str) -> Self {
        Self {
            parent_tag: Some(tag),
            depth: self.depth + 1,
            ..self
        }
    }

    fn in_list(self, ordered: bool) -> Self {
        Self {
            list_depth: self.list_depth + 1,
            ordered,
            ..self
        }
    }
}

pub struct DomWalker<'s> {
    images: &'s dyn ImageSource,
    default_alt: &'s str,
    max_depth: usize,
}

impl<'s> DomWalker<'s> {
    #[must_use]
    pub fn new(images: &'s dyn ImageSource, default_alt: &'s str, max_depth: usize) -> Self {
        Self {
            images,
            default_alt,
            max_depth,
        }
    }

    /// Convert `node` and its subtree
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::NestingTooDeep`] when the subtree is nested
    /// deeper than the walker's limit.
    pub fn walk<'a>(&self, node: NodeRef<'a, Node>, ctx: WalkContext<'a>) -> Result<Fragment, ConversionError> {
        if ctx.depth > self.max_depth {
            return Err(ConversionError::NestingTooDeep {
                limit: self.max_depth,
            });
        }

        match node.value() {
            Node::Text(text) => {
                Ok(normalize_text(text).into_iter().collect())
            }
            Node::Element(element) => self.walk_element(node, element, ctx),
            Node::Document | Node::Fragment => self.walk_children(node, WalkContext {
                depth: ctx.depth + 1,
                ..ctx
            }),
            // Comments, doctypes, processing instructions
            _ => Ok(Fragment::new()),
        }
    }

    fn walk_children<'a>(&self, node: NodeRef<'a, Node>, ctx: WalkContext<'a>) -> Result<Fragment, ConversionError> {
        let mut fragment = Fragment::new();
        for child in node.children() {
            fragment.extend(self.walk(child, ctx)?);
        }
        Ok(fragment)
    }

    fn walk_element<'a>(
        &self,
        node: NodeRef<'a, Node>,
        element: &'a Element,
        ctx: WalkContext<'a>,
    ) -> Result<Fragment, ConversionError> {
        let tag = element.name();
        let inner = ctx.child_of(tag);

        let fragment = match ElementKind::from_tag(tag) {
            ElementKind::Heading(level) => {
                let text = text_content(node);
                non_empty(text.trim(), |t| format!("\n{} {t}\n", "#".repeat(level)))
            }
            ElementKind::Paragraph => {
                let content = join_fragment(&self.walk_children(node, inner)?);
                non_empty(content.trim(), |t| format!("\n{t}\n"))
            }
            ElementKind::LineBreak => vec!["  \n".to_string()],
            ElementKind::Bold => {
                let text = text_content(node);
                non_empty(text.trim(), |t| format!("**{t}**"))
            }
            ElementKind::Italic => {
                let text = text_content(node);
                non_empty(text.trim(), |t| format!("*{t}*"))
            }
            ElementKind::InlineCode => {
                let text = text_content(node);
                // Inside <pre> the fence is emitted by the block itself
                if ctx.parent_tag == Some("pre") {
                    vec![text]
                } else {
                    vec![format!("`{text}`")]
                }
            }
            ElementKind::Preformatted => {
                vec![format!("\n```\n{}\n```\n", text_content(node))]
            }
            ElementKind::Anchor => self.anchor(node, element, inner)?,
            ElementKind::Image => self.image(element),
            ElementKind::List { ordered } => self.list(node, ordered, ctx)?,
            ElementKind::Blockquote => blockquote(node),
            ElementKind::Table => table(node),
            ElementKind::HorizontalRule => vec!["\n---\n\n".to_string()],
            ElementKind::ListItem | ElementKind::Container | ElementKind::Unknown => {
                self.walk_children(node, inner)?
            }
        };

        Ok(fragment)
    }

    fn anchor<'a>(
        &self,
        node: NodeRef<'a, Node>,
        element: &'a Element,
        inner: WalkContext<'a>,
    ) -> Result<Fragment, ConversionError> {
        // A linked image is emitted as the image alone
        if let Some(image) = descendant_elements(node, &["img"]).next() {
            return self.walk(image, inner);
        }

        let text = text_content(node);
        let text = text.trim();
        let href = element.attr("href").unwrap_or_default();

        Ok(match (text.is_empty(), href.is_empty()) {
            (false, false) => vec![format!("[{text}]({href})")],
            (false, true) => vec![text.to_string()],
            (true, _) => Fragment::new(),
        })
    }

    fn image(&self, element: &Element) -> Fragment {
        let src = element.attr("src").unwrap_or_default();
        if src.is_empty() {
            return Fragment::new();
        }

        let alt = element
            .attr("alt")
            .filter(|alt| !alt.is_empty())
            .unwrap_or(self.default_alt);
        let target = self.images.image_target(src);

        vec![format!("\n![{alt}]({target})\n")]
    }

    fn list<'a>(
        &self,
        node: NodeRef<'a, Node>,
        ordered: bool,
        ctx: WalkContext<'a>,
    ) -> Result<Fragment, ConversionError> {
        let item_ctx = ctx.child_of(if ordered { "ol" } else { "ul" }).in_list(ordered);
        let indent = "  ".repeat(ctx.list_depth);

        let mut fragment = vec!["\n".to_string()];

        for (idx, item) in child_elements(node, &["li"]).enumerate() {
            let content = join_fragment(&self.walk(item, item_ctx)?);
            let content = content.trim();
            if content.is_empty() {
                continue;
            }

            let line = if ordered {
                format!("{indent}{}. {content}\n", idx + 1)
            } else {
                format!("{indent}- {content}\n")
            };
            fragment.push(line);
        }

        fragment.push("\n".to_string());
        Ok(fragment)
    }
}

/// Text node rule: whitespace-only text vanishes, everything else loses its
/// surrounding whitespace except for a single separating space on each side
/// where the source had any
///
/// Keeping that one space is what separates words from adjacent inline
/// markup (`Hello <b>world</b>` → `Hello **world**`). Block rules trim their
/// own content, so the space never reaches a line boundary inside a
/// paragraph, list item or the document edges.
fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let lead = if text.starts_with(char::is_whitespace) { " " } else { "" };
    let trail = if text.ends_with(char::is_whitespace) { " " } else { "" };
    Some(format!("{lead}{trimmed}{trail}"))
}

/// Concatenate pieces the way [`append_fragment`] does
#[must_use]
pub fn join_fragment(pieces: &[String]) -> String {
    let mut joined = String::new();
    append_fragment(&mut joined, pieces);
    joined
}

/// Append pieces to `out`, dropping a text boundary space that touches a
/// line break on either side
///
/// Only a single space is dropped, so the two trailing spaces of a hard
/// break survive.
pub fn append_fragment(out: &mut String, pieces: &[String]) {
    for piece in pieces {
        let mut piece = piece.as_str();

        if out.ends_with('\n') && piece.starts_with(' ') && !piece[1..].starts_with(char::is_whitespace) {
            piece = &piece[1..];
        }

        let breaks_line = piece.trim_start_matches(' ').starts_with('\n');
        if breaks_line && out.ends_with(' ') && !out.ends_with("  ") {
            out.pop();
        }

        out.push_str(piece);
    }
}

fn non_empty(text: &str, render: impl FnOnce(&str) -> String) -> Fragment {
    if text.is_empty() {
        Fragment::new()
    } else {
        vec![render(text)]
    }
}

fn blockquote(node: NodeRef<'_, Node>) -> Fragment {
    let text = text_content(node);
    let text = text.trim();
    if text.is_empty() {
        return Fragment::new();
    }

    let mut fragment: Fragment = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("> {line}\n"))
        .collect();
    fragment.push("\n".to_string());
    fragment
}

// Cells hold raw trimmed text; no inline Markdown inside tables.
fn table(node: NodeRef<'_, Node>) -> Fragment {
    let mut fragment = vec!["\n".to_string()];

    let rows: Vec<_> = descendant_elements(node, &["tr"]).collect();
    if let Some((header, body)) = rows.split_first() {
        let headers = cell_texts(*header);
        if !headers.is_empty() {
            fragment.push(pipe_row(&headers));
            fragment.push(pipe_row(&vec!["---".to_string(); headers.len()]));
        }

        for row in body {
            let cells = cell_texts(*row);
            if !cells.is_empty() {
                fragment.push(pipe_row(&cells));
            }
        }
    }

    fragment.push("\n".to_string());
    fragment
}

fn cell_texts(row: NodeRef<'_, Node>) -> Vec<String> {
    descendant_elements(row, &["th", "td"])
        .map(|cell| text_content(cell).trim().to_string())
        .collect()
}

fn pipe_row(cells: &[String]) -> String {
    format!("| {} |\n", cells.join(" | "))
}
