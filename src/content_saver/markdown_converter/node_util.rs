use ego_tree::NodeRef;
use scraper::Node;

pub(crate) fn get_node_tag_name<'a>(node: &NodeRef<'a, Node>) -> Option<&'a str> {
    match node.value() {
        Node::Element(element) => Some(element.name()),
        _ => None,
    }
}

/// Concatenated text of every descendant text node, untrimmed
pub(crate) fn text_content(node: NodeRef<'_, Node>) -> String {
    node.descendants()
        .filter_map(|descendant| match descendant.value() {
            Node::Text(text) => Some(&**text),
            _ => None,
        })
        .collect()
}

// Direct element children with one of the given tags; grandchildren are never visited.
pub(crate) fn child_elements<'a>(
    node: NodeRef<'a, Node>,
    tags: &'a [&'a str],
) -> impl Iterator<Item = NodeRef<'a, Node>> + 'a {
    node.children()
        .filter(move |child| get_node_tag_name(child).is_some_and(|tag| tags.contains(&tag)))
}

// Descendant elements with one of the given tags, in document order, excluding `node` itself.
pub(crate) fn descendant_elements<'a>(
    node: NodeRef<'a, Node>,
    tags: &'a [&'a str],
) -> impl Iterator<Item = NodeRef<'a, Node>> + 'a {
    node.descendants()
        .skip(1)
        .filter(move |descendant| get_node_tag_name(descendant).is_some_and(|tag| tags.contains(&tag)))
}
