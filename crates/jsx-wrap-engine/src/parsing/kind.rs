use tree_sitter::Node;

/// Closed set of node kinds the engine cares about.
///
/// Everything the wrap feature does switches on this tag rather than on raw
/// grammar node names, so a grammar upgrade only touches [`NodeKind::of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// `<div ...>...</div>` or `<br />`
    Element,
    /// `<>...</>`
    Fragment,
    Other,
}

impl NodeKind {
    pub fn of(node: &Node<'_>) -> Self {
        match node.kind() {
            "jsx_self_closing_element" => NodeKind::Element,
            // older grammars emit a dedicated fragment node
            "jsx_fragment" => NodeKind::Fragment,
            // current grammars model `<>` as an element whose opening tag has no name
            "jsx_element" => match node.child_by_field_name("open_tag") {
                Some(open) if open.child_by_field_name("name").is_none() => NodeKind::Fragment,
                _ => NodeKind::Element,
            },
            _ => NodeKind::Other,
        }
    }

    /// True for the kinds that can be wrapped.
    pub fn is_wrappable(self) -> bool {
        match self {
            NodeKind::Element | NodeKind::Fragment => true,
            NodeKind::Other => false,
        }
    }
}
