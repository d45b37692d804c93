use super::{NodeKind, SyntaxTree, rope::Span};

/// A wrappable JSX node found in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub span: Span,
    pub kind: NodeKind,
    /// Exact source text covered by `span`
    pub source_slice: String,
    /// Position in traversal (document) order
    pub order: usize,
}

impl Candidate {
    /// Width in characters of the source text, not bytes.
    pub fn width(&self) -> usize {
        self.source_slice.chars().count()
    }
}

/// Walk every node of `tree` in document order and keep the JSX elements and
/// fragments.
///
/// Nested candidates are all kept: `<><a/><b/><c/></>` yields four. If a
/// node's span cannot be sliced from `text` (the tree was built from other
/// text), the walk stops and the candidates found so far are returned.
pub fn collect(tree: &SyntaxTree, text: &str) -> Vec<Candidate> {
    let mut out = Vec::new();
    let mut cursor = tree.root().walk();

    loop {
        let node = cursor.node();
        match NodeKind::of(&node) {
            kind @ (NodeKind::Element | NodeKind::Fragment) => {
                let span = Span::new(node.start_byte(), node.end_byte());
                let Some(slice) = span.slice(text) else {
                    log::warn!(
                        "candidate span {span:?} does not fit a {} byte text, keeping {} candidates",
                        text.len(),
                        out.len()
                    );
                    return out;
                };
                out.push(Candidate {
                    span,
                    kind,
                    source_slice: slice.to_string(),
                    order: out.len(),
                });
            }
            NodeKind::Other => {}
        }

        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                log::debug!("collected {} JSX candidates", out.len());
                return out;
            }
        }
    }
}
