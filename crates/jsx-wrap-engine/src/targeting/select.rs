use crate::parsing::{Candidate, NodeKind, rope::Span};

use super::Selection;

/// The node chosen for wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetNode {
    pub span: Span,
    pub kind: NodeKind,
    /// Exact original text of the node
    pub source_slice: String,
}

impl From<&Candidate> for TargetNode {
    fn from(c: &Candidate) -> Self {
        Self {
            span: c.span,
            kind: c.kind,
            source_slice: c.source_slice.clone(),
        }
    }
}

/// Candidates whose span contains `offset`, boundaries inclusive.
pub fn containing(candidates: &[Candidate], offset: usize) -> impl Iterator<Item = &Candidate> {
    candidates
        .iter()
        .filter(move |c| c.span.contains_offset(offset))
}

/// Pick the smallest candidate enclosing the caret.
///
/// A range selection never selects anything. Among containing candidates the
/// one with the fewest characters wins; equal widths go to the one seen first
/// in traversal order.
pub fn select(candidates: &[Candidate], selection: Selection) -> Option<TargetNode> {
    let Selection::Caret(offset) = selection else {
        return None;
    };

    let winner = containing(candidates, offset).min_by_key(|c| (c.width(), c.order))?;
    if !winner.kind.is_wrappable() {
        log::debug!("smallest node at {offset} is not wrappable: {:?}", winner.kind);
        return None;
    }

    log::debug!(
        "selected {:?} at {:?} for caret {offset}",
        winner.kind,
        winner.span
    );
    Some(TargetNode::from(winner))
}
