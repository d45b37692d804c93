use lsp_types::Range;

use crate::parsing::rope::{LineIndex, Span};

/// The host's selection state, reduced to what target selection needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A single caret at a byte offset
    Caret(usize),
    /// A non-empty selected range
    Range(Span),
}

impl Selection {
    /// Build from byte offsets; an empty range is a caret.
    pub fn from_offsets(anchor: usize, head: usize) -> Self {
        let (start, end) = if anchor <= head {
            (anchor, head)
        } else {
            (head, anchor)
        };
        if start == end {
            Selection::Caret(start)
        } else {
            Selection::Range(Span::new(start, end))
        }
    }

    /// Convert a host range. `None` when either end falls outside the text.
    pub fn from_host(index: &LineIndex<'_>, range: Range) -> Option<Self> {
        let start = index.offset(range.start)?;
        let end = index.offset(range.end)?;
        Some(Self::from_offsets(start, end))
    }

    pub fn is_caret(self) -> bool {
        matches!(self, Selection::Caret(_))
    }
}
