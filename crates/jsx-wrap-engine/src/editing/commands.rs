use std::ops::Range;

use xi_rope::{Delta, Rope, RopeInfo, delta::Builder};

use crate::error::HostError;
use crate::parsing::rope::Span;

use super::Document;

/// Edit commands understood by [`Document`]. Each compiles to one delta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    InsertText { at: usize, text: String },
    DeleteRange { range: Range<usize> },
    ReplaceRange { range: Range<usize>, text: String },
    /// Write the same text over several ascending, disjoint ranges at once
    ReplaceLinked { ranges: Vec<Range<usize>>, text: String },
}

/// What an applied [`Cmd`] changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Byte ranges of inserted text, in post-edit coordinates
    pub changed: Vec<Range<usize>>,
    pub new_selection: Range<usize>,
    /// Document version after the edit
    pub version: u64,
}

/// Reject commands whose ranges fall outside the buffer, run backwards,
/// split a character, or (for linked edits) overlap.
pub(crate) fn validate_command(doc: &Document, cmd: &Cmd) -> Result<(), HostError> {
    let text = doc.text();
    let check = |range: &Range<usize>| {
        let ok = range.start <= range.end
            && range.end <= text.len()
            && text.is_char_boundary(range.start)
            && text.is_char_boundary(range.end);
        if ok {
            Ok(())
        } else {
            Err(HostError::InvalidRange(Span {
                start: range.start,
                end: range.end,
            }))
        }
    };

    match cmd {
        Cmd::InsertText { at, .. } => check(&(*at..*at)),
        Cmd::DeleteRange { range } | Cmd::ReplaceRange { range, .. } => check(range),
        Cmd::ReplaceLinked { ranges, .. } => {
            for range in ranges {
                check(range)?;
            }
            match ranges.windows(2).find(|pair| pair[0].end > pair[1].start) {
                Some(pair) => Err(HostError::InvalidRange(Span::new(pair[1].start, pair[1].end))),
                None => Ok(()),
            }
        }
    }
}

pub(crate) fn compile_command(doc: &Document, cmd: &Cmd) -> Delta<RopeInfo> {
    let mut builder = Builder::new(doc.len());
    match cmd {
        Cmd::InsertText { at, text } => builder.replace(*at..*at, Rope::from(text.as_str())),
        Cmd::DeleteRange { range } => builder.delete(range.clone()),
        Cmd::ReplaceRange { range, text } => {
            builder.replace(range.clone(), Rope::from(text.as_str()))
        }
        Cmd::ReplaceLinked { ranges, text } => {
            for range in ranges {
                builder.replace(range.clone(), Rope::from(text.as_str()));
            }
        }
    }
    builder.build()
}

/// Caret after the command: at the end of the inserted text, or where the
/// deleted text used to start.
pub(crate) fn transform_selection_for_command(
    _doc: &Document,
    range: &Range<usize>,
    cmd: &Cmd,
) -> Range<usize> {
    let caret = match cmd {
        Cmd::InsertText { at, text } => at + text.len(),
        Cmd::DeleteRange { range } => range.start,
        Cmd::ReplaceRange { range, text } => range.start + text.len(),
        Cmd::ReplaceLinked { ranges, text } => match ranges.first() {
            Some(first) => first.start + text.len(),
            None => return range.clone(),
        },
    };
    caret..caret
}
