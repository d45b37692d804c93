use lsp_types::{Position, Range};

use super::span::Span;

/// A reference to a single line of the source with its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Byte span of the line content, line terminator excluded.
    pub span: Span,
    pub text: &'a str,
}

/// Converts between byte offsets and host `{line, character}` positions.
///
/// Lines are 0-based and characters are counted in UTF-16 code units, which is
/// the convention editors speaking LSP use. Built per request from the text it
/// indexes and never kept across edits.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { text, line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    pub fn line(&self, line: usize) -> Option<LineRef<'a>> {
        let start = *self.line_starts.get(line)?;
        let raw_end = self
            .line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.text.len());
        let raw = &self.text[start..raw_end];
        let content = raw
            .strip_suffix('\n')
            .map(|r| r.strip_suffix('\r').unwrap_or(r))
            .unwrap_or(raw);
        Some(LineRef {
            span: Span::new(start, start + content.len()),
            text: content,
        })
    }

    /// Index of the line containing `offset`.
    pub fn line_of(&self, offset: usize) -> usize {
        self.line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }

    /// Host position to byte offset.
    ///
    /// Returns `None` for lines past the end, characters past the end of the
    /// line, and characters that fall inside a surrogate pair. Nothing is clamped.
    pub fn offset(&self, position: Position) -> Option<usize> {
        let line = self.line(position.line as usize)?;
        let wanted = position.character as usize;
        let mut units = 0usize;
        for (byte_idx, ch) in line.text.char_indices() {
            if units == wanted {
                return Some(line.span.start + byte_idx);
            }
            if units > wanted {
                return None;
            }
            units += ch.len_utf16();
        }
        (units == wanted).then_some(line.span.end)
    }

    /// Byte offset to host position. `None` when the offset is past the end of
    /// the text or not on a char boundary.
    pub fn position(&self, offset: usize) -> Option<Position> {
        if !self.text.is_char_boundary(offset) {
            return None;
        }
        let line_no = self.line_of(offset);
        let line_start = self.line_starts[line_no];
        let character = self.text[line_start..offset].encode_utf16().count();
        Some(Position::new(line_no as u32, character as u32))
    }

    pub fn range(&self, span: Span) -> Option<Range> {
        Some(Range::new(self.position(span.start)?, self.position(span.end)?))
    }

    /// Leading whitespace of the line holding `offset`.
    pub fn indentation_at(&self, offset: usize) -> &'a str {
        let Some(line) = self.line(self.line_of(offset)) else {
            return "";
        };
        let trimmed = line.text.trim_start_matches([' ', '\t']);
        &line.text[..line.text.len() - trimmed.len()]
    }
}
