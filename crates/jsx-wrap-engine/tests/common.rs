// Helpers shared by the integration tests in this directory. Each test binary
// uses a different subset, hence the dead code allowances.
#![allow(dead_code)]

use jsx_wrap_engine::editing::{Document, EditHost, UndoGrouping};
use jsx_wrap_engine::{HostError, LanguageId, Span, WrapTemplate};
use lsp_types::{Position, Range};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Byte offset of the first occurrence of `needle` plus `skip`.
pub fn offset_of(text: &str, needle: &str, skip: usize) -> usize {
    text.find(needle).unwrap() + skip
}

/// Document with the caret at `caret`.
pub fn doc_at(text: &str, language: LanguageId, caret: usize) -> Document {
    let mut doc = Document::new(text, language);
    doc.set_selection(caret..caret);
    doc
}

pub fn caret(line: u32, character: u32) -> Range {
    let at = Position::new(line, character);
    Range::new(at, at)
}

/// Which host call a [`FailingHost`] rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Delete,
    Insert,
    InsertAndAbort,
}

/// A [`Document`] that rejects one step of the wrap protocol and records
/// every call it receives.
pub struct FailingHost {
    pub doc: Document,
    pub fail: FailOn,
    pub calls: Vec<&'static str>,
}

impl FailingHost {
    pub fn new(doc: Document, fail: FailOn) -> Self {
        Self {
            doc,
            fail,
            calls: Vec::new(),
        }
    }
}

impl EditHost for FailingHost {
    fn version(&self) -> u64 {
        self.doc.version()
    }

    fn text(&self) -> String {
        self.doc.text()
    }

    fn delete(&mut self, span: Span, grouping: UndoGrouping) -> Result<(), HostError> {
        self.calls.push("delete");
        if self.fail == FailOn::Delete {
            return Err(HostError::Rejected("delete refused".to_string()));
        }
        self.doc.delete(span, grouping)
    }

    fn insert_template(
        &mut self,
        at: usize,
        template: &WrapTemplate,
        grouping: UndoGrouping,
    ) -> Result<(), HostError> {
        self.calls.push("insert");
        if matches!(self.fail, FailOn::Insert | FailOn::InsertAndAbort) {
            return Err(HostError::Rejected("insert refused".to_string()));
        }
        self.doc.insert_template(at, template, grouping)
    }

    fn replace_with_template(
        &mut self,
        span: Span,
        template: &WrapTemplate,
    ) -> Result<(), HostError> {
        self.calls.push("replace");
        self.doc.replace_with_template(span, template)
    }

    fn abort_group(&mut self) -> Result<(), HostError> {
        self.calls.push("abort");
        if self.fail == FailOn::InsertAndAbort {
            return Err(HostError::Rejected("abort refused".to_string()));
        }
        self.doc.abort_group()
    }
}
