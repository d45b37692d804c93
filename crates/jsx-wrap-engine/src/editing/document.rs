use xi_rope::{Delta, Rope, RopeInfo};

use crate::action::ActionContext;
use crate::editing::{Cmd, EditHost, Patch, UndoGrouping, UndoHistory};
use crate::error::HostError;
use crate::language::LanguageId;
use crate::parsing::rope::{LineIndex, Span};
use crate::wrap::WrapTemplate;

/// Placeholder state left behind by a template insert.
///
/// The tag slots are linked: [`Document::type_placeholder`] rewrites all of
/// them at once, so typing the opening tag name also writes the closing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetSession {
    pub tag_slots: Vec<Span>,
    pub final_stop: usize,
}

/// In-memory edit host.
///
/// Holds one document the way an editor would while the wrap action runs:
///
/// ## Buffer
/// - **Lossless storage**: entire document in one `xi_rope::Rope` buffer
/// - **Command edits**: every change is a [`Cmd`] compiled to a `Delta`
/// - **Versioning**: each applied delta bumps `version`, which is how stale
///   wrap targets are detected
///
/// ## Undo
/// - Edits are collected into undo groups following the [`UndoGrouping`]
///   flag they arrive with
/// - One undo step restores the buffer as it was before the group started
/// - An open group can be aborted, which is the rollback path of a failed wrap
///
/// ## Templates
/// - Inserting a [`WrapTemplate`] expands it with an empty tag name and opens
///   a [`SnippetSession`] with the linked tag slots and the final stop
///
/// ```rust
/// # use jsx_wrap_engine::editing::{Cmd, Document};
/// # use jsx_wrap_engine::LanguageId;
/// let mut doc = Document::new("<p>x</p>", LanguageId::typescript_react());
/// doc.apply(Cmd::InsertText { at: 0, text: "<div/>".to_string() }).unwrap();
/// assert_eq!(doc.text(), "<div/><p>x</p>");
/// assert!(doc.undo().unwrap());
/// assert_eq!(doc.text(), "<p>x</p>");
/// ```
pub struct Document {
    /// xi-rope buffer containing entire document as UTF-8 bytes
    pub(crate) buffer: Rope,
    /// Current selection/cursor position as byte offsets in buffer
    pub(crate) selection: std::ops::Range<usize>,
    /// Version counter incremented on each edit (enables change detection)
    pub(crate) version: u64,
    pub(crate) language: LanguageId,
    pub(crate) history: UndoHistory,
    pub(crate) snippet: Option<SnippetSession>,
    pub(crate) closed: bool,
}

impl Document {
    pub fn new(text: &str, language: LanguageId) -> Self {
        let buffer = Rope::from(text);
        let len = buffer.len();
        Self {
            buffer,
            selection: len..len, // Start with cursor at end
            version: 0,
            language,
            history: UndoHistory::default(),
            snippet: None,
            closed: false,
        }
    }

    /// Apply a command as an undo step of its own.
    pub fn apply(&mut self, cmd: Cmd) -> Result<Patch, HostError> {
        self.apply_grouped(cmd, UndoGrouping::Standalone)
    }

    /// Apply a command under an explicit undo grouping flag.
    ///
    /// Nothing changes when the command or the grouping is rejected.
    pub fn apply_grouped(&mut self, cmd: Cmd, grouping: UndoGrouping) -> Result<Patch, HostError> {
        if self.closed {
            return Err(HostError::Closed);
        }
        crate::editing::commands::validate_command(self, &cmd)?;

        match grouping {
            UndoGrouping::Start => self.history.begin(&self.buffer, self.selection.clone())?,
            UndoGrouping::Continue | UndoGrouping::End => self.history.require_open()?,
            UndoGrouping::Standalone => {
                self.history.require_closed()?;
                self.history.begin(&self.buffer, self.selection.clone())?;
            }
        }

        let patch = self.apply_unchecked(&cmd);
        self.history.record();
        if matches!(grouping, UndoGrouping::End | UndoGrouping::Standalone) {
            self.history.commit();
        }
        Ok(patch)
    }

    fn apply_unchecked(&mut self, cmd: &Cmd) -> Patch {
        let delta = self.compile_command(cmd);

        // Track changed ranges for the patch
        let mut changed = Vec::new();
        let mut cursor = 0;
        for op in delta.els.iter() {
            match op {
                xi_rope::delta::DeltaElement::Copy(from, to) => {
                    cursor += to - from;
                }
                xi_rope::delta::DeltaElement::Insert(inserted) => {
                    let start = cursor;
                    let end = cursor + inserted.len();
                    changed.push(start..end);
                    cursor = end;
                }
            }
        }

        self.buffer = delta.apply(&self.buffer);

        // any edit ends a placeholder session; template inserts open a new one afterwards
        self.snippet = None;

        let new_selection = self.transform_selection_for_command(&self.selection, cmd);
        self.selection = new_selection.clone();

        self.version += 1;

        Patch {
            changed,
            new_selection,
            version: self.version,
        }
    }

    /// Undo the most recent completed group. Refused while a group is open.
    pub fn undo(&mut self) -> Result<bool, HostError> {
        if self.closed {
            return Err(HostError::Closed);
        }
        self.history.require_closed()?;
        let Some(group) = self.history.pop() else {
            return Ok(false);
        };
        self.restore(group.before, group.selection_before);
        Ok(true)
    }

    fn restore(&mut self, buffer: Rope, selection: std::ops::Range<usize>) {
        self.buffer = buffer;
        self.selection = selection;
        self.snippet = None;
        self.version += 1;
    }

    /// Type `name` into every linked tag slot of the active snippet.
    pub fn type_placeholder(&mut self, name: &str) -> Result<Patch, HostError> {
        let Some(session) = self.snippet.take() else {
            return Err(HostError::Rejected("no active snippet".to_string()));
        };

        let ranges = session.tag_slots.iter().map(|s| s.range()).collect();
        let patch = match self.apply(Cmd::ReplaceLinked {
            ranges,
            text: name.to_string(),
        }) {
            Ok(patch) => patch,
            Err(e) => {
                self.snippet = Some(session);
                return Err(e);
            }
        };

        // shift each slot by what the slots before it grew or shrank
        let mut grown = 0usize;
        let mut shrunk = 0usize;
        let mut tag_slots = Vec::with_capacity(session.tag_slots.len());
        for slot in &session.tag_slots {
            let start = slot.start + grown - shrunk;
            tag_slots.push(Span::new(start, start + name.len()));
            grown += name.len();
            shrunk += slot.len();
        }
        self.snippet = Some(SnippetSession {
            tag_slots,
            final_stop: session.final_stop + grown - shrunk,
        });
        Ok(patch)
    }

    /// Leave the snippet, putting the caret on its final stop.
    pub fn finish_snippet(&mut self) -> Option<usize> {
        let session = self.snippet.take()?;
        self.selection = session.final_stop..session.final_stop;
        Some(session.final_stop)
    }

    pub fn snippet(&self) -> Option<&SnippetSession> {
        self.snippet.as_ref()
    }

    /// Mark the document closed; every later edit is rejected.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Get the current selection range
    pub fn selection(&self) -> std::ops::Range<usize> {
        self.selection.clone()
    }

    /// Set the selection range, clamped to the buffer, put in order and moved
    /// back onto char boundaries
    pub fn set_selection(&mut self, selection: std::ops::Range<usize>) {
        let text = self.text();
        let snap = |offset: usize| {
            let mut offset = offset.min(text.len());
            while !text.is_char_boundary(offset) {
                offset -= 1;
            }
            offset
        };
        let (a, b) = (snap(selection.start), snap(selection.end));
        self.selection = a.min(b)..a.max(b);
    }

    /// Current selection in host `{line, character}` form.
    pub fn host_selection(&self) -> Option<lsp_types::Range> {
        let text = self.text();
        LineIndex::new(&text).range(Span::new(self.selection.start, self.selection.end))
    }

    /// Everything the action surface needs to decide on an offer, read fresh.
    pub fn action_context(&self) -> ActionContext {
        ActionContext {
            text: self.text(),
            language: self.language.clone(),
            selection: self.host_selection(),
            version: self.version,
        }
    }

    pub fn language(&self) -> &LanguageId {
        &self.language
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// Get the current version
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Get the current text content
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Get the buffer length
    pub(crate) fn len(&self) -> usize {
        self.buffer.len()
    }

    pub(crate) fn compile_command(&self, cmd: &Cmd) -> Delta<RopeInfo> {
        crate::editing::commands::compile_command(self, cmd)
    }

    pub(crate) fn transform_selection_for_command(
        &self,
        range: &std::ops::Range<usize>,
        cmd: &Cmd,
    ) -> std::ops::Range<usize> {
        crate::editing::commands::transform_selection_for_command(self, range, cmd)
    }

    fn open_snippet(&mut self, at: usize, template: &WrapTemplate) {
        let layout = template.layout(at, "");
        if let Some(first) = layout.tag_slots.first() {
            self.selection = first.range();
        }
        self.snippet = Some(SnippetSession {
            tag_slots: layout.tag_slots,
            final_stop: layout.final_stop,
        });
    }
}

impl EditHost for Document {
    fn version(&self) -> u64 {
        self.version
    }

    fn text(&self) -> String {
        self.buffer.to_string()
    }

    fn delete(&mut self, span: Span, grouping: UndoGrouping) -> Result<(), HostError> {
        self.apply_grouped(Cmd::DeleteRange { range: span.range() }, grouping)
            .map(|_| ())
    }

    fn insert_template(
        &mut self,
        at: usize,
        template: &WrapTemplate,
        grouping: UndoGrouping,
    ) -> Result<(), HostError> {
        let text = template.layout(at, "").text;
        self.apply_grouped(Cmd::InsertText { at, text }, grouping)?;
        self.open_snippet(at, template);
        Ok(())
    }

    fn replace_with_template(
        &mut self,
        span: Span,
        template: &WrapTemplate,
    ) -> Result<(), HostError> {
        let text = template.layout(span.start, "").text;
        self.apply(Cmd::ReplaceRange {
            range: span.range(),
            text,
        })?;
        self.open_snippet(span.start, template);
        Ok(())
    }

    fn abort_group(&mut self) -> Result<(), HostError> {
        let group = self.history.abort()?;
        log::debug!("aborting undo group of {} edit(s)", group.edits);
        self.restore(group.before, group.selection_before);
        Ok(())
    }
}

impl Clone for Document {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
            selection: self.selection.clone(),
            version: self.version,
            language: self.language.clone(),
            // a copy starts with its own, empty undo history
            history: UndoHistory::default(),
            snippet: self.snippet.clone(),
            closed: self.closed,
        }
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        // Compare the essential state that matters for equality
        self.buffer.to_string() == other.buffer.to_string()
            && self.selection == other.selection
            && self.version == other.version
            && self.language == other.language
        // Note: undo history and snippet state are editor session details
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("len", &self.buffer.len())
            .field("selection", &self.selection)
            .field("version", &self.version)
            .field("language", &self.language)
            .field("closed", &self.closed)
            .finish()
    }
}
