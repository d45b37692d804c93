use xi_rope::Rope;

use crate::error::HostError;

/// One undo step: the buffer as it was before the step's first edit.
#[derive(Debug, Clone)]
pub struct UndoGroup {
    pub(crate) before: Rope,
    pub(crate) selection_before: std::ops::Range<usize>,
    pub(crate) edits: usize,
}

/// Undo stack with at most one open group.
#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    done: Vec<UndoGroup>,
    open: Option<UndoGroup>,
}

impl UndoHistory {
    pub(crate) fn begin(
        &mut self,
        before: &Rope,
        selection_before: std::ops::Range<usize>,
    ) -> Result<(), HostError> {
        if self.open.is_some() {
            return Err(HostError::GroupAlreadyOpen);
        }
        self.open = Some(UndoGroup {
            before: before.clone(),
            selection_before,
            edits: 0,
        });
        Ok(())
    }

    pub(crate) fn require_open(&self) -> Result<(), HostError> {
        if self.open.is_none() {
            return Err(HostError::NoOpenGroup);
        }
        Ok(())
    }

    pub(crate) fn require_closed(&self) -> Result<(), HostError> {
        if self.open.is_some() {
            return Err(HostError::GroupAlreadyOpen);
        }
        Ok(())
    }

    /// Count an applied edit against the open group.
    pub(crate) fn record(&mut self) {
        if let Some(group) = self.open.as_mut() {
            group.edits += 1;
        }
    }

    pub(crate) fn commit(&mut self) {
        if let Some(group) = self.open.take() {
            self.done.push(group);
        }
    }

    pub(crate) fn abort(&mut self) -> Result<UndoGroup, HostError> {
        self.open.take().ok_or(HostError::NoOpenGroup)
    }

    pub(crate) fn pop(&mut self) -> Option<UndoGroup> {
        self.done.pop()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Number of completed undo steps.
    pub fn depth(&self) -> usize {
        self.done.len()
    }

    /// Edits recorded in the open group, if any.
    pub fn open_edits(&self) -> Option<usize> {
        self.open.as_ref().map(|g| g.edits)
    }
}
