use crate::error::HostError;
use crate::parsing::rope::Span;
use crate::wrap::WrapTemplate;

/// Undo grouping flag sent with each edit.
///
/// A wrap is two edits that must undo as one step: the delete is sent with
/// `Start`, the insert with `End`. Anything between would use `Continue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoGrouping {
    /// Open a new group with this edit
    Start,
    /// Add to the open group
    Continue,
    /// Add to the open group and close it
    End,
    /// An undo step of its own; fails if a group is open
    Standalone,
}

/// The editing surface a wrap is applied through.
///
/// Every call either applies fully and returns `Ok` (the acknowledgement the
/// next step waits on) or changes nothing and returns the rejection.
pub trait EditHost {
    /// Monotonic counter bumped by every applied edit.
    fn version(&self) -> u64;

    /// Current full text of the document.
    fn text(&self) -> String;

    fn delete(&mut self, span: Span, grouping: UndoGrouping) -> Result<(), HostError>;

    /// Insert `template` at `at` and start its placeholder session.
    fn insert_template(
        &mut self,
        at: usize,
        template: &WrapTemplate,
        grouping: UndoGrouping,
    ) -> Result<(), HostError>;

    /// Replace `span` with `template` as one standalone edit, for hosts
    /// without undo grouping.
    fn replace_with_template(&mut self, span: Span, template: &WrapTemplate)
    -> Result<(), HostError>;

    /// Revert every edit of the open group and discard it.
    fn abort_group(&mut self) -> Result<(), HostError>;
}
