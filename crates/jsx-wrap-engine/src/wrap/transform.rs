use jsx_wrap_config::EditMode;

use crate::editing::{EditHost, UndoGrouping};
use crate::error::{EditStage, Inconsistency, WrapError};
use crate::parsing::rope::{LineIndex, Span};
use crate::targeting::TargetNode;

use super::{IndentStyle, TemplateLayout, WrapTemplate};

/// Remove the target's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteEdit {
    pub span: Span,
}

/// Insert the wrap template where the target used to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertTemplateEdit {
    pub at: usize,
    pub template: WrapTemplate,
}

/// The two edits of a wrap, in the order they must be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedEditPair {
    pub delete: DeleteEdit,
    pub insert: InsertTemplateEdit,
}

/// What a successful wrap left in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedWrap {
    /// Span of the inserted wrapper, tag names still empty
    pub inserted: Span,
    pub layout: TemplateLayout,
}

/// Build the delete + insert pair for `target` against `text`.
///
/// The wrapper is indented relative to the line the target starts on, one
/// `indent` level deeper for the original node.
pub fn build_edit(target: &TargetNode, text: &str, indent: IndentStyle) -> OrderedEditPair {
    let base = LineIndex::new(text).indentation_at(target.span.start);
    let template = WrapTemplate::new(&target.source_slice, base, &indent.unit());
    OrderedEditPair {
        delete: DeleteEdit { span: target.span },
        insert: InsertTemplateEdit {
            at: target.span.start,
            template,
        },
    }
}

/// Apply `pair` through `host` as one undoable action.
///
/// Before touching the document the host must still be at
/// `expected_version` and hold the target text at the target span; otherwise
/// nothing is edited. In grouped mode the delete opens an undo group and the
/// insert closes it. If the insert is rejected the group is aborted, so the
/// document ends up as it started.
pub fn apply_edit<H: EditHost + ?Sized>(
    host: &mut H,
    target: &TargetNode,
    pair: &OrderedEditPair,
    expected_version: u64,
    mode: EditMode,
) -> Result<AppliedWrap, WrapError> {
    let found = host.version();
    if found != expected_version {
        return Err(Inconsistency::VersionChanged {
            expected: expected_version,
            found,
        }
        .into());
    }
    let span = pair.delete.span;
    if span.slice(&host.text()) != Some(target.source_slice.as_str()) {
        return Err(Inconsistency::TextChanged { span }.into());
    }

    let template = &pair.insert.template;
    match mode {
        EditMode::Grouped => {
            host.delete(span, UndoGrouping::Start)
                .map_err(|source| WrapError::EditApplication {
                    stage: EditStage::Delete,
                    source,
                })?;

            if let Err(insert) = host.insert_template(pair.insert.at, template, UndoGrouping::End) {
                log::warn!("template insert rejected after delete, rolling back: {insert}");
                return Err(match host.abort_group() {
                    Ok(()) => WrapError::EditApplication {
                        stage: EditStage::Insert,
                        source: insert,
                    },
                    Err(rollback) => WrapError::RollbackFailed { insert, rollback },
                });
            }
        }
        EditMode::Combined => {
            host.replace_with_template(span, template)
                .map_err(|source| WrapError::EditApplication {
                    stage: EditStage::Replace,
                    source,
                })?;
        }
    }

    let layout = template.layout(pair.insert.at, "");
    Ok(AppliedWrap {
        inserted: Span::new(pair.insert.at, pair.insert.at + layout.text.len()),
        layout,
    })
}
