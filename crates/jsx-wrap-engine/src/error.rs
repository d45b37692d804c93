use thiserror::Error;

use crate::parsing::{ParseFailure, rope::Span};

/// Rejection reported by an edit host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("document is closed")]
    Closed,
    #[error("range {0:?} is outside the document or splits a character")]
    InvalidRange(Span),
    #[error("an undo group is already open")]
    GroupAlreadyOpen,
    #[error("no undo group is open")]
    NoOpenGroup,
    #[error("host rejected the edit: {0}")]
    Rejected(String),
}

/// Which host call of the wrap protocol failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStage {
    Delete,
    Insert,
    Replace,
}

impl std::fmt::Display for EditStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            EditStage::Delete => "delete",
            EditStage::Insert => "insert",
            EditStage::Replace => "replace",
        })
    }
}

/// Why a target computed earlier no longer fits the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Inconsistency {
    #[error("document version moved from {expected} to {found}")]
    VersionChanged { expected: u64, found: u64 },
    #[error("text at {span:?} no longer matches the target")]
    TextChanged { span: Span },
}

#[derive(Debug, Error)]
pub enum WrapError {
    #[error("language {0:?} is not enabled for wrapping")]
    UnsupportedLanguage(String),
    #[error(transparent)]
    Parse(#[from] ParseFailure),
    #[error("no JSX element or fragment under the cursor")]
    NoTarget,
    #[error("{stage} edit was rejected: {source}")]
    EditApplication {
        stage: EditStage,
        #[source]
        source: HostError,
    },
    #[error("target is stale, nothing was edited: {0}")]
    StructuralInconsistency(#[from] Inconsistency),
    #[error("insert failed ({insert}) and rolling back the delete also failed ({rollback})")]
    RollbackFailed {
        insert: HostError,
        rollback: HostError,
    },
}

impl WrapError {
    /// True for the failures that are simply "no action to offer".
    pub fn is_silent(&self) -> bool {
        matches!(
            self,
            WrapError::UnsupportedLanguage(_) | WrapError::Parse(_) | WrapError::NoTarget
        )
    }
}
