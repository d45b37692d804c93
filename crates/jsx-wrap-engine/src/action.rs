//! The "wrap with tag" code action.
//!
//! [`WrapWithTag::provide_actions`] answers the host's "which actions apply
//! here?" query. It never fails: an unsupported language, an unparsable
//! document or a caret outside any JSX node all mean an empty list.
//! [`WrapWithTag::invoke`] runs the chosen action against the host.

use jsx_wrap_config::Config;
use lsp_types::CodeActionKind;

use crate::editing::EditHost;
use crate::error::WrapError;
use crate::language::LanguageId;
use crate::parsing::{
    self,
    rope::{LineIndex, preview},
};
use crate::targeting::{self, Selection, TargetNode};
use crate::wrap::{AppliedWrap, IndentStyle, apply_edit, build_edit};

/// Command identifier registered with the host.
pub const WRAP_WITH_TAG_COMMAND: &str = "wrapwith-for-jsx.wrapWithTag";

/// Snapshot of the host state an action request is answered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionContext {
    pub text: String,
    pub language: LanguageId,
    /// `None` when the host selection has no `{line, character}` form
    pub selection: Option<lsp_types::Range>,
    pub version: u64,
}

/// One offered action, bound to the target it was computed for.
#[derive(Debug, Clone, PartialEq)]
pub struct WrapAction {
    pub title: String,
    pub kind: CodeActionKind,
    pub command: &'static str,
    pub target: TargetNode,
    /// Document version the target was computed at
    pub version: u64,
}

#[derive(Debug, Clone, Default)]
pub struct WrapWithTag {
    config: Config,
}

impl WrapWithTag {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse `ctx.text` and pick the node under the caret.
    pub fn resolve_target(&self, ctx: &ActionContext) -> Result<TargetNode, WrapError> {
        if !self.config.accepts_language(ctx.language.as_str()) {
            return Err(WrapError::UnsupportedLanguage(ctx.language.to_string()));
        }

        let index = LineIndex::new(&ctx.text);
        let selection = ctx
            .selection
            .and_then(|range| Selection::from_host(&index, range))
            .ok_or(WrapError::NoTarget)?;
        if !selection.is_caret() {
            return Err(WrapError::NoTarget);
        }

        let tree = parsing::parse(&ctx.text, ctx.language.dialect_hint())?;
        let candidates = parsing::collect(&tree, &ctx.text);
        targeting::select(&candidates, selection).ok_or(WrapError::NoTarget)
    }

    /// Actions available at the caret. Empty rather than failing.
    pub fn provide_actions(&self, ctx: &ActionContext) -> Vec<WrapAction> {
        match self.resolve_target(ctx) {
            Ok(target) => vec![WrapAction {
                title: self.config.action_title.clone(),
                kind: CodeActionKind::QUICKFIX,
                command: WRAP_WITH_TAG_COMMAND,
                target,
                version: ctx.version,
            }],
            Err(e) => {
                log::debug!("no wrap action offered: {e}");
                Vec::new()
            }
        }
    }

    /// Wrap the action's target in `host`.
    ///
    /// Fails without editing anything if the document changed since the
    /// action was offered.
    pub fn invoke<H: EditHost + ?Sized>(
        &self,
        action: &WrapAction,
        host: &mut H,
    ) -> Result<AppliedWrap, WrapError> {
        let text = host.text();
        let indent = IndentStyle::resolve(&self.config.indent, &text);
        let pair = build_edit(&action.target, &text, indent);

        let applied = apply_edit(
            host,
            &action.target,
            &pair,
            action.version,
            self.config.edit_mode,
        )
        .inspect_err(|e| log::warn!("wrap of {:?} failed: {e}", action.target.span))?;

        log::info!(
            "wrapped {:?} {:?} at {:?}",
            action.target.kind,
            preview(&text, action.target.span, 40),
            action.target.span
        );
        Ok(applied)
    }
}
