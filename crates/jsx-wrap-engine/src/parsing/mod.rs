//! # Parsing
//!
//! Turns source text into a positioned syntax tree and extracts the JSX nodes
//! that can be wrapped.
//!
//! - **`rope`**: byte spans, host position conversion and text previews
//! - **`kind`**: the closed [`NodeKind`] tag set
//! - **`collect`**: the flat candidate list, in document order
//! - **`invariants`**: runtime checks over collected candidates (used by tests)
//!
//! The grammar itself is tree-sitter's. Two dialects are understood: typed
//! (TSX) and plain JSX. Callers may pass a hint, but [`parse`] always tries the
//! other dialect before giving up, so a wrong or missing hint never blocks a
//! parse.

pub mod collect;
pub mod invariants;
pub mod kind;
pub mod rope;

pub use collect::{Candidate, collect};
pub use invariants::check as invariants;
pub use kind::NodeKind;

use thiserror::Error;
use tree_sitter::{Language, Node, Parser, Tree};

/// Source dialect understood by the parser adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// TypeScript with JSX
    Tsx,
    /// JavaScript with JSX
    Jsx,
}

impl Dialect {
    fn language(self) -> Language {
        match self {
            Dialect::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Dialect::Jsx => tree_sitter_javascript::LANGUAGE.into(),
        }
    }

    /// Dialects to try, hinted one first. TSX is the wider grammar so it leads
    /// when there is no hint.
    pub fn attempt_order(hint: Option<Dialect>) -> [Dialect; 2] {
        match hint {
            Some(Dialect::Jsx) => [Dialect::Jsx, Dialect::Tsx],
            Some(Dialect::Tsx) | None => [Dialect::Tsx, Dialect::Jsx],
        }
    }
}

#[derive(Debug, Error)]
pub enum ParseFailure {
    #[error("failed to load the {dialect:?} grammar: {source}")]
    Grammar {
        dialect: Dialect,
        source: tree_sitter::LanguageError,
    },
    #[error("source is not valid TSX or JSX (first error at byte {offset})")]
    Syntax { offset: usize },
    #[error("parser returned no tree")]
    Aborted,
}

/// A successfully parsed document. Owns the tree-sitter tree; nodes borrow it.
pub struct SyntaxTree {
    tree: Tree,
    dialect: Dialect,
}

impl SyntaxTree {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// The dialect that produced an error-free tree.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }
}

impl std::fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntaxTree")
            .field("dialect", &self.dialect)
            .field("root", &self.root().kind())
            .finish()
    }
}

/// Parse `text`, trying each dialect until one yields an error-free tree.
///
/// Any tree containing an error or missing node counts as a failure for that
/// dialect. When every dialect fails, the first syntax error seen is reported.
pub fn parse(text: &str, hint: Option<Dialect>) -> Result<SyntaxTree, ParseFailure> {
    let mut first_failure = None;

    for dialect in Dialect::attempt_order(hint) {
        match parse_as(text, dialect) {
            Ok(tree) => {
                log::debug!("parsed {} bytes as {dialect:?}", text.len());
                return Ok(tree);
            }
            Err(failure) => {
                log::debug!("{dialect:?} parse rejected: {failure}");
                // a syntax error says more than a setup failure, keep the first one
                let keep = match &first_failure {
                    None => true,
                    Some(ParseFailure::Syntax { .. }) => false,
                    Some(_) => matches!(failure, ParseFailure::Syntax { .. }),
                };
                if keep {
                    first_failure = Some(failure);
                }
            }
        }
    }

    Err(first_failure.unwrap_or(ParseFailure::Aborted))
}

fn parse_as(text: &str, dialect: Dialect) -> Result<SyntaxTree, ParseFailure> {
    let mut parser = Parser::new();
    parser
        .set_language(&dialect.language())
        .map_err(|source| ParseFailure::Grammar { dialect, source })?;

    let tree = parser.parse(text, None).ok_or(ParseFailure::Aborted)?;
    let root = tree.root_node();
    if root.has_error() {
        let offset = first_error_offset(root).unwrap_or(root.start_byte());
        return Err(ParseFailure::Syntax { offset });
    }

    Ok(SyntaxTree { tree, dialect })
}

/// Start byte of the first error or missing node in document order.
fn first_error_offset(root: Node<'_>) -> Option<usize> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node.start_byte());
        }
        // only descend into subtrees that actually contain the error
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}
