//! # jsx-wrap-engine
//!
//! Wraps the JSX element or fragment under the caret in a new tag whose name
//! the user types afterwards.
//!
//! - **`parsing`**: tree-sitter parse (TSX, falling back to JSX) and the flat
//!   list of wrappable candidates
//! - **`targeting`**: picks the smallest candidate enclosing the caret
//! - **`wrap`**: builds the delete + template insert pair and applies it
//! - **`editing`**: the [`EditHost`](editing::EditHost) protocol and the
//!   in-memory [`Document`](editing::Document) host
//! - **`action`**: the code action surface tying it together
//!
//! ```rust
//! use jsx_wrap_engine::editing::Document;
//! use jsx_wrap_engine::{LanguageId, WrapWithTag};
//!
//! let mut doc = Document::new("const a = <p>x</p>;", LanguageId::javascript_react());
//! doc.set_selection(12..12);
//!
//! let wrap = WrapWithTag::default();
//! let actions = wrap.provide_actions(&doc.action_context());
//! wrap.invoke(&actions[0], &mut doc).unwrap();
//! doc.type_placeholder("div").unwrap();
//!
//! assert_eq!(doc.text(), "const a = <div>\n  <p>x</p>\n</div>;");
//! ```

pub mod action;
pub mod editing;
pub mod error;
pub mod language;
pub mod parsing;
pub mod targeting;
pub mod wrap;

pub use action::{ActionContext, WRAP_WITH_TAG_COMMAND, WrapAction, WrapWithTag};
pub use error::{EditStage, HostError, Inconsistency, WrapError};
pub use language::LanguageId;
pub use parsing::rope::Span;
pub use parsing::{Dialect, NodeKind, ParseFailure};
pub use targeting::{Selection, TargetNode};
pub use wrap::{AppliedWrap, WrapTemplate};
