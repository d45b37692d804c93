/*!
 * # Editing
 *
 * The host side of a wrap: the [`EditHost`] protocol the wrap transformer
 * drives, and [`Document`], an in-memory host implementing it.
 *
 * ## Edit protocol
 *
 * A wrap reaches the host as two calls, a delete followed by a template
 * insert. Each call carries an [`UndoGrouping`] flag so the pair lands in the
 * undo history as one step. The insert is only issued after the delete has
 * returned `Ok`. If the insert is rejected, the transformer calls
 * [`EditHost::abort_group`] and the delete is reverted, so no half-applied
 * wrap can be undone on its own.
 *
 * ## Document
 *
 * - **Buffer**: a single `xi_rope::Rope`, edited only through [`Cmd`]s that
 *   compile to deltas
 * - **Patches**: every applied command returns a [`Patch`] with changed
 *   ranges, the new selection and the new version
 * - **History**: [`UndoHistory`] keeps completed groups plus at most one
 *   open group
 * - **Snippets**: template inserts leave a [`SnippetSession`] whose tag
 *   slots are edited together
 *
 * ```rust
 * use jsx_wrap_engine::editing::{Document, EditHost, UndoGrouping};
 * use jsx_wrap_engine::{LanguageId, Span};
 *
 * let mut doc = Document::new("<p>x</p>", LanguageId::javascript_react());
 * doc.delete(Span::new(0, 8), UndoGrouping::Start).unwrap();
 * doc.abort_group().unwrap();
 * assert_eq!(doc.text(), "<p>x</p>");
 * ```
 */

pub mod commands;
pub mod document;
pub mod history;
pub mod host;

pub use commands::{Cmd, Patch};
pub use document::{Document, SnippetSession};
pub use history::UndoHistory;
pub use host::{EditHost, UndoGrouping};
