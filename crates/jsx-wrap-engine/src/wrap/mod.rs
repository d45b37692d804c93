//! Building and applying the wrap edit.
//!
//! [`build_edit`] turns a target into an [`OrderedEditPair`]: delete the
//! node, then insert a [`WrapTemplate`] holding the node's original text
//! between a linked opening and closing tag placeholder. [`apply_edit`]
//! drives the pair through an [`EditHost`](crate::editing::EditHost).

pub mod indent;
pub mod template;
pub mod transform;

pub use indent::{IndentStyle, detect_indent_style};
pub use template::{Segment, TAG_PLACEHOLDER, TemplateLayout, WrapTemplate};
pub use transform::{
    AppliedWrap, DeleteEdit, InsertTemplateEdit, OrderedEditPair, apply_edit, build_edit,
};
