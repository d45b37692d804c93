//! Resolving the caret to the single node that gets wrapped.

pub mod cursor;
pub mod select;

pub use cursor::Selection;
pub use select::{TargetNode, containing, select};
