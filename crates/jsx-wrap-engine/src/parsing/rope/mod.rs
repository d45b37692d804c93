pub mod lines;
pub mod slice;
pub mod span;

pub use lines::{LineIndex, LineRef};
pub use slice::preview;
pub use span::Span;
