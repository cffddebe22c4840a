//! Immutable rope text values.
//!
//! This module provides the text representation shared by every consumer
//! of the crate:
//! - [`Text`] - an immutable rope over slices of original source buffers
//! - [`SplitText`] - the before/after pair produced by [`Text::split`]
//! - [`TextError`] - range errors for indexing and splitting
//! - [`Chars`] - lazy character iteration across the rope tree
//!
//! Every value is immutable after construction. Cloning a [`Text`] bumps a
//! reference count; appending, joining, and splitting share existing nodes
//! instead of copying buffer contents. Two texts compare equal whenever
//! their character sequences are equal, whatever their internal shape.
//!
//! This module has NO dependencies on other weft modules.

mod error;
mod iter;
mod leaf;
mod rope;
mod split;

pub use error::TextError;
pub use iter::Chars;
pub use rope::Text;
pub use split::SplitText;
