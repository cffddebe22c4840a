//! The before/after pair produced by dividing a text.

use super::rope::Text;

/// Result of [`Text::split`] at index `k`.
///
/// `before` holds the characters in `[0, k)` and `after` the characters in
/// `[k, len)`; `before.append(&after)` materializes to the original
/// content. Both halves share the original's nodes and buffers wherever
/// the boundary allows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitText {
    pub before: Text,
    pub after: Text,
}
