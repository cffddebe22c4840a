//! Error types for rope operations.

use thiserror::Error;

/// Errors produced by rope operations.
///
/// All errors are raised synchronously, before any observable value is
/// produced; no operation partially completes or clamps its arguments.
/// Callers translate these into user-facing diagnostics; this layer never
/// logs or swallows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum TextError {
    /// Character index outside `[0, len)`.
    #[error("character index {index} out of bounds for text of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Split index outside `[0, len]`.
    #[error("split index {index} out of range for text of length {len}")]
    SplitOutOfRange { index: usize, len: usize },
}
