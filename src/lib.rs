//! # weft
//!
//! Immutable text rope for lossless parser frameworks.
//!
//! Parsers that must reproduce their input byte for byte keep every scrap
//! of source text, including whitespace and comments, attached to the
//! syntax tree. This crate provides the value type such frameworks build
//! on: an immutable rope that concatenates and splits views of the
//! original source buffer without ever copying it.
//!
//! ## Module structure
//!
//! ```text
//! text   → rope values: Text, SplitText, TextError, char iteration
//! ```
//!
//! Tokenizers feed source slices in as leaves; combinator layers join and
//! split them into the payloads attached to syntax tokens. This crate
//! depends on no tokenizer or syntax layer; the dependency direction is
//! strictly rope → consumers.

/// Rope values: [`Text`], [`SplitText`], [`TextError`], char iteration
pub mod text;

// Re-export the full public surface at the crate root
pub use text::{Chars, SplitText, Text, TextError};
