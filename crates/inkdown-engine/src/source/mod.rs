//! Span and text utilities.
//!
//! Everything here operates on character offsets into an immutable
//! [`SourceText`]; parsed elements are expressed as [`Span`]s without
//! copying text out of the buffer.

pub mod lines;
pub mod span;
pub mod text;

pub use lines::{LineRef, lines_with_spans};
pub use span::Span;
pub use text::SourceText;
