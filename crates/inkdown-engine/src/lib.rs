//! # inkdown-engine
//!
//! Markdown parsing engine built around immutable source text and span
//! arithmetic: parsed elements carry character offsets into the source
//! rather than copied strings, so concatenating the slices of a parse
//! reproduces the input exactly.
//!
//! Parsing happens in two layers. The block engine splits lines into
//! structural elements (headings, quotes, lists, code, tables) with a
//! reference-definition pre-pass so forward reference links resolve. The
//! inline engine walks textual spans via trip-character dispatch over a
//! parser registry, recursing for nested constructs with cycle prevention.
//!
//! Entry point: [`Document::parse`] (or [`Document::parse_with`] for a
//! custom registry and options).

pub mod document;
pub mod io;
pub mod outline;
pub mod parsing;
pub mod source;

pub use document::{Document, LinkReference, ReferenceTable};
pub use outline::{BlockOutline, DocumentOutline, InlineOutline, outline};
pub use parsing::{BlockElement, BlockOptions, InlineElement, InlineParser, ParserRegistry};
pub use source::{SourceText, Span};
