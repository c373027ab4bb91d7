//! Parsing engines.
//!
//! `inline` turns a text span into ordered inline elements via
//! trip-character dispatch; `blocks` turns source lines into block elements
//! and hands textual content down to the inline engine.

pub mod blocks;
pub mod inline;

pub use blocks::BlockOptions;
pub use blocks::types::{BlockElement, ListBlock, ListItem, TableBlock};
pub use inline::registry::{InlineParser, ParserRegistry};
pub use inline::types::InlineElement;
