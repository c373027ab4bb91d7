//! # Inline parsing
//!
//! Trip-character dispatch over a read-only parser registry.
//!
//! ## Architecture
//!
//! The engine scans a textual range for the next character that has at
//! least one registered parser (the "trip characters"), invokes only the
//! parsers indexed under that character in registration order, and takes
//! the first success. Text between matches is flushed as `PlainRun`, so the
//! output always partitions the input range exactly.
//!
//! ## Modules
//!
//! - **`types`**: `InlineElement` variants and `InlineParseResult`
//! - **`kinds`**: one parser per construct, each owning its delimiters
//! - **`registry`**: `InlineParser` trait, `ParserRegistry` trip-char index,
//!   ignored-parser bitset
//! - **`engine`**: `parse_inlines` scan loop and the re-entrant
//!   `InlineContext`
//!
//! ## Cycle prevention
//!
//! Constructs whose content is itself inline-parsed (emphasis, links)
//! recurse through `InlineContext::parse_children`, which excludes the
//! invoking parser via the ignored set and bumps a depth guard.

pub mod engine;
pub mod kinds;
pub mod registry;
pub mod types;

pub use engine::{InlineContext, MAX_INLINE_DEPTH, parse_inlines};
pub use registry::{DEFAULT_REGISTRY, IgnoredParsers, InlineParser, ParserId, ParserRegistry};
pub use types::{InlineElement, InlineParseResult};
