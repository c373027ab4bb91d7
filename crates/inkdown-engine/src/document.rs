//! Parsed documents and the reference-link table.

use std::collections::HashMap;

use crate::parsing::blocks::{self, BlockContext, BlockOptions, types::BlockElement};
use crate::parsing::inline::registry::{DEFAULT_REGISTRY, ParserRegistry};
use crate::source::{SourceText, Span, lines_with_spans};

/// Target of a reference-link definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkReference {
    pub url: String,
    pub title: Option<String>,
}

/// Reference-link definitions, keyed case-insensitively by name.
///
/// Duplicate definitions keep the last one seen, so a later definition
/// overrides an earlier one for the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceTable {
    entries: HashMap<String, LinkReference>,
}

impl ReferenceTable {
    pub fn insert(&mut self, name: &str, reference: LinkReference) {
        self.entries.insert(name.to_lowercase(), reference);
    }

    pub fn get(&self, name: &str) -> Option<&LinkReference> {
        self.entries.get(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LinkReference)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// A fully parsed document: the immutable source plus the block tree and
/// the reference table built from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    text: SourceText,
    blocks: Vec<BlockElement>,
    refs: ReferenceTable,
}

impl Document {
    /// Parses with the default parser registry and options.
    pub fn parse(source: &str) -> Self {
        Self::parse_with(source, &DEFAULT_REGISTRY, &BlockOptions::default())
    }

    /// Two passes over the same lines: the first collects reference-link
    /// definitions without touching inline content, the second parses in
    /// full. Forward references resolve because the table is complete
    /// before any inline parsing runs.
    pub fn parse_with(source: &str, registry: &ParserRegistry, options: &BlockOptions) -> Self {
        let text = SourceText::new(source);
        let lines = lines_with_spans(&text);

        let mut refs = ReferenceTable::default();
        {
            let empty = ReferenceTable::default();
            let cx = BlockContext {
                text: &text,
                refs: &empty,
                registry,
                options,
                parse_inline_content: false,
            };
            blocks::parse_blocks(&cx, &lines, &mut refs);
        }

        let blocks = {
            let cx = BlockContext {
                text: &text,
                refs: &refs,
                registry,
                options,
                parse_inline_content: true,
            };
            let mut ignored = ReferenceTable::default();
            blocks::parse_blocks(&cx, &lines, &mut ignored)
        };

        Self { text, blocks, refs }
    }

    pub fn blocks(&self) -> &[BlockElement] {
        &self.blocks
    }

    pub fn references(&self) -> &ReferenceTable {
        &self.refs
    }

    pub fn text(&self) -> &SourceText {
        &self.text
    }

    /// Source text covered by `span`.
    pub fn slice(&self, span: Span) -> String {
        self.text.slice(span)
    }
}
