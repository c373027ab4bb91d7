use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::engine::InlineContext;
use super::kinds::{
    BoldParser, CodeSpanParser, HtmlAnchorParser, ImageParser, ItalicParser, LineBreakParser,
    LinkAnchorParser, LinkParser, StrikethroughParser,
};
use super::types::InlineParseResult;

/// Identity of a registered inline parser, assigned by the registry in
/// registration order. Used for the ignored-parser set carried through
/// re-entrant parse calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParserId(u8);

impl ParserId {
    /// An id no registry hands out, for contexts built outside a dispatch.
    #[cfg(test)]
    pub(crate) fn detached() -> Self {
        Self(63)
    }
}

/// A set of parser identities excluded from a recursive inline-parse
/// invocation, preventing a construct from re-triggering itself inside its
/// own content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IgnoredParsers(u64);

impl IgnoredParsers {
    pub const EMPTY: Self = Self(0);

    #[must_use]
    pub fn with(self, id: ParserId) -> Self {
        Self(self.0 | 1 << id.0)
    }

    #[must_use]
    pub fn contains(self, id: ParserId) -> bool {
        self.0 & 1 << id.0 != 0
    }
}

/// One inline construct's parser.
///
/// `trip_chars` is the static set of characters that can possibly begin a
/// match; the engine only invokes a parser at positions holding one of its
/// trip characters. `try_parse` returns `None` for ordinary non-matches,
/// never an error, and a successful result must consume at least the trip
/// character itself.
pub trait InlineParser: Send + Sync {
    fn trip_chars(&self) -> &'static [char];
    fn try_parse(&self, cx: &InlineContext<'_>, trip_pos: usize) -> Option<InlineParseResult>;
}

/// Trip character -> ordered parser index.
///
/// Built once and read-only thereafter; registration order is the precedence
/// order when several parsers share a trip character (earlier wins). The
/// index turns "try every parser at every character" into a single scan for
/// the next trip character followed by a lookup.
pub struct ParserRegistry {
    parsers: Vec<Box<dyn InlineParser>>,
    by_trip: HashMap<char, Vec<ParserId>>,
    trip_chars: Vec<char>,
}

/// Process-wide registry with the full default parser set. Safe for
/// concurrent reads from simultaneous parse calls.
pub static DEFAULT_REGISTRY: Lazy<ParserRegistry> = Lazy::new(ParserRegistry::with_defaults);

impl ParserRegistry {
    pub fn new() -> Self {
        Self {
            parsers: Vec::new(),
            by_trip: HashMap::new(),
            trip_chars: Vec::new(),
        }
    }

    /// All default parsers. Order matters: it is the tie-break when several
    /// constructs could start at the same character (the explicit anchor-tag
    /// parser before the generic one on `<`, bold before italic on `*`/`_`).
    pub fn with_defaults() -> Self {
        let mut reg = Self::new();
        reg.register(Box::new(HtmlAnchorParser));
        reg.register(Box::new(LinkAnchorParser));
        reg.register(Box::new(CodeSpanParser));
        reg.register(Box::new(ImageParser));
        reg.register(Box::new(LinkParser));
        reg.register(Box::new(BoldParser));
        reg.register(Box::new(ItalicParser));
        reg.register(Box::new(StrikethroughParser));
        reg.register(Box::new(LineBreakParser));
        reg
    }

    /// Registers a parser and indexes its trip characters, returning the
    /// assigned identity. The ignored-parser bitset caps the registry at 64
    /// parsers; registration past that is a programming error.
    pub fn register(&mut self, parser: Box<dyn InlineParser>) -> ParserId {
        assert!(self.parsers.len() < 64, "parser registry full");
        let id = ParserId(self.parsers.len() as u8);
        for &c in parser.trip_chars() {
            self.by_trip.entry(c).or_default().push(id);
            if !self.trip_chars.contains(&c) {
                self.trip_chars.push(c);
            }
        }
        self.parsers.push(parser);
        id
    }

    /// Every character with at least one registered parser.
    pub fn trip_chars(&self) -> &[char] {
        &self.trip_chars
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    pub(crate) fn parsers_for(&self, c: char) -> &[ParserId] {
        self.by_trip.get(&c).map_or(&[], Vec::as_slice)
    }

    pub(crate) fn get(&self, id: ParserId) -> &dyn InlineParser {
        self.parsers[id.0 as usize].as_ref()
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignored_set_is_a_bitset() {
        let a = ParserId(0);
        let b = ParserId(5);
        let set = IgnoredParsers::EMPTY.with(a);
        assert!(set.contains(a));
        assert!(!set.contains(b));
        assert!(set.with(b).contains(b));
        assert!(set.with(b).contains(a));
    }

    #[test]
    fn registration_order_is_preserved_per_trip_char() {
        let reg = ParserRegistry::with_defaults();
        // `<` indexes the explicit anchor parser before the generic one.
        let angle = reg.parsers_for('<');
        assert_eq!(angle.len(), 2);
        assert!(angle[0].0 < angle[1].0);
        // `*` indexes bold before italic.
        let star = reg.parsers_for('*');
        assert_eq!(star.len(), 2);
        assert!(star[0].0 < star[1].0);
    }

    #[test]
    fn trip_chars_cover_default_constructs() {
        let reg = ParserRegistry::with_defaults();
        for c in ['<', '`', '!', '[', '*', '_', '~', '\n'] {
            assert!(reg.trip_chars().contains(&c), "missing trip char {c:?}");
        }
        assert!(reg.parsers_for('x').is_empty());
    }
}
