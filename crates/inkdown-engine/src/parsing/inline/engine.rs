use crate::document::ReferenceTable;
use crate::source::{SourceText, Span};

use super::registry::{IgnoredParsers, ParserId, ParserRegistry};
use super::types::InlineElement;

/// Defense-in-depth cap on re-entrant inline parsing. The ignored-parser set
/// is the primary cycle prevention; this guard bounds adversarial nesting
/// that cycles through distinct parsers.
pub const MAX_INLINE_DEPTH: usize = 32;

/// Everything a parser may see during one `try_parse` invocation.
///
/// Parsers read the source window `[min_start, max_end)` and the document's
/// reference table; they mutate nothing. Re-entrant parsing of a construct's
/// content goes through [`InlineContext::parse_children`], which threads the
/// ignored-parser set and the depth guard.
#[derive(Clone, Copy)]
pub struct InlineContext<'a> {
    pub text: &'a SourceText,
    /// Start of the not-yet-flushed text preceding the trip position.
    pub min_start: usize,
    /// Hard upper bound; parsers never read at or past this offset.
    pub max_end: usize,
    /// Read-only reference-link table for resolving `[text][name]` forms.
    pub refs: &'a ReferenceTable,
    registry: &'a ParserRegistry,
    ignored: IgnoredParsers,
    depth: usize,
    current: ParserId,
}

impl InlineContext<'_> {
    /// Re-entrant inline parse of `span`, with the invoking parser excluded
    /// so a construct cannot re-trigger itself inside its own content.
    pub fn parse_children(&self, span: Span) -> Vec<InlineElement> {
        parse_at_depth(
            self.text,
            span,
            self.refs,
            self.registry,
            self.ignored.with(self.current),
            self.depth + 1,
        )
    }
}

/// Parses `[span.start, span.end)` into an ordered, non-overlapping sequence
/// of inline elements that partitions the range exactly; text between
/// matches becomes implicit `PlainRun` fillers.
pub fn parse_inlines(
    text: &SourceText,
    span: Span,
    refs: &ReferenceTable,
    registry: &ParserRegistry,
) -> Vec<InlineElement> {
    parse_at_depth(text, span, refs, registry, IgnoredParsers::EMPTY, 0)
}

fn parse_at_depth(
    text: &SourceText,
    span: Span,
    refs: &ReferenceTable,
    registry: &ParserRegistry,
    ignored: IgnoredParsers,
    depth: usize,
) -> Vec<InlineElement> {
    let (start, end) = (span.start, span.end.min(text.len()));
    let mut out = Vec::new();
    if start >= end {
        return out;
    }
    if depth > MAX_INLINE_DEPTH {
        out.push(InlineElement::PlainRun {
            span: Span::new(start, end),
        });
        return out;
    }

    let mut cursor = start;
    let mut text_start = start;
    while cursor < end {
        // Minimum-index scan across the trip-char index: the only characters
        // worth stopping at are those with at least one registered parser.
        let Some(trip_pos) = text.find_any(registry.trip_chars(), cursor, end) else {
            break;
        };
        let Some(trip_char) = text.char_at(trip_pos) else {
            break;
        };

        let mut matched = false;
        for &id in registry.parsers_for(trip_char) {
            if ignored.contains(id) {
                continue;
            }
            let cx = InlineContext {
                text,
                min_start: text_start,
                max_end: end,
                refs,
                registry,
                ignored,
                depth,
                current: id,
            };
            if let Some(res) = registry.get(id).try_parse(&cx, trip_pos) {
                // A parser must consume at least the trip character.
                // Zero-width results would stall the scan; reject them.
                debug_assert!(res.span.end > trip_pos, "zero-width inline match");
                if res.span.end <= trip_pos || res.span.start < text_start {
                    continue;
                }
                flush_plain(&mut out, text_start, res.span.start);
                out.push(res.element);
                text_start = res.span.end;
                cursor = res.span.end;
                matched = true;
                break;
            }
        }

        if !matched {
            // The trip character degrades to ordinary text content.
            cursor = trip_pos + 1;
        }
    }

    flush_plain(&mut out, text_start, end);
    out
}

fn flush_plain(out: &mut Vec<InlineElement>, start: usize, end: usize) {
    if end > start {
        out.push(InlineElement::PlainRun {
            span: Span::new(start, end),
        });
    }
}
