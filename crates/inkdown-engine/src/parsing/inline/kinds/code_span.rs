use crate::parsing::inline::engine::InlineContext;
use crate::parsing::inline::registry::InlineParser;
use crate::parsing::inline::types::{InlineElement, InlineParseResult};
use crate::source::Span;

/// Backtick code spans. A raw zone: the content is never inline-parsed, so
/// `` `[not a link]` `` stays a code span.
pub struct CodeSpanParser;

impl CodeSpanParser {
    const TRIP: &'static [char] = &['`'];
    const TICK: char = '`';
}

impl InlineParser for CodeSpanParser {
    fn trip_chars(&self) -> &'static [char] {
        Self::TRIP
    }

    fn try_parse(&self, cx: &InlineContext<'_>, trip_pos: usize) -> Option<InlineParseResult> {
        let close = cx.text.find_char(Self::TICK, trip_pos + 1, cx.max_end)?;
        Some(InlineParseResult::new(InlineElement::CodeSpan {
            span: Span::new(trip_pos, close + 1),
            inner: Span::new(trip_pos + 1, close),
        }))
    }
}
