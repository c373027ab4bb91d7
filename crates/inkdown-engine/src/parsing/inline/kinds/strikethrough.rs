use crate::parsing::inline::engine::InlineContext;
use crate::parsing::inline::registry::InlineParser;
use crate::parsing::inline::types::{InlineElement, InlineParseResult};
use crate::source::Span;

/// `~~struck~~`. Optional construct; applications can leave it unregistered.
pub struct StrikethroughParser;

impl StrikethroughParser {
    const TRIP: &'static [char] = &['~'];
    const DELIM: &'static str = "~~";
}

impl InlineParser for StrikethroughParser {
    fn trip_chars(&self) -> &'static [char] {
        Self::TRIP
    }

    fn try_parse(&self, cx: &InlineContext<'_>, trip_pos: usize) -> Option<InlineParseResult> {
        let text = cx.text;
        if !text.starts_with(Self::DELIM, trip_pos, cx.max_end) {
            return None;
        }
        let close = text.find(Self::DELIM, trip_pos + 2, cx.max_end)?;
        let content = Span::new(trip_pos + 2, close);
        if content.is_empty() || text.is_whitespace_at(content.start) {
            return None;
        }
        Some(InlineParseResult::new(InlineElement::Strikethrough {
            span: Span::new(trip_pos, close + 2),
            children: cx.parse_children(content),
        }))
    }
}
