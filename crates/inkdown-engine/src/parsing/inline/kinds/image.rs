use super::link::{find_matching_bracket, split_url_title};
use crate::parsing::inline::engine::InlineContext;
use crate::parsing::inline::registry::InlineParser;
use crate::parsing::inline::types::{InlineElement, InlineParseResult};
use crate::source::Span;

/// `![alt](url "title")`. Alt text is kept as a raw span rather than
/// re-entrant parsed; renderers treat it as plain text.
pub struct ImageParser;

impl ImageParser {
    const TRIP: &'static [char] = &['!'];
}

impl InlineParser for ImageParser {
    fn trip_chars(&self) -> &'static [char] {
        Self::TRIP
    }

    fn try_parse(&self, cx: &InlineContext<'_>, trip_pos: usize) -> Option<InlineParseResult> {
        let text = cx.text;
        if text.char_at(trip_pos + 1) != Some('[') {
            return None;
        }
        let alt_close = find_matching_bracket(text, trip_pos + 1, cx.max_end)?;
        let after = alt_close + 1;
        if text.char_at(after) != Some('(') {
            return None;
        }
        let rparen = text.find_char(')', after + 1, cx.max_end)?;
        let (url, title) = split_url_title(&text.slice(Span::new(after + 1, rparen)));
        Some(InlineParseResult::new(InlineElement::Image {
            span: Span::new(trip_pos, rparen + 1),
            alt: Span::new(trip_pos + 2, alt_close),
            url,
            title,
        }))
    }
}
