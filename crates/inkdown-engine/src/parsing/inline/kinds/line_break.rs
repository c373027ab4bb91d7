use crate::parsing::inline::engine::InlineContext;
use crate::parsing::inline::registry::InlineParser;
use crate::parsing::inline::types::{InlineElement, InlineParseResult};
use crate::source::Span;

/// Explicit line breaks inside textual block content.
///
/// Consumes the newline itself, pulling in a directly preceding `\r` and any
/// not-yet-flushed run of trailing spaces, so `\r\n` and hard-break spacing
/// stay part of the break element rather than the preceding text run.
pub struct LineBreakParser;

impl LineBreakParser {
    const TRIP: &'static [char] = &['\n'];
}

impl InlineParser for LineBreakParser {
    fn trip_chars(&self) -> &'static [char] {
        Self::TRIP
    }

    fn try_parse(&self, cx: &InlineContext<'_>, trip_pos: usize) -> Option<InlineParseResult> {
        let mut start = trip_pos;
        if start > cx.min_start && cx.text.char_at(start - 1) == Some('\r') {
            start -= 1;
        }
        while start > cx.min_start && cx.text.char_at(start - 1) == Some(' ') {
            start -= 1;
        }
        Some(InlineParseResult::new(InlineElement::LineBreak {
            span: Span::new(start, trip_pos + 1),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::engine::tests_support::context;
    use pretty_assertions::assert_eq;

    fn try_parse(s: &str, trip_pos: usize) -> Option<InlineParseResult> {
        context(s, |cx| LineBreakParser.try_parse(&cx, trip_pos))
    }

    #[test]
    fn newline_becomes_a_break() {
        let res = try_parse("a\nb", 1).unwrap();
        assert_eq!(res.span, Span::new(1, 2));
    }

    #[test]
    fn carriage_return_is_pulled_in() {
        let res = try_parse("a\r\nb", 2).unwrap();
        assert_eq!(res.span, Span::new(1, 3));
    }

    #[test]
    fn trailing_spaces_belong_to_the_break() {
        let res = try_parse("a  \nb", 3).unwrap();
        assert_eq!(res.span, Span::new(1, 4));
    }

    #[test]
    fn consumes_more_than_the_trip_character() {
        let res = try_parse("\n", 0).unwrap();
        assert!(res.span.end > 0);
    }
}
