use super::anchor::extract_attribute;
use crate::parsing::inline::engine::InlineContext;
use crate::parsing::inline::registry::InlineParser;
use crate::parsing::inline::types::{InlineElement, InlineParseResult};
use crate::source::Span;

/// Explicit `<a ...>...</a>` anchor tags, with their `href` extracted.
///
/// Registered before [`super::LinkAnchorParser`] on `<`; the generic parser
/// defers to this one whenever the window opens with a literal `<a`.
pub struct HtmlAnchorParser;

impl HtmlAnchorParser {
    const TRIP: &'static [char] = &['<'];
    const OPEN: &'static str = "<a";
    const CLOSE: &'static str = "</a>";
}

impl InlineParser for HtmlAnchorParser {
    fn trip_chars(&self) -> &'static [char] {
        Self::TRIP
    }

    fn try_parse(&self, cx: &InlineContext<'_>, trip_pos: usize) -> Option<InlineParseResult> {
        let text = cx.text;
        if !text.starts_with(Self::OPEN, trip_pos, cx.max_end) {
            return None;
        }
        // `<abc>` is not an anchor; the tag name must end after `a`.
        let after_name = trip_pos + Self::OPEN.len();
        if after_name >= cx.max_end {
            return None;
        }
        if !matches!(text.char_at(after_name), Some(c) if c.is_whitespace() || c == '>' || c == '/')
        {
            return None;
        }

        let gt = text.find_char('>', after_name, cx.max_end)?;
        let open_end = gt + 1;
        let href = extract_attribute(&text.slice(Span::new(trip_pos, open_end)), "href");

        // Self-closing open tag carries no content.
        if gt > trip_pos && text.char_at(gt - 1) == Some('/') {
            return Some(InlineParseResult::new(InlineElement::HtmlAnchor {
                span: Span::new(trip_pos, open_end),
                href,
                inner: Span::new(open_end, open_end),
            }));
        }

        let close = text.find(Self::CLOSE, open_end, cx.max_end)?;
        Some(InlineParseResult::new(InlineElement::HtmlAnchor {
            span: Span::new(trip_pos, close + Self::CLOSE.len()),
            href,
            inner: Span::new(open_end, close),
        }))
    }
}
