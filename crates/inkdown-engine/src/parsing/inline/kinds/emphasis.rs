use crate::parsing::inline::engine::InlineContext;
use crate::parsing::inline::registry::InlineParser;
use crate::parsing::inline::types::{InlineElement, InlineParseResult};
use crate::source::{SourceText, Span};

/// Delimiters shared by the emphasis parsers.
const DELIMS: &[char] = &['*', '_'];

/// Content between emphasis delimiters must be non-empty and must not touch
/// whitespace on either side; `* not em *` stays plain text.
fn content_is_well_flanked(text: &SourceText, content: Span) -> bool {
    !content.is_empty()
        && !text.is_whitespace_at(content.start)
        && !text.is_whitespace_at(content.end - 1)
}

/// `**strong**` / `__strong__`. Registered before [`ItalicParser`], so the
/// double delimiter wins when both could start at the same position.
pub struct BoldParser;

impl InlineParser for BoldParser {
    fn trip_chars(&self) -> &'static [char] {
        DELIMS
    }

    fn try_parse(&self, cx: &InlineContext<'_>, trip_pos: usize) -> Option<InlineParseResult> {
        let text = cx.text;
        let delim = text.char_at(trip_pos)?;
        let opener: String = [delim, delim].iter().collect();
        if !text.starts_with(&opener, trip_pos, cx.max_end) {
            return None;
        }
        let close = text.find(&opener, trip_pos + 2, cx.max_end)?;
        let content = Span::new(trip_pos + 2, close);
        if !content_is_well_flanked(text, content) {
            return None;
        }
        Some(InlineParseResult::new(InlineElement::Bold {
            span: Span::new(trip_pos, close + 2),
            children: cx.parse_children(content),
        }))
    }
}

/// `*emphasis*` / `_emphasis_`.
pub struct ItalicParser;

impl InlineParser for ItalicParser {
    fn trip_chars(&self) -> &'static [char] {
        DELIMS
    }

    fn try_parse(&self, cx: &InlineContext<'_>, trip_pos: usize) -> Option<InlineParseResult> {
        let text = cx.text;
        let delim = text.char_at(trip_pos)?;
        let close = text.find_char(delim, trip_pos + 1, cx.max_end)?;
        let content = Span::new(trip_pos + 1, close);
        if !content_is_well_flanked(text, content) {
            return None;
        }
        Some(InlineParseResult::new(InlineElement::Italic {
            span: Span::new(trip_pos, close + 1),
            children: cx.parse_children(content),
        }))
    }
}
