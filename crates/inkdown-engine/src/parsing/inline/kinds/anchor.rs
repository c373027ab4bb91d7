use quick_xml::Reader;
use quick_xml::events::Event;

use crate::parsing::inline::engine::InlineContext;
use crate::parsing::inline::registry::InlineParser;
use crate::parsing::inline::types::{InlineElement, InlineParseResult};
use crate::source::Span;

/// Generic markup reference: any tag-like span closed by `</a>` or `/>`,
/// e.g. `<member name="x">text</a>`.
///
/// Defers to [`super::HtmlAnchorParser`] when the window opens with a
/// literal `<a`: that sibling is registered first and owns explicit anchor
/// tags. An unterminated open never swallows following content; the trip
/// character degrades to plain text instead.
pub struct LinkAnchorParser;

impl LinkAnchorParser {
    const TRIP: &'static [char] = &['<'];
    /// Prefix reserved for the explicit anchor-tag parser.
    pub(crate) const EXPLICIT_OPEN: &'static str = "<a";
    const CLOSE_TAG: &'static str = "</a>";
    const SELF_CLOSE: &'static str = "/>";
}

impl InlineParser for LinkAnchorParser {
    fn trip_chars(&self) -> &'static [char] {
        Self::TRIP
    }

    fn try_parse(&self, cx: &InlineContext<'_>, trip_pos: usize) -> Option<InlineParseResult> {
        let text = cx.text;
        if text.starts_with(Self::EXPLICIT_OPEN, trip_pos, cx.max_end) {
            return None;
        }

        // First closing marker wins, whichever kind it is.
        let close_tag = text.find(Self::CLOSE_TAG, trip_pos + 1, cx.max_end);
        let self_close = text.find(Self::SELF_CLOSE, trip_pos + 1, cx.max_end);
        let (close_start, close_len) = match (close_tag, self_close) {
            (Some(t), Some(s)) if s < t => (s, Self::SELF_CLOSE.len()),
            (Some(t), _) => (t, Self::CLOSE_TAG.len()),
            (None, Some(s)) => (s, Self::SELF_CLOSE.len()),
            (None, None) => return None,
        };

        // A second open tag before the close means the first never closed.
        if text
            .find(Self::EXPLICIT_OPEN, trip_pos + 1, close_start)
            .is_some()
        {
            return None;
        }

        let raw = Span::new(trip_pos, close_start + close_len);
        let mut end = raw.end;
        // Swallow a single trailing space as formatting normalization.
        if end < cx.max_end && text.char_at(end) == Some(' ') {
            end += 1;
        }

        // Metadata extraction failure still yields a successful match; the
        // text must be consumed as this construct either way.
        let link = extract_attribute(&text.slice(raw), "name");
        Some(InlineParseResult::new(InlineElement::LinkAnchor {
            span: Span::new(trip_pos, end),
            raw,
            link,
        }))
    }
}

/// Pulls one attribute value out of a tag fragment by parsing it as XML.
///
/// Lenient on purpose: mismatched end tags and malformed attribute tails are
/// tolerated, and any parse error simply returns `None`.
pub(crate) fn extract_attribute(fragment: &str, attr_name: &str) -> Option<String> {
    let mut reader = Reader::from_str(fragment);
    reader.config_mut().check_end_names = false;
    loop {
        match reader.read_event() {
            Ok(Event::Start(e) | Event::Empty(e)) => {
                for attr in e.attributes().with_checks(false).flatten() {
                    if attr.key.as_ref() == attr_name.as_bytes() {
                        return attr.unescape_value().ok().map(|v| v.into_owned());
                    }
                }
                // Only the opening tag carries the metadata.
                return None;
            }
            Ok(Event::Eof) | Err(_) => return None,
            Ok(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::engine::tests_support::context;
    use pretty_assertions::assert_eq;

    fn try_parse(s: &str, trip_pos: usize) -> Option<InlineParseResult> {
        context(s, |cx| LinkAnchorParser.try_parse(&cx, trip_pos))
    }

    #[test]
    fn member_reference_matches_through_close_tag() {
        let input = r#"<member name="x">text</a> rest"#;
        let res = try_parse(input, 0).unwrap();
        // Consumes through `</a>` plus the one trailing space.
        assert_eq!(res.span, Span::new(0, 26));
        match res.element {
            InlineElement::LinkAnchor { raw, link, .. } => {
                assert_eq!(raw, Span::new(0, 25));
                assert_eq!(link.as_deref(), Some("x"));
            }
            other => panic!("expected LinkAnchor, got {other:?}"),
        }
    }

    #[test]
    fn self_closing_form_matches() {
        let res = try_parse(r#"<see cref="y"/>"#, 0).unwrap();
        match res.element {
            InlineElement::LinkAnchor { raw, link, .. } => {
                assert_eq!(raw, Span::new(0, 15));
                assert_eq!(link, None);
            }
            other => panic!("expected LinkAnchor, got {other:?}"),
        }
    }

    #[test]
    fn explicit_anchor_prefix_is_rejected() {
        assert!(try_parse(r#"<a href="x">text</a>"#, 0).is_none());
    }

    #[test]
    fn unterminated_open_is_a_non_match() {
        assert!(try_parse("<b incomplete", 0).is_none());
    }

    #[test]
    fn reopened_tag_before_close_is_malformed() {
        assert!(try_parse("<member <a>text</a>", 0).is_none());
    }

    #[test]
    fn malformed_attributes_still_match_with_empty_link() {
        let res = try_parse("<member ==garbage>text</a>", 0).unwrap();
        match res.element {
            InlineElement::LinkAnchor { link, .. } => assert_eq!(link, None),
            other => panic!("expected LinkAnchor, got {other:?}"),
        }
    }

    #[test]
    fn consumes_more_than_the_trip_character() {
        let res = try_parse("<x/>", 0).unwrap();
        assert!(res.span.end > 0);
    }

    #[test]
    fn extract_attribute_tolerates_mismatched_end_tag() {
        assert_eq!(
            extract_attribute(r#"<member name="m">body</a>"#, "name").as_deref(),
            Some("m")
        );
        assert_eq!(extract_attribute("<member>body</a>", "name"), None);
        assert_eq!(extract_attribute("not a tag", "name"), None);
    }
}
