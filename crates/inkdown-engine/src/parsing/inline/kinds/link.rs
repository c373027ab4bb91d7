use crate::parsing::inline::engine::InlineContext;
use crate::parsing::inline::registry::InlineParser;
use crate::parsing::inline::types::{InlineElement, InlineParseResult};
use crate::source::{SourceText, Span};

/// Links in three forms: inline `[text](url "title")`, reference
/// `[text][name]`, and shortcut `[name]`.
///
/// Link text is re-entrant inline parsed with this parser excluded, so
/// nested brackets never re-trigger it pathologically. Reference forms
/// resolve against the document table case-insensitively and degrade to a
/// non-match when the name is unknown, leaving the brackets as plain text.
pub struct LinkParser;

impl LinkParser {
    const TRIP: &'static [char] = &['['];
}

impl InlineParser for LinkParser {
    fn trip_chars(&self) -> &'static [char] {
        Self::TRIP
    }

    fn try_parse(&self, cx: &InlineContext<'_>, trip_pos: usize) -> Option<InlineParseResult> {
        let text = cx.text;
        let label_close = find_matching_bracket(text, trip_pos, cx.max_end)?;
        let label = Span::new(trip_pos + 1, label_close);
        let after = label_close + 1;

        if text.char_at(after) == Some('(') {
            let rparen = text.find_char(')', after + 1, cx.max_end)?;
            let (url, title) = split_url_title(&text.slice(Span::new(after + 1, rparen)));
            return Some(InlineParseResult::new(InlineElement::Link {
                span: Span::new(trip_pos, rparen + 1),
                children: cx.parse_children(label),
                url,
                title,
            }));
        }

        if text.char_at(after) == Some('[') {
            let name_close = text.find_char(']', after + 1, cx.max_end)?;
            let name_span = Span::new(after + 1, name_close);
            // `[text][]` collapses to the label as the name.
            let name = if name_span.is_empty() {
                text.slice(label)
            } else {
                text.slice(name_span)
            };
            let reference = cx.refs.get(&name)?;
            return Some(InlineParseResult::new(InlineElement::Link {
                span: Span::new(trip_pos, name_close + 1),
                children: cx.parse_children(label),
                url: reference.url.clone(),
                title: reference.title.clone(),
            }));
        }

        // Shortcut form: the label itself is the reference name.
        let reference = cx.refs.get(&text.slice(label))?;
        Some(InlineParseResult::new(InlineElement::Link {
            span: Span::new(trip_pos, label_close + 1),
            children: cx.parse_children(label),
            url: reference.url.clone(),
            title: reference.title.clone(),
        }))
    }
}

/// Finds the `]` matching the `[` at `open_pos`, honoring nesting.
pub(crate) fn find_matching_bracket(
    text: &SourceText,
    open_pos: usize,
    max_end: usize,
) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = open_pos;
    while i < max_end {
        match text.char_at(i)? {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Splits `url "title"` destination syntax. The title is optional and may be
/// quoted with `"` or `'`.
pub(crate) fn split_url_title(raw: &str) -> (String, Option<String>) {
    let raw = raw.trim();
    for quote in ['"', '\''] {
        if raw.ends_with(quote) {
            if let Some(open) = raw[..raw.len() - 1].find(quote) {
                let url = raw[..open].trim_end();
                let title = &raw[open + 1..raw.len() - 1];
                if !url.is_empty() {
                    return (url.to_string(), Some(title.to_string()));
                }
            }
        }
    }
    (raw.to_string(), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{LinkReference, ReferenceTable};
    use crate::parsing::inline::engine::tests_support::{context, context_with_refs};
    use pretty_assertions::assert_eq;

    fn try_parse(s: &str, trip_pos: usize) -> Option<InlineParseResult> {
        context(s, |cx| LinkParser.try_parse(&cx, trip_pos))
    }

    fn refs_with(name: &str, url: &str) -> ReferenceTable {
        let mut refs = ReferenceTable::default();
        refs.insert(
            name,
            LinkReference {
                url: url.to_string(),
                title: None,
            },
        );
        refs
    }

    #[test]
    fn inline_link_with_title() {
        let res = try_parse(r#"[text](https://x.dev "Site")"#, 0).unwrap();
        match res.element {
            InlineElement::Link {
                span, url, title, ..
            } => {
                assert_eq!(span, Span::new(0, 28));
                assert_eq!(url, "https://x.dev");
                assert_eq!(title.as_deref(), Some("Site"));
            }
            other => panic!("expected Link, got {other:?}"),
        }
    }

    #[test]
    fn inline_link_without_title() {
        let res = try_parse("[t](u)", 0).unwrap();
        match res.element {
            InlineElement::Link { url, title, .. } => {
                assert_eq!(url, "u");
                assert_eq!(title, None);
            }
            other => panic!("expected Link, got {other:?}"),
        }
    }

    #[test]
    fn nested_brackets_in_label() {
        let res = try_parse("[a [b] c](u)", 0).unwrap();
        assert_eq!(res.span, Span::new(0, 12));
    }

    #[test]
    fn reference_link_resolves_case_insensitively() {
        let refs = refs_with("Home", "https://x.dev");
        let res =
            context_with_refs("[text][HOME]", &refs, |cx| LinkParser.try_parse(&cx, 0)).unwrap();
        match res.element {
            InlineElement::Link { url, .. } => assert_eq!(url, "https://x.dev"),
            other => panic!("expected Link, got {other:?}"),
        }
    }

    #[test]
    fn collapsed_reference_uses_label_as_name() {
        let refs = refs_with("home", "https://x.dev");
        let res = context_with_refs("[home][]", &refs, |cx| LinkParser.try_parse(&cx, 0)).unwrap();
        assert_eq!(res.span, Span::new(0, 8));
    }

    #[test]
    fn shortcut_reference() {
        let refs = refs_with("home", "https://x.dev");
        let res = context_with_refs("[home] x", &refs, |cx| LinkParser.try_parse(&cx, 0)).unwrap();
        assert_eq!(res.span, Span::new(0, 6));
    }

    #[test]
    fn unknown_reference_degrades_to_non_match() {
        assert!(try_parse("[nope][missing]", 0).is_none());
        assert!(try_parse("[missing]", 0).is_none());
    }

    #[test]
    fn unterminated_label_is_a_non_match() {
        assert!(try_parse("[open(u)", 0).is_none());
    }

    #[test]
    fn consumes_more_than_the_trip_character() {
        assert!(try_parse("[t](u)", 0).unwrap().span.end > 0);
    }

    #[test]
    fn split_url_title_variants() {
        assert_eq!(split_url_title("u"), ("u".to_string(), None));
        assert_eq!(
            split_url_title(r#"u "t""#),
            ("u".to_string(), Some("t".to_string()))
        );
        assert_eq!(
            split_url_title("u 't'"),
            ("u".to_string(), Some("t".to_string()))
        );
        // A quote with no URL before it is not a title.
        assert_eq!(split_url_title(r#""t""#), (r#""t""#.to_string(), None));
    }
}
