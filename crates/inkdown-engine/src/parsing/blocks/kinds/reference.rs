use crate::parsing::inline::kinds::link::split_url_title;
use crate::source::{SourceText, Span};

/// A reference-link definition line: `[name]: url "title"`.
///
/// These lines emit no block; the document's pre-pass collects them into
/// the reference table so later (or earlier) `[text][name]` inlines resolve.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceDefinition {
    pub name: String,
    pub url: String,
    pub title: Option<String>,
}

impl ReferenceDefinition {
    const MAX_INDENT: usize = 3;

    pub fn parse(text: &SourceText, content: Span) -> Option<Self> {
        let indent = text.leading_spaces(content.start, content.end);
        if indent > Self::MAX_INDENT {
            return None;
        }
        let open = content.start + indent;
        if text.char_at(open) != Some('[') {
            return None;
        }
        let close = text.find_char(']', open + 1, content.end)?;
        let name = text.slice(Span::new(open + 1, close));
        if name.trim().is_empty() {
            return None;
        }
        if text.char_at(close + 1) != Some(':') {
            return None;
        }
        let rest = text.trim(Span::new(close + 2, content.end));
        if rest.is_empty() {
            return None;
        }
        let (url, title) = split_url_title(&text.slice(rest));
        Some(Self {
            name: name.trim().to_string(),
            url,
            title,
        })
    }
}
