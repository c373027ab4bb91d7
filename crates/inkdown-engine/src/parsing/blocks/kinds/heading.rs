use crate::source::{SourceText, Span};

/// ATX headings: `#` through `######` followed by the title.
pub struct Heading;

impl Heading {
    const MARKER: char = '#';
    const MAX_LEVEL: u8 = 6;
    const MAX_INDENT: usize = 3;

    /// Returns `(level, title span)` when the line is a heading.
    ///
    /// The title has surrounding whitespace and an optional closing `#` run
    /// stripped; `#hash` without a following space is not a heading.
    pub fn parse_marker(text: &SourceText, content: Span) -> Option<(u8, Span)> {
        let indent = text.leading_spaces(content.start, content.end);
        if indent > Self::MAX_INDENT {
            return None;
        }
        let mut i = content.start + indent;
        let mut level = 0u8;
        while i < content.end && text.char_at(i) == Some(Self::MARKER) {
            level += 1;
            // Seven or more markers can never form a heading; stop counting
            // before an arbitrarily long run overflows the level.
            if level > Self::MAX_LEVEL {
                return None;
            }
            i += 1;
        }
        if level == 0 {
            return None;
        }
        if i < content.end && !text.is_whitespace_at(i) {
            return None;
        }

        let mut title = text.trim(Span::new(i, content.end));
        // Optional closing sequence: `## title ##`.
        let mut end = title.end;
        while end > title.start && text.char_at(end - 1) == Some(Self::MARKER) {
            end -= 1;
        }
        if end < title.end && (end == title.start || text.is_whitespace_at(end - 1)) {
            title = text.trim(Span::new(title.start, end));
        }
        Some((level, title))
    }
}
