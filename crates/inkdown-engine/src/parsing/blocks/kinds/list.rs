use crate::source::{SourceText, Span};

/// A detected list marker at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    pub ordered: bool,
    /// Ordinal for ordered markers (`3.` gives 3).
    pub start: Option<u64>,
    /// Offset of the item text after the marker and its spacing.
    pub content_start: usize,
}

impl ListMarker {
    const BULLETS: &'static [char] = &['-', '*', '+'];
    const MAX_INDENT: usize = 3;
    const MAX_DIGITS: usize = 9;

    pub fn parse(text: &SourceText, content: Span) -> Option<Self> {
        let indent = text.leading_spaces(content.start, content.end);
        if indent > Self::MAX_INDENT {
            return None;
        }
        let marker = content.start + indent;
        let c = text.char_at(marker)?;

        if Self::BULLETS.contains(&c) {
            return Self::after_marker(text, content, marker + 1).map(|content_start| Self {
                ordered: false,
                start: None,
                content_start,
            });
        }

        if c.is_ascii_digit() {
            let mut i = marker;
            let mut value = 0u64;
            while let Some(d) = text.char_at(i).and_then(|c| c.to_digit(10)) {
                value = value * 10 + u64::from(d);
                i += 1;
                if i - marker > Self::MAX_DIGITS {
                    return None;
                }
            }
            if !matches!(text.char_at(i), Some('.') | Some(')')) {
                return None;
            }
            return Self::after_marker(text, content, i + 1).map(|content_start| Self {
                ordered: true,
                start: Some(value),
                content_start,
            });
        }

        None
    }

    /// The marker must be followed by a space (or end the line, for an empty
    /// item); the item text starts after that spacing.
    fn after_marker(text: &SourceText, content: Span, pos: usize) -> Option<usize> {
        if pos >= content.end {
            return Some(content.end);
        }
        if text.char_at(pos) != Some(' ') {
            return None;
        }
        Some(pos + text.leading_spaces(pos, content.end))
    }
}
