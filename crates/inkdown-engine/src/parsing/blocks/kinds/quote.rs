use crate::source::{SourceText, Span};

/// Blockquote lines: `>` prefix with up to three spaces of indent.
pub struct QuoteRule;

impl QuoteRule {
    const MARKER: char = '>';
    const MAX_INDENT: usize = 3;

    /// Strips one quote marker, returning the remainder span.
    pub fn strip(text: &SourceText, content: Span) -> Option<Span> {
        let indent = text.leading_spaces(content.start, content.end);
        if indent > Self::MAX_INDENT {
            return None;
        }
        let marker = content.start + indent;
        if marker >= content.end || text.char_at(marker) != Some(Self::MARKER) {
            return None;
        }
        // One space after the marker belongs to the prefix.
        let mut rest = marker + 1;
        if rest < content.end && text.char_at(rest) == Some(' ') {
            rest += 1;
        }
        Some(Span::new(rest, content.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strip(s: &str) -> Option<String> {
        let text = SourceText::new(s);
        QuoteRule::strip(&text, Span::new(0, text.len())).map(|sp| text.slice(sp))
    }

    #[test]
    fn marker_and_one_space_are_stripped() {
        assert_eq!(strip("> quoted"), Some("quoted".to_string()));
        assert_eq!(strip(">tight"), Some("tight".to_string()));
        assert_eq!(strip(">  two"), Some(" two".to_string()));
    }

    #[test]
    fn bare_marker_yields_empty_remainder() {
        assert_eq!(strip(">"), Some(String::new()));
    }

    #[test]
    fn indent_limit() {
        assert_eq!(strip("   > ok"), Some("ok".to_string()));
        assert_eq!(strip("    > code"), None);
    }

    #[test]
    fn non_quote_lines_fail() {
        assert_eq!(strip("plain"), None);
        assert_eq!(strip(""), None);
    }
}
