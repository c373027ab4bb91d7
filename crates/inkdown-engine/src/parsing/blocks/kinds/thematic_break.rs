use crate::source::{SourceText, Span};

/// Thematic breaks: at least three `-`, `*`, or `_` of one kind, with only
/// spaces between.
pub struct ThematicBreakRule;

impl ThematicBreakRule {
    const MARKERS: &'static [char] = &['-', '*', '_'];
    const MIN_COUNT: usize = 3;

    pub fn matches(text: &SourceText, content: Span) -> bool {
        let mut marker = None;
        let mut count = 0usize;
        for i in content.start..content.end.min(text.len()) {
            match text.char_at(i) {
                Some(' ') | Some('\t') => {}
                Some(c) if Self::MARKERS.contains(&c) => match marker {
                    None => {
                        marker = Some(c);
                        count = 1;
                    }
                    Some(m) if m == c => count += 1,
                    Some(_) => return false,
                },
                _ => return false,
            }
        }
        count >= Self::MIN_COUNT
    }
}
