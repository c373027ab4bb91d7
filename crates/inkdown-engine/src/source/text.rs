use super::span::Span;

/// Immutable character buffer for one parse call.
///
/// All offsets are character offsets, not byte offsets, so span arithmetic
/// stays uniform for multi-byte input and adversarial slicing can never
/// split a code point. Parsers receive a logical window `[min_start, max_end)`
/// and every lookup here clamps to the buffer, so reads past the window
/// return `None` rather than panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    chars: Vec<char>,
}

impl SourceText {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
        }
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The character at `pos`, or `None` past the end.
    pub fn char_at(&self, pos: usize) -> Option<char> {
        self.chars.get(pos).copied()
    }

    /// Extracts the text for a span as an owned `String`, clamped to bounds.
    ///
    /// This allocates; prefer working with spans where possible.
    pub fn slice(&self, span: Span) -> String {
        let end = span.end.min(self.chars.len());
        let start = span.start.min(end);
        self.chars[start..end].iter().collect()
    }

    /// Checks whether the text at `pos` starts with `pat`.
    ///
    /// The whole match must end at or before `to`, like [`SourceText::find`].
    pub fn starts_with(&self, pat: &str, pos: usize, to: usize) -> bool {
        let to = to.min(self.chars.len());
        let mut i = pos;
        for pc in pat.chars() {
            if i >= to {
                return false;
            }
            match self.chars.get(i) {
                Some(&c) if c == pc => i += 1,
                _ => return false,
            }
        }
        true
    }

    /// Finds the first occurrence of `pat` in `[from, to)`.
    ///
    /// The whole match must end at or before `to`.
    pub fn find(&self, pat: &str, from: usize, to: usize) -> Option<usize> {
        let pat: Vec<char> = pat.chars().collect();
        let to = to.min(self.chars.len());
        if pat.is_empty() || pat.len() > to.saturating_sub(from) {
            return None;
        }
        (from..=to - pat.len()).find(|&i| self.chars[i..i + pat.len()] == pat[..])
    }

    /// Finds the first occurrence of `c` in `[from, to)`.
    pub fn find_char(&self, c: char, from: usize, to: usize) -> Option<usize> {
        let to = to.min(self.chars.len());
        (from..to).find(|&i| self.chars[i] == c)
    }

    /// Finds the first position in `[from, to)` holding any character in `set`.
    ///
    /// This is the minimum-index scan the inline engine runs over the trip
    /// character index; one pass over the window, not one pass per parser.
    pub fn find_any(&self, set: &[char], from: usize, to: usize) -> Option<usize> {
        let to = to.min(self.chars.len());
        (from..to).find(|&i| set.contains(&self.chars[i]))
    }

    /// Whether the character at `pos` is whitespace. Out-of-bounds counts as
    /// whitespace, which matches the boundary tests parsers need at the ends
    /// of their window.
    pub fn is_whitespace_at(&self, pos: usize) -> bool {
        self.chars.get(pos).is_none_or(|c| c.is_whitespace())
    }

    /// Whether every character in the span is whitespace (or the span is empty).
    pub fn is_blank(&self, span: Span) -> bool {
        let end = span.end.min(self.chars.len());
        self.chars[span.start.min(end)..end]
            .iter()
            .all(|c| c.is_whitespace())
    }

    /// Shrinks a span from both ends until neither touches whitespace.
    pub fn trim(&self, span: Span) -> Span {
        let mut start = span.start;
        let mut end = span.end.min(self.chars.len());
        while start < end && self.chars[start].is_whitespace() {
            start += 1;
        }
        while end > start && self.chars[end - 1].is_whitespace() {
            end -= 1;
        }
        Span { start, end }
    }

    /// Counts leading space characters from `from` up to `to`.
    pub fn leading_spaces(&self, from: usize, to: usize) -> usize {
        let to = to.min(self.chars.len());
        (from..to).take_while(|&i| self.chars[i] == ' ').count()
    }
}
