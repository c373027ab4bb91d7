use crate::source::{SourceText, Span};

/// Which fence character opened a fenced code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backtick,
    Tilde,
}

impl FenceKind {
    fn marker(self) -> char {
        match self {
            FenceKind::Backtick => '`',
            FenceKind::Tilde => '~',
        }
    }
}

/// A detected fence line: opening or closing.
#[derive(Debug, Clone, Copy)]
pub struct FenceSig {
    pub kind: FenceKind,
    pub len: usize,
    /// Info string after the fence (language tag), trimmed.
    pub info: Span,
}

/// Fenced code blocks (``` or ~~~). The interior is a raw zone.
pub struct CodeFence;

impl CodeFence {
    const MIN_LEN: usize = 3;
    const MAX_INDENT: usize = 3;

    /// Detects a fence line and returns its signature.
    pub fn sig(text: &SourceText, content: Span) -> Option<FenceSig> {
        let indent = text.leading_spaces(content.start, content.end);
        if indent > Self::MAX_INDENT {
            return None;
        }
        let start = content.start + indent;
        let kind = match text.char_at(start) {
            Some('`') => FenceKind::Backtick,
            Some('~') => FenceKind::Tilde,
            _ => return None,
        };
        let mut i = start;
        while i < content.end && text.char_at(i) == Some(kind.marker()) {
            i += 1;
        }
        let len = i - start;
        if len < Self::MIN_LEN {
            return None;
        }
        let info = text.trim(Span::new(i, content.end));
        // A backtick info string may not itself contain backticks.
        if kind == FenceKind::Backtick && text.find_char('`', info.start, info.end).is_some() {
            return None;
        }
        Some(FenceSig { kind, len, info })
    }

    /// Whether `line` closes a block opened with `open`: same marker, at
    /// least as long, and no info string.
    pub fn closes(open: &FenceSig, text: &SourceText, content: Span) -> bool {
        matches!(
            Self::sig(text, content),
            Some(sig) if sig.kind == open.kind && sig.len >= open.len && sig.info.is_empty()
        )
    }
}

/// Indented code blocks: four or more leading spaces.
pub struct IndentedCode;

impl IndentedCode {
    pub const INDENT: usize = 4;

    pub fn matches(text: &SourceText, content: Span) -> bool {
        !text.is_blank(content) && text.leading_spaces(content.start, content.end) >= Self::INDENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sig(s: &str) -> Option<FenceSig> {
        let text = SourceText::new(s);
        CodeFence::sig(&text, Span::new(0, text.len()))
    }

    #[test]
    fn backtick_fence_with_lang() {
        let text = SourceText::new("```rust");
        let sig = CodeFence::sig(&text, Span::new(0, 7)).unwrap();
        assert_eq!(sig.kind, FenceKind::Backtick);
        assert_eq!(sig.len, 3);
        assert_eq!(text.slice(sig.info), "rust");
    }

    #[test]
    fn tilde_fence() {
        let sig = sig("~~~~").unwrap();
        assert_eq!(sig.kind, FenceKind::Tilde);
        assert_eq!(sig.len, 4);
    }

    #[test]
    fn short_fence_fails() {
        assert!(sig("``").is_none());
        assert!(sig("plain").is_none());
    }

    #[test]
    fn backtick_info_may_not_contain_backticks() {
        assert!(sig("``` a`b").is_none());
    }

    #[test]
    fn closing_needs_same_kind_and_length() {
        let open = sig("````").unwrap();
        let check = |s: &str| {
            let text = SourceText::new(s);
            CodeFence::closes(&open, &text, Span::new(0, text.len()))
        };
        assert!(check("````"));
        assert!(check("`````"));
        assert!(!check("```"));
        assert!(!check("~~~~"));
        assert!(!check("````rust"));
    }

    #[test]
    fn indented_code_needs_four_spaces() {
        let text = SourceText::new("    code");
        assert!(IndentedCode::matches(&text, Span::new(0, 8)));
        let text = SourceText::new("   not");
        assert!(!IndentedCode::matches(&text, Span::new(0, 6)));
        let text = SourceText::new("        ");
        assert!(!IndentedCode::matches(&text, Span::new(0, 8)));
    }
}
