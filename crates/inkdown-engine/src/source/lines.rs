use super::{span::Span, text::SourceText};

/// A single physical line with its character spans.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Full span of the line including its terminator, if any.
    pub span: Span,
    /// Span of the line content, excluding `\r` and `\n`.
    pub content: Span,
}

/// Splits the source into lines with their character spans.
///
/// Terminators stay inside `span` so that concatenating line spans
/// reproduces the source exactly; block parsing works on `content`.
pub fn lines_with_spans(text: &SourceText) -> Vec<LineRef> {
    let mut out = Vec::new();
    let mut start = 0;
    let len = text.len();
    let mut i = 0;
    while i < len {
        if text.char_at(i) == Some('\n') {
            let mut content_end = i;
            if content_end > start && text.char_at(content_end - 1) == Some('\r') {
                content_end -= 1;
            }
            out.push(LineRef {
                span: Span::new(start, i + 1),
                content: Span::new(start, content_end),
            });
            start = i + 1;
        }
        i += 1;
    }
    if start < len {
        out.push(LineRef {
            span: Span::new(start, len),
            content: Span::new(start, len),
        });
    }
    out
}
