use crate::source::Span;

/// A parsed inline element with character spans into the source.
///
/// All variants store spans rather than copied text where the content is
/// itself source text, enabling lossless round-trip. Elements are immutable
/// once constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum InlineElement {
    /// Plain text not claimed by any construct (also the gap filler the
    /// engine emits between matches).
    PlainRun { span: Span },
    /// `**strong**` or `__strong__` with re-entrant parsed children.
    Bold { span: Span, children: Vec<InlineElement> },
    /// `*emphasis*` or `_emphasis_` with re-entrant parsed children.
    Italic { span: Span, children: Vec<InlineElement> },
    /// `~~struck~~` with re-entrant parsed children.
    Strikethrough { span: Span, children: Vec<InlineElement> },
    /// A backtick code span. This is a raw zone: no parsing inside.
    CodeSpan {
        /// Full span including backticks.
        span: Span,
        /// Inner span between the backticks.
        inner: Span,
    },
    /// `[text](url "title")`, `[text][name]`, or `[name]`.
    Link {
        span: Span,
        children: Vec<InlineElement>,
        url: String,
        title: Option<String>,
    },
    /// `![alt](url "title")`. Alt text is kept as a raw span.
    Image {
        span: Span,
        alt: Span,
        url: String,
        title: Option<String>,
    },
    /// An explicit `<a ...>...</a>` tag with its extracted `href`.
    HtmlAnchor {
        span: Span,
        href: Option<String>,
        /// Raw content between the open and close tags.
        inner: Span,
    },
    /// A generic markup reference (`<member ...>...</a>` style).
    ///
    /// `link` holds the extracted `name` attribute when one could be parsed
    /// out of the consumed fragment; extraction failure leaves it `None`
    /// without failing the match.
    LinkAnchor {
        span: Span,
        /// The consumed tag text, excluding any swallowed trailing space.
        raw: Span,
        link: Option<String>,
    },
    /// An explicit line break (the newline itself, plus a preceding `\r`).
    LineBreak { span: Span },
}

impl InlineElement {
    /// The full consumed span of this element.
    pub fn span(&self) -> Span {
        match self {
            InlineElement::PlainRun { span }
            | InlineElement::Bold { span, .. }
            | InlineElement::Italic { span, .. }
            | InlineElement::Strikethrough { span, .. }
            | InlineElement::CodeSpan { span, .. }
            | InlineElement::Link { span, .. }
            | InlineElement::Image { span, .. }
            | InlineElement::HtmlAnchor { span, .. }
            | InlineElement::LinkAnchor { span, .. }
            | InlineElement::LineBreak { span } => *span,
        }
    }
}

/// A successful inline parse: the element plus the half-open range of source
/// text it consumed. The engine advances its cursor to `span.end` and uses
/// `span.start` to flush the preceding plain-text gap.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineParseResult {
    pub element: InlineElement,
    pub span: Span,
}

impl InlineParseResult {
    pub fn new(element: InlineElement) -> Self {
        let span = element.span();
        Self { element, span }
    }
}
