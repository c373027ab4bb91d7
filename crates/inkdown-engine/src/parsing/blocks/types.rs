use crate::parsing::inline::InlineElement;
use crate::source::Span;

/// A parsed block element.
///
/// Textual blocks own an ordered inline sequence; containers own nested
/// blocks. Spans cover the block's source text, terminators excluded.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockElement {
    Paragraph {
        span: Span,
        content: Vec<InlineElement>,
    },
    /// ATX heading, level 1-6.
    Heading {
        span: Span,
        level: u8,
        content: Vec<InlineElement>,
    },
    List(ListBlock),
    /// Blockquote container; the stripped body is block-parsed recursively.
    Quote {
        span: Span,
        children: Vec<BlockElement>,
    },
    CodeBlock {
        span: Span,
        fenced: bool,
        lang: Option<String>,
        /// Literal code text. A raw zone: never block- or inline-parsed.
        text: String,
    },
    Table(TableBlock),
    ThematicBreak {
        span: Span,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListBlock {
    pub span: Span,
    pub ordered: bool,
    /// First ordinal of an ordered list.
    pub start: Option<u64>,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub span: Span,
    pub content: Vec<InlineElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    pub span: Span,
    pub headers: Vec<Vec<InlineElement>>,
    /// Body rows of cells, each row normalized to the header cell count.
    pub rows: Vec<Vec<Vec<InlineElement>>>,
}

impl BlockElement {
    pub fn span(&self) -> Span {
        match self {
            BlockElement::Paragraph { span, .. }
            | BlockElement::Heading { span, .. }
            | BlockElement::Quote { span, .. }
            | BlockElement::CodeBlock { span, .. }
            | BlockElement::ThematicBreak { span } => *span,
            BlockElement::List(list) => list.span,
            BlockElement::Table(table) => table.span,
        }
    }
}
