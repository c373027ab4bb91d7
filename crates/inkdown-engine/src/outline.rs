//! Serializable document outline.
//!
//! `Document` stores spans into the source; the outline resolves them to
//! owned strings so the tree can be serialized or compared without the
//! source text alongside.

use serde::Serialize;

use crate::document::Document;
use crate::parsing::blocks::types::BlockElement;
use crate::parsing::inline::types::InlineElement;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentOutline {
    pub blocks: Vec<BlockOutline>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockOutline {
    Paragraph {
        content: Vec<InlineOutline>,
    },
    Heading {
        level: u8,
        content: Vec<InlineOutline>,
    },
    List {
        ordered: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        start: Option<u64>,
        items: Vec<Vec<InlineOutline>>,
    },
    Quote {
        children: Vec<BlockOutline>,
    },
    CodeBlock {
        fenced: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        lang: Option<String>,
        text: String,
    },
    Table {
        headers: Vec<Vec<InlineOutline>>,
        rows: Vec<Vec<Vec<InlineOutline>>>,
    },
    ThematicBreak,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InlineOutline {
    Text {
        text: String,
    },
    Bold {
        children: Vec<InlineOutline>,
    },
    Italic {
        children: Vec<InlineOutline>,
    },
    Strikethrough {
        children: Vec<InlineOutline>,
    },
    Code {
        text: String,
    },
    Link {
        children: Vec<InlineOutline>,
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    Image {
        alt: String,
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    HtmlAnchor {
        #[serde(skip_serializing_if = "Option::is_none")]
        href: Option<String>,
        inner: String,
    },
    LinkAnchor {
        raw: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        link: Option<String>,
    },
    LineBreak,
}

pub fn outline(doc: &Document) -> DocumentOutline {
    DocumentOutline {
        blocks: doc.blocks().iter().map(|b| block(doc, b)).collect(),
    }
}

fn block(doc: &Document, element: &BlockElement) -> BlockOutline {
    match element {
        BlockElement::Paragraph { content, .. } => BlockOutline::Paragraph {
            content: inlines(doc, content),
        },
        BlockElement::Heading { level, content, .. } => BlockOutline::Heading {
            level: *level,
            content: inlines(doc, content),
        },
        BlockElement::List(list) => BlockOutline::List {
            ordered: list.ordered,
            start: list.start,
            items: list
                .items
                .iter()
                .map(|item| inlines(doc, &item.content))
                .collect(),
        },
        BlockElement::Quote { children, .. } => BlockOutline::Quote {
            children: children.iter().map(|c| block(doc, c)).collect(),
        },
        BlockElement::CodeBlock {
            fenced, lang, text, ..
        } => BlockOutline::CodeBlock {
            fenced: *fenced,
            lang: lang.clone(),
            text: text.clone(),
        },
        BlockElement::Table(table) => BlockOutline::Table {
            headers: table.headers.iter().map(|c| inlines(doc, c)).collect(),
            rows: table
                .rows
                .iter()
                .map(|row| row.iter().map(|c| inlines(doc, c)).collect())
                .collect(),
        },
        BlockElement::ThematicBreak { .. } => BlockOutline::ThematicBreak,
    }
}

fn inlines(doc: &Document, elements: &[InlineElement]) -> Vec<InlineOutline> {
    elements.iter().map(|e| inline(doc, e)).collect()
}

fn inline(doc: &Document, element: &InlineElement) -> InlineOutline {
    match element {
        InlineElement::PlainRun { span } => InlineOutline::Text {
            text: doc.slice(*span),
        },
        InlineElement::Bold { children, .. } => InlineOutline::Bold {
            children: inlines(doc, children),
        },
        InlineElement::Italic { children, .. } => InlineOutline::Italic {
            children: inlines(doc, children),
        },
        InlineElement::Strikethrough { children, .. } => InlineOutline::Strikethrough {
            children: inlines(doc, children),
        },
        InlineElement::CodeSpan { inner, .. } => InlineOutline::Code {
            text: doc.slice(*inner),
        },
        InlineElement::Link {
            children,
            url,
            title,
            ..
        } => InlineOutline::Link {
            children: inlines(doc, children),
            url: url.clone(),
            title: title.clone(),
        },
        InlineElement::Image {
            alt, url, title, ..
        } => InlineOutline::Image {
            alt: doc.slice(*alt),
            url: url.clone(),
            title: title.clone(),
        },
        InlineElement::HtmlAnchor { href, inner, .. } => InlineOutline::HtmlAnchor {
            href: href.clone(),
            inner: doc.slice(*inner),
        },
        InlineElement::LinkAnchor { raw, link, .. } => InlineOutline::LinkAnchor {
            raw: doc.slice(*raw),
            link: link.clone(),
        },
        InlineElement::LineBreak { .. } => InlineOutline::LineBreak,
    }
}
