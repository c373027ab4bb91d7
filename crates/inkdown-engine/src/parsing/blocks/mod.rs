//! # Block parsing
//!
//! Line-based leading-marker dispatch, mirroring the inline engine's
//! trip-character model one level up: each block rule owns its marker
//! syntax (`kinds`), and the engine tries rules in a fixed precedence
//! order at each line that can start a block.
//!
//! Textual block content is handed to the inline engine; fenced and
//! indented code are raw zones. Reference-link definition lines produce no
//! block at all: they feed the document's reference table.

pub mod kinds;
pub mod types;

use crate::document::{LinkReference, ReferenceTable};
use crate::parsing::inline::{InlineElement, ParserRegistry, parse_inlines};
use crate::source::{LineRef, SourceText, Span};

use kinds::{
    CodeFence, Heading, IndentedCode, ListMarker, QuoteRule, ReferenceDefinition, TableRule,
    ThematicBreakRule,
};
use types::{BlockElement, ListBlock, ListItem, TableBlock};

/// Feature switches for optional block constructs.
#[derive(Debug, Clone)]
pub struct BlockOptions {
    pub tables: bool,
}

impl Default for BlockOptions {
    fn default() -> Self {
        Self { tables: true }
    }
}

/// Shared read-only state for one block pass.
pub(crate) struct BlockContext<'a> {
    pub text: &'a SourceText,
    pub refs: &'a ReferenceTable,
    pub registry: &'a ParserRegistry,
    pub options: &'a BlockOptions,
    /// The reference pre-pass runs with inline parsing disabled.
    pub parse_inline_content: bool,
}

impl BlockContext<'_> {
    fn inlines(&self, span: Span) -> Vec<InlineElement> {
        if self.parse_inline_content {
            parse_inlines(self.text, span, self.refs, self.registry)
        } else {
            Vec::new()
        }
    }
}

/// Parses `lines` into ordered block elements, collecting reference-link
/// definitions into `defs` as a side channel.
pub(crate) fn parse_blocks(
    cx: &BlockContext<'_>,
    lines: &[LineRef],
    defs: &mut ReferenceTable,
) -> Vec<BlockElement> {
    let mut blocks = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        if cx.text.is_blank(lines[i].content) {
            i += 1;
            continue;
        }
        if let Some((block, next)) = parse_fenced_code(cx, lines, i) {
            blocks.push(block);
            i = next;
            continue;
        }
        if let Some((block, next)) = parse_indented_code(cx, lines, i) {
            blocks.push(block);
            i = next;
            continue;
        }
        if let Some((block, next)) = parse_thematic_break(cx, lines, i) {
            blocks.push(block);
            i = next;
            continue;
        }
        if let Some((block, next)) = parse_quote(cx, lines, i, defs) {
            blocks.push(block);
            i = next;
            continue;
        }
        if let Some((block, next)) = parse_list(cx, lines, i) {
            blocks.push(block);
            i = next;
            continue;
        }
        if cx.options.tables
            && let Some((block, next)) = parse_table(cx, lines, i)
        {
            blocks.push(block);
            i = next;
            continue;
        }
        if let Some((block, next)) = parse_heading(cx, lines, i) {
            blocks.push(block);
            i = next;
            continue;
        }
        if let Some(next) = take_reference_definition(cx, lines, i, defs) {
            i = next;
            continue;
        }
        let (block, next) = parse_paragraph(cx, lines, i);
        blocks.push(block);
        i = next;
    }
    blocks
}

fn parse_fenced_code(
    cx: &BlockContext<'_>,
    lines: &[LineRef],
    start: usize,
) -> Option<(BlockElement, usize)> {
    let line = &lines[start];
    let open = CodeFence::sig(cx.text, line.content)?;

    let mut close = None;
    for (j, candidate) in lines.iter().enumerate().skip(start + 1) {
        if CodeFence::closes(&open, cx.text, candidate.content) {
            close = Some(j);
            break;
        }
    }

    // Unterminated fences run to the end of input and still emit a block.
    let last = close.unwrap_or(lines.len() - 1);
    let interior = Span::new(
        line.span.end,
        if close.is_some() {
            lines[last].span.start
        } else {
            lines[last].span.end
        },
    );
    let lang = (!open.info.is_empty()).then(|| cx.text.slice(open.info));
    Some((
        BlockElement::CodeBlock {
            span: Span::new(line.span.start, lines[last].content.end),
            fenced: true,
            lang,
            text: cx.text.slice(interior),
        },
        last + 1,
    ))
}

fn parse_indented_code(
    cx: &BlockContext<'_>,
    lines: &[LineRef],
    start: usize,
) -> Option<(BlockElement, usize)> {
    if !IndentedCode::matches(cx.text, lines[start].content) {
        return None;
    }
    let mut i = start;
    let mut text = String::new();
    while i < lines.len() && IndentedCode::matches(cx.text, lines[i].content) {
        let c = lines[i].content;
        text.push_str(&cx.text.slice(Span::new(c.start + IndentedCode::INDENT, c.end)));
        text.push('\n');
        i += 1;
    }
    Some((
        BlockElement::CodeBlock {
            span: Span::new(lines[start].span.start, lines[i - 1].content.end),
            fenced: false,
            lang: None,
            text,
        },
        i,
    ))
}

fn parse_thematic_break(
    cx: &BlockContext<'_>,
    lines: &[LineRef],
    start: usize,
) -> Option<(BlockElement, usize)> {
    let line = &lines[start];
    ThematicBreakRule::matches(cx.text, line.content).then(|| {
        (
            BlockElement::ThematicBreak {
                span: line.content,
            },
            start + 1,
        )
    })
}

fn parse_quote(
    cx: &BlockContext<'_>,
    lines: &[LineRef],
    start: usize,
    defs: &mut ReferenceTable,
) -> Option<(BlockElement, usize)> {
    let mut inner = Vec::new();
    let mut i = start;
    while i < lines.len() {
        let Some(remainder) = QuoteRule::strip(cx.text, lines[i].content) else {
            break;
        };
        inner.push(LineRef {
            span: Span::new(remainder.start, lines[i].span.end),
            content: remainder,
        });
        i += 1;
    }
    if inner.is_empty() {
        return None;
    }
    let children = parse_blocks(cx, &inner, defs);
    Some((
        BlockElement::Quote {
            span: Span::new(lines[start].span.start, lines[i - 1].content.end),
            children,
        },
        i,
    ))
}

fn parse_list(
    cx: &BlockContext<'_>,
    lines: &[LineRef],
    start: usize,
) -> Option<(BlockElement, usize)> {
    let first = ListMarker::parse(cx.text, lines[start].content)?;
    let mut items = Vec::new();
    let mut i = start;
    while i < lines.len() {
        let line = &lines[i];
        if cx.text.is_blank(line.content) {
            break;
        }
        let Some(marker) = ListMarker::parse(cx.text, line.content) else {
            break;
        };
        if marker.ordered != first.ordered {
            break;
        }
        items.push(ListItem {
            span: line.content,
            content: cx.inlines(Span::new(marker.content_start, line.content.end)),
        });
        i += 1;
    }
    Some((
        BlockElement::List(ListBlock {
            span: Span::new(lines[start].content.start, lines[i - 1].content.end),
            ordered: first.ordered,
            start: first.start,
            items,
        }),
        i,
    ))
}

fn parse_table(
    cx: &BlockContext<'_>,
    lines: &[LineRef],
    start: usize,
) -> Option<(BlockElement, usize)> {
    let header = &lines[start];
    if !TableRule::has_pipe(cx.text, header.content) {
        return None;
    }
    let separator = lines.get(start + 1)?;
    if !TableRule::is_separator(cx.text, separator.content) {
        return None;
    }
    let header_cells = TableRule::split_cells(cx.text, header.content);
    if header_cells.is_empty() {
        return None;
    }
    let width = header_cells.len();
    let headers: Vec<_> = header_cells.into_iter().map(|c| cx.inlines(c)).collect();

    let mut rows = Vec::new();
    let mut i = start + 2;
    while i < lines.len() {
        let line = &lines[i];
        if cx.text.is_blank(line.content) || !TableRule::has_pipe(cx.text, line.content) {
            break;
        }
        let mut cells: Vec<_> = TableRule::split_cells(cx.text, line.content)
            .into_iter()
            .map(|c| cx.inlines(c))
            .collect();
        // Normalize every row to the header width.
        cells.truncate(width);
        cells.resize_with(width, Vec::new);
        rows.push(cells);
        i += 1;
    }

    Some((
        BlockElement::Table(TableBlock {
            span: Span::new(header.content.start, lines[i - 1].content.end),
            headers,
            rows,
        }),
        i,
    ))
}

fn parse_heading(
    cx: &BlockContext<'_>,
    lines: &[LineRef],
    start: usize,
) -> Option<(BlockElement, usize)> {
    let line = &lines[start];
    let (level, title) = Heading::parse_marker(cx.text, line.content)?;
    Some((
        BlockElement::Heading {
            span: line.content,
            level,
            content: cx.inlines(title),
        },
        start + 1,
    ))
}

fn take_reference_definition(
    cx: &BlockContext<'_>,
    lines: &[LineRef],
    start: usize,
    defs: &mut ReferenceTable,
) -> Option<usize> {
    let def = ReferenceDefinition::parse(cx.text, lines[start].content)?;
    defs.insert(
        &def.name,
        LinkReference {
            url: def.url,
            title: def.title,
        },
    );
    Some(start + 1)
}

fn parse_paragraph(
    cx: &BlockContext<'_>,
    lines: &[LineRef],
    start: usize,
) -> (BlockElement, usize) {
    let mut i = start;
    while i + 1 < lines.len() {
        let next = &lines[i + 1];
        if cx.text.is_blank(next.content) || interrupts_paragraph(cx, next) {
            break;
        }
        i += 1;
    }
    let span = Span::new(lines[start].content.start, lines[i].content.end);
    (
        BlockElement::Paragraph {
            span,
            content: cx.inlines(span),
        },
        i + 1,
    )
}

/// Lines that end a paragraph by starting another block. Indented code
/// deliberately does not interrupt; it reads as a lazy continuation line.
fn interrupts_paragraph(cx: &BlockContext<'_>, line: &LineRef) -> bool {
    let c = line.content;
    CodeFence::sig(cx.text, c).is_some()
        || ThematicBreakRule::matches(cx.text, c)
        || QuoteRule::strip(cx.text, c).is_some()
        || ListMarker::parse(cx.text, c).is_some()
        || Heading::parse_marker(cx.text, c).is_some()
        || ReferenceDefinition::parse(cx.text, c).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::registry::DEFAULT_REGISTRY;
    use crate::source::lines_with_spans;
    use pretty_assertions::assert_eq;

    fn parse(source: &str) -> (Vec<BlockElement>, ReferenceTable) {
        let text = SourceText::new(source);
        let refs = ReferenceTable::default();
        let options = BlockOptions::default();
        let cx = BlockContext {
            text: &text,
            refs: &refs,
            registry: &DEFAULT_REGISTRY,
            options: &options,
            parse_inline_content: true,
        };
        let lines = lines_with_spans(&text);
        let mut defs = ReferenceTable::default();
        let blocks = parse_blocks(&cx, &lines, &mut defs);
        (blocks, defs)
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let (blocks, _) = parse("one\ntwo\n\nthree\n");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[0], BlockElement::Paragraph { .. }));
        assert!(matches!(blocks[1], BlockElement::Paragraph { .. }));
    }

    #[test]
    fn heading_interrupts_paragraph() {
        let (blocks, _) = parse("text\n# head\n");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[1], BlockElement::Heading { level: 1, .. }));
    }

    #[test]
    fn fenced_code_is_a_raw_zone() {
        let (blocks, _) = parse("```rust\nlet x = \"**not bold**\";\n```\n");
        assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            BlockElement::CodeBlock {
                fenced, lang, text, ..
            } => {
                assert!(fenced);
                assert_eq!(lang.as_deref(), Some("rust"));
                assert_eq!(text, "let x = \"**not bold**\";\n");
            }
            other => panic!("expected CodeBlock, got {other:?}"),
        }
    }

    #[test]
    fn unterminated_fence_runs_to_eof() {
        let (blocks, _) = parse("```\nnever closed\n");
        assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            BlockElement::CodeBlock { text, .. } => assert_eq!(text, "never closed\n"),
            other => panic!("expected CodeBlock, got {other:?}"),
        }
    }

    #[test]
    fn indented_code_collects_consecutive_lines() {
        let (blocks, _) = parse("    a\n    b\nplain\n");
        assert_eq!(blocks.len(), 2);
        match &blocks[0] {
            BlockElement::CodeBlock { fenced, text, .. } => {
                assert!(!fenced);
                assert_eq!(text, "a\nb\n");
            }
            other => panic!("expected CodeBlock, got {other:?}"),
        }
    }

    #[test]
    fn quote_parses_body_recursively() {
        let (blocks, _) = parse("> # inside\n> body\n");
        assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            BlockElement::Quote { children, .. } => {
                assert_eq!(children.len(), 2);
                assert!(matches!(children[0], BlockElement::Heading { .. }));
                assert!(matches!(children[1], BlockElement::Paragraph { .. }));
            }
            other => panic!("expected Quote, got {other:?}"),
        }
    }

    #[test]
    fn nested_quotes() {
        let (blocks, _) = parse("> > deep\n");
        match &blocks[0] {
            BlockElement::Quote { children, .. } => {
                assert!(matches!(children[0], BlockElement::Quote { .. }));
            }
            other => panic!("expected Quote, got {other:?}"),
        }
    }

    #[test]
    fn list_items_are_inline_parsed() {
        let (blocks, _) = parse("- plain\n- **bold** item\n");
        match &blocks[0] {
            BlockElement::List(list) => {
                assert!(!list.ordered);
                assert_eq!(list.items.len(), 2);
                assert!(
                    list.items[1]
                        .content
                        .iter()
                        .any(|e| matches!(e, InlineElement::Bold { .. }))
                );
            }
            other => panic!("expected List, got {other:?}"),
        }
    }

    #[test]
    fn ordered_list_keeps_start() {
        let (blocks, _) = parse("3. c\n4. d\n");
        match &blocks[0] {
            BlockElement::List(list) => {
                assert!(list.ordered);
                assert_eq!(list.start, Some(3));
                assert_eq!(list.items.len(), 2);
            }
            other => panic!("expected List, got {other:?}"),
        }
    }

    #[test]
    fn thematic_break_beats_list_marker() {
        let (blocks, _) = parse("- - -\n");
        assert!(matches!(blocks[0], BlockElement::ThematicBreak { .. }));
    }

    #[test]
    fn table_with_normalized_rows() {
        let (blocks, _) = parse("| a | b |\n| --- | --- |\n| 1 |\n| 2 | 3 | 4 |\n");
        match &blocks[0] {
            BlockElement::Table(table) => {
                assert_eq!(table.headers.len(), 2);
                assert_eq!(table.rows.len(), 2);
                assert_eq!(table.rows[0].len(), 2);
                assert_eq!(table.rows[1].len(), 2);
            }
            other => panic!("expected Table, got {other:?}"),
        }
    }

    #[test]
    fn tables_can_be_disabled() {
        let source = "| a | b |\n| --- | --- |\n";
        let text = SourceText::new(source);
        let refs = ReferenceTable::default();
        let options = BlockOptions { tables: false };
        let cx = BlockContext {
            text: &text,
            refs: &refs,
            registry: &DEFAULT_REGISTRY,
            options: &options,
            parse_inline_content: true,
        };
        let mut defs = ReferenceTable::default();
        let blocks = parse_blocks(&cx, &lines_with_spans(&text), &mut defs);
        assert!(blocks.iter().all(|b| !matches!(b, BlockElement::Table(_))));
    }

    #[test]
    fn reference_definitions_emit_no_block() {
        let (blocks, defs) = parse("[home]: https://x.dev\n\npara\n");
        assert_eq!(blocks.len(), 1);
        assert!(matches!(blocks[0], BlockElement::Paragraph { .. }));
        assert_eq!(defs.get("HOME").map(|r| r.url.as_str()), Some("https://x.dev"));
    }

    #[test]
    fn empty_input_yields_no_blocks() {
        let (blocks, _) = parse("");
        assert!(blocks.is_empty());
    }
}
