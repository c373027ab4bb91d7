use crate::source::{SourceText, Span};

/// Pipe tables: a header row, a separator row, then body rows.
pub struct TableRule;

impl TableRule {
    const PIPE: char = '|';

    pub fn has_pipe(text: &SourceText, content: Span) -> bool {
        text.find_char(Self::PIPE, content.start, content.end)
            .is_some()
    }

    /// Splits a row into trimmed cell spans. Leading and trailing pipes are
    /// decorative and produce no cells.
    pub fn split_cells(text: &SourceText, content: Span) -> Vec<Span> {
        let row = text.trim(content);
        let mut bounds = vec![];
        let mut from = row.start;
        while let Some(p) = text.find_char(Self::PIPE, from, row.end) {
            bounds.push(p);
            from = p + 1;
        }

        let mut cells = Vec::new();
        let mut cell_start = row.start;
        for &p in &bounds {
            cells.push(text.trim(Span::new(cell_start, p)));
            cell_start = p + 1;
        }
        cells.push(text.trim(Span::new(cell_start, row.end)));

        // `| a | b |` produces empty edge cells; drop them.
        if cells.first().is_some_and(|c| c.is_empty()) && text.char_at(row.start) == Some(Self::PIPE)
        {
            cells.remove(0);
        }
        if cells.last().is_some_and(|c| c.is_empty())
            && row.end > row.start
            && text.char_at(row.end - 1) == Some(Self::PIPE)
        {
            cells.pop();
        }
        cells
    }

    /// Whether the line is a separator row: cells of `---`, `:--`, `--:`,
    /// or `:-:`, with at least one pipe on the line.
    pub fn is_separator(text: &SourceText, content: Span) -> bool {
        if !Self::has_pipe(text, content) {
            return false;
        }
        let cells = Self::split_cells(text, content);
        !cells.is_empty()
            && cells.iter().all(|&cell| {
                let mut dashes = 0usize;
                for i in cell.start..cell.end {
                    match text.char_at(i) {
                        Some('-') => dashes += 1,
                        Some(':') if i == cell.start || i == cell.end - 1 => {}
                        _ => return false,
                    }
                }
                dashes > 0
            })
    }
}
