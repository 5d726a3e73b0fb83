//! Table rendering utilities for CLI outputs.
//!
//! Cells are padded by terminal display width, not char count, so rows stay
//! aligned when they contain double-width glyphs (board icons, mood faces).

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    /// Character of the divider under the header row.
    pub separator: char,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: '-',
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn pad(cell: &str, width: usize) -> String {
        let w = UnicodeWidthStr::width(cell);
        let fill = width.saturating_sub(w);
        format!("{}{}", cell, " ".repeat(fill))
    }

    /// Effective width of a column: the declared minimum or the widest cell.
    fn column_width(&self, idx: usize) -> usize {
        let mut w = self
            .columns
            .get(idx)
            .map(|c| c.width.max(UnicodeWidthStr::width(c.header.as_str())))
            .unwrap_or(0);
        for row in &self.rows {
            if let Some(cell) = row.get(idx) {
                w = w.max(UnicodeWidthStr::width(cell.as_str()));
            }
        }
        w
    }

    pub fn render(&self) -> String {
        let widths: Vec<usize> = (0..self.columns.len())
            .map(|i| self.column_width(i))
            .collect();

        let mut out = String::new();

        for (i, col) in self.columns.iter().enumerate() {
            out.push_str(&Self::pad(&col.header, widths[i]));
            out.push_str("  ");
        }
        out.push('\n');

        for (i, _) in self.columns.iter().enumerate() {
            out.push_str(&self.separator.to_string().repeat(widths[i]));
            out.push_str("  ");
        }
        out.push('\n');

        for row in &self.rows {
            for (i, _) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&Self::pad(cell, widths[i]));
                out.push_str("  ");
            }
            out.push('\n');
        }

        out
    }
}
