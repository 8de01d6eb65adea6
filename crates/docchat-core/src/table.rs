//! Plain-text table rendering.
//!
//! Two layouts are provided: a dataframe-style frame (row index column,
//! right-aligned cells) used when CSV files become LLM context, and a
//! bordered grid used to show SQL query results on the terminal.

use serde::{Deserialize, Serialize};

/// Column separator for frame layout.
const FRAME_GAP: &str = "  ";

/// A table of text cells with a header row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a row. Short rows are padded with empty cells when rendered.
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    /// Render as an aligned frame with a 0-based row index column.
    ///
    /// ```text
    ///     name  age
    /// 0  alice   30
    /// 1    bob    4
    /// ```
    ///
    /// A table without rows renders as its header line alone.
    pub fn render_frame(&self) -> String {
        let columns = self.column_count();
        let with_index = !self.rows.is_empty();

        let mut lines: Vec<Vec<String>> = Vec::with_capacity(self.rows.len() + 1);
        let mut header = Vec::with_capacity(columns + 1);
        if with_index {
            header.push(String::new());
        }
        header.extend((0..columns).map(|i| cell(&self.headers, i).to_string()));
        lines.push(header);

        for (idx, row) in self.rows.iter().enumerate() {
            let mut line = Vec::with_capacity(columns + 1);
            line.push(idx.to_string());
            line.extend((0..columns).map(|i| cell(row, i).to_string()));
            lines.push(line);
        }

        let widths = column_widths(&lines);
        lines
            .iter()
            .map(|line| {
                let rendered: Vec<String> = line
                    .iter()
                    .enumerate()
                    .map(|(i, value)| {
                        if with_index && i == 0 {
                            format!("{:<width$}", value, width = widths[i])
                        } else {
                            format!("{:>width$}", value, width = widths[i])
                        }
                    })
                    .collect();
                rendered.join(FRAME_GAP).trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render as a bordered grid. Numeric columns are right-aligned,
    /// everything else left-aligned.
    ///
    /// ```text
    /// +-------+-----+
    /// | name  | age |
    /// +=======+=====+
    /// | alice |  30 |
    /// +-------+-----+
    /// ```
    pub fn render_grid(&self) -> String {
        let columns = self.column_count();
        if columns == 0 {
            return String::new();
        }

        let mut lines: Vec<Vec<String>> = Vec::with_capacity(self.rows.len() + 1);
        lines.push((0..columns).map(|i| cell(&self.headers, i).to_string()).collect());
        for row in &self.rows {
            lines.push((0..columns).map(|i| cell(row, i).to_string()).collect());
        }

        let widths = column_widths(&lines);
        let numeric: Vec<bool> = (0..columns).map(|i| self.is_numeric_column(i)).collect();

        let border = |fill: char| {
            let mut s = String::from("+");
            for w in &widths {
                s.push_str(&fill.to_string().repeat(w + 2));
                s.push('+');
            }
            s
        };

        let render_line = |line: &[String]| {
            let mut s = String::from("|");
            for (i, value) in line.iter().enumerate() {
                let padded = if numeric[i] {
                    format!(" {:>width$} ", value, width = widths[i])
                } else {
                    format!(" {:<width$} ", value, width = widths[i])
                };
                s.push_str(&padded);
                s.push('|');
            }
            s
        };

        let mut out = vec![border('-'), render_line(&lines[0]), border('=')];
        if lines.len() == 1 {
            out.pop();
            out.push(border('-'));
        }
        for line in &lines[1..] {
            out.push(render_line(line));
            out.push(border('-'));
        }
        out.join("\n")
    }

    fn is_numeric_column(&self, column: usize) -> bool {
        let mut seen = false;
        for row in &self.rows {
            let value = cell(row, column).trim();
            if value.is_empty() || value == "NULL" {
                continue;
            }
            if value.parse::<f64>().is_err() {
                return false;
            }
            seen = true;
        }
        seen
    }
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

fn column_widths(lines: &[Vec<String>]) -> Vec<usize> {
    let columns = lines.iter().map(Vec::len).max().unwrap_or(0);
    (0..columns)
        .map(|i| {
            lines
                .iter()
                .map(|line| line.get(i).map(|v| v.chars().count()).unwrap_or(0))
                .max()
                .unwrap_or(0)
        })
        .collect()
}
