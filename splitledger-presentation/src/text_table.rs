use std::{borrow::Cow, fmt::Write};

const COLUMN_SEPARATOR: &str = " | ";
const RULE_SEPARATOR: &str = "-+-";
const SECTION_SPACING: &str = "\n";

#[derive(Default)]
pub struct TextTableBuilder<'a, Seq> {
    headers: &'a [Cow<'a, str>],
    rows: Vec<Seq>,
    alignments: Cow<'a, [Alignment]>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl<'a, Seq> TextTableBuilder<'a, Seq>
where
    Seq: AsRef<[Cow<'a, str>]> + Default,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignments(mut self, alignments: &'a [Alignment]) -> Self {
        self.alignments = Cow::Borrowed(alignments);
        self
    }

    pub fn headers(mut self, headers: &'a [Cow<'a, str>]) -> Self {
        self.headers = headers;
        if self.alignments.is_empty() {
            self.alignments = Cow::Owned(vec![Alignment::default(); self.headers.len()]);
        }
        self
    }

    pub fn row(mut self, row: Seq) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Seq>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn build(self) -> String {
        let col_count = self.headers.len();
        if col_count == 0 {
            return String::new();
        }

        let mut col_widths: Vec<usize> = self.headers.iter().map(|h| display_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.as_ref().iter().enumerate().take(col_count) {
                col_widths[i] = col_widths[i].max(display_width(cell));
            }
        }

        let mut table = String::with_capacity(64 * (self.rows.len() + 2));
        self.write_line(&mut table, self.headers, &col_widths);

        let rule = col_widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join(RULE_SEPARATOR);
        table.push_str(&rule);
        table.push('\n');

        for row in &self.rows {
            self.write_line(&mut table, row.as_ref(), &col_widths);
        }

        table
    }

    fn write_line(&self, out: &mut String, cells: &[Cow<'a, str>], col_widths: &[usize]) {
        let mut line = String::new();
        for (i, &width) in col_widths.iter().enumerate() {
            if i > 0 {
                line.push_str(COLUMN_SEPARATOR);
            }
            let cell = cells.get(i).map_or("", |cell| cell.as_ref());
            let alignment = self.alignments.get(i).copied().unwrap_or_default();
            pad_cell(&mut line, cell, width, alignment);
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }
}

/// Terminal column estimate: non-ASCII characters count as two.
fn display_width(text: &str) -> usize {
    text.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}

fn pad_cell(out: &mut String, cell: &str, width: usize, alignment: Alignment) {
    let padding = width.saturating_sub(display_width(cell));
    let (left, right) = match alignment {
        Alignment::Left => (0, padding),
        Alignment::Center => (padding / 2, padding - padding / 2),
        Alignment::Right => (padding, 0),
    };
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(cell);
    out.extend(std::iter::repeat_n(' ', right));
}

/// Joins rendered sections with a blank line between them.
pub fn combine_sections(sections: &[&str]) -> Option<String> {
    if sections.is_empty() {
        return None;
    }

    let capacity = sections.iter().map(|s| s.len() + 1).sum::<usize>();
    let mut combined = String::with_capacity(capacity);
    for (idx, section) in sections.iter().enumerate() {
        if idx > 0 {
            combined.push_str(SECTION_SPACING);
        }
        combined.push_str(section);
        if !section.ends_with('\n') {
            combined.push('\n');
        }
    }
    Some(combined)
}
