//! Bordered row rendering from compact border templates
//!
//! A template string interleaves border glyphs with one fill (edge rows)
//! or alignment (data rows) glyph per column, e.g. `"╭─┬─╮"` or
//! `"│^│<│>│"`. Rendering skips hidden (width-0) columns; edge rows
//! coalesce the border glyphs that would have bounded them.

use owo_colors::{OwoColorize, Style};
use std::io::{self, Write};

/// Per-column styling; `None` renders unstyled text.
pub type CellStyle = Option<Style>;

/// Collapse a style table to no-ops unless colorization is on.
pub fn maybe_plain<const N: usize>(colorize: bool, styles: [CellStyle; N]) -> [CellStyle; N] {
    if colorize { styles } else { [None; N] }
}

/// Cell alignment within its padded column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    fn from_glyph(glyph: char) -> Self {
        match glyph {
            '<' => Alignment::Left,
            '^' => Alignment::Center,
            '>' => Alignment::Right,
            other => panic!("unknown alignment glyph {other:?}"),
        }
    }
}

/// Template for a horizontal border row: corner/junction glyphs
/// interleaved with the fill glyph repeated across each column.
#[derive(Debug, Clone)]
pub struct EdgeTemplate {
    borders: Vec<char>,
    fills: Vec<char>,
}

impl EdgeTemplate {
    /// Parse a compact encoding like `"╭─┬─╮"`.
    ///
    /// # Panics
    ///
    /// Panics unless the template has odd length of at least three
    /// (borders and fills must strictly alternate).
    pub fn new(template: &str) -> Self {
        let glyphs: Vec<char> = template.chars().collect();
        assert!(
            glyphs.len() >= 3 && glyphs.len() % 2 == 1,
            "edge template must interleave borders and fills"
        );
        Self {
            borders: glyphs.iter().copied().step_by(2).collect(),
            fills: glyphs.iter().copied().skip(1).step_by(2).collect(),
        }
    }

    /// Number of columns this template spans.
    pub fn columns(&self) -> usize {
        self.fills.len()
    }
}

/// Template for a data row: border glyphs interleaved with one alignment
/// glyph (`<`, `^`, `>`) per column.
#[derive(Debug, Clone)]
pub struct RowTemplate {
    borders: Vec<char>,
    aligns: Vec<Alignment>,
}

impl RowTemplate {
    /// Parse a compact encoding like `"│^│<│>│"`.
    pub fn new(template: &str) -> Self {
        let glyphs: Vec<char> = template.chars().collect();
        assert!(
            glyphs.len() >= 3 && glyphs.len() % 2 == 1,
            "row template must interleave borders and alignments"
        );
        Self {
            borders: glyphs.iter().copied().step_by(2).collect(),
            aligns: glyphs
                .iter()
                .copied()
                .skip(1)
                .step_by(2)
                .map(Alignment::from_glyph)
                .collect(),
        }
    }

    /// Number of columns this template spans.
    pub fn columns(&self) -> usize {
        self.aligns.len()
    }
}

/// Print one border row.
///
/// Hidden columns are skipped; the border glyph opening a visible column
/// that follows hidden ones is the glyph that would have opened the first
/// hidden column, so adjacent groups stay joined.
pub fn write_edge_row(
    out: &mut dyn Write,
    template: &EdgeTemplate,
    widths: &[usize],
) -> io::Result<()> {
    assert_eq!(widths.len(), template.columns(), "one width per column");

    let mut skipped = 0;
    for (column, &width) in widths.iter().enumerate() {
        if width == 0 {
            skipped += 1;
            continue;
        }
        write!(out, "{}", template.borders[column - skipped])?;
        for _ in 0..width + 2 {
            write!(out, "{}", template.fills[column])?;
        }
        skipped = 0;
    }
    writeln!(out, "{}", template.borders[template.columns()])
}

/// Print one data row: border, space, padded cell, space, per column.
///
/// Cells are padded before styling so escape sequences never disturb the
/// column alignment.
pub fn write_data_row<T: AsRef<str>>(
    out: &mut dyn Write,
    template: &RowTemplate,
    cells: &[T],
    widths: &[usize],
    styles: &[CellStyle],
) -> io::Result<()> {
    assert_eq!(widths.len(), template.columns(), "one width per column");
    assert_eq!(cells.len(), template.columns(), "one cell per column");
    assert_eq!(styles.len(), template.columns(), "one style per column");

    for (column, &width) in widths.iter().enumerate() {
        if width == 0 {
            continue;
        }
        let padded = pad(cells[column].as_ref(), width, template.aligns[column]);
        match styles[column] {
            Some(style) => write!(out, "{} {} ", template.borders[column], padded.style(style))?,
            None => write!(out, "{} {} ", template.borders[column], padded)?,
        }
    }
    writeln!(out, "{}", template.borders[template.columns()])
}

fn pad(text: &str, width: usize, align: Alignment) -> String {
    let extra = width.saturating_sub(text.chars().count());
    match align {
        Alignment::Left => format!("{text}{}", " ".repeat(extra)),
        Alignment::Right => format!("{}{text}", " ".repeat(extra)),
        Alignment::Center => {
            let left = extra / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(extra - left))
        }
    }
}
