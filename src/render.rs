//! The row/border rendering engine.
//!
//! Walks a table's rows in order, deciding which border or separator
//! line precedes each one, and stitches cells, separators, and borders
//! into final text lines. The three public render forms (joined string,
//! line vector, streamed sink) are views over the one line producer.

use std::fmt::{self, Write};

use crate::border::{self, BorderStyle};
use crate::shown::ShownBorders;
use crate::style::blank_cell;
use crate::table::{Row, Table};

/// Render-time configuration for a table: glyph palette, visibility
/// policy, markup escaping, and the per-line prompt prefix.
#[derive(Debug, Clone)]
pub(crate) struct TableStyle {
    pub(crate) border: BorderStyle,
    pub(crate) shown: ShownBorders,
    pub(crate) escape_markup: bool,
    pub(crate) prompt: String,
}

impl TableStyle {
    pub(crate) fn new() -> Self {
        Self {
            border: border::CLASSIC,
            shown: ShownBorders::ALL,
            escape_markup: false,
            prompt: String::new(),
        }
    }
}

/// Which horizontal rule is being drawn; selects the edge and junction
/// glyphs from the palette.
#[derive(Debug, Clone, Copy)]
enum RuleKind {
    Top,
    Middle,
    Bottom,
}

impl RuleKind {
    fn glyphs(self, border: &BorderStyle) -> (char, char, char) {
        match self {
            Self::Top => (border.top_left, border.top_tee, border.top_right),
            Self::Middle => (border.left_tee, border.cross, border.right_tee),
            Self::Bottom => (border.bottom_left, border.bottom_tee, border.bottom_right),
        }
    }
}

/// Produce the table's output lines in order.
pub(crate) fn render_lines(table: &Table) -> Vec<String> {
    let widths = table.resolved_widths();
    let style = table.table_style();
    let rows = table.rows();
    let total = rows.len();
    log::trace!("rendering {total} row(s) over {} column(s)", widths.len());

    let mut lines = Vec::new();
    let mut previous: Option<&Row> = None;
    for (i, row) in rows.iter().enumerate() {
        if i == 0 {
            if style.shown.contains(ShownBorders::TOP_BORDER) {
                lines.push(finish_line(
                    style,
                    rule_line(style, widths, RuleKind::Top, None, Some(row)),
                ));
            }
        } else {
            let wanted = (i == 1 && style.shown.contains(ShownBorders::HEADER_SEPARATOR))
                || (i == total - 1 && style.shown.contains(ShownBorders::FOOTER_SEPARATOR))
                || (i > 1
                    && i < total - 1
                    && style.shown.contains(ShownBorders::MIDDLE_SEPARATOR));
            if wanted {
                lines.push(finish_line(
                    style,
                    rule_line(style, widths, RuleKind::Middle, previous, Some(row)),
                ));
            }
        }

        lines.push(finish_line(style, content_line(style, widths, row)));

        if i == total - 1 && style.shown.contains(ShownBorders::BOTTOM_BORDER) {
            lines.push(finish_line(
                style,
                rule_line(style, widths, RuleKind::Bottom, Some(row), None),
            ));
        }
        previous = Some(row);
    }
    lines
}

/// Render the table as one newline-joined string (no trailing newline).
pub(crate) fn render_table(table: &Table) -> String {
    render_lines(table).join("\n")
}

/// Stream the table into `sink`, each line followed by a newline.
pub(crate) fn render_into<W: Write>(table: &Table, sink: &mut W) -> fmt::Result {
    for line in render_lines(table) {
        sink.write_str(&line)?;
        sink.write_char('\n')?;
    }
    Ok(())
}

/// Draw one horizontal rule: corners or tees at the shown edges, a
/// junction at every shown column boundary, horizontal glyphs under the
/// columns. A junction is drawn only where every adjacent row has a
/// cell boundary; a boundary some adjacent cell spans across gets the
/// plain horizontal glyph instead.
fn rule_line(
    style: &TableStyle,
    widths: &[usize],
    kind: RuleKind,
    above: Option<&Row>,
    below: Option<&Row>,
) -> String {
    let total = widths.len();
    let (left, junction, right) = kind.glyphs(&style.border);
    let horizontal = style.border.horizontal;

    let mut line = String::new();
    if style.shown.contains(ShownBorders::LEFT_BORDER) {
        line.push(left);
    }
    for (col, &width) in widths.iter().enumerate() {
        if col > 0 && style.shown.shows_column_separator(col, total) {
            let open = above.is_none_or(|row| row.has_separator_before(col))
                && below.is_none_or(|row| row.has_separator_before(col));
            line.push(if open { junction } else { horizontal });
        }
        for _ in 0..width {
            line.push(horizontal);
        }
    }
    if style.shown.contains(ShownBorders::RIGHT_BORDER) {
        line.push(right);
    }
    line
}

/// Draw one content line: border glyphs at the shown edges, each cell
/// rendered to the combined width of its spanned columns, separators at
/// shown boundaries, and blank filler under columns with no cell.
fn content_line(style: &TableStyle, widths: &[usize], row: &Row) -> String {
    let total = widths.len();
    let vertical = style.border.vertical;

    let mut line = String::new();
    if style.shown.contains(ShownBorders::LEFT_BORDER) {
        line.push(vertical);
    }

    let mut pos = 0;
    for cell in row.cells() {
        if pos > 0 && style.shown.shows_column_separator(pos, total) {
            line.push(vertical);
        }
        let end = (pos + cell.col_span()).min(total);
        // a spanning cell absorbs the separator columns it covers
        let absorbed = (pos + 1..end)
            .filter(|&b| style.shown.shows_column_separator(b, total))
            .count();
        let width = widths[pos..end].iter().sum::<usize>() + absorbed;
        line.push_str(&cell.render(width));
        pos = end;
    }

    while pos < total {
        if pos > 0 && style.shown.shows_column_separator(pos, total) {
            line.push(vertical);
        }
        line.push_str(&blank_cell(widths[pos]));
        pos += 1;
    }

    if style.shown.contains(ShownBorders::RIGHT_BORDER) {
        line.push(vertical);
    }
    line
}

/// Prefix the prompt and apply markup escaping when configured.
fn finish_line(style: &TableStyle, content: String) -> String {
    let line = if style.prompt.is_empty() {
        content
    } else {
        format!("{}{content}", style.prompt)
    };
    if style.escape_markup {
        escape_markup_text(&line)
    } else {
        line
    }
}

/// Escape characters reserved in XML-like markup.
fn escape_markup_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
