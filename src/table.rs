//! Grid model: cells, rows, columns, and the table itself.
//!
//! A [`Table`] is built once (declare the column count, configure
//! widths, append cells) and rendered any number of times. Cells fill
//! the current row left to right and a new row starts automatically
//! when the column count is reached. Automatic column widths are
//! resolved lazily on first render and cached; mutation after that
//! point is rejected so the cached layout can never go stale.

use std::cell::OnceCell;
use std::fmt;

use smallvec::SmallVec;

use crate::render::{self, TableStyle};
use crate::border::BorderStyle;
use crate::shown::ShownBorders;
use crate::style::CellStyle;

/// Errors for table mutation contract violations.
///
/// Rendering itself is infallible; every error here is reported at the
/// point of mutation, before any output could be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// A cell was added with a column span of zero.
    ZeroColSpan,
    /// A cell's span would exceed the remaining columns of its row.
    RowOverflow {
        /// The span that was requested.
        col_span: usize,
        /// Columns left in the current row.
        remaining: usize,
    },
    /// A width was configured for a column index that does not exist.
    ColumnOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of declared columns.
        columns: usize,
    },
    /// A width range was configured with `min > max`.
    InvalidWidthBounds {
        /// Requested minimum width.
        min: usize,
        /// Requested maximum width.
        max: usize,
    },
    /// The table was mutated after column widths were resolved.
    LayoutResolved,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroColSpan => write!(f, "cell column span must be at least 1"),
            Self::RowOverflow { col_span, remaining } => write!(
                f,
                "cell span {col_span} exceeds the {remaining} remaining column(s) of the row"
            ),
            Self::ColumnOutOfRange { index, columns } => {
                write!(f, "column index {index} out of range for {columns} column(s)")
            }
            Self::InvalidWidthBounds { min, max } => {
                write!(f, "minimum width {min} exceeds maximum width {max}")
            }
            Self::LayoutResolved => {
                write!(f, "table cannot be modified after column widths are resolved")
            }
        }
    }
}

impl std::error::Error for TableError {}

/// Cell content accepted by [`Table::add_cell`].
///
/// Converts from `&str`, `String`, and their `Option` forms, so both
/// plain text and null content read naturally at the call site:
///
/// ```
/// use tablefmt::prelude::*;
///
/// let style = CellStyle::new();
/// let mut table = Table::new(2);
/// table.add_cell("text", style).unwrap();
/// table.add_cell(CellContent::NULL, style).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellContent(Option<String>);

impl CellContent {
    /// Null content, rendered per the cell style's null handling.
    pub const NULL: Self = Self(None);
}

impl From<&str> for CellContent {
    fn from(text: &str) -> Self {
        Self(Some(text.to_string()))
    }
}

impl From<String> for CellContent {
    fn from(text: String) -> Self {
        Self(Some(text))
    }
}

impl From<Option<&str>> for CellContent {
    fn from(text: Option<&str>) -> Self {
        Self(text.map(ToString::to_string))
    }
}

impl From<Option<String>> for CellContent {
    fn from(text: Option<String>) -> Self {
        Self(text)
    }
}

/// One unit of content within a row, spanning one or more columns.
#[derive(Debug, Clone)]
pub struct Cell {
    content: Option<String>,
    style: CellStyle,
    col_span: usize,
}

impl Cell {
    pub(crate) fn new(content: Option<String>, style: CellStyle, col_span: usize) -> Self {
        Self {
            content,
            style,
            col_span,
        }
    }

    /// The raw cell content, if any.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// The style this cell renders with.
    #[must_use]
    pub fn style(&self) -> CellStyle {
        self.style
    }

    /// Number of columns this cell visually occupies.
    #[must_use]
    pub fn col_span(&self) -> usize {
        self.col_span
    }

    /// Un-padded display width this cell's content asks for.
    pub(crate) fn required_width(&self) -> usize {
        self.style.measure(self.content.as_deref())
    }

    /// Render this cell to exactly `width` display columns.
    pub(crate) fn render(&self, width: usize) -> String {
        self.style.render(self.content.as_deref(), width)
    }
}

/// An ordered sequence of cells forming one visual row.
#[derive(Debug, Clone, Default)]
pub struct Row {
    cells: SmallVec<[Cell; 4]>,
}

impl Row {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// The cells of this row in display order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells in this row (not columns covered).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row holds no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Total number of columns covered by this row's cells.
    #[must_use]
    pub fn total_span(&self) -> usize {
        self.cells.iter().map(Cell::col_span).sum()
    }

    /// Whether a column separator may be drawn before column position
    /// `pos` in this row.
    ///
    /// Position 0 (the left border) always has one. A position strictly
    /// inside a cell's span has none, since the cell visually spans across
    /// it. A position on a cell boundary, or past the row's last cell,
    /// has one.
    #[must_use]
    pub fn has_separator_before(&self, pos: usize) -> bool {
        if pos == 0 {
            return true;
        }
        let mut offset = 0;
        for cell in &self.cells {
            if offset < pos {
                if offset + cell.col_span() > pos {
                    return false;
                }
            } else {
                return true;
            }
            offset += cell.col_span();
        }
        true
    }
}

/// Width policy for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Width computed from content, clamped to `[min, max]`.
    Automatic {
        /// Lower bound for the resolved width.
        min: usize,
        /// Optional upper bound for the resolved width.
        max: Option<usize>,
    },
    /// Width fixed by the caller.
    Fixed(usize),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        Self::Automatic { min: 0, max: None }
    }
}

/// One column of a table: its width policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Column {
    width: ColumnWidth,
}

impl Column {
    /// The column's width policy.
    #[must_use]
    pub fn width(&self) -> ColumnWidth {
        self.width
    }

    /// Width before any content is considered.
    fn base_width(self) -> usize {
        match self.width {
            ColumnWidth::Fixed(width) => width,
            ColumnWidth::Automatic { min, .. } => min,
        }
    }

    /// Resolved width for a column hosting content of `natural` width.
    fn fit(self, natural: usize) -> usize {
        match self.width {
            ColumnWidth::Fixed(width) => width,
            ColumnWidth::Automatic { min, max } => {
                natural.max(min).min(max.unwrap_or(usize::MAX))
            }
        }
    }

    /// Whether the column may still grow past `current`.
    fn can_grow(self, current: usize) -> bool {
        match self.width {
            ColumnWidth::Fixed(_) => false,
            ColumnWidth::Automatic { max, .. } => max.is_none_or(|m| current < m),
        }
    }
}

/// A full grid of rows and columns, ready to render as bordered text.
///
/// # Examples
///
/// ```
/// use tablefmt::prelude::*;
///
/// let style = CellStyle::new();
/// let mut table = Table::new(2);
/// table.add_cell("item", style).unwrap();
/// table.add_cell("qty", style).unwrap();
/// table.add_cell("apples", style).unwrap();
/// table.add_cell("12", style).unwrap();
///
/// assert_eq!(
///     table.render(),
///     "+------+---+\n\
///      |item  |qty|\n\
///      +------+---+\n\
///      |apples|12 |\n\
///      +------+---+"
/// );
/// ```
#[derive(Debug)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Row>,
    style: TableStyle,
    layout: OnceCell<Vec<usize>>,
}

impl Table {
    /// Create a table with `columns` columns and default settings:
    /// classic border palette, all borders shown, no markup escaping,
    /// no left margin.
    #[must_use]
    pub fn new(columns: usize) -> Self {
        Self {
            columns: vec![Column::default(); columns],
            rows: Vec::new(),
            style: TableStyle::new(),
            layout: OnceCell::new(),
        }
    }

    /// Set the border glyph palette.
    #[must_use]
    pub fn border_style(mut self, border: BorderStyle) -> Self {
        self.style.border = border;
        self
    }

    /// Set the border visibility policy.
    ///
    /// Resets any resolved layout, since separator visibility feeds
    /// into spanned-cell widths.
    #[must_use]
    pub fn shown_borders(mut self, shown: ShownBorders) -> Self {
        self.style.shown = shown;
        self.layout = OnceCell::new();
        self
    }

    /// Escape `& < > " '` in every output line, for embedding the
    /// rendered table in markup.
    #[must_use]
    pub fn escape_markup(mut self, escape: bool) -> Self {
        self.style.escape_markup = escape;
        self
    }

    /// Prefix every output line with `width` spaces.
    #[must_use]
    pub fn left_margin(mut self, width: usize) -> Self {
        self.style.prompt = " ".repeat(width);
        self
    }

    /// Prefix every output line with a literal prompt string.
    ///
    /// The prompt is excluded from all width calculations.
    #[must_use]
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.style.prompt = prompt.into();
        self
    }

    /// Number of declared columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows added so far.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The rows added so far, in display order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The declared columns.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub(crate) fn table_style(&self) -> &TableStyle {
        &self.style
    }

    /// Configure a column as automatic with a width range.
    ///
    /// # Errors
    ///
    /// [`TableError::LayoutResolved`] after the first render,
    /// [`TableError::ColumnOutOfRange`] for a bad index, and
    /// [`TableError::InvalidWidthBounds`] when `min > max`.
    pub fn set_column_width(&mut self, index: usize, min: usize, max: usize) -> Result<(), TableError> {
        self.check_column_config(index)?;
        if min > max {
            return Err(TableError::InvalidWidthBounds { min, max });
        }
        self.columns[index].width = ColumnWidth::Automatic { min, max: Some(max) };
        Ok(())
    }

    /// Configure a column with a fixed width.
    ///
    /// # Errors
    ///
    /// [`TableError::LayoutResolved`] after the first render and
    /// [`TableError::ColumnOutOfRange`] for a bad index.
    pub fn set_fixed_column_width(&mut self, index: usize, width: usize) -> Result<(), TableError> {
        self.check_column_config(index)?;
        self.columns[index].width = ColumnWidth::Fixed(width);
        Ok(())
    }

    fn check_column_config(&self, index: usize) -> Result<(), TableError> {
        if self.layout.get().is_some() {
            return Err(TableError::LayoutResolved);
        }
        if index >= self.columns.len() {
            return Err(TableError::ColumnOutOfRange {
                index,
                columns: self.columns.len(),
            });
        }
        Ok(())
    }

    /// Append a single-column cell.
    ///
    /// Cells fill the current row left to right; a new row starts
    /// automatically once the column count is reached.
    ///
    /// # Errors
    ///
    /// See [`Table::add_cell_span`].
    pub fn add_cell(
        &mut self,
        content: impl Into<CellContent>,
        style: CellStyle,
    ) -> Result<(), TableError> {
        self.add_cell_span(content, style, 1)
    }

    /// Append a cell spanning `col_span` columns.
    ///
    /// # Errors
    ///
    /// [`TableError::ZeroColSpan`] for a zero span,
    /// [`TableError::RowOverflow`] when the span exceeds the columns
    /// remaining in the current row, and
    /// [`TableError::LayoutResolved`] after the first render.
    pub fn add_cell_span(
        &mut self,
        content: impl Into<CellContent>,
        style: CellStyle,
        col_span: usize,
    ) -> Result<(), TableError> {
        if col_span == 0 {
            return Err(TableError::ZeroColSpan);
        }
        if self.layout.get().is_some() {
            return Err(TableError::LayoutResolved);
        }
        let columns = self.columns.len();
        let fill = self.rows.last().map_or(columns, Row::total_span);
        let remaining = if fill >= columns { columns } else { columns - fill };
        if col_span > remaining {
            return Err(TableError::RowOverflow { col_span, remaining });
        }

        if fill >= columns {
            self.rows.push(Row::new());
        }
        let CellContent(content) = content.into();
        let row = self.rows.last_mut().expect("a row was just ensured");
        row.push(Cell::new(content, style, col_span));
        Ok(())
    }

    /// Column widths, resolving them on first use.
    pub(crate) fn resolved_widths(&self) -> &[usize] {
        self.layout.get_or_init(|| self.resolve_widths())
    }

    /// Compute one consistent width per column.
    ///
    /// Single-span cells size their own column (clamped by the column's
    /// bounds). A spanning cell absorbs the separator columns between
    /// the columns it covers; if its content still needs more, the
    /// deficit grows the covered automatic columns round-robin, never
    /// fixed columns and never columns outside the span.
    fn resolve_widths(&self) -> Vec<usize> {
        let total = self.columns.len();
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.base_width()).collect();

        for row in &self.rows {
            let mut pos = 0;
            for cell in row.cells() {
                if cell.col_span() == 1 && pos < total {
                    let fitted = self.columns[pos].fit(cell.required_width());
                    if fitted > widths[pos] {
                        widths[pos] = fitted;
                    }
                }
                pos += cell.col_span();
            }
        }

        for row in &self.rows {
            let mut pos = 0;
            for cell in row.cells() {
                let span = cell.col_span();
                if span > 1 && pos < total {
                    let end = (pos + span).min(total);
                    let absorbed = (pos + 1..end)
                        .filter(|&b| self.style.shown.shows_column_separator(b, total))
                        .count();
                    let available = widths[pos..end].iter().sum::<usize>() + absorbed;
                    let need = cell.required_width();
                    if need > available {
                        log::trace!(
                            "spanning cell needs {need}, has {available} over columns {pos}..{end}"
                        );
                        self.grow_columns(&mut widths, pos, end, need - available);
                    }
                }
                pos += span;
            }
        }

        log::debug!("resolved column widths: {widths:?}");
        widths
    }

    /// Distribute `deficit` extra columns over `range`, one at a time,
    /// skipping fixed columns and automatic columns at their maximum.
    fn grow_columns(&self, widths: &mut [usize], start: usize, end: usize, mut deficit: usize) {
        while deficit > 0 {
            let mut grew = false;
            for index in start..end {
                if deficit == 0 {
                    break;
                }
                if self.columns[index].can_grow(widths[index]) {
                    widths[index] += 1;
                    deficit -= 1;
                    grew = true;
                }
            }
            if !grew {
                // every covered column is fixed or at its maximum; the
                // cell will abbreviate at render time
                break;
            }
        }
    }

    /// Render the whole table as one newline-joined string.
    #[must_use]
    pub fn render(&self) -> String {
        render::render_table(self)
    }

    /// Render the table as an ordered sequence of lines.
    #[must_use]
    pub fn render_lines(&self) -> Vec<String> {
        render::render_lines(self)
    }

    /// Stream the table line by line into `sink`, each line followed by
    /// a newline. Line contents and order match [`Table::render_lines`].
    ///
    /// # Errors
    ///
    /// Propagates errors from the sink.
    pub fn render_into<W: fmt::Write>(&self, sink: &mut W) -> fmt::Result {
        render::render_into(self, sink)
    }
}
