//! Cell content shaping: alignment, abbreviation, and null handling.
//!
//! A [`CellStyle`] is a pure function object: given raw content and a
//! target width it produces the exact display string for one cell.
//! Styles are small `Copy` values intended to be shared by many cells.

use crate::cells;

/// Marker text shown for null content under [`NullStyle::NullText`].
const NULL_TEXT: &str = "<null>";

/// Ellipsis appended by [`AbbreviationStyle::Dots`].
const DOTS_TEXT: &str = "...";

/// How text is horizontally aligned in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlign {
    /// Align to the left.
    #[default]
    Left,
    /// Center the text.
    Center,
    /// Align to the right.
    Right,
}

/// How to reduce text that does not fit in its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AbbreviationStyle {
    /// Crop the text at the maximum allowed width.
    Crop,
    /// End the text with three dots to show it has been abbreviated.
    #[default]
    Dots,
}

/// How to display cells with null content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullStyle {
    /// Show a zero-length string.
    #[default]
    EmptyString,
    /// Show the text `<null>` instead.
    NullText,
}

/// Defines how the content of a cell is rendered.
///
/// Covers text alignment, the abbreviation mode, rendering of null
/// values, and whether embedded SGR escape runs are treated as
/// zero-width. All fields always have a defined value; the defaults are
/// left alignment, dots abbreviation, empty-string nulls, and escape
/// handling on.
///
/// # Examples
///
/// ```
/// use tablefmt::style::{CellStyle, HorizontalAlign};
///
/// let style = CellStyle::new().align(HorizontalAlign::Right);
/// assert_eq!(style.render(Some("ab"), 4), "  ab");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    align: HorizontalAlign,
    abbreviation: AbbreviationStyle,
    null_style: NullStyle,
    handle_escapes: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            align: HorizontalAlign::Left,
            abbreviation: AbbreviationStyle::Dots,
            null_style: NullStyle::EmptyString,
            handle_escapes: true,
        }
    }
}

impl CellStyle {
    /// Create a style with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the horizontal alignment.
    #[must_use]
    pub fn align(mut self, align: HorizontalAlign) -> Self {
        self.align = align;
        self
    }

    /// Set the abbreviation style.
    #[must_use]
    pub fn abbreviation(mut self, abbreviation: AbbreviationStyle) -> Self {
        self.abbreviation = abbreviation;
        self
    }

    /// Set the null rendering style.
    #[must_use]
    pub fn null_style(mut self, null_style: NullStyle) -> Self {
        self.null_style = null_style;
        self
    }

    /// Enable or disable escape-run handling.
    ///
    /// When enabled, SGR runs like `ESC [33m` measure zero columns and a
    /// reset run is appended to any rendered cell that contains one.
    #[must_use]
    pub fn handle_escapes(mut self, handle: bool) -> Self {
        self.handle_escapes = handle;
        self
    }

    /// The content as it will be displayed before any fitting: null
    /// content becomes the configured null rendering.
    fn display_form<'a>(&self, content: Option<&'a str>) -> &'a str {
        match content {
            Some(text) => text,
            None => match self.null_style {
                NullStyle::EmptyString => "",
                NullStyle::NullText => NULL_TEXT,
            },
        }
    }

    /// Measured display width of `content` under this style.
    ///
    /// Null content yields the width of its null rendering. With escape
    /// handling on, SGR runs contribute zero columns.
    #[must_use]
    pub fn measure(&self, content: Option<&str>) -> usize {
        let text = self.display_form(content);
        if self.handle_escapes {
            cells::cell_len(text)
        } else {
            cells::cell_len_plain(text)
        }
    }

    /// Render `content` to exactly `width` display columns.
    ///
    /// Shorter content is padded per the alignment; content that fits
    /// exactly passes through unchanged; longer content is abbreviated.
    /// With escape handling on, a single reset run is appended whenever
    /// the produced text contains an escape marker.
    #[must_use]
    pub fn render(&self, content: Option<&str>, width: usize) -> String {
        let text = self.display_form(content);
        let measured = self.measure(content);

        let mut out = if measured < width {
            self.pad(text, width - measured)
        } else if measured == width {
            text.to_string()
        } else {
            self.abbreviate(text, width)
        };

        if self.handle_escapes && out.contains(cells::ESCAPE_MARKER) {
            out.push_str(cells::RESET_SEQUENCE);
        }
        out
    }

    fn pad(&self, text: &str, diff: usize) -> String {
        match self.align {
            HorizontalAlign::Left => format!("{text}{}", " ".repeat(diff)),
            HorizontalAlign::Right => format!("{}{text}", " ".repeat(diff)),
            HorizontalAlign::Center => {
                // the smaller half goes to the left
                let left = diff / 2;
                let right = diff - left;
                format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
            }
        }
    }

    fn abbreviate(&self, text: &str, width: usize) -> String {
        match self.abbreviation {
            AbbreviationStyle::Crop => cells::crop_to_width(text, width),
            AbbreviationStyle::Dots => {
                if width == 0 {
                    String::new()
                } else if width <= DOTS_TEXT.len() {
                    DOTS_TEXT[..width].to_string()
                } else {
                    let mut out = cells::crop_to_width(text, width - DOTS_TEXT.len());
                    out.push_str(DOTS_TEXT);
                    out
                }
            }
        }
    }
}

/// Space filler for columns with no corresponding cell in a short row.
#[must_use]
pub(crate) fn blank_cell(width: usize) -> String {
    " ".repeat(width)
}
