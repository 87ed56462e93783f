//! Border and separator visibility policies.
//!
//! A [`ShownBorders`] value selects which of a table's borders and
//! separators are drawn. Policies are plain flag sets; the handful of
//! combinations that make visual sense are provided as named values.

use bitflags::bitflags;

bitflags! {
    /// Which borders and separators of a table are drawn.
    ///
    /// The four border flags control the outer frame; the three row
    /// flags control the horizontal lines between rows; the three
    /// column flags control the vertical lines between columns (the
    /// boundary after the first column, the interior boundaries, and
    /// the boundary before the last column, respectively).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ShownBorders: u16 {
        /// Border above the first row.
        const TOP_BORDER = 1 << 0;
        /// Border below the last row.
        const BOTTOM_BORDER = 1 << 1;
        /// Border left of the first column.
        const LEFT_BORDER = 1 << 2;
        /// Border right of the last column.
        const RIGHT_BORDER = 1 << 3;
        /// Separator line between the first and second rows.
        const HEADER_SEPARATOR = 1 << 4;
        /// Separator line before the last row.
        const FOOTER_SEPARATOR = 1 << 5;
        /// Separator lines between all other rows.
        const MIDDLE_SEPARATOR = 1 << 6;
        /// Column separator at the first interior boundary.
        const LEFT_SEPARATOR = 1 << 7;
        /// Column separators at interior boundaries.
        const CENTER_SEPARATOR = 1 << 8;
        /// Column separator at the last interior boundary.
        const RIGHT_SEPARATOR = 1 << 9;
    }
}

impl ShownBorders {
    /// No borders or separators at all.
    pub const NONE: Self = Self::empty();

    /// Every border and separator.
    pub const ALL: Self = Self::all();

    /// Outer frame only.
    pub const SURROUND: Self = Self::TOP_BORDER
        .union(Self::BOTTOM_BORDER)
        .union(Self::LEFT_BORDER)
        .union(Self::RIGHT_BORDER);

    /// Just the line under the first row.
    pub const HEADER_ONLY: Self = Self::HEADER_SEPARATOR;

    /// The lines under the first row and above the last row.
    pub const HEADER_AND_FOOTER: Self = Self::HEADER_SEPARATOR.union(Self::FOOTER_SEPARATOR);

    /// The header line plus all column separators.
    pub const HEADER_AND_COLUMNS: Self = Self::HEADER_SEPARATOR
        .union(Self::LEFT_SEPARATOR)
        .union(Self::CENTER_SEPARATOR)
        .union(Self::RIGHT_SEPARATOR);

    /// Outer frame, header line, and column separators.
    pub const SURROUND_HEADER_AND_COLUMNS: Self = Self::SURROUND.union(Self::HEADER_AND_COLUMNS);

    /// Outer frame, header and footer lines, and column separators.
    pub const SURROUND_HEADER_FOOTER_AND_COLUMNS: Self =
        Self::SURROUND_HEADER_AND_COLUMNS.union(Self::FOOTER_SEPARATOR);

    /// Whether the column separator at `boundary` is drawn in a table
    /// of `total_columns` columns.
    ///
    /// Boundary `p` sits before column `p`; boundaries 0 and
    /// `total_columns` are the outer borders and are not column
    /// separators. Boundary 1 is governed by [`Self::LEFT_SEPARATOR`],
    /// the last interior boundary by [`Self::RIGHT_SEPARATOR`], and
    /// the rest by [`Self::CENTER_SEPARATOR`].
    #[must_use]
    pub fn shows_column_separator(self, boundary: usize, total_columns: usize) -> bool {
        if boundary == 0 || boundary >= total_columns {
            return false;
        }
        (boundary == 1 && self.contains(Self::LEFT_SEPARATOR))
            || (boundary == total_columns - 1 && self.contains(Self::RIGHT_SEPARATOR))
            || (boundary > 1
                && boundary < total_columns - 1
                && self.contains(Self::CENTER_SEPARATOR))
    }
}
