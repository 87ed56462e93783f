//! Border glyph palettes for drawing table frames.
//!
//! A [`BorderStyle`] is an immutable palette of the glyphs used to draw
//! borders and separator lines: four corners, the horizontal and
//! vertical line glyphs, and the tee/cross junctions. Palettes carry no
//! table-specific state and are used identically regardless of content.

use std::fmt;

/// Box drawing glyph palette.
///
/// Junction naming follows the drawn shape: `top_tee` is the junction
/// on the top border (`┬`), `left_tee` the junction where a separator
/// meets the left border (`├`), and `cross` the interior junction (`┼`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderStyle {
    /// Top-left corner.
    pub top_left: char,
    /// Junction on the top border.
    pub top_tee: char,
    /// Top-right corner.
    pub top_right: char,
    /// Junction where a separator meets the left border.
    pub left_tee: char,
    /// Interior junction.
    pub cross: char,
    /// Junction where a separator meets the right border.
    pub right_tee: char,
    /// Bottom-left corner.
    pub bottom_left: char,
    /// Junction on the bottom border.
    pub bottom_tee: char,
    /// Bottom-right corner.
    pub bottom_right: char,
    /// Horizontal line glyph.
    pub horizontal: char,
    /// Vertical line glyph.
    pub vertical: char,
}

impl BorderStyle {
    /// Create a palette from its three junction rows plus line glyphs.
    ///
    /// Each row is `[left, junction, right]`, top to bottom:
    /// `┌┬┐` / `├┼┤` / `└┴┘`.
    #[must_use]
    pub const fn from_rows(
        top: [char; 3],
        middle: [char; 3],
        bottom: [char; 3],
        horizontal: char,
        vertical: char,
    ) -> Self {
        Self {
            top_left: top[0],
            top_tee: top[1],
            top_right: top[2],
            left_tee: middle[0],
            cross: middle[1],
            right_tee: middle[2],
            bottom_left: bottom[0],
            bottom_tee: bottom[1],
            bottom_right: bottom[2],
            horizontal,
            vertical,
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display a sample 2x2 frame
        let h = self.horizontal;
        writeln!(f, "{}{h}{h}{}{h}{h}{}", self.top_left, self.top_tee, self.top_right)?;
        writeln!(f, "{0}  {0}  {0}", self.vertical)?;
        writeln!(f, "{}{h}{h}{}{h}{h}{}", self.left_tee, self.cross, self.right_tee)?;
        writeln!(f, "{0}  {0}  {0}", self.vertical)?;
        write!(
            f,
            "{}{h}{h}{}{h}{h}{}",
            self.bottom_left, self.bottom_tee, self.bottom_right
        )
    }
}

// ============================================================================
// Built-in Palettes
// ============================================================================

/// Classic ASCII palette (safe for all terminals): `+`, `-`, `|`.
pub const CLASSIC: BorderStyle = BorderStyle::from_rows(
    ['+', '+', '+'],
    ['+', '+', '+'],
    ['+', '+', '+'],
    '-',
    '|',
);

/// Unicode single-line box.
pub const UNICODE_BOX: BorderStyle = BorderStyle::from_rows(
    ['\u{250C}', '\u{252C}', '\u{2510}'], // ┌┬┐
    ['\u{251C}', '\u{253C}', '\u{2524}'], // ├┼┤
    ['\u{2514}', '\u{2534}', '\u{2518}'], // └┴┘
    '\u{2500}',                           // ─
    '\u{2502}',                           // │
);

/// Unicode rounded box.
pub const UNICODE_ROUND_BOX: BorderStyle = BorderStyle::from_rows(
    ['\u{256D}', '\u{252C}', '\u{256E}'], // ╭┬╮
    ['\u{251C}', '\u{253C}', '\u{2524}'], // ├┼┤
    ['\u{2570}', '\u{2534}', '\u{256F}'], // ╰┴╯
    '\u{2500}',                           // ─
    '\u{2502}',                           // │
);

/// Unicode double-line box.
pub const UNICODE_DOUBLE_BOX: BorderStyle = BorderStyle::from_rows(
    ['\u{2554}', '\u{2566}', '\u{2557}'], // ╔╦╗
    ['\u{2560}', '\u{256C}', '\u{2563}'], // ╠╬╣
    ['\u{255A}', '\u{2569}', '\u{255D}'], // ╚╩╝
    '\u{2550}',                           // ═
    '\u{2551}',                           // ║
);

/// Unicode heavy (thick) box.
pub const UNICODE_HEAVY_BOX: BorderStyle = BorderStyle::from_rows(
    ['\u{250F}', '\u{2533}', '\u{2513}'], // ┏┳┓
    ['\u{2523}', '\u{254B}', '\u{252B}'], // ┣╋┫
    ['\u{2517}', '\u{253B}', '\u{251B}'], // ┗┻┛
    '\u{2501}',                           // ━
    '\u{2503}',                           // ┃
);

/// All-blank palette: borders occupy their columns but draw spaces.
pub const BLANKS: BorderStyle = BorderStyle::from_rows(
    [' ', ' ', ' '],
    [' ', ' ', ' '],
    [' ', ' ', ' '],
    ' ',
    ' ',
);

/// Get a built-in palette by name.
#[must_use]
pub fn by_name(name: &str) -> Option<&'static BorderStyle> {
    match name.to_lowercase().as_str() {
        "classic" => Some(&CLASSIC),
        "unicode_box" => Some(&UNICODE_BOX),
        "unicode_round_box" => Some(&UNICODE_ROUND_BOX),
        "unicode_double_box" => Some(&UNICODE_DOUBLE_BOX),
        "unicode_heavy_box" => Some(&UNICODE_HEAVY_BOX),
        "blanks" => Some(&BLANKS),
        _ => None,
    }
}
