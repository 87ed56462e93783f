//! End-to-end tests for table rendering.
//!
//! Full grids are the place where cell shaping, width negotiation, and
//! the border engine interact, so these tests assert complete expected
//! renderings rather than fragments.
//!
//! Run with: RUST_LOG=debug cargo test --test e2e_render -- --nocapture

use test_log::test;

use tablefmt::cells;
use tablefmt::prelude::*;

fn crop() -> CellStyle {
    CellStyle::new()
        .align(HorizontalAlign::Left)
        .abbreviation(AbbreviationStyle::Crop)
}

// =============================================================================
// Scenario 1: Basic grids
// =============================================================================

#[test]
fn e2e_empty_table() {
    let t = Table::new(10);
    assert_eq!(t.render(), "");
    assert!(t.render_lines().is_empty());
}

#[test]
fn e2e_one_cell() {
    let mut t = Table::new(1);
    t.add_cell("abcdef", crop()).unwrap();
    assert_eq!(
        t.render(),
        "+------+\n\
         |abcdef|\n\
         +------+"
    );
}

#[test]
fn e2e_null_cell() {
    let mut t = Table::new(1);
    t.add_cell(CellContent::NULL, crop()).unwrap();
    assert_eq!(
        t.render(),
        "++\n\
         ||\n\
         ++"
    );
}

#[test]
fn e2e_empty_cell() {
    let mut t = Table::new(1);
    t.add_cell("", crop()).unwrap();
    assert_eq!(
        t.render(),
        "++\n\
         ||\n\
         ++"
    );
}

#[test]
fn e2e_two_cells_horizontal() {
    let mut t = Table::new(2);
    t.add_cell("abcdef", crop()).unwrap();
    t.add_cell("123456", crop()).unwrap();
    assert_eq!(
        t.render(),
        "+------+------+\n\
         |abcdef|123456|\n\
         +------+------+"
    );
}

#[test]
fn e2e_two_cells_vertical() {
    let mut t = Table::new(1);
    t.add_cell("abcdef", crop()).unwrap();
    t.add_cell("123456", crop()).unwrap();
    assert_eq!(
        t.render(),
        "+------+\n\
         |abcdef|\n\
         +------+\n\
         |123456|\n\
         +------+"
    );
}

#[test]
fn e2e_null_text_cell() {
    let mut t = Table::new(1);
    t.add_cell(CellContent::NULL, crop().null_style(NullStyle::NullText))
        .unwrap();
    assert_eq!(
        t.render(),
        "+------+\n\
         |<null>|\n\
         +------+"
    );
}

// =============================================================================
// Scenario 2: Margins and prompts
// =============================================================================

#[test]
fn e2e_margin_prompt() {
    let mut t = Table::new(1).prompt("prompt");
    t.add_cell("abcdef", crop()).unwrap();
    t.add_cell("123456", crop()).unwrap();
    assert_eq!(
        t.render(),
        "prompt+------+\n\
         prompt|abcdef|\n\
         prompt+------+\n\
         prompt|123456|\n\
         prompt+------+"
    );
}

#[test]
fn e2e_margin_spaces() {
    let mut t = Table::new(1).left_margin(4);
    t.add_cell("abcdef", crop()).unwrap();
    t.add_cell("123456", crop()).unwrap();
    assert_eq!(
        t.render(),
        "    +------+\n    |abcdef|\n    +------+\n    |123456|\n    +------+"
    );
}

#[test]
fn e2e_prompt_excluded_from_widths() {
    let mut t = Table::new(1).prompt("> ");
    t.add_cell("ab", crop()).unwrap();
    let lines = t.render_lines();
    assert_eq!(lines, vec!["> +--+", "> |ab|", "> +--+"]);
}

// =============================================================================
// Scenario 3: Width negotiation
// =============================================================================

#[test]
fn e2e_automatic_width() {
    let mut t = Table::new(2);
    for content in ["abcdef", "123456", "mno", "45689", "xyztuvw", "01234567"] {
        t.add_cell(content, crop()).unwrap();
    }
    assert_eq!(
        t.render(),
        "+-------+--------+\n\
         |abcdef |123456  |\n\
         +-------+--------+\n\
         |mno    |45689   |\n\
         +-------+--------+\n\
         |xyztuvw|01234567|\n\
         +-------+--------+"
    );
}

#[test]
fn e2e_width_bounds() {
    let mut t = Table::new(2);
    t.set_column_width(0, 6, 10).unwrap();
    t.set_column_width(1, 2, 7).unwrap();
    for content in ["abcd", "123456", "mno", "45689", "xyztu", "01234567"] {
        t.add_cell(content, crop()).unwrap();
    }
    assert_eq!(
        t.render(),
        "+------+-------+\n\
         |abcd  |123456 |\n\
         +------+-------+\n\
         |mno   |45689  |\n\
         +------+-------+\n\
         |xyztu |0123456|\n\
         +------+-------+"
    );
}

#[test]
fn e2e_missing_cell_renders_blank() {
    let mut t = Table::new(2);
    t.set_column_width(0, 6, 10).unwrap();
    t.set_column_width(1, 2, 7).unwrap();
    for content in ["abcd", "123456", "mno", "45689", "xyztu"] {
        t.add_cell(content, crop()).unwrap();
    }
    assert_eq!(
        t.render(),
        "+------+------+\n\
         |abcd  |123456|\n\
         +------+------+\n\
         |mno   |45689 |\n\
         +------+------+\n\
         |xyztu |      |\n\
         +------+------+"
    );
}

// =============================================================================
// Scenario 4: Column spans
// =============================================================================

#[test]
fn e2e_spanning_cell_suppresses_separators() {
    let mut t = Table::new(3);
    t.add_cell("aa", crop()).unwrap();
    t.add_cell("bb", crop()).unwrap();
    t.add_cell("cc", crop()).unwrap();
    t.add_cell_span("xxxxx", crop(), 2).unwrap();
    t.add_cell("yy", crop()).unwrap();
    assert_eq!(
        t.render(),
        "+--+--+--+\n\
         |aa|bb|cc|\n\
         +-----+--+\n\
         |xxxxx|yy|\n\
         +-----+--+"
    );
}

#[test]
fn e2e_spanning_cell_grows_columns() {
    let mut t = Table::new(2);
    t.add_cell("ab", crop()).unwrap();
    t.add_cell("cd", crop()).unwrap();
    t.add_cell_span("abcdefgh", crop(), 2).unwrap();
    assert_eq!(
        t.render(),
        "+----+---+\n\
         |ab  |cd |\n\
         +--------+\n\
         |abcdefgh|\n\
         +--------+"
    );
}

#[test]
fn e2e_span_with_hidden_separators_keeps_lines_aligned() {
    let mut t = Table::new(3).shown_borders(ShownBorders::SURROUND);
    t.add_cell("a", crop()).unwrap();
    t.add_cell("b", crop()).unwrap();
    t.add_cell("c", crop()).unwrap();
    t.add_cell_span("wide!", crop(), 2).unwrap();
    t.add_cell("x", crop()).unwrap();
    let lines = t.render_lines();
    let width = cells::cell_len(&lines[0]);
    for line in &lines {
        assert_eq!(cells::cell_len(line), width, "misaligned line: {line:?}");
    }
}

// =============================================================================
// Scenario 5: Visibility policies
// =============================================================================

#[test]
fn e2e_policy_surround() {
    let mut t = Table::new(2).shown_borders(ShownBorders::SURROUND);
    for content in ["aaa", "bbb", "ccc", "ddd"] {
        t.add_cell(content, crop()).unwrap();
    }
    assert_eq!(
        t.render(),
        "+------+\n\
         |aaabbb|\n\
         |cccddd|\n\
         +------+"
    );
}

#[test]
fn e2e_policy_header_only() {
    let mut t = Table::new(2).shown_borders(ShownBorders::HEADER_ONLY);
    for content in ["aaa", "bbb", "ccc", "ddd"] {
        t.add_cell(content, crop()).unwrap();
    }
    assert_eq!(
        t.render(),
        "aaabbb\n\
         ------\n\
         cccddd"
    );
}

#[test]
fn e2e_policy_none() {
    let mut t = Table::new(2).shown_borders(ShownBorders::NONE);
    for content in ["aaa", "bbb", "ccc", "ddd"] {
        t.add_cell(content, crop()).unwrap();
    }
    assert_eq!(t.render(), "aaabbb\ncccddd");
}

#[test]
fn e2e_policy_header_and_footer_skips_middle() {
    let mut t = Table::new(1).shown_borders(ShownBorders::HEADER_AND_FOOTER);
    for content in ["a", "b", "c", "d"] {
        t.add_cell(content, crop()).unwrap();
    }
    assert_eq!(t.render(), "a\n-\nb\nc\n-\nd");
}

#[test]
fn e2e_policy_middle_separators() {
    let mut t = Table::new(1).shown_borders(
        ShownBorders::HEADER_SEPARATOR
            | ShownBorders::MIDDLE_SEPARATOR
            | ShownBorders::FOOTER_SEPARATOR,
    );
    for content in ["a", "b", "c", "d"] {
        t.add_cell(content, crop()).unwrap();
    }
    assert_eq!(t.render(), "a\n-\nb\n-\nc\n-\nd");
}

// =============================================================================
// Scenario 6: Palettes
// =============================================================================

#[test]
fn e2e_unicode_box_palette() {
    let mut t = Table::new(1).border_style(UNICODE_BOX);
    t.add_cell("ab", crop()).unwrap();
    t.add_cell("cd", crop()).unwrap();
    assert_eq!(
        t.render(),
        "\u{250C}\u{2500}\u{2500}\u{2510}\n\
         \u{2502}ab\u{2502}\n\
         \u{251C}\u{2500}\u{2500}\u{2524}\n\
         \u{2502}cd\u{2502}\n\
         \u{2514}\u{2500}\u{2500}\u{2518}"
    );
}

#[test]
fn e2e_double_box_junctions() {
    let mut t = Table::new(2).border_style(UNICODE_DOUBLE_BOX);
    for content in ["a", "b", "c", "d"] {
        t.add_cell(content, crop()).unwrap();
    }
    assert_eq!(
        t.render(),
        "\u{2554}\u{2550}\u{2566}\u{2550}\u{2557}\n\
         \u{2551}a\u{2551}b\u{2551}\n\
         \u{2560}\u{2550}\u{256C}\u{2550}\u{2563}\n\
         \u{2551}c\u{2551}d\u{2551}\n\
         \u{255A}\u{2550}\u{2569}\u{2550}\u{255D}"
    );
}

// =============================================================================
// Scenario 7: Escapes and markup
// =============================================================================

#[test]
fn e2e_colored_cells_stay_aligned() {
    let esc = '\u{1b}';
    let colored = format!("{esc}[31mred{esc}[0m");
    let mut t = Table::new(2);
    t.add_cell(colored.as_str(), crop()).unwrap();
    t.add_cell("four", crop()).unwrap();
    t.add_cell("x", crop()).unwrap();
    t.add_cell("y", crop()).unwrap();

    let lines = t.render_lines();
    // the color run measures zero, so the first column is 3 wide
    assert_eq!(lines[0], "+---+----+");
    let width = cells::cell_len(&lines[0]);
    for line in &lines {
        assert_eq!(cells::cell_len(line), width, "misaligned line: {line:?}");
    }
    // the colored cell carries a reset so styling cannot bleed across
    assert!(lines[1].contains(&format!("{colored}{esc}[0m")));
}

#[test]
fn e2e_escape_markup() {
    let mut t = Table::new(1).escape_markup(true);
    t.add_cell("a<b", crop()).unwrap();
    assert_eq!(
        t.render(),
        "+---+\n\
         |a&lt;b|\n\
         +---+"
    );
}

#[test]
fn e2e_escape_markup_prompt() {
    let mut t = Table::new(1).escape_markup(true).prompt("<p>");
    t.add_cell("x", crop()).unwrap();
    let lines = t.render_lines();
    assert_eq!(lines[0], "&lt;p&gt;+-+");
    assert_eq!(lines[1], "&lt;p&gt;|x|");
}

// =============================================================================
// Scenario 8: Render forms agree
// =============================================================================

#[test]
fn e2e_render_forms_agree() {
    let mut t = Table::new(2).prompt("~ ");
    for content in ["one", "two", "three", "four"] {
        t.add_cell(content, crop()).unwrap();
    }

    let joined = t.render();
    let lines = t.render_lines();
    assert_eq!(joined, lines.join("\n"));

    let mut streamed = String::new();
    t.render_into(&mut streamed).unwrap();
    let mut expected = lines.join("\n");
    expected.push('\n');
    assert_eq!(streamed, expected);
}

#[test]
fn e2e_wide_characters_align() {
    let mut t = Table::new(2);
    t.add_cell("日本", crop()).unwrap();
    t.add_cell("ok", crop()).unwrap();
    t.add_cell("ab", crop()).unwrap();
    t.add_cell("cdef", crop()).unwrap();
    let lines = t.render_lines();
    assert_eq!(lines[0], "+----+----+");
    assert_eq!(lines[1], "|日本|ok  |");
    assert_eq!(lines[3], "|ab  |cdef|");
    let width = cells::cell_len(&lines[0]);
    for line in &lines {
        assert_eq!(cells::cell_len(line), width);
    }
}
