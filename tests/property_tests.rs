//! Property-based tests for the shaping and rendering invariants.

use proptest::prelude::*;

use tablefmt::cells;
use tablefmt::prelude::*;

fn aligns() -> impl Strategy<Value = HorizontalAlign> {
    prop_oneof![
        Just(HorizontalAlign::Left),
        Just(HorizontalAlign::Center),
        Just(HorizontalAlign::Right),
    ]
}

fn abbreviations() -> impl Strategy<Value = AbbreviationStyle> {
    prop_oneof![Just(AbbreviationStyle::Crop), Just(AbbreviationStyle::Dots)]
}

fn null_styles() -> impl Strategy<Value = NullStyle> {
    prop_oneof![Just(NullStyle::EmptyString), Just(NullStyle::NullText)]
}

fn styles() -> impl Strategy<Value = CellStyle> {
    (aligns(), abbreviations(), null_styles()).prop_map(|(align, abbreviation, null_style)| {
        CellStyle::new()
            .align(align)
            .abbreviation(abbreviation)
            .null_style(null_style)
    })
}

/// Cell content: plain ASCII, CJK, or text wrapped in a color run.
fn contents() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ -~]{0,16}",
        "[日本語中文]{0,6}",
        "[a-z]{0,8}".prop_map(|s| format!("\u{1b}[31m{s}\u{1b}[0m")),
    ]
}

proptest! {
    /// Rendering always produces exactly the requested display width.
    #[test]
    fn prop_width_exactness(style in styles(), content in contents(), width in 0usize..32) {
        let rendered = style.render(Some(&content), width);
        prop_assert_eq!(cells::cell_len(&rendered), width);
    }

    /// Null content renders to the requested width too.
    #[test]
    fn prop_width_exactness_null(style in styles(), width in 0usize..32) {
        let rendered = style.render(None, width);
        prop_assert_eq!(cells::cell_len(&rendered), width);
    }

    /// Content that already fits exactly passes through unchanged.
    #[test]
    fn prop_fit_is_identity(style in styles(), content in "[ -~]{0,16}") {
        let width = style.measure(Some(&content));
        prop_assert_eq!(style.render(Some(&content), width), content);
    }

    /// Center alignment puts the smaller pad half on the left.
    #[test]
    fn prop_center_pad_symmetry(content in "[a-z]{1,8}", extra in 1usize..16) {
        let style = CellStyle::new().align(HorizontalAlign::Center);
        let width = content.len() + extra;
        let rendered = style.render(Some(&content), width);
        let left = rendered.len() - rendered.trim_start().len();
        let right = rendered.len() - rendered.trim_end().len();
        prop_assert!(left <= right);
        prop_assert!(right - left <= 1);
    }

    /// Dots abbreviation never exceeds the width; tiny widths take a
    /// prefix of the ellipsis itself.
    #[test]
    fn prop_dots_floor(content in "[a-z]{4,20}", width in 0usize..4) {
        let style = CellStyle::new().abbreviation(AbbreviationStyle::Dots);
        let rendered = style.render(Some(&content), width);
        prop_assert_eq!(rendered.as_str(), &"..."[..width]);
        prop_assert!(cells::cell_len(&rendered) <= width);
    }

    /// Every rendered line of a table has the same display width and
    /// carries the configured prompt, whatever the policy.
    #[test]
    fn prop_lines_align_under_any_policy(
        cell_contents in prop::collection::vec("[ -~]{0,10}", 1..12),
        columns in 1usize..5,
        policy in prop_oneof![
            Just(ShownBorders::ALL),
            Just(ShownBorders::NONE),
            Just(ShownBorders::SURROUND),
            Just(ShownBorders::HEADER_AND_COLUMNS),
            Just(ShownBorders::SURROUND_HEADER_FOOTER_AND_COLUMNS),
        ],
    ) {
        let style = CellStyle::new();
        let mut table = Table::new(columns).shown_borders(policy).prompt("~ ");
        for content in &cell_contents {
            table.add_cell(content.as_str(), style).unwrap();
        }

        let lines = table.render_lines();
        prop_assert!(!lines.is_empty());
        let width = cells::cell_len(&lines[0]);
        for line in &lines {
            prop_assert!(line.starts_with("~ "));
            prop_assert_eq!(cells::cell_len(line), width);
        }
    }

    /// The three render forms are views over the same lines.
    #[test]
    fn prop_render_forms_agree(
        cell_contents in prop::collection::vec("[a-z]{0,8}", 1..8),
        columns in 1usize..4,
    ) {
        let style = CellStyle::new();
        let mut table = Table::new(columns);
        for content in &cell_contents {
            table.add_cell(content.as_str(), style).unwrap();
        }

        let lines = table.render_lines();
        prop_assert_eq!(table.render(), lines.join("\n"));

        let mut streamed = String::new();
        table.render_into(&mut streamed).unwrap();
        let expected: String = lines.iter().map(|l| format!("{l}\n")).collect();
        prop_assert_eq!(streamed, expected);
    }
}
