//! Whole-pipeline tests for [`crate::markup::parse`].


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::markup::{
    ContentNode, FormulaSegment, ParseCache, Reference, ReferenceList, cell_lines, parse,
    plain_text,
};

fn text(s: &str) -> ContentNode {
    ContentNode::Text(s.to_string())
}

fn parse_plain(s: &str) -> Vec<ContentNode> {
    let nodes = parse(s, &ReferenceList::default());
    invariants::check(&nodes);
    nodes
}

#[rstest]
#[case("Gewone tekst zonder opmaak.")]
#[case("regel 1\nregel 2\n\nregel 4\n")]
#[case("")]
#[case("a [b] c")]
#[case("[onafgesloten")]
#[case("[a](b")]
#[case("**open")]
#[case("~~open")]
#[case("2 * 3 * 4")]
#[case("snake_case_id")]
#[case("```formula\nE_max")]
#[case("| geen | tabel |\ntekst")]
#[case("| a |\n| b |")]
#[case("```")]
fn unmatched_markup_is_literal(#[case] input: &str) {
    invariants::assert_literal(input);
}

#[test]
fn spaced_separator_opens_table() {
    assert_eq!(
        parse_plain("| a |\n| - - |\n| b |"),
        vec![ContentNode::Table {
            header: vec!["a".into()],
            rows: vec![vec!["b".into()]],
        }]
    );
}

#[test]
fn crlf_line_endings_are_dropped() {
    assert_eq!(
        parse_plain("x\r\n```formula\r\nA_b\r\n```\r\ny"),
        vec![
            text("x"),
            ContentNode::Formula(vec![FormulaSegment::Subscript {
                base: "A".into(),
                sub: "b".into(),
            }]),
            text("y"),
        ]
    );
}

#[test]
fn bold_with_nested_italic() {
    assert_eq!(
        parse_plain("**bold _and italic_**"),
        vec![ContentNode::Bold(vec![
            text("bold "),
            ContentNode::Italic(vec![text("and italic")]),
        ])]
    );
}

#[test]
fn popup_with_two_fields_has_empty_reference() {
    assert_eq!(
        parse_plain("[x](popup:T||B)"),
        vec![ContentNode::Popup {
            label: "x".into(),
            title: "T".into(),
            body: "B".into(),
            reference: Some(String::new()),
        }]
    );
}

#[test]
fn popup_with_title_only() {
    assert_eq!(
        parse_plain("[x](popup:T)"),
        vec![ContentNode::Popup {
            label: "x".into(),
            title: "T".into(),
            body: String::new(),
            reference: Some(String::new()),
        }]
    );
}

#[test]
fn pipe_line_without_separator_stays_text() {
    assert_eq!(
        parse_plain("|a|b|\nvolgende regel"),
        vec![text("|a|b|\nvolgende regel")]
    );
}

#[test]
fn table_with_header_and_rows() {
    let input = "Vooraf\n| Product | Klasse |\n|---|:---:|\n| Lamp | A |\n| Monitor | ~~n.v.t.~~ |\nAchteraf";
    assert_eq!(
        parse_plain(input),
        vec![
            text("Vooraf"),
            ContentNode::Table {
                header: vec!["Product".into(), "Klasse".into()],
                rows: vec![
                    vec!["Lamp".into(), "A".into()],
                    vec!["Monitor".into(), "~~n.v.t.~~".into()],
                ],
            },
            text("Achteraf"),
        ]
    );
}

#[test]
fn table_header_only_at_end_of_input() {
    insta::assert_debug_snapshot!(parse_plain("| a |\n|---|"), @r#"
    [
        Table {
            header: [
                "a",
            ],
            rows: [],
        },
    ]
    "#);
}

#[test]
fn table_cells_keep_break_markers() {
    let nodes = parse_plain("| Eis |\n|---|\n| regel 1<br>regel 2 |");
    let ContentNode::Table { rows, .. } = &nodes[0] else {
        panic!("expected table, got {nodes:?}");
    };
    assert_eq!(rows.len(), 1);
    assert_eq!(cell_lines(&rows[0][0]), vec!["regel 1", "regel 2"]);
}

#[test]
fn image_line_between_paragraphs() {
    assert_eq!(
        parse_plain("Label:\n![Energielabel](/img/label.png)\nEinde"),
        vec![
            text("Label:"),
            ContentNode::Image {
                alt: "Energielabel".into(),
                url: "/img/label.png".into(),
            },
            text("Einde"),
        ]
    );
}

#[test]
fn image_with_surrounding_text_is_not_an_image() {
    assert_eq!(
        parse_plain("zie ![a](b.png) hier"),
        vec![text("zie ![a](b.png) hier")]
    );
}

#[test]
fn formula_block() {
    insta::assert_debug_snapshot!(parse_plain("```formula\nE_max = P_nom * 8\n```"), @r#"
    [
        Formula(
            [
                Subscript {
                    base: "E",
                    sub: "max",
                },
                Text {
                    text: " = ",
                },
                Subscript {
                    base: "P",
                    sub: "nom",
                },
                Text {
                    text: " * 8",
                },
            ],
        ),
    ]
    "#);
}

#[test]
fn formula_body_is_not_inline_parsed() {
    assert_eq!(
        parse_plain("```formula\n**X_a**\n```"),
        vec![ContentNode::Formula(vec![
            FormulaSegment::Text { text: "**".into() },
            FormulaSegment::Subscript {
                base: "X".into(),
                sub: "a".into(),
            },
            FormulaSegment::Text { text: "**".into() },
        ])]
    );
}

#[test]
fn unterminated_formula_joins_preceding_text() {
    assert_eq!(
        parse_plain("voor\n```formula\nE_max\n*na*"),
        vec![
            text("voor\n```formula\nE_max\n"),
            ContentNode::Italic(vec![text("na")]),
        ]
    );
}

#[test]
fn grey_span_in_paragraph() {
    assert_eq!(
        parse_plain("Status: ~~niet van toepassing~~."),
        vec![
            text("Status: "),
            ContentNode::Grey(vec![text("niet van toepassing")]),
            text("."),
        ]
    );
}

#[test]
fn grey_plain_text_strips_inner_markup() {
    let nodes = parse_plain("~~zie **dit** en [x](https://a.nl)~~");
    assert_eq!(plain_text(&nodes), "zie dit en x");
}

#[test]
fn grey_does_not_cross_lines() {
    invariants::assert_literal("~~a\nb~~");
}

#[test]
fn reference_popup_resolves() {
    let refs = ReferenceList::new(vec![Reference::new(
        "Art. 7 EED",
        "Richtlijn (EU) 2023/1791, artikel 7",
    )]);
    let nodes = parse("Zie [artikel 7](toggle:Art. 7 EED).", &refs);
    assert_eq!(
        nodes[1],
        ContentNode::Popup {
            label: "artikel 7".into(),
            title: "Art. 7 EED".into(),
            body: "Richtlijn (EU) 2023/1791, artikel 7".into(),
            reference: None,
        }
    );
}

#[test]
fn plain_text_strips_markup() {
    let nodes = parse_plain("**Let op:** kies [label A](https://example.org) of _beter_.");
    assert_eq!(plain_text(&nodes), "Let op: kies label A of beter.");
}

#[test]
fn parse_is_deterministic() {
    let input = "**a** [b](popup:c||d||e)\n| x |\n|---|\n| y |";
    assert_eq!(parse_plain(input), parse_plain(input));
}

#[test]
fn cache_matches_direct_parse() {
    let input = "*a* ~~b~~ [c](https://d.nl)";
    let mut cache = ParseCache::default();
    assert_eq!(cache.parse(input), parse_plain(input).as_slice());
}
