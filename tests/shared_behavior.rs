//! Behavior both parsers must agree on
//!
//! Every test here runs once per parse strategy. Inputs are restricted to the syntax both
//! parsers accept: matched tags, quoted attributes, no code blocks.

use hyml::hyml::ast::snapshot_from_document;
use hyml::hyml::config::ParserConfig;
use hyml::hyml::formats::render;
use hyml::hyml::parsing::{parse_with, Document, ParseError, Strategy, DEFAULT_MAX_DEPTH};
use hyml::hyml::testing::{assert_tree, Samples};
use rstest::rstest;

fn parse(source: &str, strategy: Strategy) -> Document {
    let config = ParserConfig {
        strategy,
        ..ParserConfig::default()
    };
    parse_with(source, &config).expect("parse failed")
}

#[rstest(strategy => [Strategy::Scanner, Strategy::Grammar])]
fn test_element_with_text(strategy: Strategy) {
    let doc = Samples::find("element-text.hyml").unwrap().parse_with(strategy);

    assert_tree(&doc).child_count(1).child(0, |node| {
        node.assert_element("p")
            .attribute_count(0)
            .child_count(1)
            .child(0, |text| {
                text.assert_text().text("Hello");
            });
    });
}

#[rstest(strategy => [Strategy::Scanner, Strategy::Grammar])]
fn test_quoted_attributes(strategy: Strategy) {
    let doc = Samples::find("attributes.hyml").unwrap().parse_with(strategy);

    assert_tree(&doc).child_count(1).child(0, |node| {
        node.assert_element("div")
            .attribute("id", "x")
            .attribute("class", "y")
            .attribute_count(2)
            .child(0, |text| {
                text.assert_text().text("content");
            });
    });
}

#[rstest(strategy => [Strategy::Scanner, Strategy::Grammar])]
fn test_page(strategy: Strategy) {
    let doc = Samples::find("page.hyml").unwrap().parse_with(strategy);

    assert_tree(&doc).child_count(1).child(0, |html| {
        html.assert_element("html")
            .child_count(2)
            .child(0, |head| {
                head.assert_element("head").child(0, |title| {
                    title
                        .assert_element("title")
                        .child_count(1)
                        .child(0, |text| {
                            text.assert_text().text("Test Page");
                        });
                });
            })
            .child(1, |body| {
                body.assert_element("body")
                    .attribute("class", "main")
                    .attribute("id", "content")
                    .child_count(2)
                    .child(0, |h1| {
                        h1.assert_element("h1").child(0, |text| {
                            text.assert_text().text("Hello World");
                        });
                    })
                    .child(1, |p| {
                        p.assert_element("p")
                            .child_count(3)
                            .child(0, |text| {
                                text.assert_text().text("This is a");
                            })
                            .child(1, |b| {
                                b.assert_element("b").child(0, |text| {
                                    text.assert_text().text("test");
                                });
                            })
                            .child(2, |text| {
                                text.assert_text().text("paragraph.");
                            });
                    });
            });
    });
}

#[rstest(strategy => [Strategy::Scanner, Strategy::Grammar])]
fn test_root_is_bare_and_keeps_order(strategy: Strategy) {
    let doc = parse("first <a>x</a> second <b>y</b>", strategy);
    let root = doc.root();

    assert!(root.is_root());
    assert_eq!(root.tag(), None);
    assert_eq!(root.value(), None);
    assert_tree(&doc)
        .child_count(4)
        .child(0, |n| {
            n.assert_text().text("first");
        })
        .child(1, |n| {
            n.assert_element("a");
        })
        .child(2, |n| {
            n.assert_text().text("second");
        })
        .child(3, |n| {
            n.assert_element("b");
        });
}

#[rstest(strategy => [Strategy::Scanner, Strategy::Grammar])]
fn test_parent_links(strategy: Strategy) {
    let doc = Samples::find("page.hyml").unwrap().parse_with(strategy);

    for node in std::iter::once(doc.root()).chain(doc.root().descendants()) {
        for child in node.children() {
            assert_eq!(child.parent().map(|p| p.id()), Some(node.id()));
        }
    }
    assert!(doc.root().parent().is_none());
}

#[rstest(strategy => [Strategy::Scanner, Strategy::Grammar])]
fn test_reparse_is_idempotent(strategy: Strategy) {
    for sample in Samples::for_strategy(strategy) {
        let first = sample.parse_with(strategy);
        let second = sample.parse_with(strategy);
        assert_eq!(
            snapshot_from_document(&first),
            snapshot_from_document(&second),
            "sample {}",
            sample.name
        );
    }
}

#[rstest(strategy => [Strategy::Scanner, Strategy::Grammar])]
fn test_empty_input(strategy: Strategy) {
    for source in ["", "   ", "\n\t\n"] {
        let doc = parse(source, strategy);
        assert!(doc.is_empty(), "source {:?}", source);
        assert_eq!(doc.len(), 1);
    }
}

fn nested(depth: usize) -> String {
    format!("{}x{}", "<a>".repeat(depth), "</a>".repeat(depth))
}

#[rstest(strategy => [Strategy::Scanner, Strategy::Grammar])]
fn test_nesting_at_the_limit(strategy: Strategy) {
    let doc = parse(&nested(DEFAULT_MAX_DEPTH), strategy);

    assert_eq!(doc.len(), DEFAULT_MAX_DEPTH + 2);
    assert_eq!(doc, parse(&nested(DEFAULT_MAX_DEPTH), strategy));
    assert_eq!(render(&doc).lines().count(), 2 * DEFAULT_MAX_DEPTH + 1);
}

#[rstest]
#[case::one_past(DEFAULT_MAX_DEPTH + 1)]
#[case::far_past(3000)]
fn test_nesting_past_the_limit(
    #[case] depth: usize,
    #[values(Strategy::Scanner, Strategy::Grammar)] strategy: Strategy,
) {
    let config = ParserConfig {
        strategy,
        ..ParserConfig::default()
    };
    assert_eq!(
        parse_with(&nested(depth), &config),
        Err(ParseError::TooDeep {
            limit: DEFAULT_MAX_DEPTH,
            offset: 3 * DEFAULT_MAX_DEPTH,
        })
    );
}

#[rstest(strategy => [Strategy::Scanner, Strategy::Grammar])]
fn test_many_siblings(strategy: Strategy) {
    let source = "<p>x</p>".repeat(5_000);
    let doc = parse(&source, strategy);

    assert_tree(&doc).child_count(5_000);
    assert_eq!(snapshot_from_document(&doc).children.len(), 5_000);
}
