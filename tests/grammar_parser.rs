//! Grammar parser: the syntax only it understands, and how it fails
//!
//! - self-closing elements
//! - `{...}` code as standalone nodes and as attribute values
//! - bare flag attributes
//! - tag-name mismatches reported as diagnostics instead of failures

use hyml::hyml::ast::diagnostics::TAG_MISMATCH;
use hyml::hyml::ast::{AttributeValue, DiagnosticSeverity, Position, CODE_TAG};
use hyml::hyml::lexing::LexError;
use hyml::hyml::parsing::{parse_document, GrammarParser, ParseError};
use hyml::hyml::testing::{assert_tree, Samples};
use rstest::rstest;

#[test]
fn test_self_closing_elements() {
    let doc = parse_document(Samples::get("self-closing.hyml")).unwrap();

    assert_tree(&doc).child_count(1).child(0, |form| {
        form.assert_element("form")
            .child_count(3)
            .child(0, |input| {
                input
                    .assert_element("input")
                    .attribute("type", "text")
                    .attribute("name", "query")
                    .attribute_value("required", AttributeValue::Flag)
                    .child_count(0);
            })
            .child(1, |br| {
                br.assert_element("br").attribute_count(0).child_count(0);
            })
            .child(2, |button| {
                button
                    .assert_element("button")
                    .child(0, |text| {
                        text.assert_text().text("Search");
                    });
            });
    });
}

#[test]
fn test_br_has_no_text_descendants() {
    let doc = parse_document("<br/>").unwrap();
    let br = doc.root().child(0).unwrap();

    assert_eq!(br.tag(), Some("br"));
    assert!(br.descendants().iter().all(|node| !node.is_text()));
}

#[test]
fn test_code_nodes_and_code_attributes() {
    let doc = parse_document(Samples::get("code.hyml")).unwrap();

    assert_tree(&doc)
        .child_count(3)
        .child(0, |p| {
            p.assert_element("p")
                .child_count(3)
                .child(0, |text| {
                    text.assert_text().raw("Hello ");
                })
                .child(1, |code| {
                    code.assert_code().source("name");
                })
                .child(2, |text| {
                    text.assert_text().raw("!");
                });
        })
        .child(1, |code| {
            code.assert_code().source("x + 1");
        })
        .child(2, |button| {
            button
                .assert_element("button")
                .attribute_value("onclick", AttributeValue::expression("handle(event)"))
                .attribute_value("disabled", AttributeValue::Flag)
                .child(0, |text| {
                    text.assert_text().text("Go");
                });
        });
}

#[test]
fn test_code_node_reads_as_python_tag() {
    let doc = parse_document("{ x + 1 }").unwrap();
    let code = doc.root().child(0).unwrap();

    assert_eq!(code.tag(), Some(CODE_TAG));
    assert_eq!(code.tag(), Some("python"));
    assert_eq!(code.value(), Some("x + 1"));
}

#[test]
fn test_literal_and_expression_with_same_text_differ() {
    let doc = parse_document("<a x=\"v\" y={v}/>").unwrap();
    let attributes = doc.root().child(0).unwrap().attributes();

    assert_eq!(attributes.get_str("x"), attributes.get_str("y"));
    assert_ne!(attributes.get("x"), attributes.get("y"));
    assert!(attributes.get("y").unwrap().is_expression());
}

#[test]
fn test_mismatched_closing_tag_is_a_warning() {
    let doc = parse_document(Samples::get("mismatch.hyml")).unwrap();

    assert_tree(&doc)
        .diagnostic_count(1)
        .has_diagnostic(TAG_MISMATCH)
        .child_count(1)
        .child(0, |a| {
            a.assert_element("a").child(0, |text| {
                text.assert_text().text("text");
            });
        });

    let diagnostic = &doc.diagnostics()[0];
    assert_eq!(diagnostic.severity, DiagnosticSeverity::Warning);
    assert_eq!(diagnostic.range.start, Position::new(0, 9));
    assert!(diagnostic.message.contains("</b>"));
}

#[test]
fn test_nested_mismatches_are_all_reported() {
    let doc = parse_document("<a><b>x</c></d>").unwrap();
    assert_tree(&doc).diagnostic_count(2).child(0, |a| {
        a.assert_element("a").child(0, |b| {
            b.assert_element("b");
        });
    });
}

#[rstest]
#[case::unclosed_element("<p>text")]
#[case::stray_closing_tag("</p>")]
#[case::missing_attribute_value("<p id=>x</p>")]
#[case::empty_closing_tag("<p></>")]
#[case::text_inside_tag("<p \"x\">y</p>")]
#[case::missing_tag_name("<>x")]
fn test_syntax_errors(#[case] source: &str) {
    match GrammarParser::new().parse(source) {
        Err(ParseError::Syntax(error)) => {
            assert!(error.span.start <= source.len());
            assert!(!error.message.is_empty());
        }
        other => panic!("expected syntax error for {:?}, found {:?}", source, other),
    }
}

#[rstest]
#[case::unterminated_tag("<p", LexError::UnterminatedTag { offset: 0 })]
#[case::unterminated_code("x {y", LexError::UnterminatedCodeBlock { offset: 2 })]
#[case::stray_brace("x } y", LexError::UnexpectedCharacter { found: '}', offset: 2 })]
#[case::unterminated_string("<a b='c>", LexError::UnterminatedString { offset: 5 })]
fn test_lex_errors(#[case] source: &str, #[case] expected: LexError) {
    assert_eq!(
        GrammarParser::new().parse(source),
        Err(ParseError::Lex(expected))
    );
}

#[test]
fn test_syntax_error_position() {
    let Err(ParseError::Syntax(error)) = parse_document("<p>\n  <b>x</b>\n</p>\n</q>") else {
        panic!("expected syntax error");
    };
    assert_eq!(error.position, Position::new(3, 0));
    assert_eq!(error.found.as_deref(), Some("'</'"));
    assert!(error.to_string().starts_with("syntax error at 3:0"));
}
