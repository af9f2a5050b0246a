//! Integration tests for report rendering

use chatline_parser::{Token, TokenReport};
use chatline_runtime::{OutputFormat, render, render_json, render_pretty};

fn report(tokens: Vec<Token>) -> TokenReport {
    let mut report = TokenReport::new();
    for token in tokens {
        report.push(token);
    }
    report
}

fn mention(name: &str) -> Token {
    Token::Mention {
        username: name.to_string(),
    }
}

fn link(url: &str, title: &str) -> Token {
    Token::Link {
        url: url.to_string(),
        title: title.to_string(),
    }
}

// =============================================================================
// Pretty Layout
// =============================================================================

#[test]
fn pretty_single_mention() {
    let rendered = render_pretty(&report(vec![mention("chris")]));
    assert_eq!(rendered, "{\n    \"mentions\": [\n        chris\n    ]\n}\n");
}

#[test]
fn pretty_link_is_nested_object() {
    let rendered = render_pretty(&report(vec![link(
        "http://www.nbcolympics.com",
        "2016 Rio Olympic Games | NBC Olympics",
    )]));
    assert_eq!(
        rendered,
        "{\n    \"links\": [\n        {\n            \"url\": \"http://www.nbcolympics.com\",\n            \"title\": \"2016 Rio Olympic Games | NBC Olympics\"\n        }\n    ]\n}\n"
    );
}

#[test]
fn pretty_separates_tags_with_commas() {
    let rendered = render_pretty(&report(vec![
        mention("a"),
        Token::Emoticon {
            code: "b".to_string(),
        },
    ]));
    assert!(rendered.contains("    ],\n    \"emoticons\": [\n"));
}

// =============================================================================
// Format Selection
// =============================================================================

#[test]
fn empty_report_renders_empty_in_every_format() {
    let empty = TokenReport::new();
    assert_eq!(render(&empty, OutputFormat::Pretty).unwrap(), "");
    assert_eq!(render(&empty, OutputFormat::Json).unwrap(), "");
}

#[test]
fn json_layout_is_pretty_printed() {
    let rendered = render_json(&report(vec![mention("bob")])).unwrap();
    assert_eq!(rendered, "{\n  \"mentions\": [\n    \"bob\"\n  ]\n}\n");
}

#[test]
fn json_round_trips_through_serde() {
    let rendered = render(
        &report(vec![mention("bob"), link("https://x.example", "X")]),
        OutputFormat::Json,
    )
    .unwrap();

    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["mentions"][0], "bob");
    assert_eq!(value["links"][0]["title"], "X");
}
