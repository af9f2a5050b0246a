//! Property-based tests for the token parser

use chatline_parser::{FetchError, Token, TokenKind, TokenParser};
use proptest::prelude::*;

fn offline(url: &str) -> Result<String, FetchError> {
    Err(FetchError::Unsupported {
        url: url.to_string(),
    })
}

fn parser() -> TokenParser {
    TokenParser::new(offline).unwrap()
}

proptest! {
    #[test]
    fn mention_payload_is_the_name(name in "[A-Za-z0-9_]{1,24}") {
        let report = parser().parse(&format!("hey @{name}, look"));
        prop_assert_eq!(
            report.get(TokenKind::Mention).unwrap(),
            &[Token::Mention { username: name }]
        );
    }

    #[test]
    fn emoticon_payload_is_the_code(code in "[A-Za-z0-9_]{1,15}") {
        let report = parser().parse(&format!("so ({code}) today"));
        prop_assert_eq!(
            report.get(TokenKind::Emoticon).unwrap(),
            &[Token::Emoticon { code }]
        );
    }

    #[test]
    fn long_emoticon_codes_never_match(code in "[A-Za-z0-9_]{16,30}") {
        let report = parser().parse(&format!("({code})"));
        prop_assert!(report.is_empty());
    }

    #[test]
    fn mentions_keep_message_order(names in prop::collection::vec("[a-z][a-z0-9_]{0,10}", 1..8)) {
        let line = names
            .iter()
            .map(|name| format!("@{name}"))
            .collect::<Vec<_>>()
            .join(" and ");

        let report = parser().parse(&line);
        let found: Vec<String> = report
            .get(TokenKind::Mention)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        prop_assert_eq!(found, names);
    }

    #[test]
    fn plain_words_yield_nothing(line in "[a-zA-Z ,.!?]{0,80}") {
        let report = parser().parse(&line);
        prop_assert!(report.is_empty());
        prop_assert!(report.rejections().is_empty());
    }

    #[test]
    fn parsing_never_panics(line in "\\PC{0,120}") {
        let report = parser().parse(&line);
        prop_assert!(report.token_count() >= report.len());
    }
}
