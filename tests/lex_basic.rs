//! Positive scanning tests over the default C-like grammar.

use graphlex::lexer::{GrammarTemplate, ScanEngine, ScanResult, StateGraph, TokenType};

fn scan_lines(lines: &[&str]) -> ScanResult {
    let graph = StateGraph::compile(&GrammarTemplate::c_like());
    ScanEngine::new(&graph).scan(lines)
}

fn scan_one(line: &str) -> ScanResult {
    scan_lines(&[line])
}

#[test]
fn every_template_lexeme_scans_to_itself() {
    let template = GrammarTemplate::c_like();
    let graph = StateGraph::compile(&template);
    let engine = ScanEngine::new(&graph);

    for (lexeme, ty) in template.keywords.iter().chain(&template.symbols) {
        // comment openers suppress their own emission; everything else must
        // come back as exactly one token
        if matches!(ty, TokenType::LineComment | TokenType::BlockCommentStart) {
            continue;
        }
        let result = engine.scan([lexeme.as_str()]);
        assert!(result.success, "scan of {lexeme:?} failed");
        assert_eq!(result.entries.len(), 2, "lexeme {lexeme:?}");
        let tok = &result.entries[0];
        assert_eq!(tok.token_type, *ty, "lexeme {lexeme:?}");
        assert_eq!(tok.content.as_deref(), Some(lexeme.as_str()));
        assert_eq!(tok.id, Some(1));
        assert_eq!((tok.location.row, tok.location.col), (1, 1));
        assert_eq!(result.entries[1].token_type, TokenType::Eof);
        assert_eq!(result.entries[1].id, Some(2));
    }
}

#[test]
fn maximal_munch_prefers_identifier_over_keyword_prefix() {
    let result = scan_one("ifx");
    assert_eq!(result.entries.len(), 2);
    assert_eq!(result.entries[0].token_type, TokenType::Identifier);
    assert_eq!(result.entries[0].content.as_deref(), Some("ifx"));

    // a digit continuation also turns a keyword into an identifier
    let result = scan_one("if2");
    assert_eq!(result.entries[0].token_type, TokenType::Identifier);
    assert_eq!(result.entries[0].content.as_deref(), Some("if2"));

    // the exact keyword still wins when the match ends at its boundary
    let result = scan_one("if");
    assert_eq!(result.entries[0].token_type, TokenType::KwIf);
}

#[test]
fn numeric_literals() {
    let result = scan_one("123");
    assert_eq!(result.entries[0].token_type, TokenType::IntegerConstant);
    assert_eq!(result.entries[0].content.as_deref(), Some("123"));

    let result = scan_one("123e+5");
    assert_eq!(
        result.entries[0].token_type,
        TokenType::FloatingPointConstant
    );
    assert_eq!(result.entries[0].content.as_deref(), Some("123e+5"));

    let result = scan_one("9E3");
    assert_eq!(
        result.entries[0].token_type,
        TokenType::FloatingPointConstant
    );
}

#[test]
fn decimal_point_splits_the_literal() {
    // no '.' edge out of the integer state: "1.5" is an integer, an
    // unrecognized dot, and another integer
    let result = scan_one("1.5");
    let entries = &result.entries;
    assert_eq!(entries.len(), 4);

    assert_eq!(entries[0].token_type, TokenType::IntegerConstant);
    assert_eq!(entries[0].content.as_deref(), Some("1"));
    assert_eq!(entries[0].id, Some(1));

    assert_eq!(entries[1].token_type, TokenType::Unknown);
    assert_eq!(entries[1].id, None);
    assert_eq!(entries[1].content, None);
    assert_eq!((entries[1].location.row, entries[1].location.col), (1, 2));

    assert_eq!(entries[2].token_type, TokenType::IntegerConstant);
    assert_eq!(entries[2].content.as_deref(), Some("5"));
    assert_eq!(entries[2].id, Some(2));

    assert_eq!(entries[3].token_type, TokenType::Eof);
    // the dot came out of a finalize-then-reread, which never clears success
    assert!(result.success);
}

#[test]
fn dangling_exponent_finalizes_as_unknown_token() {
    // "12e+" stops in a non-accepting exponent state; the baseline emits the
    // match as an UNKNOWN token with id and content
    let result = scan_one("12e+");
    assert_eq!(result.entries.len(), 2);
    assert_eq!(result.entries[0].token_type, TokenType::Unknown);
    assert_eq!(result.entries[0].id, Some(1));
    assert_eq!(result.entries[0].content.as_deref(), Some("12e+"));
    assert!(result.success);
}

#[test]
fn expression_line() {
    let result = scan_one("foo=12+bar(7);");
    let kinds: Vec<TokenType> = result.entries.iter().map(|t| t.token_type).collect();
    assert_eq!(
        kinds,
        vec![
            TokenType::Identifier,
            TokenType::Assign,
            TokenType::IntegerConstant,
            TokenType::Plus,
            TokenType::Identifier,
            TokenType::LParen,
            TokenType::IntegerConstant,
            TokenType::RParen,
            TokenType::Semicolon,
            TokenType::Eof,
        ]
    );
    let ids: Vec<Option<u32>> = result.entries.iter().map(|t| t.id).collect();
    assert_eq!(ids, (1..=10).map(Some).collect::<Vec<_>>());
    let cols: Vec<u32> = result.entries.iter().map(|t| t.location.col).collect();
    assert_eq!(cols, vec![1, 4, 5, 7, 8, 11, 12, 13, 14, 1]);
}

#[test]
fn blank_lines_do_not_advance_the_row_counter() {
    let result = scan_lines(&["int a", "", "   \t ", "b"]);
    assert!(result.success);
    let entries = &result.entries;
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0].token_type, TokenType::KwInt);
    assert_eq!(entries[0].location.row, 1);
    assert_eq!(entries[1].content.as_deref(), Some("a"));
    assert_eq!(entries[1].location.row, 1);
    // "b" sits on physical line 4 but reports row 2
    assert_eq!(entries[2].content.as_deref(), Some("b"));
    assert_eq!(entries[2].location.row, 2);
    assert_eq!(entries[3].token_type, TokenType::Eof);
    assert_eq!((entries[3].location.row, entries[3].location.col), (3, 1));
}

#[test]
fn empty_input_still_terminates_with_eof() {
    let result = scan_lines(&[]);
    assert!(result.success);
    assert_eq!(result.entries.len(), 1);
    let eof = &result.entries[0];
    assert_eq!(eof.token_type, TokenType::Eof);
    assert_eq!(eof.id, Some(1));
    assert_eq!(eof.content.as_deref(), Some("#"));
    assert_eq!((eof.location.row, eof.location.col), (1, 1));
}

#[test]
fn whitespace_separates_without_errors() {
    let result = scan_one("a\tb  c");
    assert!(result.success);
    let contents: Vec<_> = result
        .entries
        .iter()
        .filter_map(|t| t.content.as_deref())
        .collect();
    assert_eq!(contents, vec!["a", "b", "c", "#"]);
}
