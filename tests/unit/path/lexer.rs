use super::*;

fn kinds(src: &str) -> Vec<TokenKind> {
    lex_path(src).unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn commas_and_whitespace_are_separators() {
    assert_eq!(
        kinds("M10,20\tL 30 ,40"),
        vec![
            TokenKind::Command('M'),
            TokenKind::Number(10.0),
            TokenKind::Number(20.0),
            TokenKind::Command('L'),
            TokenKind::Number(30.0),
            TokenKind::Number(40.0),
        ]
    );
}

#[test]
fn signs_and_second_decimal_point_start_new_numbers() {
    assert_eq!(
        kinds("10-5 1.5.5 +2"),
        vec![
            TokenKind::Number(10.0),
            TokenKind::Number(-5.0),
            TokenKind::Number(1.5),
            TokenKind::Number(0.5),
            TokenKind::Number(2.0),
        ]
    );
}

#[test]
fn exponent_notation_is_part_of_the_number() {
    assert_eq!(
        kinds("1e2 -2.5E-1 3e+1"),
        vec![
            TokenKind::Number(100.0),
            TokenKind::Number(-0.25),
            TokenKind::Number(30.0),
        ]
    );
}

#[test]
fn spans_point_at_source_bytes() {
    let toks = lex_path("M 12.5 -3").unwrap();
    assert_eq!(toks[1].span, Span { start: 2, end: 6 });
    assert_eq!(toks[2].span, Span { start: 7, end: 9 });
}

#[test]
fn lowercase_letters_lex_as_commands() {
    assert_eq!(
        kinds("m1 2z"),
        vec![
            TokenKind::Command('m'),
            TokenKind::Number(1.0),
            TokenKind::Number(2.0),
            TokenKind::Command('z'),
        ]
    );
}

#[test]
fn dangling_exponent_is_reported_with_offset() {
    let err = lex_path("M 0 1e").unwrap_err();
    match err {
        EpicycleError::Parse { offset, token, .. } => {
            assert_eq!(offset, 4);
            assert_eq!(token, "1e");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn lone_sign_is_rejected() {
    let err = lex_path("L - 3").unwrap_err();
    assert!(matches!(err, EpicycleError::Parse { offset: 2, .. }));
}

#[test]
fn unexpected_character_is_rejected() {
    let err = lex_path("M 0 0 # 1").unwrap_err();
    match err {
        EpicycleError::Parse { offset, token, .. } => {
            assert_eq!(offset, 6);
            assert_eq!(token, "#");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn empty_input_has_no_tokens() {
    assert!(lex_path("  ,, ").unwrap().is_empty());
}

#[test]
fn overflowing_number_is_rejected() {
    let err = lex_path("M 1e400 0").unwrap_err();
    match err {
        EpicycleError::Parse {
            offset,
            token,
            message,
        } => {
            assert_eq!(offset, 2);
            assert_eq!(token, "1e400");
            assert_eq!(message, "number out of range");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
