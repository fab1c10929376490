use rainbow_brackets::{SyntaxKind, tokenize_with_trivia as tokenize};
use rstest::{fixture, rstest};

#[fixture]
fn simple_input() -> &'static str {
    "fn main() { let v = [1]; }"
}

#[rstest]
#[case("fn", vec![SyntaxKind::K_FN])]
#[case("let", vec![SyntaxKind::K_LET])]
#[case("letter", vec![SyntaxKind::T_IDENT])]
#[case("()", vec![SyntaxKind::T_LPAREN, SyntaxKind::T_RPAREN])]
#[case("{}", vec![SyntaxKind::T_LBRACE, SyntaxKind::T_RBRACE])]
#[case("[]", vec![SyntaxKind::T_LBRACKET, SyntaxKind::T_RBRACKET])]
#[case("a->b", vec![SyntaxKind::T_IDENT, SyntaxKind::T_ARROW, SyntaxKind::T_IDENT])]
fn single_tokens(#[case] source: &str, #[case] expected: Vec<SyntaxKind>) {
    let tokens = tokenize(source);
    let kinds: Vec<SyntaxKind> = tokens.iter().map(|(k, _)| *k).collect();
    assert_eq!(kinds, expected);
}

#[rstest]
fn token_spans(simple_input: &str) {
    let tokens = tokenize(simple_input);
    for (kind, span) in tokens {
        let text = simple_input.get(span.clone()).unwrap_or("");
        match kind {
            SyntaxKind::K_FN => assert_eq!(text, "fn"),
            SyntaxKind::T_LBRACKET => assert_eq!(text, "["),
            SyntaxKind::T_RBRACE => assert_eq!(text, "}"),
            _ => {}
        }
    }
}

#[rstest]
#[case("123", SyntaxKind::T_NUMBER)]
#[case("0xff", SyntaxKind::T_NUMBER)]
#[case("\"foo\"", SyntaxKind::T_STRING)]
#[case("\"(\"", SyntaxKind::T_STRING)]
#[case("\"a \\\" ) b\"", SyntaxKind::T_STRING)]
#[case("'{'", SyntaxKind::T_CHAR)]
fn literal_tokens(#[case] source: &str, #[case] expected: SyntaxKind) {
    let tokens = tokenize(source);
    assert_eq!(tokens.len(), 1);
    let first = tokens
        .first()
        .cloned()
        .unwrap_or_else(|| panic!("no token"));
    assert_eq!(first.0, expected);
}

#[rstest]
#[case(" ", SyntaxKind::T_WHITESPACE)]
#[case("\n", SyntaxKind::T_WHITESPACE)]
#[case("/* ( */", SyntaxKind::T_COMMENT)]
#[case("/** doc **/", SyntaxKind::T_COMMENT)]
#[case("/* ( **/", SyntaxKind::T_COMMENT)]
#[case("/***/", SyntaxKind::T_COMMENT)]
#[case("/**/", SyntaxKind::T_COMMENT)]
#[case("/* a * b */", SyntaxKind::T_COMMENT)]
#[case("// ]", SyntaxKind::T_COMMENT)]
fn trivia_tokens(#[case] source: &str, #[case] expected: SyntaxKind) {
    let tokens = tokenize(source);
    assert_eq!(tokens.len(), 1);
    let first = tokens
        .first()
        .cloned()
        .unwrap_or_else(|| panic!("no token"));
    assert_eq!(first.0, expected);
    assert!(first.0.is_trivia());
}

#[rstest]
#[case("/** doc **/ f(x)", vec![
    SyntaxKind::T_COMMENT,
    SyntaxKind::T_WHITESPACE,
    SyntaxKind::T_IDENT,
    SyntaxKind::T_LPAREN,
    SyntaxKind::T_IDENT,
    SyntaxKind::T_RPAREN,
])]
#[case("/* ( **/ (x)", vec![
    SyntaxKind::T_COMMENT,
    SyntaxKind::T_WHITESPACE,
    SyntaxKind::T_LPAREN,
    SyntaxKind::T_IDENT,
    SyntaxKind::T_RPAREN,
])]
#[case("/* a */ ) /* b */", vec![
    SyntaxKind::T_COMMENT,
    SyntaxKind::T_WHITESPACE,
    SyntaxKind::T_RPAREN,
    SyntaxKind::T_WHITESPACE,
    SyntaxKind::T_COMMENT,
])]
fn block_comments_end_at_their_first_terminator(
    #[case] source: &str,
    #[case] expected: Vec<SyntaxKind>,
) {
    let kinds: Vec<SyntaxKind> = tokenize(source).iter().map(|(k, _)| *k).collect();
    assert_eq!(kinds, expected);
}

#[rstest]
#[case("/* (")]
#[case("/** ) *")]
fn unterminated_block_comment_is_not_a_comment(#[case] source: &str) {
    let tokens = tokenize(source);
    assert!(tokens.iter().all(|(k, _)| *k != SyntaxKind::T_COMMENT));
    let mut end = 0;
    for (_, span) in &tokens {
        assert_eq!(span.start, end);
        end = span.end;
    }
    assert_eq!(end, source.len());
}

#[rstest]
#[case("?")]
#[case("$")]
fn unknown_character_produces_error(#[case] source: &str) {
    let tokens = tokenize(source);
    assert_eq!(tokens.len(), 1);
    let first = tokens
        .first()
        .cloned()
        .unwrap_or_else(|| panic!("no token"));
    assert_eq!(first.0, SyntaxKind::N_ERROR);
}
