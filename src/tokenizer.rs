//! Lexical analysis for the bracket demo language.
//!
//! This module exposes `tokenize_with_trivia` and `tokenize_without_trivia`
//! functions which convert raw source text into a sequence of
//! `(SyntaxKind, Span)` pairs. It uses the `logos` crate to recognise tokens
//! so that the CST can mirror the input exactly. Bracket characters inside
//! string, character and comment tokens stay part of those tokens.

use logos::Logos;
use phf::phf_map;

use crate::SyntaxKind;

/// Byte range for a token within the source.
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,
    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/", priority = 2)]
    #[regex(r"//[^\n]*")]
    Comment,
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    #[regex(r"0[xX][0-9a-fA-F]+|[0-9]+(?:\.[0-9]+)?")]
    Number,
    #[regex(r#""([^"\\]|\\.)*""#)]
    String,
    #[regex(r"'([^'\\]|\\.)'")]
    Char,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semi,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token("=")]
    Eq,
    #[token("->")]
    Arrow,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("!")]
    Bang,
    #[token("|")]
    Pipe,
    #[token("&")]
    Amp,
}

/// Maps identifier strings to their keyword `SyntaxKind`.
static KEYWORDS: phf::Map<&'static str, SyntaxKind> = phf_map! {
    "else" => SyntaxKind::K_ELSE,
    "false" => SyntaxKind::K_FALSE,
    "fn" => SyntaxKind::K_FN,
    "if" => SyntaxKind::K_IF,
    "let" => SyntaxKind::K_LET,
    "return" => SyntaxKind::K_RETURN,
    "true" => SyntaxKind::K_TRUE,
    "while" => SyntaxKind::K_WHILE,
};

fn keyword_kind(ident: &str) -> Option<SyntaxKind> {
    KEYWORDS.get(ident).copied()
}

#[must_use]
fn tokenize_impl(src: &str) -> Vec<(SyntaxKind, Span)> {
    let mut lexer = Token::lexer(src);
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "rough capacity estimate"
    )]
    let estimated_tokens = src.len() / 3;
    let mut out = Vec::with_capacity(estimated_tokens);
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let Ok(token) = result else {
            out.push((SyntaxKind::N_ERROR, span));
            continue;
        };
        let kind = match token {
            Token::Whitespace => SyntaxKind::T_WHITESPACE,
            Token::Comment => SyntaxKind::T_COMMENT,
            Token::Ident => keyword_kind(lexer.slice()).unwrap_or(SyntaxKind::T_IDENT),
            Token::Number => SyntaxKind::T_NUMBER,
            Token::String => SyntaxKind::T_STRING,
            Token::Char => SyntaxKind::T_CHAR,
            Token::LParen => SyntaxKind::T_LPAREN,
            Token::RParen => SyntaxKind::T_RPAREN,
            Token::LBrace => SyntaxKind::T_LBRACE,
            Token::RBrace => SyntaxKind::T_RBRACE,
            Token::LBracket => SyntaxKind::T_LBRACKET,
            Token::RBracket => SyntaxKind::T_RBRACKET,
            Token::Semi => SyntaxKind::T_SEMI,
            Token::Comma => SyntaxKind::T_COMMA,
            Token::Dot => SyntaxKind::T_DOT,
            Token::Colon => SyntaxKind::T_COLON,
            Token::Eq => SyntaxKind::T_EQ,
            Token::Arrow => SyntaxKind::T_ARROW,
            Token::Plus => SyntaxKind::T_PLUS,
            Token::Minus => SyntaxKind::T_MINUS,
            Token::Star => SyntaxKind::T_STAR,
            Token::Slash => SyntaxKind::T_SLASH,
            Token::Lt => SyntaxKind::T_LT,
            Token::Gt => SyntaxKind::T_GT,
            Token::Bang => SyntaxKind::T_BANG,
            Token::Pipe => SyntaxKind::T_PIPE,
            Token::Amp => SyntaxKind::T_AMP,
        };
        out.push((kind, span));
    }
    out
}

/// Tokenise the source, excluding whitespace and comments.
///
/// # Examples
///
/// ```rust
/// use rainbow_brackets::{tokenize_without_trivia, SyntaxKind};
///
/// let tokens = tokenize_without_trivia("f( x ) // done");
/// assert!(!tokens.iter().any(|(k, _)| k.is_trivia()));
/// assert_eq!(tokens.len(), 4);
/// ```
#[must_use]
pub fn tokenize_without_trivia(src: &str) -> Vec<(SyntaxKind, Span)> {
    tokenize_impl(src)
        .into_iter()
        .filter(|(k, _)| !k.is_trivia())
        .collect()
}

/// Tokenise the provided source, retaining whitespace and comment tokens.
///
/// # Examples
///
/// ```rust
/// use rainbow_brackets::{tokenize_with_trivia, SyntaxKind};
///
/// let tokens = tokenize_with_trivia("fn main() {}");
/// assert_eq!(tokens.len(), 8);
/// assert_eq!(tokens.first().map(|t| t.0), Some(SyntaxKind::K_FN));
/// ```
#[must_use]
pub fn tokenize_with_trivia(src: &str) -> Vec<(SyntaxKind, Span)> {
    tokenize_impl(src)
}
