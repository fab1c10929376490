//! Library crate for rainbow bracket levels.
//!
//! Computes the nesting level of every structural bracket in a `rowan`
//! syntax tree from tree shape and token kinds alone. A small demo language
//! with its lexer and delimiter-tree parser is included to produce such
//! trees.

#![forbid(unsafe_code)]

pub mod brackets;
pub mod language;
pub mod parser;
pub mod tokenizer;

// Only expose test utilities to tests and opt-in consumers.
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_util;

pub use brackets::{BracketPair, BracketPairs, classify};
pub use language::{BracketLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
pub use parser::{ParseError, Parsed, parse};
pub use tokenizer::{Span, tokenize_with_trivia, tokenize_without_trivia};
