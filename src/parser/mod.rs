//! Delimiter-tree parser producing a rowan CST.
//!
//! The demo language has no grammar beyond its brackets: the parser
//! tokenises the input and opens one group node per bracketed region. The
//! resulting tree is lossless, so printing every token reproduces the input.
//!
//! Recovery keeps the tree usable while the source is mid-edit:
//! - a closing bracket with no open partner is wrapped in an `N_ERROR` node;
//! - a closing bracket that matches an outer group closes the groups opened
//!   inside it first;
//! - groups still open at the end of input are closed there.
//!
//! Each recovery records a [`ParseError`].

use rowan::GreenNode;

use crate::{Span, SyntaxKind, SyntaxNode, tokenize_with_trivia};

mod cst_builder;

use cst_builder::build_green_tree;

/// Recoverable problems found while building the tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A closing bracket without an open partner.
    #[error("unmatched closing {kind:?} at {span:?}")]
    UnmatchedClose { kind: SyntaxKind, span: Span },
    /// An opening bracket never closed by its partner.
    #[error("unclosed {kind:?} opened at {span:?}")]
    Unclosed { kind: SyntaxKind, span: Span },
}

impl ParseError {
    /// Span of the offending bracket.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::UnmatchedClose { span, .. } | Self::Unclosed { span, .. } => span,
        }
    }
}

/// Result of a parse operation.
#[derive(Debug, Clone)]
pub struct Parsed {
    green: GreenNode,
    errors: Vec<ParseError>,
}

impl Parsed {
    /// Access the `rowan` green tree.
    #[must_use]
    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    /// A fresh red root over the green tree.
    #[must_use]
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    /// Recovery errors in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }
}

/// Parse the provided source string.
///
/// # Examples
///
/// ```
/// use rainbow_brackets::{SyntaxKind, parse};
///
/// let parsed = parse("f(x) }");
/// assert_eq!(parsed.syntax().text().to_string(), "f(x) }");
/// assert_eq!(parsed.errors().len(), 1);
/// assert_eq!(parsed.syntax().kind(), SyntaxKind::N_ROOT);
/// ```
#[must_use]
pub fn parse(src: &str) -> Parsed {
    let tokens = tokenize_with_trivia(src);
    let (green, errors) = build_green_tree(&tokens, src);
    Parsed { green, errors }
}
