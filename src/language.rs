//! `rowan` integration and syntax kinds for the bracket demo language.
//!
//! This module defines the `SyntaxKind` enum covering every token and group
//! node produced by the [`crate::parser`]. The enumeration is used by `rowan`
//! to tag syntax tree elements. The `BracketLanguage` newtype implements
//! `rowan::Language` using conversions provided by `num_derive`, and carries
//! the language's bracket-pair table.

use num_derive::{FromPrimitive as FromPrimitiveDerive, ToPrimitive as ToPrimitiveDerive};
use num_traits::{FromPrimitive, ToPrimitive};
use rowan::Language as RowanLanguage;
use rowan::SyntaxKind as RowanSyntaxKind;

use crate::brackets::{BracketPair, BracketPairs};

/// Every possible token or node in the demo language syntax tree.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitiveDerive, ToPrimitiveDerive,
)]
#[repr(u16)]
#[expect(non_camel_case_types, reason = "kind names mirror token categories")]
pub enum SyntaxKind {
    // Tokens
    T_COMMENT,
    T_WHITESPACE,
    T_IDENT,
    T_STRING,
    T_CHAR,
    T_NUMBER,
    T_LPAREN,
    T_RPAREN,
    T_LBRACE,
    T_RBRACE,
    T_LBRACKET,
    T_RBRACKET,
    T_SEMI,
    T_COMMA,
    T_DOT,
    T_COLON,
    T_EQ,
    T_ARROW,
    T_PLUS,
    T_MINUS,
    T_STAR,
    T_SLASH,
    T_LT,
    T_GT,
    T_BANG,
    T_PIPE,
    T_AMP,
    // Keywords
    K_ELSE,
    K_FALSE,
    K_FN,
    K_IF,
    K_LET,
    K_RETURN,
    K_TRUE,
    K_WHILE,
    // Nodes
    N_PAREN_GROUP,
    N_BRACE_GROUP,
    N_BRACKET_GROUP,
    N_ROOT,
    // Special
    N_ERROR,
}

impl SyntaxKind {
    /// Whether this kind is whitespace or a comment.
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::T_WHITESPACE | Self::T_COMMENT)
    }

    /// The group node kind opened by this token, if it is an opening bracket.
    #[must_use]
    pub fn group_kind(self) -> Option<Self> {
        match self {
            Self::T_LPAREN => Some(Self::N_PAREN_GROUP),
            Self::T_LBRACE => Some(Self::N_BRACE_GROUP),
            Self::T_LBRACKET => Some(Self::N_BRACKET_GROUP),
            _ => None,
        }
    }
}

/// Newtype wrapper allowing `rowan` to store `SyntaxKind` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BracketLanguage;

impl BracketLanguage {
    /// Bracket pairs declared by the demo language.
    ///
    /// `<` and `>` are comparison operators here and are deliberately absent.
    /// The table skips validation in release builds; the unit test
    /// `language_table_passes_validation` keeps it consistent.
    ///
    /// # Examples
    ///
    /// ```
    /// use rainbow_brackets::{BracketLanguage, SyntaxKind};
    ///
    /// let pairs = BracketLanguage::bracket_pairs();
    /// assert!(pairs.find(SyntaxKind::T_RBRACE).is_some());
    /// assert!(pairs.find(SyntaxKind::T_LT).is_none());
    /// ```
    #[must_use]
    pub fn bracket_pairs() -> BracketPairs<SyntaxKind> {
        BracketPairs::from_static([
            BracketPair::new(SyntaxKind::T_LPAREN, SyntaxKind::T_RPAREN),
            BracketPair::new(SyntaxKind::T_LBRACE, SyntaxKind::T_RBRACE),
            BracketPair::new(SyntaxKind::T_LBRACKET, SyntaxKind::T_RBRACKET),
        ])
    }
}

impl RowanLanguage for BracketLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: RowanSyntaxKind) -> Self::Kind {
        SyntaxKind::from_u16(raw.0).unwrap_or(SyntaxKind::N_ERROR)
    }

    fn kind_to_raw(kind: Self::Kind) -> RowanSyntaxKind {
        RowanSyntaxKind(
            kind.to_u16()
                .unwrap_or_else(|| unreachable!("all SyntaxKind variants map to u16")),
        )
    }
}

/// Red tree node of the demo language.
pub type SyntaxNode = rowan::SyntaxNode<BracketLanguage>;
/// Red tree token of the demo language.
pub type SyntaxToken = rowan::SyntaxToken<BracketLanguage>;
/// Node or token of the demo language.
pub type SyntaxElement = rowan::SyntaxElement<BracketLanguage>;
