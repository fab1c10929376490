//! Rainbow bracket nesting levels.
//!
//! Given a syntax tree and a language's bracket pairs, [`classify`] assigns
//! each structural bracket token the number of enclosing nodes that directly
//! contain a pair of the same kind. Only tree shape and token kinds are
//! consulted; source text is never rescanned, so brackets inside strings or
//! comments are invisible as long as the lexer keeps them inside those tokens.
//!
//! Queries are read-only and keep no state between calls. Several queries may
//! run against the same tree snapshot concurrently.
//!
//! ```
//! use rainbow_brackets::{BracketLanguage, SyntaxKind, brackets::classify, parse};
//!
//! let parsed = parse("((x))");
//! let pairs = BracketLanguage::bracket_pairs();
//! let levels: Vec<Option<usize>> = parsed
//!     .syntax()
//!     .descendants_with_tokens()
//!     .filter(|e| e.kind() == SyntaxKind::T_LPAREN)
//!     .map(|e| classify(&e, &pairs))
//!     .collect();
//! assert_eq!(levels, vec![Some(0), Some(1)]);
//! ```

use log::trace;
use rowan::{Language, NodeOrToken, SyntaxElement, SyntaxToken};

mod containment;
mod highlight;
mod level;
mod pair;
mod validate;

pub use containment::{directly_contains_pair, node_contains_pair};
pub use highlight::{BracketLevel, bracket_levels};
pub use level::bracket_level;
pub use pair::{BracketPair, BracketPairs, PairTableError};
pub use validate::is_valid_bracket;

/// Nesting level of `element`, or `None` when it is not a structural bracket.
///
/// Nodes, tokens whose kind no pair in `pairs` declares, and brackets the
/// validator rejects all yield `None`.
#[must_use]
pub fn classify<L: Language>(
    element: &SyntaxElement<L>,
    pairs: &BracketPairs<L::Kind>,
) -> Option<usize> {
    match element {
        NodeOrToken::Token(token) => classify_token(token, pairs),
        NodeOrToken::Node(_) => None,
    }
}

/// [`classify`] for a token already known to be a leaf.
#[must_use]
pub fn classify_token<L: Language>(
    token: &SyntaxToken<L>,
    pairs: &BracketPairs<L::Kind>,
) -> Option<usize> {
    let pair = pairs.find(token.kind())?;
    if !is_valid_bracket(token, pair) {
        return None;
    }
    let level = bracket_level(token, pair);
    trace!("{:?} at {:?} -> level {level}", token.kind(), token.text_range());
    Some(level)
}

fn is_token_of_kind<L: Language>(element: &SyntaxElement<L>, kind: L::Kind) -> bool {
    element.as_token().is_some_and(|token| token.kind() == kind)
}
