//! Document-wide bracket level collection.
//!
//! Hosts usually colour every bracket in a file at once. [`bracket_levels`]
//! visits each token of a tree in document order and keeps the ones that
//! [`super::classify`] assigns a level to.

use rowan::{Language, NodeOrToken, SyntaxNode, TextRange};

use super::{BracketPairs, classify_token};

/// A bracket token together with its nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BracketLevel<K> {
    /// Source range of the bracket token.
    pub range: TextRange,
    /// Token kind of the bracket.
    pub kind: K,
    /// Nesting level, 0 for the outermost pair.
    pub level: usize,
}

/// Classify every bracket token under `root`.
///
/// Tokens that are not brackets of `pairs`, and brackets rejected as
/// unpaired, are skipped.
///
/// # Examples
///
/// ```
/// use rainbow_brackets::{BracketLanguage, brackets::bracket_levels, parse};
///
/// let parsed = parse("f(a[0])");
/// let levels: Vec<usize> = bracket_levels(&parsed.syntax(), &BracketLanguage::bracket_pairs())
///     .iter()
///     .map(|b| b.level)
///     .collect();
/// assert_eq!(levels, vec![0, 0, 0, 0]);
/// ```
#[must_use]
pub fn bracket_levels<L: Language>(
    root: &SyntaxNode<L>,
    pairs: &BracketPairs<L::Kind>,
) -> Vec<BracketLevel<L::Kind>> {
    root.descendants_with_tokens()
        .filter_map(|element| match element {
            NodeOrToken::Token(token) => classify_token(&token, pairs).map(|level| BracketLevel {
                range: token.text_range(),
                kind: token.kind(),
                level,
            }),
            NodeOrToken::Node(_) => None,
        })
        .collect()
}
