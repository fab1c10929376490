//! Helpers for building syntax trees and reading bracket levels in tests.
//!
//! Parsed sources cover the common cases; [`build_tree`] constructs shapes a
//! live editor may hand over but the parser never emits, such as several
//! pairs sharing one node or brackets sitting directly under the root.

mod tree;

pub use tree::{Shape, build_tree, node, nth_token, sample_text, tok, tokens_of_kind};

use crate::{BracketLanguage, brackets::classify, parse};

/// Parse `src` and classify every token, keeping those with a bracket kind.
///
/// Each entry is the bracket's text and its level, in document order.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "test-support")]
/// # {
/// use rainbow_brackets::test_util::bracket_levels_of;
///
/// assert_eq!(
///     bracket_levels_of("(x)"),
///     vec![("(".to_string(), Some(0)), (")".to_string(), Some(0))]
/// );
/// # }
/// ```
#[must_use]
pub fn bracket_levels_of(src: &str) -> Vec<(String, Option<usize>)> {
    let pairs = BracketLanguage::bracket_pairs();
    parse(src)
        .syntax()
        .descendants_with_tokens()
        .filter(|element| pairs.find(element.kind()).is_some())
        .map(|element| {
            let text = element
                .as_token()
                .map(|token| token.text().to_string())
                .unwrap_or_default();
            (text, classify(&element, &pairs))
        })
        .collect()
}

/// Levels only, for sources where every bracket text is obvious.
#[must_use]
pub fn levels_only(src: &str) -> Vec<Option<usize>> {
    bracket_levels_of(src)
        .into_iter()
        .map(|(_, level)| level)
        .collect()
}
