//! Direct containment of a bracket pair within one node.

use rowan::{Language, NodeOrToken, SyntaxElement, SyntaxNode};

use super::{BracketPair, is_token_of_kind};

/// Whether `element` directly contains both sides of `pair`.
///
/// Tokens never contain a pair. For nodes see [`node_contains_pair`].
#[must_use]
pub fn directly_contains_pair<L: Language>(
    element: &SyntaxElement<L>,
    pair: &BracketPair<L::Kind>,
) -> bool {
    match element {
        NodeOrToken::Node(node) => node_contains_pair(node, pair),
        NodeOrToken::Token(_) => false,
    }
}

/// Whether `node` has an opening and a closing bracket of `pair` among its
/// direct children.
///
/// Two cursors walk inward from the first and last child. Each cursor holds
/// once it sits on its bracket while the other keeps moving. The scan ends
/// when both have matched, when the cursors meet, or right after the step in
/// which they were adjacent. Children of nested nodes are never visited, so
/// the cost is bounded by the direct child count.
#[must_use]
pub fn node_contains_pair<L: Language>(node: &SyntaxNode<L>, pair: &BracketPair<L::Kind>) -> bool {
    let mut left = node.first_child_or_token();
    let mut right = node.last_child_or_token();
    let mut found_left = false;
    let mut found_right = false;

    while left != right && !(found_left && found_right) {
        let last_step = left
            .as_ref()
            .is_none_or(|element| element.next_sibling_or_token() == right);

        if left
            .as_ref()
            .is_some_and(|element| is_token_of_kind(element, pair.left()))
        {
            found_left = true;
        } else {
            left = left.and_then(|element| element.next_sibling_or_token());
        }

        if right
            .as_ref()
            .is_some_and(|element| is_token_of_kind(element, pair.right()))
        {
            found_right = true;
        } else {
            right = right.and_then(|element| element.prev_sibling_or_token());
        }

        if last_step {
            break;
        }
    }

    found_left && found_right
}
