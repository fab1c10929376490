//! Nesting level accumulation along the ancestor chain.

use rowan::{Language, SyntaxToken};

use super::{BracketPair, containment::node_contains_pair};

/// Nesting level of a bracket already accepted by
/// [`super::is_valid_bracket`].
///
/// Every ancestor from the bracket's parent upward that directly contains
/// `pair` counts once. The root node ends the walk and never counts. The
/// bracket's own group is one of the counted ancestors, so the level is the
/// count minus one: the outermost pair is level 0. A pair that sits directly
/// under the root has no counted ancestor and is also level 0.
#[must_use]
pub fn bracket_level<L: Language>(token: &SyntaxToken<L>, pair: &BracketPair<L::Kind>) -> usize {
    let mut count = 0_usize;
    let mut current = token.parent();
    while let Some(node) = current {
        let parent = node.parent();
        if parent.is_none() {
            break;
        }
        if node_contains_pair(&node, pair) {
            count += 1;
        }
        current = parent;
    }
    count.saturating_sub(1)
}
