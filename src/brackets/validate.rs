//! Local sanity check for a single bracket occurrence.

use log::debug;
use rowan::{Language, SyntaxElement, SyntaxToken};

use super::{BracketPair, is_token_of_kind};

/// Decide whether `token` is a structural bracket of `pair`.
///
/// An opening bracket is accepted when a closing partner appears among its
/// parent's direct children, scanning backward from the last child and
/// stopping at the bracket itself. A closing bracket mirrors this, scanning
/// forward from the first child. Nested groups are not looked into.
///
/// This is a shallow heuristic rather than a balance check: surplus brackets
/// elsewhere among the same siblings are tolerated.
#[must_use]
pub fn is_valid_bracket<L: Language>(token: &SyntaxToken<L>, pair: &BracketPair<L::Kind>) -> bool {
    let kind = token.kind();
    let Some(parent) = token.parent() else {
        return false;
    };
    let Some(partner) = pair.partner(kind) else {
        return false;
    };
    let found = if kind == pair.left() {
        scan_for_partner(token, parent.last_child_or_token(), partner, |element| {
            element.prev_sibling_or_token()
        })
    } else {
        scan_for_partner(token, parent.first_child_or_token(), partner, |element| {
            element.next_sibling_or_token()
        })
    };
    if !found {
        debug!("rejecting unpaired {kind:?} at {:?}", token.text_range());
    }
    found
}

fn scan_for_partner<L: Language>(
    bracket: &SyntaxToken<L>,
    start: Option<SyntaxElement<L>>,
    partner: L::Kind,
    step: impl Fn(&SyntaxElement<L>) -> Option<SyntaxElement<L>>,
) -> bool {
    let mut cursor = start;
    while let Some(element) = cursor {
        if element.as_token() == Some(bracket) {
            return false;
        }
        if is_token_of_kind(&element, partner) {
            return true;
        }
        cursor = step(&element);
    }
    false
}
