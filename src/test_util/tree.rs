//! Hand-built syntax trees for shapes the parser never produces.

use rowan::{GreenNodeBuilder, Language};

use crate::{BracketLanguage, SyntaxKind, SyntaxNode, SyntaxToken};

/// Description of a subtree to build.
#[derive(Debug, Clone)]
pub enum Shape {
    /// A token of the given kind.
    Token(SyntaxKind),
    /// A node of the given kind with children in order.
    Node(SyntaxKind, Vec<Shape>),
}

/// A token leaf.
#[must_use]
pub fn tok(kind: SyntaxKind) -> Shape {
    Shape::Token(kind)
}

/// A node with the given children.
#[must_use]
pub fn node(kind: SyntaxKind, children: impl IntoIterator<Item = Shape>) -> Shape {
    Shape::Node(kind, children.into_iter().collect())
}

/// Build a red tree whose `N_ROOT` node holds `children`.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "test-support")]
/// # {
/// use rainbow_brackets::SyntaxKind::{N_PAREN_GROUP, T_LPAREN, T_RPAREN};
/// use rainbow_brackets::test_util::{build_tree, node, tok};
///
/// let root = build_tree([node(N_PAREN_GROUP, [tok(T_LPAREN), tok(T_RPAREN)])]);
/// assert_eq!(root.text().to_string(), "()");
/// # }
/// ```
#[must_use]
pub fn build_tree(children: impl IntoIterator<Item = Shape>) -> SyntaxNode {
    let mut builder = GreenNodeBuilder::new();
    push_shape(&mut builder, &node(SyntaxKind::N_ROOT, children));
    SyntaxNode::new_root(builder.finish())
}

fn push_shape(builder: &mut GreenNodeBuilder<'_>, shape: &Shape) {
    match shape {
        Shape::Token(kind) => {
            builder.token(BracketLanguage::kind_to_raw(*kind), sample_text(*kind));
        }
        Shape::Node(kind, children) => {
            builder.start_node(BracketLanguage::kind_to_raw(*kind));
            for child in children {
                push_shape(builder, child);
            }
            builder.finish_node();
        }
    }
}

/// Representative source text for a token kind.
#[must_use]
pub fn sample_text(kind: SyntaxKind) -> &'static str {
    match kind {
        SyntaxKind::T_LPAREN => "(",
        SyntaxKind::T_RPAREN => ")",
        SyntaxKind::T_LBRACE => "{",
        SyntaxKind::T_RBRACE => "}",
        SyntaxKind::T_LBRACKET => "[",
        SyntaxKind::T_RBRACKET => "]",
        SyntaxKind::T_LT => "<",
        SyntaxKind::T_GT => ">",
        SyntaxKind::T_COMMA => ",",
        SyntaxKind::T_WHITESPACE => " ",
        SyntaxKind::T_NUMBER => "1",
        _ => "x",
    }
}

/// Every token of `kind` under `root`, in document order.
#[must_use]
pub fn tokens_of_kind(root: &SyntaxNode, kind: SyntaxKind) -> Vec<SyntaxToken> {
    root.descendants_with_tokens()
        .filter_map(rowan::NodeOrToken::into_token)
        .filter(|token| token.kind() == kind)
        .collect()
}

/// The `index`-th token of `kind` under `root`.
///
/// # Panics
///
/// Panics if there are not enough tokens of that kind.
#[must_use]
#[track_caller]
pub fn nth_token(root: &SyntaxNode, kind: SyntaxKind, index: usize) -> SyntaxToken {
    tokens_of_kind(root, kind)
        .into_iter()
        .nth(index)
        .unwrap_or_else(|| panic!("no {kind:?} token at index {index}"))
}
