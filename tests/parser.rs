//! Integration tests for the delimiter-tree parser.
//!
//! These tests focus on the CST shape the bracket level computation relies
//! on and on the round-trip property for both well-formed and mid-edit
//! inputs.

use rainbow_brackets::{ParseError, SyntaxElement, SyntaxKind, SyntaxNode, parse};
use rstest::{fixture, rstest};

/// Collect the text of a syntax subtree.
///
/// Uses an explicit stack so deeply nested inputs do not risk recursion
/// overflow.
fn pretty_print(node: &SyntaxNode) -> String {
    let mut out = String::new();
    let mut stack = vec![SyntaxElement::Node(node.clone())];

    while let Some(item) = stack.pop() {
        match item {
            SyntaxElement::Token(t) => out.push_str(t.text()),
            SyntaxElement::Node(n) => {
                let children: Vec<SyntaxElement> = n.children_with_tokens().collect();
                for child in children.into_iter().rev() {
                    stack.push(child);
                }
            }
        }
    }

    out
}

fn max_group_depth(root: &SyntaxNode) -> usize {
    root.descendants()
        .map(|node| node.ancestors().count() - 1)
        .max()
        .unwrap_or(0)
}

#[fixture]
fn simple_prog() -> &'static str {
    "fn main() { print(\"hi\"); }"
}

#[fixture]
fn nested_prog() -> &'static str {
    "let m = [[1, 2], [3, (4 + 5)]];\n"
}

#[fixture]
fn mid_edit_prog() -> &'static str {
    "fn f(a { if (a) ] }"
}

#[rstest]
#[case::simple("fn main() { print(\"hi\"); }")]
#[case::nested("let m = [[1, 2], [3, (4 + 5)]];\n")]
#[case::mid_edit("fn f(a { if (a) ] }")]
#[case::unterminated_string("f(\"(")]
#[case::empty("")]
fn parse_round_trip(#[case] src: &str) {
    let parsed = parse(src);
    assert_eq!(pretty_print(&parsed.syntax()), src);
    assert_eq!(parsed.syntax().kind(), SyntaxKind::N_ROOT);
}

#[rstest]
fn groups_nest_like_brackets(nested_prog: &str) {
    let parsed = parse(nested_prog);
    assert!(parsed.errors().is_empty());
    let root = parsed.syntax();
    let brackets = root
        .descendants()
        .filter(|node| node.kind() == SyntaxKind::N_BRACKET_GROUP)
        .count();
    let parens = root
        .descendants()
        .filter(|node| node.kind() == SyntaxKind::N_PAREN_GROUP)
        .count();
    assert_eq!((brackets, parens), (3, 1));
    assert_eq!(max_group_depth(&root), 3);
}

#[rstest]
fn every_group_starts_with_its_opener(simple_prog: &str) {
    let root = parse(simple_prog).syntax();
    for group in root.descendants().skip(1) {
        let first = group
            .first_token()
            .unwrap_or_else(|| panic!("empty group {group:?}"));
        let expected = match group.kind() {
            SyntaxKind::N_PAREN_GROUP => SyntaxKind::T_LPAREN,
            SyntaxKind::N_BRACE_GROUP => SyntaxKind::T_LBRACE,
            SyntaxKind::N_BRACKET_GROUP => SyntaxKind::T_LBRACKET,
            other => panic!("unexpected node {other:?}"),
        };
        assert_eq!(first.kind(), expected);
    }
}

#[rstest]
fn mid_edit_source_reports_recovery(mid_edit_prog: &str) {
    let parsed = parse(mid_edit_prog);
    let errors = parsed.errors();
    assert!(matches!(
        errors,
        [
            ParseError::UnmatchedClose {
                kind: SyntaxKind::T_RBRACKET,
                ..
            },
            ParseError::Unclosed {
                kind: SyntaxKind::T_LPAREN,
                ..
            },
        ]
    ));
}

/// Ensures that invalid tokens are represented by `N_ERROR` nodes in the CST.
#[rstest]
fn error_token_produces_error_node() {
    let root = parse("?").syntax();
    let has_error = root
        .children_with_tokens()
        .filter_map(|child| match child {
            rowan::NodeOrToken::Node(node) => Some(node),
            rowan::NodeOrToken::Token(_) => None,
        })
        .any(|node| node.kind() == SyntaxKind::N_ERROR);
    assert!(has_error);
}
