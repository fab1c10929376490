//! Build a `rowan` green tree of nested bracket groups.

use log::warn;
use rowan::{GreenNode, GreenNodeBuilder, Language};

use crate::{BracketLanguage, Span, SyntaxKind, brackets::BracketPairs};

use super::ParseError;

/// A group node that has been started but not finished.
#[derive(Debug)]
struct OpenGroup {
    opener: SyntaxKind,
    closer: SyntaxKind,
    span: Span,
}

struct TreeSink {
    builder: GreenNodeBuilder<'static>,
    open: Vec<OpenGroup>,
    errors: Vec<ParseError>,
}

impl TreeSink {
    fn new() -> Self {
        let mut builder = GreenNodeBuilder::new();
        builder.start_node(BracketLanguage::kind_to_raw(SyntaxKind::N_ROOT));
        Self {
            builder,
            open: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn token(&mut self, kind: SyntaxKind, text: &str) {
        self.builder.token(BracketLanguage::kind_to_raw(kind), text);
    }

    fn open_group(
        &mut self,
        group: SyntaxKind,
        opener: SyntaxKind,
        closer: SyntaxKind,
        span: Span,
        text: &str,
    ) {
        self.builder.start_node(BracketLanguage::kind_to_raw(group));
        self.token(opener, text);
        self.open.push(OpenGroup {
            opener,
            closer,
            span,
        });
    }

    /// Finish the innermost open group without a closing token.
    fn abandon_group(&mut self) {
        if let Some(group) = self.open.pop() {
            warn!("unclosed {:?} at {:?}", group.opener, group.span);
            self.errors.push(ParseError::Unclosed {
                kind: group.opener,
                span: group.span,
            });
            self.builder.finish_node();
        }
    }

    fn close_group(&mut self, closer: SyntaxKind, span: Span, text: &str) {
        let Some(depth) = self.open.iter().rposition(|group| group.closer == closer) else {
            warn!("unmatched {closer:?} at {span:?}");
            self.errors.push(ParseError::UnmatchedClose {
                kind: closer,
                span,
            });
            self.error_wrapped(closer, text);
            return;
        };
        while self.open.len() > depth + 1 {
            self.abandon_group();
        }
        self.token(closer, text);
        self.open.pop();
        self.builder.finish_node();
    }

    fn error_wrapped(&mut self, kind: SyntaxKind, text: &str) {
        self.builder
            .start_node(BracketLanguage::kind_to_raw(SyntaxKind::N_ERROR));
        self.token(kind, text);
        self.builder.finish_node();
    }

    fn finish(mut self) -> (GreenNode, Vec<ParseError>) {
        while !self.open.is_empty() {
            self.abandon_group();
        }
        self.builder.finish_node();
        (self.builder.finish(), self.errors)
    }
}

fn validate_token_span(span: &Span, src_len: usize) -> bool {
    if span.start <= span.end && span.end <= src_len {
        true
    } else {
        warn!("token span {span:?} out of bounds for source of length {src_len}");
        false
    }
}

/// Construct the CST from the token stream.
///
/// Brackets are recognised through the language's pair table, so the tree
/// groups exactly the kinds that bracket levels are later computed for.
pub(super) fn build_green_tree(
    tokens: &[(SyntaxKind, Span)],
    src: &str,
) -> (GreenNode, Vec<ParseError>) {
    let pairs: BracketPairs<SyntaxKind> = BracketLanguage::bracket_pairs();
    let mut sink = TreeSink::new();

    for &(kind, ref span) in tokens {
        if !validate_token_span(span, src.len()) {
            continue;
        }
        let Some(text) = src.get(span.clone()) else {
            continue;
        };
        match (pairs.find(kind), kind.group_kind()) {
            (Some(pair), Some(group)) if pair.left() == kind => {
                sink.open_group(group, kind, pair.right(), span.clone(), text);
            }
            (Some(pair), _) if pair.right() == kind => {
                sink.close_group(kind, span.clone(), text);
            }
            _ if kind == SyntaxKind::N_ERROR => sink.error_wrapped(kind, text),
            _ => sink.token(kind, text),
        }
    }

    sink.finish()
}
