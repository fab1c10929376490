//! Bracket pair declarations and per-language pair tables.

use std::fmt::Debug;

/// An ordered `(left, right)` association of token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BracketPair<K> {
    left: K,
    right: K,
}

impl<K: Copy + Eq> BracketPair<K> {
    /// Declare a pair from its opening and closing kinds.
    #[must_use]
    pub const fn new(left: K, right: K) -> Self {
        Self { left, right }
    }

    /// The opening kind.
    #[must_use]
    pub fn left(&self) -> K {
        self.left
    }

    /// The closing kind.
    #[must_use]
    pub fn right(&self) -> K {
        self.right
    }

    /// Whether `kind` is either side of this pair.
    #[must_use]
    pub fn contains(&self, kind: K) -> bool {
        self.left == kind || self.right == kind
    }

    /// The kind on the opposite side from `kind`, or `None` when `kind` is
    /// not part of this pair.
    #[must_use]
    pub fn partner(&self, kind: K) -> Option<K> {
        if kind == self.left {
            Some(self.right)
        } else if kind == self.right {
            Some(self.left)
        } else {
            None
        }
    }
}

/// Errors raised when a bracket pair table is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PairTableError<K: Debug> {
    /// A pair uses the same kind for both sides.
    #[error("bracket pair uses {0:?} for both sides")]
    SameKind(K),
    /// A kind is declared by more than one pair.
    #[error("{0:?} is declared by more than one bracket pair")]
    Duplicate(K),
}

/// The bracket pairs declared by one language.
///
/// Lookup accepts either side of a pair. The table is plain data passed into
/// every query; nothing here is global.
///
/// # Examples
///
/// ```
/// use rainbow_brackets::brackets::{BracketPair, BracketPairs};
///
/// let pairs = BracketPairs::new([BracketPair::new('(', ')'), BracketPair::new('<', '>')])?;
/// assert_eq!(pairs.find('>').map(|p| p.left()), Some('<'));
/// assert!(pairs.find('x').is_none());
/// # Ok::<(), rainbow_brackets::brackets::PairTableError<char>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketPairs<K> {
    pairs: Vec<BracketPair<K>>,
}

impl<K: Copy + Eq + Debug> BracketPairs<K> {
    /// Build a table, rejecting pairs whose sides coincide and kinds that
    /// appear in more than one pair.
    ///
    /// # Errors
    ///
    /// Returns [`PairTableError`] describing the first inconsistency found.
    pub fn new(pairs: impl IntoIterator<Item = BracketPair<K>>) -> Result<Self, PairTableError<K>> {
        let pairs: Vec<_> = pairs.into_iter().collect();
        validate_pairs(&pairs)?;
        Ok(Self { pairs })
    }

    /// Build a table from pairs known to be consistent at compile time.
    ///
    /// Consistency is only checked in debug builds.
    #[must_use]
    pub fn from_static<const N: usize>(pairs: [BracketPair<K>; N]) -> Self {
        debug_assert!(
            validate_pairs(&pairs).is_ok(),
            "inconsistent static bracket table: {pairs:?}"
        );
        Self {
            pairs: pairs.to_vec(),
        }
    }

    /// The first pair declaring `kind` on either side.
    #[must_use]
    pub fn find(&self, kind: K) -> Option<&BracketPair<K>> {
        self.pairs.iter().find(|pair| pair.contains(kind))
    }

    /// Iterate over the declared pairs in declaration order.
    ///
    /// ```
    /// use rainbow_brackets::{BracketLanguage, SyntaxKind};
    ///
    /// let pairs = BracketLanguage::bracket_pairs();
    /// let openers: Vec<SyntaxKind> = pairs.iter().map(|p| p.left()).collect();
    /// assert_eq!(openers, [SyntaxKind::T_LPAREN, SyntaxKind::T_LBRACE, SyntaxKind::T_LBRACKET]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = &BracketPair<K>> {
        self.pairs.iter()
    }

    /// Number of declared pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the table declares no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn validate_pairs<K: Copy + Eq + Debug>(pairs: &[BracketPair<K>]) -> Result<(), PairTableError<K>> {
    let mut seen: Vec<K> = Vec::with_capacity(pairs.len() * 2);
    for pair in pairs {
        if pair.left == pair.right {
            return Err(PairTableError::SameKind(pair.left));
        }
        for kind in [pair.left, pair.right] {
            if seen.contains(&kind) {
                return Err(PairTableError::Duplicate(kind));
            }
            seen.push(kind);
        }
    }
    Ok(())
}
