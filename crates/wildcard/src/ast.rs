// local imports
use crate::separators::Separators;

/// A node of a parsed glob pattern.
///
/// A [`Node::Sequence`] never directly contains another `Sequence`, nested groups are kept
/// as [`Node::Alternatives`] whose branches are plain node lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text matched verbatim. Consecutive plain runes are accumulated into one node.
    Literal(String),
    /// `?`, exactly one rune which is not a separator.
    Single(Separators),
    /// `*`, any run of runes without separators.
    Any(Separators),
    /// `**`, any run of runes including separators.
    Super,
    /// `[a-z]` or `[!a-z]`.
    Range { lo: char, hi: char, negated: bool },
    /// `[abc]` or `[!abc]`.
    List { runes: Vec<char>, negated: bool },
    /// `{a,b}`, each branch is a sequence of nodes.
    Alternatives(Vec<Vec<Node>>),
    /// Classes that must all hold for the same rune, as in `[!a-cx]`.
    Conjunction(Vec<Node>),
    Sequence(Vec<Node>),
}

impl Node {
    /// Returns true for `?`, `*` and `**`.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Single(_) | Self::Any(_) | Self::Super)
    }
}
