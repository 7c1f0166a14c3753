// std imports
use std::fmt;

// local imports
use crate::{segments::Segments, separators::Separators};

// private modules
mod btree;
mod class;
mod combinators;
mod text;
mod wild;

// public uses
pub use btree::BTree;
pub use class::{List, Range};
pub use combinators::{AnyOf, EveryOf};
pub use text::{Contains, Literal, Nothing, Prefix, PrefixSuffix, Suffix};
pub use wild::{Any, MinMax, Single, Super};

// ---

/// The matching protocol shared by every node of a compiled matcher tree.
///
/// Offsets are byte offsets into the text passed to the call. Lengths reported by
/// [`fixed_len`](Match::fixed_len) are counted in runes, so they are lower bounds for byte lengths.
pub trait Match: fmt::Display {
    /// Tests whether the whole `text` matches.
    fn matches(&self, text: &str) -> bool;

    /// Returns the number of runes every match consumes, or `None` if it varies.
    fn fixed_len(&self) -> Option<usize>;

    /// Finds the earliest offset at which a match may start and pushes every offset at which
    /// such a match may end into `segments`, sorted ascending and free of duplicates.
    ///
    /// `segments` must be empty on entry and is left empty when `None` is returned.
    fn index_into(&self, text: &str, segments: &mut Segments) -> Option<usize>;

    /// Same as [`index_into`](Match::index_into) but with a freshly allocated result.
    fn index(&self, text: &str) -> Option<Index> {
        let mut ends = Segments::new();
        let start = self.index_into(text, &mut ends)?;
        Some(Index { start, ends })
    }
}

/// Earliest match position reported by [`Match::index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    pub start: usize,
    pub ends: Segments,
}

// ---

/// A compiled glob matcher.
///
/// The set of node kinds is closed, dispatch happens by matching on the variant.
/// Matchers are immutable after construction and can be shared between threads freely.
#[derive(Debug, Clone)]
pub enum Matcher {
    Nothing(Nothing),
    Literal(Literal),
    Single(Single),
    Any(Any),
    Super(Super),
    MinMax(MinMax),
    Range(Range),
    List(List),
    Prefix(Prefix),
    Suffix(Suffix),
    PrefixSuffix(PrefixSuffix),
    Contains(Contains),
    AnyOf(AnyOf),
    EveryOf(EveryOf),
    BTree(BTree),
}

macro_rules! dispatch {
    ($self:expr, $m:ident => $body:expr) => {
        match $self {
            Matcher::Nothing($m) => $body,
            Matcher::Literal($m) => $body,
            Matcher::Single($m) => $body,
            Matcher::Any($m) => $body,
            Matcher::Super($m) => $body,
            Matcher::MinMax($m) => $body,
            Matcher::Range($m) => $body,
            Matcher::List($m) => $body,
            Matcher::Prefix($m) => $body,
            Matcher::Suffix($m) => $body,
            Matcher::PrefixSuffix($m) => $body,
            Matcher::Contains($m) => $body,
            Matcher::AnyOf($m) => $body,
            Matcher::EveryOf($m) => $body,
            Matcher::BTree($m) => $body,
        }
    };
}

impl Match for Matcher {
    #[inline]
    fn matches(&self, text: &str) -> bool {
        dispatch!(self, m => m.matches(text))
    }

    #[inline]
    fn fixed_len(&self) -> Option<usize> {
        dispatch!(self, m => m.fixed_len())
    }

    #[inline]
    fn index_into(&self, text: &str, segments: &mut Segments) -> Option<usize> {
        dispatch!(self, m => m.index_into(text, segments))
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, m => m.fmt(f))
    }
}

macro_rules! impl_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Matcher {
                #[inline]
                fn from(m: $variant) -> Self {
                    Self::$variant(m)
                }
            }
        )*
    };
}

impl_from!(
    Nothing,
    Literal,
    Single,
    Any,
    Super,
    MinMax,
    Range,
    List,
    Prefix,
    Suffix,
    PrefixSuffix,
    Contains,
    AnyOf,
    EveryOf,
    BTree,
);

// ---

/// Returns the only rune of `text`, if it consists of exactly one.
#[inline]
fn single_rune(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

/// Indexes the first rune satisfying `accept`, as a one-rune match.
#[inline]
fn index_rune(text: &str, segments: &mut Segments, accept: impl Fn(char) -> bool) -> Option<usize> {
    let (i, ch) = text.char_indices().find(|&(_, ch)| accept(ch))?;
    segments.push(i + ch.len_utf8());
    Some(i)
}

/// Pushes every character boundary of `text` within `from..=to`.
#[inline]
fn push_boundaries(text: &str, from: usize, to: usize, segments: &mut Segments) {
    segments.extend(text[from..to].char_indices().map(|(i, _)| from + i));
    segments.push(to);
}

/// Writes the `:![...]` suffix used by separator-aware matchers.
fn fmt_separators(f: &mut fmt::Formatter<'_>, separators: &Separators) -> fmt::Result {
    if separators.is_empty() {
        Ok(())
    } else {
        write!(f, ":![{}]", separators)
    }
}

#[cfg(test)]
mod tests;
