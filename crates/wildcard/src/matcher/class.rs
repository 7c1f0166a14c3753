// std imports
use std::fmt;

// local imports
use super::{Match, index_rune, single_rune};
use crate::segments::Segments;

// ---

/// Matches one rune within `lo..=hi`, or outside of it when negated.
#[derive(Debug, Clone, Copy)]
pub struct Range {
    lo: char,
    hi: char,
    negated: bool,
}

impl Range {
    pub fn new(lo: char, hi: char, negated: bool) -> Self {
        Self { lo, hi, negated }
    }

    #[inline]
    fn accepts(&self, ch: char) -> bool {
        (self.lo..=self.hi).contains(&ch) != self.negated
    }
}

impl Match for Range {
    #[inline]
    fn matches(&self, text: &str) -> bool {
        single_rune(text).is_some_and(|ch| self.accepts(ch))
    }

    #[inline]
    fn fixed_len(&self) -> Option<usize> {
        Some(1)
    }

    #[inline]
    fn index_into(&self, text: &str, segments: &mut Segments) -> Option<usize> {
        index_rune(text, segments, |ch| self.accepts(ch))
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let not = if self.negated { "!" } else { "" };
        write!(f, "<range:{}[{},{}]>", not, self.lo, self.hi)
    }
}

// ---

/// Matches one rune from the set, or any rune outside of it when negated.
#[derive(Debug, Clone)]
pub struct List {
    runes: Box<[char]>,
    negated: bool,
}

impl List {
    pub fn new(runes: impl IntoIterator<Item = char>, negated: bool) -> Self {
        let mut runes: Vec<char> = runes.into_iter().collect();
        runes.sort_unstable();
        runes.dedup();
        Self {
            runes: runes.into_boxed_slice(),
            negated,
        }
    }

    #[inline]
    fn accepts(&self, ch: char) -> bool {
        self.runes.binary_search(&ch).is_ok() != self.negated
    }
}

impl Match for List {
    #[inline]
    fn matches(&self, text: &str) -> bool {
        single_rune(text).is_some_and(|ch| self.accepts(ch))
    }

    #[inline]
    fn fixed_len(&self) -> Option<usize> {
        Some(1)
    }

    #[inline]
    fn index_into(&self, text: &str, segments: &mut Segments) -> Option<usize> {
        index_rune(text, segments, |ch| self.accepts(ch))
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let not = if self.negated { "!" } else { "" };
        write!(f, "<list:{}[", not)?;
        for ch in self.runes.iter() {
            write!(f, "{}", ch)?;
        }
        f.write_str("]>")
    }
}
