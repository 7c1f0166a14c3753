// std imports
use std::{fmt, iter::once};

// local imports
use super::{Match, Matcher};
use crate::{
    segments::{self, Segments},
    utf8::{ceil_char_boundary, floor_char_boundary, next_char_boundary},
};

// ---

/// Ordered decomposition of a sequence around an anchor.
///
/// A text matches if it can be split into three consecutive parts so that `left` matches the
/// first one, `value` the second and `right` the third. Missing sides match only empty text.
/// Candidate splits come from [`Match::index_into`] of the anchor, so only positions where the
/// anchor actually occurs are tried.
#[derive(Debug, Clone)]
pub struct BTree {
    value: Box<Matcher>,
    left: Option<Box<Matcher>>,
    right: Option<Box<Matcher>>,
    left_len: Option<usize>,
    right_len: Option<usize>,
    len: Option<usize>,
}

impl BTree {
    pub fn new(value: Matcher, left: Option<Matcher>, right: Option<Matcher>) -> Self {
        let side_len = |side: &Option<Matcher>| side.as_ref().map_or(Some(0), |m| m.fixed_len());
        let left_len = side_len(&left);
        let right_len = side_len(&right);
        let len = match (left_len, value.fixed_len(), right_len) {
            (Some(l), Some(v), Some(r)) => Some(l + v + r),
            _ => None,
        };

        Self {
            value: Box::new(value),
            left: left.map(Box::new),
            right: right.map(Box::new),
            left_len,
            right_len,
            len,
        }
    }

    pub fn value(&self) -> &Matcher {
        &self.value
    }

    pub fn left(&self) -> Option<&Matcher> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Matcher> {
        self.right.as_deref()
    }

    #[inline]
    fn matches_left(&self, text: &str) -> bool {
        match &self.left {
            Some(m) => m.matches(text),
            None => text.is_empty(),
        }
    }

    #[inline]
    fn matches_right(&self, text: &str) -> bool {
        match &self.right {
            Some(m) => m.matches(text),
            None => text.is_empty(),
        }
    }
}

impl Match for BTree {
    fn matches(&self, text: &str) -> bool {
        // Lengths are in runes and every rune takes at least one byte,
        // so they bound byte offsets from below.
        if self.len.is_some_and(|len| len > text.len()) {
            return false;
        }

        let mut offset = ceil_char_boundary(text, self.left_len.unwrap_or(0));
        let limit = match self.right_len {
            Some(len) => floor_char_boundary(text, text.len().saturating_sub(len)),
            None => text.len(),
        };
        if offset > limit {
            return false;
        }

        let mut segments = segments::acquire(limit - offset + 1);
        loop {
            segments.clear();
            let Some(found) = self.value.index_into(&text[offset..limit], &mut segments) else {
                return false;
            };

            let start = offset + found;
            if self.matches_left(&text[..start]) {
                for &end in segments.iter().rev() {
                    if self.matches_right(&text[offset + end..]) {
                        return true;
                    }
                }
            }

            if start >= limit {
                return false;
            }
            offset = next_char_boundary(text, start);
        }
    }

    #[inline]
    fn fixed_len(&self) -> Option<usize> {
        self.len
    }

    /// Tries every start position in ascending order and reports the first one
    /// from which the whole tree matches, along with all ends of such matches.
    fn index_into(&self, text: &str, segments: &mut Segments) -> Option<usize> {
        for start in boundaries(text, 0) {
            match self.len {
                Some(len) => {
                    let mut chars = text[start..].char_indices();
                    let end = match len {
                        0 => Some(start),
                        _ => chars.nth(len - 1).map(|(i, ch)| start + i + ch.len_utf8()),
                    };
                    if let Some(end) = end.filter(|&end| self.matches(&text[start..end])) {
                        segments.push(end);
                    }
                }
                None => {
                    segments.extend(boundaries(text, start).filter(|&end| self.matches(&text[start..end])));
                }
            }
            if !segments.is_empty() {
                return Some(start);
            }
        }
        None
    }
}

impl fmt::Display for BTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<btree:[")?;
        match &self.left {
            Some(m) => write!(f, "{}", m)?,
            None => f.write_str("<nil>")?,
        }
        write!(f, "<-{}->", self.value)?;
        match &self.right {
            Some(m) => write!(f, "{}", m)?,
            None => f.write_str("<nil>")?,
        }
        f.write_str("]>")
    }
}

/// Iterates over character boundaries of `text` starting at `from`, including the end of text.
fn boundaries(text: &str, from: usize) -> impl Iterator<Item = usize> + '_ {
    text[from..]
        .char_indices()
        .map(move |(i, _)| from + i)
        .chain(once(text.len()))
}
