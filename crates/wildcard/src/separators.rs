use std::fmt;

use memchr::{memchr, memchr2, memchr3, memrchr, memrchr2, memrchr3};

/// An immutable set of runes that bounded wildcards (`*` and `?`) never consume.
///
/// The set is sorted and free of duplicates, so two sets built from the same runes in any order
/// compare equal and render identically.
///
/// # Examples
///
/// ```
/// use wildcard::Separators;
///
/// let seps = Separators::from("/.");
/// assert!(seps.contains('/'));
/// assert_eq!(seps.find("a/b.c"), Some(1));
/// assert_eq!(seps.rfind("a/b.c"), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Separators {
    runes: Box<[char]>,
    ascii: Option<Ascii>,
}

impl Separators {
    /// Returns an empty separator set, so wildcards may consume any rune.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(runes: impl IntoIterator<Item = char>) -> Self {
        let mut runes: Vec<char> = runes.into_iter().collect();
        runes.sort_unstable();
        runes.dedup();
        let ascii = Ascii::new(&runes);
        Self {
            runes: runes.into_boxed_slice(),
            ascii,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.runes.len()
    }

    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        match self.runes.len() {
            0 => false,
            1 => self.runes[0] == ch,
            _ => self.runes.binary_search(&ch).is_ok(),
        }
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.runes.iter().copied()
    }

    /// Returns the byte offset of the first separator in `text`.
    #[inline]
    pub fn find(&self, text: &str) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        match self.ascii {
            Some(Ascii::One(a)) => memchr(a, text.as_bytes()),
            Some(Ascii::Two(a, b)) => memchr2(a, b, text.as_bytes()),
            Some(Ascii::Three(a, b, c)) => memchr3(a, b, c, text.as_bytes()),
            None => text.char_indices().find(|&(_, ch)| self.contains(ch)).map(|(i, _)| i),
        }
    }

    /// Returns the byte offset of the last separator in `text`.
    #[inline]
    pub fn rfind(&self, text: &str) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        match self.ascii {
            Some(Ascii::One(a)) => memrchr(a, text.as_bytes()),
            Some(Ascii::Two(a, b)) => memrchr2(a, b, text.as_bytes()),
            Some(Ascii::Three(a, b, c)) => memrchr3(a, b, c, text.as_bytes()),
            None => text.char_indices().rev().find(|&(_, ch)| self.contains(ch)).map(|(i, _)| i),
        }
    }

    /// Returns the byte offset just past the last separator in `text`, or zero if there is none.
    #[inline]
    pub(crate) fn after_last(&self, text: &str) -> usize {
        match self.rfind(text) {
            Some(i) => crate::utf8::next_char_boundary(text, i),
            None => 0,
        }
    }

    /// Returns the byte offset of the first separator in `text` or the length of `text`.
    #[inline]
    pub(crate) fn first_or_end(&self, text: &str) -> usize {
        self.find(text).unwrap_or(text.len())
    }
}

impl From<&str> for Separators {
    fn from(runes: &str) -> Self {
        Self::new(runes.chars())
    }
}

impl From<char> for Separators {
    fn from(rune: char) -> Self {
        Self::new([rune])
    }
}

impl FromIterator<char> for Separators {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for Separators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.iter() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

// ---

/// Byte-level search plan for separator sets of up to three ASCII runes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Ascii {
    One(u8),
    Two(u8, u8),
    Three(u8, u8, u8),
}

impl Ascii {
    fn new(runes: &[char]) -> Option<Self> {
        if !runes.iter().all(char::is_ascii) {
            return None;
        }
        match *runes {
            [a] => Some(Self::One(a as u8)),
            [a, b] => Some(Self::Two(a as u8, b as u8)),
            [a, b, c] => Some(Self::Three(a as u8, b as u8, c as u8)),
            _ => None,
        }
    }
}
