// std imports
use std::fmt;

// third-party imports
use memchr::memmem::{self, Finder};

// local imports
use super::{Match, fmt_separators, push_boundaries};
use crate::{segments::Segments, separators::Separators, utf8::next_char_boundary};

// ---

/// Matches only the empty text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nothing;

impl Match for Nothing {
    #[inline]
    fn matches(&self, text: &str) -> bool {
        text.is_empty()
    }

    #[inline]
    fn fixed_len(&self) -> Option<usize> {
        Some(0)
    }

    #[inline]
    fn index_into(&self, _: &str, segments: &mut Segments) -> Option<usize> {
        segments.push(0);
        Some(0)
    }
}

impl fmt::Display for Nothing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<nothing>")
    }
}

// ---

/// Matches the exact text.
#[derive(Debug, Clone)]
pub struct Literal {
    finder: Finder<'static>,
    text: String,
    runes: usize,
}

impl Literal {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            finder: Finder::new(text.as_bytes()).into_owned(),
            runes: text.chars().count(),
            text,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Match for Literal {
    #[inline]
    fn matches(&self, text: &str) -> bool {
        text == self.text
    }

    #[inline]
    fn fixed_len(&self) -> Option<usize> {
        Some(self.runes)
    }

    #[inline]
    fn index_into(&self, text: &str, segments: &mut Segments) -> Option<usize> {
        let i = self.finder.find(text.as_bytes())?;
        segments.push(i + self.text.len());
        Some(i)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<text:{}>", self.text)
    }
}

// ---

/// Matches text starting with a prefix followed by a run without separators.
#[derive(Debug, Clone)]
pub struct Prefix {
    prefix: String,
    separators: Separators,
}

impl Prefix {
    pub fn new(prefix: impl Into<String>, separators: Separators) -> Self {
        Self {
            prefix: prefix.into(),
            separators,
        }
    }
}

impl Match for Prefix {
    #[inline]
    fn matches(&self, text: &str) -> bool {
        text.starts_with(&self.prefix) && self.separators.find(&text[self.prefix.len()..]).is_none()
    }

    #[inline]
    fn fixed_len(&self) -> Option<usize> {
        None
    }

    fn index_into(&self, text: &str, segments: &mut Segments) -> Option<usize> {
        let i = memmem::find(text.as_bytes(), self.prefix.as_bytes())?;
        let from = i + self.prefix.len();
        let to = from + self.separators.first_or_end(&text[from..]);
        push_boundaries(text, from, to, segments);
        Some(i)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<prefix:{}", self.prefix)?;
        fmt_separators(f, &self.separators)?;
        f.write_str(">")
    }
}

// ---

/// Matches text ending with a suffix preceded by a run without separators.
#[derive(Debug, Clone)]
pub struct Suffix {
    suffix: String,
    separators: Separators,
}

impl Suffix {
    pub fn new(suffix: impl Into<String>, separators: Separators) -> Self {
        Self {
            suffix: suffix.into(),
            separators,
        }
    }
}

impl Match for Suffix {
    #[inline]
    fn matches(&self, text: &str) -> bool {
        text.ends_with(&self.suffix) && self.separators.find(&text[..text.len() - self.suffix.len()]).is_none()
    }

    #[inline]
    fn fixed_len(&self) -> Option<usize> {
        None
    }

    fn index_into(&self, text: &str, segments: &mut Segments) -> Option<usize> {
        let first = memmem::find(text.as_bytes(), self.suffix.as_bytes())?;
        let start = self.separators.after_last(&text[..first]);
        let limit = start + self.separators.first_or_end(&text[start..]);
        segments.extend(
            occurrences(&text[first..], &self.suffix)
                .map(|i| first + i)
                .take_while(|&i| i <= limit)
                .map(|i| i + self.suffix.len()),
        );
        Some(start)
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<suffix:{}", self.suffix)?;
        fmt_separators(f, &self.separators)?;
        f.write_str(">")
    }
}

// ---

/// Matches text with both a prefix and a suffix that do not overlap,
/// separated by a run without separators.
#[derive(Debug, Clone)]
pub struct PrefixSuffix {
    prefix: String,
    suffix: String,
    separators: Separators,
}

impl PrefixSuffix {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>, separators: Separators) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            separators,
        }
    }
}

impl Match for PrefixSuffix {
    #[inline]
    fn matches(&self, text: &str) -> bool {
        text.len() >= self.prefix.len() + self.suffix.len()
            && text.starts_with(&self.prefix)
            && text.ends_with(&self.suffix)
            && self
                .separators
                .find(&text[self.prefix.len()..text.len() - self.suffix.len()])
                .is_none()
    }

    #[inline]
    fn fixed_len(&self) -> Option<usize> {
        None
    }

    fn index_into(&self, text: &str, segments: &mut Segments) -> Option<usize> {
        for i in occurrences(text, &self.prefix) {
            let from = i + self.prefix.len();
            let limit = from + self.separators.first_or_end(&text[from..]);
            segments.extend(
                occurrences(&text[from..], &self.suffix)
                    .map(|j| from + j)
                    .take_while(|&j| j <= limit)
                    .map(|j| j + self.suffix.len()),
            );
            if !segments.is_empty() {
                return Some(i);
            }
        }
        None
    }
}

impl fmt::Display for PrefixSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<prefix_suffix:{},{}", self.prefix, self.suffix)?;
        fmt_separators(f, &self.separators)?;
        f.write_str(">")
    }
}

// ---

/// Matches any text containing the needle.
#[derive(Debug, Clone)]
pub struct Contains {
    finder: Finder<'static>,
    needle: String,
}

impl Contains {
    pub fn new(needle: impl Into<String>) -> Self {
        let needle = needle.into();
        Self {
            finder: Finder::new(needle.as_bytes()).into_owned(),
            needle,
        }
    }
}

impl Match for Contains {
    #[inline]
    fn matches(&self, text: &str) -> bool {
        self.finder.find(text.as_bytes()).is_some()
    }

    #[inline]
    fn fixed_len(&self) -> Option<usize> {
        None
    }

    fn index_into(&self, text: &str, segments: &mut Segments) -> Option<usize> {
        let i = self.finder.find(text.as_bytes())?;
        push_boundaries(text, i + self.needle.len(), text.len(), segments);
        Some(0)
    }
}

impl fmt::Display for Contains {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<contains:{}>", self.needle)
    }
}

// ---

/// Iterates over start offsets of all, possibly overlapping, occurrences of the needle.
///
/// An empty needle occurs at every character boundary.
fn occurrences<'a>(haystack: &'a str, needle: &'a str) -> impl Iterator<Item = usize> + 'a {
    let mut pos = 0;
    std::iter::from_fn(move || {
        if pos > haystack.len() {
            return None;
        }
        let i = pos + memmem::find(&haystack.as_bytes()[pos..], needle.as_bytes())?;
        pos = next_char_boundary(haystack, i).max(i + 1);
        Some(i)
    })
}
