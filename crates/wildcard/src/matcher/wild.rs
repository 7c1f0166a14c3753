// std imports
use std::fmt;

// local imports
use super::{Match, fmt_separators, index_rune, push_boundaries, single_rune};
use crate::{segments::Segments, separators::Separators, utf8::next_char_boundary};

// ---

/// Matches exactly one rune which is not a separator.
#[derive(Debug, Clone, Default)]
pub struct Single {
    separators: Separators,
}

impl Single {
    pub fn new(separators: Separators) -> Self {
        Self { separators }
    }

    pub fn separators(&self) -> &Separators {
        &self.separators
    }
}

impl Match for Single {
    #[inline]
    fn matches(&self, text: &str) -> bool {
        single_rune(text).is_some_and(|ch| !self.separators.contains(ch))
    }

    #[inline]
    fn fixed_len(&self) -> Option<usize> {
        Some(1)
    }

    #[inline]
    fn index_into(&self, text: &str, segments: &mut Segments) -> Option<usize> {
        index_rune(text, segments, |ch| !self.separators.contains(ch))
    }
}

impl fmt::Display for Single {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<single")?;
        fmt_separators(f, &self.separators)?;
        f.write_str(">")
    }
}

// ---

/// Matches any run of runes, including an empty one, that contains no separators.
#[derive(Debug, Clone, Default)]
pub struct Any {
    separators: Separators,
}

impl Any {
    pub fn new(separators: Separators) -> Self {
        Self { separators }
    }

    pub fn separators(&self) -> &Separators {
        &self.separators
    }
}

impl Match for Any {
    #[inline]
    fn matches(&self, text: &str) -> bool {
        self.separators.find(text).is_none()
    }

    #[inline]
    fn fixed_len(&self) -> Option<usize> {
        None
    }

    #[inline]
    fn index_into(&self, text: &str, segments: &mut Segments) -> Option<usize> {
        push_boundaries(text, 0, self.separators.first_or_end(text), segments);
        Some(0)
    }
}

impl fmt::Display for Any {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<any")?;
        fmt_separators(f, &self.separators)?;
        f.write_str(">")
    }
}

// ---

/// Matches everything, separators included.
#[derive(Debug, Clone, Copy, Default)]
pub struct Super;

impl Match for Super {
    #[inline]
    fn matches(&self, _: &str) -> bool {
        true
    }

    #[inline]
    fn fixed_len(&self) -> Option<usize> {
        None
    }

    #[inline]
    fn index_into(&self, text: &str, segments: &mut Segments) -> Option<usize> {
        push_boundaries(text, 0, text.len(), segments);
        Some(0)
    }
}

impl fmt::Display for Super {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<super>")
    }
}

// ---

/// Matches a run of at least `min` and at most `max` runes, none of them a separator.
#[derive(Debug, Clone)]
pub struct MinMax {
    min: usize,
    max: Option<usize>,
    separators: Separators,
}

impl MinMax {
    pub fn new(min: usize, max: Option<usize>, separators: Separators) -> Self {
        debug_assert!(max.is_none_or(|max| max >= min));
        Self { min, max, separators }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }

    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    #[inline]
    fn exceeds(&self, count: usize) -> bool {
        self.max.is_some_and(|max| count > max)
    }
}

impl Match for MinMax {
    fn matches(&self, text: &str) -> bool {
        let mut count = 0;
        for ch in text.chars() {
            if self.separators.contains(ch) {
                return false;
            }
            count += 1;
            if self.exceeds(count) {
                return false;
            }
        }
        count >= self.min
    }

    #[inline]
    fn fixed_len(&self) -> Option<usize> {
        self.max.filter(|&max| max == self.min)
    }

    fn index_into(&self, text: &str, segments: &mut Segments) -> Option<usize> {
        let mut start = 0;
        loop {
            if self.min == 0 {
                segments.push(start);
            }

            let mut count = 0;
            let mut blocked = None;
            for (i, ch) in text[start..].char_indices() {
                if self.max == Some(count) {
                    break;
                }
                if self.separators.contains(ch) {
                    blocked = Some(start + i);
                    break;
                }
                count += 1;
                if count >= self.min {
                    segments.push(start + i + ch.len_utf8());
                }
            }

            if !segments.is_empty() {
                return Some(start);
            }

            // Any start before the blocking separator runs into it with even fewer runes.
            start = next_char_boundary(text, blocked?);
        }
    }
}

impl fmt::Display for MinMax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<min_max:{}..", self.min)?;
        if let Some(max) = self.max {
            write!(f, "={}", max)?;
        }
        fmt_separators(f, &self.separators)?;
        f.write_str(">")
    }
}
