// std imports
use std::fmt;

// local imports
use super::{Match, Matcher};
use crate::{
    segments::{self, Segments},
    utf8::next_char_boundary,
};

// ---

/// Matches if any of the alternatives matches.
#[derive(Debug, Clone)]
pub struct AnyOf {
    matchers: Vec<Matcher>,
}

impl AnyOf {
    pub fn new(matchers: Vec<Matcher>) -> Self {
        Self { matchers }
    }

    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }
}

impl Match for AnyOf {
    #[inline]
    fn matches(&self, text: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(text))
    }

    fn fixed_len(&self) -> Option<usize> {
        let (first, rest) = self.matchers.split_first()?;
        let len = first.fixed_len()?;
        rest.iter().all(|m| m.fixed_len() == Some(len)).then_some(len)
    }

    /// Reports the earliest start among the alternatives
    /// together with the union of end offsets of all alternatives starting there.
    fn index_into(&self, text: &str, segments: &mut Segments) -> Option<usize> {
        let mut child = segments::acquire(text.len() + 1);
        let mut best = None;

        for m in &self.matchers {
            child.clear();
            let Some(start) = m.index_into(text, &mut child) else {
                continue;
            };
            match best {
                Some(best) if start > best => {}
                Some(best) if start == best => merge(segments, &child),
                _ => {
                    best = Some(start);
                    segments.clear();
                    segments.extend_from_slice(&child);
                }
            }
        }

        best
    }
}

impl fmt::Display for AnyOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<any_of:")?;
        fmt_list(f, &self.matchers)?;
        f.write_str(">")
    }
}

// ---

/// Matches if all of the matchers match the same text.
#[derive(Debug, Clone)]
pub struct EveryOf {
    matchers: Vec<Matcher>,
}

impl EveryOf {
    pub fn new(matchers: Vec<Matcher>) -> Self {
        Self { matchers }
    }

    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }
}

impl Match for EveryOf {
    #[inline]
    fn matches(&self, text: &str) -> bool {
        !self.matchers.is_empty() && self.matchers.iter().all(|m| m.matches(text))
    }

    #[inline]
    fn fixed_len(&self) -> Option<usize> {
        self.matchers.iter().find_map(|m| m.fixed_len())
    }

    /// Finds the earliest start shared by all matchers with at least one common end offset.
    fn index_into(&self, text: &str, segments: &mut Segments) -> Option<usize> {
        if self.matchers.is_empty() {
            return None;
        }

        let mut child = segments::acquire(text.len() + 1);
        let mut offset = 0;

        loop {
            let sub = &text[offset..];
            let mut next = offset;
            let mut first = true;
            segments.clear();

            for m in &self.matchers {
                child.clear();
                let Some(start) = m.index_into(sub, &mut child) else {
                    segments.clear();
                    return None;
                };
                if start != 0 {
                    // No match of this one can start before `offset + start`, so neither can ours.
                    next = next.max(offset + start);
                    continue;
                }
                if next != offset {
                    continue;
                }
                if first {
                    segments.extend(child.iter().map(|&end| offset + end));
                    first = false;
                } else {
                    segments.retain(|&end| child.binary_search(&(end - offset)).is_ok());
                }
            }

            if next == offset {
                if !segments.is_empty() {
                    return Some(offset);
                }
                if offset >= text.len() {
                    return None;
                }
                next = next_char_boundary(text, offset);
            }
            offset = next;
        }
    }
}

impl fmt::Display for EveryOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<every_of:")?;
        fmt_list(f, &self.matchers)?;
        f.write_str(">")
    }
}

// ---

/// Merges sorted, duplicate-free `src` into sorted, duplicate-free `dst`.
fn merge(dst: &mut Segments, src: &[usize]) {
    if src.is_empty() {
        return;
    }
    dst.extend_from_slice(src);
    dst.sort_unstable();
    dst.dedup();
}

fn fmt_list(f: &mut fmt::Formatter<'_>, matchers: &[Matcher]) -> fmt::Result {
    f.write_str("[")?;
    for (i, m) in matchers.iter().enumerate() {
        if i != 0 {
            f.write_str(",")?;
        }
        write!(f, "{}", m)?;
    }
    f.write_str("]")
}
