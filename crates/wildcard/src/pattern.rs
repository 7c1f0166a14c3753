// std imports
use std::{fmt, str::FromStr};

// local imports
use crate::{
    compiler::Compiler,
    error::{ParseError, Result},
    matcher::{Match, Matcher},
    parser::parse,
    separators::Separators,
};

/// Compiles a glob pattern into a matcher.
///
/// Wildcards `?` and `*` never consume any of the `separators`, while `**` does.
///
/// # Examples
///
/// ```
/// use wildcard::{Match, compile};
///
/// let m = compile("a.?.c", ['.']).unwrap();
/// assert!(m.matches("a.b.c"));
/// assert!(!m.matches("a.bb.c"));
///
/// let m = compile("{abc,def}ghi", []).unwrap();
/// assert!(m.matches("defghi"));
/// assert!(!m.matches("xghi"));
/// ```
pub fn compile(pattern: &str, separators: impl IntoIterator<Item = char>) -> Result<Matcher> {
    compile_with(pattern, &Separators::new(separators))
}

pub(crate) fn compile_with(pattern: &str, separators: &Separators) -> Result<Matcher> {
    let ast = parse(pattern, separators)?;
    let matcher = Compiler::new().compile(&ast);
    log::debug!("compiled {:?} with separators {:?} into {}", pattern, separators.to_string(), matcher);
    Ok(matcher)
}

// ---

/// A compiled glob pattern together with its source text.
///
/// # Examples
///
/// ```
/// use wildcard::Pattern;
///
/// let pattern = Pattern::new("*.txt").unwrap();
/// assert!(pattern.matches("readme.txt"));
/// assert!(!pattern.matches("readme.md"));
///
/// let pattern = Pattern::with_separators("src/*.rs", "/").unwrap();
/// assert!(pattern.matches("src/lib.rs"));
/// assert!(!pattern.matches("src/matcher/btree.rs"));
///
/// assert_eq!(pattern.to_string(), "src/*.rs");
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    separators: Separators,
    matcher: Matcher,
}

impl Pattern {
    /// Compiles a pattern without separators, so `*` and `?` may consume any rune.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        Self::with_separators(raw, Separators::none())
    }

    pub fn with_separators(raw: impl Into<String>, separators: impl Into<Separators>) -> Result<Self> {
        let raw = raw.into();
        let separators = separators.into();
        let matcher = compile_with(&raw, &separators)?;
        Ok(Self {
            raw,
            separators,
            matcher,
        })
    }

    /// Tests whether the whole text matches the pattern.
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        self.matcher.matches(text)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    /// Returns the compiled matcher tree.
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Pattern {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw && self.separators == other.separators
    }
}

impl Eq for Pattern {}
