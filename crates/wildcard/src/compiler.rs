// std imports
use std::mem::take;

// local imports
use crate::{
    ast::Node,
    matcher::{
        Any, AnyOf, BTree, Contains, EveryOf, List, Literal, Match, Matcher, MinMax, Nothing, Prefix, PrefixSuffix,
        Range, Single, Suffix, Super,
    },
    separators::Separators,
};

/// Lowers a parsed pattern into the smallest matcher tree it can find.
///
/// Sequences are first rewritten to a fixed point (adjacent literals fuse, adjacent wildcards
/// collapse into one bounded run), then common shapes become dedicated matchers
/// and whatever remains is split around an anchor into a [`BTree`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Compiler;

impl Compiler {
    pub fn new() -> Self {
        Self
    }

    pub fn compile(&self, node: &Node) -> Matcher {
        match node {
            Node::Literal(text) if text.is_empty() => Nothing.into(),
            Node::Literal(text) => Literal::new(text.as_str()).into(),
            Node::Single(separators) => Wild::single(separators.clone()).into_matcher(),
            Node::Any(separators) => Wild::any(separators.clone()).into_matcher(),
            Node::Super => Wild::any(Separators::none()).into_matcher(),
            Node::Range { lo, hi, negated } => Range::new(*lo, *hi, *negated).into(),
            Node::List { runes, negated } => List::new(runes.iter().copied(), *negated).into(),
            Node::Alternatives(branches) => self.alternatives(branches),
            Node::Conjunction(nodes) => self.conjunction(nodes),
            Node::Sequence(nodes) => self.sequence(nodes),
        }
    }

    fn sequence(&self, nodes: &[Node]) -> Matcher {
        let mut parts = Vec::with_capacity(nodes.len());
        self.lower(nodes, &mut parts);
        build(normalize(parts))
    }

    fn alternatives(&self, branches: &[Vec<Node>]) -> Matcher {
        let mut matchers: Vec<Matcher> = Vec::with_capacity(branches.len());
        let mut seen = Vec::with_capacity(branches.len());

        for branch in branches {
            let compiled = self.sequence(branch);
            let flattened = match compiled {
                Matcher::AnyOf(any) => any.matchers().to_vec(),
                other => vec![other],
            };
            for m in flattened {
                let rendered = m.to_string();
                if !seen.contains(&rendered) {
                    seen.push(rendered);
                    matchers.push(m);
                }
            }
        }

        match matchers.len() {
            0 => Nothing.into(),
            1 => matchers.swap_remove(0),
            _ => AnyOf::new(matchers).into(),
        }
    }

    fn conjunction(&self, nodes: &[Node]) -> Matcher {
        let mut matchers: Vec<Matcher> = nodes.iter().map(|node| self.compile(node)).collect();
        match matchers.len() {
            1 => matchers.swap_remove(0),
            _ => EveryOf::new(matchers).into(),
        }
    }

    fn lower(&self, nodes: &[Node], parts: &mut Vec<Part>) {
        for node in nodes {
            match node {
                Node::Literal(text) if text.is_empty() => {}
                Node::Literal(text) => parts.push(Part::Text(text.clone())),
                Node::Single(separators) => parts.push(Part::Wild(Wild::single(separators.clone()))),
                Node::Any(separators) => parts.push(Part::Wild(Wild::any(separators.clone()))),
                Node::Super => parts.push(Part::Wild(Wild::any(Separators::none()))),
                Node::Sequence(nodes) => self.lower(nodes, parts),
                Node::Alternatives(branches) if branches.len() == 1 => self.lower(&branches[0], parts),
                _ => {
                    if let Some(part) = Part::from_matcher(self.compile(node)) {
                        parts.push(part);
                    }
                }
            }
        }
    }
}

// ---

/// An element of a sequence being compiled.
#[derive(Debug, Clone)]
enum Part {
    Text(String),
    Wild(Wild),
    Other(Matcher),
}

impl Part {
    /// Turns a compiled sub-pattern back into a part so it can take part in rewrites,
    /// as with `x{abc}y` which fuses into a single literal.
    fn from_matcher(m: Matcher) -> Option<Self> {
        Some(match m {
            Matcher::Nothing(_) => return None,
            Matcher::Literal(m) => Self::Text(m.text().to_owned()),
            Matcher::Super(_) => Self::Wild(Wild::any(Separators::none())),
            Matcher::Any(m) => Self::Wild(Wild::any(m.separators().clone())),
            Matcher::Single(m) => Self::Wild(Wild::single(m.separators().clone())),
            Matcher::MinMax(m) => Self::Wild(Wild::new(m.min(), m.max(), m.separators().clone())),
            m => Self::Other(m),
        })
    }

    fn into_matcher(self) -> Matcher {
        match self {
            Self::Text(text) => Literal::new(text).into(),
            Self::Wild(wild) => wild.into_matcher(),
            Self::Other(m) => m,
        }
    }

    /// Preference for being chosen as a BTree anchor, higher is better, `None` if not eligible.
    fn anchor_rank(&self) -> Option<(u8, usize)> {
        match self {
            Self::Text(text) => Some((2, text.chars().count())),
            Self::Other(m) => m.fixed_len().map(|len| (1, len)),
            Self::Wild(wild) => wild.fixed_len().map(|len| (0, len)),
        }
    }
}

// ---

/// A run of wildcards, consuming between `min` and `max` runes none of which is a separator.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Wild {
    min: usize,
    max: Option<usize>,
    separators: Separators,
}

impl Wild {
    fn new(min: usize, max: Option<usize>, separators: Separators) -> Self {
        Self { min, max, separators }
    }

    fn single(separators: Separators) -> Self {
        Self::new(1, Some(1), separators)
    }

    fn any(separators: Separators) -> Self {
        Self::new(0, None, separators)
    }

    fn is_any(&self) -> bool {
        self.min == 0 && self.max.is_none()
    }

    fn is_super(&self) -> bool {
        self.is_any() && self.separators.is_empty()
    }

    fn fixed_len(&self) -> Option<usize> {
        self.max.filter(|&max| max == self.min)
    }

    /// Combines two adjacent runs into one, if the result accepts exactly the same texts.
    fn combine(&self, next: &Self) -> Option<Self> {
        if self.separators == next.separators {
            let max = match (self.max, next.max) {
                (Some(a), Some(b)) => Some(a + b),
                _ => None,
            };
            return Some(Self::new(self.min + next.min, max, self.separators.clone()));
        }

        // An unbounded run crossing separators absorbs a neighbour that may be empty.
        if self.separators.is_empty() && self.max.is_none() && next.min == 0 {
            return Some(self.clone());
        }
        if next.separators.is_empty() && next.max.is_none() && self.min == 0 {
            return Some(next.clone());
        }

        None
    }

    fn into_matcher(self) -> Matcher {
        match (self.min, self.max) {
            (0, Some(0)) => Nothing.into(),
            (0, None) if self.separators.is_empty() => Super.into(),
            (0, None) => Any::new(self.separators).into(),
            (1, Some(1)) => Single::new(self.separators).into(),
            (min, max) => MinMax::new(min, max, self.separators).into(),
        }
    }
}

// ---

/// Applies local rewrites until none of them fires.
fn normalize(mut parts: Vec<Part>) -> Vec<Part> {
    loop {
        let (next, changed) = rewrite(parts);
        parts = next;
        if !changed {
            return parts;
        }
    }
}

fn rewrite(parts: Vec<Part>) -> (Vec<Part>, bool) {
    let mut result: Vec<Part> = Vec::with_capacity(parts.len());
    let mut changed = false;

    for part in parts {
        match part {
            Part::Text(text) if text.is_empty() => changed = true,
            Part::Wild(wild) if wild.fixed_len() == Some(0) => changed = true,
            Part::Text(text) => {
                if let Some(Part::Text(prev)) = result.last_mut() {
                    log::trace!("fusing literals {:?} and {:?}", prev, text);
                    prev.push_str(&text);
                    changed = true;
                    continue;
                }
                result.push(Part::Text(text));
            }
            Part::Wild(wild) => {
                if let Some(Part::Wild(prev)) = result.last_mut() {
                    if let Some(combined) = prev.combine(&wild) {
                        log::trace!("combining wildcards {:?} and {:?}", prev, wild);
                        *prev = combined;
                        changed = true;
                        continue;
                    }
                }
                result.push(Part::Wild(wild));
            }
            part => result.push(part),
        }
    }

    (result, changed)
}

/// Builds a matcher for a normalized sequence.
fn build(mut parts: Vec<Part>) -> Matcher {
    if let Some(m) = shape(&mut parts) {
        return m;
    }

    let anchor = anchor(&parts);
    let right = parts.split_off(anchor + 1);
    let value = parts.pop().map_or_else(|| Nothing.into(), Part::into_matcher);
    let left = parts;

    let left = (!left.is_empty()).then(|| build(left));
    let right = (!right.is_empty()).then(|| build(right));

    BTree::new(value, left, right).into()
}

/// Recognizes sequences with a dedicated matcher.
fn shape(parts: &mut [Part]) -> Option<Matcher> {
    Some(match parts {
        [] => Nothing.into(),
        [part] => take_part(part).into_matcher(),
        [Part::Text(prefix), Part::Wild(wild)] if wild.is_any() => {
            Prefix::new(take(prefix), take(&mut wild.separators)).into()
        }
        [Part::Wild(wild), Part::Text(suffix)] if wild.is_any() => {
            Suffix::new(take(suffix), take(&mut wild.separators)).into()
        }
        [Part::Text(prefix), Part::Wild(wild), Part::Text(suffix)] if wild.is_any() => {
            PrefixSuffix::new(take(prefix), take(suffix), take(&mut wild.separators)).into()
        }
        [Part::Wild(a), Part::Text(needle), Part::Wild(b)] if a.is_super() && b.is_super() => {
            Contains::new(take(needle)).into()
        }
        _ => return None,
    })
}

fn take_part(part: &mut Part) -> Part {
    std::mem::replace(part, Part::Text(String::new()))
}

/// Picks the index of the part to split the sequence around.
///
/// Literals are preferred over single-rune classes, which are preferred over fixed wildcard runs,
/// longer over shorter, then the one closest to the middle to keep the tree balanced.
/// Without any fixed-length part the first one is used.
fn anchor(parts: &[Part]) -> usize {
    let middle = parts.len().saturating_sub(1);
    parts
        .iter()
        .enumerate()
        .filter_map(|(i, part)| part.anchor_rank().map(|rank| (i, rank)))
        .max_by(|(i, a), (j, b)| {
            a.cmp(b)
                .then_with(|| (2 * j).abs_diff(middle).cmp(&(2 * i).abs_diff(middle)))
                .then_with(|| j.cmp(i))
        })
        .map_or(0, |(i, _)| i)
}
