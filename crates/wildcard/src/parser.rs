// std imports
use std::{iter::Peekable, str::CharIndices};

// local imports
use crate::{
    ast::Node,
    error::{ErrorKind, ParseError, Result},
    separators::Separators,
};

const ESCAPE: char = '\\';

/// Parses a glob pattern into its syntax tree.
///
/// The result is a [`Node::Sequence`], or a [`Node::Alternatives`] when the whole pattern is a
/// single `{...}` group. Wildcards `?` and `*` carry the given separators so they never consume them.
///
/// # Examples
///
/// ```
/// use wildcard::{Node, Separators, parse};
///
/// let ast = parse("a*", &Separators::none()).unwrap();
/// assert_eq!(ast, Node::Sequence(vec![Node::Literal("a".into()), Node::Any(Separators::none())]));
/// ```
pub fn parse(pattern: &str, separators: &Separators) -> Result<Node> {
    Parser::new(pattern, separators).parse()
}

// ---

struct Parser<'a> {
    chars: Peekable<CharIndices<'a>>,
    separators: &'a Separators,
}

impl<'a> Parser<'a> {
    fn new(pattern: &'a str, separators: &'a Separators) -> Self {
        Self {
            chars: pattern.char_indices().peekable(),
            separators,
        }
    }

    fn parse(mut self) -> Result<Node> {
        let mut nodes = self.sequence(false)?;
        if nodes.len() == 1 && matches!(nodes[0], Node::Alternatives(_)) {
            return Ok(nodes.swap_remove(0));
        }
        Ok(Node::Sequence(nodes))
    }

    fn sequence(&mut self, in_group: bool) -> Result<Vec<Node>> {
        let mut nodes = Vec::new();

        while let Some(&(offset, ch)) = self.chars.peek() {
            if in_group && (ch == ',' || ch == '}') {
                break;
            }
            self.chars.next();

            match ch {
                ESCAPE => {
                    let (_, escaped) = self.escaped(offset)?;
                    push_literal(&mut nodes, escaped);
                }
                '?' => nodes.push(Node::Single(self.separators.clone())),
                '*' => {
                    if self.skip_stars() {
                        nodes.push(Node::Super);
                    } else {
                        nodes.push(Node::Any(self.separators.clone()));
                    }
                }
                '[' => nodes.push(self.class(offset)?),
                '{' => nodes.push(self.group(offset)?),
                _ => push_literal(&mut nodes, ch),
            }
        }

        Ok(nodes)
    }

    /// Consumes stars following a star, returns true if there were any.
    fn skip_stars(&mut self) -> bool {
        let mut found = false;
        while self.chars.next_if(|&(_, ch)| ch == '*').is_some() {
            found = true;
        }
        found
    }

    fn escaped(&mut self, offset: usize) -> Result<(usize, char)> {
        self.chars
            .next()
            .ok_or(ParseError::new(ErrorKind::TrailingEscape, offset))
    }

    fn group(&mut self, open: usize) -> Result<Node> {
        let mut branches = Vec::new();
        loop {
            branches.push(self.sequence(true)?);
            match self.chars.next() {
                Some((_, ',')) => continue,
                Some((_, '}')) => return Ok(Node::Alternatives(branches)),
                _ => return Err(ParseError::new(ErrorKind::UnterminatedGroup, open)),
            }
        }
    }

    fn class(&mut self, open: usize) -> Result<Node> {
        let unterminated = ParseError::new(ErrorKind::UnterminatedClass, open);
        let negated = self.chars.next_if(|&(_, ch)| ch == '!').is_some();
        let mut runes = Vec::new();
        let mut ranges = Vec::new();

        loop {
            let (offset, ch) = self.chars.next().ok_or(unterminated)?;
            let lo = match ch {
                ']' => break,
                ESCAPE => self.escaped(offset)?.1,
                _ => ch,
            };

            if !self.range_follows() {
                runes.push(lo);
                continue;
            }

            self.chars.next();
            let (hi_offset, ch) = self.chars.next().ok_or(unterminated)?;
            let hi = match ch {
                ESCAPE => self.escaped(hi_offset)?.1,
                _ => ch,
            };
            if lo > hi {
                return Err(ParseError::new(ErrorKind::InvalidRange, offset));
            }
            ranges.push((lo, hi));
        }

        if runes.is_empty() && ranges.is_empty() {
            return Err(ParseError::new(ErrorKind::EmptyClass, open));
        }

        let mut nodes: Vec<Node> = ranges
            .into_iter()
            .map(|(lo, hi)| Node::Range { lo, hi, negated })
            .collect();

        if !runes.is_empty() {
            runes.sort_unstable();
            runes.dedup();
            nodes.push(Node::List { runes, negated });
        }

        Ok(match nodes.len() {
            1 => nodes.swap_remove(0),
            _ if negated => Node::Conjunction(nodes),
            _ => Node::Alternatives(nodes.into_iter().map(|node| vec![node]).collect()),
        })
    }

    /// Checks whether the next runes are `-` followed by a range end rather than `]` or the end of pattern.
    fn range_follows(&mut self) -> bool {
        if self.chars.peek().map(|&(_, ch)| ch) != Some('-') {
            return false;
        }
        let mut lookahead = self.chars.clone();
        lookahead.next();
        !matches!(lookahead.next(), None | Some((_, ']')))
    }
}

fn push_literal(nodes: &mut Vec<Node>, ch: char) {
    if let Some(Node::Literal(text)) = nodes.last_mut() {
        text.push(ch);
    } else {
        nodes.push(Node::Literal(ch.into()));
    }
}
