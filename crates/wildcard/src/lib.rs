//! A glob pattern compiler.
//!
//! Patterns are parsed once and lowered into an immutable tree of matchers. Common shapes such as
//! `*.png`, `https://*` or plain text become dedicated matchers answering with a couple of
//! substring checks, everything else is split around anchors into a tree that only tries
//! positions where the anchors actually occur.
//!
//! # Pattern Syntax
//!
//! - `?` - Matches exactly one rune which is not a separator
//! - `*` - Matches any run of runes without separators, including an empty one
//! - `**` - Matches any run of runes, separators included
//! - `[abc]`, `[a-z]` - Matches one rune from the class, `[!...]` negates it
//! - `{a,b,c}` - Matches any of the comma separated sub-patterns, which may nest
//! - `\` - Escapes the next rune so it is taken literally
//!
//! # Examples
//!
//! ```
//! use wildcard::{Match, compile};
//!
//! let m = compile("https://*.google.*", []).unwrap();
//! assert!(m.matches("https://account.google.com"));
//! assert!(!m.matches("http://account.google.com"));
//!
//! let m = compile("*.txt", ['/']).unwrap();
//! assert!(m.matches("notes.txt"));
//! assert!(!m.matches("docs/notes.txt"));
//!
//! let m = compile(r"\*", []).unwrap();
//! assert!(m.matches("*"));
//! assert!(!m.matches("a"));
//! ```
//!
//! # Errors
//!
//! Only compilation may fail, with a [`ParseError`] pointing at the byte offset of the problem.
//! Matching accepts any text.
//!
//! ```
//! use wildcard::{ErrorKind, compile};
//!
//! let err = compile("ab[cd", []).unwrap_err();
//! assert_eq!(err.kind, ErrorKind::UnterminatedClass);
//! assert_eq!(err.offset, 2);
//! ```
//!
//! # Diagnostics
//!
//! A compiled matcher renders its structure through `Display`:
//!
//! ```
//! use wildcard::compile;
//!
//! assert_eq!(compile("abc*", []).unwrap().to_string(), "<prefix:abc>");
//! assert_eq!(compile("*.txt", ['/']).unwrap().to_string(), "<suffix:.txt:![/]>");
//! ```

mod ast;
mod compiler;
mod error;
mod matcher;
mod parser;
mod pattern;
mod segments;
mod separators;
mod utf8;

pub use ast::Node;
pub use compiler::Compiler;
pub use error::{ErrorKind, ParseError, Result};
pub use matcher::*;
pub use parser::parse;
pub use pattern::{Pattern, compile};
pub use segments::Segments;
pub use separators::Separators;
