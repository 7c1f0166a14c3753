// std imports
use std::io::{BufRead, Write};

// workspace imports
use wildcard::Pattern;

// local imports
use crate::error::*;

// ---

#[derive(Debug, Clone)]
pub struct Options {
    pub pattern: Pattern,
    pub invert: bool,
    pub output: OutputMode,
}

impl Options {
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            invert: false,
            output: OutputMode::Lines,
        }
    }

    pub fn with_invert(self, invert: bool) -> Self {
        Self { invert, ..self }
    }

    pub fn with_output(self, output: OutputMode) -> Self {
        Self { output, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Selected texts are written one per line.
    #[default]
    Lines,
    /// Only the number of selected texts is written.
    Count,
    /// Nothing is written and processing stops at the first selected text.
    Quiet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub selected: usize,
}

// ---

pub struct App {
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Filters lines of `input`, line breaks are not part of the tested text.
    pub fn run(&self, mut input: impl BufRead, mut output: impl Write) -> Result<Stats> {
        let mut stats = Stats::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = std::str::from_utf8(trim_newline(&buf))?;
            if !self.process(line, &mut output, &mut stats)? {
                break;
            }
        }

        self.finish(stats, output)
    }

    /// Filters the given texts as if each of them was a line of input.
    pub fn run_texts<'a>(&self, texts: impl IntoIterator<Item = &'a str>, mut output: impl Write) -> Result<Stats> {
        let mut stats = Stats::default();
        for text in texts {
            if !self.process(text, &mut output, &mut stats)? {
                break;
            }
        }

        self.finish(stats, output)
    }

    /// Returns false when there is no need to look any further.
    fn process(&self, text: &str, output: &mut impl Write, stats: &mut Stats) -> Result<bool> {
        stats.total += 1;
        if self.options.pattern.matches(text) == self.options.invert {
            return Ok(true);
        }

        stats.selected += 1;
        match self.options.output {
            OutputMode::Lines => {
                output.write_all(text.as_bytes())?;
                output.write_all(b"\n")?;
                Ok(true)
            }
            OutputMode::Count => Ok(true),
            OutputMode::Quiet => Ok(false),
        }
    }

    fn finish(&self, stats: Stats, mut output: impl Write) -> Result<Stats> {
        if self.options.output == OutputMode::Count {
            writeln!(output, "{}", stats.selected)?;
        }
        output.flush()?;

        log::debug!("selected {} of {} texts", stats.selected, stats.total);
        Ok(stats)
    }
}

fn trim_newline(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
