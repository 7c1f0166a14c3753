// third-party imports
use clap::Parser;

// workspace imports
use wildcard::Pattern;

// local imports
use crate::{
    app::{Options, OutputMode},
    error::*,
    settings::Settings,
};

// ---

/// Filters text with a glob pattern.
///
/// Prints the texts matching PATTERN, taken from the command line or from lines of standard input.
/// Exits with status 0 if any text was selected, 1 if none was and 2 on errors.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Runes that `*` and `?` never match, `**` still does.
    #[arg(short, long, env = "GLOBBER_SEPARATORS", overrides_with = "separators")]
    pub separators: Option<String>,

    /// Select texts that do not match the pattern.
    #[arg(short = 'v', long, overrides_with = "invert_match")]
    pub invert_match: bool,

    /// Print only the number of selected texts.
    #[arg(short, long, conflicts_with = "quiet")]
    pub count: bool,

    /// Print nothing, report the result with the exit status only.
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the compiled matcher tree and exit.
    #[arg(long)]
    pub tree: bool,

    /// Glob pattern.
    pub pattern: String,

    /// Texts to test, lines of standard input are used if none are given.
    pub texts: Vec<String>,
}

impl Opt {
    /// Compiles the pattern and resolves application options, command line taking precedence over settings.
    pub fn options(&self, settings: &Settings) -> Result<Options> {
        let separators = self.separators.as_deref().unwrap_or(&settings.separators);
        let pattern = Pattern::with_separators(self.pattern.as_str(), separators).map_err(|source| Error::Pattern {
            pattern: self.pattern.clone(),
            source,
        })?;

        let output = if self.quiet {
            OutputMode::Quiet
        } else if self.count {
            OutputMode::Count
        } else {
            OutputMode::Lines
        };

        Ok(Options::new(pattern)
            .with_invert(self.invert_match || settings.invert_match)
            .with_output(output))
    }
}
