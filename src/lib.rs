//! Command-line host for the [`wildcard`] glob compiler.
//!
//! Compiles one pattern and filters texts with it, either given on the command line
//! or read line by line from an input stream.

// public modules
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod settings;

// public uses
pub use app::{App, Options, OutputMode, Stats};
pub use settings::Settings;
