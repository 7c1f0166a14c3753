// std imports
use std::{
    io::{Write, stdin, stdout},
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use globber::{App, cli, config, error::*};

const GLOBBER_DEBUG_LOG: &str = "GLOBBER_DEBUG_LOG";
const GLOBBER_DEBUG_LOG_STYLE: &str = "GLOBBER_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(GLOBBER_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(GLOBBER_DEBUG_LOG).write_style(GLOBBER_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

/// Returns true if any text was selected.
fn run() -> Result<bool> {
    bootstrap();

    let opt = cli::Opt::parse();
    let settings = config::load()?;
    let options = opt.options(&settings)?;

    if opt.tree {
        writeln!(stdout().lock(), "{}", options.pattern.matcher())?;
        return Ok(true);
    }

    let app = App::new(options);
    let stats = if opt.texts.is_empty() {
        app.run(stdin().lock(), stdout().lock())?
    } else {
        app.run_texts(opt.texts.iter().map(String::as_str), stdout().lock())?
    };

    Ok(stats.selected != 0)
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            err.log();
            process::exit(2);
        }
    }
}
