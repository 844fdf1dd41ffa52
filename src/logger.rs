use anyhow::{Context, Result};
use log::LevelFilter;
use simple_logger::SimpleLogger;

fn level(verbosity: u8, quiet: bool) -> LevelFilter {
    match (verbosity, quiet) {
        (_, true) => LevelFilter::Error,
        (0, false) => LevelFilter::Info,
        (1, false) => LevelFilter::Debug,
        (_, false) => LevelFilter::Trace,
    }
}

pub fn init(verbosity: u8, quiet: bool) -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Error)
        .with_module_level("debgen", level(verbosity, quiet))
        .init()
        .context("cannot set logger")
}
