mod artifact;
mod config;
mod filesystem;
mod generate;
mod handlebars;
mod logger;
mod options;
mod template;

use anyhow::Result;
use clap::Parser;
use log::info;
use options::Options;

fn main() -> Result<()> {
    let opts = Options::parse();

    logger::init(opts.verbosity, opts.quiet)?;

    let config_path = config::expand_path(&opts.config)?;
    let output = config::expand_path(&opts.output)?;

    let config = config::load_config(&config_path)?;

    let written = generate::generate(config, &output, opts)?;
    info!("generated {} files", written.len());

    Ok(())
}
