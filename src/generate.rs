use super::handlebars::create_new_handlebars;
use crate::{artifact, config::Configuration, filesystem::PackageLayout, options::Options};
use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

/// Picks the package root: `<output>/<name>-<version>` when the version came
/// from the command line, `<output>` otherwise.
pub fn package_root(output: &Path, config: &Configuration, opts: &Options) -> PathBuf {
    match opts.version.as_deref() {
        Some(version) if !version.is_empty() => output.join(config.package_root_name()),
        _ => output.to_path_buf(),
    }
}

pub fn generate(config: Configuration, output: &Path, opts: Options) -> Result<Vec<PathBuf>> {
    let handlebars = create_new_handlebars();
    let config = config.with_overrides(opts.version.as_deref());

    let layout = PackageLayout::new(package_root(output, &config, &opts));
    info!("generating package tree in {:?}", layout.root());
    layout.create().context("create package directories")?;

    let written = vec![
        artifact::control(&layout, &handlebars, &config).context("write control file")?,
        artifact::preinst(&layout, &handlebars, &config).context("write preinst hook")?,
        artifact::postinst(&layout, &handlebars, &config).context("write postinst hook")?,
        artifact::prerm(&layout, &handlebars, &config).context("write prerm hook")?,
        artifact::service(&layout, &handlebars, &config).context("write service unit")?,
    ];

    Ok(written)
}
