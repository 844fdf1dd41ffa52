use crate::{
    config::{Configuration, Environment},
    filesystem::{create_file, PackageLayout},
    handlebars::render,
    template::Template,
};
use anyhow::{Context, Result};
use handlebars::Handlebars;
use log::{info, trace};
use serde::Serialize;
use std::{io::Write, path::PathBuf};

#[derive(Debug, Serialize)]
struct ControlVariables<'a> {
    name: &'a str,
    architecture: &'a str,
    maintainer: &'a str,
    description: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct HookVariables<'a> {
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct ServiceVariables<'a> {
    executable: &'a str,
    description: &'a str,
    workingdir: String,
    user: &'a str,
    environment: &'a Environment,
}

/// Renders `template` and writes it to its place in `layout`.
fn write_artifact<T>(
    layout: &PackageLayout,
    handlebars: &Handlebars<'_>,
    template: Template,
    config: &Configuration,
    variables: &T,
) -> Result<PathBuf>
where
    T: Serialize,
{
    let path = layout.join(template.relative_path(&config.package.name));
    info!("writing {template} to {path:?}");

    let mut file = create_file(&path, template.mode())?;
    let rendered = render(handlebars, template.source(), variables)
        .with_context(|| format!("render {template} template"))?;
    trace!("{template} rendered to {} bytes", rendered.len());
    file.write_all(rendered.as_bytes())
        .with_context(|| format!("write {path:?}"))?;

    Ok(path)
}

pub fn control(
    layout: &PackageLayout,
    handlebars: &Handlebars<'_>,
    config: &Configuration,
) -> Result<PathBuf> {
    let package = &config.package;
    let variables = ControlVariables {
        name: &package.name,
        architecture: &package.architecture,
        maintainer: &package.maintainer,
        description: &package.description,
        version: &package.version,
    };
    write_artifact(layout, handlebars, Template::Control, config, &variables)
}

fn hook(
    layout: &PackageLayout,
    handlebars: &Handlebars<'_>,
    config: &Configuration,
    template: Template,
) -> Result<PathBuf> {
    let variables = HookVariables {
        name: &config.package.name,
    };
    write_artifact(layout, handlebars, template, config, &variables)
}

pub fn preinst(
    layout: &PackageLayout,
    handlebars: &Handlebars<'_>,
    config: &Configuration,
) -> Result<PathBuf> {
    hook(layout, handlebars, config, Template::Preinst)
}

pub fn postinst(
    layout: &PackageLayout,
    handlebars: &Handlebars<'_>,
    config: &Configuration,
) -> Result<PathBuf> {
    hook(layout, handlebars, config, Template::Postinst)
}

pub fn prerm(
    layout: &PackageLayout,
    handlebars: &Handlebars<'_>,
    config: &Configuration,
) -> Result<PathBuf> {
    hook(layout, handlebars, config, Template::Prerm)
}

pub fn service(
    layout: &PackageLayout,
    handlebars: &Handlebars<'_>,
    config: &Configuration,
) -> Result<PathBuf> {
    let variables = ServiceVariables {
        executable: &config.package.name,
        description: &config.package.description,
        workingdir: format!("/home/{}", config.service.user),
        user: &config.service.user,
        environment: &config.service.environment,
    };
    write_artifact(layout, handlebars, Template::Service, config, &variables)
}
