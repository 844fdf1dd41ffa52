use anyhow::{Context, Result};
use log::debug;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

pub type Environment = BTreeMap<String, String>;

/// Written to the control file when neither the config nor `-v` names a version.
pub const PLACEHOLDER_VERSION: &str = "0.0.0";
pub const VERSION_VARIABLE: &str = "APP_VERSION";

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct Package {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub architecture: String,
    #[serde(default)]
    pub maintainer: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct Service {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub environment: Environment,
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct Configuration {
    #[serde(default)]
    pub package: Package,
    #[serde(default)]
    pub service: Service,
}

impl Configuration {
    /// Returns the record the artifacts are rendered from.
    ///
    /// A non-empty `version` replaces the configured one and is exported to the
    /// service as `APP_VERSION`. An empty `service.user` falls back to the
    /// package name.
    pub fn with_overrides(&self, version: Option<&str>) -> Configuration {
        let mut config = self.clone();

        match version.filter(|v| !v.is_empty()) {
            Some(version) => {
                debug!("overriding package version with {version:?}");
                config.package.version = version.to_owned();
                config
                    .service
                    .environment
                    .insert(VERSION_VARIABLE.to_owned(), version.to_owned());
            }
            None if config.package.version.is_empty() => {
                debug!("no package version configured, using {PLACEHOLDER_VERSION}");
                config.package.version = PLACEHOLDER_VERSION.to_owned();
            }
            None => {}
        }

        if config.service.user.is_empty() {
            config.service.user = config.package.name.clone();
        }

        config
    }

    /// `<name>-<version>`, the directory the package tree is nested in.
    pub fn package_root_name(&self) -> String {
        format!("{}-{}", self.package.name, self.package.version)
    }
}

pub fn load_config(config_path: &Path) -> Result<Configuration> {
    load_file(config_path).with_context(|| format!("load config file {config_path:?}"))
}

pub fn load_file<T>(filename: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    let mut buf = String::new();
    let mut f = File::open(filename).context("open file")?;
    f.read_to_string(&mut buf).context("read file")?;
    let data = serde_yaml::from_str::<T>(&buf).context("deserialize file contents")?;
    Ok(data)
}

/// Expands `~` and environment variables in a path given on the command line.
pub fn expand_path(path: &Path) -> Result<PathBuf> {
    let expanded = shellexpand::full(&path.to_string_lossy())
        .with_context(|| format!("expand path {path:?}"))?
        .to_string();

    Ok(PathBuf::from(expanded))
}
