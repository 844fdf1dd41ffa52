use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

const CONTROL: &str = include_str!("templates/control.hbs");
const PREINST: &str = include_str!("templates/preinst.hbs");
const POSTINST: &str = include_str!("templates/postinst.hbs");
const PRERM: &str = include_str!("templates/prerm.hbs");
const SERVICE: &str = include_str!("templates/service.hbs");

pub const DEBIAN_DIR: &str = "DEBIAN";
pub const SYSTEMD_DIR: &str = "etc/systemd/system";
pub const BIN_DIR: &str = "usr/local/bin";

/// The bundled templates, one per generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Control,
    Preinst,
    Postinst,
    Prerm,
    Service,
}

impl Template {
    pub const ALL: [Template; 5] = [
        Template::Control,
        Template::Preinst,
        Template::Postinst,
        Template::Prerm,
        Template::Service,
    ];

    pub fn source(self) -> &'static str {
        match self {
            Template::Control => CONTROL,
            Template::Preinst => PREINST,
            Template::Postinst => POSTINST,
            Template::Prerm => PRERM,
            Template::Service => SERVICE,
        }
    }

    pub fn mode(self) -> u32 {
        match self {
            Template::Control => 0o644,
            _ => 0o775,
        }
    }

    /// Location of the rendered file relative to the package root.
    pub fn relative_path(self, package_name: &str) -> PathBuf {
        let debian = Path::new(DEBIAN_DIR);
        match self {
            Template::Control => debian.join("control"),
            Template::Preinst => debian.join("preinst"),
            Template::Postinst => debian.join("postinst"),
            Template::Prerm => debian.join("prerm"),
            Template::Service => Path::new(SYSTEMD_DIR).join(format!("{package_name}.service")),
        }
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Template::Control => "control",
            Template::Preinst => "preinst",
            Template::Postinst => "postinst",
            Template::Prerm => "prerm",
            Template::Service => "service",
        }
        .fmt(f)
    }
}
