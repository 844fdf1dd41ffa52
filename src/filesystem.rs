use crate::template::{BIN_DIR, DEBIAN_DIR, SYSTEMD_DIR};
use anyhow::{Context, Result};
use log::debug;
use std::{
    fs::{self, File, OpenOptions, Permissions},
    os::unix::fs::{OpenOptionsExt, PermissionsExt},
    path::{Path, PathBuf},
};

/// The staging tree a package is assembled in.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageLayout {
    root: PathBuf,
}

impl PackageLayout {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Creates the control, systemd and binary directories. Existing
    /// directories are left alone.
    pub fn create(&self) -> Result<()> {
        for dir in [DEBIAN_DIR, SYSTEMD_DIR, BIN_DIR] {
            let path = self.join(dir);
            debug!("creating directory {path:?}");
            fs::create_dir_all(&path).with_context(|| format!("create directory {path:?}"))?;
        }

        Ok(())
    }
}

/// Creates `path`, truncating it if it exists, and sets its permissions to
/// `mode` regardless of the umask or the mode of a previous file.
pub fn create_file(path: &Path, mode: u32) -> Result<File> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(mode)
        .open(path)
        .with_context(|| format!("create file {path:?}"))?;
    file.set_permissions(Permissions::from_mode(mode))
        .with_context(|| format!("set permissions of {path:?}"))?;

    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempdir::TempDir;

    fn mode_of(path: &Path) -> Result<u32> {
        Ok(fs::metadata(path)?.permissions().mode() & 0o777)
    }

    #[test]
    fn should_create_directory_tree() -> Result<()> {
        let dir = TempDir::new("layout")?;
        let layout = PackageLayout::new(dir.path().join("demo-1.2"));

        layout.create()?;

        assert!(layout.join("DEBIAN").is_dir());
        assert!(layout.join("etc/systemd/system").is_dir());
        assert!(layout.join("usr/local/bin").is_dir());
        assert_eq!(fs::read_dir(layout.join("usr/local/bin"))?.count(), 0);

        Ok(())
    }

    #[test]
    fn should_tolerate_existing_directories() -> Result<()> {
        let dir = TempDir::new("layout")?;
        let layout = PackageLayout::new(dir.path().to_path_buf());

        layout.create()?;
        layout.create()?;

        Ok(())
    }

    #[test]
    fn should_fail_when_root_is_a_file() -> Result<()> {
        let dir = TempDir::new("layout")?;
        let root = dir.path().join("file");
        fs::write(&root, "not a directory")?;

        assert!(PackageLayout::new(root).create().is_err());

        Ok(())
    }

    #[test]
    fn should_create_file_with_mode() -> Result<()> {
        let dir = TempDir::new("filesystem")?;
        let path = dir.path().join("postinst");

        create_file(&path, 0o775)?.write_all(b"#!/bin/sh\n")?;

        assert_eq!(mode_of(&path)?, 0o775);
        assert_eq!(fs::read_to_string(&path)?, "#!/bin/sh\n");

        Ok(())
    }

    #[test]
    fn should_truncate_and_reset_mode_of_existing_file() -> Result<()> {
        let dir = TempDir::new("filesystem")?;
        let path = dir.path().join("control");
        fs::write(&path, "a much longer previous content")?;
        fs::set_permissions(&path, Permissions::from_mode(0o600))?;

        create_file(&path, 0o644)?.write_all(b"new")?;

        assert_eq!(fs::read_to_string(&path)?, "new");
        assert_eq!(mode_of(&path)?, 0o644);

        Ok(())
    }

    #[test]
    fn should_fail_when_parent_is_missing() -> Result<()> {
        let dir = TempDir::new("filesystem")?;

        assert!(create_file(&dir.path().join("missing/control"), 0o644).is_err());

        Ok(())
    }
}
