//! Application asset directory
//!
//! Assets are looked up under the application's own directory, never under
//! the process working directory, so launching from a shortcut or another
//! folder still finds the icon.

use crate::{Error, Result};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Root directory that bundled assets are resolved against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDir {
    root: PathBuf,
}

impl AssetDir {
    /// Use an explicit root, typically the host's resource directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory containing the running executable
    pub fn beside_executable() -> Result<Self> {
        let exe = std::env::current_exe()?;
        let root = exe
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| Error::InvalidAssetPath { path: exe.clone() })?;
        Ok(Self::new(root))
    }

    /// Root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a relative asset path against the root.
    ///
    /// The file is not required to exist yet.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> Result<PathBuf> {
        let relative = relative.as_ref();

        let mut resolved = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                _ => {
                    return Err(Error::InvalidAssetPath {
                        path: relative.to_path_buf(),
                    })
                }
            }
        }

        if resolved == self.root {
            return Err(Error::InvalidAssetPath {
                path: relative.to_path_buf(),
            });
        }

        debug!(asset = %relative.display(), path = %resolved.display(), "Resolved asset");
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_under_root() {
        let assets = AssetDir::new("/opt/pdfdesk");
        let icon = assets.resolve("assets/icon.png").unwrap();
        assert_eq!(icon, Path::new("/opt/pdfdesk/assets/icon.png"));
    }

    #[test]
    fn test_skips_cur_dir() {
        let assets = AssetDir::new("/opt/pdfdesk");
        let icon = assets.resolve("./assets/./icon.png").unwrap();
        assert_eq!(icon, Path::new("/opt/pdfdesk/assets/icon.png"));
    }

    #[test]
    fn test_rejects_parent_and_absolute() {
        let assets = AssetDir::new("/opt/pdfdesk");
        assert!(matches!(
            assets.resolve("../secrets.png"),
            Err(Error::InvalidAssetPath { .. })
        ));
        assert!(matches!(
            assets.resolve("/etc/icon.png"),
            Err(Error::InvalidAssetPath { .. })
        ));
        assert!(assets.resolve("").is_err());
    }

    #[test]
    fn test_beside_executable_is_exe_parent() {
        let assets = AssetDir::beside_executable().unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(Some(assets.root()), exe.parent());
    }
}
