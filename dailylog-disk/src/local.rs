use dailylog_framework::Storage;
use std::path::{Component, Path, PathBuf};

/// storage rooted at a directory on the local filesystem
#[derive(Debug, Clone)]
pub struct LocalDisk {
    root: PathBuf,
}

impl LocalDisk {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// only plain relative names stay inside the root
    fn is_contained(name: &str) -> bool {
        !name.is_empty()
            && Path::new(name)
                .components()
                .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
    }
}

impl Storage for LocalDisk {
    fn exists(&self, name: &str) -> bool {
        if !Self::is_contained(name) {
            log::debug!("LocalDisk: refusing '{}' outside {}", name, self.root.display());
            return false;
        }
        self.path(name).is_file()
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}
