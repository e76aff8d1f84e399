use crate::config::{Config, Layout};
use crate::manifest::ManifestStore;
use std::path::Path;

/// Everything an operation needs to find the registry on disk.
#[derive(Debug, Clone)]
pub struct Registry {
    layout: Layout,
    store: ManifestStore,
}

impl Registry {
    pub fn new(root: &Path, config: &Config) -> Self {
        let layout = Layout::new(root, config);
        let store = ManifestStore::new(layout.data_dir());
        Self { layout, store }
    }

    /// Registry rooted at `root` with the default directory layout.
    pub fn with_defaults(root: &Path) -> Self {
        Self::new(root, &Config::default())
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn store(&self) -> &ManifestStore {
        &self.store
    }
}
