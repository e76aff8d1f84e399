//! Load and save manifests from the registry data directory.

use super::definition::{CapabilitiesDoc, Lineage, SwarmsDoc, VersionsDoc};
use crate::error::{RegistryError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// The manifests kept in the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Manifest {
    Lineage,
    Capabilities,
    Versions,
    Swarms,
}

impl Manifest {
    pub fn file_name(&self) -> &'static str {
        match self {
            Manifest::Lineage => "lineage.yaml",
            Manifest::Capabilities => "capabilities.yaml",
            Manifest::Versions => "versions.yaml",
            Manifest::Swarms => "swarms.yaml",
        }
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Reads and writes manifests. Holds no state beyond the data directory;
/// every load goes back to disk.
#[derive(Debug, Clone)]
pub struct ManifestStore {
    data_dir: PathBuf,
}

impl ManifestStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path(&self, manifest: Manifest) -> PathBuf {
        self.data_dir.join(manifest.file_name())
    }

    /// Deserialize a manifest into `T`.
    pub fn load<T: DeserializeOwned>(&self, manifest: Manifest) -> Result<T> {
        let path = self.path(manifest);
        let contents = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => RegistryError::NotFound(path.clone()),
            _ => RegistryError::Io(e),
        })?;

        tracing::debug!(manifest = %manifest, path = %path.display(), "loaded manifest");
        serde_yaml::from_str(&contents).map_err(|source| RegistryError::Parse { path, source })
    }

    /// Serialize `doc` and overwrite the manifest file in full.
    pub fn save<T: Serialize>(&self, manifest: Manifest, doc: &T) -> Result<()> {
        let contents = serde_yaml::to_string(doc).map_err(|source| RegistryError::Serialize {
            name: manifest.file_name().to_string(),
            source,
        })?;

        let path = self.path(manifest);
        std::fs::write(&path, contents)?;
        tracing::debug!(manifest = %manifest, path = %path.display(), "saved manifest");
        Ok(())
    }

    pub fn lineage(&self) -> Result<Lineage> {
        self.load(Manifest::Lineage)
    }

    pub fn capabilities(&self) -> Result<CapabilitiesDoc> {
        self.load(Manifest::Capabilities)
    }

    pub fn versions(&self) -> Result<VersionsDoc> {
        self.load(Manifest::Versions)
    }

    pub fn swarms(&self) -> Result<SwarmsDoc> {
        self.load(Manifest::Swarms)
    }

    pub fn save_versions(&self, doc: &VersionsDoc) -> Result<()> {
        self.save(Manifest::Versions, doc)
    }
}
