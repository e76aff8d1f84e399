use crate::config::CONFIG_FILE_NAME;
use crate::error::{RegistryError, Result};
use std::path::{Path, PathBuf};

/// Manifest whose presence marks a directory as a registry root.
const ROOT_MARKER: &str = "data/lineage.yaml";

#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    /// Detect the registry root.
    /// Priority: explicit override, then the nearest ancestor of the current
    /// directory holding a registry marker, then the current directory.
    pub fn detect(root_override: Option<&Path>) -> Result<Self> {
        if let Some(root) = root_override {
            if !root.is_dir() {
                return Err(RegistryError::NotFound(root.to_path_buf()));
            }
            return Ok(Self {
                root: canonical_or_self(root),
            });
        }

        let cwd = std::env::current_dir()?;
        Ok(Self::detect_from(&cwd))
    }

    /// Walk up from `start` looking for a registry root marker.
    pub fn detect_from(start: &Path) -> Self {
        let root = start
            .ancestors()
            .find(|dir| is_registry_root(dir))
            .unwrap_or(start);

        Self {
            root: canonical_or_self(root),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_registry_root(dir: &Path) -> bool {
    dir.join(ROOT_MARKER).is_file() || dir.join(CONFIG_FILE_NAME).is_file()
}

fn canonical_or_self(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_detect_from_nested_directory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("data")).unwrap();
        fs::write(dir.path().join(ROOT_MARKER), "templates: []\nagents: []\n").unwrap();
        let nested = dir.path().join("agents/deep");
        fs::create_dir_all(&nested).unwrap();

        let project = Project::detect_from(&nested);
        assert_eq!(project.root(), dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_detect_from_config_marker() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();
        let nested = dir.path().join("knowledge");
        fs::create_dir_all(&nested).unwrap();

        let project = Project::detect_from(&nested);
        assert_eq!(project.root(), dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_detect_falls_back_to_start() {
        let dir = TempDir::new().unwrap();
        let project = Project::detect_from(dir.path());
        assert_eq!(project.root(), dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_detect_override_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let result = Project::detect(Some(&missing));
        assert!(matches!(result, Err(RegistryError::NotFound(_))));

        let project = Project::detect(Some(dir.path())).unwrap();
        assert_eq!(project.root(), dir.path().canonicalize().unwrap());
    }
}
