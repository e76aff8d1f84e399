use crate::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Name of the optional per-registry config file, looked up in the registry root.
pub const CONFIG_FILE_NAME: &str = "registry.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    /// Verbose mode (not stored in config file)
    #[serde(skip)]
    pub verbose: bool,
}

/// Directory names, relative to the registry root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_agents_dir")]
    pub agents_dir: String,

    #[serde(default = "default_knowledge_dir")]
    pub knowledge_dir: String,

    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            agents_dir: default_agents_dir(),
            knowledge_dir: default_knowledge_dir(),
            dist_dir: default_dist_dir(),
        }
    }
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_agents_dir() -> String {
    "agents".to_string()
}

fn default_knowledge_dir() -> String {
    "knowledge".to_string()
}

fn default_dist_dir() -> String {
    "dist".to_string()
}

impl Config {
    /// Load configuration from `registry.toml` in the registry root, falling
    /// back to built-in defaults when the file does not exist.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        let config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Every configured directory must stay inside the registry root.
    fn validate(&self) -> Result<()> {
        let entries = [
            ("data_dir", &self.paths.data_dir),
            ("agents_dir", &self.paths.agents_dir),
            ("knowledge_dir", &self.paths.knowledge_dir),
            ("dist_dir", &self.paths.dist_dir),
        ];

        for (key, value) in entries {
            if value.trim().is_empty() {
                return Err(RegistryError::InvalidConfig(format!(
                    "paths.{} cannot be empty",
                    key
                )));
            }
            let path = Path::new(value);
            let escapes = path.is_absolute()
                || path
                    .components()
                    .any(|c| matches!(c, Component::ParentDir | Component::RootDir));
            if escapes {
                return Err(RegistryError::InvalidConfig(format!(
                    "paths.{} must be a relative path inside the registry root: {}",
                    key, value
                )));
            }
        }

        Ok(())
    }
}

/// Resolved on-disk locations for one registry.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
    data_dir: PathBuf,
    agents_dir: PathBuf,
    knowledge_dir: PathBuf,
    dist_dir: PathBuf,
}

impl Layout {
    pub fn new(root: &Path, config: &Config) -> Self {
        Self {
            root: root.to_path_buf(),
            data_dir: root.join(&config.paths.data_dir),
            agents_dir: root.join(&config.paths.agents_dir),
            knowledge_dir: root.join(&config.paths.knowledge_dir),
            dist_dir: root.join(&config.paths.dist_dir),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn agents_dir(&self) -> &Path {
        &self.agents_dir
    }

    pub fn knowledge_dir(&self) -> &Path {
        &self.knowledge_dir
    }

    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }

    /// Resolve a manifest `path` field against the registry root.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Agent documents live at `<agents_dir>/AGENTS.<name>.md`.
    pub fn agent_file(&self, agent_name: &str) -> PathBuf {
        self.agents_dir.join(format!("AGENTS.{}.md", agent_name))
    }
}
