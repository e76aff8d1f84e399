//! Agent lifecycle: create, regenerate and version bookkeeping.
//!
//! Agents are plain markdown documents rendered from a template. Creating an
//! agent never overwrites an existing document; regenerating always requires
//! one and keeps a timestamped backup of the previous content. Neither
//! operation registers anything in the manifests, which stay under operator
//! control.

pub mod create;
pub mod regenerate;
pub mod version;

pub use create::create_agent;
pub use regenerate::{regenerate_agent, regenerate_all, RegenerateOutcome, Regenerated};
pub use version::{update_version, VersionUpdate};

use crate::error::{RegistryError, Result};
use crate::manifest::Lineage;
use crate::registry::Registry;
use std::path::{Path, PathBuf};

/// Resolve a template id to its text file.
fn template_path(registry: &Registry, lineage: &Lineage, template_id: &str) -> Result<PathBuf> {
    lineage
        .template(template_id)
        .map(|t| registry.layout().resolve(&t.path))
        .ok_or_else(|| RegistryError::UnknownTemplate(template_id.to_string()))
}

fn read_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => RegistryError::NotFound(path.to_path_buf()),
        _ => RegistryError::Io(e),
    })
}
