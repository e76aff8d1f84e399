use super::{read_template, template_path};
use crate::error::{RegistryError, Result};
use crate::registry::Registry;
use crate::template;
use std::path::PathBuf;

/// Create a new agent document from a template.
///
/// Fails with `UnknownTemplate` if the template id is not in lineage.yaml and
/// with `AlreadyExists` if the agent document is already present. The agent
/// is not added to any manifest.
pub fn create_agent(
    registry: &Registry,
    template_id: &str,
    agent_name: &str,
    domain: Option<&str>,
) -> Result<PathBuf> {
    let lineage = registry.store().lineage()?;
    let template_path = template_path(registry, &lineage, template_id)?;
    let agent_path = registry.layout().agent_file(agent_name);

    if agent_path.exists() {
        return Err(RegistryError::AlreadyExists(agent_name.to_string()));
    }

    let content = template::render(&read_template(&template_path)?, domain);

    if let Some(parent) = agent_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&agent_path, content)?;
    tracing::debug!(agent = agent_name, template = template_id, path = %agent_path.display(), "created agent");

    Ok(agent_path)
}
