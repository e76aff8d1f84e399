use super::{read_template, template_path};
use crate::error::{RegistryError, Result};
use crate::registry::Registry;
use crate::template;
use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};

/// Format of the timestamp embedded in backup file names.
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Result of a successful regeneration.
#[derive(Debug, Clone, PartialEq)]
pub struct Regenerated {
    pub agent_path: PathBuf,
    pub backup_path: PathBuf,
    pub template_id: String,
}

/// Per-agent result of a batch regeneration.
#[derive(Debug)]
pub struct RegenerateOutcome {
    pub agent_id: String,
    pub domain: Option<String>,
    pub result: Result<Regenerated>,
}

impl RegenerateOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Regenerate an existing agent from its parent template, backing up the
/// current document first.
pub fn regenerate_agent(
    registry: &Registry,
    agent_id: &str,
    domain: Option<&str>,
) -> Result<Regenerated> {
    regenerate_agent_at(registry, agent_id, domain, Local::now().naive_local())
}

/// Same as [`regenerate_agent`] with an explicit clock reading for the backup name.
pub fn regenerate_agent_at(
    registry: &Registry,
    agent_id: &str,
    domain: Option<&str>,
    now: NaiveDateTime,
) -> Result<Regenerated> {
    let lineage = registry.store().lineage()?;
    let agent = lineage
        .agent(agent_id)
        .ok_or_else(|| RegistryError::UnknownAgent(agent_id.to_string()))?;
    let template_id = agent.lineage.parent_template.clone();
    let template_path = template_path(registry, &lineage, &template_id)?;

    let agent_path = registry.layout().agent_file(agent_id);
    if !agent_path.exists() {
        return Err(RegistryError::MissingAgentFile(agent_path));
    }

    let content = template::render(&read_template(&template_path)?, domain);

    // Same-second collisions overwrite the earlier backup.
    let backup_path = backup_path(&agent_path, now);
    std::fs::copy(&agent_path, &backup_path)?;
    tracing::debug!(agent = agent_id, backup = %backup_path.display(), "backed up agent");

    std::fs::write(&agent_path, content)?;

    Ok(Regenerated {
        agent_path,
        backup_path,
        template_id,
    })
}

/// Regenerate every agent in lineage.yaml using its recorded domain.
///
/// A failure on one agent is recorded in its outcome and the batch continues.
pub fn regenerate_all(registry: &Registry) -> Result<Vec<RegenerateOutcome>> {
    let lineage = registry.store().lineage()?;

    let outcomes = lineage
        .agents
        .iter()
        .map(|agent| {
            let domain = agent.domain().map(str::to_string);
            let result = regenerate_agent(registry, &agent.id, domain.as_deref());
            if let Err(e) = &result {
                tracing::warn!(agent = %agent.id, error = %e, "regeneration failed");
            }
            RegenerateOutcome {
                agent_id: agent.id.clone(),
                domain,
                result,
            }
        })
        .collect();

    Ok(outcomes)
}

/// `AGENTS.x.md` -> `AGENTS.x.md.<YYYYMMDD_HHMMSS>.bak`
pub fn backup_path(agent_path: &Path, now: NaiveDateTime) -> PathBuf {
    let file_name = agent_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stamp = now.format(BACKUP_TIMESTAMP_FORMAT);
    agent_path.with_file_name(format!("{}.{}.bak", file_name, stamp))
}
