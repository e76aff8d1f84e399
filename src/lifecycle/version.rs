use crate::error::{RegistryError, Result};
use crate::manifest::definition::{Extra, UNKNOWN_TEMPLATE_VERSION};
use crate::manifest::VersionEntry;
use crate::registry::Registry;
use chrono::{Local, NaiveDate};

/// What changed in versions.yaml.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionUpdate {
    pub agent_id: String,
    pub previous_version: String,
    pub new_version: String,
    /// False when the version string does not parse as semver. Not rejected.
    pub is_semver: bool,
}

/// Append a version entry for an agent and make it the current version.
pub fn update_version(
    registry: &Registry,
    agent_id: &str,
    new_version: &str,
    changes: &str,
) -> Result<VersionUpdate> {
    update_version_on(
        registry,
        agent_id,
        new_version,
        changes,
        Local::now().date_naive(),
    )
}

/// Same as [`update_version`] with an explicit date for the new entry.
pub fn update_version_on(
    registry: &Registry,
    agent_id: &str,
    new_version: &str,
    changes: &str,
    today: NaiveDate,
) -> Result<VersionUpdate> {
    let store = registry.store();
    let mut doc = store.versions()?;

    let record = doc
        .agents
        .get_mut(agent_id)
        .ok_or_else(|| RegistryError::UnknownAgent(agent_id.to_string()))?;

    record.versions.push(VersionEntry {
        version: new_version.to_string(),
        date: today.format("%Y-%m-%d").to_string(),
        changes: changes.to_string(),
        template_version: UNKNOWN_TEMPLATE_VERSION.to_string(),
        extra: Extra::new(),
    });
    let previous_version = std::mem::replace(&mut record.current_version, new_version.to_string());

    store.save_versions(&doc)?;

    Ok(VersionUpdate {
        agent_id: agent_id.to_string(),
        previous_version,
        new_version: new_version.to_string(),
        is_semver: semver::Version::parse(new_version).is_ok(),
    })
}
