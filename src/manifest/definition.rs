//! Data structures for parsing the registry manifests.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Keys not modelled explicitly, kept so a rewrite does not drop them.
pub type Extra = IndexMap<String, serde_yaml::Value>;

/// `lineage.yaml`: templates and the agents derived from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lineage {
    pub templates: Vec<Template>,
    pub agents: Vec<AgentEntry>,
}

impl Lineage {
    pub fn template(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn agent(&self, id: &str) -> Option<&AgentEntry> {
        self.agents.iter().find(|a| a.id == id)
    }

    pub fn agent_ids(&self) -> impl Iterator<Item = &str> {
        self.agents.iter().map(|a| a.id.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub path: String,

    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentEntry {
    pub id: String,
    pub path: String,
    pub lineage: AgentLineage,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_parameters: Option<GenerationParameters>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AgentMetadata>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl AgentEntry {
    /// Domain used when regenerating: generation parameters win over metadata.
    pub fn domain(&self) -> Option<&str> {
        let from_params = self
            .generation_parameters
            .as_ref()
            .and_then(|p| p.domain.as_deref())
            .filter(|d| !d.is_empty());

        from_params.or_else(|| {
            self.metadata
                .as_ref()
                .and_then(|m| m.domain.as_deref())
                .filter(|d| !d.is_empty())
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentLineage {
    pub parent_template: String,
    pub derivation_type: String,

    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GenerationParameters {
    #[serde(default)]
    pub domain: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AgentMetadata {
    #[serde(default)]
    pub domain: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// `capabilities.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapabilitiesDoc {
    pub agents: IndexMap<String, CapabilityRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CapabilityRecord {
    #[serde(default)]
    pub can_do: Vec<String>,

    #[serde(default)]
    pub cannot_do: Vec<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// `versions.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionsDoc {
    pub agents: IndexMap<String, VersionRecord>,

    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionRecord {
    #[serde(deserialize_with = "scalar_string")]
    pub current_version: String,

    #[serde(default)]
    pub versions: Vec<VersionEntry>,

    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionEntry {
    #[serde(deserialize_with = "scalar_string")]
    pub version: String,

    #[serde(deserialize_with = "scalar_string")]
    pub date: String,

    #[serde(default)]
    pub changes: String,

    #[serde(default = "unknown_template_version", deserialize_with = "scalar_string")]
    pub template_version: String,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Placeholder written when the template version still needs a manual update.
pub const UNKNOWN_TEMPLATE_VERSION: &str = "unknown";

fn unknown_template_version() -> String {
    UNKNOWN_TEMPLATE_VERSION.to_string()
}

/// `swarms.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwarmsDoc {
    pub swarms: Vec<SwarmEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwarmEntry {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub agents: Vec<String>,

    #[serde(default)]
    pub use_cases: Vec<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Accept unquoted YAML scalars (`1.0`, `2024-01-01`) where a string is expected.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a scalar value, found {:?}",
            other
        ))),
    }
}
