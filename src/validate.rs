//! Referential integrity checks across the manifests.
//!
//! Each check runs independently and collects every violation it finds; one
//! failing check never prevents the others from running. Nothing is modified:
//! extra capability or version entries are reported, not removed.

use crate::error::Result;
use crate::manifest::Lineage;
use crate::registry::Registry;
use std::collections::BTreeSet;

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub manifest: &'static str,
    pub errors: Vec<String>,
    /// Summary shown when the check passes.
    pub summary: String,
}

impl CheckResult {
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    fn from_result(manifest: &'static str, result: Result<(Vec<String>, String)>) -> Self {
        match result {
            Ok((errors, summary)) => Self {
                manifest,
                errors,
                summary,
            },
            Err(e) => Self {
                manifest,
                errors: vec![e.to_string()],
                summary: String::new(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub checks: Vec<CheckResult>,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.checks.iter().all(CheckResult::passed)
    }

    pub fn check(&self, manifest: &str) -> Option<&CheckResult> {
        self.checks.iter().find(|c| c.manifest == manifest)
    }
}

/// Keys present on one side but not the other, sorted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoverageDiff {
    pub missing: Vec<String>,
    pub extra: Vec<String>,
}

impl CoverageDiff {
    pub fn compute<'a>(
        agent_ids: impl IntoIterator<Item = &'a str>,
        keys: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let agents: BTreeSet<&str> = agent_ids.into_iter().collect();
        let keys: BTreeSet<&str> = keys.into_iter().collect();

        Self {
            missing: agents.difference(&keys).map(|s| s.to_string()).collect(),
            extra: keys.difference(&agents).map(|s| s.to_string()).collect(),
        }
    }

    fn describe(&self, missing_label: &str, extra_label: &str) -> Vec<String> {
        let mut errors = Vec::new();
        if !self.missing.is_empty() {
            errors.push(format!("{}: {}", missing_label, self.missing.join(", ")));
        }
        if !self.extra.is_empty() {
            errors.push(format!("{}: {}", extra_label, self.extra.join(", ")));
        }
        errors
    }
}

/// Run all four checks.
pub fn validate(registry: &Registry) -> ValidationReport {
    let store = registry.store();
    let lineage = store.lineage();

    let checks = vec![
        run_check("lineage.yaml", &lineage, |lineage| {
            Ok(check_files(registry, lineage))
        }),
        run_check("capabilities.yaml", &lineage, |lineage| {
            let doc = store.capabilities()?;
            let diff = CoverageDiff::compute(
                lineage.agent_ids(),
                doc.agents.keys().map(String::as_str),
            );
            Ok((
                diff.describe(
                    "Missing capability definitions",
                    "Extra capability definitions",
                ),
                format!(
                    "All {} agents have capability definitions",
                    lineage.agents.len()
                ),
            ))
        }),
        run_check("versions.yaml", &lineage, |lineage| {
            let doc = store.versions()?;
            let diff = CoverageDiff::compute(
                lineage.agent_ids(),
                doc.agents.keys().map(String::as_str),
            );
            Ok((
                diff.describe("Missing version history", "Extra version history"),
                format!("All {} agents have version history", lineage.agents.len()),
            ))
        }),
        run_check("swarms.yaml", &lineage, |lineage| {
            let doc = store.swarms()?;
            let known: BTreeSet<&str> = lineage.agent_ids().collect();
            let mut errors = Vec::new();
            for swarm in &doc.swarms {
                for id in &swarm.agents {
                    if !known.contains(id.as_str()) {
                        errors.push(format!(
                            "Swarm '{}' references unknown agent: {}",
                            swarm.name, id
                        ));
                    }
                }
            }
            Ok((errors, format!("All {} swarms are valid", doc.swarms.len())))
        }),
    ];

    ValidationReport { checks }
}

/// A broken lineage.yaml fails every check, each reporting the cause.
fn run_check<F>(manifest: &'static str, lineage: &Result<Lineage>, check: F) -> CheckResult
where
    F: FnOnce(&Lineage) -> Result<(Vec<String>, String)>,
{
    let result = match lineage {
        Ok(lineage) => check(lineage),
        Err(e) => Ok((vec![format!("Cannot load lineage: {}", e)], String::new())),
    };
    CheckResult::from_result(manifest, result)
}

/// Every template and agent path must exist on disk.
fn check_files(registry: &Registry, lineage: &Lineage) -> (Vec<String>, String) {
    let layout = registry.layout();
    let mut errors = Vec::new();

    for template in &lineage.templates {
        let path = layout.resolve(&template.path);
        if !path.exists() {
            errors.push(format!("Template file missing: {}", path.display()));
        }
    }

    for agent in &lineage.agents {
        let path = layout.resolve(&agent.path);
        if !path.exists() {
            errors.push(format!("Agent file missing: {}", path.display()));
        }
    }

    let summary = format!(
        "{} templates, {} agents validated",
        lineage.templates.len(),
        lineage.agents.len()
    );
    (errors, summary)
}
