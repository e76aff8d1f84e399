//! Registry overview data and the static HTML report built from it.

use crate::error::Result;
use crate::registry::Registry;
use chrono::Local;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Version shown in the report when an agent has no version record.
pub const DEFAULT_REPORT_VERSION: &str = "1.0.0";

/// Number of `can_do` badges shown per agent card.
const CARD_CAPABILITIES: usize = 3;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Overview {
    pub templates: usize,
    pub agents: usize,
    pub knowledge_docs: usize,
    pub swarms: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AgentSummary {
    pub id: String,
    pub parent: String,
    pub derivation_type: String,
    /// None when versions.yaml has no record for this agent.
    pub version: Option<String>,
    pub can_do: Vec<String>,
    pub cannot_do: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SwarmSummary {
    pub name: String,
    pub description: String,
    pub agents: Vec<String>,
    pub use_cases: Vec<String>,
}

/// Agents joined with their capabilities and versions, plus swarms.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegistryData {
    pub overview: Overview,
    pub agents: Vec<AgentSummary>,
    pub swarms: Vec<SwarmSummary>,
}

/// Load every manifest and join them. Missing capability or version records
/// are tolerated.
pub fn collect(registry: &Registry) -> Result<RegistryData> {
    let store = registry.store();
    let lineage = store.lineage()?;
    let capabilities = store.capabilities()?;
    let versions = store.versions()?;
    let swarms = store.swarms()?;

    let agents = lineage
        .agents
        .iter()
        .map(|agent| {
            let caps = capabilities.agents.get(&agent.id);
            AgentSummary {
                id: agent.id.clone(),
                parent: agent.lineage.parent_template.clone(),
                derivation_type: agent.lineage.derivation_type.clone(),
                version: versions
                    .agents
                    .get(&agent.id)
                    .map(|v| v.current_version.clone()),
                can_do: caps.map(|c| c.can_do.clone()).unwrap_or_default(),
                cannot_do: caps.map(|c| c.cannot_do.clone()).unwrap_or_default(),
            }
        })
        .collect();

    let overview = Overview {
        templates: lineage.templates.len(),
        agents: lineage.agents.len(),
        knowledge_docs: count_markdown(registry.layout().knowledge_dir()),
        swarms: swarms.swarms.len(),
    };

    let swarms = swarms
        .swarms
        .into_iter()
        .map(|s| SwarmSummary {
            name: s.name,
            description: s.description,
            agents: s.agents,
            use_cases: s.use_cases,
        })
        .collect();

    Ok(RegistryData {
        overview,
        agents,
        swarms,
    })
}

/// Markdown files directly inside `dir` (not recursive). Zero if it does not exist.
fn count_markdown(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .filter(|e| e.path().is_file() && e.path().extension().is_some_and(|x| x == "md"))
                .count()
        })
        .unwrap_or(0)
}

/// Build the report and write it to `<dist_dir>/index.html`.
pub fn build(registry: &Registry) -> Result<PathBuf> {
    let data = collect(registry)?;
    let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let html = render_html(&data, &generated_at);

    let dist = registry.layout().dist_dir();
    std::fs::create_dir_all(dist)?;
    let output = dist.join("index.html");
    std::fs::write(&output, html)?;
    tracing::debug!(path = %output.display(), "wrote report");

    Ok(output)
}

pub fn render_html(data: &RegistryData, generated_at: &str) -> String {
    let agent_cards: String = data.agents.iter().map(agent_card).collect();
    let swarm_cards: String = data.swarms.iter().map(swarm_card).collect();

    PAGE_TEMPLATE
        .replace("{{generated_at}}", &escape_html(generated_at))
        .replace("{{n_agents}}", &data.overview.agents.to_string())
        .replace("{{n_templates}}", &data.overview.templates.to_string())
        .replace("{{n_knowledge}}", &data.overview.knowledge_docs.to_string())
        .replace("{{n_swarms}}", &data.overview.swarms.to_string())
        .replace("{{agent_cards}}", &agent_cards)
        .replace("{{swarm_cards}}", &swarm_cards)
}

fn agent_card(agent: &AgentSummary) -> String {
    let badges: String = agent
        .can_do
        .iter()
        .take(CARD_CAPABILITIES)
        .map(|cap| format!(r#"<span class="badge can">{}</span>"#, escape_html(cap)))
        .collect::<Vec<_>>()
        .join("\n                        ");
    let version = agent.version.as_deref().unwrap_or(DEFAULT_REPORT_VERSION);

    format!(
        r#"
                <div class="agent-card">
                    <div class="agent-name">{id}</div>
                    <div class="agent-meta">Based on: {parent}</div>
                    <div class="agent-meta">Type: {derivation}</div>
                    <div class="agent-version">v{version}</div>
                    <div class="capabilities">
                        <strong>Can Do:</strong><br>
                        {badges}
                    </div>
                </div>"#,
        id = escape_html(&agent.id),
        parent = escape_html(&agent.parent),
        derivation = escape_html(&agent.derivation_type),
        version = escape_html(version),
        badges = badges,
    )
}

fn swarm_card(swarm: &SwarmSummary) -> String {
    format!(
        r#"
            <div class="swarm-card">
                <div class="swarm-name">{name}</div>
                <p>{description}</p>
                <p><strong>Team:</strong> {agents}</p>
                <p><strong>Use Cases:</strong> {use_cases}</p>
            </div>"#,
        name = escape_html(&swarm.name),
        description = escape_html(&swarm.description),
        agents = escape_html(&swarm.agents.join(", ")),
        use_cases = escape_html(&swarm.use_cases.join(", ")),
    )
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Agent Registry</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
            line-height: 1.6;
            color: #333;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            padding: 2rem;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
            background: white;
            border-radius: 16px;
            box-shadow: 0 20px 60px rgba(0,0,0,0.3);
            padding: 3rem;
        }
        header { text-align: center; margin-bottom: 3rem; }
        h1 { font-size: 3rem; color: #764ba2; margin-bottom: 0.5rem; }
        .subtitle { color: #666; font-size: 1.2rem; }
        .generated { color: #888; }
        .stats {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 1.5rem;
            margin-bottom: 3rem;
        }
        .stat-card {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 2rem;
            border-radius: 12px;
            text-align: center;
        }
        .stat-value { font-size: 3rem; font-weight: bold; }
        .stat-label { font-size: 1rem; opacity: 0.9; margin-top: 0.5rem; }
        .section { margin-bottom: 3rem; }
        h2 { color: #764ba2; margin-bottom: 1.5rem; font-size: 2rem; }
        .agent-grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
            gap: 1.5rem;
        }
        .agent-card {
            border: 2px solid #e0e0e0;
            border-radius: 12px;
            padding: 1.5rem;
        }
        .agent-card:hover { border-color: #764ba2; }
        .agent-name { font-size: 1.3rem; font-weight: bold; color: #764ba2; margin-bottom: 0.5rem; }
        .agent-meta { font-size: 0.9rem; color: #666; margin-bottom: 0.5rem; }
        .agent-version {
            display: inline-block;
            background: #667eea;
            color: white;
            padding: 0.25rem 0.75rem;
            border-radius: 20px;
            font-size: 0.85rem;
            margin-top: 0.5rem;
        }
        .capabilities { margin-top: 1rem; }
        .badge {
            display: inline-block;
            background: #f0f0f0;
            padding: 0.25rem 0.75rem;
            border-radius: 20px;
            font-size: 0.8rem;
            margin: 0.25rem;
            color: #555;
        }
        .badge.can { background: #d4edda; color: #155724; }
        .swarm-card {
            background: #f8f9fa;
            border-left: 4px solid #764ba2;
            padding: 1.5rem;
            border-radius: 8px;
            margin-bottom: 1.5rem;
        }
        .swarm-name { font-weight: bold; font-size: 1.2rem; color: #764ba2; margin-bottom: 0.5rem; }
        footer {
            text-align: center;
            margin-top: 3rem;
            padding-top: 2rem;
            border-top: 2px solid #e0e0e0;
            color: #666;
        }
    </style>
</head>
<body>
    <div class="container">
        <header>
            <h1>Agent Registry</h1>
            <p class="subtitle">Template-derived agent definitions</p>
            <p class="generated">Generated: {{generated_at}}</p>
        </header>

        <div class="stats">
            <div class="stat-card">
                <div class="stat-value">{{n_agents}}</div>
                <div class="stat-label">Agents</div>
            </div>
            <div class="stat-card">
                <div class="stat-value">{{n_templates}}</div>
                <div class="stat-label">Templates</div>
            </div>
            <div class="stat-card">
                <div class="stat-value">{{n_knowledge}}</div>
                <div class="stat-label">Knowledge Docs</div>
            </div>
            <div class="stat-card">
                <div class="stat-value">{{n_swarms}}</div>
                <div class="stat-label">Swarms</div>
            </div>
        </div>

        <section class="section">
            <h2>Agents</h2>
            <div class="agent-grid">{{agent_cards}}
            </div>
        </section>

        <section class="section">
            <h2>Swarms</h2>{{swarm_cards}}
        </section>

        <footer>
            <p>Built with agent-registry</p>
        </footer>
    </div>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Fixture;

    #[test]
    fn test_collect_joins_manifests() {
        let fx = Fixture::new();
        let data = collect(&fx.registry).unwrap();

        assert_eq!(
            data.overview,
            Overview {
                templates: 1,
                agents: 2,
                knowledge_docs: 1,
                swarms: 1,
            }
        );
        let rust = &data.agents[0];
        assert_eq!(rust.id, "rust-backend");
        assert_eq!(rust.parent, "backend-developer");
        assert_eq!(rust.version.as_deref(), Some("1.0.0"));
        assert_eq!(rust.can_do.len(), 4);
        assert_eq!(data.agents[1].version.as_deref(), Some("1.1.0"));
        assert_eq!(data.swarms[0].agents, vec!["rust-backend", "svc"]);
    }

    #[test]
    fn test_collect_tolerates_missing_records() {
        let fx = Fixture::new();
        fx.write("data/versions.yaml", "agents: {}\n");
        fx.write("data/capabilities.yaml", "agents: {}\n");

        let data = collect(&fx.registry).unwrap();
        assert!(data.agents.iter().all(|a| a.version.is_none()));
        assert!(data.agents.iter().all(|a| a.can_do.is_empty()));

        let html = render_html(&data, "now");
        assert!(html.contains("v1.0.0"));
    }

    #[test]
    fn test_render_limits_badges_and_escapes() {
        let data = RegistryData {
            overview: Overview {
                templates: 1,
                agents: 1,
                knowledge_docs: 0,
                swarms: 1,
            },
            agents: vec![AgentSummary {
                id: "web<dev>".to_string(),
                parent: "frontend".to_string(),
                derivation_type: "specialization".to_string(),
                version: Some("2.0.0".to_string()),
                can_do: vec!["one".into(), "two".into(), "three".into(), "four".into()],
                cannot_do: vec![],
            }],
            swarms: vec![SwarmSummary {
                name: "ui".to_string(),
                description: "Build & ship".to_string(),
                agents: vec!["web<dev>".to_string()],
                use_cases: vec!["Landing pages".to_string(), "Dashboards".to_string()],
            }],
        };

        let html = render_html(&data, "2024-06-01 12:00:00");
        assert!(html.contains("Generated: 2024-06-01 12:00:00"));
        assert!(html.contains("web&lt;dev&gt;"));
        assert!(!html.contains("web<dev>"));
        assert!(html.contains(r#"<span class="badge can">three</span>"#));
        assert!(!html.contains(r#"<span class="badge can">four</span>"#));
        assert!(html.contains("Build &amp; ship"));
        assert!(html.contains("Landing pages, Dashboards"));
        assert!(html.contains("v2.0.0"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_build_writes_index() {
        let fx = Fixture::new();
        let output = build(&fx.registry).unwrap();

        assert_eq!(output, fx.path("dist/index.html"));
        let html = fx.read("dist/index.html");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("rust-backend"));
        assert!(html.contains("backend-squad"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
