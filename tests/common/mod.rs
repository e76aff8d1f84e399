#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TEMPLATE: &str = "# {{DOMAIN}} Engineer\n\nFocus: {{domain}}\n";

/// Registry with agents a1 and a2, both fully described.
pub struct TestRegistry {
    pub dir: TempDir,
}

impl TestRegistry {
    pub fn new() -> Self {
        let reg = Self {
            dir: TempDir::new().unwrap(),
        };

        reg.write(
            "data/lineage.yaml",
            r#"templates:
  - id: engineer
    path: templates/AGENTS.engineer.md
agents:
  - id: a1
    path: agents/AGENTS.a1.md
    lineage:
      parent_template: engineer
      derivation_type: specialization
    generation_parameters:
      domain: rust
  - id: a2
    path: agents/AGENTS.a2.md
    lineage:
      parent_template: engineer
      derivation_type: specialization
    metadata:
      domain: data science
"#,
        );
        reg.write(
            "data/capabilities.yaml",
            "agents:\n  a1:\n    can_do: [Systems work]\n    cannot_do: []\n  a2:\n    can_do: [Notebooks]\n    cannot_do: []\n",
        );
        reg.write(
            "data/versions.yaml",
            r#"agents:
  a1:
    current_version: 1.0.0
    versions:
      - version: 1.0.0
        date: '2024-01-01'
        changes: Initial creation
        template_version: 1.0.0
  a2:
    current_version: 1.1.0
    versions:
      - version: 1.0.0
        date: '2024-01-01'
        changes: Initial creation
        template_version: 1.0.0
      - version: 1.1.0
        date: '2024-02-01'
        changes: More notebooks
        template_version: 1.0.0
"#,
        );
        reg.write(
            "data/swarms.yaml",
            "swarms:\n  - name: pair\n    description: Two agents\n    agents: [a1, a2]\n    use_cases: [Pairing, Reviews, Docs]\n",
        );
        reg.write("templates/AGENTS.engineer.md", TEMPLATE);
        reg.write("agents/AGENTS.a1.md", "# a1 original\n");
        reg.write("agents/AGENTS.a2.md", "# a2 original\n");
        reg
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).unwrap()
    }

    pub fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("agent-registry"));
        cmd.current_dir(self.root());
        cmd
    }

    pub fn backups(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.path("agents"))
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|n| n.ends_with(".bak"))
            .collect();
        names.sort();
        names
    }
}
