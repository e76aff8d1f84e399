//! Shared fixtures for unit tests.

use crate::registry::Registry;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TEMPLATE_TEXT: &str = "# {{DOMAIN}} Backend Developer\n\nYou build {{domain}} services.\n";

pub const LINEAGE: &str = r#"templates:
  - id: backend-developer
    path: templates/AGENTS.backend-developer.md
agents:
  - id: rust-backend
    path: agents/AGENTS.rust-backend.md
    lineage:
      parent_template: backend-developer
      derivation_type: specialization
    generation_parameters:
      domain: rust
  - id: svc
    path: agents/AGENTS.svc.md
    lineage:
      parent_template: backend-developer
      derivation_type: specialization
    metadata:
      domain: go
"#;

pub const CAPABILITIES: &str = r#"agents:
  rust-backend:
    can_do:
      - Design async services
      - Write safe FFI
      - Tune allocators
      - Profile hot paths
    cannot_do:
      - Frontend work
  svc:
    can_do:
      - Build HTTP APIs
    cannot_do: []
"#;

pub const VERSIONS: &str = r#"agents:
  rust-backend:
    current_version: 1.0.0
    versions:
      - version: 1.0.0
        date: '2024-01-10'
        changes: Initial creation
        template_version: 1.0.0
  svc:
    current_version: 1.1.0
    versions:
      - version: 1.0.0
        date: '2024-01-10'
        changes: Initial creation
        template_version: 1.0.0
      - version: 1.1.0
        date: '2024-03-02'
        changes: Added retries
        template_version: 1.0.0
"#;

pub const SWARMS: &str = r#"swarms:
  - name: backend-squad
    description: Services built in two languages
    agents:
      - rust-backend
      - svc
    use_cases:
      - API development
      - Performance tuning
      - Migrations
"#;

/// A complete, valid registry in a temporary directory.
pub struct Fixture {
    pub dir: TempDir,
    pub registry: Registry,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let fixture = Self {
            registry: Registry::with_defaults(dir.path()),
            dir,
        };

        fixture.write("data/lineage.yaml", LINEAGE);
        fixture.write("data/capabilities.yaml", CAPABILITIES);
        fixture.write("data/versions.yaml", VERSIONS);
        fixture.write("data/swarms.yaml", SWARMS);
        fixture.write("templates/AGENTS.backend-developer.md", TEMPLATE_TEXT);
        fixture.write("agents/AGENTS.rust-backend.md", "# Rust Backend Developer\n");
        fixture.write("agents/AGENTS.svc.md", "# Svc\n");
        fixture.write("knowledge/tokio.md", "# Tokio notes\n");
        fixture
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
}
