//! Manifest store for the YAML documents describing the registry.
//!
//! The registry keeps all of its metadata in four YAML files under the data
//! directory. Each file is loaded and saved independently; nothing is cached
//! between calls, so every operation sees the state currently on disk.
//!
//! # Documents
//!
//! - **lineage.yaml**: templates and the agents derived from them
//! - **capabilities.yaml**: `can_do` / `cannot_do` lists keyed by agent id
//! - **versions.yaml**: current version and append-only history per agent
//! - **swarms.yaml**: named groupings of agents with use cases
//!
//! # Example
//!
//! ```yaml
//! templates:
//!   - id: backend-developer
//!     path: templates/AGENTS.backend-developer.md
//! agents:
//!   - id: rust-backend
//!     path: agents/AGENTS.rust-backend.md
//!     lineage:
//!       parent_template: backend-developer
//!       derivation_type: specialization
//!     generation_parameters:
//!       domain: rust
//! ```

pub mod definition;
pub mod store;

pub use definition::{
    AgentEntry, CapabilitiesDoc, CapabilityRecord, Lineage, SwarmEntry, SwarmsDoc, Template,
    VersionEntry, VersionRecord, VersionsDoc,
};
pub use store::{Manifest, ManifestStore};
