use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "agent-registry")]
#[command(about = "Manage template-derived agent definitions tracked in YAML manifests", long_about = None)]
#[command(version = env!("AGENT_REGISTRY_VERSION"))]
#[command(after_help = "\
REGISTRY LAYOUT:
  data/lineage.yaml        Templates and the agents derived from them
  data/capabilities.yaml   can_do / cannot_do per agent
  data/versions.yaml       Version history per agent
  data/swarms.yaml         Named groups of agents
  agents/AGENTS.<id>.md    Generated agent documents

EXAMPLES:
  agent-registry create-agent backend-developer rust-backend --domain rust
  agent-registry update-version rust-backend 1.1.0 \"Added async guidance\"
  agent-registry validate

For details about a specific command, use:
  agent-registry <command> --help")]
pub struct Cli {
    /// Show debug logging
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Registry root (default: nearest directory containing data/lineage.yaml)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate cross-references between the manifests
    Validate,

    /// Create a new agent from a template
    #[command(long_about = "Create a new agent from a template.\n\n\
        Writes agents/AGENTS.<name>.md rendered from the template. Refuses to\n\
        overwrite an existing agent. The new agent still has to be added to\n\
        lineage.yaml, capabilities.yaml and versions.yaml by hand.")]
    CreateAgent {
        /// Template ID (e.g., backend-developer)
        template: String,

        /// Agent name (e.g., rust-backend)
        name: String,

        /// Domain specialization substituted into the template
        #[arg(long)]
        domain: Option<String>,
    },

    /// Regenerate an agent from its parent template
    #[command(long_about = "Regenerate an agent from its parent template.\n\n\
        The current document is copied to AGENTS.<agent>.md.<timestamp>.bak\n\
        before being overwritten.")]
    Regenerate {
        /// Agent ID (e.g., rust-backend)
        agent: String,

        /// Domain specialization (if the template requires it)
        #[arg(long)]
        domain: Option<String>,
    },

    /// Regenerate every agent using the domains recorded in lineage.yaml
    RegenerateAll,

    /// Append a version entry for an agent
    UpdateVersion {
        /// Agent ID (e.g., python-backend)
        agent: String,

        /// New version (e.g., 1.2.0)
        version: String,

        /// Description of changes
        changes: String,
    },

    /// Show registry statistics
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate the static HTML report
    BuildDocs,

    /// Remove emoji from markdown files
    StripEmoji {
        /// Directories to scan
        #[arg(required = true)]
        directories: Vec<PathBuf>,
    },

    /// Remove build output, caches and backup files
    Clean,
}
