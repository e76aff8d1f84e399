use crate::error::Result;
use crate::lifecycle;
use crate::registry::Registry;

pub fn execute(
    registry: &Registry,
    template: &str,
    name: &str,
    domain: Option<&str>,
) -> Result<()> {
    let path = lifecycle::create_agent(registry, template, name, domain)?;

    println!("Created agent: {}", path.display());
    println!();
    println!("Next steps:");
    println!("1. Edit {} to customize the agent", path.display());
    println!("2. Add '{}' to data/lineage.yaml and data/capabilities.yaml", name);
    println!(
        "3. Add a versions.yaml entry, then run: agent-registry update-version {} 1.0.0 \"Initial creation\"",
        name
    );

    Ok(())
}
