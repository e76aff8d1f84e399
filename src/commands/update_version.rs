use crate::error::Result;
use crate::lifecycle;
use crate::registry::Registry;

pub fn execute(registry: &Registry, agent: &str, version: &str, changes: &str) -> Result<()> {
    let update = lifecycle::update_version(registry, agent, version, changes)?;

    if !update.is_semver {
        eprintln!(
            "Warning: '{}' is not a semantic version (expected MAJOR.MINOR.PATCH)",
            update.new_version
        );
    }

    println!(
        "Updated {} from {} to version {}",
        update.agent_id, update.previous_version, update.new_version
    );
    println!("Don't forget to update 'template_version' in versions.yaml if applicable");

    Ok(())
}
