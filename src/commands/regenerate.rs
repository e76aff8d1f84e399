use crate::error::Result;
use crate::lifecycle::{self, Regenerated};
use crate::registry::Registry;

pub fn execute(registry: &Registry, agent: &str, domain: Option<&str>) -> Result<()> {
    println!("Regenerating agent: {}...", agent);
    let done = lifecycle::regenerate_agent(registry, agent, domain)?;
    print_done(agent, &done);
    Ok(())
}

/// Regenerate every agent. Returns whether all of them succeeded.
pub fn execute_all(registry: &Registry) -> Result<bool> {
    println!("Starting batch regeneration of ALL agents...");
    let outcomes = lifecycle::regenerate_all(registry)?;

    for outcome in &outcomes {
        println!();
        println!("Regenerating agent: {}...", outcome.agent_id);
        match &outcome.result {
            Ok(done) => print_done(&outcome.agent_id, done),
            Err(e) => println!("Error: {}", e),
        }
    }

    let failed: Vec<&str> = outcomes
        .iter()
        .filter(|o| !o.is_ok())
        .map(|o| o.agent_id.as_str())
        .collect();

    println!();
    if failed.is_empty() {
        println!("Batch regeneration complete! ({} agents)", outcomes.len());
    } else {
        println!(
            "Batch regeneration finished with {} of {} agents failing: {}",
            failed.len(),
            outcomes.len(),
            failed.join(", ")
        );
    }

    Ok(failed.is_empty())
}

fn print_done(agent: &str, done: &Regenerated) {
    let backup_name = done
        .backup_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    println!("Backed up existing agent to {}", backup_name);
    println!(
        "Successfully regenerated {} from template '{}'",
        agent, done.template_id
    );
}
