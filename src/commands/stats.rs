use crate::error::Result;
use crate::registry::Registry;
use crate::report::{self, RegistryData};

/// Use cases shown per swarm in the table view.
const SWARM_USE_CASES: usize = 2;

pub fn execute(registry: &Registry, json: bool) -> Result<()> {
    let data = report::collect(registry)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    print_tables(&data);
    Ok(())
}

fn print_tables(data: &RegistryData) {
    println!("Agent Registry Statistics");
    println!();
    println!("Overview:");
    println!("  {:<16} {:>6}", "Templates", data.overview.templates);
    println!("  {:<16} {:>6}", "Agents", data.overview.agents);
    println!("  {:<16} {:>6}", "Knowledge Docs", data.overview.knowledge_docs);
    println!("  {:<16} {:>6}", "Swarms", data.overview.swarms);

    println!();
    println!("{:<30} {:<30} {:<10}", "AGENT", "TEMPLATE", "VERSION");
    println!("{}", "-".repeat(72));
    for agent in &data.agents {
        println!(
            "{:<30} {:<30} {:<10}",
            agent.id,
            agent.parent,
            agent.version.as_deref().unwrap_or("N/A")
        );
    }

    if data.swarms.is_empty() {
        return;
    }

    println!();
    println!("{:<24} {:<40} {}", "SWARM", "AGENTS", "USE CASES");
    println!("{}", "-".repeat(90));
    for swarm in &data.swarms {
        let use_cases: Vec<&str> = swarm
            .use_cases
            .iter()
            .take(SWARM_USE_CASES)
            .map(String::as_str)
            .collect();
        println!(
            "{:<24} {:<40} {}",
            swarm.name,
            swarm.agents.join(", "),
            use_cases.join(", ")
        );
    }
}
