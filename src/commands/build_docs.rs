use crate::error::Result;
use crate::registry::Registry;
use crate::report;

pub fn execute(registry: &Registry) -> Result<()> {
    println!("Building documentation site...");
    let output = report::build(registry)?;

    println!("Documentation site generated: {}", output.display());
    println!("Open in browser: file://{}", output.display());
    Ok(())
}
