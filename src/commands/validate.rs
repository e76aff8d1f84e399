use crate::registry::Registry;
use crate::validate::{self, ValidationReport};

/// Print the validation report. Returns whether every check passed.
pub fn execute(registry: &Registry) -> bool {
    println!("{}", "=".repeat(60));
    println!("Agent Data Validation");
    println!("{}", "=".repeat(60));

    let report = validate::validate(registry);
    print_report(&report);

    println!();
    println!("{}", "=".repeat(60));
    if report.passed() {
        println!("All validations passed!");
    } else {
        println!("Validation failed. Please fix the errors above.");
    }

    report.passed()
}

fn print_report(report: &ValidationReport) {
    for check in &report.checks {
        println!("Validating {}...", check.manifest);
        if check.passed() {
            println!("  ok: {}", check.summary);
        } else {
            for error in &check.errors {
                println!("  error: {}", error);
            }
        }
    }
}
