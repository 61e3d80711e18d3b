//! The `careerfit validate` command.

use std::path::PathBuf;

use anyhow::Result;

use careerfit_core::catalog::validate_catalog;

use super::resolve_catalog;

pub fn execute(catalog_path: Option<PathBuf>) -> Result<()> {
    let catalog = resolve_catalog(catalog_path)?;

    println!(
        "Catalog: {} v{} ({} questions)",
        catalog.name,
        catalog.version,
        catalog.len()
    );

    let warnings = validate_catalog(&catalog);
    for w in &warnings {
        let prefix = w
            .question_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Catalog valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
