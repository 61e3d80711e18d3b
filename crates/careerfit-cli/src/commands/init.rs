//! The `careerfit init` command.

use std::path::Path;

use anyhow::Result;

use careerfit_core::catalog::QuestionCatalog;

const CATALOG_PATH: &str = "catalogs/cloud-storage-engineer.toml";

pub fn execute() -> Result<()> {
    // Create careerfit.toml
    if Path::new("careerfit.toml").exists() {
        println!("careerfit.toml already exists, skipping.");
    } else {
        std::fs::write("careerfit.toml", SAMPLE_CONFIG)?;
        println!("Created careerfit.toml");
    }

    // Editable copy of the built-in catalog
    std::fs::create_dir_all("catalogs")?;
    let catalog_path = Path::new(CATALOG_PATH);
    if catalog_path.exists() {
        println!("{CATALOG_PATH} already exists, skipping.");
    } else {
        std::fs::write(catalog_path, QuestionCatalog::builtin_source())?;
        println!("Created {CATALOG_PATH}");
    }

    println!("\nNext steps:");
    println!("  1. Edit {CATALOG_PATH} to tailor the questions");
    println!("  2. Run: careerfit validate");
    println!("  3. Run: careerfit take --format all");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# careerfit configuration

# Question catalog (omit to use the built-in one)
catalog = "catalogs/cloud-storage-engineer.toml"

# Reject option numbers a question does not offer
strict_answers = false

# Where `careerfit take` writes its reports
output_dir = "./careerfit-results"

# Any of: json, html, md, all
formats = ["json", "html"]
"#;
