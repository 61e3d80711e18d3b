//! The `careerfit questions` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use super::resolve_catalog;

pub fn execute(catalog_path: Option<PathBuf>) -> Result<()> {
    let catalog = resolve_catalog(catalog_path)?;

    let mut table = Table::new();
    table.set_header(vec![
        "#",
        "ID",
        "Type",
        "Category",
        "Subcategory",
        "Prompt",
    ]);

    for (i, q) in catalog.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&q.id),
            Cell::new(q.question_type.to_string()),
            Cell::new(q.category.to_string()),
            Cell::new(&q.subcategory),
            Cell::new(&q.prompt),
        ]);
    }

    println!("{} ({})", catalog.name, catalog.role);
    println!("{table}");
    println!("{} questions", catalog.len());

    Ok(())
}
