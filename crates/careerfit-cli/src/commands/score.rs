//! The `careerfit score` command.

use std::path::PathBuf;

use anyhow::Result;

use careerfit_core::report::{load_answers, AssessmentReport};
use careerfit_report::markdown::generate_markdown;

use super::{resolve_catalog, summary_tables};

pub fn execute(answers_path: PathBuf, catalog_path: Option<PathBuf>, format: String) -> Result<()> {
    let catalog = resolve_catalog(catalog_path)?;
    let answers = load_answers(&answers_path)?;

    for answer in &answers {
        match catalog.get(&answer.question_id) {
            None => tracing::warn!(
                "answer for unknown question {} is ignored",
                answer.question_id
            ),
            Some(question) if !question.accepts(answer.value) => tracing::warn!(
                "option {} is out of range for question {}; it will score as no match",
                answer.value,
                question.id
            ),
            Some(_) => {}
        }
    }

    let report = AssessmentReport::score(&catalog, answers);

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", generate_markdown(&report));
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report.results)?);
        }
        _ => {
            // text format
            println!(
                "{} of {} questions answered",
                report.answered_count(),
                catalog.len()
            );
            print!("{}", summary_tables(&report.results));
        }
    }

    Ok(())
}
