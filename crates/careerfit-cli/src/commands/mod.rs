pub mod init;
pub mod questions;
pub mod score;
pub mod take;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::Result;
use comfy_table::{Cell, Table};

use careerfit_core::catalog::{load_catalog, QuestionCatalog};
use careerfit_core::config::load_config;
use careerfit_core::model::AssessmentResults;
use careerfit_core::report::AssessmentReport;
use careerfit_report::html::write_html_report;
use careerfit_report::markdown::write_markdown_report;

/// Load the catalog named on the command line, else the configured one,
/// else the built-in catalog.
pub(crate) fn resolve_catalog(flag: Option<PathBuf>) -> Result<QuestionCatalog> {
    let path = match flag {
        Some(path) => Some(path),
        None => load_config()?.catalog,
    };
    load_catalog(path.as_deref())
}

/// Score overview and ranked career paths as printable tables.
pub(crate) fn summary_tables(results: &AssessmentResults) -> String {
    let scores = &results.scores;
    let w = &scores.wiscar;

    let mut table = Table::new();
    table.set_header(vec!["Dimension", "Score"]);
    let rows = [
        ("Psychological", scores.psychological),
        ("Technical", scores.technical),
        ("Will", w.will),
        ("Interest", w.interest),
        ("Skill", w.skill),
        ("Cognitive", w.cognitive),
        ("Ability", w.ability),
        ("Real world", w.real_world),
        ("Overall", scores.overall),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(format!("{value}%"))]);
    }

    let mut careers = Table::new();
    careers.set_header(vec!["Career path", "Match", "Timeline"]);
    for path in &results.career_paths {
        careers.add_row(vec![
            Cell::new(&path.title),
            Cell::new(format!("{}%", path.match_percent)),
            Cell::new(&path.timeline),
        ]);
    }

    let mut out = format!(
        "{}\nRecommendation: {} ({})\n\n{table}\n\n{careers}\n",
        results.recommendation.title(),
        results.recommendation,
        results.recommendation.description()
    );
    out.push_str("\nStrengths:\n");
    for strength in &results.strengths {
        out.push_str(&format!("  - {strength}\n"));
    }
    if !results.weaknesses.is_empty() {
        out.push_str("\nAreas to develop:\n");
        for weakness in &results.weaknesses {
            out.push_str(&format!("  - {weakness}\n"));
        }
    }
    out.push_str("\nNext steps:\n");
    for (i, step) in results.next_steps.iter().enumerate() {
        out.push_str(&format!("  {}. {step}\n", i + 1));
    }
    out
}

/// Write `report` in each requested format. Returns the written paths.
pub(crate) fn write_reports(
    report: &AssessmentReport,
    output: &Path,
    formats: &[String],
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output)?;
    let timestamp = report.created_at.format("%Y-%m-%dT%H%M%S");

    let expanded: Vec<&str> = if formats.iter().any(|f| f == "all") {
        vec!["json", "html", "md"]
    } else {
        formats.iter().map(|f| f.as_str()).collect()
    };

    let mut written = Vec::new();
    for fmt in expanded {
        match fmt {
            "json" => {
                let path = output.join(format!("report-{timestamp}.json"));
                report.save_json(&path)?;
                written.push(path);
            }
            "html" => {
                let path = output.join(format!("report-{timestamp}.html"));
                write_html_report(report, &path)?;
                written.push(path);
            }
            "md" | "markdown" => {
                let path = output.join(format!("report-{timestamp}.md"));
                write_markdown_report(report, &path)?;
                written.push(path);
            }
            _ => {
                eprintln!("Unknown format: {fmt}");
            }
        }
    }
    Ok(written)
}

/// Split a comma-separated `--format` value.
pub(crate) fn parse_formats(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|f| f.trim().to_ascii_lowercase())
        .filter(|f| !f.is_empty())
        .collect()
}
