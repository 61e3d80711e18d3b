//! Markdown report generator.

use anyhow::Result;
use std::path::Path;

use careerfit_core::report::AssessmentReport;

use crate::html::radar_axes;

/// Escape characters that would break a Markdown table cell.
fn cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}

/// Generate a Markdown summary from an assessment report.
pub fn generate_markdown(report: &AssessmentReport) -> String {
    let results = &report.results;
    let scores = &results.scores;
    let mut md = String::new();

    md.push_str(&format!("# {} assessment\n\n", report.catalog.role));
    md.push_str(&format!(
        "Catalog: **{}** v{} | {} of {} questions answered | {}\n\n",
        report.catalog.name,
        report.catalog.version,
        report.answered_count(),
        report.catalog.question_count,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    md.push_str(&format!("## {}\n\n", results.recommendation.title()));
    md.push_str(&format!("**Overall: {}%**\n\n", scores.overall));
    md.push_str(results.recommendation.description());
    md.push_str("\n\n");

    md.push_str("## Scores\n\n");
    md.push_str("| Dimension | Score |\n|---|---:|\n");
    md.push_str(&format!("| Psychological fit | {}% |\n", scores.psychological));
    md.push_str(&format!("| Technical readiness | {}% |\n", scores.technical));
    md.push_str(&format!("| WISCAR average | {}% |\n", scores.wiscar.average()));
    md.push_str(&format!("| Overall | {}% |\n\n", scores.overall));

    md.push_str("### WISCAR profile\n\n");
    md.push_str("| Axis | Score |\n|---|---:|\n");
    for (label, value) in radar_axes(scores) {
        md.push_str(&format!("| {label} | {value}% |\n"));
    }
    md.push('\n');

    if !results.career_paths.is_empty() {
        md.push_str("## Career paths\n\n");
        md.push_str("| Role | Match | Timeline |\n|---|---:|---|\n");
        for path in &results.career_paths {
            md.push_str(&format!(
                "| {} | {}% | {} |\n",
                cell(&path.title),
                path.match_percent,
                cell(&path.timeline)
            ));
        }
        md.push('\n');

        for path in &results.career_paths {
            md.push_str(&format!("### {}\n\n{}\n\n", path.title, path.description));
            for requirement in &path.requirements {
                md.push_str(&format!("- {requirement}\n"));
            }
            md.push('\n');
        }
    }

    md.push_str("## Strengths\n\n");
    for strength in &results.strengths {
        md.push_str(&format!("- {strength}\n"));
    }
    md.push('\n');

    if !results.weaknesses.is_empty() {
        md.push_str("## Areas to develop\n\n");
        for weakness in &results.weaknesses {
            md.push_str(&format!("- {weakness}\n"));
        }
        md.push('\n');
    }

    md.push_str("## Next steps\n\n");
    for (i, step) in results.next_steps.iter().enumerate() {
        md.push_str(&format!("{}. {}\n", i + 1, step));
    }

    md
}

/// Write a Markdown report to a file.
pub fn write_markdown_report(report: &AssessmentReport, path: &Path) -> Result<()> {
    let md = generate_markdown(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, md)?;
    Ok(())
}
