//! HTML report generator.
//!
//! Produces a self-contained HTML dashboard with all CSS inlined and the
//! charts drawn as inline SVG.

use anyhow::Result;
use std::path::Path;

use careerfit_core::model::{CareerPath, Recommendation, Scores};
use careerfit_core::report::AssessmentReport;

/// Escape a string for safe HTML insertion.
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Axis labels and values for the radar chart.
///
/// The Skill axis carries the technical score.
pub(crate) fn radar_axes(scores: &Scores) -> [(&'static str, u32); 6] {
    let w = &scores.wiscar;
    [
        ("Will", w.will),
        ("Interest", w.interest),
        ("Skill", scores.technical),
        ("Cognitive", w.cognitive),
        ("Ability", w.ability),
        ("Real World", w.real_world),
    ]
}

/// Generate an HTML dashboard from an assessment report.
pub fn generate_html(report: &AssessmentReport) -> String {
    let results = &report.results;
    let scores = &results.scores;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>careerfit report: {}</title>\n",
        html_escape(&report.catalog.role)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!(
        "<h1>{} assessment</h1>\n",
        html_escape(&report.catalog.role)
    ));
    html.push_str(&format!(
        "<p class=\"meta\">Catalog: <strong>{}</strong> v{} | {} of {} questions answered | {}</p>\n",
        html_escape(&report.catalog.name),
        html_escape(&report.catalog.version),
        report.answered_count(),
        report.catalog.question_count,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Recommendation banner
    html.push_str(&format!(
        "<section class=\"banner {}\">\n<h2>{}</h2>\n<p class=\"overall\">{}%</p>\n<p>{}</p>\n</section>\n",
        banner_class(results.recommendation),
        html_escape(results.recommendation.title()),
        scores.overall,
        html_escape(results.recommendation.description())
    ));

    // Score table and radar
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<h2>Scores</h2>\n");
    html.push_str("<table class=\"summary\">\n");
    html.push_str("<thead><tr><th>Dimension</th><th>Score</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    let rows = [
        ("Psychological fit", scores.psychological),
        ("Technical readiness", scores.technical),
        ("WISCAR average", scores.wiscar.average()),
        ("Overall", scores.overall),
    ];
    for (label, value) in rows {
        html.push_str(&format!(
            "<tr><td>{}</td><td class=\"{}\">{}%</td></tr>\n",
            label,
            score_class(value),
            value
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("<h3>WISCAR profile</h3>\n");
    html.push_str(&generate_radar_chart(scores));
    html.push_str("</section>\n");

    // Career paths
    if !results.career_paths.is_empty() {
        html.push_str("<section class=\"careers\">\n");
        html.push_str("<h2>Career paths</h2>\n");
        html.push_str(&generate_bar_chart(&results.career_paths));
        for path in &results.career_paths {
            html.push_str(&format!(
                "<div class=\"career\"><h3>{} <span class=\"match\">{}% match</span></h3>\n<p>{}</p>\n<p class=\"meta\">Timeline: {}</p>\n",
                html_escape(&path.title),
                path.match_percent,
                html_escape(&path.description),
                html_escape(&path.timeline)
            ));
            push_list(&mut html, &path.requirements);
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    // Strengths, weaknesses, next steps
    html.push_str("<section class=\"insights\">\n");
    html.push_str("<h2>Strengths</h2>\n");
    push_list(&mut html, &results.strengths);
    if !results.weaknesses.is_empty() {
        html.push_str("<h2>Areas to develop</h2>\n");
        push_list(&mut html, &results.weaknesses);
    }
    html.push_str("<h2>Next steps</h2>\n");
    html.push_str("<ol>\n");
    for step in &results.next_steps {
        html.push_str(&format!("<li>{}</li>\n", html_escape(step)));
    }
    html.push_str("</ol>\n");
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&html_escape(
        &serde_json::to_string_pretty(report).unwrap_or_default(),
    ));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &AssessmentReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

fn push_list(html: &mut String, items: &[String]) {
    html.push_str("<ul>\n");
    for item in items {
        html.push_str(&format!("<li>{}</li>\n", html_escape(item)));
    }
    html.push_str("</ul>\n");
}

fn banner_class(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::Pursue => "pursue",
        Recommendation::Maybe => "maybe",
        Recommendation::No => "no",
    }
}

fn score_class(value: u32) -> &'static str {
    if value >= 75 {
        "high"
    } else if value >= 50 {
        "mid"
    } else {
        "low"
    }
}

fn score_color(value: u32) -> &'static str {
    if value >= 75 {
        "#22c55e"
    } else if value >= 50 {
        "#eab308"
    } else {
        "#ef4444"
    }
}

fn generate_radar_chart(scores: &Scores) -> String {
    let size = 400.0_f64;
    let center = size / 2.0;
    let radius = 140.0_f64;
    let axes = radar_axes(scores);

    let point = |index: usize, fraction: f64| -> (f64, f64) {
        let angle = -std::f64::consts::FRAC_PI_2
            + index as f64 * std::f64::consts::TAU / axes.len() as f64;
        (
            center + radius * fraction * angle.cos(),
            center + radius * fraction * angle.sin(),
        )
    };

    let mut svg = format!(
        "<svg class=\"radar\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\" xmlns=\"http://www.w3.org/2000/svg\">\n"
    );

    // Grid rings at 25/50/75/100.
    for ring in 1..=4 {
        let fraction = f64::from(ring) / 4.0;
        let points: Vec<String> = (0..axes.len())
            .map(|i| {
                let (x, y) = point(i, fraction);
                format!("{x:.1},{y:.1}")
            })
            .collect();
        svg.push_str(&format!(
            "  <polygon points=\"{}\" fill=\"none\" stroke=\"currentColor\" stroke-opacity=\"0.2\"/>\n",
            points.join(" ")
        ));
    }

    for (i, (label, _)) in axes.iter().enumerate() {
        let (x, y) = point(i, 1.0);
        svg.push_str(&format!(
            "  <line x1=\"{center:.1}\" y1=\"{center:.1}\" x2=\"{x:.1}\" y2=\"{y:.1}\" stroke=\"currentColor\" stroke-opacity=\"0.2\"/>\n"
        ));
        let (lx, ly) = point(i, 1.18);
        svg.push_str(&format!(
            "  <text x=\"{lx:.1}\" y=\"{ly:.1}\" font-size=\"13\" fill=\"currentColor\" text-anchor=\"middle\" dominant-baseline=\"middle\">{label}</text>\n"
        ));
    }

    let values: Vec<String> = axes
        .iter()
        .enumerate()
        .map(|(i, (_, value))| {
            let (x, y) = point(i, f64::from((*value).min(100)) / 100.0);
            format!("{x:.1},{y:.1}")
        })
        .collect();
    svg.push_str(&format!(
        "  <polygon class=\"profile\" points=\"{}\" fill=\"#3b82f6\" fill-opacity=\"0.35\" stroke=\"#3b82f6\" stroke-width=\"2\"/>\n",
        values.join(" ")
    ));

    svg.push_str("</svg>\n");
    svg
}

fn generate_bar_chart(paths: &[CareerPath]) -> String {
    let bar_height = 30;
    let max_width = 400;
    let padding = 10;
    let label_width = 220;

    let total_height = paths.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, path) in paths.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let width = path.match_percent.min(100) as usize * max_width / 100;

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            html_escape(&path.title)
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width,
            y,
            width,
            bar_height,
            score_color(path.match_percent)
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{}%</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            path.match_percent
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --high: #dcfce7; --mid: #fef9c3; --low: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --high: #064e3b; --mid: #713f12; --low: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); max-width: 960px; }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.banner { border-radius: 8px; padding: 1rem 1.5rem; margin: 1rem 0; }
.banner.pursue { background: var(--high); }
.banner.maybe { background: var(--mid); }
.banner.no { background: var(--low); }
.overall { font-size: 2.5rem; font-weight: bold; margin: 0.5rem 0; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
.high { background: var(--high); }
.mid { background: var(--mid); }
.low { background: var(--low); }
.career { border: 1px solid var(--border); border-radius: 8px; padding: 0 1rem; margin: 1rem 0; }
.match { font-size: 0.9rem; color: #6b7280; font-weight: normal; }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use careerfit_core::catalog::QuestionCatalog;
    use careerfit_core::model::Answer;

    fn make_test_report() -> AssessmentReport {
        let catalog = QuestionCatalog::builtin().unwrap();
        let answers = vec![
            Answer {
                question_id: "psych-1".into(),
                value: 4,
                time_spent_ms: 1200,
            },
            Answer {
                question_id: "tech-1".into(),
                value: 1,
                time_spent_ms: 900,
            },
        ];
        let mut report = AssessmentReport::score(&catalog, answers);
        report.id = uuid::Uuid::nil();
        report
    }

    #[test]
    fn html_report_contains_required_elements() {
        let report = make_test_report();
        let html = generate_html(&report);

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("Cloud Storage Engineer assessment"));
        assert!(html.contains(report.results.recommendation.title()));
        assert!(html.contains("class=\"radar\""));
        assert!(html.contains("Real World"));
        assert!(html.contains("Raw JSON Data"));
        for path in &report.results.career_paths {
            assert!(html.contains(&path.title));
        }
    }

    #[test]
    fn radar_skill_axis_shows_technical() {
        let report = make_test_report();
        let axes = radar_axes(&report.results.scores);
        assert_eq!(axes[2], ("Skill", report.results.scores.technical));
        assert_eq!(report.results.scores.wiscar.skill, 0);
    }

    #[test]
    fn html_escapes_user_text() {
        let mut report = make_test_report();
        report.catalog.role = "<script>alert('x')</script>".into();
        report.results.strengths = vec!["A & B".into()];
        let html = generate_html(&report);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("A &amp; B"));
    }

    #[test]
    fn html_report_write_to_file() {
        let report = make_test_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.html");

        write_html_report(&report, &path).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<html"));
    }
}
