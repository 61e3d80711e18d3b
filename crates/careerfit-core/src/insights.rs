//! Text derived from the numeric scores: strengths, weaknesses, next steps
//! and ranked career paths.

use crate::model::{CareerPath, Recommendation, Scores};

const FALLBACK_STRENGTH: &str = "Willingness to learn and grow";

/// Labels for every dimension that clears its strength cutoff.
///
/// Falls back to a single generic entry so the list is never empty.
pub fn strengths(scores: &Scores) -> Vec<String> {
    let w = &scores.wiscar;
    let checks = [
        (
            scores.psychological >= 75,
            "Strong psychological alignment with the role",
        ),
        (scores.technical >= 75, "Solid technical foundation"),
        (w.will >= 80, "High motivation and persistence"),
        (w.interest >= 80, "Genuine interest in cloud technologies"),
        (w.cognitive >= 75, "Strong analytical thinking abilities"),
        (w.ability >= 80, "Growth mindset and learning ability"),
        (
            w.real_world >= 75,
            "Good understanding of real-world requirements",
        ),
    ];

    let found = collect_labels(&checks);
    if found.is_empty() {
        vec![FALLBACK_STRENGTH.to_string()]
    } else {
        found
    }
}

/// Labels for every dimension below its weakness cutoff. May be empty.
pub fn weaknesses(scores: &Scores) -> Vec<String> {
    let w = &scores.wiscar;
    let checks = [
        (
            scores.psychological < 60,
            "Personality traits may not align perfectly with typical role requirements",
        ),
        (
            scores.technical < 50,
            "Technical knowledge needs significant development",
        ),
        (
            w.will < 60,
            "May need to develop stronger persistence and motivation",
        ),
        (
            w.interest < 60,
            "Limited current interest in cloud technologies",
        ),
        (
            w.cognitive < 60,
            "Analytical thinking skills could be strengthened",
        ),
        (
            w.ability < 60,
            "Learning strategies and growth mindset need development",
        ),
        (
            w.real_world < 60,
            "Understanding of role requirements needs improvement",
        ),
    ];

    collect_labels(&checks)
}

fn collect_labels(checks: &[(bool, &str)]) -> Vec<String> {
    checks
        .iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, label)| label.to_string())
        .collect()
}

/// Four suggested actions, chosen by the recommendation alone.
pub fn next_steps(recommendation: Recommendation) -> Vec<String> {
    let steps: [&str; 4] = match recommendation {
        Recommendation::Pursue => [
            "Enroll in \"Cloud Fundamentals for Developers\" course",
            "Start hands-on practice with AWS Free Tier",
            "Build a personal project using cloud storage services",
            "Work towards AWS Storage Specialty certification",
        ],
        Recommendation::Maybe => [
            "Strengthen foundational technical skills first",
            "Take introductory cloud computing courses",
            "Assess your interest through free online resources",
            "Consider starting with cloud support or admin roles",
        ],
        Recommendation::No => [
            "Explore alternative career paths that better match your profile",
            "Consider roles in IT support, data analysis, or system administration",
            "Develop core technical skills before revisiting cloud engineering",
            "Take time to explore your interests and strengths",
        ],
    };

    steps.iter().map(|s| s.to_string()).collect()
}

/// Offset `overall` by `delta` and clamp the result to 0..=100.
fn offset(overall: u32, delta: i64) -> u32 {
    (i64::from(overall) + delta).clamp(0, 100) as u32
}

fn path(
    title: &str,
    match_percent: u32,
    description: &str,
    requirements: [&str; 3],
    timeline: &str,
) -> CareerPath {
    CareerPath {
        title: title.to_string(),
        match_percent,
        description: description.to_string(),
        requirements: requirements.iter().map(|r| r.to_string()).collect(),
        timeline: timeline.to_string(),
    }
}

/// The four related roles, ranked by descending match.
///
/// Ties keep their fixed list order.
pub fn career_paths(overall: u32, psychological: u32) -> Vec<CareerPath> {
    let sysadmin_delta = if psychological >= 70 { 20 } else { -5 };

    let mut paths = vec![
        path(
            "Cloud Storage Engineer",
            offset(overall, 0),
            "Design and manage scalable cloud storage systems",
            [
                "AWS/Azure certification",
                "Storage architecture knowledge",
                "Scripting skills",
            ],
            "6-12 months with focused learning",
        ),
        path(
            "Cloud Support Engineer",
            offset(overall, 15),
            "Provide technical support for cloud infrastructure",
            [
                "Cloud platform basics",
                "Customer service skills",
                "Troubleshooting abilities",
            ],
            "3-6 months",
        ),
        path(
            "DevOps Engineer",
            offset(overall, -10),
            "Automate infrastructure and deployment processes",
            [
                "CI/CD knowledge",
                "Infrastructure as Code",
                "Multiple cloud platforms",
            ],
            "8-15 months",
        ),
        path(
            "System Administrator",
            offset(overall, sysadmin_delta),
            "Manage on-premise and hybrid infrastructure",
            [
                "Linux/Windows administration",
                "Network knowledge",
                "Security basics",
            ],
            "4-8 months",
        ),
    ];

    // Vec::sort_by is stable.
    paths.sort_by(|a, b| b.match_percent.cmp(&a.match_percent));
    paths
}
