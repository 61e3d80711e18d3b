//! End-to-end pipeline tests: flow controller → scoring → report → renderers.
//!
//! These run the library crates directly, driving time through a manual
//! clock so durations are deterministic.

use std::sync::Arc;

use chrono::Duration;

use careerfit_core::catalog::QuestionCatalog;
use careerfit_core::error::FlowError;
use careerfit_core::flow::{FlowController, FlowOptions, Step};
use careerfit_core::model::{QuestionType, Recommendation, Section};
use careerfit_core::report::AssessmentReport;
use careerfit_core::scoring;
use careerfit_core::traits::{elapsed_ms, Clock, ManualClock};
use careerfit_report::html::generate_html;
use careerfit_report::markdown::generate_markdown;

fn run_catalog(
    clock: Arc<ManualClock>,
    pick: impl Fn(QuestionType, usize) -> usize,
) -> FlowController {
    let catalog = Arc::new(QuestionCatalog::builtin().unwrap());
    let mut flow = FlowController::new(catalog, clock.clone(), FlowOptions::default()).unwrap();
    flow.start().unwrap();

    loop {
        let question = flow.current_question();
        let value = pick(question.question_type, question.option_count());
        clock.advance(Duration::seconds(2));
        flow.record_answer(value).unwrap();
        if flow.advance().unwrap() == Step::Completed {
            return flow;
        }
    }
}

#[test]
fn lowest_options_recommend_alternatives() {
    let clock = Arc::new(ManualClock::default());
    let flow = run_catalog(clock.clone(), |_, _| 0);

    assert_eq!(flow.section(), Section::Results);
    let results = flow.results().unwrap();
    assert_eq!(results.scores.psychological, 0);
    assert_eq!(results.recommendation, Recommendation::No);
    assert_eq!(results.career_paths.len(), 4);
    assert!(results
        .career_paths
        .windows(2)
        .all(|w| w[0].match_percent >= w[1].match_percent));

    let duration = elapsed_ms(flow.state().start_time, clock.now());
    assert_eq!(duration, 48_000);
}

#[test]
fn flow_results_match_direct_scoring() {
    let clock = Arc::new(ManualClock::default());
    let flow = run_catalog(clock, |kind, count| match kind {
        QuestionType::Likert => 3,
        _ => count - 1,
    });

    let direct = scoring::score(&flow.state().answers, flow.catalog());
    assert_eq!(flow.results(), Some(&direct));
    assert_eq!(flow.state().answers.len(), 24);
}

#[test]
fn finished_flow_rejects_further_input() {
    let clock = Arc::new(ManualClock::default());
    let mut flow = run_catalog(clock, |_, _| 1);
    let before = flow.results().cloned();

    assert!(matches!(
        flow.advance(),
        Err(FlowError::InvalidTransition { .. })
    ));
    assert!(matches!(
        flow.record_answer(0),
        Err(FlowError::InvalidTransition { .. })
    ));
    assert_eq!(flow.results().cloned(), before);

    flow.restart();
    assert_eq!(flow.section(), Section::Intro);
    assert!(flow.state().answers.is_empty());
    assert!(flow.results().is_none());
}

#[test]
fn report_survives_save_and_renders() {
    let clock = Arc::new(ManualClock::default());
    let flow = run_catalog(clock.clone(), |_, _| 1);
    let report = AssessmentReport::new(
        flow.catalog(),
        flow.state().answers.clone(),
        flow.results().cloned().unwrap(),
        elapsed_ms(flow.state().start_time, clock.now()),
    );

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    report.save_json(&path).unwrap();
    let loaded = AssessmentReport::load_json(&path).unwrap();
    assert_eq!(loaded, report);
    assert_eq!(loaded.answered_count(), 24);

    let html = generate_html(&loaded);
    assert!(html.contains(loaded.results.recommendation.title()));
    let md = generate_markdown(&loaded);
    assert!(md.contains(&format!("**Overall: {}%**", loaded.results.scores.overall)));
}
