//! The scoring engine.
//!
//! Turns an answer list and a catalog into [`AssessmentResults`]. Scoring is
//! pure: no clock, no randomness, and every missing input has a numeric
//! fallback instead of an error.

use std::collections::HashMap;

use crate::catalog::QuestionCatalog;
use crate::insights::{career_paths, next_steps, strengths, weaknesses};
use crate::model::{
    Answer, AssessmentResults, Category, Question, QuestionType, Recommendation, Scores,
    WiscarScores,
};

/// Share of the overall score taken by the psychological category.
pub const PSYCHOLOGICAL_WEIGHT: f64 = 0.3;
/// Share of the overall score taken by the technical category.
pub const TECHNICAL_WEIGHT: f64 = 0.3;
/// Share of the overall score taken by the WISCAR average.
pub const WISCAR_WEIGHT: f64 = 0.4;

/// Points for a scenario option that has no entry in the question's table.
pub const NEUTRAL_SCENARIO_POINTS: u32 = 50;

const LIKERT_MAX: usize = 4;

/// Score an answer list against a catalog.
pub fn score(answers: &[Answer], catalog: &QuestionCatalog) -> AssessmentResults {
    let answer_map = index_answers(answers);

    let psychological = category_score(&answer_map, catalog, Category::Psychometric);
    let technical = category_score(&answer_map, catalog, Category::Technical);
    let wiscar = wiscar_scores(&answer_map, catalog);
    let overall = overall_score(psychological, technical, &wiscar);
    let recommendation = recommend(overall, psychological, technical);

    let scores = Scores {
        psychological,
        technical,
        wiscar,
        overall,
    };

    tracing::debug!(
        "scored {} answers: psychological {psychological}, technical {technical}, overall {overall} ({recommendation})",
        answer_map.len()
    );

    AssessmentResults {
        strengths: strengths(&scores),
        weaknesses: weaknesses(&scores),
        next_steps: next_steps(recommendation),
        career_paths: career_paths(overall, psychological),
        scores,
        recommendation,
    }
}

/// Map question id to selected value. Later duplicates win.
fn index_answers(answers: &[Answer]) -> HashMap<&str, usize> {
    answers
        .iter()
        .map(|a| (a.question_id.as_str(), a.value))
        .collect()
}

/// Raw 0..=100 score for one answer to `question`.
pub fn raw_score(question: &Question, value: usize) -> f64 {
    match question.question_type {
        QuestionType::Likert => {
            if value > LIKERT_MAX {
                0.0
            } else {
                value as f64 / LIKERT_MAX as f64 * 100.0
            }
        }
        QuestionType::MultipleChoice => match question.correct_answer {
            Some(correct) if correct == value => 100.0,
            _ => 0.0,
        },
        QuestionType::Scenario => f64::from(
            question
                .scenario_points
                .as_ref()
                .and_then(|points| points.get(value).copied())
                .unwrap_or(NEUTRAL_SCENARIO_POINTS),
        ),
    }
}

/// Weighted mean of raw scores over the answered questions in a group.
///
/// Returns 0 when nothing in the group was answered.
fn group_score<'a>(
    answers: &HashMap<&str, usize>,
    questions: impl Iterator<Item = &'a Question>,
) -> u32 {
    let mut total_score = 0.0;
    let mut total_weight = 0.0;

    for question in questions {
        if let Some(&value) = answers.get(question.id.as_str()) {
            total_score += raw_score(question, value) * question.weight;
            total_weight += question.weight;
        }
    }

    if total_weight > 0.0 {
        (total_score / total_weight).round() as u32
    } else {
        0
    }
}

fn category_score(
    answers: &HashMap<&str, usize>,
    catalog: &QuestionCatalog,
    category: Category,
) -> u32 {
    group_score(answers, catalog.by_category(category))
}

fn subcategory_score(
    answers: &HashMap<&str, usize>,
    catalog: &QuestionCatalog,
    subcategory: &str,
) -> u32 {
    group_score(
        answers,
        catalog
            .by_category(Category::Wiscar)
            .filter(|q| q.subcategory == subcategory),
    )
}

fn wiscar_scores(answers: &HashMap<&str, usize>, catalog: &QuestionCatalog) -> WiscarScores {
    let [will, interest, skill, cognitive, ability, real_world] =
        WiscarScores::KEYS.map(|key| subcategory_score(answers, catalog, key));

    WiscarScores {
        will,
        interest,
        skill,
        cognitive,
        ability,
        real_world,
    }
}

/// Blend the category scores and the WISCAR average into one 0..=100 score.
pub fn overall_score(psychological: u32, technical: u32, wiscar: &WiscarScores) -> u32 {
    (f64::from(psychological) * PSYCHOLOGICAL_WEIGHT
        + f64::from(technical) * TECHNICAL_WEIGHT
        + f64::from(wiscar.average()) * WISCAR_WEIGHT)
        .round() as u32
}

/// Threshold the scores into a verdict. First match wins.
pub fn recommend(overall: u32, psychological: u32, technical: u32) -> Recommendation {
    if overall >= 75 && psychological >= 70 && technical >= 60 {
        Recommendation::Pursue
    } else if overall >= 60 && (psychological >= 70 || technical >= 70) {
        Recommendation::Maybe
    } else {
        Recommendation::No
    }
}
