//! Core data model types for careerfit.
//!
//! These are the fundamental types shared by the catalog, the scoring engine,
//! the flow controller and the renderers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Labels of the fixed five-point Likert scale, in answer-index order.
pub const LIKERT_SCALE: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

/// How a question is answered and graded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    Likert,
    MultipleChoice,
    Scenario,
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionType::Likert => write!(f, "likert"),
            QuestionType::MultipleChoice => write!(f, "multiple-choice"),
            QuestionType::Scenario => write!(f, "scenario"),
        }
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "likert" => Ok(QuestionType::Likert),
            "multiple-choice" | "multiple_choice" | "mc" => Ok(QuestionType::MultipleChoice),
            "scenario" => Ok(QuestionType::Scenario),
            other => Err(format!("unknown question type: {other}")),
        }
    }
}

/// Top-level scoring bucket a question contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Psychometric,
    Technical,
    Wiscar,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Psychometric => write!(f, "psychometric"),
            Category::Technical => write!(f, "technical"),
            Category::Wiscar => write!(f, "wiscar"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "psychometric" => Ok(Category::Psychometric),
            "technical" => Ok(Category::Technical),
            "wiscar" => Ok(Category::Wiscar),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// A single catalog question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within the catalog.
    pub id: String,
    /// How the question is answered and graded.
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Scoring bucket.
    pub category: Category,
    /// Free-form grouping, e.g. "will" or "cognitive".
    pub subcategory: String,
    /// Text shown to the candidate.
    pub prompt: String,
    /// Option labels. Likert questions use [`LIKERT_SCALE`] instead.
    #[serde(default)]
    pub options: Vec<String>,
    /// Index of the correct option for multiple-choice questions.
    #[serde(default)]
    pub correct_answer: Option<usize>,
    /// Points awarded per option index for scenario questions.
    #[serde(default)]
    pub scenario_points: Option<Vec<u32>>,
    /// Relative weight inside its group.
    pub weight: f64,
}

impl Question {
    /// Number of selectable options.
    pub fn option_count(&self) -> usize {
        match self.question_type {
            QuestionType::Likert => LIKERT_SCALE.len(),
            _ => self.options.len(),
        }
    }

    /// Labels to present for this question, in index order.
    pub fn option_labels(&self) -> Vec<&str> {
        match self.question_type {
            QuestionType::Likert => LIKERT_SCALE.to_vec(),
            _ => self.options.iter().map(String::as_str).collect(),
        }
    }

    /// Whether `value` addresses one of this question's options.
    pub fn accepts(&self, value: usize) -> bool {
        value < self.option_count()
    }
}

/// A candidate's answer to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Catalog id of the answered question.
    pub question_id: String,
    /// Selected option index.
    pub value: usize,
    /// Milliseconds elapsed since the session started.
    #[serde(default)]
    pub time_spent_ms: u64,
}

/// Screen the assessment is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Intro,
    Questions,
    Results,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Intro => write!(f, "intro"),
            Section::Questions => write!(f, "questions"),
            Section::Results => write!(f, "results"),
        }
    }
}

/// Mutable session state owned by the flow controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentState {
    pub current_section: Section,
    pub current_question_index: usize,
    pub answers: Vec<Answer>,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub results: Option<AssessmentResults>,
}

impl AssessmentState {
    pub fn new(start_time: DateTime<Utc>) -> Self {
        Self {
            current_section: Section::Intro,
            current_question_index: 0,
            answers: Vec::new(),
            start_time,
            results: None,
        }
    }

    /// Find the answer recorded for `question_id`.
    pub fn answer_for(&self, question_id: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.question_id == question_id)
    }

    /// Insert `answer`, replacing any earlier answer to the same question.
    pub fn upsert_answer(&mut self, answer: Answer) {
        upsert_answer(&mut self.answers, answer);
    }
}

/// Insert `answer` into `answers`, replacing any earlier answer to the same
/// question in place.
pub fn upsert_answer(answers: &mut Vec<Answer>, answer: Answer) {
    match answers
        .iter_mut()
        .find(|a| a.question_id == answer.question_id)
    {
        Some(existing) => *existing = answer,
        None => answers.push(answer),
    }
}

/// The six WISCAR sub-scores, each 0..=100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WiscarScores {
    pub will: u32,
    pub interest: u32,
    pub skill: u32,
    pub cognitive: u32,
    pub ability: u32,
    pub real_world: u32,
}

impl WiscarScores {
    /// Subcategory keys, in the order of [`WiscarScores::values`].
    pub const KEYS: [&'static str; 6] = [
        "will",
        "interest",
        "skill",
        "cognitive",
        "ability",
        "realworld",
    ];

    pub fn values(&self) -> [u32; 6] {
        [
            self.will,
            self.interest,
            self.skill,
            self.cognitive,
            self.ability,
            self.real_world,
        ]
    }

    /// Unweighted mean of all six entries, rounded to the nearest integer.
    pub fn average(&self) -> u32 {
        let sum: u32 = self.values().iter().sum();
        (f64::from(sum) / 6.0).round() as u32
    }
}

/// All numeric results of a scoring pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub psychological: u32,
    pub technical: u32,
    pub wiscar: WiscarScores,
    pub overall: u32,
}

/// Categorical career-fit verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Pursue,
    Maybe,
    No,
}

impl Recommendation {
    /// Headline shown on the results dashboard.
    pub fn title(&self) -> &'static str {
        match self {
            Recommendation::Pursue => "Strong Recommendation: Pursue This Career",
            Recommendation::Maybe => "Conditional Recommendation: Consider With Preparation",
            Recommendation::No => "Alternative Paths Recommended",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Recommendation::Pursue => "You show excellent potential for success in this role. Your profile indicates strong alignment with the role requirements.",
            Recommendation::Maybe => "You have some good qualities for this role, but would benefit from additional preparation and skill development before pursuing it seriously.",
            Recommendation::No => "Based on your current profile, other career paths might be a better fit for your interests and strengths. Consider the alternatives below.",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Pursue => write!(f, "pursue"),
            Recommendation::Maybe => write!(f, "maybe"),
            Recommendation::No => write!(f, "no"),
        }
    }
}

/// A suggested role with how well the candidate matches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerPath {
    pub title: String,
    /// Match percentage, 0..=100.
    #[serde(rename = "match")]
    pub match_percent: u32,
    pub description: String,
    pub requirements: Vec<String>,
    pub timeline: String,
}

/// Immutable output of the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResults {
    pub scores: Scores,
    pub recommendation: Recommendation,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub next_steps: Vec<String>,
    /// Sorted by descending match.
    pub career_paths: Vec<CareerPath>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(id: &str, value: usize) -> Answer {
        Answer {
            question_id: id.into(),
            value,
            time_spent_ms: 0,
        }
    }

    #[test]
    fn question_type_display_and_parse() {
        assert_eq!(QuestionType::MultipleChoice.to_string(), "multiple-choice");
        assert_eq!(
            "multiple-choice".parse::<QuestionType>().unwrap(),
            QuestionType::MultipleChoice
        );
        assert_eq!("Likert".parse::<QuestionType>().unwrap(), QuestionType::Likert);
        assert!("essay".parse::<QuestionType>().is_err());
        assert_eq!("WISCAR".parse::<Category>().unwrap(), Category::Wiscar);
    }

    #[test]
    fn likert_uses_fixed_scale() {
        let q = Question {
            id: "q".into(),
            question_type: QuestionType::Likert,
            category: Category::Psychometric,
            subcategory: "interest".into(),
            prompt: "I like storage.".into(),
            options: vec![],
            correct_answer: None,
            scenario_points: None,
            weight: 1.0,
        };
        assert_eq!(q.option_count(), 5);
        assert_eq!(q.option_labels()[4], "Strongly Agree");
        assert!(q.accepts(4));
        assert!(!q.accepts(5));
    }

    #[test]
    fn upsert_replaces_existing_answer() {
        let mut state = AssessmentState::new(Utc::now());
        state.upsert_answer(answer("a", 1));
        state.upsert_answer(answer("b", 2));
        state.upsert_answer(answer("a", 3));

        assert_eq!(state.answers.len(), 2);
        assert_eq!(state.answer_for("a").unwrap().value, 3);
        assert_eq!(state.answers[0].question_id, "a");
    }

    #[test]
    fn wiscar_average_includes_every_entry() {
        let w = WiscarScores {
            will: 95,
            interest: 100,
            skill: 0,
            cognitive: 100,
            ability: 100,
            real_world: 100,
        };
        // 495 / 6 = 82.5
        assert_eq!(w.average(), 83);
    }

    #[test]
    fn wiscar_serializes_real_world_in_camel_case() {
        let json = serde_json::to_string(&WiscarScores::default()).unwrap();
        assert!(json.contains("\"realWorld\""));
    }

    #[test]
    fn career_path_serializes_match_field() {
        let path = CareerPath {
            title: "DevOps Engineer".into(),
            match_percent: 42,
            description: String::new(),
            requirements: vec![],
            timeline: String::new(),
        };
        let json = serde_json::to_value(&path).unwrap();
        assert_eq!(json["match"], 42);
    }
}
