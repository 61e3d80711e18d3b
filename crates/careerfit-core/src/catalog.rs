//! Question catalog loading and validation.
//!
//! Catalogs are TOML files with a `[catalog]` header and a `[[questions]]`
//! array. Catalog order defines quiz order. A built-in catalog is compiled
//! into the crate.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{Category, Question, QuestionType};

const BUILTIN_CATALOG: &str = include_str!("../catalogs/cloud-storage-engineer.toml");

/// An immutable, ordered set of questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionCatalog {
    /// Unique identifier for this catalog.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// The role being assessed, e.g. "Cloud Storage Engineer".
    #[serde(default)]
    pub role: String,
    /// Catalog revision.
    #[serde(default)]
    pub version: String,
    /// Questions in presentation order.
    pub questions: Vec<Question>,
}

impl QuestionCatalog {
    /// The 24-question Cloud Storage Engineer catalog shipped with the crate.
    pub fn builtin() -> Result<Self> {
        parse_catalog_str(BUILTIN_CATALOG, Path::new("<builtin>"))
    }

    /// Raw TOML source of the built-in catalog.
    pub fn builtin_source() -> &'static str {
        BUILTIN_CATALOG
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Question at position `index` in quiz order.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Look up a question by id.
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.id == id)
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.category == category)
    }
}

/// Intermediate TOML structure for parsing catalog files.
#[derive(Debug, Deserialize)]
struct TomlCatalogFile {
    catalog: TomlCatalogHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlCatalogHeader {
    id: String,
    name: String,
    #[serde(default)]
    role: String,
    #[serde(default = "default_version")]
    version: String,
}

fn default_version() -> String {
    "1".to_string()
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    #[serde(rename = "type")]
    question_type: String,
    category: String,
    #[serde(default)]
    subcategory: String,
    prompt: String,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default)]
    correct_answer: Option<usize>,
    #[serde(default)]
    scenario_points: Option<Vec<u32>>,
    #[serde(default = "default_weight")]
    weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

/// Parse a single TOML file into a `QuestionCatalog`.
pub fn parse_catalog(path: &Path) -> Result<QuestionCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a `QuestionCatalog` (useful for testing).
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<QuestionCatalog> {
    let parsed: TomlCatalogFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let question_type: QuestionType = q
                .question_type
                .parse()
                .map_err(|e: String| anyhow::anyhow!("question {}: {}", q.id, e))?;
            let category: Category = q
                .category
                .parse()
                .map_err(|e: String| anyhow::anyhow!("question {}: {}", q.id, e))?;

            Ok(Question {
                id: q.id,
                question_type,
                category,
                subcategory: q.subcategory.to_lowercase(),
                prompt: q.prompt.trim().to_string(),
                options: q.options,
                correct_answer: q.correct_answer,
                scenario_points: q.scenario_points,
                weight: q.weight,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        "loaded catalog '{}' with {} questions from {}",
        parsed.catalog.id,
        questions.len(),
        source_path.display()
    );

    Ok(QuestionCatalog {
        id: parsed.catalog.id,
        name: parsed.catalog.name,
        role: parsed.catalog.role,
        version: parsed.catalog.version,
        questions,
    })
}

/// Load the catalog at `path`, or the built-in one when no path is given.
pub fn load_catalog(path: Option<&Path>) -> Result<QuestionCatalog> {
    match path {
        Some(p) => parse_catalog(p),
        None => QuestionCatalog::builtin(),
    }
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn question(id: &str, message: impl Into<String>) -> Self {
        Self {
            question_id: Some(id.to_string()),
            message: message.into(),
        }
    }
}

/// Validate a catalog for common authoring mistakes.
pub fn validate_catalog(catalog: &QuestionCatalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if catalog.is_empty() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "catalog has no questions".into(),
        });
        return warnings;
    }

    let mut seen_ids = HashSet::new();
    for q in &catalog.questions {
        if !seen_ids.insert(q.id.as_str()) {
            warnings.push(ValidationWarning::question(
                &q.id,
                format!("duplicate question ID: {}", q.id),
            ));
        }

        if q.prompt.trim().is_empty() {
            warnings.push(ValidationWarning::question(&q.id, "prompt is empty"));
        }

        if q.weight.is_nan() || q.weight <= 0.0 {
            warnings.push(ValidationWarning::question(
                &q.id,
                format!("weight must be positive, got {}", q.weight),
            ));
        }

        match q.question_type {
            QuestionType::Likert => {
                if !q.options.is_empty() {
                    warnings.push(ValidationWarning::question(
                        &q.id,
                        "likert questions use the fixed 5-point scale; options are ignored",
                    ));
                }
            }
            QuestionType::MultipleChoice => {
                if q.options.is_empty() {
                    warnings.push(ValidationWarning::question(
                        &q.id,
                        "multiple-choice question has no options",
                    ));
                }
                match q.correct_answer {
                    None => warnings.push(ValidationWarning::question(
                        &q.id,
                        "multiple-choice question has no correct_answer and will always score 0",
                    )),
                    Some(idx) if idx >= q.options.len() => {
                        warnings.push(ValidationWarning::question(
                            &q.id,
                            format!(
                                "correct_answer {idx} is out of range for {} options",
                                q.options.len()
                            ),
                        ))
                    }
                    Some(_) => {}
                }
            }
            QuestionType::Scenario => {
                if q.options.is_empty() {
                    warnings.push(ValidationWarning::question(
                        &q.id,
                        "scenario question has no options",
                    ));
                }
                match &q.scenario_points {
                    None => warnings.push(ValidationWarning::question(
                        &q.id,
                        "scenario question has no scenario_points; every option scores 50",
                    )),
                    Some(points) => {
                        if points.len() != q.options.len() {
                            warnings.push(ValidationWarning::question(
                                &q.id,
                                format!(
                                    "scenario_points has {} entries for {} options",
                                    points.len(),
                                    q.options.len()
                                ),
                            ));
                        }
                        if points.iter().any(|&p| p > 100) {
                            warnings.push(ValidationWarning::question(
                                &q.id,
                                "scenario_points must be within 0..=100",
                            ));
                        }
                    }
                }
            }
        }

        if q.question_type != QuestionType::Scenario && q.scenario_points.is_some() {
            warnings.push(ValidationWarning::question(
                &q.id,
                "scenario_points is only used by scenario questions",
            ));
        }
    }

    let has_skill = catalog
        .by_category(Category::Wiscar)
        .any(|q| q.subcategory == "skill");
    if !has_skill {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "no wiscar 'skill' questions; the skill sub-score will be 0".into(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const SMALL_TOML: &str = r#"
[catalog]
id = "small"
name = "Small Catalog"
role = "Tester"

[[questions]]
id = "l1"
type = "likert"
category = "psychometric"
subcategory = "interest"
prompt = "I like tests."

[[questions]]
id = "mc1"
type = "multiple-choice"
category = "technical"
subcategory = "aptitude"
prompt = "2 + 2?"
options = ["3", "4"]
correct_answer = 1
weight = 2.0

[[questions]]
id = "s1"
type = "scenario"
category = "wiscar"
subcategory = "Skill"
prompt = "A build breaks. What do you do?"
options = ["Panic", "Bisect"]
scenario_points = [0, 100]
"#;

    #[test]
    fn parse_small_catalog() {
        let catalog = parse_catalog_str(SMALL_TOML, &PathBuf::from("small.toml")).unwrap();
        assert_eq!(catalog.id, "small");
        assert_eq!(catalog.role, "Tester");
        assert_eq!(catalog.version, "1");
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.questions[0].weight, 1.0);
        assert_eq!(catalog.get("mc1").unwrap().weight, 2.0);
        assert_eq!(catalog.get("s1").unwrap().subcategory, "skill");
        assert_eq!(catalog.index_of("s1"), Some(2));
        assert!(validate_catalog(&catalog).is_empty());
    }

    #[test]
    fn builtin_catalog_has_24_questions() {
        let catalog = QuestionCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 24);
        assert_eq!(catalog.by_category(Category::Psychometric).count(), 8);
        assert_eq!(catalog.by_category(Category::Technical).count(), 6);
        assert_eq!(catalog.by_category(Category::Wiscar).count(), 10);
        assert_eq!(catalog.questions[0].id, "psych-1");
        assert_eq!(
            catalog.get("wiscar-6").unwrap().scenario_points,
            Some(vec![30, 100, 40, 10])
        );
    }

    #[test]
    fn builtin_catalog_only_warns_about_skill() {
        let catalog = QuestionCatalog::builtin().unwrap();
        let warnings = validate_catalog(&catalog);
        assert_eq!(warnings.len(), 1, "{warnings:?}");
        assert!(warnings[0].message.contains("skill"));
    }

    #[test]
    fn unknown_question_type_is_an_error() {
        let toml = r#"
[catalog]
id = "bad"
name = "Bad"

[[questions]]
id = "e1"
type = "essay"
category = "technical"
prompt = "Explain RAID."
"#;
        let err = parse_catalog_str(toml, &PathBuf::from("bad.toml")).unwrap_err();
        assert!(err.to_string().contains("essay"));
    }

    #[test]
    fn validate_flags_authoring_mistakes() {
        let toml = r#"
[catalog]
id = "mistakes"
name = "Mistakes"

[[questions]]
id = "dup"
type = "multiple-choice"
category = "technical"
prompt = "Pick one"
options = ["a", "b"]
correct_answer = 5

[[questions]]
id = "dup"
type = "scenario"
category = "wiscar"
subcategory = "will"
prompt = "   "
options = ["a", "b", "c"]
scenario_points = [10, 20]
weight = 0.0
"#;
        let catalog = parse_catalog_str(toml, &PathBuf::from("m.toml")).unwrap();
        let warnings = validate_catalog(&catalog);
        let has = |needle: &str| warnings.iter().any(|w| w.message.contains(needle));
        assert!(has("duplicate"));
        assert!(has("out of range"));
        assert!(has("prompt is empty"));
        assert!(has("weight must be positive"));
        assert!(has("2 entries for 3 options"));
    }

    #[test]
    fn validate_empty_catalog() {
        let toml = "[catalog]\nid = \"empty\"\nname = \"Empty\"\n";
        let catalog = parse_catalog_str(toml, &PathBuf::from("e.toml")).unwrap();
        let warnings = validate_catalog(&catalog);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("no questions"));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        assert!(parse_catalog_str(bad, &PathBuf::from("bad.toml")).is_err());
    }

    #[test]
    fn load_catalog_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.toml");
        std::fs::write(&path, SMALL_TOML).unwrap();

        let catalog = load_catalog(Some(&path)).unwrap();
        assert_eq!(catalog.name, "Small Catalog");
        assert!(load_catalog(Some(&dir.path().join("missing.toml"))).is_err());
    }
}
