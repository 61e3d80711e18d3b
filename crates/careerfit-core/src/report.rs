//! Assessment report envelope with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::QuestionCatalog;
use crate::model::{upsert_answer, Answer, AssessmentResults};
use crate::scoring;

/// A finished assessment run, ready to render or export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the catalog the answers refer to.
    pub catalog: CatalogSummary,
    /// Answers as recorded.
    pub answers: Vec<Answer>,
    /// Scoring output.
    pub results: AssessmentResults,
    /// Wall-clock duration of the session in milliseconds.
    pub duration_ms: u64,
}

/// Summary of a catalog (without the full question definitions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub id: String,
    pub name: String,
    pub role: String,
    pub version: String,
    pub question_count: usize,
}

impl From<&QuestionCatalog> for CatalogSummary {
    fn from(catalog: &QuestionCatalog) -> Self {
        Self {
            id: catalog.id.clone(),
            name: catalog.name.clone(),
            role: catalog.role.clone(),
            version: catalog.version.clone(),
            question_count: catalog.len(),
        }
    }
}

impl AssessmentReport {
    /// Wrap already computed results.
    ///
    /// Answers to questions outside `catalog` are not kept; scoring ignores
    /// them anyway.
    pub fn new(
        catalog: &QuestionCatalog,
        mut answers: Vec<Answer>,
        results: AssessmentResults,
        duration_ms: u64,
    ) -> Self {
        answers.retain(|a| catalog.get(&a.question_id).is_some());
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            catalog: CatalogSummary::from(catalog),
            answers,
            results,
            duration_ms,
        }
    }

    /// Score `answers` against `catalog` and wrap the outcome.
    pub fn score(catalog: &QuestionCatalog, answers: Vec<Answer>) -> Self {
        let results = scoring::score(&answers, catalog);
        // Each time_spent_ms is measured from the session start.
        let duration_ms = answers.iter().map(|a| a.time_spent_ms).max().unwrap_or(0);
        Self::new(catalog, answers, results, duration_ms)
    }

    /// Number of catalog questions that have an answer.
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AssessmentReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

/// Load a JSON answer list, e.g. `[{"question_id": "psych-1", "value": 4}]`.
///
/// Later entries for the same question replace earlier ones.
pub fn load_answers(path: &Path) -> Result<Vec<Answer>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answers from {}", path.display()))?;
    let raw: Vec<Answer> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse answers JSON: {}", path.display()))?;

    let mut answers: Vec<Answer> = Vec::with_capacity(raw.len());
    for answer in raw {
        upsert_answer(&mut answers, answer);
    }
    Ok(answers)
}
