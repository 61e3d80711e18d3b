use std::path::Path;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use careerfit_core::catalog::{parse_catalog_str, QuestionCatalog};
use careerfit_core::model::{Answer, QuestionType};
use careerfit_core::scoring::{raw_score, score};

fn best_answers(catalog: &QuestionCatalog) -> Vec<Answer> {
    catalog
        .iter()
        .map(|q| {
            let value = match q.question_type {
                QuestionType::Likert => 4,
                QuestionType::MultipleChoice => q.correct_answer.unwrap_or(0),
                QuestionType::Scenario => q
                    .scenario_points
                    .as_ref()
                    .and_then(|points| {
                        points
                            .iter()
                            .enumerate()
                            .max_by_key(|(_, p)| **p)
                            .map(|(i, _)| i)
                    })
                    .unwrap_or(0),
            };
            Answer {
                question_id: q.id.clone(),
                value,
                time_spent_ms: 0,
            }
        })
        .collect()
}

fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");
    let catalog = QuestionCatalog::builtin().unwrap();

    group.bench_function("best_answers", |b| {
        let answers = best_answers(&catalog);
        b.iter(|| score(black_box(&answers), black_box(&catalog)))
    });

    group.bench_function("no_answers", |b| {
        let answers: Vec<Answer> = Vec::new();
        b.iter(|| score(black_box(&answers), black_box(&catalog)))
    });

    group.bench_function("duplicates", |b| {
        let mut answers = best_answers(&catalog);
        answers.extend(best_answers(&catalog));
        b.iter(|| score(black_box(&answers), black_box(&catalog)))
    });

    group.finish();
}

fn bench_raw_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("raw_score");
    let catalog = QuestionCatalog::builtin().unwrap();

    for id in ["psych-1", "tech-1", "wiscar-1"] {
        let question = catalog.get(id).unwrap().clone();
        group.bench_function(id, |b| {
            b.iter(|| raw_score(black_box(&question), black_box(1)))
        });
    }

    group.finish();
}

fn bench_parse_catalog(c: &mut Criterion) {
    let source = QuestionCatalog::builtin_source();
    c.bench_function("parse_builtin_catalog", |b| {
        b.iter(|| parse_catalog_str(black_box(source), Path::new("<bench>")))
    });
}

criterion_group!(benches, bench_score, bench_raw_score, bench_parse_catalog);
criterion_main!(benches);
