//! The `careerfit take` command.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use careerfit_core::catalog::load_catalog;
use careerfit_core::config::load_config_from;
use careerfit_core::error::FlowError;
use careerfit_core::flow::{FlowController, FlowOptions, Step};
use careerfit_core::model::Section;
use careerfit_core::report::AssessmentReport;
use careerfit_core::traits::{elapsed_ms, SystemClock};

use super::{parse_formats, summary_tables, write_reports};

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Completed,
    Quit,
}

pub fn execute(
    catalog_path: Option<PathBuf>,
    strict: bool,
    output: Option<PathBuf>,
    format: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let catalog_path = catalog_path.or_else(|| config.catalog.clone());
    let catalog = Arc::new(load_catalog(catalog_path.as_deref())?);
    let options = FlowOptions {
        strict_answers: strict || config.strict_answers,
    };
    let output = output.unwrap_or_else(|| config.output_dir.clone());
    let formats = match format {
        Some(f) => parse_formats(&f),
        None => config.formats.clone(),
    };

    let mut controller =
        FlowController::new(Arc::clone(&catalog), Arc::new(SystemClock), options)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", catalog.name)?;
    writeln!(
        out,
        "{} questions. Answer with the option number; b = back, n = next, q = quit.",
        catalog.len()
    )?;

    if run_session(&mut controller, stdin.lock(), &mut out)? == SessionEnd::Quit {
        return Ok(());
    }

    let results = controller
        .results()
        .cloned()
        .context("assessment finished without results")?;
    let duration_ms = elapsed_ms(controller.state().start_time, chrono::Utc::now());
    let report = AssessmentReport::new(
        &catalog,
        controller.state().answers.clone(),
        results,
        duration_ms,
    );

    writeln!(out, "\n{}", summary_tables(&report.results))?;

    for path in write_reports(&report, &output, &formats)? {
        writeln!(out, "Report saved to: {}", path.display())?;
    }

    Ok(())
}

/// Drive `controller` from line-based `input` until the last question is
/// passed or the user quits.
pub fn run_session<R: BufRead, W: Write>(
    controller: &mut FlowController,
    input: R,
    out: &mut W,
) -> Result<SessionEnd> {
    if controller.section() == Section::Intro {
        controller.start()?;
    }

    let mut lines = input.lines();
    loop {
        let (position, total) = controller.progress();
        let question = controller.current_question();
        writeln!(
            out,
            "\n[{position} of {total}] {} / {}",
            question.category, question.subcategory
        )?;
        writeln!(out, "{}", question.prompt)?;
        for (i, label) in question.option_labels().iter().enumerate() {
            writeln!(out, "  {}) {}", i + 1, label)?;
        }
        if let Some(answer) = controller.current_answer() {
            writeln!(out, "  current answer: {}", answer.value + 1)?;
        }
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            anyhow::bail!("input ended before the assessment was complete");
        };
        let line = line.context("failed to read answer")?;

        match line.trim() {
            "q" | "quit" => {
                writeln!(out, "\nAssessment abandoned; nothing was scored.")?;
                return Ok(SessionEnd::Quit);
            }
            "b" | "back" => {
                controller.retreat()?;
            }
            "n" | "next" => match controller.advance() {
                Ok(Step::Completed) => return Ok(SessionEnd::Completed),
                Ok(Step::Moved(_)) => {}
                Err(e) if e.needs_answer() => {
                    writeln!(out, "Answer this question before moving on.")?;
                }
                Err(e) => return Err(e.into()),
            },
            choice => match choice.parse::<usize>() {
                Ok(number) if number >= 1 => match controller.record_answer(number - 1) {
                    Ok(()) => {
                        if controller.advance()? == Step::Completed {
                            return Ok(SessionEnd::Completed);
                        }
                    }
                    Err(FlowError::OptionOutOfRange { option_count, .. }) => {
                        writeln!(out, "Choose an option between 1 and {option_count}.")?;
                    }
                    Err(e) => return Err(e.into()),
                },
                _ => {
                    writeln!(
                        out,
                        "Enter an option number, b (back), n (next) or q (quit)."
                    )?;
                }
            },
        }
    }
}
