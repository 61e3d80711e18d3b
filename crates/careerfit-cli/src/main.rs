//! careerfit CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "careerfit", version, about = "Career-readiness self-assessment")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the assessment interactively
    Take {
        /// Path to a .toml question catalog (default: built-in)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Reject option numbers a question does not offer
        #[arg(long)]
        strict: bool,

        /// Output directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: json, html, md, all (comma-separated)
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Score a JSON answer file
    Score {
        /// JSON array of {question_id, value, time_spent_ms?}
        #[arg(long)]
        answers: PathBuf,

        /// Path to a .toml question catalog (default: built-in)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Validate a question catalog
    Validate {
        /// Path to a .toml question catalog (default: built-in)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// List the questions in a catalog
    Questions {
        /// Path to a .toml question catalog (default: built-in)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Create starter config and an editable catalog
    Init,
}

fn main() {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "careerfit=info".parse::<tracing_subscriber::filter::Directive>() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Take {
            catalog,
            strict,
            output,
            format,
            config,
        } => commands::take::execute(catalog, strict, output, format, config),
        Commands::Score {
            answers,
            catalog,
            format,
        } => commands::score::execute(answers, catalog, format),
        Commands::Validate { catalog } => commands::validate::execute(catalog),
        Commands::Questions { catalog } => commands::questions::execute(catalog),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
