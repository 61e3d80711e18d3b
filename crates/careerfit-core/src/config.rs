//! careerfit configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::flow::FlowOptions;

/// Top-level careerfit configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerfitConfig {
    /// Catalog file to use instead of the built-in one.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Reject answers outside a question's option set.
    #[serde(default)]
    pub strict_answers: bool,
    /// Output directory for reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Report formats written after a run (json, html, md).
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./careerfit-results")
}

fn default_formats() -> Vec<String> {
    vec!["json".to_string()]
}

impl Default for CareerfitConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            strict_answers: false,
            output_dir: default_output_dir(),
            formats: default_formats(),
        }
    }
}

impl CareerfitConfig {
    pub fn flow_options(&self) -> FlowOptions {
        FlowOptions {
            strict_answers: self.strict_answers,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are copied verbatim and never expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `careerfit.toml` in the current directory
/// 2. `~/.config/careerfit/config.toml`
///
/// Environment variable overrides: `CAREERFIT_CATALOG`, `CAREERFIT_STRICT`.
pub fn load_config() -> Result<CareerfitConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<CareerfitConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("careerfit.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            parse_config_str(
                &std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config: {}", path.display()))?,
                &path,
            )?
        }
        None => CareerfitConfig::default(),
    };

    if let Ok(catalog) = std::env::var("CAREERFIT_CATALOG") {
        if !catalog.is_empty() {
            config.catalog = Some(PathBuf::from(catalog));
        }
    }

    if let Ok(strict) = std::env::var("CAREERFIT_STRICT") {
        config.strict_answers = matches!(
            strict.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        );
    }

    Ok(config)
}

/// Parse a config file body and expand `${VAR}` references in its paths.
pub fn parse_config_str(content: &str, source_path: &Path) -> Result<CareerfitConfig> {
    let mut config: CareerfitConfig = toml::from_str(content)
        .with_context(|| format!("failed to parse config: {}", source_path.display()))?;

    config.catalog = config.catalog.as_deref().map(resolve_path);
    config.output_dir = resolve_path(&config.output_dir);
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("careerfit"))
}
