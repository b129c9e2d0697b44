//! Output formatting for different formats.

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tabled::{settings::Style, Table, Tabled};
use veriframe::{HealthDisplay, HealthStatus, PredictionResult};

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed tables with colors
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// YAML output
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "table" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json, csv, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

#[derive(Tabled)]
struct ScoreRow {
    #[tabled(rename = "Class")]
    class: &'static str,
    #[tabled(rename = "Probability")]
    probability: String,
    #[tabled(rename = "Raw Score")]
    raw: String,
}

/// Render a prediction for `file_name` in the requested format.
pub fn render_prediction(
    file_name: &str,
    result: &PredictionResult,
    format: OutputFormat,
    no_color: bool,
) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
        OutputFormat::Yaml => serde_yaml::to_string(result)?,
        OutputFormat::Csv => format!(
            "file,prediction,confidence,authentic,tampered,class_0,class_1\n{},{},{},{},{},{},{}",
            file_name,
            result.label,
            result.confidence,
            result.probabilities.authentic,
            result.probabilities.tampered,
            result.raw_scores.class0,
            result.raw_scores.class1,
        ),
        OutputFormat::Pretty => {
            let verdict = result.label.to_string();
            let verdict = if no_color {
                verdict
            } else if result.is_authentic() {
                verdict.green().bold().to_string()
            } else {
                verdict.red().bold().to_string()
            };

            let rows = [
                ScoreRow {
                    class: "Authentic",
                    probability: format!("{:.1}%", result.probabilities.authentic * 100.0),
                    raw: format!("{:.4}", result.raw_scores.class0),
                },
                ScoreRow {
                    class: "Tampered",
                    probability: format!("{:.1}%", result.probabilities.tampered * 100.0),
                    raw: format!("{:.4}", result.raw_scores.class1),
                },
            ];
            let mut table = Table::new(rows);
            table.with(Style::rounded());

            format!(
                "File: {file_name}\nVerdict: {verdict}\nConfidence: {:.1}%\n\n{table}",
                result.confidence_percent()
            )
        }
    };

    Ok(rendered)
}

/// Render a health status (or the pre-first-check state) in the requested format.
pub fn render_health(
    status: Option<&HealthStatus>,
    format: OutputFormat,
    no_color: bool,
) -> anyhow::Result<String> {
    let display = HealthDisplay::from_status(status);

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "display": display,
            "status": status,
        }))?,
        OutputFormat::Yaml => serde_yaml::to_string(&serde_json::json!({
            "display": display,
            "status": status,
        }))?,
        OutputFormat::Csv => format!(
            "display,reachable,model_ready,checked_at\n{},{},{},{}",
            display,
            status.is_some_and(|s| s.reachable),
            status.is_some_and(|s| s.model_ready),
            status.map(|s| s.checked_at.to_rfc3339()).unwrap_or_default(),
        ),
        OutputFormat::Pretty => {
            let label = display.to_string();
            if no_color {
                label
            } else {
                match display {
                    HealthDisplay::Ready => label.green().bold().to_string(),
                    HealthDisplay::ModelNotLoaded => label.yellow().bold().to_string(),
                    HealthDisplay::Offline => label.red().bold().to_string(),
                    HealthDisplay::Checking => label.dimmed().to_string(),
                }
            }
        }
    };

    Ok(rendered)
}
