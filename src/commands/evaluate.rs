//! The `evaluate` command: score a file of batch snapshots and recommend
//! destination channels.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, Table};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::{self, ScoringConfig, SpoilmapConfig};
use crate::core::types::{BatchSnapshot, DestinationClass, FreshnessTier};
use crate::risk::RiskScorer;
use crate::routing::route;

pub struct EvaluateConfig {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub at: Option<String>,
}

/// One output row per input snapshot. Contract violations are reported per
/// batch instead of aborting the whole run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchEvaluation {
    batch_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tier: Option<FreshnessTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    destination_class: Option<DestinationClass>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn evaluate_batches(cmd: EvaluateConfig) -> Result<()> {
    let now = resolve_timestamp(cmd.at.as_deref())?;
    let scoring = resolve_scoring_config(cmd.config.as_deref())?;
    let scorer = RiskScorer::new(scoring)?;

    let contents = fs::read_to_string(&cmd.input)
        .with_context(|| format!("Failed to read {}", cmd.input.display()))?;
    let snapshots: Vec<BatchSnapshot> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {} as a snapshot array", cmd.input.display()))?;

    log::info!("evaluating {} batches as of {}", snapshots.len(), now);
    let assessments = scorer.evaluate_batches(&snapshots, now);

    let rows: Vec<BatchEvaluation> = snapshots
        .iter()
        .zip(assessments)
        .map(|(snapshot, result)| match result {
            Ok(assessment) => BatchEvaluation {
                batch_id: snapshot.batch_id.clone(),
                score: Some(assessment.score),
                tier: Some(assessment.tier),
                destination_class: Some(route(assessment.tier)),
                error: None,
            },
            Err(e) => BatchEvaluation {
                batch_id: snapshot.batch_id.clone(),
                score: None,
                tier: None,
                destination_class: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    let rendered = match cmd.format {
        OutputFormat::Json => serde_json::to_string_pretty(&rows)?,
        OutputFormat::Table => render_table(&rows),
    };

    match cmd.output {
        Some(path) => {
            fs::write(&path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("wrote evaluation to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Explicit --config paths surface their errors; the discovered config
/// degrades to defaults like the rest of the loader
fn resolve_scoring_config(path: Option<&Path>) -> Result<ScoringConfig> {
    match path {
        Some(path) => {
            let file = SpoilmapConfig::from_path(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            Ok(file.scoring())
        }
        None => Ok(config::get_scoring_config().clone()),
    }
}

fn resolve_timestamp(at: Option<&str>) -> Result<DateTime<Utc>> {
    match at {
        Some(raw) => {
            let parsed = DateTime::parse_from_rfc3339(raw)
                .with_context(|| format!("Invalid --at timestamp: {}", raw))?;
            Ok(parsed.with_timezone(&Utc))
        }
        None => Ok(Utc::now()),
    }
}

fn render_table(rows: &[BatchEvaluation]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Batch", "Score", "Tier", "Destination"]);

    for row in rows {
        match (&row.tier, &row.error) {
            (Some(tier), _) => {
                let destination = row
                    .destination_class
                    .map(|d| d.label())
                    .unwrap_or_default();
                table.add_row(vec![
                    Cell::new(&row.batch_id),
                    Cell::new(row.score.unwrap_or_default()),
                    Cell::new(tier.as_str()).fg(tier_color(*tier)),
                    Cell::new(destination),
                ]);
            }
            (None, Some(error)) => {
                table.add_row(vec![
                    Cell::new(&row.batch_id),
                    Cell::new("-"),
                    Cell::new("error").fg(Color::Red),
                    Cell::new(error),
                ]);
            }
            (None, None) => unreachable!("evaluation rows carry a tier or an error"),
        }
    }

    table.to_string()
}

fn tier_color(tier: FreshnessTier) -> Color {
    match tier {
        FreshnessTier::Fresh => Color::Green,
        FreshnessTier::Moderate => Color::Yellow,
        FreshnessTier::High => Color::Red,
    }
}
