//! Spoilage risk evaluation
//!
//! The scorer is a pure function of (snapshot, timestamp, configuration):
//! no hidden state, no randomness, no I/O. Identical inputs always produce
//! an identical assessment, so evaluations may run in parallel without
//! coordination.

pub mod classification;
pub mod gas;
pub mod scoring;

use chrono::{DateTime, Utc};
use rayon::prelude::*;

use crate::config::ScoringConfig;
use crate::core::errors::{Error, Result};
use crate::core::types::{BatchSnapshot, RiskAssessment};

/// Stateless spoilage risk scorer for batch snapshots
#[derive(Debug, Clone)]
pub struct RiskScorer {
    config: ScoringConfig,
}

impl RiskScorer {
    /// Build a scorer from a validated scoring policy
    pub fn new(config: ScoringConfig) -> Result<Self> {
        config.validate().map_err(Error::InvalidConfiguration)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Evaluate one snapshot as of `now`.
    ///
    /// The snapshot's `status` is read-only here; lifecycle transitions go
    /// through [`crate::lifecycle::BatchLifecycle`] only.
    pub fn evaluate(&self, snapshot: &BatchSnapshot, now: DateTime<Utc>) -> Result<RiskAssessment> {
        validate_shelf_life(snapshot)?;

        let elapsed = scoring::elapsed_days(snapshot.entry_date, now);
        let storage = scoring::storage_score(elapsed, snapshot.shelf_life_days);
        let temperature = scoring::temperature_score(snapshot.temperature_c, &self.config.baselines);
        let humidity = scoring::humidity_score(snapshot.humidity_pct, &self.config.baselines);
        let gas = scoring::gas_score(snapshot, &self.config.gas);

        let score = scoring::combine(storage, temperature, humidity, gas, &self.config.weights);
        let tier = classification::classify(score, &self.config.tiers);

        log::debug!(
            "batch {} scored {} ({}) after {:.2} elapsed days",
            snapshot.batch_id,
            score,
            tier,
            elapsed
        );

        Ok(RiskAssessment {
            score,
            tier,
            computed_at: now,
        })
    }

    /// Evaluate a slice of snapshots in parallel against a single `now`.
    ///
    /// Results keep the input order; per-batch contract violations stay in
    /// their slot instead of aborting the whole run.
    pub fn evaluate_batches(
        &self,
        snapshots: &[BatchSnapshot],
        now: DateTime<Utc>,
    ) -> Vec<Result<RiskAssessment>> {
        snapshots
            .par_iter()
            .map(|snapshot| self.evaluate(snapshot, now))
            .collect()
    }
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self {
            config: ScoringConfig::default(),
        }
    }
}

/// Caller contract: a snapshot's shelf life must be finite and positive.
/// Unlike missing sensor data this is never defaulted.
pub(crate) fn validate_shelf_life(snapshot: &BatchSnapshot) -> Result<()> {
    if !snapshot.shelf_life_days.is_finite() || snapshot.shelf_life_days <= 0.0 {
        return Err(Error::invalid_configuration(format!(
            "shelf_life_days must be positive, got {} for batch {}",
            snapshot.shelf_life_days, snapshot.batch_id
        )));
    }
    Ok(())
}
