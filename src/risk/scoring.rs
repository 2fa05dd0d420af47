// Pure functions for spoilage sub-score calculation

use chrono::{DateTime, Utc};

use super::gas::normalize_gas;
use crate::config::{EnvironmentBaselines, GasNormalization, ScoringWeights};
use crate::core::types::BatchSnapshot;

/// Days elapsed since the batch entered storage, fractional, floored at zero
/// for future-dated entries
pub fn elapsed_days(entry_date: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let seconds = (now - entry_date).num_seconds() as f64;
    (seconds / 86_400.0).max(0.0)
}

/// Fraction of shelf life consumed, on the 0-100 scale
pub fn storage_score(elapsed_days: f64, shelf_life_days: f64) -> f64 {
    ((elapsed_days / shelf_life_days) * 100.0).clamp(0.0, 100.0)
}

/// Deviation of the measured temperature from the storage optimum, scaled by
/// the configured sensitivity; a missing sensor takes the default deviation
pub fn temperature_score(temperature_c: Option<f64>, baselines: &EnvironmentBaselines) -> f64 {
    let deviation = temperature_c
        .map(|t| (t - baselines.optimal_temperature_c).abs())
        .unwrap_or(baselines.default_temperature_deviation);
    (deviation * baselines.temperature_sensitivity).clamp(0.0, 100.0)
}

/// Deviation of the measured relative humidity from the optimum, scaled by
/// the configured sensitivity; a missing sensor takes the default deviation
pub fn humidity_score(humidity_pct: Option<f64>, baselines: &EnvironmentBaselines) -> f64 {
    let deviation = humidity_pct
        .map(|h| (h - baselines.optimal_humidity_pct).abs())
        .unwrap_or(baselines.default_humidity_deviation);
    (deviation * baselines.humidity_sensitivity).clamp(0.0, 100.0)
}

/// Mean of the normalized gas panel (ethylene, CO2, ammonia)
pub fn gas_score(snapshot: &BatchSnapshot, config: &GasNormalization) -> f64 {
    let readings = [
        snapshot.ethylene.as_ref(),
        snapshot.co2.as_ref(),
        snapshot.ammonia.as_ref(),
    ];
    let total: f64 = readings
        .iter()
        .map(|reading| normalize_gas(*reading, config))
        .sum();
    total / readings.len() as f64
}

/// Weighted aggregate of the four factors, clamped and rounded onto the
/// 0-100 integer scale
pub fn combine(
    storage: f64,
    temperature: f64,
    humidity: f64,
    gas: f64,
    weights: &ScoringWeights,
) -> u8 {
    let overall = storage * weights.storage
        + temperature * weights.temperature
        + humidity * weights.humidity
        + gas * weights.gas;
    overall.clamp(0.0, 100.0).round() as u8
}
