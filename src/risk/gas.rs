//! Gas-level normalization
//!
//! Sensors report either a numeric concentration (0-10 units) or a coarse
//! categorical label. Both are folded onto a common 0-100 scale. Anything
//! absent or unreadable degrades to the configured moderate default so that
//! partial sensor telemetry never aborts an evaluation (fail-open).

use crate::config::GasNormalization;
use crate::core::types::GasReading;

/// Coarse three-point gas level reported by categorical sensors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GasLevel {
    Low,
    Normal,
    High,
}

impl GasLevel {
    /// Case-insensitive label parse; unknown labels yield `None`
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "normal" => Some(Self::Normal),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Normalized score for this level
    pub fn score(&self, config: &GasNormalization) -> f64 {
        match self {
            Self::Low => config.low_score,
            Self::Normal => config.normal_score,
            Self::High => config.high_score,
        }
    }
}

/// Normalize one optional gas reading onto the 0-100 scale.
///
/// Numeric concentrations scale linearly against `config.full_scale` and are
/// clamped per-factor, so a negative reading can never drag the aggregate
/// below zero and an overscale one saturates at 100. Non-finite values are
/// treated as malformed telemetry and take the missing-sensor default.
pub fn normalize_gas(reading: Option<&GasReading>, config: &GasNormalization) -> f64 {
    match reading {
        None => config.missing_default,
        Some(GasReading::Concentration(value)) => {
            if !value.is_finite() {
                return config.missing_default;
            }
            ((value / config.full_scale) * 100.0).clamp(0.0, 100.0)
        }
        Some(GasReading::Label(label)) => GasLevel::parse(label)
            .map(|level| level.score(config))
            .unwrap_or(config.missing_default),
    }
}
