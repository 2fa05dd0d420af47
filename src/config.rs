use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Scoring weights configuration
///
/// One weight per risk factor; active weights must sum to 1.0 so the
/// aggregate stays on the 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight for the storage-duration factor (0.0-1.0)
    #[serde(default = "default_storage_weight")]
    pub storage: f64,

    /// Weight for the temperature-deviation factor (0.0-1.0)
    #[serde(default = "default_temperature_weight")]
    pub temperature: f64,

    /// Weight for the humidity-deviation factor (0.0-1.0)
    #[serde(default = "default_humidity_weight")]
    pub humidity: f64,

    /// Weight for the gas factor (0.0-1.0)
    #[serde(default = "default_gas_weight")]
    pub gas: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            storage: default_storage_weight(),
            temperature: default_temperature_weight(),
            humidity: default_humidity_weight(),
            gas: default_gas_weight(),
        }
    }
}

impl ScoringWeights {
    // Pure function: Check if a weight is in valid range
    fn is_valid_weight(weight: f64) -> bool {
        (0.0..=1.0).contains(&weight)
    }

    // Pure function: Validate a single weight with name
    fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if Self::is_valid_weight(weight) {
            Ok(())
        } else {
            Err(format!("{} weight must be between 0.0 and 1.0", name))
        }
    }

    /// Validate that weights are in range and sum to 1.0 (with small
    /// tolerance for floating point)
    pub fn validate(&self) -> Result<(), String> {
        Self::validate_weight(self.storage, "Storage")?;
        Self::validate_weight(self.temperature, "Temperature")?;
        Self::validate_weight(self.humidity, "Humidity")?;
        Self::validate_weight(self.gas, "Gas")?;

        let sum = self.storage + self.temperature + self.humidity + self.gas;
        if (sum - 1.0).abs() > 0.001 {
            return Err(format!(
                "Scoring weights must sum to 1.0, but sum to {:.3}",
                sum
            ));
        }
        Ok(())
    }

    /// Normalize weights to ensure they sum to exactly 1.0
    pub fn normalize(&mut self) {
        let sum = self.storage + self.temperature + self.humidity + self.gas;
        if sum > 0.0 && (sum - 1.0).abs() > 0.001 {
            self.storage /= sum;
            self.temperature /= sum;
            self.humidity /= sum;
            self.gas /= sum;
        }
    }
}

// Default weights for the weighted sum model - storage duration dominates
fn default_storage_weight() -> f64 {
    0.40 // 40% weight: shelf-life consumption is the strongest spoilage signal
}
fn default_temperature_weight() -> f64 {
    0.25 // 25% weight for deviation from the storage optimum
}
fn default_humidity_weight() -> f64 {
    0.15 // 15% weight for deviation from optimal relative humidity
}
fn default_gas_weight() -> f64 {
    0.20 // 20% weight for the averaged gas panel
}

/// Environmental baselines and sensitivities for the scorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentBaselines {
    /// Optimal storage temperature in degrees Celsius
    #[serde(default = "default_optimal_temperature_c")]
    pub optimal_temperature_c: f64,

    /// Points of temperature sub-score per degree of deviation
    #[serde(default = "default_temperature_sensitivity")]
    pub temperature_sensitivity: f64,

    /// Assumed deviation when no temperature reading is present
    #[serde(default = "default_temperature_deviation")]
    pub default_temperature_deviation: f64,

    /// Optimal relative humidity percent
    #[serde(default = "default_optimal_humidity_pct")]
    pub optimal_humidity_pct: f64,

    /// Points of humidity sub-score per percent of deviation
    #[serde(default = "default_humidity_sensitivity")]
    pub humidity_sensitivity: f64,

    /// Assumed deviation when no humidity reading is present
    #[serde(default = "default_humidity_deviation")]
    pub default_humidity_deviation: f64,
}

impl Default for EnvironmentBaselines {
    fn default() -> Self {
        Self {
            optimal_temperature_c: default_optimal_temperature_c(),
            temperature_sensitivity: default_temperature_sensitivity(),
            default_temperature_deviation: default_temperature_deviation(),
            optimal_humidity_pct: default_optimal_humidity_pct(),
            humidity_sensitivity: default_humidity_sensitivity(),
            default_humidity_deviation: default_humidity_deviation(),
        }
    }
}

impl EnvironmentBaselines {
    pub fn validate(&self) -> Result<(), String> {
        for (value, name) in [
            (self.optimal_temperature_c, "optimal_temperature_c"),
            (self.optimal_humidity_pct, "optimal_humidity_pct"),
        ] {
            if !value.is_finite() {
                return Err(format!("{} must be finite", name));
            }
        }
        for (value, name) in [
            (self.temperature_sensitivity, "temperature_sensitivity"),
            (self.humidity_sensitivity, "humidity_sensitivity"),
            (
                self.default_temperature_deviation,
                "default_temperature_deviation",
            ),
            (
                self.default_humidity_deviation,
                "default_humidity_deviation",
            ),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be finite and non-negative", name));
            }
        }
        Ok(())
    }
}

fn default_optimal_temperature_c() -> f64 {
    10.0 // Optimal storage temperature
}
fn default_temperature_sensitivity() -> f64 {
    8.0 // A 12.5 degC deviation saturates the sub-score
}
fn default_temperature_deviation() -> f64 {
    5.0 // Assumed deviation for a missing temperature sensor
}
fn default_optimal_humidity_pct() -> f64 {
    65.0 // Optimal relative humidity
}
fn default_humidity_sensitivity() -> f64 {
    4.0 // A 25-point deviation saturates the sub-score
}
fn default_humidity_deviation() -> f64 {
    10.0 // Assumed deviation for a missing humidity sensor
}

/// Gas normalization configuration
///
/// Numeric readings arrive in 0-`full_scale` concentration units; categorical
/// labels map to the fixed three-point scale below. Missing or unreadable
/// readings fall back to `missing_default` (fail-open).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasNormalization {
    /// Concentration that normalizes to 100
    #[serde(default = "default_gas_full_scale")]
    pub full_scale: f64,

    /// Normalized value for absent or unreadable readings
    #[serde(default = "default_gas_missing")]
    pub missing_default: f64,

    /// Normalized value for the `low` label
    #[serde(default = "default_gas_low")]
    pub low_score: f64,

    /// Normalized value for the `normal` label
    #[serde(default = "default_gas_normal")]
    pub normal_score: f64,

    /// Normalized value for the `high` label
    #[serde(default = "default_gas_high")]
    pub high_score: f64,
}

impl Default for GasNormalization {
    fn default() -> Self {
        Self {
            full_scale: default_gas_full_scale(),
            missing_default: default_gas_missing(),
            low_score: default_gas_low(),
            normal_score: default_gas_normal(),
            high_score: default_gas_high(),
        }
    }
}

impl GasNormalization {
    pub fn validate(&self) -> Result<(), String> {
        if !self.full_scale.is_finite() || self.full_scale <= 0.0 {
            return Err("full_scale must be finite and positive".to_string());
        }
        for (value, name) in [
            (self.missing_default, "missing_default"),
            (self.low_score, "low_score"),
            (self.normal_score, "normal_score"),
            (self.high_score, "high_score"),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(format!("{} must be between 0 and 100", name));
            }
        }
        Ok(())
    }
}

fn default_gas_full_scale() -> f64 {
    10.0
}
fn default_gas_missing() -> f64 {
    30.0 // Moderate default: missing-sensor uncertainty, not full confidence
}
fn default_gas_low() -> f64 {
    10.0
}
fn default_gas_normal() -> f64 {
    40.0
}
fn default_gas_high() -> f64 {
    85.0
}

/// Configuration for freshness tier boundaries
///
/// `score <= fresh_max` is fresh, `score <= moderate_max` is moderate,
/// everything above is high. Validation keeps the three bands a total,
/// gap-free partition of the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    /// Upper bound (inclusive) of the fresh band
    #[serde(default = "default_fresh_max")]
    pub fresh_max: u8,

    /// Upper bound (inclusive) of the moderate band
    #[serde(default = "default_moderate_max")]
    pub moderate_max: u8,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            fresh_max: default_fresh_max(),
            moderate_max: default_moderate_max(),
        }
    }
}

impl TierThresholds {
    pub fn validate(&self) -> Result<(), String> {
        if self.fresh_max >= self.moderate_max {
            return Err(format!(
                "fresh_max ({}) must be below moderate_max ({})",
                self.fresh_max, self.moderate_max
            ));
        }
        if self.moderate_max >= 100 {
            return Err(format!(
                "moderate_max ({}) must be below 100 so the high band is non-empty",
                self.moderate_max
            ));
        }
        Ok(())
    }
}

fn default_fresh_max() -> u8 {
    30
}
fn default_moderate_max() -> u8 {
    70
}

/// Complete scoring policy: weights, baselines, gas scale, tier bands
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub weights: ScoringWeights,

    #[serde(default)]
    pub baselines: EnvironmentBaselines,

    #[serde(default)]
    pub gas: GasNormalization,

    #[serde(default)]
    pub tiers: TierThresholds,
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.weights.validate()?;
        self.baselines.validate()?;
        self.gas.validate()?;
        self.tiers.validate()?;
        Ok(())
    }
}

/// Top-level `.spoilmap.toml` contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpoilmapConfig {
    pub scoring: Option<ScoringConfig>,
}

impl SpoilmapConfig {
    /// Parse a config file, surfacing IO and syntax errors to the caller.
    /// Used for explicitly-passed `--config` paths, where silent defaulting
    /// would hide a user mistake.
    pub fn from_path(path: &Path) -> crate::core::errors::Result<Self> {
        let contents = read_config_file(path)?;
        let config = toml::from_str::<SpoilmapConfig>(&contents)?;
        Ok(config)
    }

    /// The effective scoring policy, defaults applied
    pub fn scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }
}

/// Cache the configuration
static CONFIG: OnceLock<SpoilmapConfig> = OnceLock::new();
static SCORING_CONFIG: OnceLock<ScoringConfig> = OnceLock::new();

/// Pure function to read config file contents
fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
fn parse_and_validate_config(contents: &str) -> Result<SpoilmapConfig, String> {
    let mut config = toml::from_str::<SpoilmapConfig>(contents)
        .map_err(|e| format!("Failed to parse .spoilmap.toml: {}", e))?;

    // Validate and normalize the scoring section if present
    if let Some(ref mut scoring) = config.scoring {
        if let Err(e) = scoring.validate() {
            log::warn!("Invalid scoring configuration: {}. Using defaults.", e);
            config.scoring = Some(ScoringConfig::default());
        } else {
            scoring.weights.normalize(); // Ensure exact sum of 1.0
        }
    }

    Ok(config)
}

/// Pure function to try loading config from a specific path
fn try_load_config_from_path(config_path: &Path) -> Option<SpoilmapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load configuration from `.spoilmap.toml`, walking up from the current
/// directory; falls back to defaults when none is found
pub fn load_config() -> SpoilmapConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return SpoilmapConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(".spoilmap.toml"))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            SpoilmapConfig::default()
        })
}

/// Get the cached configuration
pub fn get_config() -> &'static SpoilmapConfig {
    CONFIG.get_or_init(load_config)
}

/// Get the scoring policy (with defaults if not configured)
pub fn get_scoring_config() -> &'static ScoringConfig {
    SCORING_CONFIG.get_or_init(|| get_config().scoring())
}
