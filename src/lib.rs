// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod lifecycle;
pub mod risk;
pub mod routing;

// Re-export commonly used types
pub use crate::core::errors::{Error, Result};
pub use crate::core::types::{
    BatchSnapshot, BatchStatus, DestinationClass, DispatchRecord, FreshnessTier, GasReading,
    RiskAssessment,
};

pub use crate::config::{
    get_config, get_scoring_config, load_config, EnvironmentBaselines, GasNormalization,
    ScoringConfig, ScoringWeights, SpoilmapConfig, TierThresholds,
};

pub use crate::risk::{
    classification::classify,
    gas::{normalize_gas, GasLevel},
    RiskScorer,
};

pub use crate::lifecycle::{is_past_shelf_life, should_prompt_dispatch, BatchLifecycle};

pub use crate::routing::route;
