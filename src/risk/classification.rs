//! Freshness tier classification
//!
//! Maps a risk score onto one of three contiguous bands. Total over the u8
//! score range by construction: the two thresholds are validated to keep the
//! bands non-overlapping and gap-free.

use crate::config::TierThresholds;
use crate::core::types::FreshnessTier;

/// Classify a risk score into its freshness tier
pub fn classify(score: u8, thresholds: &TierThresholds) -> FreshnessTier {
    if score <= thresholds.fresh_max {
        FreshnessTier::Fresh
    } else if score <= thresholds.moderate_max {
        FreshnessTier::Moderate
    } else {
        FreshnessTier::High
    }
}
