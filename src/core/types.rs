//! Common type definitions used across the engine
//!
//! All types serialize with camelCase field names to match the snapshot
//! format produced by the surrounding ingestion layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a stored batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    /// In storage, eligible for evaluation and dispatch
    Active,
    /// Sent to a destination channel (terminal)
    Dispatched,
    /// Past shelf life (terminal)
    Expired,
}

impl BatchStatus {
    /// Terminal states admit no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Dispatched | Self::Expired)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Dispatched => "dispatched",
            Self::Expired => "expired",
        }
    }
}

impl Default for BatchStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single gas-sensor reading.
///
/// Cheaper sensors report a coarse categorical label, calibrated ones a
/// numeric concentration in 0-10 units. The untagged representation accepts
/// either JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GasReading {
    Concentration(f64),
    Label(String),
}

/// Immutable input to the risk engine: one batch as of a single polling cycle.
///
/// Constructed by the external storage layer whenever a batch is created or
/// re-measured; the engine consumes it once per evaluation and keeps no state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSnapshot {
    pub batch_id: String,

    /// When the batch entered storage
    pub entry_date: DateTime<Utc>,

    /// Total expected usable life in days; must be positive
    pub shelf_life_days: f64,

    #[serde(default)]
    pub temperature_c: Option<f64>,

    #[serde(default)]
    pub humidity_pct: Option<f64>,

    #[serde(default)]
    pub ethylene: Option<GasReading>,

    #[serde(default)]
    pub co2: Option<GasReading>,

    #[serde(default)]
    pub ammonia: Option<GasReading>,

    #[serde(default)]
    pub status: BatchStatus,
}

/// Discretized risk band for a scored batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FreshnessTier {
    Fresh,
    Moderate,
    High,
}

impl FreshnessTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl fmt::Display for FreshnessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Downstream channel a batch is recommended to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationClass {
    RetailQuickCommerce,
    HotelRestaurant,
    ProcessingUnit,
}

impl DestinationClass {
    /// Wire name, as the surrounding service layer expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RetailQuickCommerce => "retail_quick_commerce",
            Self::HotelRestaurant => "hotel_restaurant",
            Self::ProcessingUnit => "processing_unit",
        }
    }

    /// Human label for display surfaces
    pub fn label(&self) -> &'static str {
        match self {
            Self::RetailQuickCommerce => "Retail / quick commerce",
            Self::HotelRestaurant => "Hotel & restaurant supply",
            Self::ProcessingUnit => "Processing unit",
        }
    }
}

impl fmt::Display for DestinationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engine output for one evaluation; never persisted by the engine itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Spoilage risk on the 0-100 integer scale, higher = more at risk
    pub score: u8,
    pub tier: FreshnessTier,
    pub computed_at: DateTime<Utc>,
}

/// Where and when a batch was dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchRecord {
    pub destination: DestinationClass,
    pub dispatch_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_status_terminality() {
        assert!(!BatchStatus::Active.is_terminal());
        assert!(BatchStatus::Dispatched.is_terminal());
        assert!(BatchStatus::Expired.is_terminal());
    }

    #[test]
    fn gas_reading_accepts_numeric_and_label_json() {
        let numeric: GasReading = serde_json::from_str("4.2").unwrap();
        assert_eq!(numeric, GasReading::Concentration(4.2));

        let label: GasReading = serde_json::from_str("\"High\"").unwrap();
        assert_eq!(label, GasReading::Label("High".to_string()));
    }

    #[test]
    fn snapshot_deserializes_with_missing_sensor_fields() {
        let json = r#"{
            "batchId": "B-1001",
            "entryDate": "2025-06-01T00:00:00Z",
            "shelfLifeDays": 14
        }"#;
        let snapshot: BatchSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.batch_id, "B-1001");
        assert_eq!(snapshot.status, BatchStatus::Active);
        assert!(snapshot.temperature_c.is_none());
        assert!(snapshot.ethylene.is_none());
    }

    #[test]
    fn destination_class_wire_names() {
        let json = serde_json::to_string(&DestinationClass::RetailQuickCommerce).unwrap();
        assert_eq!(json, "\"retail_quick_commerce\"");
        assert_eq!(DestinationClass::HotelRestaurant.as_str(), "hotel_restaurant");
    }

    #[test]
    fn tier_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&FreshnessTier::Moderate).unwrap(),
            "\"moderate\""
        );
    }
}
