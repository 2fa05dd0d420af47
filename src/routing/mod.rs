//! Allocation routing policy
//!
//! Maps a freshness tier to the downstream channel a batch should be offered
//! to. A pure lookup, total over the closed tier enum; there is no default
//! arm to drift out of sync with the tier set.

use crate::core::types::{DestinationClass, FreshnessTier};

/// Recommended destination channel for a batch in the given tier
pub fn route(tier: FreshnessTier) -> DestinationClass {
    match tier {
        FreshnessTier::Fresh => DestinationClass::RetailQuickCommerce,
        FreshnessTier::Moderate => DestinationClass::HotelRestaurant,
        FreshnessTier::High => DestinationClass::ProcessingUnit,
    }
}
