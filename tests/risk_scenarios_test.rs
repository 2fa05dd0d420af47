//! End-to-end scenarios for the scoring pipeline: snapshot -> score -> tier
//! -> destination, plus the lifecycle contract cases.

use chrono::{DateTime, Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;
use spoilmap::{
    route, BatchLifecycle, BatchSnapshot, BatchStatus, DestinationClass, Error, FreshnessTier,
    GasReading, RiskScorer,
};

fn at_noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

fn snapshot(shelf_life_days: f64, elapsed: Duration, now: DateTime<Utc>) -> BatchSnapshot {
    BatchSnapshot {
        batch_id: "B-1001".to_string(),
        entry_date: now - elapsed,
        shelf_life_days,
        temperature_c: None,
        humidity_pct: None,
        ethylene: None,
        co2: None,
        ammonia: None,
        status: BatchStatus::Active,
    }
}

fn normal_gas() -> Option<GasReading> {
    Some(GasReading::Label("normal".to_string()))
}

#[test]
fn halfway_through_shelf_life_under_ideal_conditions_is_fresh() {
    let now = at_noon();
    let snap = BatchSnapshot {
        temperature_c: Some(10.0),
        humidity_pct: Some(65.0),
        ethylene: normal_gas(),
        co2: normal_gas(),
        ammonia: normal_gas(),
        ..snapshot(10.0, Duration::days(5), now)
    };

    let assessment = RiskScorer::default().evaluate(&snap, now).unwrap();
    // storage 50 * 0.40 + gas 40 * 0.20, temperature and humidity at optimum
    assert_eq!(assessment.score, 28);
    assert_eq!(assessment.tier, FreshnessTier::Fresh);
    assert_eq!(assessment.computed_at, now);
    assert_eq!(
        route(assessment.tier),
        DestinationClass::RetailQuickCommerce
    );
}

#[test]
fn fully_consumed_shelf_life_raises_the_tier_to_moderate() {
    let now = at_noon();
    let snap = BatchSnapshot {
        temperature_c: Some(10.0),
        humidity_pct: Some(65.0),
        ethylene: normal_gas(),
        co2: normal_gas(),
        ammonia: normal_gas(),
        ..snapshot(10.0, Duration::days(10), now)
    };

    let assessment = RiskScorer::default().evaluate(&snap, now).unwrap();
    // storage saturates at 100: 40 + 8
    assert_eq!(assessment.score, 48);
    assert_eq!(assessment.tier, FreshnessTier::Moderate);
    assert_eq!(route(assessment.tier), DestinationClass::HotelRestaurant);
}

#[test]
fn all_sensors_absent_scores_from_documented_defaults() {
    let now = at_noon();
    let snap = snapshot(20.0, Duration::zero(), now);

    let assessment = RiskScorer::default().evaluate(&snap, now).unwrap();
    // temperature default deviation 5 -> 40, humidity default 10 -> 40,
    // gas panel 30 each: 0 + 10 + 6 + 6
    assert_eq!(assessment.score, 22);
    assert_eq!(assessment.tier, FreshnessTier::Fresh);
}

#[test]
fn zero_shelf_life_raises_invalid_configuration() {
    let now = at_noon();
    let snap = snapshot(0.0, Duration::days(1), now);

    let err = RiskScorer::default().evaluate(&snap, now).unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration(_)));
}

#[test]
fn dispatching_an_already_dispatched_batch_fails_and_leaves_state() {
    let now = at_noon();
    let mut lifecycle = BatchLifecycle::new("B-1001");
    lifecycle
        .dispatch(DestinationClass::RetailQuickCommerce, now)
        .unwrap();

    let err = lifecycle
        .dispatch(DestinationClass::ProcessingUnit, now + Duration::hours(1))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidTransition {
            from: BatchStatus::Dispatched,
            attempted: BatchStatus::Dispatched,
            ..
        }
    ));

    // State and the original dispatch record are untouched
    assert_eq!(lifecycle.status(), BatchStatus::Dispatched);
    let record = lifecycle.dispatch_record().unwrap();
    assert_eq!(record.destination, DestinationClass::RetailQuickCommerce);
    assert_eq!(record.dispatch_date, now);
}

#[test]
fn worst_case_batch_hits_the_processing_unit() {
    let now = at_noon();
    let snap = BatchSnapshot {
        temperature_c: Some(35.0),
        humidity_pct: Some(20.0),
        ethylene: Some(GasReading::Label("high".to_string())),
        co2: Some(GasReading::Concentration(9.5)),
        ammonia: Some(GasReading::Label("HIGH".to_string())),
        ..snapshot(7.0, Duration::days(21), now)
    };

    let assessment = RiskScorer::default().evaluate(&snap, now).unwrap();
    // storage 100, temperature 100, humidity 100, gas (85 + 95 + 85) / 3
    assert_eq!(assessment.score, 98);
    assert_eq!(assessment.tier, FreshnessTier::High);
    assert_eq!(route(assessment.tier), DestinationClass::ProcessingUnit);
}

#[test]
fn mixed_numeric_and_categorical_gas_readings_combine() {
    let now = at_noon();
    let snap = BatchSnapshot {
        temperature_c: Some(10.0),
        humidity_pct: Some(65.0),
        ethylene: Some(GasReading::Concentration(2.0)), // 20
        co2: Some(GasReading::Label("low".to_string())), // 10
        ammonia: None,                                   // 30
        ..snapshot(10.0, Duration::zero(), now)
    };

    let assessment = RiskScorer::default().evaluate(&snap, now).unwrap();
    // gas mean 20, weighted 0.20 -> 4
    assert_eq!(assessment.score, 4);
}

#[test]
fn future_entry_date_scores_as_day_zero() {
    let now = at_noon();
    let mut snap = snapshot(10.0, Duration::zero(), now);
    snap.entry_date = now + Duration::days(3);

    let assessment = RiskScorer::default().evaluate(&snap, now).unwrap();
    // Same as elapsed zero: defaults only
    assert_eq!(assessment.score, 22);
}
