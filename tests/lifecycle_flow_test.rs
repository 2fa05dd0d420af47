//! Integration flow: evaluate a batch, consult the assessment, and drive the
//! lifecycle the way the surrounding service layer would.

use chrono::{DateTime, Duration, TimeZone, Utc};
use spoilmap::{
    is_past_shelf_life, route, should_prompt_dispatch, BatchLifecycle, BatchSnapshot, BatchStatus,
    Error, FreshnessTier, GasReading, RiskScorer,
};

fn morning() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 1, 6, 0, 0).unwrap()
}

fn aging_snapshot(now: DateTime<Utc>) -> BatchSnapshot {
    BatchSnapshot {
        batch_id: "B-204".to_string(),
        entry_date: now - Duration::days(8),
        shelf_life_days: 10.0,
        temperature_c: Some(14.0),
        humidity_pct: Some(55.0),
        ethylene: Some(GasReading::Label("high".to_string())),
        co2: Some(GasReading::Concentration(6.0)),
        ammonia: Some(GasReading::Label("normal".to_string())),
        status: BatchStatus::Active,
    }
}

#[test]
fn assessment_drives_an_operator_dispatch() {
    let now = morning();
    let snapshot = aging_snapshot(now);

    // Not yet past shelf life, so the batch stays live
    assert!(!is_past_shelf_life(&snapshot, now).unwrap());

    let assessment = RiskScorer::default().evaluate(&snapshot, now).unwrap();
    assert_eq!(assessment.tier, FreshnessTier::Moderate);
    assert!(should_prompt_dispatch(assessment.tier));

    // Operator accepts the recommendation
    let mut lifecycle = BatchLifecycle::new(snapshot.batch_id.clone());
    let destination = route(assessment.tier);
    lifecycle.dispatch(destination, now).unwrap();

    assert_eq!(lifecycle.status(), BatchStatus::Dispatched);
    assert_eq!(
        lifecycle.dispatch_record().unwrap().destination,
        destination
    );

    // The snapshot itself was never mutated by scoring or routing
    assert_eq!(snapshot.status, BatchStatus::Active);
}

#[test]
fn expiry_observed_on_read_closes_the_batch() {
    let now = morning();
    let mut snapshot = aging_snapshot(now);
    snapshot.entry_date = now - Duration::days(12);

    assert!(is_past_shelf_life(&snapshot, now).unwrap());

    let mut lifecycle = BatchLifecycle::new(snapshot.batch_id.clone());
    lifecycle.expire(now).unwrap();
    assert_eq!(lifecycle.status(), BatchStatus::Expired);

    // Terminal: a later dispatch attempt is rejected and changes nothing
    let err = lifecycle
        .dispatch(route(FreshnessTier::High), now + Duration::hours(2))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidTransition { .. }));
    assert_eq!(lifecycle.status(), BatchStatus::Expired);
    assert!(lifecycle.dispatch_record().is_none());
}

#[test]
fn scoring_still_works_for_terminal_batches() {
    // The engine reads status but never gates on it; a dashboard may show
    // scores for dispatched stock
    let now = morning();
    let mut snapshot = aging_snapshot(now);
    snapshot.status = BatchStatus::Dispatched;

    let assessment = RiskScorer::default().evaluate(&snapshot, now).unwrap();
    assert!(assessment.score <= 100);
}

#[test]
fn fresh_tier_does_not_prompt_dispatch() {
    let now = morning();
    let snapshot = BatchSnapshot {
        entry_date: now - Duration::days(1),
        temperature_c: Some(10.0),
        humidity_pct: Some(65.0),
        ethylene: Some(GasReading::Label("low".to_string())),
        co2: Some(GasReading::Label("low".to_string())),
        ammonia: Some(GasReading::Label("low".to_string())),
        ..aging_snapshot(now)
    };

    let assessment = RiskScorer::default().evaluate(&snapshot, now).unwrap();
    assert_eq!(assessment.tier, FreshnessTier::Fresh);
    assert!(!should_prompt_dispatch(assessment.tier));
}
