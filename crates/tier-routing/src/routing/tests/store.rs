use super::common::*;
use crate::routing::domain::Tier;
use crate::routing::{TierConfigurationStore, TierTableError};

#[test]
fn new_store_rejects_invalid_tables() {
    let mut table = config();
    table.reason_factor_limit = 0;

    match TierConfigurationStore::new(table) {
        Err(TierTableError::ReasonFactorLimit) => {}
        other => panic!("expected reason limit error, got {other:?}"),
    }
}

#[test]
fn snapshots_survive_a_replace() {
    let store = TierConfigurationStore::new(config()).expect("standard table is valid");
    let before = store.snapshot();

    let mut replacement = config();
    replacement.budget.tier_1_below = 2_800.0;
    let previous = store.replace(replacement).expect("replacement is valid");

    assert_eq!(previous.budget.tier_1_below, 5_000.0);
    assert_eq!(before.budget.tier_1_below, 5_000.0);
    assert_eq!(store.snapshot().budget.tier_1_below, 2_800.0);

    let engine = store.engine();
    let recommendation = engine
        .recommend(&fast_track_intake())
        .expect("valid intake");
    assert_eq!(recommendation.factors[0].suggested_tier, Tier::Two);
}

#[test]
fn failed_replace_keeps_the_current_table() {
    let store = TierConfigurationStore::default();
    let mut broken = config();
    broken.weights.assets_partial = 0.0;

    match store.replace(broken) {
        Err(TierTableError::Weight(name)) => assert_eq!(name, "assets_partial"),
        other => panic!("expected weight error, got {other:?}"),
    }
    assert_eq!(*store.snapshot(), config());
}
