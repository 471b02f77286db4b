use super::common::*;
use crate::recommend::eligibility::eligible_cards;
use crate::recommend::profile::build_profile;
use crate::recommend::RecommendError;

#[test]
fn hard_gate_checks_credit_and_income() {
    let catalog = catalog(vec![
        card_with_features("Card A", 700, 500_000.0, "500", |f| {
            f.has_travel_benefits = true
        }),
        card_with_features("Card B", 750, 1_000_000.0, "Not specified", |f| {
            f.has_cashback = true
        }),
    ]);
    // credit 725, income 600k: Card B misses both thresholds.
    let profile = build_profile(answers()).expect("profile builds");

    let eligible = eligible_cards(&catalog, &profile).expect("one card passes");
    assert_eq!(eligible.len(), 1);
    assert_eq!(eligible[0].name, "Card A");
}

#[test]
fn empty_hard_gate_is_an_error() {
    let catalog = catalog(vec![card("Elite Only", 800, 5_000_000.0, "10000")]);
    let profile = build_profile(answers()).expect("profile builds");

    let err = eligible_cards(&catalog, &profile).unwrap_err();
    assert!(matches!(err, RecommendError::NoEligibleCards));
}

#[test]
fn fee_filter_keeps_unknown_fees() {
    let catalog = catalog(vec![
        card("Pricy", 600, 100_000.0, "5000"),
        card("Opaque", 600, 100_000.0, "Not specified"),
        card("Cheap", 600, 100_000.0, "750"),
    ]);
    let profile = build_profile(answers()).expect("profile builds");
    assert_eq!(profile.max_annual_fee, 1000.0);

    let eligible = eligible_cards(&catalog, &profile).expect("cards pass");
    let names: Vec<&str> = eligible.iter().map(|card| card.name.as_str()).collect();
    assert_eq!(names, vec!["Opaque", "Cheap"]);
}

#[test]
fn fee_filter_falls_back_when_it_would_empty_the_set() {
    let catalog = catalog(vec![
        card("Gold", 600, 100_000.0, "5000"),
        card("Platinum", 600, 100_000.0, "8000"),
    ]);
    let profile = build_profile(answers()).expect("profile builds");

    // Both fees exceed the 1000 ceiling; the hard-gate set comes back whole.
    let eligible = eligible_cards(&catalog, &profile).expect("fallback applies");
    assert_eq!(eligible.len(), 2);
}

#[test]
fn zero_ceiling_disables_fee_filtering() {
    let catalog = catalog(vec![card("Gold", 600, 100_000.0, "50000")]);
    let mut input = answers();
    input.max_annual_fee = Some(crate::recommend::request::AmountField::Number(0.0));
    let profile = build_profile(input).expect("profile builds");

    let eligible = eligible_cards(&catalog, &profile).expect("no fee pass runs");
    assert_eq!(eligible.len(), 1);
}

#[test]
fn results_preserve_catalog_order() {
    let catalog = catalog(vec![
        card("First", 600, 100_000.0, "100"),
        card("Second", 600, 100_000.0, "200"),
        card("Third", 600, 100_000.0, "300"),
    ]);
    let profile = build_profile(answers()).expect("profile builds");

    let eligible = eligible_cards(&catalog, &profile).expect("cards pass");
    let names: Vec<&str> = eligible.iter().map(|card| card.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}
