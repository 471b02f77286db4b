use super::common::*;
use crate::recommend::domain::{CreditBand, SpendingEntry};
use crate::recommend::profile::build_profile;
use crate::recommend::request::{
    AmountField, CreditInput, DebtToIncomeAnswers, OrderedAmounts, RewardRanks,
};
use crate::recommend::RecommendError;

#[test]
fn parses_formatted_income_text() {
    let mut input = answers();
    input.income = AmountField::Text("₹12,50,000".to_string());

    let profile = build_profile(input).expect("income parses");

    assert_eq!(profile.annual_income, 1_250_000.0);
    // Above the 1.2M threshold, so premium interest switches on.
    assert!(profile.features.has_premium);
}

#[test]
fn rejects_unparsable_income() {
    let mut input = answers();
    input.income = AmountField::Text("twelve lakh".to_string());

    let err = build_profile(input).unwrap_err();
    assert!(matches!(err, RecommendError::MalformedInput { .. }));
}

#[test]
fn credit_band_midpoints() {
    assert_eq!(CreditBand::from_label("Below 650").midpoint(), 600);
    assert_eq!(CreditBand::from_label("650-700").midpoint(), 675);
    assert_eq!(CreditBand::from_label("701-750").midpoint(), 725);
    assert_eq!(CreditBand::from_label("751-800").midpoint(), 775);
    assert_eq!(CreditBand::from_label("Above 800").midpoint(), 825);
    assert_eq!(
        CreditBand::from_label("I don't know my credit score").midpoint(),
        650
    );
}

#[test]
fn credit_range_keys_collapse_into_bands() {
    assert_eq!(CreditBand::from_range_key("300-600"), CreditBand::Below650);
    assert_eq!(
        CreditBand::from_range_key("601-650"),
        CreditBand::Range650To700
    );
    assert_eq!(
        CreditBand::from_range_key("651-700"),
        CreditBand::Range650To700
    );
    assert_eq!(
        CreditBand::from_range_key("801-900"),
        CreditBand::Above800
    );
    assert_eq!(CreditBand::from_range_key("unknown"), CreditBand::Unknown);
}

#[test]
fn debt_to_income_zeroes_when_not_sure() {
    let mut input = answers();
    input.debt_to_income = Some(DebtToIncomeAnswers {
        not_sure: true,
        monthly_debt: 20_000.0,
        monthly_income: 50_000.0,
    });
    let profile = build_profile(input).expect("profile builds");
    assert_eq!(profile.debt_to_income, 0.0);

    let mut input = answers();
    input.debt_to_income = Some(DebtToIncomeAnswers {
        not_sure: false,
        monthly_debt: 20_000.0,
        monthly_income: 0.0,
    });
    let profile = build_profile(input).expect("profile builds");
    assert_eq!(profile.debt_to_income, 0.0);

    let mut input = answers();
    input.debt_to_income = Some(DebtToIncomeAnswers {
        not_sure: false,
        monthly_debt: 20_000.0,
        monthly_income: 50_000.0,
    });
    let profile = build_profile(input).expect("profile builds");
    assert_eq!(profile.debt_to_income, 0.4);
}

#[test]
fn obligations_use_flat_default_amount() {
    let mut input = answers();
    input.obligations = vec![
        "Home loan".to_string(),
        "Car loan".to_string(),
        "Education loan".to_string(),
    ];
    let profile = build_profile(input).expect("profile builds");
    assert_eq!(profile.total_obligations, 3000.0);
}

#[test]
fn top_categories_keep_input_order_on_ties() {
    let mut input = answers();
    input.spending = OrderedAmounts(vec![
        ("Groceries".to_string(), 4000.0),
        ("Utilities".to_string(), 4000.0),
        ("Travel".to_string(), 9000.0),
        ("Healthcare".to_string(), 4000.0),
    ]);

    let profile = build_profile(input).expect("profile builds");
    let names: Vec<&str> = profile
        .top_categories
        .iter()
        .map(|entry| entry.category.as_str())
        .collect();

    // Travel leads; the three 4000s tie and keep input order, truncated to 3.
    assert_eq!(names, vec!["Travel", "Groceries", "Utilities"]);
}

#[test]
fn trip_counts_and_ranks_drive_travel_flag() {
    let mut input = answers();
    input.domestic_trips = 2;
    input.international_trips = 1;
    let profile = build_profile(input).expect("profile builds");
    assert!(profile.features.has_travel_benefits);

    let mut input = answers();
    input.reward_ranks = RewardRanks {
        travel_miles: 3,
        ..RewardRanks::default()
    };
    let profile = build_profile(input).expect("profile builds");
    assert!(profile.features.has_travel_benefits);

    let mut input = answers();
    input.domestic_trips = 1;
    input.international_trips = 1;
    let profile = build_profile(input).expect("profile builds");
    assert!(!profile.features.has_travel_benefits);
}

#[test]
fn spending_thresholds_drive_dining_and_shopping() {
    let mut input = answers();
    input.spending = OrderedAmounts(vec![
        ("Dining out".to_string(), 5001.0),
        ("Online shopping".to_string(), 10_001.0),
    ]);
    let profile = build_profile(input).expect("profile builds");
    assert!(profile.features.has_dining);
    assert!(profile.features.has_shopping);

    // camelCase labels from the detailed form resolve to the same buckets.
    let mut input = answers();
    input.spending = OrderedAmounts(vec![
        ("diningOut".to_string(), 6000.0),
        ("onlineShopping".to_string(), 12_000.0),
    ]);
    let profile = build_profile(input).expect("profile builds");
    assert!(profile.features.has_dining);
    assert!(profile.features.has_shopping);

    // Amounts exactly at the thresholds do not qualify. The neutral
    // categories outspend both so neither lands in the top 3, where the
    // category keyword rule would switch the flags on regardless.
    let mut input = answers();
    input.spending = OrderedAmounts(vec![
        ("Rent".to_string(), 50_000.0),
        ("Groceries".to_string(), 40_000.0),
        ("Utilities".to_string(), 30_000.0),
        ("Dining out".to_string(), 5000.0),
        ("Online shopping".to_string(), 10_000.0),
    ]);
    let profile = build_profile(input).expect("profile builds");
    assert!(!profile.features.has_dining);
    assert!(!profile.features.has_shopping);
}

#[test]
fn points_flag_is_always_on() {
    let profile = build_profile(answers()).expect("profile builds");
    assert!(profile.features.has_points);
}

#[test]
fn premium_needs_three_services_or_high_income() {
    let mut input = answers();
    input.premium_services = vec![
        "Concierge".to_string(),
        "Lounge".to_string(),
        "Golf".to_string(),
    ];
    let profile = build_profile(input).expect("profile builds");
    assert!(profile.features.has_premium);

    let mut input = answers();
    input.premium_services = vec!["Concierge".to_string()];
    let profile = build_profile(input).expect("profile builds");
    assert!(!profile.features.has_premium);
}

#[test]
fn top_category_keywords_only_turn_flags_on() {
    let mut input = answers();
    input.explicit_top_categories = Some(vec![
        SpendingEntry {
            category: "Weekend Dining".to_string(),
            amount: 3000.0,
        },
        SpendingEntry {
            category: "Fuel".to_string(),
            amount: 2500.0,
        },
        SpendingEntry {
            category: "online shopping".to_string(),
            amount: 2000.0,
        },
    ]);

    let profile = build_profile(input).expect("profile builds");

    // Dining rank stayed at the low-priority default, yet the flag is set.
    assert!(profile.features.has_dining);
    assert!(profile.features.has_shopping);
    assert!(profile.interested_in_fuel);
    assert!(!profile.features.has_travel_benefits);
}

#[test]
fn fee_defaults_silently_on_parse_failure() {
    let mut input = answers();
    input.max_annual_fee = Some(AmountField::Text("no idea".to_string()));
    let profile = build_profile(input).expect("profile builds");
    assert_eq!(profile.max_annual_fee, 1000.0);

    let mut input = answers();
    input.max_annual_fee = None;
    let profile = build_profile(input).expect("profile builds");
    assert_eq!(profile.max_annual_fee, 1000.0);

    let mut input = answers();
    input.max_annual_fee = Some(AmountField::Text("₹2,500".to_string()));
    let profile = build_profile(input).expect("profile builds");
    assert_eq!(profile.max_annual_fee, 2500.0);
}

#[test]
fn lifestyle_score_caps_each_term_and_the_total() {
    let mut input = answers();
    input.domestic_trips = 40;
    input.international_trips = 12;
    input.spending = OrderedAmounts(vec![
        ("Dining out".to_string(), 500_000.0),
        ("Entertainment".to_string(), 500_000.0),
        ("Travel".to_string(), 500_000.0),
    ]);
    input.premium_services = (0..8).map(|i| format!("service-{i}")).collect();

    let profile = build_profile(input).expect("profile builds");
    // Three terms cap at 5 each, then the sum caps at 10.
    assert_eq!(profile.lifestyle_score, 10.0);
}

#[test]
fn lifestyle_score_adds_partial_terms() {
    let mut input = answers();
    input.domestic_trips = 1;
    input.international_trips = 1;
    input.spending = OrderedAmounts(vec![("Travel".to_string(), 40_000.0)]);
    input.premium_services = vec!["Concierge".to_string()];

    let profile = build_profile(input).expect("profile builds");
    // trips: 1 + 2x1 = 3; spend: 40000/20000 = 2; premium: 1.
    assert_eq!(profile.lifestyle_score, 6.0);
}

#[test]
fn lifestyle_override_is_clamped() {
    let mut input = answers();
    input.lifestyle_override = Some(37.0);
    let profile = build_profile(input).expect("profile builds");
    assert_eq!(profile.lifestyle_score, 10.0);
}

#[test]
fn direct_credit_score_bypasses_band_mapping() {
    let mut input = answers();
    input.credit = CreditInput::Score(780);
    let profile = build_profile(input).expect("profile builds");
    assert_eq!(profile.credit_score, 780);
}

#[test]
fn reward_ranks_deserialize_from_either_key_style() {
    let short: RewardRanks =
        serde_json::from_value(serde_json::json!({ "cashback": 1, "diningBenefits": 2 }))
            .expect("short keys parse");
    assert_eq!(short.cashback, 1);
    assert_eq!(short.dining_benefits, 2);
    assert_eq!(short.travel_miles, 5);

    let labeled: RewardRanks = serde_json::from_value(serde_json::json!({
        "Cashback on purchases": 2,
        "Travel miles/points": 1,
        "Entertainment perks": 3
    }))
    .expect("labels parse");
    assert_eq!(labeled.cashback, 2);
    assert_eq!(labeled.travel_miles, 1);
    assert_eq!(labeled.entertainment_perks, 3);
    assert_eq!(labeled.shopping_discounts, 5);
}
