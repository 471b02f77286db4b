use crate::catalog::{CardCatalog, CardRecord, FeatureFlags};
use crate::recommend::domain::CreditBand;
use crate::recommend::request::{AmountField, Answers, CreditInput, RewardRanks};

pub(super) fn card(name: &str, min_credit: u16, min_income: f64, fee: &str) -> CardRecord {
    CardRecord {
        name: name.to_string(),
        issuer: "Test Bank".to_string(),
        annual_fee: fee.to_string(),
        joining_fee: "0".to_string(),
        min_credit_score: min_credit,
        min_income,
        reward_structure: String::new(),
        premium_services: String::new(),
        travel_benefits: String::new(),
        lifestyle_benefits: String::new(),
        ideal_for: String::new(),
        features: FeatureFlags::default(),
    }
}

pub(super) fn card_with_features(
    name: &str,
    min_credit: u16,
    min_income: f64,
    fee: &str,
    configure: impl FnOnce(&mut FeatureFlags),
) -> CardRecord {
    let mut record = card(name, min_credit, min_income, fee);
    configure(&mut record.features);
    record
}

pub(super) fn catalog(cards: Vec<CardRecord>) -> CardCatalog {
    CardCatalog::from_cards(cards)
}

/// Baseline answers: income 600k, 701-750 credit band, fee ceiling 1000,
/// everything else at defaults.
pub(super) fn answers() -> Answers {
    Answers {
        income: AmountField::Number(600_000.0),
        credit: CreditInput::Band(CreditBand::Range701To750),
        debt_to_income: None,
        obligations: Vec::new(),
        spending: Default::default(),
        explicit_top_categories: None,
        domestic_trips: 0,
        international_trips: 0,
        reward_ranks: RewardRanks::default(),
        premium_services: Vec::new(),
        max_annual_fee: Some(AmountField::Number(1000.0)),
        lifestyle_override: None,
    }
}
