use crate::catalog::{CardRecord, FeatureFlags};
use serde::{Deserialize, Serialize};

/// One spending category with its monthly amount, order-preserving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingEntry {
    pub category: String,
    pub amount: f64,
}

/// Self-reported credit score bucket, mapped to a fixed midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditBand {
    Below650,
    Range650To700,
    Range701To750,
    Range751To800,
    Above800,
    Unknown,
}

impl CreditBand {
    /// Bucket labels as presented by the questionnaire.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Below 650" => Self::Below650,
            "650-700" => Self::Range650To700,
            "701-750" => Self::Range701To750,
            "751-800" => Self::Range751To800,
            "Above 800" => Self::Above800,
            _ => Self::Unknown,
        }
    }

    /// Range keys sent by the detailed questionnaire's score selector.
    pub fn from_range_key(key: &str) -> Self {
        match key.trim() {
            "300-600" => Self::Below650,
            "601-650" | "651-700" => Self::Range650To700,
            "701-750" => Self::Range701To750,
            "751-800" => Self::Range751To800,
            "801-900" => Self::Above800,
            _ => Self::Unknown,
        }
    }

    pub const fn midpoint(self) -> u16 {
        match self {
            CreditBand::Below650 => 600,
            CreditBand::Range650To700 => 675,
            CreditBand::Range701To750 => 725,
            CreditBand::Range751To800 => 775,
            CreditBand::Above800 => 825,
            CreditBand::Unknown => 650,
        }
    }
}

/// Normalized per-request profile. Built fresh for every request and never
/// persisted; all derived fields are functions of that request's answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub annual_income: f64,
    pub credit_score: u16,
    pub debt_to_income: f64,
    pub total_obligations: f64,
    /// The 3 highest-amount spending categories, ties keeping input order.
    pub top_categories: Vec<SpendingEntry>,
    /// 0 means "no ceiling": fee filtering is skipped entirely.
    pub max_annual_fee: f64,
    /// 0-10 composite; only weights the premium scoring dimension.
    pub lifestyle_score: f64,
    pub features: FeatureFlags,
    /// Fuel interest from top categories. No card dimension exists for it, so
    /// it never enters the similarity vector.
    pub interested_in_fuel: bool,
}

/// A recommended card with its match score and human-readable reasons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub card_name: String,
    pub issuer: String,
    pub annual_fee: String,
    pub joining_fee: String,
    pub rewards: String,
    pub premium_services: String,
    pub travel_benefits: String,
    pub lifestyle_benefits: String,
    /// floor(similarity x 100), capped at 100.
    pub match_percentage: u8,
    /// Never empty; a generic reason stands in when nothing specific applies.
    pub match_reasons: Vec<String>,
}

impl Recommendation {
    pub(crate) fn from_card(card: &CardRecord, match_percentage: u8, match_reasons: Vec<String>) -> Self {
        Self {
            card_name: card.name.clone(),
            issuer: card.issuer.clone(),
            annual_fee: card.annual_fee.clone(),
            joining_fee: card.joining_fee.clone(),
            rewards: card.reward_structure.clone(),
            premium_services: card.premium_services.clone(),
            travel_benefits: card.travel_benefits.clone(),
            lifestyle_benefits: card.lifestyle_benefits.clone(),
            match_percentage,
            match_reasons,
        }
    }
}
