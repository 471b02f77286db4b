//! Wire shapes for the two supported questionnaires and the internal
//! `Answers` form both lower into before profile building.

use super::domain::{CreditBand, SpendingEntry};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Amount that may arrive as a JSON number or as formatted text such as
/// "₹12,00,000". Parsing strips the currency symbol and separators.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AmountField {
    Number(f64),
    Text(String),
}

impl AmountField {
    pub fn parse(&self) -> Option<f64> {
        match self {
            AmountField::Number(value) => Some(*value),
            AmountField::Text(raw) => {
                let cleaned: String = raw
                    .chars()
                    .filter(|c| !matches!(c, '₹' | ',') && !c.is_whitespace())
                    .collect();
                cleaned.parse::<f64>().ok()
            }
        }
    }
}

impl Default for AmountField {
    fn default() -> Self {
        AmountField::Number(0.0)
    }
}

/// Map of category name to amount that keeps the document's key order, so
/// the stable top-category sort breaks ties the way the sender listed them.
#[derive(Debug, Clone, Default)]
pub struct OrderedAmounts(pub Vec<(String, f64)>);

impl OrderedAmounts {
    pub fn get(&self, category: &str) -> f64 {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, amount)| *amount)
            .unwrap_or(0.0)
    }
}

impl<'de> Deserialize<'de> for OrderedAmounts {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AmountsVisitor;

        impl<'de> Visitor<'de> for AmountsVisitor {
            type Value = OrderedAmounts;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of category names to amounts")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, f64>()? {
                    entries.push((key, value));
                }
                Ok(OrderedAmounts(entries))
            }
        }

        deserializer.deserialize_map(AmountsVisitor)
    }
}

pub(crate) const DEFAULT_RANK: u8 = 5;

/// Reward preference ranks, 1 (highest priority) through 5. Preferences not
/// present in the request default to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardRanks {
    pub cashback: u8,
    pub travel_miles: u8,
    pub shopping_discounts: u8,
    pub dining_benefits: u8,
    pub entertainment_perks: u8,
}

impl Default for RewardRanks {
    fn default() -> Self {
        Self {
            cashback: DEFAULT_RANK,
            travel_miles: DEFAULT_RANK,
            shopping_discounts: DEFAULT_RANK,
            dining_benefits: DEFAULT_RANK,
            entertainment_perks: DEFAULT_RANK,
        }
    }
}

impl RewardRanks {
    /// Accepts both the short camelCase keys and the questionnaire's
    /// human-readable labels for each preference.
    pub fn assign(&mut self, key: &str, rank: u8) {
        match key.trim() {
            "cashback" | "Cashback on purchases" => self.cashback = rank,
            "travelMiles" | "Travel miles/points" => self.travel_miles = rank,
            "shoppingDiscounts" | "Shopping discounts" => self.shopping_discounts = rank,
            "diningBenefits" | "Dining benefits" => self.dining_benefits = rank,
            "entertainmentPerks" | "Entertainment perks" => self.entertainment_perks = rank,
            _ => {}
        }
    }
}

impl<'de> Deserialize<'de> for RewardRanks {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RanksVisitor;

        impl<'de> Visitor<'de> for RanksVisitor {
            type Value = RewardRanks;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of reward preference names to ranks")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut ranks = RewardRanks::default();
                while let Some((key, rank)) = access.next_entry::<String, u8>()? {
                    ranks.assign(&key, rank);
                }
                Ok(ranks)
            }
        }

        deserializer.deserialize_map(RanksVisitor)
    }
}

/// Trip counts from the simple form.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SimpleTravelFrequency {
    #[serde(default)]
    pub domestic: u32,
    #[serde(default)]
    pub international: u32,
}

/// Trip counts from the detailed questionnaire.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DetailedTravelFrequency {
    #[serde(default)]
    pub domestic_trips: u32,
    #[serde(default)]
    pub international_trips: u32,
}

/// Debt-to-income sub-answers; `not_sure` zeroes the ratio.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtToIncomeAnswers {
    #[serde(default)]
    pub not_sure: bool,
    #[serde(default)]
    pub monthly_debt: f64,
    #[serde(default)]
    pub monthly_income: f64,
}

/// Fee tolerance block of the detailed questionnaire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeTolerances {
    #[serde(default)]
    pub maximum_annual_fee: Option<AmountField>,
}

/// The short, single-page request shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleRecommendationRequest {
    #[serde(default)]
    pub income: AmountField,
    #[serde(default)]
    pub credit_score: Option<u16>,
    #[serde(default)]
    pub max_annual_fee: Option<AmountField>,
    #[serde(default)]
    pub lifestyle_score: Option<f64>,
    #[serde(default)]
    pub top_categories: Vec<SpendingEntry>,
    #[serde(default)]
    pub travel_frequency: SimpleTravelFrequency,
    #[serde(default)]
    pub reward_preferences: RewardRanks,
    #[serde(default)]
    pub premium_services: Vec<String>,
    #[serde(default)]
    pub spending_categories: OrderedAmounts,
}

/// The multi-step questionnaire shape. Behavioral sections are accepted so
/// clients can post the whole form, but only the fields the engine scores
/// are modeled; everything else deserializes into raw JSON and is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedQuestionnaire {
    pub annual_income: AmountField,
    #[serde(default)]
    pub credit_score_range: Option<String>,
    #[serde(default)]
    pub debt_to_income_ratio: Option<DebtToIncomeAnswers>,
    #[serde(default)]
    pub financial_obligations: Vec<String>,
    #[serde(default)]
    pub monthly_spending: OrderedAmounts,
    #[serde(default)]
    pub transaction_frequency: Option<serde_json::Value>,
    #[serde(default)]
    pub seasonal_spending: Option<serde_json::Value>,
    #[serde(default)]
    pub payment_habits: Option<serde_json::Value>,
    #[serde(default)]
    pub card_usage: Option<serde_json::Value>,
    #[serde(default)]
    pub preferred_payment_methods: Option<serde_json::Value>,
    #[serde(default)]
    pub travel_frequency: DetailedTravelFrequency,
    #[serde(default)]
    pub shopping_preferences: Option<serde_json::Value>,
    #[serde(default)]
    pub lifestyle_activities: Vec<String>,
    #[serde(default)]
    pub reward_preferences: RewardRanks,
    #[serde(default)]
    pub premium_services: Vec<String>,
    #[serde(default)]
    pub fee_tolerances: FeeTolerances,
    #[serde(default)]
    pub prestige_importance: Option<String>,
}

/// How the request expressed the credit score.
#[derive(Debug, Clone, Copy)]
pub(crate) enum CreditInput {
    Score(u16),
    Band(CreditBand),
}

/// Common denominator both request shapes lower into. The profile builder
/// consumes this and nothing else.
#[derive(Debug, Clone)]
pub(crate) struct Answers {
    pub income: AmountField,
    pub credit: CreditInput,
    pub debt_to_income: Option<DebtToIncomeAnswers>,
    pub obligations: Vec<String>,
    pub spending: OrderedAmounts,
    /// Pre-computed top categories, when the client sent them.
    pub explicit_top_categories: Option<Vec<SpendingEntry>>,
    pub domestic_trips: u32,
    pub international_trips: u32,
    pub reward_ranks: RewardRanks,
    pub premium_services: Vec<String>,
    pub max_annual_fee: Option<AmountField>,
    /// Pre-computed lifestyle score, when the client sent one.
    pub lifestyle_override: Option<f64>,
}

impl From<SimpleRecommendationRequest> for Answers {
    fn from(request: SimpleRecommendationRequest) -> Self {
        let explicit_top_categories = if request.top_categories.is_empty() {
            None
        } else {
            Some(request.top_categories)
        };

        Self {
            income: request.income,
            credit: CreditInput::Score(
                request.credit_score.unwrap_or(CreditBand::Unknown.midpoint()),
            ),
            debt_to_income: None,
            obligations: Vec::new(),
            spending: request.spending_categories,
            explicit_top_categories,
            domestic_trips: request.travel_frequency.domestic,
            international_trips: request.travel_frequency.international,
            reward_ranks: request.reward_preferences,
            premium_services: request.premium_services,
            max_annual_fee: request.max_annual_fee,
            lifestyle_override: request.lifestyle_score,
        }
    }
}

impl From<DetailedQuestionnaire> for Answers {
    fn from(request: DetailedQuestionnaire) -> Self {
        let band = request
            .credit_score_range
            .as_deref()
            .map(|key| {
                let from_key = CreditBand::from_range_key(key);
                if from_key == CreditBand::Unknown {
                    // Older clients send the bucket label directly.
                    CreditBand::from_label(key)
                } else {
                    from_key
                }
            })
            .unwrap_or(CreditBand::Unknown);

        Self {
            income: request.annual_income,
            credit: CreditInput::Band(band),
            debt_to_income: request.debt_to_income_ratio,
            obligations: request.financial_obligations,
            spending: request.monthly_spending,
            explicit_top_categories: None,
            domestic_trips: request.travel_frequency.domestic_trips,
            international_trips: request.travel_frequency.international_trips,
            reward_ranks: request.reward_preferences,
            premium_services: request.premium_services,
            max_annual_fee: request.fee_tolerances.maximum_annual_fee,
            lifestyle_override: None,
        }
    }
}
