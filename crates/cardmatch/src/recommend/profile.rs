//! Turns lowered questionnaire answers into a normalized [`UserProfile`].

use super::domain::{SpendingEntry, UserProfile};
use super::request::{AmountField, Answers, CreditInput, OrderedAmounts};
use super::RecommendError;
use crate::catalog::FeatureFlags;
use std::cmp::Ordering;

/// Flat amount credited per declared obligation category; the category list,
/// not the amounts, drives the total.
const OBLIGATION_DEFAULT_AMOUNT: f64 = 1000.0;

/// Fallback ceiling when the fee answer is missing or unparsable. This is a
/// silent default, unlike income where a bad value rejects the request.
const DEFAULT_MAX_ANNUAL_FEE: f64 = 1000.0;

const DINING_OUT: &str = "Dining out";
const ONLINE_SHOPPING: &str = "Online shopping";
const ENTERTAINMENT: &str = "Entertainment";
const TRAVEL: &str = "Travel";

pub(crate) fn build_profile(answers: Answers) -> Result<UserProfile, RecommendError> {
    let annual_income = answers
        .income
        .parse()
        .ok_or(RecommendError::MalformedInput {
            field: "annual income",
        })?;

    let credit_score = match answers.credit {
        CreditInput::Score(score) => score,
        CreditInput::Band(band) => band.midpoint(),
    };

    let debt_to_income = answers
        .debt_to_income
        .map(|dti| {
            if dti.not_sure || dti.monthly_income <= 0.0 {
                0.0
            } else {
                dti.monthly_debt / dti.monthly_income
            }
        })
        .unwrap_or(0.0);

    let total_obligations = answers.obligations.len() as f64 * OBLIGATION_DEFAULT_AMOUNT;

    let top_categories = answers
        .explicit_top_categories
        .clone()
        .unwrap_or_else(|| top_spending_categories(&answers.spending));

    let ranks = answers.reward_ranks;
    let trips = answers.domestic_trips as u64 + answers.international_trips as u64;
    let mut features = FeatureFlags {
        has_travel_benefits: trips > 2 || ranks.travel_miles <= 3,
        has_cashback: ranks.cashback <= 3,
        // Constant on every profile so reward tracking always participates.
        has_points: true,
        has_dining: spend_amount(&answers.spending, DINING_OUT) > 5000.0
            || ranks.dining_benefits <= 3,
        has_shopping: spend_amount(&answers.spending, ONLINE_SHOPPING) > 10_000.0
            || ranks.shopping_discounts <= 3,
        has_premium: answers.premium_services.len() >= 3 || annual_income > 1_200_000.0,
        has_entertainment: ranks.entertainment_perks <= 3,
    };

    // Top categories reinforce interests; they switch flags on, never off.
    let mut interested_in_fuel = false;
    for entry in &top_categories {
        if entry.category.contains("Dining") {
            features.has_dining = true;
        } else if entry.category.contains("Travel") {
            features.has_travel_benefits = true;
        } else if entry.category.to_lowercase().contains("shopping") {
            features.has_shopping = true;
        } else if entry.category.contains("Fuel") {
            interested_in_fuel = true;
        }
    }

    let max_annual_fee = answers
        .max_annual_fee
        .as_ref()
        .and_then(AmountField::parse)
        .unwrap_or(DEFAULT_MAX_ANNUAL_FEE);

    let lifestyle_score = answers
        .lifestyle_override
        .map(|score| score.clamp(0.0, 10.0))
        .unwrap_or_else(|| lifestyle_score(&answers));

    Ok(UserProfile {
        annual_income,
        credit_score,
        debt_to_income,
        total_obligations,
        top_categories,
        max_annual_fee,
        lifestyle_score,
        features,
        interested_in_fuel,
    })
}

/// 0-10 composite of travel frequency, discretionary spending, and premium
/// interest. Each term caps at 5 before the grand total caps at 10.
fn lifestyle_score(answers: &Answers) -> f64 {
    let trips =
        answers.domestic_trips as f64 + 2.0 * answers.international_trips as f64;
    let travel_term = trips.min(5.0);

    let discretionary = spend_amount(&answers.spending, DINING_OUT)
        + spend_amount(&answers.spending, ENTERTAINMENT)
        + spend_amount(&answers.spending, TRAVEL);
    let spending_term = (discretionary / 20_000.0).min(5.0);

    let premium_term = (answers.premium_services.len() as f64).min(5.0);

    (travel_term + spending_term + premium_term).min(10.0)
}

/// Highest 3 spending categories by amount; the sort is stable so equal
/// amounts keep the order the client listed them in.
fn top_spending_categories(spending: &OrderedAmounts) -> Vec<SpendingEntry> {
    let mut entries: Vec<SpendingEntry> = spending
        .0
        .iter()
        .map(|(category, amount)| SpendingEntry {
            category: category.clone(),
            amount: *amount,
        })
        .collect();
    entries.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));
    entries.truncate(3);
    entries
}

/// Threshold lookups tolerate both label styles ("Dining out", "diningOut")
/// by comparing only alphanumerics, case-insensitively.
fn spend_amount(spending: &OrderedAmounts, label: &str) -> f64 {
    let wanted = normalize_label(label);
    spending
        .0
        .iter()
        .find(|(category, _)| normalize_label(category) == wanted)
        .map(|(_, amount)| *amount)
        .unwrap_or(0.0)
}

fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}
