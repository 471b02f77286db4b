//! Human-readable reasons for why a card was recommended.

use super::domain::UserProfile;
use crate::catalog::CardRecord;

/// Reasons in a fixed order, skipping conditions that do not hold. The list
/// is never empty: a generic statement stands in when nothing specific fits,
/// and the card's "ideal for" text always closes the list when present.
pub(crate) fn match_reasons(card: &CardRecord, profile: &UserProfile) -> Vec<String> {
    let mut reasons = Vec::new();

    if card.min_credit_score <= profile.credit_score {
        reasons.push("You meet the credit score requirement".to_string());
    }

    if card.min_income <= profile.annual_income {
        reasons.push("You meet the income requirement".to_string());
    }

    if profile.features.has_travel_benefits && card.features.has_travel_benefits {
        reasons.push("Offers travel benefits aligning with your interests".to_string());
    }

    if profile.features.has_premium && card.features.has_premium {
        reasons.push("Includes premium services matching your preferences".to_string());
    }

    if profile.features.has_cashback && card.features.has_cashback {
        reasons.push("Provides cashback rewards".to_string());
    }

    if profile.features.has_entertainment && card.features.has_entertainment {
        reasons.push("Offers entertainment perks".to_string());
    }

    if reasons.is_empty() {
        reasons.push("Generally matches your overall profile and preferences".to_string());
    }

    let ideal_for = card.ideal_for.trim();
    if !ideal_for.is_empty() {
        reasons.push(format!("Ideal for: {ideal_for}"));
    }

    reasons
}
