//! Hard credit/income gate followed by a best-effort fee pass.

use super::domain::UserProfile;
use super::RecommendError;
use crate::catalog::{CardCatalog, CardRecord};

/// Cards the user qualifies for, in catalog order.
///
/// The credit/income filter is the only hard gate. The fee pass keeps cards
/// whose fee fits the ceiling or is unknown, and when it would empty the set
/// it falls back to the unfiltered eligible cards, so fee preferences alone
/// never zero out the result.
pub(crate) fn eligible_cards<'a>(
    catalog: &'a CardCatalog,
    profile: &UserProfile,
) -> Result<Vec<&'a CardRecord>, RecommendError> {
    let eligible: Vec<&CardRecord> = catalog
        .iter()
        .filter(|card| {
            card.min_credit_score <= profile.credit_score
                && card.min_income <= profile.annual_income
        })
        .collect();

    if eligible.is_empty() {
        return Err(RecommendError::NoEligibleCards);
    }

    let result = if profile.max_annual_fee > 0.0 {
        let within_fee: Vec<&CardRecord> = eligible
            .iter()
            .copied()
            .filter(|card| match card.annual_fee_amount() {
                Some(fee) => fee <= profile.max_annual_fee,
                None => true,
            })
            .collect();

        if within_fee.is_empty() {
            eligible
        } else {
            within_fee
        }
    } else {
        eligible
    };

    // Cannot trip while the fee pass falls back to the eligible set; kept so
    // a future change to that rule still surfaces a distinct error.
    if result.is_empty() {
        return Err(RecommendError::NoEligibleFee);
    }

    Ok(result)
}
