//! Recommendation pipeline: profile building, eligibility filtering,
//! similarity scoring, and explanations, behind one service facade.

mod domain;
mod eligibility;
mod explain;
mod profile;
mod request;
pub mod router;
mod scoring;

#[cfg(test)]
mod tests;

pub use domain::{CreditBand, Recommendation, SpendingEntry, UserProfile};
pub use request::{
    AmountField, DebtToIncomeAnswers, DetailedQuestionnaire, FeeTolerances, OrderedAmounts,
    RewardRanks, SimpleRecommendationRequest,
};
pub use router::recommendation_router;

use crate::catalog::{CardCatalog, CatalogError};
use request::Answers;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Result count for the simple flow.
pub const DEFAULT_TOP_N: usize = 3;
/// Result count for the detailed questionnaire flow.
pub const DETAILED_TOP_N: usize = 5;

/// Stateless recommender over an immutable catalog. Safe to share across
/// concurrent requests; nothing is mutated after construction.
#[derive(Debug)]
pub struct CardRecommender {
    catalog: CardCatalog,
}

impl CardRecommender {
    pub fn new(catalog: CardCatalog) -> Self {
        Self { catalog }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        Ok(Self::new(CardCatalog::from_path(path)?))
    }

    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Simple-form flow: top 3 recommendations.
    pub fn recommend(
        &self,
        request: SimpleRecommendationRequest,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        let profile = profile::build_profile(Answers::from(request))?;
        self.recommend_for_profile(&profile, DEFAULT_TOP_N)
    }

    /// Detailed questionnaire flow: top 5, echoing the derived top categories
    /// and lifestyle score for display.
    pub fn recommend_detailed(
        &self,
        request: DetailedQuestionnaire,
    ) -> Result<DetailedRecommendations, RecommendError> {
        let profile = profile::build_profile(Answers::from(request))?;
        let recommendations = self.recommend_for_profile(&profile, DETAILED_TOP_N)?;

        Ok(DetailedRecommendations {
            recommendations,
            user_profile: ProfileSummary {
                top_categories: profile.top_categories,
                lifestyle_score: profile.lifestyle_score,
            },
        })
    }

    /// Core pipeline over an already-built profile. Either a full ranked list
    /// comes back or an error; there are no partial results.
    pub fn recommend_for_profile(
        &self,
        profile: &UserProfile,
        top_n: usize,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        let eligible = eligibility::eligible_cards(&self.catalog, profile)?;
        debug!(
            eligible = eligible.len(),
            catalog = self.catalog.len(),
            "eligibility filter applied"
        );

        let ranked = scoring::rank_cards(&eligible, profile, top_n);

        Ok(ranked
            .into_iter()
            .map(|entry| {
                Recommendation::from_card(
                    entry.card,
                    scoring::match_percentage(entry.similarity),
                    explain::match_reasons(entry.card, profile),
                )
            })
            .collect())
    }
}

/// Detailed-flow response payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedRecommendations {
    pub recommendations: Vec<Recommendation>,
    pub user_profile: ProfileSummary,
}

/// Echo of the derived profile fields the front-end displays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub top_categories: Vec<SpendingEntry>,
    pub lifestyle_score: f64,
}

/// Per-request failures. Each maps to a client error at the API boundary.
#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    #[error("could not parse {field} as an amount")]
    MalformedInput { field: &'static str },
    #[error("No cards match your credit score and income requirements. Try adjusting your profile.")]
    NoEligibleCards,
    #[error("No cards match your fee preferences. Try adjusting your maximum fee.")]
    NoEligibleFee,
}
