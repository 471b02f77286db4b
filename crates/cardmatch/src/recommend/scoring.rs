//! Weighted cosine similarity between user and card feature vectors.

use super::domain::UserProfile;
use crate::catalog::{CardRecord, FeatureKind, FEATURE_COUNT};
use std::cmp::Ordering;

pub(crate) struct RankedCard<'a> {
    pub card: &'a CardRecord,
    pub similarity: f64,
}

/// Score every card against the profile, sort descending, keep the best
/// `top_n`. The sort is stable, so ties preserve catalog order.
pub(crate) fn rank_cards<'a>(
    cards: &[&'a CardRecord],
    profile: &UserProfile,
    top_n: usize,
) -> Vec<RankedCard<'a>> {
    let user_vector = weighted_user_vector(profile);

    let mut ranked: Vec<RankedCard<'a>> = cards
        .iter()
        .map(|card| RankedCard {
            card,
            similarity: cosine_similarity(&user_vector, &card.features.as_vector()),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(top_n);
    ranked
}

/// All dimensions weigh 1.0 except premium, which is scaled by
/// `lifestyle_score / 10` so a modest lifestyle dampens premium matches even
/// when the user flagged premium interest.
fn weighted_user_vector(profile: &UserProfile) -> [f64; FEATURE_COUNT] {
    let mut vector = profile.features.as_vector();
    vector[FeatureKind::Premium.index()] *= profile.lifestyle_score / 10.0;
    vector
}

/// `dot(u, c) / (||u|| * ||c||)`, defined as 0 when either norm is 0.
fn cosine_similarity(user: &[f64; FEATURE_COUNT], card: &[f64; FEATURE_COUNT]) -> f64 {
    let mut dot = 0.0;
    let mut user_sq = 0.0;
    let mut card_sq = 0.0;

    for i in 0..FEATURE_COUNT {
        dot += user[i] * card[i];
        user_sq += user[i] * user[i];
        card_sq += card[i] * card[i];
    }

    if user_sq == 0.0 || card_sq == 0.0 {
        return 0.0;
    }

    dot / (user_sq.sqrt() * card_sq.sqrt())
}

/// floor(similarity x 100), clamped to [0, 100].
pub(crate) fn match_percentage(similarity: f64) -> u8 {
    let floored = (similarity * 100.0).floor();
    floored.clamp(0.0, 100.0) as u8
}
