use serde::{Deserialize, Serialize};

/// The seven benefit dimensions shared by cards and user profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    Travel,
    Cashback,
    Points,
    Dining,
    Shopping,
    Premium,
    Entertainment,
}

/// Fixed vector order for similarity scoring.
pub const FEATURE_ORDER: [FeatureKind; 7] = [
    FeatureKind::Travel,
    FeatureKind::Cashback,
    FeatureKind::Points,
    FeatureKind::Dining,
    FeatureKind::Shopping,
    FeatureKind::Premium,
    FeatureKind::Entertainment,
];

pub const FEATURE_COUNT: usize = FEATURE_ORDER.len();

impl FeatureKind {
    pub const fn index(self) -> usize {
        match self {
            FeatureKind::Travel => 0,
            FeatureKind::Cashback => 1,
            FeatureKind::Points => 2,
            FeatureKind::Dining => 3,
            FeatureKind::Shopping => 4,
            FeatureKind::Premium => 5,
            FeatureKind::Entertainment => 6,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FeatureKind::Travel => "has_travel_benefits",
            FeatureKind::Cashback => "has_cashback",
            FeatureKind::Points => "has_points",
            FeatureKind::Dining => "has_dining",
            FeatureKind::Shopping => "has_shopping",
            FeatureKind::Premium => "has_premium",
            FeatureKind::Entertainment => "has_entertainment",
        }
    }
}

/// Binary benefit indicators, one per [`FeatureKind`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub has_travel_benefits: bool,
    pub has_cashback: bool,
    pub has_points: bool,
    pub has_dining: bool,
    pub has_shopping: bool,
    pub has_premium: bool,
    pub has_entertainment: bool,
}

impl FeatureFlags {
    pub fn get(&self, kind: FeatureKind) -> bool {
        match kind {
            FeatureKind::Travel => self.has_travel_benefits,
            FeatureKind::Cashback => self.has_cashback,
            FeatureKind::Points => self.has_points,
            FeatureKind::Dining => self.has_dining,
            FeatureKind::Shopping => self.has_shopping,
            FeatureKind::Premium => self.has_premium,
            FeatureKind::Entertainment => self.has_entertainment,
        }
    }

    pub fn set(&mut self, kind: FeatureKind, value: bool) {
        match kind {
            FeatureKind::Travel => self.has_travel_benefits = value,
            FeatureKind::Cashback => self.has_cashback = value,
            FeatureKind::Points => self.has_points = value,
            FeatureKind::Dining => self.has_dining = value,
            FeatureKind::Shopping => self.has_shopping = value,
            FeatureKind::Premium => self.has_premium = value,
            FeatureKind::Entertainment => self.has_entertainment = value,
        }
    }

    /// 0/1 components in [`FEATURE_ORDER`].
    pub fn as_vector(&self) -> [f64; FEATURE_COUNT] {
        let mut vector = [0.0; FEATURE_COUNT];
        for kind in FEATURE_ORDER {
            if self.get(kind) {
                vector[kind.index()] = 1.0;
            }
        }
        vector
    }
}

/// Keyword alternations applied to a card's free-text fields, one row per flag.
const TRAVEL_KEYWORDS: &[&str] = &["travel", "airport", "lounge"];
const CASHBACK_KEYWORDS: &[&str] = &["cashback", "cash back"];
const POINTS_KEYWORDS: &[&str] = &["point", "reward"];
const DINING_KEYWORDS: &[&str] = &["dining", "restaurant"];
const SHOPPING_KEYWORDS: &[&str] = &["shopping", "discount"];
const PREMIUM_KEYWORDS: &[&str] = &["premium", "luxury", "exclusive"];
const ENTERTAINMENT_KEYWORDS: &[&str] = &["entertainment", "movies", "events"];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let haystack = text.to_lowercase();
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

/// Derive the card-side flags from the catalog's free-text benefit columns.
/// The flags are a pure function of the text and never change after load.
pub(crate) fn flags_from_card_text(
    reward_structure: &str,
    premium_services: &str,
    travel_benefits: &str,
    lifestyle_benefits: &str,
) -> FeatureFlags {
    FeatureFlags {
        has_travel_benefits: contains_any(travel_benefits, TRAVEL_KEYWORDS),
        has_cashback: contains_any(reward_structure, CASHBACK_KEYWORDS),
        has_points: contains_any(reward_structure, POINTS_KEYWORDS),
        has_dining: contains_any(lifestyle_benefits, DINING_KEYWORDS),
        has_shopping: contains_any(lifestyle_benefits, SHOPPING_KEYWORDS),
        has_premium: contains_any(premium_services, PREMIUM_KEYWORDS),
        has_entertainment: contains_any(lifestyle_benefits, ENTERTAINMENT_KEYWORDS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_keywords_case_insensitively() {
        let flags = flags_from_card_text(
            "5% CashBack on groceries",
            "Exclusive concierge",
            "Complimentary Airport Lounge access",
            "Dining vouchers and Movies",
        );
        assert!(flags.has_cashback);
        assert!(flags.has_premium);
        assert!(flags.has_travel_benefits);
        assert!(flags.has_dining);
        assert!(flags.has_entertainment);
        assert!(!flags.has_shopping);
    }

    #[test]
    fn cash_back_spelled_with_space_counts() {
        let flags = flags_from_card_text("1.5% cash back", "", "", "");
        assert!(flags.has_cashback);
        assert!(!flags.has_points);
    }

    #[test]
    fn points_flag_keys_off_reward_text() {
        let flags = flags_from_card_text("Earn 2 reward points per ₹100", "", "", "");
        assert!(flags.has_points);
    }

    #[test]
    fn empty_text_sets_nothing() {
        assert_eq!(flags_from_card_text("", "", "", ""), FeatureFlags::default());
    }

    #[test]
    fn vector_follows_fixed_order() {
        let mut flags = FeatureFlags::default();
        flags.set(FeatureKind::Travel, true);
        flags.set(FeatureKind::Premium, true);
        let vector = flags.as_vector();
        assert_eq!(vector, [1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    }
}
